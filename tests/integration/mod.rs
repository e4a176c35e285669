use std::sync::Arc;
use std::time::Duration;

use fakerbot::chat::keyboard::LocaleMenu;
use fakerbot::config::AppConfig;
use fakerbot::orchestration::UserLogBook;
use fakerbot::{
    CommandRouter, JsonlRecordStore, LocaleCatalog, RecordStore, RouterSettings, WorkspacePaths,
};
use tempfile::TempDir;

pub struct IntegrationHarness {
    _workspace: TempDir,
    pub paths: WorkspacePaths,
    pub store: Arc<JsonlRecordStore>,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        let paths = WorkspacePaths::at(workspace.path());
        paths.create_all().expect("failed to create workspace layout");
        let store = Arc::new(JsonlRecordStore::new(paths.history_file()));
        Self {
            _workspace: workspace,
            paths,
            store,
        }
    }

    pub fn settings(&self) -> RouterSettings {
        RouterSettings::from_config(&AppConfig::default())
    }

    pub fn user_logs(&self) -> UserLogBook {
        UserLogBook::new(&self.paths.logs_dir)
    }

    /// Router over the JSONL store with every built-in locale enabled.
    pub fn router(&self) -> CommandRouter {
        self.router_with(self.store.clone(), self.settings())
    }

    pub fn router_with(&self, store: Arc<dyn RecordStore>, settings: RouterSettings) -> CommandRouter {
        let catalog = Arc::new(LocaleCatalog::builtin().expect("built-in tables parse"));
        let menu = LocaleMenu::build(&AppConfig::default().locales.enabled, &catalog)
            .expect("default locales build a menu");
        CommandRouter::new(catalog, store, self.user_logs(), menu, settings)
    }

    pub fn short_store_timeout(&self) -> RouterSettings {
        let mut settings = self.settings();
        settings.store_timeout = Duration::from_millis(50);
        settings
    }
}

mod failures;
mod generate_flow;
mod history_flow;
mod log_flow;
mod regenerate_flow;
