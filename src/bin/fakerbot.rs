use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use fakerbot::chat::commands::COMMAND_DESCRIPTIONS;
use fakerbot::chat::keyboard::LocaleMenu;
use fakerbot::config::{ensure_workspace_structure, load_from};
use fakerbot::orchestration::UserLogBook;
use fakerbot::telemetry::init_tracing;
use fakerbot::{CommandRouter, JsonlRecordStore, LocaleCatalog, RouterSettings, TelegramClient};
use tokio::task::JoinSet;

const RETRY_DELAY: Duration = Duration::from_secs(3);
/// How long in-flight handlers may run after Ctrl-C.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    let paths = ensure_workspace_structure()?;
    let config = load_from(&paths.config_file())?;
    init_tracing(&config.logging);

    let token = config.resolved_bot_token().context(
        "No bot token configured. Run `setup --token <token>` or set FAKERBOT_BOT_TOKEN.",
    )?;
    let catalog = Arc::new(LocaleCatalog::builtin()?);
    let menu = LocaleMenu::build(&config.locales.enabled, &catalog)
        .context("Invalid [locales] configuration")?;

    let client = Arc::new(TelegramClient::new(
        &config.telegram.api_base,
        &token,
        Duration::from_secs(config.telegram.poll_timeout_secs),
        config.timeouts.transport(),
    )?);
    let me = client.get_me().await.context("Bot token was rejected")?;
    if let Err(err) = client.set_my_commands(&COMMAND_DESCRIPTIONS).await {
        tracing::warn!(error = %err, "Failed to register bot commands");
    }

    let mut settings = RouterSettings::from_config(&config);
    settings.bot_username = me.username.clone();
    let store = Arc::new(JsonlRecordStore::new(paths.history_file()));
    let router = Arc::new(CommandRouter::new(
        catalog,
        store,
        UserLogBook::new(&paths.logs_dir),
        menu,
        settings,
    ));

    tracing::info!(
        bot = me.username.as_deref().unwrap_or(""),
        workspace = %paths.root.display(),
        locales = router.menu().locales().len(),
        "Bot is running"
    );

    let mut offset: Option<i64> = None;
    let mut handlers = JoinSet::new();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!(in_flight = handlers.len(), "Shutting down");
                break;
            }
            Some(joined) = handlers.join_next(), if !handlers.is_empty() => {
                log_join_failure(joined);
            }
            polled = client.get_updates(offset) => match polled {
                Ok(updates) => {
                    for raw in updates {
                        offset = Some(raw.update_id + 1);
                        let Some(update) = raw.into_update() else {
                            continue;
                        };
                        let router = Arc::clone(&router);
                        let client = Arc::clone(&client);
                        handlers.spawn(async move {
                            router.handle(client.as_ref(), update).await;
                        });
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Polling failed; retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }
    drain_handlers(&mut handlers, SHUTDOWN_GRACE).await;
    Ok(())
}

/// Waits up to `grace` for spawned handlers, then aborts the rest.
/// Returns how many were aborted.
async fn drain_handlers(handlers: &mut JoinSet<()>, grace: Duration) -> usize {
    let drained = tokio::time::timeout(grace, async {
        while let Some(joined) = handlers.join_next().await {
            log_join_failure(joined);
        }
    })
    .await;
    if drained.is_ok() {
        return 0;
    }
    let remaining = handlers.len();
    tracing::warn!(remaining, "Aborting handlers still running after shutdown grace");
    handlers.abort_all();
    while handlers.join_next().await.is_some() {}
    remaining
}

fn log_join_failure(joined: Result<(), tokio::task::JoinError>) {
    if let Err(err) = joined {
        tracing::error!(error = %err, "Update handler panicked");
    }
}
