use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        })
    }
}

/// Per-user append-only text logs under `logs/user_<id>.log`.
#[derive(Debug, Clone)]
pub struct UserLogBook {
    dir: PathBuf,
}

impl UserLogBook {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, user_id: i64) -> PathBuf {
        self.dir.join(format!("user_{user_id}.log"))
    }

    pub async fn info(&self, user_id: i64, message: &str) -> Result<()> {
        self.append(user_id, LogLevel::Info, message).await
    }

    pub async fn error(&self, user_id: i64, message: &str) -> Result<()> {
        self.append(user_id, LogLevel::Error, message).await
    }

    pub async fn append(&self, user_id: i64, level: LogLevel, message: &str) -> Result<()> {
        let line = format_line(Local::now(), user_id, level, message);
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path_for(user_id);
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Full log contents, or `None` when the user has no log yet.
    pub async fn read(&self, user_id: i64) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(user_id);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS,mmm - user_<id> - LEVEL - message`
fn format_line(at: DateTime<Local>, user_id: i64, level: LogLevel, message: &str) -> String {
    // One event per line, whatever the message contains.
    let flat = message.replace(['\r', '\n'], " ");
    format!(
        "{} - user_{user_id} - {level} - {flat}\n",
        at.format("%Y-%m-%d %H:%M:%S,%3f")
    )
}
