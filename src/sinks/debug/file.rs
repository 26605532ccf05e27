use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};

use super::DebugSink;

/// Appends each payload to a file as one line of compact JSON.
pub struct FileDebugSink {
    path: PathBuf,
    // Held across the whole append so lines from concurrent requests never interleave.
    write_lock: Mutex<()>,
}

impl FileDebugSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl DebugSink for FileDebugSink {
    async fn record(&self, payload: &Value) -> anyhow::Result<()> {
        let mut line = serde_json::to_vec(payload)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("opening {}", self.path.display()))?;

        file.write_all(&line)
            .await
            .with_context(|| format!("appending to {}", self.path.display()))?;
        file.flush().await?;

        Ok(())
    }
}
