use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use super::DebugSink;

/// Writes each payload as a structured `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDebugSink;

impl TracingDebugSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DebugSink for TracingDebugSink {
    async fn record(&self, payload: &Value) -> anyhow::Result<()> {
        info!(msg = "Debug payload", payload = %payload);

        Ok(())
    }
}
