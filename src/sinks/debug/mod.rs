use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

pub mod file;
pub mod tracing;
pub use self::file::FileDebugSink;
pub use self::tracing::TracingDebugSink;

#[automock]
#[async_trait]
pub trait DebugSink: Send + Sync {
    /// Record one received payload
    async fn record(&self, payload: &Value) -> anyhow::Result<()>;
}

pub type DebugSinkRef = Arc<dyn DebugSink + Send + Sync>;
