use axum::{Extension, body::Bytes};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{error::DebugError, sinks::debug::DebugSinkRef};

/// Parses the body as JSON of any shape and hands it to the sink.
///
/// Content type is not checked. An empty or non-JSON body fails before the
/// sink is touched.
#[instrument(name = "handlers.debug", skip_all, fields(len = body.len()))]
pub async fn debug_handler(
    Extension(sink): Extension<DebugSinkRef>,
    body: Bytes,
) -> Result<(), DebugError> {
    let payload: Value = serde_json::from_slice(&body)?;
    debug!(msg = "Parsed debug payload", kind = kind_of(&payload));

    sink.record(&payload).await.map_err(DebugError::Sink)?;

    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
