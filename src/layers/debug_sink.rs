use std::{path::PathBuf, sync::Arc};

use axum::{Extension, middleware::AddExtension};
use tower::Layer;

use crate::{
    config::{LogSettings, SinkKind},
    sinks::debug::{DebugSinkRef, FileDebugSink, TracingDebugSink},
};

#[derive(Clone)]
pub struct DebugSinkLayer(pub DebugSinkRef);

impl DebugSinkLayer {
    pub fn tracing() -> Self {
        Self(Arc::new(TracingDebugSink::new()))
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self(Arc::new(FileDebugSink::new(path)))
    }

    pub fn from_settings(settings: &LogSettings) -> Self {
        match settings.sink {
            SinkKind::Tracing => Self::tracing(),
            SinkKind::File => Self::file(settings.path.clone()),
        }
    }
}

impl<S> Layer<S> for DebugSinkLayer {
    type Service = AddExtension<S, DebugSinkRef>;

    fn layer(&self, inner: S) -> Self::Service {
        Extension(self.0.clone()).layer(inner)
    }
}
