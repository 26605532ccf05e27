//! Registration of this extension with the host.
//!
//! The host calls [`register`] once at startup and merges what it gets back;
//! nothing here touches process-wide state.

use std::{collections::BTreeMap, path::PathBuf};

use axum::{Router, routing::post};

use crate::{
    config::ExtensionSettings, endpoint::Endpoints, handlers::debug_handler,
    layers::debug_sink::DebugSinkLayer,
};

pub const DEBUG_ENDPOINT: &str = "debug";

/// Node class name to display name. This extension contributes none.
pub type NodeClassMappings = BTreeMap<String, String>;

pub struct Registration {
    pub endpoints: Endpoints,
    pub routes: Router,
    pub node_class_mappings: NodeClassMappings,
    pub web_directory: Option<PathBuf>,
}

impl Registration {
    pub fn route_paths(&self) -> Vec<String> {
        vec![self.endpoints.path(DEBUG_ENDPOINT)]
    }
}

/// The returned routes carry their own sink, so the host only has to merge them.
pub fn register(settings: &ExtensionSettings, sink: DebugSinkLayer) -> Registration {
    let endpoints = Endpoints::new(settings.endpoint_prefix.clone());

    let routes = Router::new()
        .route(&endpoints.route(DEBUG_ENDPOINT), post(debug_handler))
        .layer(sink);

    Registration {
        endpoints,
        routes,
        node_class_mappings: NodeClassMappings::new(),
        web_directory: settings.web_directory.clone(),
    }
}
