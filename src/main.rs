use std::time::Duration;

use axum::{
    ServiceExt,
    body::Body,
    extract::Request,
    http::{Response, header},
};
use comfy_debug_endpoint::{
    app::App, config::ServerConfig, extension::register, layers::debug_sink::DebugSinkLayer,
    utils::get_request_id,
};
use time::UtcOffset;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
    trace::TraceLayer,
};
use tracing::{Span, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_timer(fmt::time::OffsetTime::new(
                    UtcOffset::UTC,
                    time::format_description::well_known::Rfc3339,
                ))
                .with_level(true)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(EnvFilter::from_default_env())
        .try_init()?;

    let settings = ServerConfig::load()?;
    info!(
        msg = "Loaded configuration",
        bind_address = %settings.server.bind_address,
        endpoint_prefix = %settings.extension.endpoint_prefix,
        sink = ?settings.log.sink,
    );

    let registration = register(
        &settings.extension,
        DebugSinkLayer::from_settings(&settings.log),
    );
    info!(
        msg = "Registered extension",
        routes = ?registration.route_paths(),
        node_classes = registration.node_class_mappings.len(),
        web_directory = ?registration.web_directory,
    );

    let app = App::new(registration)
        .router()
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &Request<Body>, _span: &Span| {
                    info!(
                        msg = "Request initiated",
                        req_id = %get_request_id(req.extensions()),
                        method = %req.method(),
                        uri = %req.uri(),
                    )
                })
                .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        msg = "Request processed",
                        req_id = %get_request_id(res.extensions()),
                        status = %res.status().as_u16(),
                        latency = ?latency
                    )
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid::default()))
        .layer(SetSensitiveRequestHeadersLayer::new([
            header::AUTHORIZATION,
            header::COOKIE,
        ]));

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_address).await?;

    info!(msg = "Starting server", addr = %listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
