use crate::{
    backend::{config::KisanConfig, error::BackendResult},
    frontend::app::{App, shell},
};
use anyhow::anyhow;
use assets::file_and_error_handler;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use log::info;
use std::net::{SocketAddr, ToSocketAddrs};
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::compression::CompressionLayer;

mod assets;
pub mod config;
pub mod error;

pub async fn start(
    config: KisanConfig,
    override_bind: Option<SocketAddr>,
    notify_start: Option<oneshot::Sender<()>>,
) -> BackendResult<()> {
    let mut leptos_options = get_config_from_str(include_str!("../../Cargo.toml"))?;
    leptos_options.site_addr = config
        .bind
        .to_socket_addrs()?
        .next()
        .ok_or(anyhow!("invalid bind address"))?;
    if let Some(override_bind) = override_bind {
        leptos_options.site_addr = override_bind;
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler)
        .with_state(leptos_options)
        .layer(CompressionLayer::new());

    info!("Listening on {}", &addr);
    let listener = TcpListener::bind(&addr).await?;
    if let Some(notify_start) = notify_start {
        notify_start.send(()).expect("send oneshot");
    }
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
