//! Serve command - pre-render static routes, then serve the site

use std::path::Path;

use app::shell;
use axum::Router;
use color_eyre::eyre::{Result, WrapErr};
use leptos::config::get_configuration;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list_with_ssg};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Run the serve command.
///
/// Leptos options (`site-addr`, `site-root`, ...) come from the workspace
/// metadata or the `LEPTOS_*` environment variables.
pub async fn run(config_path: &Path) -> Result<()> {
    let (config, library) = crate::load_library(config_path)?;
    tracing::info!(site = %config.site.title, posts = library.len(), "Starting server");
    crate::install_library(library);

    let conf = get_configuration(None).wrap_err("Failed to read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let (routes, static_routes) = generate_route_list_with_ssg({
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone())
    });
    static_routes.generate(&leptos_options).await;
    tracing::debug!(routes = routes.len(), "Static routes generated");

    let router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");
    println!("Serving {} at http://{addr}", config.site.title);

    axum::serve(listener, router.into_make_service())
        .await
        .wrap_err("Server error")?;

    Ok(())
}
