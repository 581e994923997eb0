//! Prerender command - write static routes to the site root

use std::path::Path;

use app::shell;
use color_eyre::eyre::{Result, WrapErr};
use leptos::config::get_configuration;
use leptos_axum::generate_route_list_with_ssg;
use mxnan_core::BlogSource;

/// Run the prerender command.
pub async fn run(config_path: &Path) -> Result<()> {
    let (config, library) = crate::load_library(config_path)?;
    let slugs = library.slugs();
    crate::install_library(library);

    let conf = get_configuration(None).wrap_err("Failed to read Leptos configuration")?;
    let leptos_options = conf.leptos_options;

    let (_routes, static_routes) = generate_route_list_with_ssg({
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone())
    });
    static_routes.generate(&leptos_options).await;

    tracing::info!(posts = slugs.len(), root = %leptos_options.site_root, "Pre-rendered blog routes");
    println!("Pre-rendered {} post(s) into {}", slugs.len(), leptos_options.site_root);
    for slug in &slugs {
        println!("  {}", config.url_for(&format!("blogs/{slug}")));
    }

    Ok(())
}
