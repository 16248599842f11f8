use crate::app::App;
use crate::config::SiteConfig;
use crate::db::init_db;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod announcements;
mod app;
mod clock;
mod config;
mod db;
mod domain;
mod errors;
mod page;
mod responses;
mod router;
mod site;
mod suppression;
mod templates;
mod visitor;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SiteConfig::from_env();

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "invalid announcement API configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_db(&app.db, &config.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    tracing::info!(addr = %config.listen_addr, "starting server");

    let server = Server::bind(&config.listen_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
