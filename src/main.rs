use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;

mod app_configs;
mod errors;
mod settings;
mod tlsconf;

use app_configs::{registry::Registry, repo::FileConfigRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = settings::Settings::parse();
    let registry = match &settings.registry_file {
        Some(path) => Registry::from_file(path)?,
        None => Registry::builtin(),
    };
    log::info!(
        "Serving {} application configs from {}",
        registry.len(),
        settings.base_dir.display()
    );
    if !settings.base_dir.is_dir() {
        log::warn!(
            "Config base directory {} does not exist; every fetch will fail",
            settings.base_dir.display()
        );
    }

    let registry_data = web::Data::new(registry);
    let repo_data = web::Data::new(FileConfigRepository::new(settings.base_dir.clone()));
    let permissive_cors = settings.permissive_cors;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Condition::new(
                permissive_cors,
                actix_cors::Cors::permissive(),
            ))
            .wrap(middleware::Logger::new(
                "%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %T",
            ))
            .app_data(registry_data.clone())
            .app_data(repo_data.clone())
            .configure(app_configs::rest::web_setup)
            .default_service(web::route().to(errors::unknown_resource_error))
    });

    let server = match settings.tls() {
        Some(tls_paths) => {
            let tls_config = tlsconf::load_tls_config(&tls_paths)?;
            log::info!("Starting HTTP server at https://{} ", settings.bind);
            server.bind_rustls_0_22(settings.bind, tls_config)?
        }
        None => {
            log::info!("Starting HTTP server at http://{} ", settings.bind);
            server.bind(settings.bind)?
        }
    };

    server.run().await
}
