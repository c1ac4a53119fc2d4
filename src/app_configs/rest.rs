use super::{
    errors::ConfigError, models::AppConfigQuery, registry::Registry,
    repo::FileConfigRepository, resolver::resolve_app_config,
};
use actix_web::{
    get,
    web::{self, scope, Data, Json, Query, ServiceConfig},
    HttpRequest, HttpResponse,
};
use serde_json::{json, Value};

// Intermediate function to configure services
pub fn web_setup(cfg: &mut ServiceConfig) {
    cfg.service(health).service(
        scope("/RestLink").service(
            // Legacy clients still request index.php
            web::resource(vec!["", "/", "/index.php"])
                .route(web::get().to(get_app_config))
                .route(web::head().to(get_app_config)),
        ),
    );
}

// Parsed as raw pairs so a repeated or odd parameter never drops the others.
fn parse_query(query_string: &str) -> AppConfigQuery {
    match Query::<Vec<(String, String)>>::from_query(query_string) {
        Ok(pairs) => AppConfigQuery::from_pairs(pairs.into_inner()),
        Err(e) => {
            log::debug!("Ignoring unparseable query [{}]: {}", query_string, e);
            AppConfigQuery::default()
        }
    }
}

async fn get_app_config(
    req: HttpRequest,
    registry: Data<Registry>,
    repo: Data<FileConfigRepository>,
) -> Result<Json<Value>, ConfigError> {
    let query = parse_query(req.query_string());
    log::debug!(
        "Config requested for app [{}] version [{}]",
        query.app_id,
        query.app_version
    );

    match resolve_app_config(&registry, repo.get_ref(), &query.app_id).await {
        Ok(document) => {
            log::debug!("Serving {} config fields", document.fields().len());
            Ok(Json(document.into_value()))
        }
        Err(error) => {
            log::warn!("Config fetch failed: {}", error);
            Err(error)
        }
    }
}

#[get("/health")]
async fn health(registry: Data<Registry>) -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "healthy", "apps": registry.len()}))
}
