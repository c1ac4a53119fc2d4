use super::{
    errors::ConfigError,
    models::{AppIdentity, ConfigDocument},
    registry::Registry,
    repo::ConfigRepository,
};

/// Looks `app_id` up, loads its document and stamps the `app` identity on it.
pub async fn resolve_app_config<R>(
    registry: &Registry,
    repo: &R,
    app_id: &str,
) -> Result<ConfigDocument, ConfigError>
where
    R: ConfigRepository + ?Sized,
{
    let entry = registry
        .lookup(app_id)
        .ok_or_else(|| ConfigError::UnknownApp(String::from(app_id)))?;
    let document = repo.load_document(entry).await?;
    Ok(document.with_identity(&AppIdentity::from(entry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_configs::models::AppRegistryEntry;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::path::PathBuf;

    struct StaticRepo(Option<Value>);

    #[async_trait]
    impl ConfigRepository for StaticRepo {
        async fn load_document(&self, entry: &AppRegistryEntry) -> Result<ConfigDocument, ConfigError> {
            match &self.0 {
                Some(Value::Object(fields)) => Ok(ConfigDocument::new(fields.clone())),
                _ => Err(ConfigError::FileNotFound(PathBuf::from(&entry.config_path))),
            }
        }
    }

    #[actix_web::test]
    async fn injects_identity_of_matched_entry() {
        let registry = Registry::builtin();
        let repo = StaticRepo(Some(json!({"apiKey": "k", "lang": "fr"})));

        let doc = resolve_app_config(&registry, &repo, "47cb8b8c-7efc-11ee-905d-836d044cadfc")
            .await
            .unwrap();
        assert_eq!(
            doc.into_value(),
            json!({
                "apiKey": "k",
                "lang": "fr",
                "app": {"id": "47cb8b8c-7efc-11ee-905d-836d044cadfc", "name": "Blagues"}
            })
        );
    }

    #[actix_web::test]
    async fn unknown_id_never_reaches_repository() {
        let registry = Registry::builtin();
        let repo = StaticRepo(Some(json!({"a": 1})));

        for app_id in ["", "nope"] {
            let result = resolve_app_config(&registry, &repo, app_id).await;
            assert!(matches!(result, Err(ConfigError::UnknownApp(_))));
        }
    }

    #[actix_web::test]
    async fn repository_errors_propagate() {
        let registry = Registry::builtin();
        let repo = StaticRepo(None);
        let result =
            resolve_app_config(&registry, &repo, "64d68394-7efc-11ee-abd5-1353e606e9ea").await;
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
