//! Cross-reference checks over a built model.
//!
//! Foreign keys and endpoint models must name declared models. Filter and
//! sort fields that do not exist on the endpoint's model are only warned
//! about.

use tracing::warn;

use crate::error::ConfigError;
use crate::schema::ApiSpec;

pub fn check(spec: &ApiSpec) -> Result<(), ConfigError> {
    for model in &spec.models {
        for (field, target) in model.foreign_keys() {
            if spec.model(target).is_none() {
                return Err(ConfigError::Validation {
                    path: format!("models.{}.fields.{}.foreign_key", model.name, field),
                    constraint: format!("references undeclared model '{target}'"),
                });
            }
        }
    }

    for (i, endpoint) in spec.endpoints.iter().enumerate() {
        let Some(model) = spec.model(&endpoint.model) else {
            return Err(ConfigError::Validation {
                path: format!("endpoints[{i}].model"),
                constraint: format!("references undeclared model '{}'", endpoint.model),
            });
        };

        let implicit = model.implicit_fields();
        let known = |name: &str| {
            name == "id" || model.field(name).is_some() || implicit.iter().any(|f| f.name == name)
        };
        for (key, names) in [("filters", &endpoint.filters), ("sort_fields", &endpoint.sort_fields)] {
            for name in names.iter().filter(|n| !known(n)) {
                warn!(
                    path = %format!("endpoints[{i}].{key}"),
                    field = %name,
                    model = %model.name,
                    "field is not declared on the endpoint's model"
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::ConfigError;
    use crate::loader::{load_str, SourceFormat};

    #[test]
    fn test_unknown_foreign_key_is_rejected() {
        let doc = r#"
project: {name: blog, base_url: /api}
models:
  Post:
    fields:
      author_id: {type: integer, foreign_key: Author}
endpoints: []
"#;
        let err = load_str(doc, SourceFormat::Yaml).unwrap_err();
        assert_eq!(err.path(), Some("models.Post.fields.author_id.foreign_key"));
        assert!(err.to_string().contains("Author"));
    }

    #[test]
    fn test_unknown_endpoint_model_is_rejected() {
        let doc = r#"
project: {name: blog, base_url: /api}
models:
  Post: {fields: {title: string}}
endpoints:
  - {resource: posts, model: Post}
  - {resource: comments, model: Comment}
"#;
        let err = load_str(doc, SourceFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref path, .. } if path == "endpoints[1].model"));
    }

    #[test]
    fn test_unknown_filter_field_only_warns() {
        let doc = r#"
project: {name: blog, base_url: /api}
models:
  Post: {fields: {title: string}}
endpoints:
  - {resource: posts, model: Post, filters: [title, rating], sort_fields: [created_at]}
"#;
        let spec = load_str(doc, SourceFormat::Yaml).unwrap();
        assert_eq!(spec.endpoints[0].filters, vec!["title", "rating"]);
    }
}
