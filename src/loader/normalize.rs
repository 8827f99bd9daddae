//! Shorthand normalization, run once before any type checking.
//!
//! A field given as a bare type name (`username: string`) becomes the record
//! `{type: string}`. Mappings pass through unchanged. Any other shape in field
//! position is rejected. Structural problems above field level (models not a
//! mapping, missing `fields`) are left for the build pass to report.

use serde_json::{Map, Value};
use tracing::debug;

use super::node::kind_name;
use crate::error::ConfigError;

pub fn normalize(document: &mut Value) -> Result<(), ConfigError> {
    let Some(models) = document.get_mut("models").and_then(Value::as_object_mut) else {
        return Ok(());
    };

    for (model_name, model) in models.iter_mut() {
        let Some(fields) = model.get_mut("fields").and_then(Value::as_object_mut) else {
            continue;
        };
        for (field_name, field) in fields.iter_mut() {
            normalize_field(model_name, field_name, field)?;
        }
    }
    Ok(())
}

fn normalize_field(model: &str, name: &str, field: &mut Value) -> Result<(), ConfigError> {
    match field {
        Value::Object(_) => Ok(()),
        Value::String(type_name) => {
            debug!(model, field = name, field_type = %type_name, "expanding bare field type");
            let mut record = Map::new();
            record.insert("type".to_string(), Value::String(std::mem::take(type_name)));
            *field = Value::Object(record);
            Ok(())
        }
        other => Err(ConfigError::InvalidFieldShape {
            path: format!("models.{model}.fields.{name}"),
            found: kind_name(other).to_string(),
        }),
    }
}
