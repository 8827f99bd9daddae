//! Externally supplied template set with the derivation helpers as filters.
//!
//! Templates are tera files named `<kind>/<target>/<file>.tera` relative to
//! the template directory. Autoescaping is off: the output is source code.

use std::collections::HashMap;
use std::error::Error as _;
use std::path::Path;

use tera::{Context, Tera, Value};
use tracing::debug;

use crate::error::GenerateError;
use crate::http;
use crate::naming;
use crate::type_map::{self, TargetLanguage};

pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    /// Load every `*.tera` file under `dir`.
    pub fn load(dir: &Path) -> Result<Self, GenerateError> {
        let load_error = |message: String| GenerateError::TemplateLoad {
            path: dir.display().to_string(),
            message,
        };

        if !dir.is_dir() {
            return Err(load_error("not a directory".to_string()));
        }

        let glob = format!("{}/**/*.tera", dir.display());
        let tera = Tera::new(&glob).map_err(|e| load_error(describe(&e)))?;
        let set = Self::configure(tera);
        debug!(dir = %dir.display(), templates = set.len(), "loaded templates");
        Ok(set)
    }

    /// Build a set from in-memory `(name, source)` pairs.
    pub fn from_raw(templates: &[(&str, &str)]) -> Result<Self, GenerateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())
            .map_err(|e| GenerateError::TemplateLoad {
                path: "<memory>".to_string(),
                message: describe(&e),
            })?;
        Ok(Self::configure(tera))
    }

    fn configure(mut tera: Tera) -> Self {
        tera.autoescape_on(vec![]);
        tera.register_filter("snake_case", snake_case);
        tera.register_filter("camel_case", camel_case);
        tera.register_filter("pascal_case", pascal_case);
        tera.register_filter("kebab_case", kebab_case);
        tera.register_filter("pluralize", pluralize);
        tera.register_filter("singularize", singularize);
        tera.register_filter("type_map", type_map_filter);
        tera.register_filter("http_method", http_method);
        tera.register_filter("endpoint_path", endpoint_path);
        tera.register_filter("example_value", example_value);
        Self { tera }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.tera.get_template_names().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render a template. The error is a message including every cause.
    pub fn render(&self, name: &str, context: &Context) -> Result<String, String> {
        self.tera.render(name, context).map_err(|e| describe(&e))
    }
}

/// tera's Display shows only the outermost error; walk the source chain.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// =============================================================================
// Filters
// =============================================================================

fn string_input<'v>(value: &'v Value, filter: &str) -> tera::Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("Filter `{filter}` expects a string, got {value}")))
}

fn string_arg<'a>(args: &'a HashMap<String, Value>, filter: &str, name: &str) -> tera::Result<&'a str> {
    args.get(name).and_then(Value::as_str).ok_or_else(|| {
        tera::Error::msg(format!("Filter `{filter}` requires a string argument `{name}`"))
    })
}

macro_rules! string_filter {
    ($name:ident, $transform:path) => {
        fn $name(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
            let input = string_input(value, stringify!($name))?;
            Ok(Value::String($transform(input)))
        }
    };
}

string_filter!(snake_case, naming::snake_case);
string_filter!(camel_case, naming::camel_case);
string_filter!(pascal_case, naming::pascal_case);
string_filter!(kebab_case, naming::kebab_case);
string_filter!(pluralize, naming::pluralize);
string_filter!(singularize, naming::singularize);

fn type_map_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let abstract_type = string_input(value, "type_map")?;
    let lang = string_arg(args, "type_map", "lang")?;
    let language = TargetLanguage::from_name(lang)
        .ok_or_else(|| tera::Error::msg(format!("Filter `type_map`: unknown language `{lang}`")))?;
    Ok(Value::String(type_map::map_type(abstract_type, language)))
}

fn http_method(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let operation = string_input(value, "http_method")?;
    Ok(Value::String(http::method_for(operation).as_str().to_string()))
}

fn endpoint_path(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let resource = string_input(value, "endpoint_path")?;
    let operation = string_arg(args, "endpoint_path", "operation")?;
    Ok(Value::String(http::endpoint_path(resource, operation)))
}

fn example_value(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let abstract_type = string_input(value, "example_value")?;
    Ok(type_map::example_value(abstract_type))
}
