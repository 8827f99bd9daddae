//! Construction of the canonical model from a normalized document.
//!
//! Sections are built in document-schema order and the first violation
//! aborts the load.

use serde_json::Map;
use tracing::debug;

use super::node::Node;
use crate::error::ConfigError;
use crate::http::{self, HttpMethod};
use crate::naming;
use crate::schema::{
    ApiSpec, AuthKind, AuthPolicy, CorsPolicy, CustomEndpoint, DatabaseConfig, DatabaseKind,
    EndpointSpec, ErrorFormat, ErrorPolicy, FieldSpec, ModelSpec, Operation, ProjectInfo,
    Vocabulary,
};

const CUSTOM_ENDPOINT_KEYS: [&str; 5] = ["name", "method", "path", "auth_required", "description"];

pub fn build(root: &Node<'_>) -> Result<ApiSpec, ConfigError> {
    root.mapping()?;

    let project = build_project(&root.require("project")?)?;
    let auth = match root.get("auth") {
        Some(node) => build_auth(&node)?,
        None => AuthPolicy::default(),
    };
    let models = build_models(&root.require("models")?)?;
    let endpoints = build_endpoints(&root.require("endpoints")?)?;
    let database = match root.get("database") {
        Some(node) => build_database(&node)?,
        None => DatabaseConfig::default(),
    };
    let error_handling = match root.get("error_handling") {
        Some(node) => build_error_policy(&node)?,
        None => ErrorPolicy::default(),
    };
    let cors = match root.get("cors") {
        Some(node) => build_cors(&node)?,
        None => CorsPolicy::default(),
    };

    Ok(ApiSpec::new(
        project,
        auth,
        models,
        endpoints,
        database,
        cors,
        error_handling,
    ))
}

/// `[A-Za-z][A-Za-z0-9_-]*`
fn is_project_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `[A-Za-z0-9_-]+`
fn is_path_segment(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn check_name(path: String, name: &str, valid: fn(&str) -> bool, what: &str) -> Result<(), ConfigError> {
    if valid(name) {
        Ok(())
    } else {
        Err(ConfigError::Validation {
            path,
            constraint: format!("'{name}' is not a valid {what}"),
        })
    }
}

fn build_project(node: &Node<'_>) -> Result<ProjectInfo, ConfigError> {
    node.mapping()?;
    let name = node.string("name")?;
    check_name(node.key_path("name"), &name, is_project_name, "project name")?;

    Ok(ProjectInfo {
        name,
        version: node.string_or("version", "1.0.0")?,
        base_url: node.string("base_url")?,
        description: node.opt_string("description")?,
    })
}

fn build_auth(node: &Node<'_>) -> Result<AuthPolicy, ConfigError> {
    node.mapping()?;
    let defaults = AuthPolicy::default();

    Ok(AuthPolicy {
        kind: node.vocabulary_or("type", AuthKind::Jwt)?,
        token_header: node.string_or("token_header", &defaults.token_header)?,
        token_prefix: node.nullable_string_or("token_prefix", defaults.token_prefix.as_deref())?,
        jwt_secret_env: node
            .nullable_string_or("jwt_secret_env", defaults.jwt_secret_env.as_deref())?,
        jwt_algorithm: node.string_or("jwt_algorithm", &defaults.jwt_algorithm)?,
        jwt_expiry: node.u64_or("jwt_expiry", defaults.jwt_expiry)?,
        oauth2_provider: node.opt_string("oauth2_provider")?,
        oauth2_scopes: node.string_list("oauth2_scopes")?,
        api_key_header: node
            .nullable_string_or("api_key_header", defaults.api_key_header.as_deref())?,
    })
}

// =============================================================================
// Models
// =============================================================================

fn build_models(node: &Node<'_>) -> Result<Vec<ModelSpec>, ConfigError> {
    node.entries()?
        .into_iter()
        .map(|(name, model)| build_model(name, &model))
        .collect()
}

fn build_model(name: &str, node: &Node<'_>) -> Result<ModelSpec, ConfigError> {
    check_name(node.path(), name, is_identifier, "model name")?;
    node.mapping()?;

    let fields = node
        .require("fields")?
        .entries()?
        .into_iter()
        .map(|(field_name, field)| build_field(field_name, &field))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ModelSpec {
        name: name.to_string(),
        fields,
        table: node.opt_string("table_name")?,
        description: node.opt_string("description")?,
        timestamps: node.bool_or("timestamps", true)?,
        soft_delete: node.bool_or("soft_delete", false)?,
    })
}

fn build_field(name: &str, node: &Node<'_>) -> Result<FieldSpec, ConfigError> {
    check_name(node.path(), name, is_identifier, "field name")?;

    let field = FieldSpec {
        name: name.to_string(),
        field_type: node.string("type")?,
        required: node.bool_or("required", true)?,
        nullable: node.bool_or("nullable", false)?,
        default: node.get("default").map(|n| n.value().clone()),
        description: node.opt_string("description")?,
        min_length: node.opt_u64("min_length")?,
        max_length: node.opt_u64("max_length")?,
        min_value: node.opt_f64("min_value")?,
        max_value: node.opt_f64("max_value")?,
        pattern: node.opt_string("pattern")?,
        foreign_key: node.opt_string("foreign_key")?,
        unique: node.bool_or("unique", false)?,
        index: node.bool_or("index", false)?,
    };

    if let (Some(min), Some(max)) = (field.min_length, field.max_length) {
        if min > max {
            return Err(ConfigError::Validation {
                path: node.key_path("min_length"),
                constraint: format!("must not exceed max_length ({max})"),
            });
        }
    }
    if let (Some(min), Some(max)) = (field.min_value, field.max_value) {
        if min > max {
            return Err(ConfigError::Validation {
                path: node.key_path("min_value"),
                constraint: format!("must not exceed max_value ({max})"),
            });
        }
    }

    Ok(field)
}

// =============================================================================
// Endpoints
// =============================================================================

fn build_endpoints(node: &Node<'_>) -> Result<Vec<EndpointSpec>, ConfigError> {
    node.items()?.iter().map(build_endpoint).collect()
}

fn build_endpoint(node: &Node<'_>) -> Result<EndpointSpec, ConfigError> {
    node.mapping()?;
    let resource = node.string("resource")?;
    check_name(
        node.key_path("resource"),
        &resource,
        is_path_segment,
        "resource path segment",
    )?;

    let operations = match node.get("operations") {
        Some(ops) => build_operations(&ops)?,
        None => Operation::DEFAULT_SET.to_vec(),
    };
    let auth_required = node.bool_or("auth_required", true)?;
    let page_size = node.u32_or("page_size", 20)?;
    let max_page_size = node.u32_or("max_page_size", 100)?;

    if page_size < 1 {
        return Err(ConfigError::Validation {
            path: node.key_path("page_size"),
            constraint: "must be at least 1".to_string(),
        });
    }
    if page_size > max_page_size {
        return Err(ConfigError::Validation {
            path: node.key_path("page_size"),
            constraint: format!("must not exceed max_page_size ({max_page_size})"),
        });
    }

    let custom_endpoints = match node.get("custom_endpoints") {
        Some(customs) => customs
            .items()?
            .iter()
            .map(|c| build_custom_endpoint(c, &resource, auth_required))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(EndpointSpec {
        model: node.string("model")?,
        operations,
        auth_required,
        rate_limit: node.opt_u32("rate_limit")?,
        pagination: node.bool_or("pagination", true)?,
        page_size,
        max_page_size,
        filters: node.string_list("filters")?,
        sort_fields: node.string_list("sort_fields")?,
        custom_endpoints,
        resource,
    })
}

fn build_operations(node: &Node<'_>) -> Result<Vec<Operation>, ConfigError> {
    let mut operations = Vec::new();
    for item in node.items()? {
        let op: Operation = item.as_vocabulary()?;
        if operations.contains(&op) {
            debug!(path = %item.path(), operation = op.as_str(), "dropping duplicate operation");
            continue;
        }
        operations.push(op);
    }
    if operations.is_empty() {
        return Err(node.invalid(format!(
            "must list at least one operation ({})",
            Operation::expected()
        )));
    }
    Ok(operations)
}

fn build_custom_endpoint(
    node: &Node<'_>,
    resource: &str,
    inherited_auth: bool,
) -> Result<CustomEndpoint, ConfigError> {
    let map = node.mapping()?;
    let name = node.string("name")?;

    let method = match node.get("method") {
        Some(m) => {
            let verb = m.as_string()?;
            HttpMethod::parse(&verb).ok_or_else(|| {
                m.invalid(format!(
                    "unknown value '{verb}', expected one of: GET, POST, PUT, PATCH, DELETE"
                ))
            })?
        }
        None => http::method_for(&name),
    };

    let path = match node.opt_string("path")? {
        Some(p) if p.starts_with('/') => p,
        Some(p) => format!("/{resource}/{p}"),
        None => format!("/{resource}/{}", naming::kebab_case(&name)),
    };

    let attributes: Map<_, _> = map
        .iter()
        .filter(|(key, _)| !CUSTOM_ENDPOINT_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(CustomEndpoint {
        method,
        path,
        auth_required: node.bool_or("auth_required", inherited_auth)?,
        description: node.opt_string("description")?,
        attributes,
        name,
    })
}

// =============================================================================
// Infrastructure policies
// =============================================================================

fn build_database(node: &Node<'_>) -> Result<DatabaseConfig, ConfigError> {
    node.mapping()?;
    let defaults = DatabaseConfig::default();

    Ok(DatabaseConfig {
        kind: node.vocabulary_or("type", DatabaseKind::Postgresql)?,
        host_env: node.string_or("host_env", &defaults.host_env)?,
        port_env: node.string_or("port_env", &defaults.port_env)?,
        name_env: node.string_or("name_env", &defaults.name_env)?,
        user_env: node.string_or("user_env", &defaults.user_env)?,
        password_env: node.string_or("password_env", &defaults.password_env)?,
        migrations: node.bool_or("migrations", defaults.migrations)?,
    })
}

fn build_error_policy(node: &Node<'_>) -> Result<ErrorPolicy, ConfigError> {
    node.mapping()?;

    Ok(ErrorPolicy {
        format: node.vocabulary_or("format", ErrorFormat::Standard)?,
        include_stack_trace: node.bool_or("include_stack_trace", false)?,
        log_errors: node.bool_or("log_errors", true)?,
        custom_errors: node
            .get("custom_errors")
            .map(|n| n.mapping().cloned())
            .transpose()?,
    })
}

fn build_cors(node: &Node<'_>) -> Result<CorsPolicy, ConfigError> {
    node.mapping()?;
    let defaults = CorsPolicy::default();

    let list_or = |key: &str, default: &Vec<String>| -> Result<Vec<String>, ConfigError> {
        match node.get(key) {
            Some(list) => list.as_string_list(),
            None => Ok(default.clone()),
        }
    };

    Ok(CorsPolicy {
        enabled: node.bool_or("enabled", defaults.enabled)?,
        origins: list_or("origins", &defaults.origins)?,
        methods: list_or("methods", &defaults.methods)?,
        headers: list_or("headers", &defaults.headers)?,
        credentials: node.bool_or("credentials", defaults.credentials)?,
        max_age: node.u64_or("max_age", defaults.max_age)?,
    })
}
