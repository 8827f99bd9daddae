//! Canonical model entity types.

use serde::Serialize;
use serde_json::{Map, Value};

use super::Vocabulary;
use crate::http::{self, HttpMethod, Route};
use crate::naming;

/// Root of the canonical model.
///
/// Only the loader constructs one; outside this crate it is read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct ApiSpec {
    pub project: ProjectInfo,
    pub auth: AuthPolicy,
    /// Declaration order; names are unique.
    pub models: Vec<ModelSpec>,
    /// Declaration order, significant for route tables.
    pub endpoints: Vec<EndpointSpec>,
    pub database: DatabaseConfig,
    pub cors: CorsPolicy,
    pub error_handling: ErrorPolicy,
}

impl ApiSpec {
    pub(crate) fn new(
        project: ProjectInfo,
        auth: AuthPolicy,
        models: Vec<ModelSpec>,
        endpoints: Vec<EndpointSpec>,
        database: DatabaseConfig,
        cors: CorsPolicy,
        error_handling: ErrorPolicy,
    ) -> Self {
        Self {
            project,
            auth,
            models,
            endpoints,
            database,
            cors,
            error_handling,
        }
    }

    pub fn model(&self, name: &str) -> Option<&ModelSpec> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Abstract route table of every endpoint, in endpoint order.
    pub fn routes(&self) -> Vec<Route> {
        self.endpoints.iter().flat_map(|e| e.routes()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Auth
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AuthKind {
    #[default]
    #[serde(rename = "jwt")]
    Jwt,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[serde(rename = "api_key")]
    ApiKey,
    #[serde(rename = "none")]
    None,
}

impl Vocabulary for AuthKind {
    const ALL: &'static [Self] = &[AuthKind::Jwt, AuthKind::OAuth2, AuthKind::ApiKey, AuthKind::None];

    fn as_str(&self) -> &'static str {
        match self {
            AuthKind::Jwt => "jwt",
            AuthKind::OAuth2 => "oauth2",
            AuthKind::ApiKey => "api_key",
            AuthKind::None => "none",
        }
    }
}

/// Authentication policy. Attributes that do not apply to `kind` are kept
/// as given and left for emitters to ignore.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthPolicy {
    #[serde(rename = "type")]
    pub kind: AuthKind,
    pub token_header: String,
    pub token_prefix: Option<String>,
    pub jwt_secret_env: Option<String>,
    pub jwt_algorithm: String,
    pub jwt_expiry: u64,
    pub oauth2_provider: Option<String>,
    pub oauth2_scopes: Vec<String>,
    pub api_key_header: Option<String>,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            kind: AuthKind::Jwt,
            token_header: "Authorization".to_string(),
            token_prefix: Some("Bearer".to_string()),
            jwt_secret_env: Some("JWT_SECRET".to_string()),
            jwt_algorithm: "HS256".to_string(),
            jwt_expiry: 3600,
            oauth2_provider: None,
            oauth2_scopes: Vec::new(),
            api_key_header: Some("X-API-Key".to_string()),
        }
    }
}

// =============================================================================
// Models
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    /// Abstract type tag; open vocabulary.
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
    pub nullable: bool,
    pub default: Option<Value>,
    pub description: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub pattern: Option<String>,
    pub foreign_key: Option<String>,
    pub unique: bool,
    pub index: bool,
}

impl FieldSpec {
    /// A field with the given type and every other attribute at its default.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            required: true,
            nullable: false,
            default: None,
            description: None,
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
            pattern: None,
            foreign_key: None,
            unique: false,
            index: false,
        }
    }

    fn implicit(name: &str, nullable: bool) -> Self {
        Self {
            required: false,
            nullable,
            ..Self::new(name, "datetime")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSpec {
    pub name: String,
    /// Declaration order; names are unique.
    pub fields: Vec<FieldSpec>,
    /// Explicit table name, if the document overrides the derived one.
    pub table: Option<String>,
    pub description: Option<String>,
    pub timestamps: bool,
    pub soft_delete: bool,
}

impl ModelSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Storage table name: the override, else the pluralized snake_case name.
    pub fn table_name(&self) -> String {
        match &self.table {
            Some(table) => table.clone(),
            None => naming::pluralize(&naming::snake_case(&self.name)),
        }
    }

    /// Bookkeeping fields implied by `timestamps` and `soft_delete` that the
    /// model does not declare itself.
    pub fn implicit_fields(&self) -> Vec<FieldSpec> {
        let mut implied = Vec::new();
        if self.timestamps {
            implied.push(FieldSpec::implicit("created_at", false));
            implied.push(FieldSpec::implicit("updated_at", false));
        }
        if self.soft_delete {
            implied.push(FieldSpec::implicit("deleted_at", true));
        }
        implied.retain(|f| self.field(&f.name).is_none());
        implied
    }

    /// Names of fields pointing at other models, with the model they name.
    pub fn foreign_keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|f| f.foreign_key.as_deref().map(|fk| (f.name.as_str(), fk)))
    }
}

// =============================================================================
// Endpoints
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    List,
    Search,
}

impl Operation {
    /// Operations an endpoint gets when it lists none.
    pub const DEFAULT_SET: [Operation; 5] = [
        Operation::List,
        Operation::Read,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn method(&self) -> HttpMethod {
        http::method_for(self.as_str())
    }

    pub fn path(&self, resource: &str) -> String {
        http::endpoint_path(resource, self.as_str())
    }
}

impl Vocabulary for Operation {
    const ALL: &'static [Self] = &[
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
        Operation::List,
        Operation::Search,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
            Operation::Search => "search",
        }
    }
}

/// A non-CRUD sub-endpoint declared under an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomEndpoint {
    pub name: String,
    pub method: HttpMethod,
    /// Absolute path template.
    pub path: String,
    pub auth_required: bool,
    pub description: Option<String>,
    /// Keys the document gave that have no dedicated attribute.
    pub attributes: Map<String, Value>,
}

impl CustomEndpoint {
    pub fn route(&self) -> Route {
        Route {
            operation: self.name.clone(),
            method: self.method,
            path: self.path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointSpec {
    pub resource: String,
    pub model: String,
    /// Never empty; duplicates removed, first occurrence kept.
    pub operations: Vec<Operation>,
    pub auth_required: bool,
    pub rate_limit: Option<u32>,
    pub pagination: bool,
    pub page_size: u32,
    pub max_page_size: u32,
    pub filters: Vec<String>,
    pub sort_fields: Vec<String>,
    pub custom_endpoints: Vec<CustomEndpoint>,
}

impl EndpointSpec {
    pub fn supports(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }

    /// Routes for the requested operations, in request order.
    pub fn routes(&self) -> Vec<Route> {
        self.operations
            .iter()
            .map(|op| Route::for_operation(&self.resource, op.as_str()))
            .collect()
    }
}

// =============================================================================
// Infrastructure policies
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    #[default]
    Postgresql,
    Mysql,
    Sqlite,
    Mongodb,
    Sqlserver,
}

impl Vocabulary for DatabaseKind {
    const ALL: &'static [Self] = &[
        DatabaseKind::Postgresql,
        DatabaseKind::Mysql,
        DatabaseKind::Sqlite,
        DatabaseKind::Mongodb,
        DatabaseKind::Sqlserver,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Postgresql => "postgresql",
            DatabaseKind::Mysql => "mysql",
            DatabaseKind::Sqlite => "sqlite",
            DatabaseKind::Mongodb => "mongodb",
            DatabaseKind::Sqlserver => "sqlserver",
        }
    }
}

/// Database selection. Connection details are environment variable names
/// read by the generated code, never literal credentials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub kind: DatabaseKind,
    pub host_env: String,
    pub port_env: String,
    pub name_env: String,
    pub user_env: String,
    pub password_env: String,
    pub migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            kind: DatabaseKind::Postgresql,
            host_env: "DB_HOST".to_string(),
            port_env: "DB_PORT".to_string(),
            name_env: "DB_NAME".to_string(),
            user_env: "DB_USER".to_string(),
            password_env: "DB_PASSWORD".to_string(),
            migrations: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorsPolicy {
    pub enabled: bool,
    pub origins: Vec<String>,
    pub methods: Vec<String>,
    pub headers: Vec<String>,
    pub credentials: bool,
    pub max_age: u64,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            origins: vec!["*".to_string()],
            methods: ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            headers: vec!["*".to_string()],
            credentials: true,
            max_age: 3600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorFormat {
    #[default]
    Standard,
    Rfc7807,
    Custom,
}

impl Vocabulary for ErrorFormat {
    const ALL: &'static [Self] = &[ErrorFormat::Standard, ErrorFormat::Rfc7807, ErrorFormat::Custom];

    fn as_str(&self) -> &'static str {
        match self {
            ErrorFormat::Standard => "standard",
            ErrorFormat::Rfc7807 => "rfc7807",
            ErrorFormat::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPolicy {
    pub format: ErrorFormat,
    pub include_stack_trace: bool,
    pub log_errors: bool,
    pub custom_errors: Option<Map<String, Value>>,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            format: ErrorFormat::Standard,
            include_stack_trace: false,
            log_errors: true,
            custom_errors: None,
        }
    }
}
