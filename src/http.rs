//! HTTP verb and URL shape derivation.
//!
//! The same mapping feeds every emitter, so independently generated server
//! and client code agree on the wire shape of each operation.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Parse a verb name, ignoring case.
    pub fn parse(verb: &str) -> Option<Self> {
        match verb.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "PATCH" => Some(HttpMethod::Patch),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP verb for an operation name. Unrecognized names map to GET.
pub fn method_for(operation: &str) -> HttpMethod {
    match operation {
        "create" => HttpMethod::Post,
        "read" | "list" | "search" => HttpMethod::Get,
        "update" => HttpMethod::Put,
        "delete" => HttpMethod::Delete,
        "patch" => HttpMethod::Patch,
        _ => HttpMethod::Get,
    }
}

/// URL path template for an operation on a resource.
pub fn endpoint_path(resource: &str, operation: &str) -> String {
    match operation {
        "read" | "update" | "delete" => format!("/{resource}/{{id}}"),
        "search" => format!("/{resource}/search"),
        _ => format!("/{resource}"),
    }
}

/// One abstract, target-agnostic route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub operation: String,
    pub method: HttpMethod,
    pub path: String,
}

impl Route {
    pub fn for_operation(resource: &str, operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            method: method_for(operation),
            path: endpoint_path(resource, operation),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
