//! Supported target identifiers and their lookup.

use std::fmt;

use serde::Serialize;

use super::artifact::ArtifactSource;
use super::context::RenderContext;
use super::emitters::{self, Emitter, TargetEmitter};
use crate::error::GenerateError;
use crate::schema::ApiSpec;

/// Backend (server) identifiers, in listing order.
pub const BACKEND_TARGETS: &[&str] = &["django", "express", "dotnet", "springboot", "laravel"];

/// Frontend (client SDK) identifiers, in listing order.
pub const FRONTEND_TARGETS: &[&str] = &[
    "javascript",
    "typescript",
    "flutter",
    "swift",
    "kotlin",
    "avaloniaui",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Backend,
    Frontend,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Backend => "backend",
            TargetKind::Frontend => "frontend",
        }
    }

    /// Directory under the output root that this kind of target owns.
    pub fn subdir(&self) -> &'static str {
        self.as_str()
    }

    pub fn identifiers(&self) -> &'static [&'static str] {
        match self {
            TargetKind::Backend => BACKEND_TARGETS,
            TargetKind::Frontend => FRONTEND_TARGETS,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested target bound to the emitter that serves it.
#[derive(Debug, Clone)]
pub struct Target {
    pub kind: TargetKind,
    /// Identifier as listed in the target tables.
    pub identifier: &'static str,
    pub(crate) emitter: TargetEmitter,
}

impl Target {
    /// Template names this target renders for `spec`, in generation order,
    /// without duplicates.
    pub fn required_templates(&self, spec: &ApiSpec) -> Vec<String> {
        let ctx = RenderContext::new(spec);
        let mut names: Vec<String> = Vec::new();
        for artifact in self.emitter.plan(&ctx).artifacts() {
            if let ArtifactSource::Template(name) = &artifact.source {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}

/// Look up a target identifier, ignoring case.
pub fn resolve(kind: TargetKind, identifier: &str) -> Result<Target, GenerateError> {
    let wanted = identifier.to_ascii_lowercase();
    let unsupported = || GenerateError::UnsupportedTarget {
        kind,
        identifier: identifier.to_string(),
        supported: kind.identifiers().join(", "),
    };

    let known = kind
        .identifiers()
        .iter()
        .copied()
        .find(|id| *id == wanted)
        .ok_or_else(unsupported)?;
    let emitter = emitters::emitter_for(kind, known).ok_or_else(unsupported)?;

    Ok(Target {
        kind,
        identifier: known,
        emitter,
    })
}
