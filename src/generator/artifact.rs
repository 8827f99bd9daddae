//! Artifact plans: the ordered list of files an emitter produces.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

/// What part of the model an artifact renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum Scope {
    Project,
    /// Index into `ApiSpec::models`.
    Model(usize),
    /// Index into `ApiSpec::endpoints`.
    Endpoint(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Template name, resolved in the template set.
    Template(String),
    /// Fixed content that needs no template.
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Relative output path with `/` separators.
    pub path: String,
    pub source: ArtifactSource,
    pub scope: Scope,
}

/// Ordered artifacts with at most one entry per output path.
///
/// The first claim on a path wins; later claims are dropped.
#[derive(Debug, Clone, Default)]
pub struct ArtifactPlan {
    template_prefix: String,
    artifacts: Vec<Artifact>,
    claimed: BTreeSet<String>,
}

impl ArtifactPlan {
    /// A plan whose template names live under `template_prefix`
    /// (for example `backend/django`).
    pub fn new(template_prefix: impl Into<String>) -> Self {
        Self {
            template_prefix: template_prefix.into(),
            ..Self::default()
        }
    }

    /// Add an artifact rendered from `<prefix>/<file>.tera`.
    pub fn template(&mut self, path: impl Into<String>, file: &str, scope: Scope) -> &mut Self {
        let name = format!("{}/{}.tera", self.template_prefix, file);
        self.push(Artifact {
            path: path.into(),
            source: ArtifactSource::Template(name),
            scope,
        })
    }

    /// Add an artifact with fixed content.
    pub fn literal(&mut self, path: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.push(Artifact {
            path: path.into(),
            source: ArtifactSource::Literal(content.into()),
            scope: Scope::Project,
        })
    }

    fn push(&mut self, artifact: Artifact) -> &mut Self {
        if self.claimed.insert(artifact.path.clone()) {
            self.artifacts.push(artifact);
        } else {
            debug!(path = %artifact.path, "path already planned, dropping duplicate artifact");
        }
        self
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_names_use_prefix() {
        let mut plan = ArtifactPlan::new("backend/django");
        plan.template("manage.py", "manage.py", Scope::Project);
        assert_eq!(
            plan.artifacts()[0].source,
            ArtifactSource::Template("backend/django/manage.py.tera".to_string())
        );
    }

    #[test]
    fn test_first_claim_wins() {
        let mut plan = ArtifactPlan::new("backend/dotnet");
        plan.template("Controllers/PostController.cs", "Controller.cs", Scope::Endpoint(0))
            .template("Controllers/PostController.cs", "Controller.cs", Scope::Endpoint(2))
            .literal("Controllers/PostController.cs", "ignored");

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.artifacts()[0].scope, Scope::Endpoint(0));
    }

    #[test]
    fn test_order_is_insertion_order() {
        let mut plan = ArtifactPlan::new("frontend/swift");
        plan.template("b.swift", "b.swift", Scope::Project)
            .literal("a.txt", "a");
        let paths: Vec<_> = plan.paths().collect();
        assert_eq!(paths, vec!["b.swift", "a.txt"]);
        assert!(!plan.is_empty());
    }
}
