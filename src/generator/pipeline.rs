//! The generation run: load, validate, then each requested target in turn.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::artifact::ArtifactSource;
use super::context::RenderContext;
use super::emitters::Emitter;
use super::targets::{self, Target, TargetKind};
use super::templates::TemplateSet;
use super::writer::{checked_relative, OutputWriter};
use crate::error::{Error, GenerateError};
use crate::loader;
use crate::schema::ApiSpec;

/// Progress of a run. Logged at debug level as the run advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NotStarted,
    Loading,
    Validated,
    Generating,
    Done,
    Failed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::NotStarted => "not_started",
            Stage::Loading => "loading",
            Stage::Validated => "validated",
            Stage::Generating => "generating",
            Stage::Done => "done",
            Stage::Failed => "failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a `generate` run needs.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub config: PathBuf,
    pub backend: Option<String>,
    pub frontend: Option<String>,
    pub output: PathBuf,
    pub templates: PathBuf,
}

/// Files one target wrote, relative to its own root.
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub kind: TargetKind,
    pub target: String,
    pub root: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub project: String,
    pub output: String,
    pub targets: Vec<TargetReport>,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.targets.iter().map(|t| t.files.len()).sum()
    }
}

/// Resolve the requested targets, backend first.
///
/// Fails before anything is loaded or written when no target is requested or
/// an identifier is unknown.
pub fn resolve_targets(
    backend: Option<&str>,
    frontend: Option<&str>,
) -> Result<Vec<Target>, GenerateError> {
    if backend.is_none() && frontend.is_none() {
        return Err(GenerateError::NoTargetRequested);
    }

    let mut resolved = Vec::new();
    if let Some(id) = backend {
        resolved.push(targets::resolve(TargetKind::Backend, id)?);
    }
    if let Some(id) = frontend {
        resolved.push(targets::resolve(TargetKind::Frontend, id)?);
    }
    Ok(resolved)
}

/// Run a full generation from a document on disk.
pub fn run(request: &GenerateRequest) -> Result<GenerationReport, Error> {
    debug!(stage = %Stage::NotStarted, config = %request.config.display());
    let requested = resolve_targets(request.backend.as_deref(), request.frontend.as_deref())?;

    debug!(stage = %Stage::Loading, config = %request.config.display());
    let spec = loader::load_path(&request.config)?;
    debug!(stage = %Stage::Validated, project = %spec.project.name);

    let templates = TemplateSet::load(&request.templates)?;
    Ok(generate(&spec, &requested, &templates, &request.output)?)
}

/// Generate each target into `output/<kind>`, in order.
///
/// The first failing target stops the run. Files written by targets that
/// already finished stay on disk.
pub fn generate(
    spec: &ApiSpec,
    requested: &[Target],
    templates: &TemplateSet,
    output: &Path,
) -> Result<GenerationReport, GenerateError> {
    let ctx = RenderContext::new(spec);
    let mut report = GenerationReport {
        project: spec.project.name.clone(),
        output: output.display().to_string(),
        targets: Vec::with_capacity(requested.len()),
    };

    for target in requested {
        let root = output.join(target.kind.subdir());
        report.targets.push(generate_target(target, &ctx, templates, &root)?);
    }
    Ok(report)
}

/// Render and write every artifact of one target below `root`.
pub fn generate_target(
    target: &Target,
    ctx: &RenderContext<'_>,
    templates: &TemplateSet,
    root: &Path,
) -> Result<TargetReport, GenerateError> {
    debug!(stage = %Stage::Generating, kind = %target.kind, target = target.identifier);

    let result = write_plan(target, ctx, templates, root);
    match &result {
        Ok(files) => {
            debug!(stage = %Stage::Done, kind = %target.kind, target = target.identifier);
            info!(
                kind = %target.kind,
                target = target.identifier,
                files = files.len(),
                root = %root.display(),
                "target generated"
            );
        }
        Err(e) => {
            debug!(stage = %Stage::Failed, kind = %target.kind, target = target.identifier, error = %e);
        }
    }

    Ok(TargetReport {
        kind: target.kind,
        target: target.identifier.to_string(),
        root: root.display().to_string(),
        files: result?,
    })
}

fn write_plan(
    target: &Target,
    ctx: &RenderContext<'_>,
    templates: &TemplateSet,
    root: &Path,
) -> Result<Vec<String>, GenerateError> {
    let plan = target.emitter.plan(ctx);
    let language = target.emitter.language();
    let writer = OutputWriter::new(root);
    let mut written = Vec::with_capacity(plan.len());

    for artifact in plan.artifacts() {
        let render_error = |message: String| GenerateError::Render {
            target: target.identifier.to_string(),
            artifact: artifact.path.clone(),
            message,
        };

        let relative = checked_relative(&artifact.path).map_err(render_error)?;
        let content = match &artifact.source {
            ArtifactSource::Template(name) => {
                let scoped = ctx.scoped(target.identifier, language, artifact.scope);
                templates.render(name, &scoped).map_err(render_error)?
            }
            ArtifactSource::Literal(content) => content.clone(),
        };

        writer
            .write(&relative, &content)
            .map_err(|e| GenerateError::Write {
                target: target.identifier.to_string(),
                path: artifact.path.clone(),
                message: e.to_string(),
            })?;
        info!(target = target.identifier, path = %artifact.path, "generated");
        written.push(artifact.path.clone());
    }

    Ok(written)
}
