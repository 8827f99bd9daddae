//! Per-target emitters.
//!
//! An emitter only decides *which* files its target consists of: it turns the
//! shared [`RenderContext`] into an [`ArtifactPlan`]. Rendering and writing
//! are the pipeline's job, so every target gets the same error handling and
//! path checks.
//!
//! File stems follow each platform's convention: class-per-file platforms use
//! the Pascal form of the model name, Python and Dart use the snake form.

mod backend;
mod frontend;

pub use backend::{Django, Dotnet, Express, Laravel, SpringBoot};
pub use frontend::{AvaloniaUi, Flutter, Javascript, Kotlin, Swift};

use enum_dispatch::enum_dispatch;

use super::artifact::{ArtifactPlan, Scope};
use super::context::{EndpointView, ModelView, RenderContext};
use super::targets::TargetKind;
use crate::type_map::TargetLanguage;

#[enum_dispatch]
pub trait Emitter {
    /// Identifier of the emitter, also the template directory name.
    fn identifier(&self) -> &'static str;

    /// Language the target's code is written in, for `type_map`.
    fn language(&self) -> TargetLanguage;

    /// Files this target consists of, in generation order.
    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan;
}

#[enum_dispatch(Emitter)]
#[derive(Debug, Clone)]
pub enum TargetEmitter {
    Django,
    Express,
    Dotnet,
    SpringBoot,
    Laravel,
    Javascript,
    Flutter,
    Swift,
    Kotlin,
    AvaloniaUi,
}

/// Emitter serving a listed target identifier.
pub(crate) fn emitter_for(kind: TargetKind, identifier: &str) -> Option<TargetEmitter> {
    let emitter: TargetEmitter = match (kind, identifier) {
        (TargetKind::Backend, "django") => Django.into(),
        (TargetKind::Backend, "express") => Express.into(),
        (TargetKind::Backend, "dotnet") => Dotnet.into(),
        (TargetKind::Backend, "springboot") => SpringBoot.into(),
        (TargetKind::Backend, "laravel") => Laravel.into(),
        (TargetKind::Frontend, "javascript" | "typescript") => Javascript.into(),
        (TargetKind::Frontend, "flutter") => Flutter.into(),
        (TargetKind::Frontend, "swift") => Swift.into(),
        (TargetKind::Frontend, "kotlin") => Kotlin.into(),
        (TargetKind::Frontend, "avaloniaui") => AvaloniaUi.into(),
        _ => return None,
    };
    Some(emitter)
}

fn new_plan(kind: TargetKind, identifier: &str) -> ArtifactPlan {
    ArtifactPlan::new(format!("{}/{}", kind.subdir(), identifier))
}

/// One artifact per model.
fn per_model(
    plan: &mut ArtifactPlan,
    ctx: &RenderContext<'_>,
    file: &str,
    path: impl Fn(&ModelView) -> String,
) {
    for (i, model) in ctx.models().iter().enumerate() {
        plan.template(path(model), file, Scope::Model(i));
    }
}

/// One artifact per endpoint. When `path` depends only on the endpoint's
/// model, endpoints sharing a model collapse to the first one.
fn per_endpoint(
    plan: &mut ArtifactPlan,
    ctx: &RenderContext<'_>,
    file: &str,
    path: impl Fn(&EndpointView) -> String,
) {
    for (i, endpoint) in ctx.endpoints().iter().enumerate() {
        plan.template(path(endpoint), file, Scope::Endpoint(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::generator::artifact::ArtifactSource;
    use crate::generator::targets::{BACKEND_TARGETS, FRONTEND_TARGETS};
    use crate::loader::{load_str, SourceFormat};
    use crate::schema::ApiSpec;

    fn blog() -> ApiSpec {
        load_str(fixtures::BLOG_YAML, SourceFormat::Yaml).unwrap()
    }

    #[test]
    fn test_every_identifier_has_an_emitter() {
        for id in BACKEND_TARGETS {
            assert!(emitter_for(TargetKind::Backend, id).is_some(), "{id}");
        }
        for id in FRONTEND_TARGETS {
            assert!(emitter_for(TargetKind::Frontend, id).is_some(), "{id}");
        }
        assert!(emitter_for(TargetKind::Backend, "javascript").is_none());
        assert!(emitter_for(TargetKind::Frontend, "django").is_none());
    }

    #[test]
    fn test_plans_are_deterministic() {
        let spec = blog();
        let ctx = RenderContext::new(&spec);
        for (kind, ids) in [
            (TargetKind::Backend, BACKEND_TARGETS),
            (TargetKind::Frontend, FRONTEND_TARGETS),
        ] {
            for id in ids {
                let emitter = emitter_for(kind, id).unwrap();
                let first: Vec<String> = emitter.plan(&ctx).paths().map(String::from).collect();
                let second: Vec<String> = emitter.plan(&ctx).paths().map(String::from).collect();
                assert_eq!(first, second, "{id}");
                assert!(!first.is_empty(), "{id}");
            }
        }
    }

    #[test]
    fn test_templates_live_under_emitter_directory() {
        let spec = blog();
        let ctx = RenderContext::new(&spec);
        for (kind, ids) in [
            (TargetKind::Backend, BACKEND_TARGETS),
            (TargetKind::Frontend, FRONTEND_TARGETS),
        ] {
            for id in ids {
                let emitter = emitter_for(kind, id).unwrap();
                let prefix = format!("{}/{}/", kind.subdir(), emitter.identifier());
                for artifact in emitter.plan(&ctx).artifacts() {
                    if let ArtifactSource::Template(name) = &artifact.source {
                        assert!(name.starts_with(&prefix), "{name} outside {prefix}");
                        assert!(name.ends_with(".tera"), "{name}");
                    }
                }
            }
        }
    }
}
