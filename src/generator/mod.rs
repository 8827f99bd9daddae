//! Generator orchestration.
//!
//! A run resolves the requested targets, builds one [`RenderContext`] from the
//! loaded [`ApiSpec`](crate::schema::ApiSpec), and hands it to each target's
//! emitter in turn. Backend output goes to `<output>/backend`, frontend output
//! to `<output>/frontend`.

pub mod artifact;
pub mod context;
pub mod emitters;
pub mod pipeline;
pub mod targets;
pub mod templates;
pub mod writer;

pub use context::RenderContext;
pub use pipeline::{generate, run, GenerateRequest, GenerationReport, TargetReport};
pub use targets::{resolve, Target, TargetKind, BACKEND_TARGETS, FRONTEND_TARGETS};
pub use templates::TemplateSet;
