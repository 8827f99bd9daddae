//! Shared, read-only render context.
//!
//! Built once per run from the canonical model. Every artifact of every
//! target renders from a clone of the same base context plus a few
//! target- and scope-specific keys.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tera::Context;

use super::artifact::Scope;
use crate::http::Route;
use crate::naming::NameForms;
use crate::schema::{ApiSpec, CustomEndpoint, FieldSpec, ModelSpec, Vocabulary};
use crate::type_map::TargetLanguage;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub names: NameForms,
    pub version: String,
    pub base_url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: String,
    pub names: NameForms,
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
    /// Table of the referenced model, when `foreign_key` is set.
    pub foreign_table: Option<String>,
    pub unique: bool,
    pub index: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelView {
    pub name: String,
    pub names: NameForms,
    pub table_name: String,
    pub description: Option<String>,
    pub timestamps: bool,
    pub soft_delete: bool,
    pub fields: Vec<FieldView>,
    /// Bookkeeping fields implied by `timestamps` and `soft_delete`.
    pub implicit_fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointView {
    pub resource: String,
    pub names: NameForms,
    pub model: String,
    pub model_names: NameForms,
    pub operations: Vec<String>,
    /// `supports.create`, `supports.search`, ... for template conditionals.
    pub supports: BTreeMap<String, bool>,
    pub routes: Vec<Route>,
    pub auth_required: bool,
    pub rate_limit: Option<u32>,
    pub pagination: bool,
    pub page_size: u32,
    pub max_page_size: u32,
    pub filters: Vec<String>,
    pub sort_fields: Vec<String>,
    pub custom_endpoints: Vec<CustomEndpoint>,
    pub custom_routes: Vec<Route>,
}

/// Read-only view of an [`ApiSpec`] shared by every emitter in a run.
pub struct RenderContext<'a> {
    spec: &'a ApiSpec,
    models: Vec<ModelView>,
    endpoints: Vec<EndpointView>,
    base: Context,
}

impl<'a> RenderContext<'a> {
    pub fn new(spec: &'a ApiSpec) -> Self {
        let project = ProjectView {
            name: spec.project.name.clone(),
            names: NameForms::of(&spec.project.name),
            version: spec.project.version.clone(),
            base_url: spec.project.base_url.clone(),
            description: spec.project.description.clone(),
        };
        let models: Vec<ModelView> = spec.models.iter().map(|m| model_view(spec, m)).collect();
        let endpoints: Vec<EndpointView> = spec
            .endpoints
            .iter()
            .map(|e| {
                let supports = crate::schema::Operation::ALL
                    .iter()
                    .map(|op| (op.as_str().to_string(), e.supports(*op)))
                    .collect();
                EndpointView {
                    resource: e.resource.clone(),
                    names: NameForms::of(&e.resource),
                    model: e.model.clone(),
                    model_names: NameForms::of(&e.model),
                    operations: e.operations.iter().map(|op| op.as_str().to_string()).collect(),
                    supports,
                    routes: e.routes(),
                    auth_required: e.auth_required,
                    rate_limit: e.rate_limit,
                    pagination: e.pagination,
                    page_size: e.page_size,
                    max_page_size: e.max_page_size,
                    filters: e.filters.clone(),
                    sort_fields: e.sort_fields.clone(),
                    custom_endpoints: e.custom_endpoints.clone(),
                    custom_routes: e.custom_endpoints.iter().map(CustomEndpoint::route).collect(),
                }
            })
            .collect();

        let mut base = Context::new();
        base.insert("project", &project);
        base.insert("auth", &spec.auth);
        base.insert("models", &models);
        base.insert("endpoints", &endpoints);
        base.insert("routes", &spec.routes());
        base.insert("database", &spec.database);
        base.insert("cors", &spec.cors);
        base.insert("error_handling", &spec.error_handling);

        Self {
            spec,
            models,
            endpoints,
            base,
        }
    }

    pub fn spec(&self) -> &'a ApiSpec {
        self.spec
    }

    pub fn models(&self) -> &[ModelView] {
        &self.models
    }

    pub fn endpoints(&self) -> &[EndpointView] {
        &self.endpoints
    }

    /// View of the model an endpoint serves.
    pub fn endpoint_model(&self, endpoint: usize) -> Option<&ModelView> {
        let name = &self.endpoints.get(endpoint)?.model;
        self.models.iter().find(|m| &m.name == name)
    }

    /// Template context for one artifact of one target.
    pub fn scoped(&self, target: &str, language: TargetLanguage, scope: Scope) -> Context {
        let mut ctx = self.base.clone();
        ctx.insert("target", target);
        ctx.insert("language", language.as_str());

        match scope {
            Scope::Project => {}
            Scope::Model(i) => {
                if let Some(model) = self.models.get(i) {
                    ctx.insert("model_name", &model.name);
                    ctx.insert("model", model);
                }
            }
            Scope::Endpoint(i) => {
                if let Some(endpoint) = self.endpoints.get(i) {
                    ctx.insert("endpoint", endpoint);
                }
                if let Some(model) = self.endpoint_model(i) {
                    ctx.insert("model_name", &model.name);
                    ctx.insert("model", model);
                }
            }
        }
        ctx
    }
}

fn model_view(spec: &ApiSpec, model: &ModelSpec) -> ModelView {
    let field = |f: &FieldSpec| FieldView {
        name: f.name.clone(),
        names: NameForms::of(&f.name),
        field_type: f.field_type.clone(),
        required: f.required,
        nullable: f.nullable,
        default: f.default.clone(),
        description: f.description.clone(),
        min_length: f.min_length,
        max_length: f.max_length,
        min_value: f.min_value,
        max_value: f.max_value,
        pattern: f.pattern.clone(),
        foreign_key: f.foreign_key.clone(),
        foreign_table: f
            .foreign_key
            .as_deref()
            .and_then(|fk| spec.model(fk))
            .map(ModelSpec::table_name),
        unique: f.unique,
        index: f.index,
    };

    ModelView {
        name: model.name.clone(),
        names: NameForms::of(&model.name),
        table_name: model.table_name(),
        description: model.description.clone(),
        timestamps: model.timestamps,
        soft_delete: model.soft_delete,
        fields: model.fields.iter().map(field).collect(),
        implicit_fields: model.implicit_fields().iter().map(field).collect(),
    }
}
