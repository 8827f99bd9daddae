//! Server framework emitters.

use super::{new_plan, per_endpoint, per_model, Emitter};
use crate::generator::artifact::{ArtifactPlan, Scope};
use crate::generator::context::RenderContext;
use crate::generator::targets::TargetKind;
use crate::naming;
use crate::schema::DatabaseKind;
use crate::type_map::TargetLanguage;

const DJANGO_REQUIREMENTS: &[&str] = &[
    "Django>=4.2.0",
    "djangorestframework>=3.14.0",
    "django-cors-headers>=4.0.0",
    "PyJWT>=2.8.0",
    "python-dotenv>=1.0.0",
];

/// Django REST Framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct Django;

impl Django {
    fn requirements(database: DatabaseKind) -> String {
        let mut lines: Vec<&str> = DJANGO_REQUIREMENTS.to_vec();
        match database {
            DatabaseKind::Postgresql => lines.push("psycopg2-binary>=2.9.0"),
            DatabaseKind::Mysql => lines.push("mysqlclient>=2.2.0"),
            _ => {}
        }
        let mut content = lines.join("\n");
        content.push('\n');
        content
    }

    fn models_init(ctx: &RenderContext<'_>) -> String {
        ctx.models()
            .iter()
            .map(|m| format!("from .{} import {}\n", m.names.snake, m.names.pascal))
            .collect()
    }
}

impl Emitter for Django {
    fn identifier(&self) -> &'static str {
        "django"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::Python
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Backend, self.identifier());
        let package = naming::snake_case(&ctx.spec().project.name);

        plan.template(format!("{package}/settings.py"), "settings.py", Scope::Project)
            .template(format!("{package}/urls.py"), "urls.py", Scope::Project);
        per_model(&mut plan, ctx, "model.py", |m| format!("api/models/{}.py", m.names.snake));
        plan.literal("api/models/__init__.py", Self::models_init(ctx));
        per_model(&mut plan, ctx, "serializer.py", |m| {
            format!("api/serializers/{}.py", m.names.snake)
        });
        per_endpoint(&mut plan, ctx, "viewset.py", |e| format!("api/views/{}.py", e.names.snake));
        plan.template("api/authentication.py", "authentication.py", Scope::Project)
            .template("api/middleware.py", "middleware.py", Scope::Project)
            .literal("requirements.txt", Self::requirements(ctx.spec().database.kind))
            .template("manage.py", "manage.py", Scope::Project);
        plan
    }
}

/// Express.js.
#[derive(Debug, Clone, Copy, Default)]
pub struct Express;

impl Emitter for Express {
    fn identifier(&self) -> &'static str {
        "express"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::TypeScript
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Backend, self.identifier());
        plan.template("package.json", "package.json", Scope::Project)
            .template("src/server.js", "server.js", Scope::Project);
        per_model(&mut plan, ctx, "model.js", |m| format!("src/models/{}.js", m.names.pascal));
        per_endpoint(&mut plan, ctx, "routes.js", |e| format!("src/routes/{}.js", e.names.camel));
        plan.template("src/routes/index.js", "routes_index.js", Scope::Project);
        per_endpoint(&mut plan, ctx, "controller.js", |e| {
            format!("src/controllers/{}Controller.js", e.names.camel)
        });
        plan.template("src/middleware/auth.js", "auth_middleware.js", Scope::Project)
            .template("src/middleware/errorHandler.js", "error_middleware.js", Scope::Project)
            .template("src/middleware/validation.js", "validation_middleware.js", Scope::Project)
            .template("src/config/db.js", "db.js", Scope::Project)
            .template("src/utils/response.js", "response.js", Scope::Project)
            .template(".env.example", ".env.example", Scope::Project);
        plan
    }
}

/// ASP.NET Core.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dotnet;

impl Emitter for Dotnet {
    fn identifier(&self) -> &'static str {
        "dotnet"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Backend, self.identifier());
        let project = naming::pascal_case(&ctx.spec().project.name);

        plan.template(format!("{project}.csproj"), "project.csproj", Scope::Project)
            .template("Program.cs", "Program.cs", Scope::Project);
        per_model(&mut plan, ctx, "Model.cs", |m| format!("Models/{}.cs", m.names.pascal));
        per_model(&mut plan, ctx, "Dto.cs", |m| format!("DTOs/{}Dto.cs", m.names.pascal));
        per_endpoint(&mut plan, ctx, "Controller.cs", |e| {
            format!("Controllers/{}Controller.cs", e.model_names.pascal)
        });
        per_model(&mut plan, ctx, "Service.cs", |m| {
            format!("Services/{}Service.cs", m.names.pascal)
        });
        plan.template("Data/ApplicationDbContext.cs", "DbContext.cs", Scope::Project)
            .template(
                "Middleware/AuthenticationMiddleware.cs",
                "AuthMiddleware.cs",
                Scope::Project,
            )
            .template(
                "Middleware/ErrorHandlingMiddleware.cs",
                "ErrorMiddleware.cs",
                Scope::Project,
            )
            .template("appsettings.json", "appsettings.json", Scope::Project);
        plan
    }
}

/// Spring Boot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpringBoot;

impl Emitter for SpringBoot {
    fn identifier(&self) -> &'static str {
        "springboot"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::Java
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Backend, self.identifier());
        let package = format!(
            "src/main/java/com/example/{}",
            naming::snake_case(&ctx.spec().project.name)
        );

        plan.template("pom.xml", "pom.xml", Scope::Project)
            .template(format!("{package}/Application.java"), "Application.java", Scope::Project);
        per_model(&mut plan, ctx, "Entity.java", |m| {
            format!("{package}/entity/{}.java", m.names.pascal)
        });
        per_model(&mut plan, ctx, "Repository.java", |m| {
            format!("{package}/repository/{}Repository.java", m.names.pascal)
        });
        per_model(&mut plan, ctx, "Service.java", |m| {
            format!("{package}/service/{}Service.java", m.names.pascal)
        });
        per_endpoint(&mut plan, ctx, "Controller.java", |e| {
            format!("{package}/controller/{}Controller.java", e.model_names.pascal)
        });
        per_model(&mut plan, ctx, "Dto.java", |m| {
            format!("{package}/dto/{}Dto.java", m.names.pascal)
        });
        plan.template(
            format!("{package}/config/SecurityConfig.java"),
            "SecurityConfig.java",
            Scope::Project,
        )
        .template(format!("{package}/security/JwtFilter.java"), "JwtFilter.java", Scope::Project)
        .template(
            "src/main/resources/application.properties",
            "application.properties",
            Scope::Project,
        );
        plan
    }
}

/// Laravel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Laravel;

impl Emitter for Laravel {
    fn identifier(&self) -> &'static str {
        "laravel"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::Php
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Backend, self.identifier());

        plan.template("composer.json", "composer.json", Scope::Project);
        per_model(&mut plan, ctx, "Model.php", |m| format!("app/Models/{}.php", m.names.pascal));
        per_endpoint(&mut plan, ctx, "Controller.php", |e| {
            format!("app/Http/Controllers/{}Controller.php", e.model_names.pascal)
        });
        for (i, model) in ctx.models().iter().enumerate() {
            plan.template(
                format!("app/Http/Requests/Store{}Request.php", model.names.pascal),
                "StoreRequest.php",
                Scope::Model(i),
            )
            .template(
                format!("app/Http/Requests/Update{}Request.php", model.names.pascal),
                "UpdateRequest.php",
                Scope::Model(i),
            );
        }
        per_model(&mut plan, ctx, "Resource.php", |m| {
            format!("app/Http/Resources/{}Resource.php", m.names.pascal)
        });
        plan.template("routes/api.php", "api.php", Scope::Project)
            .template("app/Http/Middleware/JwtAuthenticate.php", "JwtMiddleware.php", Scope::Project)
            .template("app/Http/Middleware/Cors.php", "CorsMiddleware.php", Scope::Project);
        if ctx.spec().database.migrations {
            for (i, model) in ctx.models().iter().enumerate() {
                plan.template(
                    format!(
                        "database/migrations/2024_01_01_{i:06}_create_{}_table.php",
                        model.table_name
                    ),
                    "migration.php",
                    Scope::Model(i),
                );
            }
        }
        plan.template(".env.example", ".env.example", Scope::Project);
        plan
    }
}
