//! Client SDK emitters.
//!
//! Every client SDK has the same shape: a package manifest, an HTTP client,
//! one model per data model, one service per endpoint, and auth, error and
//! configuration helpers.

use super::{new_plan, per_endpoint, per_model, Emitter};
use crate::generator::artifact::{ArtifactPlan, Scope};
use crate::generator::context::RenderContext;
use crate::generator::targets::TargetKind;
use crate::naming;
use crate::type_map::TargetLanguage;

/// TypeScript client, served for both `javascript` and `typescript`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Javascript;

impl Emitter for Javascript {
    fn identifier(&self) -> &'static str {
        "javascript"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::TypeScript
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Frontend, self.identifier());
        plan.template("package.json", "package.json", Scope::Project)
            .template("src/api/client.ts", "api-client.ts", Scope::Project);
        per_model(&mut plan, ctx, "model.ts", |m| format!("src/models/{}.ts", m.names.pascal));
        per_endpoint(&mut plan, ctx, "service.ts", |e| {
            format!("src/services/{}Service.ts", e.names.camel)
        });
        plan.template("src/auth/AuthManager.ts", "auth-manager.ts", Scope::Project)
            .template("src/utils/ErrorHandler.ts", "error-handler.ts", Scope::Project)
            .template("src/config/api.config.ts", "config.ts", Scope::Project)
            .template("src/types/index.ts", "types.ts", Scope::Project);
        plan
    }
}

/// Flutter (Dart).
#[derive(Debug, Clone, Copy, Default)]
pub struct Flutter;

impl Emitter for Flutter {
    fn identifier(&self) -> &'static str {
        "flutter"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::Dart
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Frontend, self.identifier());
        plan.template("pubspec.yaml", "pubspec.yaml", Scope::Project)
            .template("lib/api/api_client.dart", "api_client.dart", Scope::Project);
        per_model(&mut plan, ctx, "model.dart", |m| format!("lib/models/{}.dart", m.names.snake));
        per_endpoint(&mut plan, ctx, "service.dart", |e| {
            format!("lib/services/{}_service.dart", e.names.snake)
        });
        plan.template("lib/auth/auth_manager.dart", "auth_manager.dart", Scope::Project)
            .template("lib/utils/error_handler.dart", "error_handler.dart", Scope::Project)
            .template("lib/api/interceptors.dart", "interceptors.dart", Scope::Project)
            .template("lib/config/api_config.dart", "api_config.dart", Scope::Project);
        plan
    }
}

/// Swift package.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swift;

impl Emitter for Swift {
    fn identifier(&self) -> &'static str {
        "swift"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::Swift
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Frontend, self.identifier());
        plan.template("Package.swift", "Package.swift", Scope::Project)
            .template("Sources/API/APIClient.swift", "APIClient.swift", Scope::Project);
        per_model(&mut plan, ctx, "Model.swift", |m| {
            format!("Sources/Models/{}.swift", m.names.pascal)
        });
        per_endpoint(&mut plan, ctx, "Service.swift", |e| {
            format!("Sources/Services/{}Service.swift", e.model_names.pascal)
        });
        plan.template("Sources/Auth/AuthManager.swift", "AuthManager.swift", Scope::Project)
            .template("Sources/Utils/ErrorHandler.swift", "ErrorHandler.swift", Scope::Project)
            .template(
                "Sources/Networking/NetworkManager.swift",
                "NetworkManager.swift",
                Scope::Project,
            )
            .template("Sources/Config/APIConfig.swift", "APIConfig.swift", Scope::Project);
        plan
    }
}

/// Kotlin (Android) client.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kotlin;

const KOTLIN_ROOT: &str = "src/main/kotlin/com/example";

impl Emitter for Kotlin {
    fn identifier(&self) -> &'static str {
        "kotlin"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::Kotlin
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Frontend, self.identifier());
        plan.template("build.gradle.kts", "build.gradle.kts", Scope::Project)
            .template(format!("{KOTLIN_ROOT}/api/ApiClient.kt"), "ApiClient.kt", Scope::Project);
        per_model(&mut plan, ctx, "Model.kt", |m| {
            format!("{KOTLIN_ROOT}/models/{}.kt", m.names.pascal)
        });
        per_endpoint(&mut plan, ctx, "Service.kt", |e| {
            format!("{KOTLIN_ROOT}/services/{}Service.kt", e.model_names.pascal)
        });
        plan.template(format!("{KOTLIN_ROOT}/auth/AuthManager.kt"), "AuthManager.kt", Scope::Project)
            .template(
                format!("{KOTLIN_ROOT}/utils/ErrorHandler.kt"),
                "ErrorHandler.kt",
                Scope::Project,
            )
            .template(
                format!("{KOTLIN_ROOT}/api/Interceptors.kt"),
                "Interceptors.kt",
                Scope::Project,
            )
            .template(format!("{KOTLIN_ROOT}/config/ApiConfig.kt"), "ApiConfig.kt", Scope::Project);
        plan
    }
}

/// Avalonia UI (C#) client.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvaloniaUi;

impl Emitter for AvaloniaUi {
    fn identifier(&self) -> &'static str {
        "avaloniaui"
    }

    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    fn plan(&self, ctx: &RenderContext<'_>) -> ArtifactPlan {
        let mut plan = new_plan(TargetKind::Frontend, self.identifier());
        let project = naming::pascal_case(&ctx.spec().project.name);

        plan.template(format!("{project}Client.csproj"), "project.csproj", Scope::Project)
            .template("API/ApiClient.cs", "ApiClient.cs", Scope::Project);
        per_model(&mut plan, ctx, "Model.cs", |m| format!("Models/{}.cs", m.names.pascal));
        per_endpoint(&mut plan, ctx, "Service.cs", |e| {
            format!("Services/{}Service.cs", e.model_names.pascal)
        });
        plan.template("Auth/AuthManager.cs", "AuthManager.cs", Scope::Project)
            .template("Utils/ErrorHandler.cs", "ErrorHandler.cs", Scope::Project)
            .template("API/HttpClientFactory.cs", "HttpClientFactory.cs", Scope::Project)
            .template("Config/ApiConfig.cs", "ApiConfig.cs", Scope::Project);
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::loader::{load_str, SourceFormat};
    use crate::schema::ApiSpec;

    fn blog() -> ApiSpec {
        load_str(fixtures::BLOG_YAML, SourceFormat::Yaml).unwrap()
    }

    #[test]
    fn test_javascript_file_tree() {
        let spec = blog();
        let ctx = RenderContext::new(&spec);
        let plan = Javascript.plan(&ctx);
        let paths: Vec<&str> = plan.paths().collect();
        assert_eq!(
            paths,
            vec![
                "package.json",
                "src/api/client.ts",
                "src/models/User.ts",
                "src/models/Post.ts",
                "src/models/Comment.ts",
                "src/services/usersService.ts",
                "src/services/postsService.ts",
                "src/services/commentsService.ts",
                "src/auth/AuthManager.ts",
                "src/utils/ErrorHandler.ts",
                "src/config/api.config.ts",
                "src/types/index.ts",
            ]
        );
    }

    #[test]
    fn test_flutter_uses_snake_case_files() {
        let spec = blog();
        let ctx = RenderContext::new(&spec);
        let plan = Flutter.plan(&ctx);
        assert!(plan.paths().any(|p| p == "lib/models/comment.dart"));
        assert!(plan.paths().any(|p| p == "lib/services/posts_service.dart"));
    }

    #[test]
    fn test_avaloniaui_project_file() {
        let spec = blog();
        let ctx = RenderContext::new(&spec);
        let plan = AvaloniaUi.plan(&ctx);
        assert_eq!(plan.paths().next(), Some("BlogApiClient.csproj"));
        assert!(plan.paths().any(|p| p == "Services/PostService.cs"));
    }

    #[test]
    fn test_service_per_model_for_class_based_clients() {
        let yaml = r#"
project: {name: shop, base_url: /api}
models:
  Product: {fields: {title: string}}
endpoints:
  - {resource: products, model: Product}
  - {resource: featured, model: Product, operations: [list]}
"#;
        let spec = load_str(yaml, SourceFormat::Yaml).unwrap();
        let ctx = RenderContext::new(&spec);

        let swift = Swift.plan(&ctx);
        let services: Vec<_> = swift.paths().filter(|p| p.starts_with("Sources/Services/")).collect();
        assert_eq!(services, vec!["Sources/Services/ProductService.swift"]);

        let kotlin = Kotlin.plan(&ctx);
        let services = kotlin.paths().filter(|p| p.contains("/services/")).count();
        assert_eq!(services, 1);
    }
}
