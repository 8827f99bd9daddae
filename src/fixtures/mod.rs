//! API description fixtures for loader, generator and command tests.
//!
//! Loaded at compile time with `include_str!`.
//!
//! ## Available Fixtures
//!
//! - [`BLOG_YAML`] / [`BLOG_JSON`] - the same blog API in both syntaxes
//! - [`MINIMAL_YAML`] - one model with a bare field, one endpoint, all defaults

/// Blog API exercising most of the document surface.
///
/// Contains:
/// - 3 models: User, Post (table override, soft delete), Comment (no timestamps)
/// - foreign keys Post -> User, Comment -> Post and Comment -> User
/// - 3 endpoints: users (4 operations), posts (defaults, 3 custom endpoints),
///   comments (no auth, includes search)
/// - mysql database, restricted CORS, rfc7807 errors
pub const BLOG_YAML: &str = include_str!("blog.yaml");

/// [`BLOG_YAML`] written as JSON. Loads to an identical model.
pub const BLOG_JSON: &str = include_str!("blog.json");

/// Smallest useful document: `User { username: string }` served at `users`.
pub const MINIMAL_YAML: &str = include_str!("minimal.yaml");
