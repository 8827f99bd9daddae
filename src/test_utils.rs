//! Shared test utilities for generator, command and output tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::Settings;
use crate::generator::targets::{self, Target, TargetKind};
use crate::generator::templates::TemplateSet;
use crate::loader::{load_str, SourceFormat};
use crate::schema::ApiSpec;

/// Body of every stub template: enough to prove the context reached it.
pub const STUB_TEMPLATE: &str = "{{ target }}:{{ project.name }}";

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// In-memory template set covering every template the targets need.
pub fn stub_templates(spec: &ApiSpec, targets: &[Target]) -> TemplateSet {
    let names: Vec<String> = targets
        .iter()
        .flat_map(|t| t.required_templates(spec))
        .collect();
    let raw: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), STUB_TEMPLATE)).collect();
    TemplateSet::from_raw(&raw).expect("Stub templates should parse")
}

/// Every file below `root`, relative and `/`-separated, sorted.
pub fn files_under(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, found: &mut Vec<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, found);
            } else if let Ok(relative) = path.strip_prefix(root) {
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                found.push(parts.join("/"));
            }
        }
    }

    let mut found = Vec::new();
    walk(root, root, &mut found);
    found.sort();
    found
}

/// Settings pointing at a template directory.
pub fn settings_with_templates(dir: &Path) -> Settings {
    Settings {
        templates: Some(dir.to_path_buf()),
        ..Settings::default()
    }
}

/// Every listed target, backend first.
pub fn all_targets() -> Vec<Target> {
    [TargetKind::Backend, TargetKind::Frontend]
        .into_iter()
        .flat_map(|kind| {
            kind.identifiers()
                .iter()
                .map(move |id| targets::resolve(kind, id).expect("Listed target should resolve"))
        })
        .collect()
}

/// A temp dir holding a document, stub templates and an output location.
///
/// Stub templates are only written when the document loads; invalid
/// documents get an empty template directory.
pub struct Workspace {
    pub dir: TempDir,
    pub config: PathBuf,
    pub templates: PathBuf,
    pub output: PathBuf,
    pub settings: Settings,
}

impl Workspace {
    pub fn new(file: &str, document: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create workspace dir");
        let config = write_file(dir.path(), file, document);
        let templates = dir.path().join("templates");
        std::fs::create_dir_all(&templates).expect("Failed to create template dir");

        if let Ok(spec) = load_str(document, SourceFormat::from_path(&config)) {
            for target in all_targets() {
                for name in target.required_templates(&spec) {
                    write_file(&templates, &name, STUB_TEMPLATE);
                }
            }
        }

        Self {
            output: dir.path().join("out"),
            settings: settings_with_templates(&templates),
            config,
            templates,
            dir,
        }
    }
}
