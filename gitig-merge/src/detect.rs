//! Project type detection from marker files.

use std::path::Path;

use gitig_core::{Error, Result};

/// Marker file or directory name and the template it implies.
const MARKERS: &[(&str, &str)] = &[
    ("package.json", "node"),
    ("requirements.txt", "python"),
    ("setup.py", "python"),
    ("Pipfile", "python"),
    ("Cargo.toml", "rust"),
    ("go.mod", "go"),
    ("pom.xml", "java"),
    ("build.gradle", "java"),
    ("Gemfile", "ruby"),
    ("composer.json", "php"),
    (".vscode", "vscode"),
    (".idea", "intellij"),
    ("CMakeLists.txt", "c"),
    ("Makefile", "c"),
];

/// Built-in template for the operating system gitig was built for.
pub fn os_template() -> Option<&'static str> {
    if cfg!(target_os = "macos") {
        Some("macos")
    } else if cfg!(target_os = "linux") {
        Some("linux")
    } else if cfg!(target_os = "windows") {
        Some("windows")
    } else {
        None
    }
}

/// Templates suggested by the contents of `dir`, in marker order and without
/// repeats, followed by the operating system template.
pub fn detect(dir: &Path) -> Result<Vec<&'static str>> {
    let mut found: Vec<&'static str> = Vec::new();
    let mut push = |name: &'static str| {
        if !found.contains(&name) {
            tracing::debug!(template = name, "detected project type");
            found.push(name);
        }
    };

    for &(marker, template) in MARKERS {
        if dir.join(marker).exists() {
            push(template);
        }
    }

    if has_csproj(dir)? {
        push("visualstudio");
    }
    if let Some(os) = os_template() {
        push(os);
    }

    Ok(found)
}

fn has_csproj(dir: &Path) -> Result<bool> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.extension().is_some_and(|ext| ext == "csproj") {
            return Ok(true);
        }
    }
    Ok(false)
}
