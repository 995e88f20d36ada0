use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::EffectiveConfig;

#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub exclude: Vec<String>,
    pub extensions: Vec<String>,
}

impl WalkOptions {
    pub fn from_config(cfg: &EffectiveConfig) -> Self {
        Self {
            exclude: cfg.exclude.clone(),
            extensions: cfg.extensions.clone(),
        }
    }
}

/// Recursive walk under `root`, filtered by extension and exclude globs.
/// Globs match the `/`-normalized root-relative path. Unreadable directory
/// entries are dropped, and the result is sorted for deterministic output.
pub fn collect_source_files(root: &Path, opts: &WalkOptions) -> Result<Vec<PathBuf>> {
    let exclude_set = build_globset(&opts.exclude)?;

    let mut out = Vec::new();
    for ent in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if !ent.file_type().is_file() {
            continue;
        }
        let path = ent.path().to_path_buf();
        let rel = path.strip_prefix(root).unwrap_or(&path);
        let rel_s = rel.to_string_lossy().replace('\\', "/");

        if exclude_set.is_match(rel_s.as_str()) {
            continue;
        }
        if !has_allowed_ext(&path, &opts.extensions) {
            continue;
        }
        out.push(path);
    }

    out.sort();
    debug!(count = out.len(), root = %root.display(), "collected source files");
    Ok(out)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("invalid glob: {p}"))?);
    }
    b.build().context("failed to build glob set")
}

fn has_allowed_ext(path: &Path, allowed: &[String]) -> bool {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or_default();
    allowed.iter().any(|e| e == ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn java_opts() -> WalkOptions {
        WalkOptions {
            exclude: vec!["**/generated/**".into()],
            extensions: vec!["java".into()],
        }
    }

    #[test]
    fn filters_by_extension() {
        let dir = tempdir().expect("tmp");
        fs::write(dir.path().join("A.java"), "class A {}").expect("write");
        fs::write(dir.path().join("B.kt"), "class B").expect("write");

        let files = collect_source_files(dir.path(), &java_opts()).expect("collect");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("A.java"));
    }

    #[test]
    fn exclude_globs_apply_to_relative_path() {
        let dir = tempdir().expect("tmp");
        fs::create_dir_all(dir.path().join("generated")).expect("mkdir");
        fs::write(dir.path().join("A.java"), "class A {}").expect("write");
        fs::write(dir.path().join("generated/G.java"), "class G {}").expect("write");

        let files = collect_source_files(dir.path(), &java_opts()).expect("collect");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("A.java"));
    }

    #[test]
    fn output_is_sorted() {
        let dir = tempdir().expect("tmp");
        fs::write(dir.path().join("B.java"), "class B {}").expect("write");
        fs::write(dir.path().join("A.java"), "class A {}").expect("write");

        let files = collect_source_files(dir.path(), &java_opts()).expect("collect");
        assert!(files[0].ends_with("A.java"));
        assert!(files[1].ends_with("B.java"));
    }
}
