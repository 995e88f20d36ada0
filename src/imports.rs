//! Unused-import analysis.
//!
//! An import is unused when its short name (last dot-separated segment)
//! never appears in the file body after comments, string literals, and the
//! import declarations themselves are stripped. The check is a plain
//! substring match, not word-boundary: `HashMap` in the body keeps an
//! import of `Map` "used". That imprecision is part of the contract and is
//! not to be tightened.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::model::{ImportFinding, ImportReport};
use crate::normalize::strip_comments_and_strings;
use crate::walk::{WalkOptions, collect_source_files};

fn re_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"import\s+([\w.]+)\s*;").expect("valid import regex"))
}

/// Extract fully-qualified import paths from the raw text. Import statements
/// are assumed not to appear inside comments or strings in well-formed input.
pub fn extract_imports(source: &str) -> Vec<String> {
    re_import()
        .captures_iter(source)
        .map(|c| c[1].to_string())
        .collect()
}

pub fn short_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Body used for the usage check: normalized, with the import declarations
/// elided so a short name cannot satisfy itself.
fn reference_body(source: &str) -> String {
    let normalized = strip_comments_and_strings(source);
    re_import().replace_all(&normalized, "").into_owned()
}

pub fn unused_imports(source: &str) -> Vec<String> {
    let imports = extract_imports(source);
    if imports.is_empty() {
        return Vec::new();
    }
    let body = reference_body(source);
    imports
        .into_iter()
        .filter(|imp| !body.contains(short_name(imp)))
        .collect()
}

#[derive(Debug, Clone)]
pub struct ImportAnalyzer {
    opts: WalkOptions,
}

impl ImportAnalyzer {
    pub fn new(opts: WalkOptions) -> Self {
        Self { opts }
    }

    /// Walk `root` and collect per-file unused imports. A file that cannot be
    /// read is skipped with empty results; a missing root walks nothing and
    /// reports clean.
    pub fn scan(&self, root: &Path) -> Result<ImportReport> {
        let files = collect_source_files(root, &self.opts)?;
        let mut findings = Vec::new();

        for file in &files {
            let content = match fs::read_to_string(file) {
                Ok(c) => c,
                Err(err) => {
                    debug!(file = %file.display(), %err, "skipping unreadable file");
                    continue;
                }
            };
            let unused = unused_imports(&content);
            if !unused.is_empty() {
                findings.push(ImportFinding {
                    file: file.clone(),
                    imports: unused,
                });
            }
        }

        Ok(ImportReport {
            files_scanned: files.len(),
            findings,
        })
    }
}
