//! Unused private member analysis.
//!
//! Per file: the first `class` match names the enclosing type, and pattern
//! matchers pull out private fields, private methods, and local variables.
//! Usage is then re-scanned over the raw file content and aggregated into a
//! [`UsageRecord`]; fields and non-accessor methods with no recorded use end
//! up in the report. No brace tracking and no scope resolution; the first
//! type declaration in a file wins.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::model::{MemberFinding, MemberKind, MemberReport, MemberSummary, ScanError};
use crate::walk::{WalkOptions, collect_source_files};

pub const ACCESSOR_PREFIXES: &[&str] = &["get", "set", "is"];

/// Findings past this cap are counted in the summary but not listed.
const MAX_REPORTED: usize = 50;

/// Accessor-prefixed methods are exempt from unused reporting regardless of
/// usage. Policy, not detection.
pub fn is_accessor(name: &str) -> bool {
    ACCESSOR_PREFIXES.iter().any(|p| name.starts_with(p))
}

#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub type_name: String,
    /// Declaring file, relative to the scan root.
    pub file: PathBuf,
    pub fields: Vec<String>,
    pub methods: Vec<String>,
    /// `(variable, enclosing method)` pairs. Collected but never reported;
    /// see DESIGN.md.
    pub locals: Vec<(String, String)>,
}

fn re_type() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bclass\s+(\w+)").expect("valid type regex"))
}

fn re_field() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Anchored on a trailing `=` or `;` so method declarations never
        // double as fields.
        Regex::new(r"(?m)^\s*private\s+(?:static\s+)?(?:final\s+)?(?:transient\s+)?[\w.<>,\[\]\s]+?\s(\w+)\s*[=;]")
            .expect("valid field regex")
    })
}

fn re_method() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*private\s+(?:static\s+)?(?:synchronized\s+)?[\w.<>,\[\]\s]+?\s(\w+)\s*\(")
            .expect("valid method regex")
    })
}

fn re_method_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // One level of nested braces is enough for the local-variable pass.
        Regex::new(r"(?s)(?:public|private|protected)?\s*(?:static\s+)?[\w<>\[\]]+\s+(\w+)\s*\([^)]*\)\s*\{([^}]*(?:\{[^}]*\}[^}]*)*)\}")
            .expect("valid method block regex")
    })
}

fn re_local() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:int|String|Long|Integer|Boolean|Date|List|Map|Set|Object|double|float|long)\s+(\w+)\s*=")
            .expect("valid local variable regex")
    })
}

/// Extract the first type name and member declarations. `None` when no
/// `class` declaration matches (interface-only or malformed file).
pub fn extract_type_info(source: &str, rel_path: &Path) -> Option<TypeInfo> {
    let type_name = re_type().captures(source)?.get(1)?.as_str().to_string();

    let fields = re_field()
        .captures_iter(source)
        .map(|c| c[1].to_string())
        .collect();
    let methods = re_method()
        .captures_iter(source)
        .map(|c| c[1].to_string())
        .collect();

    let mut locals = Vec::new();
    for caps in re_method_block().captures_iter(source) {
        let method = caps[1].to_string();
        for var in re_local().captures_iter(&caps[2]) {
            locals.push((var[1].to_string(), method.clone()));
        }
    }

    Some(TypeInfo {
        type_name,
        file: rel_path.to_path_buf(),
        fields,
        methods,
        locals,
    })
}

/// Which member keys were textually referenced, and where. Additive only.
#[derive(Debug, Default)]
pub struct UsageRecord {
    entries: BTreeMap<String, BTreeSet<PathBuf>>,
}

impl UsageRecord {
    pub fn record(&mut self, key: String, file: PathBuf) {
        self.entries.entry(key).or_default().insert(file);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn field_key(type_name: &str, name: &str) -> String {
        format!("{type_name}.{name}")
    }

    pub fn method_key(type_name: &str, name: &str) -> String {
        format!("{type_name}.{name}()")
    }
}

/// A field use is a word-boundary hit that is neither the declaration's own
/// name nor directly followed by `=` or `;` (a bare write or a declaration
/// tail). `this.count = 1` counts: the next character is a space.
pub fn field_used(name: &str, content: &str) -> bool {
    let decl_starts: HashSet<usize> = re_field()
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .filter(|m| m.as_str() == name)
        .map(|m| m.start())
        .collect();

    let re = Regex::new(&format!(r"\b{}\b", regex::escape(name))).expect("valid field use regex");
    re.find_iter(content).any(|m| {
        if decl_starts.contains(&m.start()) {
            return false;
        }
        !matches!(content[m.end()..].as_bytes().first(), Some(b'=') | Some(b';'))
    })
}

/// A method use is a word-boundary `name(` hit outside the declaration site.
pub fn method_used(name: &str, content: &str) -> bool {
    let decl_starts: HashSet<usize> = re_method()
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .filter(|m| m.as_str() == name)
        .map(|m| m.start())
        .collect();

    let call =
        Regex::new(&format!(r"\b{}\s*\(", regex::escape(name))).expect("valid method use regex");
    call.find_iter(content).any(|m| !decl_starts.contains(&m.start()))
}

/// Re-read each declaring file and record uses for every field and every
/// method. Accessors are recorded here too; the prefix filter applies only
/// when the report is built. A file that cannot be re-read is skipped for
/// this pass only, so its declarations still count as checked and will show
/// as unused.
pub fn analyze_usage(root: &Path, types: &[TypeInfo]) -> UsageRecord {
    let mut usage = UsageRecord::default();

    for info in types {
        let path = root.join(&info.file);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(err) => {
                debug!(file = %path.display(), %err, "skipping usage scan");
                continue;
            }
        };

        for field in &info.fields {
            if field_used(field, &content) {
                usage.record(UsageRecord::field_key(&info.type_name, field), path.clone());
            }
        }
        for method in &info.methods {
            if method_used(method, &content) {
                usage.record(UsageRecord::method_key(&info.type_name, method), path.clone());
            }
        }
    }

    usage
}

pub fn build_report(files_scanned: usize, types: &[TypeInfo], usage: &UsageRecord) -> MemberReport {
    let mut unused = Vec::new();
    let mut checked = 0usize;
    let mut used = 0usize;

    for info in types {
        for field in &info.fields {
            checked += 1;
            if usage.contains(&UsageRecord::field_key(&info.type_name, field)) {
                used += 1;
            } else {
                unused.push(MemberFinding {
                    kind: MemberKind::Field,
                    type_name: info.type_name.clone(),
                    file: info.file.clone(),
                    name: field.clone(),
                });
            }
        }
        for method in &info.methods {
            if is_accessor(method) {
                continue;
            }
            checked += 1;
            if usage.contains(&UsageRecord::method_key(&info.type_name, method)) {
                used += 1;
            } else {
                unused.push(MemberFinding {
                    kind: MemberKind::Method,
                    type_name: info.type_name.clone(),
                    file: info.file.clone(),
                    name: method.clone(),
                });
            }
        }
    }

    let unused_total = unused.len();
    let percentage = (unused_total as f64 / checked.max(1) as f64 * 100.0 * 100.0).round() / 100.0;
    unused.truncate(MAX_REPORTED);

    MemberReport {
        summary: MemberSummary {
            total_files: files_scanned,
            total_types: types.len(),
            members_checked: checked,
            used_members: used,
            unused_members: unused_total,
            unused_percentage: percentage,
        },
        unused,
    }
}

#[derive(Debug, Clone)]
pub struct MemberAnalyzer {
    opts: WalkOptions,
}

impl MemberAnalyzer {
    pub fn new(opts: WalkOptions) -> Self {
        Self { opts }
    }

    pub fn scan(&self, root: &Path) -> Result<MemberReport> {
        if !root.is_dir() {
            return Err(ScanError::MissingRoot(root.to_path_buf()).into());
        }

        let files = collect_source_files(root, &self.opts)?;
        let mut types = Vec::new();
        for file in &files {
            let content = match fs::read_to_string(file) {
                Ok(c) => c,
                Err(err) => {
                    debug!(file = %file.display(), %err, "skipping unreadable file");
                    continue;
                }
            };
            let rel = file.strip_prefix(root).unwrap_or(file);
            if let Some(info) = extract_type_info(&content, rel) {
                types.push(info);
            }
        }

        let usage = analyze_usage(root, &types);
        Ok(build_report(files.len(), &types, &usage))
    }
}
