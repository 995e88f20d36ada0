use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Method,
}

impl MemberKind {
    pub fn category(self) -> &'static str {
        match self {
            Self::Field => "private_field",
            Self::Method => "private_method",
        }
    }
}

/// One file with at least one import whose short name never appears in the
/// file body.
#[derive(Debug, Clone, Serialize)]
pub struct ImportFinding {
    pub file: PathBuf,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub files_scanned: usize,
    pub findings: Vec<ImportFinding>,
}

impl ImportReport {
    /// Number of files flagged; doubles as the process exit code.
    pub fn files_flagged(&self) -> usize {
        self.findings.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberFinding {
    pub kind: MemberKind,
    pub type_name: String,
    pub file: PathBuf,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub total_files: usize,
    pub total_types: usize,
    pub members_checked: usize,
    pub used_members: usize,
    pub unused_members: usize,
    pub unused_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberReport {
    pub summary: MemberSummary,
    pub unused: Vec<MemberFinding>,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("source root {} does not exist or is not a directory", .0.display())]
    MissingRoot(PathBuf),
}
