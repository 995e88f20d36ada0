use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::EffectiveConfig;
use crate::model::{ImportReport, MemberKind, MemberReport, OutputFormat};

/// Human output lists the top slice of the capped findings list.
const TOP_LISTED: usize = 20;

pub fn print_imports(report: &ImportReport, cfg: &EffectiveConfig) -> Result<()> {
    match cfg.format {
        OutputFormat::Ai => print_ai_imports(report),
        OutputFormat::Human => {
            print_human_imports(report, cfg.color.enabled());
            Ok(())
        }
    }
}

pub fn print_members(report: &MemberReport, cfg: &EffectiveConfig) -> Result<()> {
    match cfg.format {
        OutputFormat::Ai => print_ai_members(report),
        OutputFormat::Human => {
            print_human_members(report, cfg.color.enabled());
            Ok(())
        }
    }
}

fn print_ai_imports(report: &ImportReport) -> Result<()> {
    for f in &report.findings {
        let obj = serde_json::json!({ "f": f.file, "u": f.imports });
        println!("{}", serde_json::to_string(&obj)?);
    }
    let summary = serde_json::json!({
        "files_scanned": report.files_scanned,
        "files_flagged": report.files_flagged(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn print_human_imports(report: &ImportReport, color: bool) {
    if report.findings.is_empty() {
        if color {
            println!("{}", "No unused imports found".green());
        } else {
            println!("No unused imports found");
        }
        return;
    }

    if color {
        println!("{}", "Files with unused imports:".yellow().bold());
    } else {
        println!("Files with unused imports:");
    }
    println!("{}", "=".repeat(60));

    for finding in &report.findings {
        println!();
        if color {
            println!("{}", finding.file.display().blue());
        } else {
            println!("{}", finding.file.display());
        }
        for imp in &finding.imports {
            println!("  - {imp}");
        }
    }
}

fn print_ai_members(report: &MemberReport) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(&serde_json::json!({ "summary": report.summary }))?
    );
    for m in &report.unused {
        let obj = serde_json::json!({
            "k": m.kind,
            "t": m.type_name,
            "n": m.name,
            "f": m.file,
        });
        println!("{}", serde_json::to_string(&obj)?);
    }
    Ok(())
}

fn print_human_members(report: &MemberReport, color: bool) {
    let s = &report.summary;
    if color {
        println!("{}", "Unused private member report".bold().cyan());
    } else {
        println!("Unused private member report");
    }
    println!("Files scanned: {}", s.total_files);
    println!("Types scanned: {}", s.total_types);
    println!("Members checked: {}", s.members_checked);
    println!("Used members: {}", s.used_members);
    println!("Unused members: {}", s.unused_members);
    println!("Unused percentage: {:.2}%", s.unused_percentage);

    if report.unused.is_empty() {
        if color {
            println!("\n{}", "No unused private members found".green());
        } else {
            println!("\nNo unused private members found");
        }
        return;
    }

    if color {
        println!("\n{}", format!("Top {TOP_LISTED} unused private members").bold().cyan());
    } else {
        println!("\nTop {TOP_LISTED} unused private members");
    }
    for (i, m) in report.unused.iter().take(TOP_LISTED).enumerate() {
        let tag = format!("[{}]", m.kind.category());
        let tag = if color {
            match m.kind {
                MemberKind::Field => tag.red().to_string(),
                MemberKind::Method => tag.yellow().to_string(),
            }
        } else {
            tag
        };
        println!(
            "{:2}. {} {}.{} ({})",
            i + 1,
            tag,
            m.type_name,
            m.name,
            m.file.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImportFinding, MemberFinding, MemberSummary};

    #[test]
    fn mono_import_report_prints() {
        let report = ImportReport {
            files_scanned: 2,
            findings: vec![ImportFinding {
                file: "src/main/java/A.java".into(),
                imports: vec!["java.util.List".into()],
            }],
        };
        print_human_imports(&report, false);
    }

    #[test]
    fn mono_member_report_prints() {
        let report = MemberReport {
            summary: MemberSummary {
                total_files: 1,
                total_types: 1,
                members_checked: 1,
                used_members: 0,
                unused_members: 1,
                unused_percentage: 100.0,
            },
            unused: vec![MemberFinding {
                kind: MemberKind::Field,
                type_name: "Widget".into(),
                file: "Widget.java".into(),
                name: "unusedCount".into(),
            }],
        };
        print_human_members(&report, false);
    }

    #[test]
    fn ai_member_lines_are_json() {
        let report = MemberReport {
            summary: MemberSummary {
                total_files: 0,
                total_types: 0,
                members_checked: 0,
                used_members: 0,
                unused_members: 0,
                unused_percentage: 0.0,
            },
            unused: vec![],
        };
        print_ai_members(&report).expect("print");
    }
}
