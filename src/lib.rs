pub mod color;
pub mod config;
pub mod help_ai;
pub mod imports;
pub mod members;
pub mod model;
pub mod normalize;
pub mod output;
pub mod walk;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use color::ColorPolicy;
use config::EffectiveConfig;
use imports::ImportAnalyzer;
use members::MemberAnalyzer;
use model::OutputFormat;
use walk::WalkOptions;

#[derive(Debug, clap::Parser)]
#[command(
    name = "javasweep",
    version,
    about = "Find unused imports and unused private members in Java sources",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorPolicy>,

    #[arg(long, global = true)]
    pub exclude: Vec<String>,

    #[arg(long, global = true, default_value_t = false)]
    pub fail_on_findings: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Report imports never referenced in their file.
    Imports {
        /// Source root to scan (defaults to src/main/java).
        path: Option<PathBuf>,
    },
    /// Report private fields and methods never referenced.
    Members {
        /// Source root to scan (defaults to src/main/java).
        path: Option<PathBuf>,
    },
    /// Show command help.
    Help { command: Option<String> },
}

/// Returns the process exit code. For `imports` that is the count of files
/// carrying at least one unused import.
pub fn run() -> Result<i32> {
    let args: Vec<String> = env::args().collect();
    if let Some(json) = maybe_emit_ai_help(&args)? {
        println!("{json}");
        return Ok(0);
    }

    let cli = Cli::parse();

    if let Some(Command::Help { command }) = &cli.command {
        if let Some(name) = command {
            let mut cmd = Cli::command();
            if let Some(sc) = cmd.find_subcommand_mut(name) {
                sc.print_help().context("failed to print help")?;
                println!();
                return Ok(0);
            }
        }
        Cli::command().print_help().context("failed to print help")?;
        println!();
        return Ok(0);
    }

    let cfg = EffectiveConfig::load(&cli)?;
    let fail_on_findings = cli.fail_on_findings;
    let command = cli.command.unwrap_or(Command::Imports { path: None });
    let opts = WalkOptions::from_config(&cfg);

    match command {
        Command::Imports { path } => {
            run_imports(path.unwrap_or_else(|| cfg.root.clone()), opts, &cfg)
        }
        Command::Members { path } => run_members(
            path.unwrap_or_else(|| cfg.root.clone()),
            opts,
            &cfg,
            fail_on_findings,
        ),
        Command::Help { .. } => unreachable!(),
    }
}

fn run_imports(root: PathBuf, opts: WalkOptions, cfg: &EffectiveConfig) -> Result<i32> {
    let analyzer = ImportAnalyzer::new(opts);
    let report = analyzer
        .scan(&root)
        .with_context(|| format!("import scan of {}", root.display()))?;
    output::print_imports(&report, cfg)?;
    Ok(i32::try_from(report.files_flagged()).unwrap_or(i32::MAX))
}

fn run_members(
    root: PathBuf,
    opts: WalkOptions,
    cfg: &EffectiveConfig,
    fail_on_findings: bool,
) -> Result<i32> {
    let analyzer = MemberAnalyzer::new(opts);
    let report = analyzer
        .scan(&root)
        .with_context(|| format!("member scan of {}", root.display()))?;
    output::print_members(&report, cfg)?;
    if fail_on_findings && report.summary.unused_members > 0 {
        return Ok(1);
    }
    Ok(0)
}

fn maybe_emit_ai_help(args: &[String]) -> Result<Option<String>> {
    let has_help = args.iter().any(|a| a == "--help" || a == "help");
    let format_ai = args.windows(2).any(|w| w[0] == "--format" && w[1] == "ai")
        || args.iter().any(|a| a == "--format=ai");

    if !has_help || !format_ai {
        return Ok(None);
    }

    let sub = args
        .iter()
        .skip(1)
        .find(|a| matches!(a.as_str(), "imports" | "members"))
        .map(String::as_str);
    let schema = help_ai::schema_for(sub);
    Ok(Some(serde_json::to_string(&schema)?))
}
