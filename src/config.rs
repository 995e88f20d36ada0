use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{Cli, color::ColorPolicy, model::OutputFormat};

/// Conventional Java source root, kept as the default scan target.
pub const DEFAULT_ROOT: &str = "src/main/java";

#[derive(Debug, Clone, Deserialize, Default)]
struct FileConfig {
    root: Option<PathBuf>,
    exclude: Option<Vec<String>>,
    extensions: Option<Vec<String>>,
    format: Option<String>,
    color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub root: PathBuf,
    pub exclude: Vec<String>,
    pub extensions: Vec<String>,
    pub format: OutputFormat,
    pub color: ColorPolicy,
}

impl EffectiveConfig {
    /// Precedence: CLI flags over `javasweep.toml` over built-in defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = cli.config.clone().or_else(|| {
            let p = PathBuf::from("javasweep.toml");
            if p.exists() { Some(p) } else { None }
        });

        let fcfg = if let Some(path) = path {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed reading config {}", path.display()))?;
            toml::from_str::<FileConfig>(&raw)
                .with_context(|| format!("failed parsing config {}", path.display()))?
        } else {
            FileConfig::default()
        };

        let root = fcfg.root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

        let mut exclude = fcfg.exclude.unwrap_or_else(default_excludes);
        if !cli.exclude.is_empty() {
            exclude = cli.exclude.clone();
        }

        let mut extensions = fcfg.extensions.unwrap_or_else(|| vec!["java".into()]);
        extensions.sort();
        extensions.dedup();

        let format = cli
            .format
            .or_else(|| parse_format(fcfg.format.as_deref()))
            .unwrap_or(OutputFormat::Human);

        let color = cli
            .color
            .or_else(|| parse_color(fcfg.color.as_deref()))
            .unwrap_or(ColorPolicy::Auto);

        Ok(Self {
            root,
            exclude,
            extensions,
            format,
            color,
        })
    }
}

fn parse_format(v: Option<&str>) -> Option<OutputFormat> {
    match v {
        Some("ai") => Some(OutputFormat::Ai),
        Some("human") => Some(OutputFormat::Human),
        _ => None,
    }
}

fn parse_color(v: Option<&str>) -> Option<ColorPolicy> {
    match v {
        Some("always") => Some(ColorPolicy::Always),
        Some("never") => Some(ColorPolicy::Never),
        Some("auto") => Some(ColorPolicy::Auto),
        _ => None,
    }
}

fn default_excludes() -> Vec<String> {
    vec![
        "target/**".to_string(),
        "build/**".to_string(),
        "out/**".to_string(),
        ".gradle/**".to_string(),
        "**/generated/**".to_string(),
    ]
}
