use clap::ValueEnum;
use std::collections::HashMap;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorPolicy {
    Auto,
    Always,
    Never,
}

impl ColorPolicy {
    pub fn enabled(self) -> bool {
        let env: HashMap<String, String> = std::env::vars().collect();
        self.enabled_with(std::io::stdout().is_terminal(), &env)
    }

    pub fn enabled_with(self, stdout_is_tty: bool, env: &HashMap<String, String>) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if env.contains_key("NO_COLOR") {
                    return false;
                }
                if matches!(env.get("TERM").map(String::as_str), Some("dumb")) {
                    return false;
                }
                if matches!(env.get("FORCE_COLOR").map(String::as_str), Some("1")) {
                    return true;
                }
                stdout_is_tty
            }
        }
    }
}
