use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HelpSchema {
    pub n: String,
    pub d: String,
    pub u: String,
    pub s: Vec<Sub>,
    pub f: Vec<Flag>,
    pub e: Vec<String>,
    pub x: Vec<ExitCode>,
}

#[derive(Debug, Serialize)]
pub struct Sub {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Serialize)]
pub struct Flag {
    pub name: String,
    pub short: Option<String>,
    pub r#type: String,
    pub default: Option<String>,
    pub required: bool,
    pub r#enum: Option<Vec<String>>,
    pub desc: String,
}

#[derive(Debug, Serialize)]
pub struct ExitCode {
    pub code: i32,
    pub meaning: String,
}

pub fn schema_for(subcommand: Option<&str>) -> HelpSchema {
    match subcommand {
        Some("imports") => imports_schema(),
        Some("members") => members_schema(),
        _ => root_schema(),
    }
}

fn root_schema() -> HelpSchema {
    HelpSchema {
        n: "javasweep".to_string(),
        d: "Find unused imports and unused private members in Java sources".to_string(),
        u: "javasweep [GLOBAL OPTIONS] <COMMAND> [ARGS]".to_string(),
        s: vec![
            Sub {
                name: "imports".into(),
                desc: "Report imports never referenced in their file.".into(),
            },
            Sub {
                name: "members".into(),
                desc: "Report private fields and methods never referenced.".into(),
            },
            Sub {
                name: "help".into(),
                desc: "Show command help.".into(),
            },
        ],
        f: global_flags(),
        e: vec![
            "javasweep imports".into(),
            "javasweep members app/src/main/java".into(),
            "javasweep members --format ai".into(),
        ],
        x: exit_codes(),
    }
}

fn imports_schema() -> HelpSchema {
    HelpSchema {
        n: "imports".to_string(),
        d: "Report imports never referenced in their file.".to_string(),
        u: "javasweep imports [path] [GLOBAL OPTIONS]".to_string(),
        s: vec![],
        f: global_flags(),
        e: vec![
            "javasweep imports".into(),
            "javasweep imports app/src/main/java".into(),
        ],
        x: imports_exit_codes(),
    }
}

fn members_schema() -> HelpSchema {
    HelpSchema {
        n: "members".to_string(),
        d: "Report private fields and methods never referenced.".to_string(),
        u: "javasweep members [path] [GLOBAL OPTIONS]".to_string(),
        s: vec![],
        f: global_flags(),
        e: vec![
            "javasweep members".into(),
            "javasweep members --fail-on-findings".into(),
        ],
        x: exit_codes(),
    }
}

fn global_flags() -> Vec<Flag> {
    vec![
        Flag {
            name: "config".into(),
            short: None,
            r#type: "path".into(),
            default: None,
            required: false,
            r#enum: None,
            desc: "Path to config file.".into(),
        },
        Flag {
            name: "format".into(),
            short: None,
            r#type: "string".into(),
            default: Some("human".into()),
            required: false,
            r#enum: Some(vec!["human".into(), "ai".into()]),
            desc: "Output format.".into(),
        },
        Flag {
            name: "color".into(),
            short: None,
            r#type: "string".into(),
            default: Some("auto".into()),
            required: false,
            r#enum: Some(vec!["auto".into(), "always".into(), "never".into()]),
            desc: "Color policy.".into(),
        },
        Flag {
            name: "exclude".into(),
            short: None,
            r#type: "glob[]".into(),
            default: None,
            required: false,
            r#enum: None,
            desc: "Exclude glob(s).".into(),
        },
        Flag {
            name: "fail-on-findings".into(),
            short: None,
            r#type: "bool".into(),
            default: Some("false".into()),
            required: false,
            r#enum: None,
            desc: "Exit non-zero when unused members exist.".into(),
        },
    ]
}

fn exit_codes() -> Vec<ExitCode> {
    vec![
        ExitCode {
            code: 0,
            meaning: "Clean run".into(),
        },
        ExitCode {
            code: 1,
            meaning: "Runtime error, or findings with --fail-on-findings".into(),
        },
        ExitCode {
            code: 2,
            meaning: "Invalid CLI usage".into(),
        },
    ]
}

fn imports_exit_codes() -> Vec<ExitCode> {
    vec![
        ExitCode {
            code: 0,
            meaning: "No files with unused imports; otherwise the code equals the flagged file count".into(),
        },
        ExitCode {
            code: 1,
            meaning: "One flagged file, or a runtime error".into(),
        },
        ExitCode {
            code: 2,
            meaning: "Two flagged files, or invalid CLI usage".into(),
        },
    ]
}
