use crossterm::style::Stylize;
use ogm_release::ReleaseError;

use crate::ui::context::UiContext;

/// Exit status for an error that escaped the command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ReleaseError>()
        .map(ReleaseError::exit_code)
        .unwrap_or(2)
}

fn hint(err: &ReleaseError) -> Option<&'static str> {
    match err {
        ReleaseError::SourceRootMissing { .. } => {
            Some("Pass the project root as the first argument.")
        }
        ReleaseError::BuildDirMissing { .. } => {
            Some("Build the project first, or pass the build directory as the third argument.")
        }
        ReleaseError::InvalidConfig { .. } => Some("Fix the config file and try again."),
        ReleaseError::Copy { .. } | ReleaseError::CopyTree { .. } => {
            Some("The release folder is incomplete; fix the source and rerun.")
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let icon = if unicode { "✗" } else { "[ERROR]" };
    let head = format!("{} {}", icon, err);
    let mut out = if color {
        format!("{}\n", head.red())
    } else {
        format!("{}\n", head)
    };

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(fix) = err.downcast_ref::<ReleaseError>().and_then(hint) {
        let fix = format!("  hint: {}", fix);
        if color {
            out.push_str(&format!("{}\n", fix.dark_grey()));
        } else {
            out.push_str(&format!("{}\n", fix));
        }
    }
    out
}

pub fn error_json(err: &anyhow::Error) -> serde_json::Value {
    let release = err.downcast_ref::<ReleaseError>();
    serde_json::json!({
        "event": "error",
        "command": "assemble",
        "message": err.to_string(),
        "cause": err.chain().nth(1).map(|c| c.to_string()),
        "path": release.and_then(|e| e.path()).map(|p| p.display().to_string()),
        "exit_code": exit_code(err),
    })
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(error_json(err));
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
