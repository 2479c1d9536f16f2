use ogm_release::ConfigWarning;

use crate::ui::context::UiContext;

pub fn warning_json(w: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "command": "assemble",
        "kind": "unknown_config_key",
        "key": w.key,
        "file": w.file.display().to_string(),
        "line": w.line,
        "suggestion": w.suggestion,
    })
}

pub fn format_config_warning(w: &ConfigWarning, unicode: bool) -> String {
    let icon = if unicode { "⚠" } else { "[WARN]" };
    let mut text = match w.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}",
            icon,
            w.key,
            w.file.display(),
            line
        ),
        None => format!("{} Unknown config key '{}' in {}", icon, w.key, w.file.display()),
    };
    if let Some(suggestion) = &w.suggestion {
        text.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    text
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(warning_json(w));
        } else {
            eprintln!("{}", format_config_warning(w, ui.unicode));
        }
    }
}
