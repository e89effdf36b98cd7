use nook_core::config::Settings;

use crate::error::CliError;

pub fn run_settings(settings: &Settings, as_json: bool) -> Result<String, CliError> {
    if as_json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(settings)?));
    }

    let ask_modifier = serde_json::to_value(settings.ask_modifier)?;
    Ok(format!(
        "palette_shortcut: {}\nask_modifier: {}\n",
        settings.palette_shortcut,
        ask_modifier.as_str().unwrap_or_default()
    ))
}
