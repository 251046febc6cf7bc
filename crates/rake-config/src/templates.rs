//! Configuration templates for `rake init`.
//!
//! Templates live next to the crate as valid TOML and are handed out with every
//! setting commented, so a fresh `.rake.toml` changes nothing until edited.

/// Project configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the project configuration template with all settings commented out.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template with all settings commented out.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Comments out every key line of a template.
///
/// Section headers stay live: an empty table is harmless and keeps the layout readable.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('[') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
