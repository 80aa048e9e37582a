//! Placeholder rendering.
//!
//! Templates use `{{NAME}}` tokens. Rendering is pure substitution from a
//! map derived from the project configuration; a token with no mapping
//! substitutes the empty string.

use std::collections::BTreeMap;

use camino::Utf8Path;
use seedbed_core::ProjectConfig;

use super::TemplateId;

/// Variable map for one rendering pass.
pub fn variables(config: &ProjectConfig) -> BTreeMap<&'static str, String> {
    let mut vars = BTreeMap::new();
    vars.insert("PROJECT_NAME", config.project_name.clone());
    vars.insert("PROJECT_SLUG", config.slug());
    vars.insert("DB_DRIVER", config.db_driver.to_string());
    vars.insert("DB_HOST", config.db_host.clone());
    vars.insert("DB_PORT", config.db_port.to_string());
    vars.insert("DB_NAME", config.db_name.clone());
    vars.insert("DB_USER", config.db_user.clone());
    vars.insert("DB_PASS", config.db_pass.clone());
    vars.insert("NOTIFICATION_TYPE", config.notification_channel.to_string());
    vars.insert("ADMIN_EMAIL", config.admin_email.clone());
    vars
}

/// Substitute `{{NAME}}` tokens in `template` from `vars`.
///
/// Unknown names render as the empty string. An unterminated `{{` is copied
/// through verbatim.
pub fn substitute(template: &str, vars: &BTreeMap<&'static str, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        match after_open.find("}}") {
            Some(end) => {
                let name = after_open[..end].trim();
                if let Some(value) = vars.get(name) {
                    output.push_str(value);
                }
                rest = &after_open[end + 2..];
            }
            None => {
                output.push_str(&rest[start..]);
                return output;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Render a template id against a configuration, honoring overrides under
/// `<root>/templates/`.
pub fn render(id: TemplateId, config: &ProjectConfig, root: &Utf8Path) -> String {
    substitute(&id.load(root), &variables(config))
}
