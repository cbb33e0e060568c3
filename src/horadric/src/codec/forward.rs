//! Property -> display text rendering

use super::numeric::{format_plain_range, format_value};
use super::{per_level, PropertyCodec};
use crate::property::{canonical_code, Property};
use crate::reference::per_level_stat_text;

impl PropertyCodec {
    pub(crate) fn render(&self, prop: &Property) -> String {
        if prop.is_raw() {
            return prop.display_text.clone();
        }

        let code = canonical_code(&prop.code);
        if let Some(stat_text) = per_level_stat_text(code) {
            if prop.min == prop.max && self.per_level.is_simple_form(&prop.display_text, code, prop.min) {
                return prop.display_text.clone();
            }
            return per_level::render(prop.min, stat_text);
        }

        match self.templates.get(code) {
            Some(template) => self.fill_template(template, prop),
            None => format!("{}: {}", prop.code, format_plain_range(prop.min, prop.max)),
        }
    }

    fn fill_template(&self, template: &str, prop: &Property) -> String {
        let mut out = template.to_string();

        if out.contains("{value}") {
            let value = format_value(prop.min, prop.max);
            if value.starts_with('-') {
                out = out.replace("+{value}", &value);
            }
            out = out.replace("{value}", &value);
        }
        if out.contains("{min}") {
            out = out.replace("{min}", &prop.min.to_string());
        }
        if out.contains("{max}") {
            out = out.replace("{max}", &prop.max.to_string());
        }
        if out.contains("{skilltab}") {
            let tab_name = prop
                .param
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|n| self.skill_tabs.display_name(n))
                .unwrap_or_else(|| prop.param.clone());
            out = out.replace("{skilltab}", &tab_name);
        }
        // An empty param leaves the placeholder visible
        if !prop.param.is_empty() && out.contains("{param}") {
            out = out.replace("{param}", &prop.param);
        }

        out
    }
}
