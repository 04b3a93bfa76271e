//! HTML rendering for the settings pages.
//!
//! Markup is plain semantic HTML with a small embedded stylesheet; the
//! `data-theme` attribute on `<html>` carries the configured theme.

use std::fmt::Write as _;

use serde_json::{Map, Value};

use crate::{
    plugin::{PluginDescriptor, PluginRegistry},
    registry::{RegistryEntry, SchemaRegistry},
    schema::{Field, FieldKind, Schema},
};

use super::{plugin_url, schema_url};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;line-height:1.5}\
main{max-width:56rem;margin:0 auto;padding:2rem}\
.layout{display:flex;gap:2rem}\
nav{min-width:14rem}\
nav a{display:block;padding:.25rem .5rem;text-decoration:none}\
nav a.active{font-weight:bold}\
.field{margin-bottom:1rem}\
.field label{display:block;font-weight:600}\
.field small{display:block;opacity:.7}\
.notice{padding:.5rem 1rem;border-radius:.25rem;margin-bottom:1rem}\
.notice.error{border:1px solid #c33}\
.badge{display:inline-block;padding:.1rem .6rem;border-radius:1rem;margin-right:.5rem;border:1px solid}\
.btn{display:inline-block;padding:.5rem 1.25rem;border-radius:.25rem;border:1px solid;text-decoration:none}";

/// Outcome banner shown above a form.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Saved,
    Reset,
    Error(String),
}

/// Currently displayed item, highlighted in the sidebar.
#[derive(Debug, Clone, Copy)]
pub enum Active<'a> {
    Schema(&'a str),
    Plugin(&'a str, &'a str),
}

/// Escape text for HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Complete HTML document.
pub fn page(title: &str, theme: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n",
        theme = escape(theme),
        title = escape(title),
    )
}

/// Navigation listing standalone schemas, collapsible groups and plugins.
pub fn sidebar(
    registry: &SchemaRegistry,
    plugins: Option<&PluginRegistry>,
    active: Active<'_>,
) -> String {
    let is_active_schema = |id: &str| matches!(active, Active::Schema(a) if a == id);
    let link = |href: &str, label: &str, on: bool| {
        format!(
            "<a href=\"{}\"{}>{}</a>",
            escape(href),
            if on { " class=\"active\"" } else { "" },
            escape(label)
        )
    };

    let mut out = String::from("<nav>\n");
    for entry in registry.iter() {
        match entry {
            RegistryEntry::Schema(s) => {
                out.push_str(&link(&schema_url(&s.name), s.display_title(), is_active_schema(&s.name)));
                out.push('\n');
            }
            RegistryEntry::Group(g) => {
                let open = g.default_open || g.member_ids().any(|id| is_active_schema(&id));
                let _ = writeln!(
                    out,
                    "<details{}><summary>{}</summary>",
                    if open { " open" } else { "" },
                    escape(&g.title)
                );
                for member in &g.schemas {
                    let id = g.member_id(&member.name);
                    out.push_str(&link(&schema_url(&id), member.display_title(), is_active_schema(&id)));
                    out.push('\n');
                }
                out.push_str("</details>\n");
            }
        }
    }

    if let Some(plugins) = plugins {
        for category in plugins.categories_with_plugins() {
            let open = matches!(active, Active::Plugin(c, _) if c == category);
            let label = plugins.display_name(category).unwrap_or(category);
            let _ = writeln!(
                out,
                "<details{}><summary>{}</summary>",
                if open { " open" } else { "" },
                escape(label)
            );
            for plugin in plugins.plugins_by_category(category) {
                let on = matches!(active, Active::Plugin(c, n) if c == category && n == plugin.name);
                out.push_str(&link(&plugin_url(category, &plugin.name), &plugin.title, on));
                out.push('\n');
            }
            out.push_str("</details>\n");
        }
    }
    out.push_str("</nav>\n");
    out
}

/// Two-column settings layout.
pub fn layout(sidebar: &str, content: &str) -> String {
    format!("<main>\n<div class=\"layout\">\n{sidebar}<section>\n{content}</section>\n</div>\n</main>")
}

/// Form for one schema populated with `values`.
pub fn schema_form(
    schema: &Schema,
    values: &Map<String, Value>,
    action: &str,
    notice: Option<&Notice>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<h1>{}</h1>", escape(&schema.title));
    if let Some(desc) = &schema.description {
        let _ = writeln!(out, "<p>{}</p>", escape(desc));
    }
    out.push_str(&notice_html(notice));

    let _ = writeln!(out, "<form method=\"post\" action=\"{}\">", escape(action));
    for field in &schema.fields {
        out.push_str(&field_html(field, values.get(&field.key)));
    }
    out.push_str("<button class=\"btn\" type=\"submit\">Save</button>\n</form>\n");
    let _ = writeln!(
        out,
        "<form method=\"post\" action=\"{}/reset\"><button class=\"btn\" type=\"submit\">Reset to defaults</button></form>",
        escape(action)
    );
    out
}

/// Header block for a plugin page.
pub fn plugin_header(plugin: &PluginDescriptor) -> String {
    format!(
        "<p><span class=\"badge\">v{}</span>{}</p>\n",
        escape(if plugin.version.is_empty() { "1.0" } else { &plugin.version }),
        escape(&plugin.description)
    )
}

fn notice_html(notice: Option<&Notice>) -> String {
    match notice {
        None => String::new(),
        Some(Notice::Saved) => "<div class=\"notice\" role=\"status\">Settings saved.</div>\n".into(),
        Some(Notice::Reset) => {
            "<div class=\"notice\" role=\"status\">Settings reset to defaults.</div>\n".into()
        }
        Some(Notice::Error(msg)) => format!(
            "<div class=\"notice error\" role=\"alert\">{}</div>\n",
            escape(msg)
        ),
    }
}

fn field_html(field: &Field, value: Option<&Value>) -> String {
    let key = escape(&field.key);
    let text = value.map(value_text).unwrap_or_default();
    let input = match &field.kind {
        FieldKind::Boolean { .. } => format!(
            "<input type=\"checkbox\" id=\"{key}\" name=\"{key}\"{}>",
            if value.and_then(Value::as_bool).unwrap_or(false) { " checked" } else { "" }
        ),
        FieldKind::String { .. } => format!(
            "<input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{}\">",
            escape(&text)
        ),
        FieldKind::Integer {
            minimum, maximum, ..
        } => format!(
            "<input type=\"number\" step=\"1\" id=\"{key}\" name=\"{key}\" value=\"{}\"{}{}>",
            escape(&text),
            bound_attr("min", minimum.map(|v| v.to_string())),
            bound_attr("max", maximum.map(|v| v.to_string())),
        ),
        FieldKind::Number {
            minimum, maximum, ..
        } => format!(
            "<input type=\"number\" step=\"any\" id=\"{key}\" name=\"{key}\" value=\"{}\"{}{}>",
            escape(&text),
            bound_attr("min", minimum.map(|v| v.to_string())),
            bound_attr("max", maximum.map(|v| v.to_string())),
        ),
        FieldKind::Enum(e) => {
            let mut select = format!("<select id=\"{key}\" name=\"{key}\">");
            for variant in &e.variants {
                let _ = write!(
                    select,
                    "<option value=\"{}\"{}>{}</option>",
                    escape(&variant.value),
                    if variant.value == text { " selected" } else { "" },
                    escape(&variant.label)
                );
            }
            select.push_str("</select>");
            select
        }
    };

    let mut out = format!(
        "<div class=\"field\">\n<label for=\"{key}\">{}</label>\n{input}\n",
        escape(&field.title)
    );
    if let Some(desc) = &field.description {
        let _ = writeln!(out, "<small>{}</small>", escape(desc));
    }
    out.push_str("</div>\n");
    out
}

fn bound_attr(name: &str, bound: Option<String>) -> String {
    bound
        .map(|b| format!(" {name}=\"{b}\""))
        .unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{group::SchemaGroup, schema::Field};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_form_reflects_values() {
        let schema = Schema::new("csv", "CSV Export Settings")
            .field(Field::enumeration(
                "delimiter",
                "Delimiter",
                [(",", "Comma (,)"), (";", "Semicolon (;)")],
                ",",
            ))
            .field(Field::boolean("include_headers", "Include Headers", true))
            .field(Field::integer("indent", "Indentation", 2).range(0, 8))
            .field(Field::string("note", "Note", ""));
        let values = json!({
            "delimiter": ";",
            "include_headers": true,
            "indent": 4,
            "note": "<b>hi</b>"
        });
        let html = schema_form(
            &schema,
            values.as_object().unwrap(),
            "/settings/plugins/export/csv",
            Some(&Notice::Saved),
        );

        assert!(html.contains("<option value=\";\" selected>Semicolon (;)</option>"));
        assert!(html.contains("<option value=\",\">Comma (,)</option>"));
        assert!(html.contains("name=\"include_headers\" checked"));
        assert!(html.contains("value=\"4\" min=\"0\" max=\"8\""));
        assert!(html.contains("value=\"&lt;b&gt;hi&lt;/b&gt;\""));
        assert!(html.contains("Settings saved."));
        assert!(html.contains("action=\"/settings/plugins/export/csv/reset\""));
    }

    #[test]
    fn test_sidebar_groups() {
        let mut registry = SchemaRegistry::new();
        registry.register(Schema::new("general", "General Settings").menu_title("General")).unwrap();
        registry
            .register(
                SchemaGroup::new("api", "API Settings")
                    .schema(Schema::new("authentication", "API Authentication").menu_title("Authentication")),
            )
            .unwrap();

        let closed = sidebar(&registry, None, Active::Schema("general"));
        assert!(closed.contains("<details><summary>API Settings</summary>"));
        assert!(closed.contains("<a href=\"/settings/schema/general\" class=\"active\">General</a>"));

        let open = sidebar(&registry, None, Active::Schema("api_authentication"));
        assert!(open.contains("<details open><summary>API Settings</summary>"));
    }

    #[test]
    fn test_page_sets_theme() {
        let html = page("Demo", "dracula", "<p>x</p>");
        assert!(html.contains("data-theme=\"dracula\""));
        assert!(html.contains("<title>Demo</title>"));
    }
}
