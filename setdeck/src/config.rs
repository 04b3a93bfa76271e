//! Application-wide settings schema.
//!
//! The `general` schema is registered first by every application. Its theme
//! field depends on whether a theme catalog was compiled in, which is
//! reported by [`detect_theme_support`].

use crate::schema::{Field, Schema, title_case};

/// Name of the application settings schema.
pub const APP_CONFIG_SCHEMA: &str = "general";

/// Theme applied when nothing else is configured.
pub const DEFAULT_THEME: &str = "light";

/// Theme catalog availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSupport {
    /// Themes that may be offered, in display order.
    Available(&'static [&'static str]),
    Unavailable,
}

impl ThemeSupport {
    pub fn is_available(&self) -> bool {
        matches!(self, ThemeSupport::Available(t) if !t.is_empty())
    }
}

/// Report whether the crate was built with the `themes` feature.
pub fn detect_theme_support() -> ThemeSupport {
    #[cfg(feature = "themes")]
    {
        ThemeSupport::Available(crate::theme::THEMES)
    }
    #[cfg(not(feature = "themes"))]
    {
        ThemeSupport::Unavailable
    }
}

/// Literal values of the application settings.
#[derive(Debug, Clone)]
pub struct AppConfigOptions {
    pub app_title: String,
    pub server_host: String,
    pub server_port: u16,
    /// Preferred theme; falls back to the first catalog entry when unknown.
    pub default_theme: String,
}

impl Default for AppConfigOptions {
    fn default() -> Self {
        Self {
            app_title: "Settings".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 5010,
            default_theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// Build the `general` schema. The `theme` field is only present when
/// `themes` is [`ThemeSupport::Available`] with at least one entry.
pub fn app_config_schema(options: &AppConfigOptions, themes: &ThemeSupport) -> Schema {
    let mut schema = Schema::new(APP_CONFIG_SCHEMA, "General Settings")
        .menu_title("General")
        .description("Application-wide configuration")
        .field(
            Field::string("app_title", "Application Title", options.app_title.as_str())
                .description("Title shown in the browser tab and page header"),
        )
        .field(
            Field::string("server_host", "Server Host", options.server_host.as_str())
                .description("Interface the HTTP server binds to"),
        )
        .field(
            Field::integer("server_port", "Server Port", options.server_port.into())
                .range(1, 65535)
                .description("Port the HTTP server listens on"),
        )
        .field(Field::boolean("auto_open_browser", "Open Browser on Start", true))
        .field(
            Field::boolean("debug_mode", "Debug Mode", false)
                .description("Enable verbose logging"),
        );

    if let ThemeSupport::Available(catalog) = themes
        && let Some(first) = catalog.first()
    {
        let default = if catalog.contains(&options.default_theme.as_str()) {
            options.default_theme.as_str()
        } else {
            *first
        };
        schema = schema.field(
            Field::enumeration(
                "theme",
                "Theme",
                catalog.iter().map(|t| (*t, title_case(t))),
                default,
            )
            .description("Color theme of the interface"),
        );
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    #[test]
    fn test_with_themes() {
        let options = AppConfigOptions {
            default_theme: "dark".into(),
            ..Default::default()
        };
        let schema = app_config_schema(&options, &ThemeSupport::Available(&["light", "dark"]));
        assert!(schema.validate().is_ok());
        let FieldKind::Enum(theme) = &schema.get_field("theme").unwrap().kind else {
            panic!("theme should be an enum");
        };
        assert_eq!(theme.default.as_deref(), Some("dark"));
        assert_eq!(theme.label_for("light"), Some("Light"));
        assert_eq!(schema.defaults()["server_port"], 5010);
    }

    #[test]
    fn test_unknown_default_theme_falls_back() {
        let options = AppConfigOptions {
            default_theme: "solarized".into(),
            ..Default::default()
        };
        let schema = app_config_schema(&options, &ThemeSupport::Available(&["nord", "dim"]));
        assert_eq!(schema.defaults()["theme"], "nord");
    }

    #[test]
    fn test_without_themes() {
        let schema = app_config_schema(&AppConfigOptions::default(), &ThemeSupport::Unavailable);
        assert!(schema.validate().is_ok());
        assert!(schema.get_field("theme").is_none());
        assert_eq!(schema.name, APP_CONFIG_SCHEMA);

        let empty = app_config_schema(&AppConfigOptions::default(), &ThemeSupport::Available(&[]));
        assert!(empty.get_field("theme").is_none());
        assert!(!ThemeSupport::Available(&[]).is_available());
    }

    #[cfg(feature = "themes")]
    #[test]
    fn test_detect_with_feature() {
        assert!(detect_theme_support().is_available());
    }
}
