//! Homepage.

use std::sync::Arc;

use axum::{Router, extract::State, response::Html, routing::get};
use setdeck::{
    PluginRegistry, SchemaRegistry,
    web::{
        SETTINGS_INDEX, SettingsState,
        render::{escape, page},
    },
};

use crate::startup::APP_TITLE;

const FEATURES: &[&str] = &[
    "Basic schema registration and configuration forms",
    "Schema groups with collapsible sidebar sections",
    "Plugin integration with multiple categories",
    "Configuration persistence (auto-saved to JSON)",
    "Theme selection stored with the application settings",
    "JSON API for reading and updating settings",
];

#[derive(Debug, Clone)]
pub struct HomeState {
    pub registry: Arc<SchemaRegistry>,
    pub plugins: Arc<PluginRegistry>,
    /// Source of the active theme.
    pub settings: Arc<SettingsState>,
}

/// Counts shown on the homepage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeStats {
    pub schemas: usize,
    pub plugins: usize,
    pub categories: usize,
}

impl HomeStats {
    pub fn collect(registry: &SchemaRegistry, plugins: &PluginRegistry) -> Self {
        Self {
            schemas: registry.list_schemas().len(),
            plugins: plugins.total_plugins(),
            categories: plugins.categories_with_plugins().len(),
        }
    }
}

pub fn router(state: HomeState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(state): State<HomeState>) -> Html<String> {
    let stats = HomeStats::collect(&state.registry, &state.plugins);
    Html(render(&stats, &state.settings.active_theme().await))
}

fn render(stats: &HomeStats, theme: &str) -> String {
    let features: String = FEATURES
        .iter()
        .map(|f| format!("<li>✓ {}</li>\n", escape(f)))
        .collect();
    let body = format!(
        "<main>\n<h1>{title}</h1>\n\
         <p>Comprehensive demonstration of all library features:</p>\n\
         <ul>\n{features}</ul>\n\
         <p>\
         <span class=\"badge\"><b>{schemas}</b> Schema Groups</span>\
         <span class=\"badge\"><b>{plugins}</b> Plugins</span>\
         <span class=\"badge\"><b>{categories}</b> Plugin Categories</span>\
         </p>\n\
         <p><a class=\"btn\" href=\"{SETTINGS_INDEX}\">Open Settings</a></p>\n</main>",
        title = escape(APP_TITLE),
        schemas = stats.schemas,
        plugins = stats.plugins,
        categories = stats.categories,
    );
    page(APP_TITLE, theme, &body)
}
