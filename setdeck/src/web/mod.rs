//! Settings router.
//!
//! Serves every registered schema as an HTML form under `/settings` and
//! persists submissions through a [`ConfigStore`]. A JSON API under
//! `/settings/api` exposes the same data for scripts.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use setdeck::{
//!     config::{AppConfigOptions, app_config_schema, detect_theme_support},
//!     registry::SchemaRegistry,
//!     web::{SettingsConfig, configure_settings},
//! };
//!
//! # async fn serve() -> setdeck::Result<()> {
//! let mut registry = SchemaRegistry::new();
//! registry.register(app_config_schema(
//!     &AppConfigOptions::default(),
//!     &detect_theme_support(),
//! ))?;
//!
//! let settings = configure_settings(Arc::new(registry), SettingsConfig::new("configs"))?;
//! let app = axum::Router::new().merge(settings.router());
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use log::{error, info};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tower_http::cors::CorsLayer;

use crate::{
    config::{APP_CONFIG_SCHEMA, DEFAULT_THEME},
    error::{Error, Result},
    plugin::PluginRegistry,
    registry::{RegistryEntry, SchemaRegistry},
    schema::Schema,
    store::ConfigStore,
};

pub mod render;

use render::{Active, Notice};

/// Mount point of the settings routes.
pub const SETTINGS_PREFIX: &str = "/settings";

/// Landing page of the settings interface.
pub const SETTINGS_INDEX: &str = "/settings/index";

/// URL of a schema form.
pub fn schema_url(id: &str) -> String {
    format!("{SETTINGS_PREFIX}/schema/{id}")
}

/// URL of a plugin configuration form.
pub fn plugin_url(category: &str, name: &str) -> String {
    format!("{SETTINGS_PREFIX}/plugins/{category}/{name}")
}

/// Settings router configuration.
#[derive(Debug, Clone)]
pub struct SettingsConfig {
    /// Directory receiving one JSON file per form id.
    pub config_dir: PathBuf,
    /// Form id rendered by `/settings/index`.
    pub default_schema: String,
    pub plugin_registry: Option<Arc<PluginRegistry>>,
    /// Prefix of every page title.
    pub app_title: String,
}

impl SettingsConfig {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            default_schema: APP_CONFIG_SCHEMA.to_string(),
            plugin_registry: None,
            app_title: "Settings".to_string(),
        }
    }

    pub fn default_schema(mut self, id: impl Into<String>) -> Self {
        self.default_schema = id.into();
        self
    }

    pub fn plugin_registry(mut self, plugins: Arc<PluginRegistry>) -> Self {
        self.plugin_registry = Some(plugins);
        self
    }

    pub fn app_title(mut self, title: impl Into<String>) -> Self {
        self.app_title = title.into();
        self
    }
}

/// State shared by the settings handlers.
#[derive(Debug)]
pub struct SettingsState {
    pub registry: Arc<SchemaRegistry>,
    pub plugins: Option<Arc<PluginRegistry>>,
    pub store: ConfigStore,
    pub default_schema: String,
    pub app_title: String,
}

impl SettingsState {
    /// Theme stored in the default schema, or `light`.
    pub async fn active_theme(&self) -> String {
        let Some(resolved) = self.registry.resolve(&self.default_schema) else {
            return DEFAULT_THEME.to_string();
        };
        match self.store.load(&self.default_schema, resolved.schema).await {
            Ok(values) => values
                .get("theme")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_THEME)
                .to_string(),
            Err(e) => {
                error!("failed to read theme from `{}`: {e}", self.default_schema);
                DEFAULT_THEME.to_string()
            }
        }
    }

    fn plugins(&self) -> std::result::Result<&PluginRegistry, WebError> {
        self.plugins
            .as_deref()
            .ok_or_else(|| WebError::NotFound("no plugins are configured".into()))
    }

    async fn render_schema(&self, id: &str, notice: Option<Notice>) -> Result<String> {
        let resolved = self.registry.require(id)?;
        let values = self.store.load(id, resolved.schema).await?;
        self.render_form_page(Active::Schema(id), resolved.schema, &values, &schema_url(id), "", notice)
            .await
    }

    async fn render_plugin(&self, category: &str, name: &str, notice: Option<Notice>) -> Result<String> {
        let Some(plugins) = self.plugins.as_deref() else {
            return Err(Error::UnknownCategory(category.to_string()));
        };
        let plugin = plugins.plugin(category, name)?;
        let values = plugins.load_plugin_config(category, name).await?;
        self.render_form_page(
            Active::Plugin(category, name),
            &plugin.config_schema,
            &values,
            &plugin_url(category, name),
            &render::plugin_header(&plugin),
            notice,
        )
        .await
    }

    async fn render_form_page(
        &self,
        active: Active<'_>,
        schema: &Schema,
        values: &Map<String, Value>,
        action: &str,
        header: &str,
        notice: Option<Notice>,
    ) -> Result<String> {
        let nav = render::sidebar(&self.registry, self.plugins.as_deref(), active);
        let content = format!(
            "{header}{}",
            render::schema_form(schema, values, action, notice.as_ref())
        );
        let title = format!("{} - {}", schema.title, self.app_title);
        Ok(render::page(
            &title,
            &self.active_theme().await,
            &render::layout(&nav, &content),
        ))
    }
}

/// Configured settings routes.
#[derive(Debug, Clone)]
pub struct SettingsRouter {
    state: Arc<SettingsState>,
}

/// Build the settings router over a fully populated registry.
///
/// # Errors
///
/// Returns [`Error::UnknownSchema`] when `config.default_schema` is not a
/// registered form id.
pub fn configure_settings(registry: Arc<SchemaRegistry>, config: SettingsConfig) -> Result<SettingsRouter> {
    registry.require(&config.default_schema)?;
    info!(
        "settings configured: {} schemas, default `{}`, config dir {}",
        registry.schema_ids().len(),
        config.default_schema,
        config.config_dir.display()
    );
    Ok(SettingsRouter {
        state: Arc::new(SettingsState {
            registry,
            plugins: config.plugin_registry,
            store: ConfigStore::new(config.config_dir),
            default_schema: config.default_schema,
            app_title: config.app_title,
        }),
    })
}

impl SettingsRouter {
    pub fn state(&self) -> &Arc<SettingsState> {
        &self.state
    }

    /// Routes nested under [`SETTINGS_PREFIX`].
    pub fn router(&self) -> Router {
        let routes = Router::new()
            .route("/", get(|| async { Redirect::to(SETTINGS_INDEX) }))
            .route("/index", get(index))
            .route("/schema/{id}", get(show_schema).post(save_schema))
            .route("/schema/{id}/reset", post(reset_schema))
            .route("/plugins/{category}/{name}", get(show_plugin).post(save_plugin))
            .route("/plugins/{category}/{name}/reset", post(reset_plugin))
            .route("/api/schemas", get(api_list))
            .route("/api/schemas/{id}", get(api_get).put(api_put))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone());
        Router::new().nest(SETTINGS_PREFIX, routes)
    }
}

type AppState = State<Arc<SettingsState>>;

async fn index(State(state): AppState) -> std::result::Result<Html<String>, WebError> {
    let html = state.render_schema(&state.default_schema, None).await?;
    Ok(Html(html))
}

async fn show_schema(State(state): AppState, Path(id): Path<String>) -> std::result::Result<Html<String>, WebError> {
    Ok(Html(state.render_schema(&id, None).await?))
}

async fn save_schema(
    State(state): AppState,
    Path(id): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> std::result::Result<Response, WebError> {
    let resolved = state.registry.require(&id)?;
    match resolved.schema.values_from_form(&form) {
        Ok(values) => {
            state.store.save(&id, resolved.schema, &values).await?;
            Ok(Html(state.render_schema(&id, Some(Notice::Saved)).await?).into_response())
        }
        Err(e) => {
            let html = state
                .render_schema(&id, Some(Notice::Error(e.to_string())))
                .await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

async fn reset_schema(State(state): AppState, Path(id): Path<String>) -> std::result::Result<Html<String>, WebError> {
    state.registry.require(&id)?;
    state.store.reset(&id).await?;
    Ok(Html(state.render_schema(&id, Some(Notice::Reset)).await?))
}

async fn show_plugin(
    State(state): AppState,
    Path((category, name)): Path<(String, String)>,
) -> std::result::Result<Html<String>, WebError> {
    Ok(Html(state.render_plugin(&category, &name, None).await?))
}

async fn save_plugin(
    State(state): AppState,
    Path((category, name)): Path<(String, String)>,
    Form(form): Form<HashMap<String, String>>,
) -> std::result::Result<Response, WebError> {
    let plugins = state.plugins()?;
    let schema = plugins.plugin_config_schema(&category, &name)?;
    match schema.values_from_form(&form) {
        Ok(values) => {
            plugins.save_plugin_config(&category, &name, &values).await?;
            let html = state
                .render_plugin(&category, &name, Some(Notice::Saved))
                .await?;
            Ok(Html(html).into_response())
        }
        Err(e) => {
            let html = state
                .render_plugin(&category, &name, Some(Notice::Error(e.to_string())))
                .await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

async fn reset_plugin(
    State(state): AppState,
    Path((category, name)): Path<(String, String)>,
) -> std::result::Result<Html<String>, WebError> {
    let plugins = state.plugins()?;
    plugins.plugin(&category, &name)?;
    plugins
        .store()
        .reset(&PluginRegistry::config_id(&category, &name))
        .await?;
    Ok(Html(
        state
            .render_plugin(&category, &name, Some(Notice::Reset))
            .await?,
    ))
}

#[derive(Serialize)]
struct SchemaSummary {
    id: String,
    title: String,
    menu_title: String,
    group: Option<String>,
}

impl SchemaSummary {
    fn new(id: String, schema: &Schema, group: Option<&str>) -> Self {
        Self {
            id,
            title: schema.title.clone(),
            menu_title: schema.display_title().to_string(),
            group: group.map(str::to_string),
        }
    }
}

async fn api_list(State(state): AppState) -> Json<Vec<SchemaSummary>> {
    let mut out = Vec::new();
    for entry in state.registry.iter() {
        match entry {
            RegistryEntry::Schema(s) => out.push(SchemaSummary::new(s.name.clone(), s, None)),
            RegistryEntry::Group(g) => out.extend(
                g.schemas
                    .iter()
                    .map(|s| SchemaSummary::new(g.member_id(&s.name), s, Some(&g.name))),
            ),
        }
    }
    Json(out)
}

async fn api_get(State(state): AppState, Path(id): Path<String>) -> std::result::Result<Json<Value>, WebError> {
    let resolved = state.registry.require(&id)?;
    let values = state.store.load(&id, resolved.schema).await?;
    Ok(Json(json!({
        "id": id,
        "schema": resolved.schema.to_json(),
        "values": values,
    })))
}

async fn api_put(
    State(state): AppState,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> std::result::Result<Json<Value>, WebError> {
    let resolved = state.registry.require(&id)?;
    let values = state.store.save(&id, resolved.schema, &body).await?;
    Ok(Json(json!({ "id": id, "values": values })))
}

/// Handler error mapped to an HTTP status.
#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    Invalid(String),
    Internal(Error),
}

impl From<Error> for WebError {
    fn from(e: Error) -> Self {
        match e {
            Error::UnknownSchema(_) | Error::UnknownCategory(_) | Error::UnknownPlugin { .. } => {
                WebError::NotFound(e.to_string())
            }
            Error::Schema(e) => WebError::Invalid(e.to_string()),
            other => WebError::Internal(other),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            WebError::Invalid(m) => (StatusCode::UNPROCESSABLE_ENTITY, m),
            WebError::Internal(e) => {
                error!("settings handler failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
