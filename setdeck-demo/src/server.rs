//! HTTP server bootstrap.

use std::time::Duration;

use anyhow::Context;
use axum::Router;
use colored::Colorize;
use log::{info, warn};
use tokio::net::TcpListener;

use crate::{
    home::{self, HomeState},
    startup::DemoApp,
};

/// Delay before the browser is opened, giving the listener time to come up.
const BROWSER_DELAY: Duration = Duration::from_millis(1500);

/// Homepage plus the settings routes.
pub fn app_router(app: &DemoApp) -> Router {
    home::router(HomeState {
        registry: app.registry.clone(),
        plugins: app.plugins.clone(),
        settings: app.settings.state().clone(),
    })
    .merge(app.settings.router())
}

/// Bind `host:port` and serve until the process is stopped.
pub async fn serve(app: &DemoApp, host: &str, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    // 0.0.0.0 is not browsable
    let display_host = if host == "0.0.0.0" { "localhost" } else { host };
    let url = format!("http://{display_host}:{port}");
    println!("{} {}", "Server:".bold(), url.green());
    info!("listening on {addr}");

    if open_browser {
        tokio::spawn(async move {
            tokio::time::sleep(BROWSER_DELAY).await;
            info!("opening browser at {url}");
            if let Err(e) = webbrowser::open(&url) {
                warn!("failed to open browser: {e}");
            }
        });
    }

    axum::serve(listener, app_router(app))
        .await
        .context("server terminated")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::startup::DemoOptions;

    #[tokio::test]
    async fn test_routes_mounted() {
        let dir = tempfile::tempdir().unwrap();
        let app = DemoApp::build(&DemoOptions {
            config_dir: dir.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap();
        let router = app_router(&app);

        for uri in [
            "/",
            "/settings/index",
            "/settings/schema/notifications",
            "/settings/schema/database_connection",
            "/settings/plugins/processing/data_cleaner",
        ] {
            let response = router
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }
}
