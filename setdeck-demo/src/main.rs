use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use setdeck_demo::{
    server,
    startup::{DemoApp, DemoOptions},
};

#[derive(Parser, Debug)]
#[command(version, about = "Browsable settings UI built from setdeck schemas")]
struct Cli {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    #[arg(short, long, default_value_t = 5010)]
    port: u16,
    /// Directory receiving saved settings
    #[arg(long, default_value = "demo_configs")]
    config_dir: PathBuf,
    /// Do not open a browser window on start
    #[arg(long)]
    no_browser: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = DemoOptions {
        host: cli.host,
        port: cli.port,
        config_dir: cli.config_dir,
        ..Default::default()
    };

    let app = DemoApp::build(&options)?;
    app.print_summary();
    server::serve(&app, &options.host, options.port, !cli.no_browser).await
}
