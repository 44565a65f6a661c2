use std::process;

use clap::Parser;
use qxiangqi::cli::{run, Cli};
use qxiangqi::core::{settings_path, try_load_settings};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let settings_file = cli.config.clone().unwrap_or_else(settings_path);
    let loaded = try_load_settings(&settings_file);
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = &loaded {
        warn!(
            "[SETTINGS] Failed to load settings at {:?}: {}. Using defaults.",
            settings_file, e
        );
    }

    match run(&cli, &settings, &settings_file) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}
