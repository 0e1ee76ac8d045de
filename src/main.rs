use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tokio::io::BufReader;
use tracing::{info, warn};

use tagtriage::config::{load_tag_config, validate_tag_config, ConfigError};
use tagtriage::logging::{self, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use tagtriage::user_config::{self, UserConfig};
use tagtriage::utils::{default_log_dir, DEFAULT_CONFIG_FILE};
use tagtriage::{app, checks, TaggerEngine};

/// Tagtriage - keyword-frequency message tagger for support triage
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the tag configuration JSON (default: `./tag_config.json`)
    #[arg(short, long, env = "TAGTRIAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Run the built-in configuration spot checks and exit
    #[arg(long)]
    check: bool,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "TAGTRIAGE_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "TAGTRIAGE_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.tagtriage/logs)
    #[arg(long, env = "TAGTRIAGE_LOG_DIR")]
    log_dir: Option<String>,
}

fn report_config_error(path: &Path, log_file: &Path, e: &ConfigError) {
    eprintln!();
    eprintln!("Error: Failed to load tag configuration: {e}");
    eprintln!();
    match e {
        ConfigError::NotFound(_) => {
            eprintln!("No configuration file was found at: {}", path.display());
            eprintln!();
            eprintln!("Options:");
            eprintln!("  1. Create tag_config.json in the working directory");
            eprintln!("  2. Point at an existing file:  tagtriage --config /path/to/tags.json");
            eprintln!("  3. Set config_path under [tagger] in ~/.tagtriage/config.toml");
        }
        _ => {
            eprintln!("The file at {} could not be used.", path.display());
            eprintln!();
            eprintln!("Expected shape:");
            eprintln!("  {{\"tags\": {{\"SALES\": {{\"keywords\": [\"buy\", \"price\"]}}}}}}");
        }
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

/// Pick the tag configuration path: CLI flag, then user config, then the
/// working-directory default.
fn resolve_config_path(cli: Option<PathBuf>, user_cfg: &UserConfig) -> PathBuf {
    cli.or_else(|| user_cfg.tagger.config_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[allow(clippy::too_many_lines)]
#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    // Configure and initialize logging
    let log_dir = args.log_dir.map_or_else(default_log_dir, PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Load user-level config (~/.tagtriage/config.toml); file is optional.
    let user_cfg = user_config::load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let config_path = resolve_config_path(args.config, &user_cfg);
    info!("Loading tag configuration from {}", config_path.display());

    let tag_config = match load_tag_config(&config_path).await {
        Ok(config) => config,
        Err(e) => {
            report_config_error(&config_path, &log_file, &e);
            return Err(e.into());
        }
    };

    for finding in validate_tag_config(&tag_config) {
        warn!("{finding}");
    }
    info!(
        "Loaded {} tags: {}",
        tag_config.len(),
        tag_config.tag_names().collect::<Vec<_>>().join(", ")
    );

    let engine = TaggerEngine::new(tag_config);

    if args.check {
        let mut stdout = tokio::io::stdout();
        let failed = checks::run_checks(&engine, &mut stdout).await?;
        if failed > 0 {
            return Err(eyre!("{failed} spot check(s) failed"));
        }
        return Ok(());
    }

    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    tokio::select! {
        result = app::run_interactive(&engine, reader, &mut stdout) => {
            let analyzed = result?;
            info!("Session ended after {analyzed} analyzed messages");
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!();
            eprintln!("Interrupted. Goodbye!");
            info!("Session interrupted by Ctrl-C");
        }
    }

    Ok(())
}
