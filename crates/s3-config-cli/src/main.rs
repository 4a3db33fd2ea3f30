//! s3-config - print the effective S3 client configuration

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use s3_config::{ClientConfig, Protocol, ResolvedConfig};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "s3-config")]
#[command(about = "Show the configuration an S3 client would use")]
#[command(version)]
struct Args {
    /// Config file (toml, json or yaml)
    #[arg(short, long, env = "S3_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Service endpoint, e.g. s3.amazonaws.com or http://localhost:9000
    #[arg(long)]
    service_url: Option<String>,

    /// User agent sent with requests
    #[arg(long)]
    user_agent: Option<String>,

    /// Retries for failed requests (-1 means unset)
    #[arg(long, allow_hyphen_values = true)]
    max_error_retry: Option<i32>,

    /// Transport protocol (http or https)
    #[arg(long)]
    protocol: Option<Protocol>,

    /// I/O buffer size in bytes
    #[arg(long, allow_hyphen_values = true)]
    buffer_size: Option<i32>,

    /// Do not keep the secret key in protected storage
    #[arg(long)]
    insecure_credential_storage: bool,

    /// Print as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, env = "S3_CONFIG_DEBUG")]
    debug: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    base_url: String,
    endpoint: &'a str,
    port: u16,
    user_agent: &'a str,
    max_error_retry: u32,
    protocol: Protocol,
    use_secure_credential_storage: bool,
    buffer_size: usize,
}

impl<'a> From<&'a ResolvedConfig> for Report<'a> {
    fn from(resolved: &'a ResolvedConfig) -> Self {
        Self {
            base_url: resolved.base_url(),
            endpoint: resolved.endpoint(),
            port: resolved.port(),
            user_agent: resolved.user_agent(),
            max_error_retry: resolved.max_error_retry(),
            protocol: resolved.protocol(),
            use_secure_credential_storage: resolved.use_secure_credential_storage(),
            buffer_size: resolved.buffer_size(),
        }
    }
}

fn apply_overrides(config: &mut ClientConfig, args: &Args) {
    if let Some(ref url) = args.service_url {
        config.set_service_url(url.as_str());
    }
    if let Some(ref ua) = args.user_agent {
        config.set_user_agent(ua.as_str());
    }
    if let Some(retries) = args.max_error_retry {
        config.set_max_error_retry(retries);
    }
    if let Some(protocol) = args.protocol {
        config.set_communication_protocol(protocol);
    }
    if let Some(size) = args.buffer_size {
        config.set_buffer_size(size);
    }
    if args.insecure_credential_storage {
        config.set_use_secure_credential_storage(false);
    }
}

/// Load the config named by `--config` (or `S3_CONFIG_FILE`) and apply the
/// flags on top. `env` replaces the process environment when given.
fn build_config(args: &Args, env: Option<HashMap<String, String>>) -> s3_config::Result<ClientConfig> {
    let mut config = ClientConfig::load_from(args.config.as_deref(), env)?;
    apply_overrides(&mut config, args);
    Ok(config)
}

fn render_text(report: &Report<'_>) -> String {
    [
        format!("base_url:                      {}", report.base_url),
        format!("endpoint:                      {}", report.endpoint),
        format!("port:                          {}", report.port),
        format!("user_agent:                    {}", report.user_agent),
        format!("max_error_retry:               {}", report.max_error_retry),
        format!("protocol:                      {}", report.protocol),
        format!("use_secure_credential_storage: {}", report.use_secure_credential_storage),
        format!("buffer_size:                   {}", report.buffer_size),
    ]
    .join("\n")
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse arguments
    let args = Args::parse();

    // Setup logging
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("s3_config={},s3_config_cli={}", log_level, log_level).into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = build_config(&args, None)?;

    if !config.use_secure_credential_storage() {
        tracing::warn!("Secure credential storage is DISABLED - the secret key may be exposed in memory");
    }

    let resolved = config.resolve()?;
    let report = Report::from(&resolved);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text(&report));
    }

    Ok(())
}
