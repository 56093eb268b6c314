//! dyncall CLI - Main entry point
//!
//! 산술 연산을 이름으로 등록하고, stdin의 `이름 a b` 입력을 호출합니다.
//!
//! ```text
//! $ printf 'plus 3 4\nmodulo 10 3\n' | dyncall
//! 7
//! Lookup failed: no function 'modulo'
//! ```

mod driver;

pub use driver::{Driver, DriverSummary};

use clap::Parser;
use dyncall_core::{register_arithmetic, ArithmeticRegistry, Registry};
use dyncall_foundation::DynCallConfig;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// dyncall - invoke registered integer operations by name
#[derive(Parser, Debug)]
#[command(name = "dyncall")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the global/project config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List registered operations and exit
    #[arg(short, long)]
    list: bool,

    /// Print registry statistics as JSON and exit
    #[arg(long)]
    stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging (stdout는 결과 전용)
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Load configuration
    let config = match &args.config {
        Some(path) => DynCallConfig::load_from(path)?,
        None => DynCallConfig::load(),
    };
    debug!("Config: {:?}", config);

    let registry = build_registry(&config);

    if args.list {
        for (id, meta) in registry.iter() {
            match &meta.alias_of {
                Some(target) => println!("{:<12} {} (alias of {})", id, meta.description, target),
                None => println!("{:<12} {}", id, meta.description),
            }
        }
        return Ok(());
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&registry.stats())?);
        return Ok(());
    }

    let driver = Driver::new(&registry, config.driver.clone());
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    let summary = driver
        .run(input, &mut stdout.lock(), &mut stderr.lock())
        .await?;

    if summary.stopped {
        std::process::exit(1);
    }

    Ok(())
}

/// 설정 기반 레지스트리 생성: builtin 등록 후 alias 적용
fn build_registry(config: &DynCallConfig) -> ArithmeticRegistry {
    let mut registry = Registry::with_config(config.registry.clone());
    register_arithmetic(&mut registry);

    for (alias, target) in &config.aliases {
        if let Err(e) = registry.alias(alias.clone(), target.as_str()) {
            match e.missing_id() {
                Some(missing) => warn!("Skipping alias '{}': '{}' is not registered", alias, missing),
                None => warn!("Skipping alias '{}': {}", alias, e),
            }
        }
    }

    registry
}
