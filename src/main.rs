use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use augur::{analyze, AnalysisRequest, Config};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "augur",
    version,
    about = "Score a leveraged entry and size its take-profit / stop-loss"
)]
struct Args {
    /// Request JSON (stdin if omitted)
    request: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    let input = match &args.request {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    let request: AnalysisRequest =
        serde_json::from_str(&input).context("Request is not a valid analysis request")?;
    info!(
        candles = request.candles.len(),
        "Analyzing {}",
        request.symbol.as_deref().unwrap_or(&config.references.primary)
    );

    let report = analyze(&request, &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_request_path_is_optional() {
        let args = Args::try_parse_from(["augur"]).unwrap();
        assert!(args.request.is_none());

        let args = Args::try_parse_from(["augur", "request.json"]).unwrap();
        assert_eq!(args.request, Some(PathBuf::from("request.json")));
    }

    #[test]
    fn test_help_is_not_a_request_path() {
        let err = Args::try_parse_from(["augur", "--help"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
