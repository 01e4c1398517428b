use noces_algo::config::Settings;
use noces_algo::models::ErrorResponse;
use noces_algo::{MatchError, MatchOptions, Matcher, RankRequest, RankResponse};
use std::io::Read;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// Errors surfaced by the command-line harness
#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Matching failed: {0}")]
    Match(#[from] MatchError),
}

impl CliError {
    fn kind(&self) -> &'static str {
        match self {
            CliError::Io(_) => "io_error",
            CliError::Json(_) => "invalid_json",
            CliError::Validation(_) => "validation_failed",
            CliError::Match(_) => "invalid_input",
        }
    }
}

fn init_logging(settings: &Settings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    // stdout carries the JSON response
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

/// Read the request from the path given as first argument, or from stdin
fn read_request() -> Result<RankRequest, CliError> {
    let raw = match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn run(settings: &Settings) -> Result<RankResponse, CliError> {
    let request = read_request()?;
    request.validate()?;

    let matcher = Matcher::new(settings.fairness)?.with_min_score(settings.matching.min_score);
    let limit = request
        .limit
        .unwrap_or(settings.matching.default_limit)
        .min(settings.matching.max_limit);

    info!(
        "Ranking {} candidates for category {}, limit: {}",
        request.candidates.len(),
        request.requirement.service_category,
        limit
    );

    let options = MatchOptions {
        bonuses: request.bonuses,
        exclude_ids: request.exclude_ids,
        limit,
    };
    let result = matcher.find_matches(&request.requirement, request.candidates, &options)?;

    Ok(RankResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        eligible_candidates: result.eligible_candidates,
    })
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings);
    info!("Configuration loaded, fairness policy: {:?}", settings.fairness);

    match run(&settings) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{}", e);
            let body = ErrorResponse {
                error: e.kind().to_string(),
                message: e.to_string(),
            };
            if let Ok(json) = serde_json::to_string(&body) {
                println!("{}", json);
            }
            ExitCode::from(2)
        }
    }
}
