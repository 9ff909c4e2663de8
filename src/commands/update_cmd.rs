use std::env;
use std::path::Path;

use crate::commands::base_commands::Commands;
use crate::services::csv_rewriter::{UpdateError, rewrite};
use crate::services::reporter::Reporter;
use crate::services::snyk_api::{API_BASE_URL, API_URL_ENV_VAR, SnykApiClient, resolve_token};

pub fn update_command(cmd: Commands, reporter: &dyn Reporter) -> Result<(), UpdateError> {
    if let Commands::Update { path, token } = cmd {
        // The token must resolve before any file or network work.
        let token = resolve_token(token, |name| env::var(name).ok())?;
        let base_url =
            env::var(API_URL_ENV_VAR).unwrap_or_else(|_| API_BASE_URL.to_string());

        reporter.info(&format!("CSV file: {path}"));
        let client = SnykApiClient::new(base_url, token, reporter);
        rewrite(Path::new(&path), &client, reporter)?;
        reporter.info("Done");
    }
    Ok(())
}
