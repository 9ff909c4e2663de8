use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::severity::{Severity, SeverityTally};
use crate::services::reporter::Reporter;
use crate::services::severity_source::{SeveritySource, SeveritySourceError};

pub const API_BASE_URL: &str = "https://api.snyk.io/v1";
pub const API_URL_ENV_VAR: &str = "SNYK_API_URL";
pub const TOKEN_ENV_VAR: &str = "SNYK_TOKEN";

// All calls are scoped to this one account.
const ORG_ID: &str = "ce8dc694-7bb9-4388-ba7e-5636cc5d97cb";

/// Resolves the API token: an explicit flag value wins, otherwise the
/// `SNYK_TOKEN` environment variable. The lookup is injected so tests
/// never touch the process environment.
pub fn resolve_token(
    flag: Option<String>,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, SeveritySourceError> {
    flag.or_else(|| env_lookup(TOKEN_ENV_VAR))
        .ok_or(SeveritySourceError::MissingToken)
}

#[derive(Debug, Deserialize)]
struct AggregatedIssues {
    issues: Vec<IssueRecord>,
}

#[derive(Debug, Deserialize)]
struct IssueRecord {
    #[serde(rename = "issueType")]
    issue_type: String,
    #[serde(rename = "issueData", default)]
    issue_data: Option<IssueData>,
}

#[derive(Debug, Deserialize, Default)]
struct IssueData {
    #[serde(default)]
    severity: Option<String>,
}

/// Counts `vuln` issues by severity bucket. Other issue types
/// (`license`, `configuration`) and unrecognized severity labels
/// contribute nothing.
fn tally_issues(issues: &[IssueRecord]) -> SeverityTally {
    let mut tally = SeverityTally::default();
    for issue in issues {
        if issue.issue_type != "vuln" {
            continue;
        }
        let severity = issue
            .issue_data
            .as_ref()
            .and_then(|data| data.severity.as_deref())
            .and_then(Severity::from_label);
        if let Some(severity) = severity {
            tally.record(severity);
        }
    }
    tally
}

pub struct SnykApiClient<'a> {
    base_url: String,
    api_token: String,
    client: Client,
    reporter: &'a dyn Reporter,
}

impl<'a> SnykApiClient<'a> {
    pub fn new(base_url: String, api_token: String, reporter: &'a dyn Reporter) -> Self {
        Self {
            base_url,
            api_token,
            client: Client::new(),
            reporter,
        }
    }

    fn fetch_aggregated_issues(
        &self,
        project_id: &str,
    ) -> Result<AggregatedIssues, SeveritySourceError> {
        let url = format!(
            "{}/org/{ORG_ID}/project/{project_id}/aggregated-issues",
            self.base_url
        );

        // Descriptions and introduced-through data are dead weight for
        // counting, so ask the API to leave them out.
        let body = serde_json::json!({
            "includeDescription": false,
            "includeIntroducedThrough": false,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("token {}", self.api_token))
            .json(&body)
            .send()
            .map_err(|_| SeveritySourceError::Connection)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(SeveritySourceError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SeveritySourceError::Status(status.as_u16()));
        }

        response
            .json::<AggregatedIssues>()
            .map_err(|_| SeveritySourceError::Parse)
    }
}

impl SeveritySource for SnykApiClient<'_> {
    fn severity_counts(&self, project_id: &str) -> Result<SeverityTally, SeveritySourceError> {
        self.reporter
            .info(&format!("Getting severity counts for project id \"{project_id}\""));
        let payload = self.fetch_aggregated_issues(project_id)?;
        let tally = tally_issues(&payload.issues);
        self.reporter
            .info(&format!("Severity counts for project id {project_id}: {tally:?}"));
        Ok(tally)
    }
}
