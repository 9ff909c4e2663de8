use serde::{Deserialize, Serialize};

use crate::domain::severity::SeverityTally;

/// The fixed column order of the project csv. The file is read and
/// written positionally against this schema, never inferred.
pub const CSV_COLUMNS: [&str; 10] = [
    "name",
    "id",
    "team",
    "domain",
    "critical",
    "high",
    "medium",
    "low",
    "critical/high",
    "ticket",
];

/// One line of the project csv. Counts are carried as strings because
/// input cells may be empty; they are overwritten from a tally on
/// every run. `ticket` passes through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub name: String,
    pub id: String,
    pub team: String,
    pub domain: String,
    pub critical: String,
    pub high: String,
    pub medium: String,
    pub low: String,
    #[serde(rename = "critical/high")]
    pub critical_high: String,
    pub ticket: String,
}

impl ProjectRow {
    pub fn apply_tally(&mut self, tally: &SeverityTally) {
        self.critical = tally.critical.to_string();
        self.high = tally.high.to_string();
        self.medium = tally.medium.to_string();
        self.low = tally.low.to_string();
        self.critical_high = tally.critical_high().to_string();
    }
}
