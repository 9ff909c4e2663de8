/// One of the four severity buckets Snyk assigns to a vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Maps a severity label from the API to a bucket. Labels are
    /// case-sensitive lowercase; anything else maps to `None` and is
    /// left out of the tally.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Per-project vulnerability counts, rebuilt from scratch for every
/// API response and merged into one csv row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityTally {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl SeverityTally {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    /// Derived column: always the sum of the two top buckets.
    pub fn critical_high(&self) -> u32 {
        self.critical + self.high
    }
}
