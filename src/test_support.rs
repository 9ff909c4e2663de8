use std::cell::RefCell;

use crate::domain::severity::SeverityTally;
use crate::services::reporter::Reporter;
use crate::services::severity_source::{SeveritySource, SeveritySourceError};

/// A severity source that returns the same tally for every project
/// and records the ids it was asked about.
pub struct FixedSeveritySource {
    tally: SeverityTally,
    requests: RefCell<Vec<String>>,
}

impl FixedSeveritySource {
    pub fn new(tally: SeverityTally) -> Self {
        Self {
            tally,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl SeveritySource for FixedSeveritySource {
    fn severity_counts(&self, project_id: &str) -> Result<SeverityTally, SeveritySourceError> {
        self.requests.borrow_mut().push(project_id.to_string());
        Ok(self.tally.clone())
    }
}

/// A severity source that fails for one project id and succeeds with
/// an empty tally for every other.
pub struct FailingSeveritySource {
    fail_on: String,
}

impl FailingSeveritySource {
    pub fn new(fail_on: &str) -> Self {
        Self {
            fail_on: fail_on.to_string(),
        }
    }
}

impl SeveritySource for FailingSeveritySource {
    fn severity_counts(&self, project_id: &str) -> Result<SeverityTally, SeveritySourceError> {
        if project_id == self.fail_on {
            Err(SeveritySourceError::Connection)
        } else {
            Ok(SeverityTally::default())
        }
    }
}

/// Collects reporter output instead of printing it.
#[derive(Default)]
pub struct RecordingReporter {
    pub infos: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
