use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity status of a generated dataset record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    /// Status for a base ratio: active strictly above one half
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.5 {
            RecordStatus::Active
        } else {
            RecordStatus::Inactive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
