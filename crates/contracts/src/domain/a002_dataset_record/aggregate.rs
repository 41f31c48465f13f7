use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::record_status::RecordStatus;

/// Synthetic dataset row used by the revenue dashboard
///
/// Records are produced once by the generator and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRecord {
    /// 1-based position in the generated sequence
    pub id: u32,
    pub country_code: String,
    pub country_name: String,
    pub region: String,
    pub currency: String,

    // Measures, all derived from the same base ratio
    pub revenue: u64,
    pub expenses: u64,
    pub profit: u64,
    pub customers: u64,
    pub orders: u64,
    pub avg_order_value: u64,

    /// Signed percentage with two decimals, e.g. "-12.34%"
    pub growth: String,
    pub status: RecordStatus,
    pub last_updated: DateTime<Utc>,
}

impl DatasetRecord {
    pub fn is_active(&self) -> bool {
        self.status == RecordStatus::Active
    }
}
