use serde::{Deserialize, Serialize};

/// Descriptive statistics over the revenue column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Number of records summarized
    pub record_count: usize,
    /// Sum of revenue
    pub total_revenue: f64,
    /// Arithmetic mean
    pub avg_revenue: f64,
    pub median_revenue: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Requested percentile rank (e.g., 90.0)
    pub percentile: f64,
    /// Revenue at `percentile`
    pub percentile_value: f64,
}

/// Revenue breakdown for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: String,
    /// Records in the region
    pub count: usize,
    pub total_revenue: f64,
}

/// Response for the revenue summary dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummaryResponse {
    pub summary: RevenueSummary,
    /// Regions ordered by name
    pub regions: Vec<RegionSummary>,
}

impl RevenueSummaryResponse {
    /// Regions with the highest revenue first, at most `limit` of them
    pub fn top_regions(&self, limit: usize) -> Vec<&RegionSummary> {
        let mut regions: Vec<&RegionSummary> = self.regions.iter().collect();
        regions.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
        regions.truncate(limit);
        regions
    }
}
