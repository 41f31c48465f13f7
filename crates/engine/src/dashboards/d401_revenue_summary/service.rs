use contracts::dashboards::d401_revenue_summary::{
    RegionSummary, RevenueSummary, RevenueSummaryResponse,
};
use contracts::domain::a002_dataset_record::DatasetRecord;

use crate::domain::a002_dataset::grouping::group_by_region;
use crate::shared::error::{StatsError, StatsResult};
use crate::shared::stats::{mean, median, percentile, standard_deviation};

/// Revenue statistics and per-region breakdown for a dataset
pub fn build_revenue_summary(
    records: &[DatasetRecord],
    percentile_rank: f64,
) -> StatsResult<RevenueSummaryResponse> {
    if records.is_empty() {
        return Err(StatsError::EmptyInput("revenue summary"));
    }

    let revenues: Vec<f64> = records.iter().map(|r| r.revenue as f64).collect();
    let summary = RevenueSummary {
        record_count: records.len(),
        total_revenue: revenues.iter().sum(),
        avg_revenue: mean(&revenues)?,
        median_revenue: median(&revenues)?,
        std_dev: standard_deviation(&revenues)?,
        percentile: percentile_rank,
        percentile_value: percentile(&revenues, percentile_rank)?,
    };

    Ok(RevenueSummaryResponse {
        summary,
        regions: build_region_summaries(records),
    })
}

/// Record count and revenue total per region, ordered by region name
pub fn build_region_summaries(records: &[DatasetRecord]) -> Vec<RegionSummary> {
    group_by_region(records)
        .into_iter()
        .map(|(region, items)| RegionSummary {
            count: items.len(),
            total_revenue: items.iter().map(|r| r.revenue as f64).sum(),
            region,
        })
        .collect()
}
