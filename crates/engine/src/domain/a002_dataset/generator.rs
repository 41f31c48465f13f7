use chrono::{DateTime, Duration, TimeZone, Utc};
use contracts::domain::a001_country::CountryInfo;
use contracts::domain::a002_dataset_record::DatasetRecord;
use contracts::enums::record_status::RecordStatus;

use crate::domain::a001_country::catalog::COUNTRIES;
use crate::shared::error::{StatsError, StatsResult};

/// Multiplier of the base-ratio sequence (prime)
pub const RATIO_MULTIPLIER: u64 = 7919;
/// Modulus of the base-ratio sequence (prime)
pub const RATIO_MODULUS: u64 = 104729;

/// Reference instant used when the caller does not supply one
pub fn default_reference_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_689_600, 0)
        .single()
        .unwrap_or_default()
}

/// Pseudo-uniform value in [0, 1) for a record index
pub fn base_ratio(index: usize) -> f64 {
    let reduced = index as u64 % RATIO_MODULUS;
    (reduced * RATIO_MULTIPLIER % RATIO_MODULUS) as f64 / RATIO_MODULUS as f64
}

/// Generate `count` records, cycling through `lookup` in order
///
/// Record `i` takes `lookup[i % lookup.len()]` and derives every measure
/// from `base_ratio(i)`, so the output depends only on the arguments.
/// Counts beyond `u32::MAX` ids, or whose oldest timestamp falls outside the
/// representable range, are rejected before anything is allocated.
pub fn generate_dataset(
    count: usize,
    lookup: &[CountryInfo],
    reference: DateTime<Utc>,
) -> StatsResult<Vec<DatasetRecord>> {
    if count == 0 {
        return Err(StatsError::InvalidArgument(
            "record count must be positive".to_string(),
        ));
    }
    if count > u32::MAX as usize {
        return Err(StatsError::InvalidArgument(format!(
            "record count must not exceed {}, got {}",
            u32::MAX,
            count
        )));
    }
    if lookup.is_empty() {
        return Err(StatsError::InvalidArgument(
            "lookup table must not be empty".to_string(),
        ));
    }
    let oldest = Duration::try_days(count as i64 - 1)
        .and_then(|span| reference.checked_sub_signed(span));
    if oldest.is_none() {
        return Err(StatsError::InvalidArgument(format!(
            "{} daily timestamps before {} are out of range",
            count, reference
        )));
    }

    let records = (0..count)
        .map(|i| build_record(i, &lookup[i % lookup.len()], reference))
        .collect();
    Ok(records)
}

/// Generate records over the built-in country table
pub fn generate_default_dataset(count: usize) -> StatsResult<Vec<DatasetRecord>> {
    generate_dataset(count, COUNTRIES, default_reference_time())
}

fn build_record(index: usize, country: &CountryInfo, reference: DateTime<Utc>) -> DatasetRecord {
    let b = base_ratio(index);
    let scaled = |factor: f64| (b * factor).round() as u64;

    DatasetRecord {
        id: index as u32 + 1,
        country_code: country.code.to_string(),
        country_name: country.name.to_string(),
        region: country.region.to_string(),
        currency: country.currency.to_string(),
        revenue: scaled(1_000_000.0),
        expenses: scaled(750_000.0),
        profit: scaled(250_000.0),
        customers: scaled(10_000.0),
        orders: scaled(50_000.0),
        avg_order_value: scaled(200.0),
        growth: format!("{:.2}%", b * 100.0 - 50.0),
        status: RecordStatus::from_ratio(b),
        last_updated: reference - Duration::days(index as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<CountryInfo> {
        vec![
            CountryInfo::new("A", "Alpha", "+1", "USD", "North"),
            CountryInfo::new("B", "Beta", "+2", "EUR", "South"),
            CountryInfo::new("C", "Gamma", "+3", "GBP", "North"),
        ]
    }

    #[test]
    fn test_lookup_entries_cycle_in_order() {
        let records = generate_dataset(6, &abc(), default_reference_time()).unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.country_code.as_str()).collect();

        assert_eq!(codes, vec!["A", "B", "C", "A", "B", "C"]);
        assert_eq!(records[3].country_name, "Alpha");
        assert_eq!(records[4].currency, "EUR");
    }

    #[test]
    fn test_first_record_has_zero_ratio() {
        let records = generate_dataset(1, &abc(), default_reference_time()).unwrap();
        let first = &records[0];

        assert_eq!(first.id, 1);
        assert_eq!(first.revenue, 0);
        assert_eq!(first.growth, "-50.00%");
        assert_eq!(first.status, RecordStatus::Inactive);
        assert_eq!(first.last_updated, default_reference_time());
    }

    #[test]
    fn test_measures_follow_base_ratio() {
        let records = generate_dataset(3, &abc(), default_reference_time()).unwrap();
        let second = &records[1];
        // b = 7919 / 104729
        let b = 7919.0 / 104729.0;

        assert_eq!(second.id, 2);
        assert_eq!(second.revenue, 75_614);
        assert_eq!(second.expenses, (b * 750_000.0_f64).round() as u64);
        assert_eq!(second.profit, (b * 250_000.0_f64).round() as u64);
        assert_eq!(second.customers, 756);
        assert_eq!(second.orders, 3_781);
        assert_eq!(second.avg_order_value, 15);
        assert_eq!(second.growth, "-42.44%");
        assert_eq!(
            second.last_updated,
            default_reference_time() - Duration::days(1)
        );
    }

    #[test]
    fn test_status_active_above_half() {
        let records = generate_dataset(200, &abc(), default_reference_time()).unwrap();
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.is_active(), base_ratio(i) > 0.5);
        }
        assert!(records.iter().any(|r| r.is_active()));
        assert!(records.iter().any(|r| !r.is_active()));
    }

    #[test]
    fn test_base_ratio_in_unit_interval() {
        for i in 0..1000 {
            let b = base_ratio(i);
            assert!((0.0..1.0).contains(&b));
        }
        assert_eq!(base_ratio(104729), 0.0);
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        assert!(matches!(
            generate_dataset(0, &abc(), default_reference_time()),
            Err(StatsError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_dataset(5, &[], default_reference_time()),
            Err(StatsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_base_ratio_reduces_large_indices() {
        let large = usize::MAX - 7;
        let reduced = large % RATIO_MODULUS as usize;
        assert_eq!(base_ratio(large), base_ratio(reduced));
        assert!((0.0..1.0).contains(&base_ratio(usize::MAX)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_rejects_count_beyond_id_range() {
        let too_many = u32::MAX as usize + 1;
        assert!(matches!(
            generate_dataset(too_many, &abc(), default_reference_time()),
            Err(StatsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_timestamps_out_of_range() {
        // 100 million days is far past chrono's lower bound
        assert!(matches!(
            generate_dataset(100_000_000, &abc(), default_reference_time()),
            Err(StatsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_default_dataset_uses_country_table() {
        let records = generate_default_dataset(500).unwrap();

        assert_eq!(records.len(), 500);
        assert_eq!(records[0].country_code, "AF");
        assert_eq!(records[192].country_code, "AF");
        assert_eq!(records[499].id, 500);
    }

    #[test]
    fn test_default_reference_time() {
        assert_eq!(
            default_reference_time().to_rfc3339(),
            "2025-01-01T00:00:00+00:00"
        );
    }
}
