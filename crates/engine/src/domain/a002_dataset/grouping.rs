use contracts::domain::a002_dataset_record::DatasetRecord;
use std::collections::BTreeMap;

/// Partition records by region
///
/// Groups are keyed by region name; inside a group the records keep their
/// relative input order.
pub fn group_by_region(records: &[DatasetRecord]) -> BTreeMap<String, Vec<DatasetRecord>> {
    let mut groups: BTreeMap<String, Vec<DatasetRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.region.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}
