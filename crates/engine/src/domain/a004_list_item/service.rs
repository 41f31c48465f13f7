use contracts::domain::a004_list_item::ListItem;

use crate::shared::search::name_matches;

const FRUITS: [&str; 5] = ["Apple", "Banana", "Cherry", "Date", "Elderberry"];

/// Threshold of the "expensive" item view
pub const EXPENSIVE_THRESHOLD: u32 = 500;

/// Generate the searchable item list, keeping only names that contain `term`
///
/// Item `i` is named `"Item {i + 1} - {fruit}"` and scored from its index
/// alone, so skipping non-matching items never changes the others.
pub fn generate_search_items(count: usize, term: &str) -> Vec<ListItem> {
    let mut items = Vec::new();
    for i in 0..count {
        let name = format!("Item {} - {}", i + 1, FRUITS[i % FRUITS.len()]);
        if !name_matches(&name, term) {
            continue;
        }
        items.push(ListItem {
            id: i as u32,
            name,
            value: item_value(i),
        });
    }
    items
}

fn item_value(index: usize) -> u32 {
    let mut hash = 0.0_f64;
    for j in 0..500 {
        hash += ((j + index) as f64).sqrt();
    }
    ((index as u64 * 7919 + hash.floor() as u64) % 1000) as u32
}

/// Items scored strictly above `threshold`
pub fn items_above(items: &[ListItem], threshold: u32) -> Vec<ListItem> {
    items
        .iter()
        .filter(|item| item.value > threshold)
        .cloned()
        .collect()
}
