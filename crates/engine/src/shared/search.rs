use contracts::domain::a003_product::Product;
use contracts::domain::a004_list_item::ListItem;

/// Anything filterable by a display name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ListItem {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive substring match; an empty term matches everything
pub fn name_matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Items whose name contains `term`, ignoring case, in input order
pub fn filter_by_name<T: Named + Clone>(items: &[T], term: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| name_matches(item.name(), term))
        .cloned()
        .collect()
}
