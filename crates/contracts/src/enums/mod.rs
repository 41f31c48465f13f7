pub mod product_sort_key;
pub mod record_status;
