pub mod a001_country;
pub mod a002_dataset;
pub mod a003_product;
pub mod a004_list_item;
