use contracts::domain::a003_product::Product;
use contracts::enums::product_sort_key::ProductSortKey;

use crate::shared::search::filter_by_name;

/// Products whose name contains `term`, ignoring case
pub fn filter_products(products: &[Product], term: &str) -> Vec<Product> {
    filter_by_name(products, term)
}

/// Sorted copy of `products`
///
/// The sort is stable: products with equal keys keep their input order.
pub fn sort_products(products: &[Product], key: ProductSortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        ProductSortKey::PriceAsc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        ProductSortKey::PriceDesc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        ProductSortKey::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        ProductSortKey::Default => {}
    }
    sorted
}

/// Filter then sort, the way the product list shows it
pub fn search_products(products: &[Product], term: &str, key: ProductSortKey) -> Vec<Product> {
    sort_products(&filter_products(products, term), key)
}

/// Sum of prices
pub fn total_price(products: &[Product]) -> f64 {
    products.iter().map(|p| p.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::catalog::demo_products;

    fn named(id: u32, name: &str, price: f64, rating: f64) -> Product {
        Product::new(id, name, price, "", "", "Test", rating)
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    fn sorted_ids(products: &[Product], key: ProductSortKey) -> Vec<u32> {
        ids(&sort_products(products, key))
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let products = vec![named(1, "Apple", 1.0, 4.0), named(2, "Banana", 2.0, 4.0)];
        let result = filter_products(&products, "app");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Apple");
        assert_eq!(ids(&filter_products(&products, "BAN")), vec![2]);
        assert_eq!(filter_products(&products, "").len(), 2);
    }

    #[test]
    fn test_sort_by_price() {
        let products = demo_products();

        assert_eq!(sorted_ids(&products, ProductSortKey::PriceAsc), vec![5, 6, 1, 3, 4, 2]);
        assert_eq!(sorted_ids(&products, ProductSortKey::PriceDesc), vec![2, 4, 3, 1, 6, 5]);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let products = demo_products();
        assert_eq!(sorted_ids(&products, ProductSortKey::Rating), vec![6, 2, 4, 1, 5, 3]);
    }

    #[test]
    fn test_default_keeps_order() {
        let products = demo_products();
        assert_eq!(sorted_ids(&products, ProductSortKey::Default), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let products = vec![
            named(1, "a", 10.0, 4.0),
            named(2, "b", 5.0, 4.5),
            named(3, "c", 10.0, 4.0),
            named(4, "d", 5.0, 4.0),
        ];

        assert_eq!(sorted_ids(&products, ProductSortKey::PriceAsc), vec![2, 4, 1, 3]);
        assert_eq!(sorted_ids(&products, ProductSortKey::PriceDesc), vec![1, 3, 2, 4]);
        assert_eq!(sorted_ids(&products, ProductSortKey::Rating), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_search_and_total() {
        let products = demo_products();
        let found = search_products(&products, "E", ProductSortKey::PriceAsc);

        assert_eq!(ids(&found), vec![6, 1, 3, 4]);
        assert!((total_price(&found) - 359.96).abs() < 1e-9);

        let speakers = search_products(&products, "speaker", ProductSortKey::Default);
        assert!((total_price(&speakers) - 59.99).abs() < 1e-9);
        assert_eq!(total_price(&[]), 0.0);
    }
}
