use serde::{Deserialize, Serialize};

/// Catalog product shown in the product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Image URL
    pub image: String,
    pub category: String,
    /// Average rating, 0.0..=5.0
    pub rating: f64,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            image: image.into(),
            category: category.into(),
            rating,
        }
    }
}
