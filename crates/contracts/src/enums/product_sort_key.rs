use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort order selectable for the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSortKey {
    /// Keep catalog order
    #[default]
    Default,
    /// Price, low to high
    PriceAsc,
    /// Price, high to low
    PriceDesc,
    /// Rating, high to low
    Rating,
}

impl ProductSortKey {
    /// Kebab-case code used in serialized form
    pub fn code(&self) -> &'static str {
        match self {
            ProductSortKey::Default => "default",
            ProductSortKey::PriceAsc => "price-asc",
            ProductSortKey::PriceDesc => "price-desc",
            ProductSortKey::Rating => "rating",
        }
    }

    /// Parse a sort code; unknown codes keep the catalog order
    pub fn from_code(code: &str) -> Self {
        match code {
            "price-asc" => ProductSortKey::PriceAsc,
            "price-desc" => ProductSortKey::PriceDesc,
            "rating" => ProductSortKey::Rating,
            _ => ProductSortKey::Default,
        }
    }
}

impl fmt::Display for ProductSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
