use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the repository at creation time
    pub id: i64,
    /// Product name
    pub name: String,
    /// Price as a floating-point amount
    #[serde(default)]
    pub price: f64,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// DTO for replacing an existing product
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProduct {
    pub name: String,
    #[serde(default)]
    pub price: f64,
}
