//! Shopping Cart Domain Module
//!
//! This module contains all cart business logic, including:
//! - Domain models (CartEntry, CartSummary)
//! - Quantity state and its reconciliation against the catalog

pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CartEntry, CartSummary};
pub use state::CartState;
