//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `purchase` - Purchase events and their rendering into notifications

pub mod purchase;
