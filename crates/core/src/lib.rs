//! Lara Core - Shared domain types.
//!
//! The storefront and its tests share these types:
//! - ids for products, orders, categories and users
//! - decimal prices
//! - validated email addresses
//! - bottle sizes, order statuses and user roles
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no session access.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers and enums for the storefront domain

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
