//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `state.rs`: State containers with update methods (quote only)
//! - `client.rs`: Sub-client with HTTP methods and caching

pub mod account;
pub mod history;
pub mod ledger;
pub mod quote;
pub mod swap;
pub mod token;
