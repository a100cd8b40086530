//! Display formatting for dashboard values.

pub mod num;
pub mod time;
