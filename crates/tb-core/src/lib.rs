//! tb-core: stable foundation for thermobalance.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + finiteness check)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{TbError, TbResult};
pub use numeric::*;
pub use units::*;
