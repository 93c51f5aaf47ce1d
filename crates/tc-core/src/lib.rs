//! tc-core: temperature conversion foundation.
//!
//! Contains:
//! - scale (the three supported temperature scales)
//! - convert (the six pairwise conversions + menu-ordered `Conversion`)
//! - units (uom thermodynamic temperature bridge)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod convert;
pub mod error;
pub mod numeric;
pub mod scale;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use convert::*;
pub use error::{TcError, TcResult};
pub use numeric::*;
pub use scale::Scale;
pub use units::*;
