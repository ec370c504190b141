//! Types library for the commission simulator
//!
//! This library provides the value types shared by the commission engine,
//! the simulation tooling and the HTTP gateway.
//!
//! # Modules
//! - `numeric`: Non-negative revenue amounts
//! - `level`: Seller levels
//! - `bracket`: Rate brackets and breakdown entries
//! - `errors`: Error taxonomy

pub mod numeric;
pub mod level;
pub mod bracket;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::numeric::*;
    pub use crate::level::*;
    pub use crate::bracket::*;
    pub use crate::errors::*;
}
