//! The range type checker.
//!
//! A parameter declares a `ParamRange`; before an argument is handed to a
//! constructor, the `RangeHandler` checks the argument's config value against it.
//! Literal values that pass a primitive check are coerced in place, so the
//! constructor receives typed values.

pub use self::checker::matches;
pub use self::display::display;
pub use self::error::RangeError;
pub use self::handler::RangeHandler;
pub use self::types::{ParamRange, Parameter};

// --- MODULE DECLARATIONS ---
mod checker;
mod display;
mod error;
mod handler;
mod types;
mod rules {
    pub(crate) mod primitives;
}
