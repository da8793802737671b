//! Core of the component construction engine.
//!
//! `range` checks argument values against the ranges their parameters declare.
//! `construction` resolves configs to instances through a pluggable strategy,
//! building every config at most once.

pub mod construction;
pub mod graph;
pub mod iris;
pub mod range;
pub mod strategy;

pub use construction::{
    ConfigPreprocessor, ConstructionError, ConstructionPool, ConstructionSettings, ConstructionStrategy,
    PoolOptions,
};
pub use graph::{ConfigGraph, NodeId};
pub use range::{ParamRange, Parameter, RangeError, RangeHandler};

// FFI Facade: the `_core` Python module, only built with the `python` feature.
#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Defines the `_core` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bindings::python::display_range, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::python::check_literal, m)?)?;
    Ok(())
}
