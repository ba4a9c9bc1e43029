//! Feature components
//!
//! Each submodule implements one self-contained task together with its
//! dedicated helpers.

pub mod png_converter;

pub use png_converter::BatchConverter;
