//! Core types and trait definitions for the Empresas registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod empresa;
pub mod error;
pub mod obrigacao;
pub mod store;

pub use error::{Error, Result};
