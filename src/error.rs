//! Error types for mdgen operations.

use thiserror::Error;

/// Errors that can occur while building configuration.
///
/// Rendering itself never fails: every renderer is a total function over its
/// options. The only failure path in the crate is structurally invalid
/// configuration input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
