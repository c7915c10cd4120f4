//! Common types and utilities for cellid
//!
//! This crate provides the Cell Global Identity decoder together with the
//! octet handling, configuration, logging and rendering shared by the
//! cellid front-ends.

pub mod config;
pub mod error;
pub mod logging;
pub mod octet_string;
pub mod octet_view;
pub mod output;
pub mod types;

pub use config::{DecoderConfig, OutputFormat};
pub use error::Error;
pub use logging::{init_logging, log_cell_identity, HexDump, LogLevel};
pub use octet_string::OctetString;
pub use octet_view::OctetView;
pub use output::render;
pub use types::*;
