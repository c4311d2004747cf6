//! Countermove server - HTTP front end for the move oracle.
//!
//! # Architecture
//!
//! - **Routes**: `/config` answers with the next board code, `/move` with a
//!   JSON description of the move, `/` with usage text.
//! - **Config**: host, port and an optional seed, from TOML and CLI flags.
//! - **Errors**: malformed boards map to `400`, finished boards to `409`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;
pub use routes::{AppState, HELP_TEXT, MoveQuery, MoveResponse, router};
