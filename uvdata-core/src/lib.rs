//! Core library for the `uvdata` CLI.
//!
//! This crate defines:
//! - The fixed registry of supported ARPANSA monitoring sites
//! - Date validation and formatting for API queries
//! - The client that fetches and reshapes a day of UV readings
//! - Configuration handling
//!
//! It is used by `uvdata-cli`, but can also be reused by other binaries or services.

pub mod city;
pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod transport;

pub use city::{Coordinates, resolve_coordinates};
pub use client::{API_URL, UvClient, fetch_uv_data};
pub use config::Config;
pub use date::{date_from_ymd, format_date, parse_date};
pub use error::UvError;
pub use model::{DateInput, UvRequest, UvSample};
pub use transport::{HttpTransport, RawResponse, Transport};
