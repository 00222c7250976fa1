//! Borderhop command-line front end.
//!
//! Wires the restcountries.com connector and a JSON file store into a
//! [`session::Session`] and renders its answers to the terminal.

#![warn(missing_docs)]

pub mod render;
pub mod rest;
pub mod session;

pub use rest::RestCountriesClient;
pub use session::{clear_border_cache, store_path, RouteReport, Session};
