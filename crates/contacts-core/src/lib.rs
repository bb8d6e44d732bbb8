//! Core domain + data access for the contacts catalog bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! messaging port implemented in the adapter crate; the router only sees the
//! store ports.

pub mod callback_data;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod repos;
pub mod schema;
pub mod screens;

pub use errors::{Error, Result};
