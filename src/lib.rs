//! Meeting scheduling form with live autocomplete.
//!
//! [`form`] holds the core: field validation, race-free suggestion lookups and
//! the controller that owns one form session. [`calendar`] composes it with the
//! list of accepted meetings; [`handlers`] expose that over HTTP.

pub mod calendar;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod templates_structs;
