//! Domain types shared by the database and HTTP layers.
//!
//! This crate performs no I/O: it holds the error taxonomy, the inquiry and
//! content vocabularies, and the admin key check.

pub mod access;
pub mod content;
pub mod error;
pub mod inquiry;
pub mod types;
