//! Provides output encoding for chemical structure exchange formats.
//!
//! This module contains the streaming CDXML encoder together with its
//! drawing-settings configuration and the page-layout computation used for
//! print-oriented documents. Molecular data enters through the read-only
//! view contract in [`crate::models::graph`]; encoded markup goes to any
//! [`std::io::Write`] sink.

pub mod cdxml;
pub mod config;
pub(crate) mod print;
