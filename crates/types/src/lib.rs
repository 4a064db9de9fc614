#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the cstore content store validator
//!
//! This crate provides the content URL identifier, the database records
//! the validator reads, and the report produced by a validation run.

pub mod content;
pub mod records;
pub mod reports;

pub use content::{ContentUrl, SHORT_FORM_LEN, STORE_SCHEME};
pub use records::{ContentRecord, Node, NodeRef, Store};
pub use reports::{Orphan, SizeMismatch, ValidationOutcome, ValidationReport};
