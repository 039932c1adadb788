//! Shared UI components reusable across input modules
//!
//! Contains:
//! - `fields` - Labeled text inputs, pick lists and the submit row

pub mod fields;
