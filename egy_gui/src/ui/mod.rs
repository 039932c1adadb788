//! UI module for the Egy Discovery desk
//!
//! # Layout
//! - `navbar` - Brand plus one button per page
//! - `home` - Landing cards linking to the three domain pages
//! - `input_panel` - Left side: dispatches to input_* child modules
//! - `results_panel` - Right side: last outcome of the mounted panel
//! - `status_bar` - Backend URL, health, last action
//!
//! # Input Panel Children
//! - `input_analysis` - Insight request form
//! - `input_marketing` - Campaign and daily metrics forms
//! - `input_accounting` - Transaction form
//!
//! # Shared Components
//! - `shared/fields` - Labeled inputs, drop-downs and submit buttons

// Top-level regions
pub mod navbar;
pub mod home;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

// Input panel children
pub mod input_analysis;
pub mod input_marketing;
pub mod input_accounting;

// Shared components
pub mod shared;
