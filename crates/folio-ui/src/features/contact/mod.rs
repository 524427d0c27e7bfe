//! Contact form feature wiring.
//!
//! # Design
//! - Rules and message slots are DOM-free so they test natively.
//! - The view reads live control values into a snapshot on every check.
//! - Submission is simulated; nothing leaves the page.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
