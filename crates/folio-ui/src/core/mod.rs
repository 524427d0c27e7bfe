//! Core, DOM-free primitives and helpers for the portfolio UI.
pub mod counter;
pub mod store;
pub mod theme;
pub mod widgets;
