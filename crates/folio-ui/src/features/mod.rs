//! Feature slices with their own state and views.

pub mod contact;
