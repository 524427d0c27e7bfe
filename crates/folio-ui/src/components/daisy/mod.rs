#![doc(hidden)]

//! DaisyUI-styled building blocks for the portfolio page, layered atoms to organisms.

pub mod foundations;

pub mod atoms;
pub mod molecules;
pub mod organisms;

pub use atoms::*;
pub use foundations::*;
pub use molecules::*;
pub use organisms::*;
