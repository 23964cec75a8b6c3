//! Platform-free logic behind the portfolio page effects.
//!
//! Nothing here touches a browser API: sketches draw through the
//! [`Surface`] trait, the modal reads through [`DetailCache`], and the
//! material heuristics work against [`ModelGraph`]. The wasm front-end
//! provides the concrete implementations.

pub mod background;
pub mod color;
pub mod constants;
pub mod error;
pub mod materials;
pub mod math;
pub mod modal;
pub mod navbar;
pub mod pointer;
pub mod sketch;
pub mod sketches;
pub mod surface;
pub mod viewport;

pub use background::*;
pub use color::*;
pub use error::*;
pub use materials::*;
pub use modal::*;
pub use pointer::*;
pub use sketch::*;
pub use sketches::*;
pub use surface::*;
pub use viewport::*;
