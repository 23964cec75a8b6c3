pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_escape, wire_trigger_activation};
pub use pointer::{wire_pointer_handlers, PointerWiring};
