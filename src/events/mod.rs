mod keyboard;
mod pointer;

pub use keyboard::{wire_global_keydown, wire_overlay_toggle_h};
pub use pointer::{wire_input_handlers, wire_selection_summary, InputWiring};
