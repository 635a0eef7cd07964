//! Dialog renderers used by [`DialogComponent`](super::DialogComponent)

pub mod common;
pub mod date_range_dialog;
pub mod scroll_behavior;
pub mod system_dialogs;
