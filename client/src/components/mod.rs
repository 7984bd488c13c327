//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome; the page owns the signals and passes
//! them down as props, so components stay free of persistence and network
//! concerns.

pub mod code_view;
pub mod header;
pub mod preview_window;
pub mod prompt_controls;
