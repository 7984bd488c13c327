//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The editor page owns every signal — buffers, prompt, theme, view mode —
//! and delegates rendering to `components`. Persistence and the generation
//! request are wired here so components stay presentational.

pub mod editor;
