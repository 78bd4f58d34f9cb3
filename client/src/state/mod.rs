//! Client-side reactive state.
//!
//! DESIGN
//! ======
//! `ui` holds site chrome shared through context from `App`; `interaction`
//! holds the per-page pointer and selection signals published by a live
//! interaction session.

pub mod interaction;
pub mod ui;
