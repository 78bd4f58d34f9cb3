//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Modules touching `web-sys` compile to no-ops without `hydrate` so SSR
//! and native tests stay deterministic.

#[cfg(feature = "hydrate")]
pub mod interaction_session;
pub mod local_storage;
pub mod parallax_style;
#[cfg(feature = "hydrate")]
pub mod scene_bridge;
pub mod scroll_lock;
pub mod shuffle;
