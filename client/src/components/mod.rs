//! Reusable UI components for the island client.
//!
//! DESIGN
//! ======
//! Components stay presentation-focused and delegate pointer, draft and scene
//! rules to the `interaction` core through `state`/`util` adapters.

pub mod contact_form;
pub mod home_info;
pub mod loader;
pub mod navigation;
pub mod parallax;
pub mod scene_host;
