//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its interaction session, scene
//! or form) and delegates rendering details to `components`.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
