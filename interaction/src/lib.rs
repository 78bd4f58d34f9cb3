//! Platform-free interaction core for the island portfolio site.
//!
//! Everything in this crate is plain Rust with no browser dependencies, so it
//! runs identically under SSR, in the hydrated WASM client, and in unit tests.
//! Handlers never touch timers or the DOM directly: they return
//! [`command::Command`] lists that the host executes (arming a timeout,
//! requesting an animation frame, writing a signal) and later feed back into
//! the core by token.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`selection`] | Text-selection state machine with settle timers |
//! | [`pointer`] | Frame-aligned pointer sampler |
//! | [`parallax`] | Pointer-to-translation projection |
//! | [`session`] | [`session::InteractionCore`] combining the above per page |
//! | [`config`] | Per-page target classification and freeze options |
//! | [`timer`] | Single-slot timer tokens with supersede semantics |
//! | [`draft`] | Contact draft model and key-value persistence |
//! | [`submission`] | Simulated contact form submission lifecycle |
//! | [`scene`] | Home scene controller over an external renderer |
//! | [`timing`] | Fixed delays and scene constants |

pub mod command;
pub mod config;
pub mod draft;
pub mod parallax;
pub mod pointer;
pub mod scene;
pub mod selection;
pub mod session;
pub mod submission;
pub mod timer;
pub mod timing;
