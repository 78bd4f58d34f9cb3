//! Fixed delays and scene constants shared by the interaction core.

// ── Selection settle windows ────────────────────────────────────

/// Settle delay after a click that leaves the selection empty.
pub const CLICK_SETTLE_MS: u32 = 100;

/// Settle delay after pointer-up; expiry re-checks the live selection.
pub const POINTER_UP_SETTLE_MS: u32 = 300;

/// Settle delay after the document selection becomes empty.
pub const SELECTION_CLEARED_SETTLE_MS: u32 = 500;

// ── Contact form ────────────────────────────────────────────────

/// Simulated send duration before the form reports success.
pub const SEND_DELAY_MS: u32 = 1500;

/// How long the success state is shown before the form returns to idle.
pub const SUCCESS_DISPLAY_MS: u32 = 3000;

// ── Parallax ────────────────────────────────────────────────────

/// Scale applied to `pointer * speed` to get a pixel translation.
pub const PARALLAX_SCALE: f64 = 0.01;

// ── Scene ───────────────────────────────────────────────────────

/// Sky yaw speed while the island is being rotated, in radians per second.
pub const SKY_YAW_PER_SEC: f64 = 0.15;

/// Viewports narrower than this use the compact scene layout.
pub const COMPACT_VIEWPORT_PX: f64 = 768.0;

/// Island yaw produced by dragging across the full viewport width.
pub const ISLAND_DRAG_YAW: f64 = std::f64::consts::PI;
