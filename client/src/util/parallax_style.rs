//! Inline CSS for parallax layers and floating cards.
//!
//! While selecting, a layer snaps to rest (`transform: none`) with a slower
//! ease; otherwise it follows the pointer with a short ease-out.

#[cfg(test)]
#[path = "parallax_style_test.rs"]
mod parallax_style_test;

use interaction::parallax::Translation2D;

pub const SELECTING_TRANSITION: &str = "transform 0.3s ease";
pub const TRACKING_TRANSITION: &str = "transform 0.1s ease-out";

pub fn transform_css(selecting: bool, offset: Translation2D) -> String {
    if selecting || offset.is_zero() {
        return "none".to_owned();
    }
    format!("translate({}px, {}px)", offset.dx, offset.dy)
}

pub fn transition_css(selecting: bool) -> &'static str {
    if selecting { SELECTING_TRANSITION } else { TRACKING_TRANSITION }
}

/// Full `style` attribute for a parallax layer.
pub fn layer_style(selecting: bool, offset: Translation2D) -> String {
    format!("transform: {}; transition: {};", transform_css(selecting, offset), transition_css(selecting))
}

/// `style` attribute staggering a card's entrance.
pub fn card_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms;")
}
