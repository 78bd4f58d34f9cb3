//! Random source for the projects grid order.

use rand::SeedableRng;
use rand::rngs::SmallRng;

#[cfg(test)]
#[path = "shuffle_test.rs"]
mod shuffle_test;

/// Fixed seed used outside the browser, where the order is never shown.
pub const SERVER_SEED: u64 = 0x15_1A_4D;

/// Generator for one projects page, seeded from the clock in the browser.
pub fn page_rng() -> SmallRng {
    #[cfg(feature = "hydrate")]
    {
        SmallRng::seed_from_u64(js_sys::Date::now().to_bits())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SmallRng::seed_from_u64(SERVER_SEED)
    }
}
