//! Percentage rolls shared by every random check in a battle

use rand::{Rng, RngCore};

/// Roll a `chance` out of 100. Chances of 100 or more always pass, 0 or less never.
pub fn roll_percent(rng: &mut dyn RngCore, chance: f64) -> bool {
    rng.gen::<f64>() * 100.0 < chance
}
