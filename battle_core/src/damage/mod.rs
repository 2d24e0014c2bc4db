//! Damage formula - attacker, defender and raw damage in, final damage out

mod formula;
mod roll;

pub use formula::resolve_damage;
pub use roll::DamageRoll;
