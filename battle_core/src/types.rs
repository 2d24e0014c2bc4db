//! Core types shared across the battle engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental type of a combatant
///
/// Labels the chart does not know deserialize to `Neutral`, which every
/// chart lookup treats as a 1.0x matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Ice,
    Water,
    Earth,
    Wind,
    Lightning,
    Light,
    Dark,
    #[default]
    #[serde(other)]
    Neutral,
}

impl Element {
    /// Get all elements
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Ice,
            Element::Water,
            Element::Earth,
            Element::Wind,
            Element::Lightning,
            Element::Light,
            Element::Dark,
            Element::Neutral,
        ]
    }

    /// Parse a label, or `None` if it names no element
    pub fn parse(label: &str) -> Option<Element> {
        match label.trim().to_ascii_lowercase().as_str() {
            "fire" => Some(Element::Fire),
            "ice" => Some(Element::Ice),
            "water" => Some(Element::Water),
            "earth" => Some(Element::Earth),
            "wind" => Some(Element::Wind),
            "lightning" => Some(Element::Lightning),
            "light" => Some(Element::Light),
            "dark" => Some(Element::Dark),
            "neutral" => Some(Element::Neutral),
            _ => None,
        }
    }

    /// Parse a label; anything unrecognised is `Neutral`
    pub fn from_label(label: &str) -> Element {
        Element::parse(label).unwrap_or(Element::Neutral)
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Ice => "Ice",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Wind => "Wind",
            Element::Lightning => "Lightning",
            Element::Light => "Light",
            Element::Dark => "Dark",
            Element::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rarity tier of a card or mob; selects the scaling value used in battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

/// Number of rarity tiers (length of a full scaling table)
pub const RARITY_TIERS: usize = 6;

impl Rarity {
    /// Index into a scaling table
    pub fn tier(self) -> usize {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
            Rarity::Mythic => 5,
        }
    }
}

/// Live stat that a flat buff or debuff can shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Atk,
    Def,
    Speed,
    Hp,
    CritRate,
    CritDmg,
}

impl Stat {
    pub fn label(self) -> &'static str {
        match self {
            Stat::Atk => "ATK",
            Stat::Def => "DEF",
            Stat::Speed => "SPD",
            Stat::Hp => "HP",
            Stat::CritRate => "Crit Rate",
            Stat::CritDmg => "Crit DMG",
        }
    }
}

/// Which side of the battle a unit fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The challenger / player team
    A,
    /// The defender / enemy team (or raid boss)
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Position of a unit inside a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId {
    pub side: Side,
    pub index: usize,
}

impl UnitId {
    pub fn new(side: Side, index: usize) -> Self {
        UnitId { side, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        element: Element,
    }

    #[test]
    fn test_unknown_element_is_neutral() {
        let holder: Holder = toml::from_str(r#"element = "plasma""#).unwrap();
        assert_eq!(holder.element, Element::Neutral);

        let holder: Holder = toml::from_str(r#"element = "fire""#).unwrap();
        assert_eq!(holder.element, Element::Fire);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Element::from_label("Lightning"), Element::Lightning);
        assert_eq!(Element::from_label("void"), Element::Neutral);
        assert_eq!(Element::parse(" Dark "), Some(Element::Dark));
        assert_eq!(Element::parse("neutral"), Some(Element::Neutral));
        assert_eq!(Element::parse("void"), None);
    }

    #[test]
    fn test_rarity_tiers_cover_table() {
        assert_eq!(Rarity::Common.tier(), 0);
        assert_eq!(Rarity::Mythic.tier(), RARITY_TIERS - 1);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }
}
