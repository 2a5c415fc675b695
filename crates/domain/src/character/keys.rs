//! Stable keys addressing a single trait or freebie purchase target.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reference::{Ability, Attribute, Background, Discipline, Virtue};

/// Trait categories, each with its own floor, base pool, and freebie rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    Attribute,
    Ability,
    Discipline,
    Background,
    Virtue,
}

impl TraitKind {
    /// Lowest base value a trait of this kind may hold.
    pub fn floor(&self) -> u8 {
        match self {
            Self::Attribute | Self::Virtue => 1,
            Self::Ability | Self::Discipline | Self::Background => 0,
        }
    }
}

/// A single rated trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TraitKey {
    Attribute(Attribute),
    Ability(Ability),
    Discipline(Discipline),
    Background(Background),
    Virtue(Virtue),
}

impl TraitKey {
    pub fn kind(&self) -> TraitKind {
        match self {
            Self::Attribute(_) => TraitKind::Attribute,
            Self::Ability(_) => TraitKind::Ability,
            Self::Discipline(_) => TraitKind::Discipline,
            Self::Background(_) => TraitKind::Background,
            Self::Virtue(_) => TraitKind::Virtue,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Attribute(a) => a.display_name(),
            Self::Ability(a) => a.display_name(),
            Self::Discipline(d) => d.display_name(),
            Self::Background(b) => b.display_name(),
            Self::Virtue(v) => v.display_name(),
        }
    }
}

impl fmt::Display for TraitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.kind(), self.display_name())
    }
}

impl From<Attribute> for TraitKey {
    fn from(value: Attribute) -> Self {
        Self::Attribute(value)
    }
}

impl From<Ability> for TraitKey {
    fn from(value: Ability) -> Self {
        Self::Ability(value)
    }
}

impl From<Discipline> for TraitKey {
    fn from(value: Discipline) -> Self {
        Self::Discipline(value)
    }
}

impl From<Background> for TraitKey {
    fn from(value: Background) -> Self {
        Self::Background(value)
    }
}

impl From<Virtue> for TraitKey {
    fn from(value: Virtue) -> Self {
        Self::Virtue(value)
    }
}

/// Anything freebies can be spent on: a trait or one of the two composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum FreebieTarget {
    Attribute(Attribute),
    Ability(Ability),
    Discipline(Discipline),
    Background(Background),
    Virtue(Virtue),
    Humanity,
    Willpower,
}

impl FreebieTarget {
    /// Exchange rate in freebie points per dot.
    pub fn cost(&self) -> u32 {
        match self {
            Self::Attribute(_) => 5,
            Self::Ability(_) => 2,
            Self::Discipline(_) => 7,
            Self::Background(_) => 1,
            Self::Virtue(_) => 2,
            Self::Humanity => 1,
            Self::Willpower => 1,
        }
    }

    pub fn as_trait(&self) -> Option<TraitKey> {
        match *self {
            Self::Attribute(a) => Some(TraitKey::Attribute(a)),
            Self::Ability(a) => Some(TraitKey::Ability(a)),
            Self::Discipline(d) => Some(TraitKey::Discipline(d)),
            Self::Background(b) => Some(TraitKey::Background(b)),
            Self::Virtue(v) => Some(TraitKey::Virtue(v)),
            Self::Humanity | Self::Willpower => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Humanity => "Humanity",
            Self::Willpower => "Willpower",
            other => other.as_trait().map(|t| t.display_name()).unwrap_or_default(),
        }
    }
}

impl From<TraitKey> for FreebieTarget {
    fn from(key: TraitKey) -> Self {
        match key {
            TraitKey::Attribute(a) => Self::Attribute(a),
            TraitKey::Ability(a) => Self::Ability(a),
            TraitKey::Discipline(d) => Self::Discipline(d),
            TraitKey::Background(b) => Self::Background(b),
            TraitKey::Virtue(v) => Self::Virtue(v),
        }
    }
}

/// Traits that carry a specialty annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum SpecialtyTarget {
    Attribute(Attribute),
    Ability(Ability),
}

impl SpecialtyTarget {
    pub fn as_trait(&self) -> TraitKey {
        match *self {
            Self::Attribute(a) => TraitKey::Attribute(a),
            Self::Ability(a) => TraitKey::Ability(a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freebie_costs_match_rate_card() {
        assert_eq!(FreebieTarget::Attribute(Attribute::Wits).cost(), 5);
        assert_eq!(FreebieTarget::Ability(Ability::Law).cost(), 2);
        assert_eq!(FreebieTarget::Discipline(Discipline::Auspex).cost(), 7);
        assert_eq!(FreebieTarget::Background(Background::Herd).cost(), 1);
        assert_eq!(FreebieTarget::Virtue(Virtue::Courage).cost(), 2);
        assert_eq!(FreebieTarget::Humanity.cost(), 1);
        assert_eq!(FreebieTarget::Willpower.cost(), 1);
    }

    #[test]
    fn trait_key_wire_format() {
        let key = TraitKey::Ability(Ability::AnimalKen);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"kind":"ability","name":"Animal Ken"}"#);
        let parsed: TraitKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn composite_targets_parse_without_name() {
        let parsed: FreebieTarget = serde_json::from_str(r#"{"kind":"humanity"}"#).unwrap();
        assert_eq!(parsed, FreebieTarget::Humanity);
    }

    #[test]
    fn floors_by_kind() {
        assert_eq!(TraitKind::Attribute.floor(), 1);
        assert_eq!(TraitKind::Virtue.floor(), 1);
        assert_eq!(TraitKind::Ability.floor(), 0);
        assert_eq!(TraitKind::Background.floor(), 0);
    }
}
