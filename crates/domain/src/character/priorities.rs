//! Priority slots and the bijection from slots to categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::reference::{AbilityCategory, AttributeGroup};

/// One of the three priority ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrioritySlot {
    Primary,
    Secondary,
    Tertiary,
}

impl PrioritySlot {
    pub const ALL: [PrioritySlot; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    /// Order in which colliding slots are overwritten while resolving duplicates.
    const REPAIR_ORDER: [PrioritySlot; 3] = [Self::Secondary, Self::Tertiary, Self::Primary];

    /// Base dots above the floor of 1 for an attribute group in this slot.
    pub fn attribute_budget(&self) -> u8 {
        match self {
            Self::Primary => 7,
            Self::Secondary => 5,
            Self::Tertiary => 3,
        }
    }

    /// Base dots for an ability category in this slot.
    pub fn ability_budget(&self) -> u8 {
        match self {
            Self::Primary => 13,
            Self::Secondary => 9,
            Self::Tertiary => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

impl fmt::Display for PrioritySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrioritySlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "tertiary" => Ok(Self::Tertiary),
            other => Err(DomainError::parse(format!("Unknown priority slot: {}", other))),
        }
    }
}

/// A category set ranked by priority (attribute groups or ability categories).
pub trait PriorityCategory: Copy + Eq + fmt::Debug {
    const ALL: [Self; 3];
}

impl PriorityCategory for AttributeGroup {
    const ALL: [Self; 3] = AttributeGroup::ALL;
}

impl PriorityCategory for AbilityCategory {
    const ALL: [Self; 3] = AbilityCategory::ALL;
}

/// Assignment of categories to priority slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priorities<C> {
    pub primary: C,
    pub secondary: C,
    pub tertiary: C,
}

impl<C: PriorityCategory> Priorities<C> {
    /// Default ranking: categories in declaration order.
    pub fn in_order() -> Self {
        let [primary, secondary, tertiary] = C::ALL;
        Self {
            primary,
            secondary,
            tertiary,
        }
    }

    pub fn get(&self, slot: PrioritySlot) -> C {
        match slot {
            PrioritySlot::Primary => self.primary,
            PrioritySlot::Secondary => self.secondary,
            PrioritySlot::Tertiary => self.tertiary,
        }
    }

    fn put(&mut self, slot: PrioritySlot, category: C) {
        match slot {
            PrioritySlot::Primary => self.primary = category,
            PrioritySlot::Secondary => self.secondary = category,
            PrioritySlot::Tertiary => self.tertiary = category,
        }
    }

    /// Slot holding `category`. A category missing from a malformed
    /// assignment is treated as tertiary.
    pub fn slot_of(&self, category: C) -> PrioritySlot {
        PrioritySlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) == category)
            .unwrap_or(PrioritySlot::Tertiary)
    }

    /// Whether the three slots hold three distinct categories.
    pub fn is_permutation(&self) -> bool {
        self.primary != self.secondary
            && self.primary != self.tertiary
            && self.secondary != self.tertiary
    }

    fn occurrences(&self, category: C) -> usize {
        PrioritySlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot) == category)
            .count()
    }

    fn missing(&self) -> Option<C> {
        C::ALL.into_iter().find(|c| self.occurrences(*c) == 0)
    }

    /// Assignment after putting `category` in `slot` and repairing collisions.
    ///
    /// The slot just set always keeps its choice. Each collision hands the
    /// category absent from the triple to the other colliding slot, trying
    /// secondary before tertiary (primary last).
    pub fn with(&self, slot: PrioritySlot, category: C) -> Self {
        let mut next = *self;
        next.put(slot, category);
        while let Some(missing) = next.missing() {
            let target = PrioritySlot::REPAIR_ORDER
                .into_iter()
                .find(|s| *s != slot && next.occurrences(next.get(*s)) > 1);
            match target {
                Some(target) => next.put(target, missing),
                None => break,
            }
        }
        next
    }
}

impl<C: PriorityCategory> Default for Priorities<C> {
    fn default() -> Self {
        Self::in_order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AttributeGroup::{Mental, Physical, Social};

    fn attrs(p: AttributeGroup, s: AttributeGroup, t: AttributeGroup) -> Priorities<AttributeGroup> {
        Priorities {
            primary: p,
            secondary: s,
            tertiary: t,
        }
    }

    #[test]
    fn primary_colliding_with_secondary_moves_secondary() {
        let start = attrs(Physical, Social, Mental);
        let next = start.with(PrioritySlot::Primary, Social);
        assert_eq!(next, attrs(Social, Physical, Mental));
    }

    #[test]
    fn primary_colliding_with_tertiary_moves_tertiary() {
        let start = attrs(Physical, Social, Mental);
        let next = start.with(PrioritySlot::Primary, Mental);
        assert_eq!(next, attrs(Mental, Social, Physical));
    }

    #[test]
    fn secondary_colliding_with_tertiary_moves_tertiary() {
        let start = attrs(Physical, Social, Mental);
        let next = start.with(PrioritySlot::Secondary, Mental);
        assert_eq!(next, attrs(Physical, Mental, Social));
    }

    #[test]
    fn tertiary_colliding_with_primary_moves_primary() {
        let start = attrs(Physical, Social, Mental);
        let next = start.with(PrioritySlot::Tertiary, Physical);
        assert_eq!(next, attrs(Mental, Social, Physical));
    }

    #[test]
    fn repairs_fully_degenerate_assignment() {
        let start = attrs(Physical, Physical, Physical);
        let next = start.with(PrioritySlot::Primary, Physical);
        assert!(next.is_permutation());
        assert_eq!(next.primary, Physical);
    }

    #[test]
    fn every_single_assignment_yields_a_permutation() {
        let start = attrs(Physical, Social, Mental);
        for slot in PrioritySlot::ALL {
            for category in AttributeGroup::ALL {
                let next = start.with(slot, category);
                assert!(next.is_permutation(), "{:?} -> {:?}", slot, category);
                assert_eq!(next.get(slot), category);
            }
        }
    }

    #[test]
    fn budgets_by_slot() {
        assert_eq!(PrioritySlot::Primary.attribute_budget(), 7);
        assert_eq!(PrioritySlot::Tertiary.attribute_budget(), 3);
        assert_eq!(PrioritySlot::Secondary.ability_budget(), 9);
        assert_eq!(PrioritySlot::Tertiary.ability_budget(), 5);
    }

    #[test]
    fn slot_of_finds_category() {
        let p = Priorities::<AbilityCategory>::default();
        assert_eq!(p.slot_of(AbilityCategory::Skills), PrioritySlot::Secondary);
    }
}
