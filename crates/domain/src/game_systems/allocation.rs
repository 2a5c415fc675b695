//! Base allocation: priority-ranked Attributes and Abilities plus the capped
//! Discipline, Background, and Virtue pools.
//!
//! Every mutator first asks its `can_*` predicate and returns `false` without
//! touching state when the predicate says no. None of these actions touch the
//! freebie pool, except clan changes that must prune out-of-clan purchases.

use serde::{Deserialize, Serialize};

use crate::character::{
    blank_attribute_specialties, filled_virtues, AbilityAllocation, AbilitySpecialties,
    AttributeAllocation, CharacterState, Concept, FreebiePool, FreebieTarget, PrioritySlot,
    SpecialtyTarget, TraitKey,
};
use crate::reference::{
    allowed_disciplines, is_known_generation, is_listed_archetype, AbilityCategory,
    AttributeGroup, Clan, Discipline,
};

use super::derivation::TRAIT_CAP;

/// Shared discipline dots at character creation.
pub const DISCIPLINE_BUDGET: u32 = 3;
/// Shared background dots at character creation.
pub const BACKGROUND_BUDGET: u32 = 5;
/// Virtue dots above the floor of one each.
pub const VIRTUE_BUDGET: u32 = 7;

/// A budget that base dots are spent from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum BasePool {
    Attributes(AttributeGroup),
    Abilities(AbilityCategory),
    Disciplines,
    Backgrounds,
    Virtues,
}

impl BasePool {
    /// The pool a trait's base dots are drawn from.
    pub fn of(key: TraitKey) -> Self {
        match key {
            TraitKey::Attribute(a) => Self::Attributes(a.group()),
            TraitKey::Ability(a) => Self::Abilities(a.category()),
            TraitKey::Discipline(_) => Self::Disciplines,
            TraitKey::Background(_) => Self::Backgrounds,
            TraitKey::Virtue(_) => Self::Virtues,
        }
    }

    /// The six priority-ranked pools followed by the three fixed ones.
    pub fn all() -> impl Iterator<Item = BasePool> {
        AttributeGroup::ALL
            .into_iter()
            .map(Self::Attributes)
            .chain(AbilityCategory::ALL.into_iter().map(Self::Abilities))
            .chain([Self::Disciplines, Self::Backgrounds, Self::Virtues])
    }

    pub fn label(&self) -> String {
        match self {
            Self::Attributes(group) => format!("{} attributes", group),
            Self::Abilities(category) => category.to_string(),
            Self::Disciplines => "disciplines".to_string(),
            Self::Backgrounds => "backgrounds".to_string(),
            Self::Virtues => "virtues".to_string(),
        }
    }
}

/// Budget and spend of one base pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatus {
    pub budget: u32,
    pub spent: u32,
}

impl PoolStatus {
    /// Signed so a hand-built state that overspends still reports sensibly.
    pub fn remaining(&self) -> i64 {
        i64::from(self.budget) - i64::from(self.spent)
    }

    pub fn has_room(&self) -> bool {
        self.spent < self.budget
    }
}

/// Free-text concept fields editable one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptField {
    Name,
    Player,
    Chronicle,
    Concept,
    Sire,
    Nature,
    Demeanor,
}

/// Sections reset by the per-page clear actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetSection {
    Concept,
    Attributes,
    Abilities,
    Disciplines,
    Backgrounds,
    Virtues,
    MeritsFlaws,
    Finishing,
    Freebies,
}

impl CharacterState {
    // =========================================================================
    // Pools
    // =========================================================================

    pub fn pool_status(&self, pool: BasePool) -> PoolStatus {
        let b = &self.builder;
        let above = |value: u8, floor: u8| u32::from(value.saturating_sub(floor));
        match pool {
            BasePool::Attributes(group) => PoolStatus {
                budget: u32::from(b.attributes.priorities.slot_of(group).attribute_budget()),
                spent: b.attributes.dots.group(group).values().map(|v| above(*v, 1)).sum(),
            },
            BasePool::Abilities(category) => PoolStatus {
                budget: u32::from(b.abilities.priorities.slot_of(category).ability_budget()),
                spent: b.abilities.dots.category(category).values().map(|v| above(*v, 0)).sum(),
            },
            BasePool::Disciplines => PoolStatus {
                budget: DISCIPLINE_BUDGET,
                spent: b.disciplines.values().map(|v| above(*v, 0)).sum(),
            },
            BasePool::Backgrounds => PoolStatus {
                budget: BACKGROUND_BUDGET,
                spent: b.backgrounds.values().map(|v| above(*v, 0)).sum(),
            },
            BasePool::Virtues => PoolStatus {
                budget: VIRTUE_BUDGET,
                spent: b.virtues.values().map(|v| above(*v, 1)).sum(),
            },
        }
    }

    /// Highest base value a trait may be raised to during allocation.
    fn base_ceiling(&self, key: TraitKey) -> u8 {
        match key {
            TraitKey::Attribute(_) => self.ceiling(key),
            _ => TRAIT_CAP,
        }
    }

    /// Whether the clan in effect lets the character learn `discipline`.
    pub fn discipline_allowed(&self, discipline: Discipline) -> bool {
        allowed_disciplines(self.builder.clan()).contains(&discipline)
    }

    // =========================================================================
    // Increment / decrement
    // =========================================================================

    pub fn can_increment(&self, key: TraitKey) -> bool {
        if let TraitKey::Discipline(d) = key {
            if !self.discipline_allowed(d) {
                return false;
            }
        }
        self.builder.base(key) < self.base_ceiling(key)
            && self.pool_status(BasePool::of(key)).has_room()
    }

    pub fn can_decrement(&self, key: TraitKey) -> bool {
        self.builder.base(key) > key.kind().floor()
    }

    pub fn increment(&mut self, key: TraitKey) -> bool {
        if !self.can_increment(key) {
            return false;
        }
        let next = self.builder.base(key) + 1;
        self.builder.set_base(key, next);
        true
    }

    pub fn decrement(&mut self, key: TraitKey) -> bool {
        if !self.can_decrement(key) {
            return false;
        }
        let next = self.builder.base(key) - 1;
        self.builder.set_base(key, next);
        true
    }

    // =========================================================================
    // Priorities
    // =========================================================================

    /// Rejects a ranking that would leave a group spending past its new budget.
    pub fn can_set_attribute_priority(&self, slot: PrioritySlot, group: AttributeGroup) -> bool {
        let next = self.builder.attributes.priorities.with(slot, group);
        AttributeGroup::ALL.into_iter().all(|g| {
            self.pool_status(BasePool::Attributes(g)).spent
                <= u32::from(next.slot_of(g).attribute_budget())
        })
    }

    pub fn set_attribute_priority(&mut self, slot: PrioritySlot, group: AttributeGroup) -> bool {
        if !self.can_set_attribute_priority(slot, group) {
            return false;
        }
        let next = self.builder.attributes.priorities.with(slot, group);
        self.builder.attributes.priorities = next;
        true
    }

    pub fn can_set_ability_priority(&self, slot: PrioritySlot, category: AbilityCategory) -> bool {
        let next = self.builder.abilities.priorities.with(slot, category);
        AbilityCategory::ALL.into_iter().all(|c| {
            self.pool_status(BasePool::Abilities(c)).spent
                <= u32::from(next.slot_of(c).ability_budget())
        })
    }

    pub fn set_ability_priority(&mut self, slot: PrioritySlot, category: AbilityCategory) -> bool {
        if !self.can_set_ability_priority(slot, category) {
            return false;
        }
        let next = self.builder.abilities.priorities.with(slot, category);
        self.builder.abilities.priorities = next;
        true
    }

    // =========================================================================
    // Concept
    // =========================================================================

    /// Switches clan and drops out-of-clan discipline dots from both maps.
    /// Freebie dots dropped this way go back to the pool at full cost.
    pub fn set_clan(&mut self, clan: Option<Clan>) -> bool {
        self.builder.concept.clan = clan;
        let allowed = allowed_disciplines(clan);
        self.builder.disciplines.retain(|d, _| allowed.contains(d));
        self.prune_freebie_disciplines(clan);
        true
    }

    /// Drops out-of-clan freebie discipline counters and refunds them at full cost.
    pub(crate) fn prune_freebie_disciplines(&mut self, clan: Option<Clan>) -> u32 {
        let allowed = allowed_disciplines(clan);
        let mut refunded = 0u32;
        self.freebies.disciplines.retain(|d, bought| {
            let keep = allowed.contains(d);
            if !keep {
                refunded += u32::from(*bought) * FreebieTarget::Discipline(*d).cost();
            }
            keep
        });
        self.freebies.pool = self.freebies.pool.saturating_add(refunded);
        refunded
    }

    /// Only the tiers in the generation table are selectable.
    pub fn set_generation(&mut self, generation: u8) -> bool {
        if !is_known_generation(generation) {
            return false;
        }
        self.builder.concept.generation = generation;
        true
    }

    /// Nature and Demeanor take a listed archetype or blank; the rest is free text.
    pub fn set_concept_field(&mut self, field: ConceptField, value: String) -> bool {
        let concept = &mut self.builder.concept;
        let slot = match field {
            ConceptField::Name => &mut concept.name,
            ConceptField::Player => &mut concept.player,
            ConceptField::Chronicle => &mut concept.chronicle,
            ConceptField::Concept => &mut concept.concept,
            ConceptField::Sire => &mut concept.sire,
            ConceptField::Nature | ConceptField::Demeanor => {
                if !value.is_empty() && !is_listed_archetype(&value) {
                    return false;
                }
                if field == ConceptField::Nature {
                    &mut concept.nature
                } else {
                    &mut concept.demeanor
                }
            }
        };
        *slot = value;
        true
    }

    // =========================================================================
    // Free text
    // =========================================================================

    /// Stored regardless of the trait's value; only shown at 4+.
    pub fn set_specialty(&mut self, target: SpecialtyTarget, text: String) -> bool {
        match target {
            SpecialtyTarget::Attribute(a) => {
                self.builder.attr_specialties.insert(a, text);
            }
            SpecialtyTarget::Ability(a) => self.builder.specialties.set(a, text),
        }
        true
    }

    pub fn set_notes(&mut self, text: String) -> bool {
        self.builder.notes = text;
        true
    }

    pub fn set_merits_flaws(&mut self, text: String) -> bool {
        self.builder.merits_flaws = text;
        true
    }

    // =========================================================================
    // Clear
    // =========================================================================

    pub fn clear_section(&mut self, section: SheetSection) -> bool {
        match section {
            SheetSection::Concept => {
                self.set_clan(None);
                self.builder.concept = Concept::default();
            }
            SheetSection::Attributes => {
                self.builder.attributes = AttributeAllocation::default();
                self.builder.attr_specialties = blank_attribute_specialties();
            }
            SheetSection::Abilities => {
                self.builder.abilities = AbilityAllocation::default();
                self.builder.specialties = AbilitySpecialties::default();
            }
            SheetSection::Disciplines => self.builder.disciplines.clear(),
            SheetSection::Backgrounds => self.builder.backgrounds.clear(),
            SheetSection::Virtues => self.builder.virtues = filled_virtues(1),
            SheetSection::MeritsFlaws => self.builder.merits_flaws.clear(),
            SheetSection::Finishing => self.builder.notes.clear(),
            SheetSection::Freebies => self.freebies = FreebiePool::default(),
        }
        true
    }
}
