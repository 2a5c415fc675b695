//! Character record and freebie ledger.
//!
//! Only base dots and freebie counters are stored. Every total is derived on
//! read (see `game_systems::derivation`). Field names and map keys follow the
//! persisted sheet document exactly, so `serde_json` round-trips a saved
//! character byte-for-byte.

mod keys;
mod priorities;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::reference::{
    clan_name, Ability, AbilityCategory, Attribute, AttributeGroup, Background, Clan, Discipline,
    Virtue, DEFAULT_GENERATION,
};

pub use keys::{FreebieTarget, SpecialtyTarget, TraitKey, TraitKind};
pub use priorities::{Priorities, PriorityCategory, PrioritySlot};

/// Dots keyed by a stable trait enum.
pub type DotMap<K> = BTreeMap<K, u8>;

/// Starting freebie balance.
pub const STARTING_FREEBIES: u32 = 15;

// =============================================================================
// Concept
// =============================================================================

/// Identity fields from the concept page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub player: String,
    pub chronicle: String,
    pub concept: String,
    #[serde(with = "clan_name")]
    pub clan: Option<Clan>,
    pub sire: String,
    pub nature: String,
    pub demeanor: String,
    pub generation: u8,
}

impl Default for Concept {
    fn default() -> Self {
        Self {
            name: String::new(),
            player: String::new(),
            chronicle: String::new(),
            concept: String::new(),
            clan: None,
            sire: String::new(),
            nature: String::new(),
            demeanor: String::new(),
            generation: DEFAULT_GENERATION,
        }
    }
}

// =============================================================================
// Attribute and ability dot grids
// =============================================================================

/// Dots for the nine attributes, split by group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDots {
    pub physical: DotMap<Attribute>,
    pub social: DotMap<Attribute>,
    pub mental: DotMap<Attribute>,
}

impl AttributeDots {
    /// Every attribute set to `value`.
    pub fn filled(value: u8) -> Self {
        let fill = |group: AttributeGroup| group.attributes().into_iter().map(|a| (a, value)).collect();
        Self {
            physical: fill(AttributeGroup::Physical),
            social: fill(AttributeGroup::Social),
            mental: fill(AttributeGroup::Mental),
        }
    }

    pub fn group(&self, group: AttributeGroup) -> &DotMap<Attribute> {
        match group {
            AttributeGroup::Physical => &self.physical,
            AttributeGroup::Social => &self.social,
            AttributeGroup::Mental => &self.mental,
        }
    }

    fn group_mut(&mut self, group: AttributeGroup) -> &mut DotMap<Attribute> {
        match group {
            AttributeGroup::Physical => &mut self.physical,
            AttributeGroup::Social => &mut self.social,
            AttributeGroup::Mental => &mut self.mental,
        }
    }

    pub fn get(&self, attribute: Attribute) -> Option<u8> {
        self.group(attribute.group()).get(&attribute).copied()
    }

    pub fn set(&mut self, attribute: Attribute, value: u8) {
        self.group_mut(attribute.group()).insert(attribute, value);
    }

    /// Whether each group holds exactly its own three attributes.
    pub fn has_exact_keys(&self) -> bool {
        AttributeGroup::ALL.into_iter().all(|group| {
            let map = self.group(group);
            map.len() == 3 && group.attributes().iter().all(|a| map.contains_key(a))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        AttributeGroup::ALL
            .into_iter()
            .flat_map(move |g| self.group(g).iter().map(|(a, v)| (*a, *v)))
    }
}

/// Dots for the thirty abilities, split by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDots {
    pub talents: DotMap<Ability>,
    pub skills: DotMap<Ability>,
    pub knowledges: DotMap<Ability>,
}

impl AbilityDots {
    pub fn filled(value: u8) -> Self {
        let fill = |cat: AbilityCategory| cat.abilities().into_iter().map(|a| (a, value)).collect();
        Self {
            talents: fill(AbilityCategory::Talents),
            skills: fill(AbilityCategory::Skills),
            knowledges: fill(AbilityCategory::Knowledges),
        }
    }

    pub fn category(&self, category: AbilityCategory) -> &DotMap<Ability> {
        match category {
            AbilityCategory::Talents => &self.talents,
            AbilityCategory::Skills => &self.skills,
            AbilityCategory::Knowledges => &self.knowledges,
        }
    }

    fn category_mut(&mut self, category: AbilityCategory) -> &mut DotMap<Ability> {
        match category {
            AbilityCategory::Talents => &mut self.talents,
            AbilityCategory::Skills => &mut self.skills,
            AbilityCategory::Knowledges => &mut self.knowledges,
        }
    }

    pub fn get(&self, ability: Ability) -> Option<u8> {
        self.category(ability.category()).get(&ability).copied()
    }

    pub fn set(&mut self, ability: Ability, value: u8) {
        self.category_mut(ability.category()).insert(ability, value);
    }

    pub fn has_exact_keys(&self) -> bool {
        AbilityCategory::ALL.into_iter().all(|cat| {
            let map = self.category(cat);
            map.len() == 10 && cat.abilities().iter().all(|a| map.contains_key(a))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, u8)> + '_ {
        AbilityCategory::ALL
            .into_iter()
            .flat_map(move |c| self.category(c).iter().map(|(a, v)| (*a, *v)))
    }
}

/// Base attribute dots plus their priority ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeAllocation {
    #[serde(flatten)]
    pub dots: AttributeDots,
    pub priorities: Priorities<AttributeGroup>,
}

impl Default for AttributeAllocation {
    fn default() -> Self {
        Self {
            dots: AttributeDots::filled(1),
            priorities: Priorities::default(),
        }
    }
}

/// Base ability dots plus their priority ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityAllocation {
    #[serde(flatten)]
    pub dots: AbilityDots,
    pub priorities: Priorities<AbilityCategory>,
}

impl Default for AbilityAllocation {
    fn default() -> Self {
        Self {
            dots: AbilityDots::filled(0),
            priorities: Priorities::default(),
        }
    }
}

/// Sparse free-text specialties per ability, split by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySpecialties {
    pub talents: BTreeMap<Ability, String>,
    pub skills: BTreeMap<Ability, String>,
    pub knowledges: BTreeMap<Ability, String>,
}

impl AbilitySpecialties {
    pub fn category(&self, category: AbilityCategory) -> &BTreeMap<Ability, String> {
        match category {
            AbilityCategory::Talents => &self.talents,
            AbilityCategory::Skills => &self.skills,
            AbilityCategory::Knowledges => &self.knowledges,
        }
    }

    pub fn get(&self, ability: Ability) -> Option<&str> {
        self.category(ability.category())
            .get(&ability)
            .map(String::as_str)
    }

    pub fn set(&mut self, ability: Ability, text: String) {
        let map = match ability.category() {
            AbilityCategory::Talents => &mut self.talents,
            AbilityCategory::Skills => &mut self.skills,
            AbilityCategory::Knowledges => &mut self.knowledges,
        };
        map.insert(ability, text);
    }

    /// Whether every key sits under its own category.
    pub fn is_well_placed(&self) -> bool {
        AbilityCategory::ALL
            .into_iter()
            .all(|cat| self.category(cat).keys().all(|a| a.category() == cat))
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Base build: everything the allocation pages write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builder {
    pub concept: Concept,
    pub attributes: AttributeAllocation,
    pub attr_specialties: BTreeMap<Attribute, String>,
    pub abilities: AbilityAllocation,
    pub specialties: AbilitySpecialties,
    pub disciplines: DotMap<Discipline>,
    pub backgrounds: DotMap<Background>,
    pub virtues: DotMap<Virtue>,
    pub notes: String,
    #[serde(rename = "meritsFlaws")]
    pub merits_flaws: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            concept: Concept::default(),
            attributes: AttributeAllocation::default(),
            attr_specialties: blank_attribute_specialties(),
            abilities: AbilityAllocation::default(),
            specialties: AbilitySpecialties::default(),
            disciplines: DotMap::new(),
            backgrounds: DotMap::new(),
            virtues: filled_virtues(1),
            notes: String::new(),
            merits_flaws: String::new(),
        }
    }
}

impl Builder {
    /// Base dots of a trait. Absent keys read as the kind's floor.
    pub fn base(&self, key: TraitKey) -> u8 {
        let stored = match key {
            TraitKey::Attribute(a) => self.attributes.dots.get(a),
            TraitKey::Ability(a) => self.abilities.dots.get(a),
            TraitKey::Discipline(d) => self.disciplines.get(&d).copied(),
            TraitKey::Background(b) => self.backgrounds.get(&b).copied(),
            TraitKey::Virtue(v) => self.virtues.get(&v).copied(),
        };
        stored.unwrap_or_else(|| key.kind().floor())
    }

    pub(crate) fn set_base(&mut self, key: TraitKey, value: u8) {
        match key {
            TraitKey::Attribute(a) => self.attributes.dots.set(a, value),
            TraitKey::Ability(a) => self.abilities.dots.set(a, value),
            TraitKey::Discipline(d) => {
                self.disciplines.insert(d, value);
            }
            TraitKey::Background(b) => {
                self.backgrounds.insert(b, value);
            }
            TraitKey::Virtue(v) => {
                self.virtues.insert(v, value);
            }
        }
    }

    pub fn clan(&self) -> Option<Clan> {
        self.concept.clan
    }
}

pub(crate) fn blank_attribute_specialties() -> BTreeMap<Attribute, String> {
    Attribute::ALL.into_iter().map(|a| (a, String::new())).collect()
}

pub(crate) fn filled_virtues(value: u8) -> DotMap<Virtue> {
    Virtue::ALL.into_iter().map(|v| (v, value)).collect()
}

// =============================================================================
// Freebie pool
// =============================================================================

/// Freebie balance and per-trait purchase counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreebiePool {
    pub pool: u32,
    pub attributes: AttributeDots,
    pub abilities: AbilityDots,
    pub disciplines: DotMap<Discipline>,
    pub backgrounds: DotMap<Background>,
    pub virtues: DotMap<Virtue>,
    #[serde(rename = "humanity")]
    pub humanity_bonus: u8,
    #[serde(rename = "willpower")]
    pub willpower_bonus: u8,
}

impl Default for FreebiePool {
    fn default() -> Self {
        Self {
            pool: STARTING_FREEBIES,
            attributes: AttributeDots::filled(0),
            abilities: AbilityDots::filled(0),
            disciplines: DotMap::new(),
            backgrounds: Background::ALL.into_iter().map(|b| (b, 0)).collect(),
            virtues: filled_virtues(0),
            humanity_bonus: 0,
            willpower_bonus: 0,
        }
    }
}

impl FreebiePool {
    /// Dots bought for a target so far.
    pub fn counter(&self, target: FreebieTarget) -> u8 {
        let stored = match target {
            FreebieTarget::Attribute(a) => self.attributes.get(a),
            FreebieTarget::Ability(a) => self.abilities.get(a),
            FreebieTarget::Discipline(d) => self.disciplines.get(&d).copied(),
            FreebieTarget::Background(b) => self.backgrounds.get(&b).copied(),
            FreebieTarget::Virtue(v) => self.virtues.get(&v).copied(),
            FreebieTarget::Humanity => Some(self.humanity_bonus),
            FreebieTarget::Willpower => Some(self.willpower_bonus),
        };
        stored.unwrap_or(0)
    }

    pub(crate) fn set_counter(&mut self, target: FreebieTarget, value: u8) {
        match target {
            FreebieTarget::Attribute(a) => self.attributes.set(a, value),
            FreebieTarget::Ability(a) => self.abilities.set(a, value),
            FreebieTarget::Discipline(d) => {
                self.disciplines.insert(d, value);
            }
            FreebieTarget::Background(b) => {
                self.backgrounds.insert(b, value);
            }
            FreebieTarget::Virtue(v) => {
                self.virtues.insert(v, value);
            }
            FreebieTarget::Humanity => self.humanity_bonus = value,
            FreebieTarget::Willpower => self.willpower_bonus = value,
        }
    }
}

// =============================================================================
// Character state
// =============================================================================

/// The whole character: base build plus freebie ledger.
///
/// Owned by the caller. Every action is a method taking `&mut self`, so a
/// single owner serializes mutations without further locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterState {
    pub builder: Builder,
    pub freebies: FreebiePool,
}

impl CharacterState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn defaults_match_fresh_sheet() {
        let state = CharacterState::new();
        assert_eq!(state.builder.concept.generation, 13);
        assert_eq!(state.builder.concept.clan, None);
        assert!(Attribute::ALL
            .into_iter()
            .all(|a| state.builder.base(a.into()) == 1));
        assert!(Ability::all().all(|a| state.builder.base(a.into()) == 0));
        assert!(Virtue::ALL
            .into_iter()
            .all(|v| state.builder.base(v.into()) == 1));
        assert_eq!(state.freebies.pool, 15);
        assert_eq!(state.freebies.backgrounds.len(), 10);
        assert!(state.builder.backgrounds.is_empty());
        assert!(state.builder.disciplines.is_empty());
    }

    #[test]
    fn persisted_keys_match_sheet_document() {
        let value = serde_json::to_value(CharacterState::new()).unwrap();
        let builder = &value["builder"];
        assert_eq!(builder["concept"]["clan"], Value::String(String::new()));
        assert_eq!(builder["concept"]["generation"], 13);
        assert_eq!(builder["attributes"]["physical"]["Strength"], 1);
        assert_eq!(builder["attributes"]["priorities"]["primary"], "physical");
        assert_eq!(builder["abilities"]["talents"]["Awarness"], 0);
        assert_eq!(builder["abilities"]["skills"]["Animal Ken"], 0);
        assert_eq!(builder["abilities"]["priorities"]["tertiary"], "knowledges");
        assert_eq!(builder["attr_specialties"]["Wits"], "");
        assert_eq!(builder["virtues"]["SelfControl"], 1);
        assert!(builder.get("meritsFlaws").is_some());

        let freebies = &value["freebies"];
        assert_eq!(freebies["pool"], 15);
        assert_eq!(freebies["humanity"], 0);
        assert_eq!(freebies["willpower"], 0);
        assert_eq!(freebies["backgrounds"]["Generation"], 0);
        assert!(freebies["attributes"].get("priorities").is_none());
    }

    #[test]
    fn absent_sparse_keys_read_as_floor() {
        let builder = Builder::default();
        assert_eq!(builder.base(TraitKey::Discipline(Discipline::Auspex)), 0);
        assert_eq!(builder.base(TraitKey::Background(Background::Herd)), 0);
    }

    #[test]
    fn exact_key_checks() {
        let mut dots = AttributeDots::filled(1);
        assert!(dots.has_exact_keys());
        dots.physical.insert(Attribute::Wits, 1);
        assert!(!dots.has_exact_keys());

        let mut abilities = AbilityDots::filled(0);
        assert!(abilities.has_exact_keys());
        abilities.talents.remove(&Ability::Alertness);
        assert!(!abilities.has_exact_keys());
    }
}
