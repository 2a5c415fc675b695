//! Derived values: clamped totals, Humanity, Willpower, blood, and powers.
//!
//! Nothing here is stored. Each call reads base dots and freebie counters
//! and recomputes, so a purchase or refund shows up on the very next read.

use serde::Serialize;

use crate::character::{CharacterState, FreebieTarget, SpecialtyTarget, TraitKey, TraitKind};
use crate::reference::{generation_info, Discipline, GenerationInfo, Virtue};

/// Ceiling for Abilities, Disciplines, Backgrounds, and Virtues.
pub const TRAIT_CAP: u8 = 5;

/// Ceiling for the Humanity and Willpower composites.
pub const COMPOSITE_CAP: u8 = 10;

/// Minimum total at which a specialty is shown.
pub const SPECIALTY_THRESHOLD: u8 = 4;

/// A discipline power the character can use at its current rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedPower {
    pub level: u8,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UnlockedPower {
    fn lookup(discipline: Discipline, level: u8) -> Self {
        match discipline.power(level) {
            Some(info) => Self {
                level,
                name: info.name.to_string(),
                description: Some(info.description.to_string()),
            },
            None => Self {
                level,
                name: format!("Level {} power", level),
                description: None,
            },
        }
    }
}

fn clamp(ceiling: u8, parts: &[u8]) -> u8 {
    let sum: u16 = parts.iter().map(|p| u16::from(*p)).sum();
    sum.min(u16::from(ceiling)) as u8
}

impl CharacterState {
    /// Generation tier data for the current concept.
    pub fn generation_info(&self) -> GenerationInfo {
        generation_info(self.builder.concept.generation)
    }

    /// Per-trait ceiling. Attributes follow the generation tier.
    pub fn ceiling(&self, key: TraitKey) -> u8 {
        match key.kind() {
            TraitKind::Attribute => self.generation_info().trait_ceiling,
            _ => TRAIT_CAP,
        }
    }

    /// Ceiling for any freebie target, composites included.
    pub fn target_ceiling(&self, target: FreebieTarget) -> u8 {
        match target.as_trait() {
            Some(key) => self.ceiling(key),
            None => COMPOSITE_CAP,
        }
    }

    /// `min(ceiling, base + freebie)`.
    pub fn total(&self, key: TraitKey) -> u8 {
        clamp(
            self.ceiling(key),
            &[self.builder.base(key), self.freebies.counter(key.into())],
        )
    }

    /// Current clamped value of a freebie target.
    pub fn target_total(&self, target: FreebieTarget) -> u8 {
        match target.as_trait() {
            Some(key) => self.total(key),
            None if target == FreebieTarget::Humanity => self.humanity(),
            None => self.willpower(),
        }
    }

    /// Conscience and Self-Control (base plus freebies) plus the Humanity bonus.
    pub fn humanity(&self) -> u8 {
        let conscience = TraitKey::Virtue(Virtue::Conscience);
        let self_control = TraitKey::Virtue(Virtue::SelfControl);
        clamp(
            COMPOSITE_CAP,
            &[
                self.builder.base(conscience),
                self.freebies.counter(conscience.into()),
                self.builder.base(self_control),
                self.freebies.counter(self_control.into()),
                self.freebies.humanity_bonus,
            ],
        )
    }

    /// Courage (base plus freebies) plus the Willpower bonus.
    pub fn willpower(&self) -> u8 {
        let courage = TraitKey::Virtue(Virtue::Courage);
        clamp(
            COMPOSITE_CAP,
            &[
                self.builder.base(courage),
                self.freebies.counter(courage.into()),
                self.freebies.willpower_bonus,
            ],
        )
    }

    /// Powers for levels `1..=total`. Levels missing from the power table
    /// come back as a "Level N power" placeholder.
    pub fn unlocked_powers(&self, discipline: Discipline) -> Vec<UnlockedPower> {
        let total = self.total(TraitKey::Discipline(discipline));
        (1..=total)
            .map(|level| UnlockedPower::lookup(discipline, level))
            .collect()
    }

    /// Stored specialty text, whether or not it is currently shown.
    pub fn specialty(&self, target: SpecialtyTarget) -> Option<&str> {
        match target {
            SpecialtyTarget::Attribute(a) => {
                self.builder.attr_specialties.get(&a).map(String::as_str)
            }
            SpecialtyTarget::Ability(a) => self.builder.specialties.get(a),
        }
    }

    /// Specialty text when non-empty and the trait total is at least 4.
    pub fn visible_specialty(&self, target: SpecialtyTarget) -> Option<&str> {
        if self.total(target.as_trait()) < SPECIALTY_THRESHOLD {
            return None;
        }
        self.specialty(target).filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{Ability, Attribute, Background};

    #[test]
    fn total_is_clamped_sum() {
        let mut state = CharacterState::new();
        let key = TraitKey::Ability(Ability::Brawl);
        state.builder.set_base(key, 4);
        state.freebies.set_counter(key.into(), 3);
        assert_eq!(state.total(key), 5);

        state.freebies.set_counter(key.into(), 0);
        assert_eq!(state.total(key), 4);
    }

    #[test]
    fn attribute_ceiling_follows_generation() {
        let mut state = CharacterState::new();
        let key = TraitKey::Attribute(Attribute::Strength);
        state.builder.set_base(key, 6);
        assert_eq!(state.total(key), 5);

        state.builder.concept.generation = 7;
        assert_eq!(state.ceiling(key), 6);
        assert_eq!(state.total(key), 6);
    }

    #[test]
    fn totals_stay_within_ceiling_for_every_trait() {
        let mut state = CharacterState::new();
        let keys: Vec<TraitKey> = Attribute::ALL
            .into_iter()
            .map(TraitKey::from)
            .chain(Ability::all().map(TraitKey::from))
            .chain(Background::ALL.into_iter().map(TraitKey::from))
            .chain(Virtue::ALL.into_iter().map(TraitKey::from))
            .chain(Discipline::ALL.into_iter().map(TraitKey::from))
            .collect();
        for (i, key) in keys.iter().enumerate() {
            let base = (i % 7) as u8;
            let bought = (i % 4) as u8;
            state.builder.set_base(*key, base);
            state.freebies.set_counter((*key).into(), bought);
            let total = state.total(*key);
            assert!(total <= state.ceiling(*key));
            assert_eq!(total, (base + bought).min(state.ceiling(*key)));
        }
    }

    #[test]
    fn humanity_and_willpower_from_fresh_virtues() {
        let state = CharacterState::new();
        assert_eq!(state.humanity(), 2);
        assert_eq!(state.willpower(), 1);
    }

    #[test]
    fn composites_saturate_at_ten() {
        let mut state = CharacterState::new();
        for virtue in Virtue::ALL {
            state.builder.set_base(virtue.into(), 5);
            state.freebies.set_counter(FreebieTarget::Virtue(virtue), 5);
        }
        state.freebies.humanity_bonus = 4;
        state.freebies.willpower_bonus = 4;
        assert_eq!(state.humanity(), 10);
        assert_eq!(state.willpower(), 10);
    }

    #[test]
    fn protean_five_unlocks_named_powers() {
        let mut state = CharacterState::new();
        let key = TraitKey::Discipline(Discipline::Protean);
        state.builder.set_base(key, 3);
        state.freebies.set_counter(key.into(), 2);

        let powers = state.unlocked_powers(Discipline::Protean);
        assert_eq!(powers.len(), 5);
        for (power, level) in powers.iter().zip(1u8..) {
            assert_eq!(power.level, level);
            let info = Discipline::Protean.power(level).unwrap();
            assert_eq!(power.name, info.name);
        }
        assert_eq!(powers[0].name, "Eyes of the Beast");
    }

    #[test]
    fn zero_rating_unlocks_nothing() {
        let state = CharacterState::new();
        assert!(state.unlocked_powers(Discipline::Auspex).is_empty());
    }

    #[test]
    fn generation_lookup() {
        let mut state = CharacterState::new();
        state.builder.concept.generation = 7;
        let info = state.generation_info();
        assert_eq!(
            (info.trait_ceiling, info.blood_pool, info.blood_per_turn),
            (6, 20, 4)
        );

        state.builder.concept.generation = 3;
        let info = state.generation_info();
        assert_eq!(
            (info.trait_ceiling, info.blood_pool, info.blood_per_turn),
            (5, 10, 1)
        );
    }

    #[test]
    fn specialty_is_dormant_below_four() {
        let mut state = CharacterState::new();
        let target = SpecialtyTarget::Ability(Ability::Melee);
        state
            .builder
            .specialties
            .set(Ability::Melee, "Knives".to_string());
        state.builder.set_base(target.as_trait(), 3);
        assert_eq!(state.visible_specialty(target), None);
        assert_eq!(state.specialty(target), Some("Knives"));

        state.freebies.set_counter(target.as_trait().into(), 1);
        assert_eq!(state.visible_specialty(target), Some("Knives"));
    }

    #[test]
    fn empty_specialty_is_never_visible() {
        let mut state = CharacterState::new();
        let target = SpecialtyTarget::Attribute(Attribute::Wits);
        state.builder.set_base(target.as_trait(), 4);
        assert_eq!(state.visible_specialty(target), None);
    }
}
