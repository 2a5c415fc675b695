//! Read-only projection of a character for display.
//!
//! Built fresh from `CharacterState` on every request. Carries the clamped
//! totals, pool figures, and the `can_*` flags so a client can render and
//! gate controls without repeating any rule.

use serde::Serialize;

use crate::character::{CharacterState, FreebieTarget, PrioritySlot, SpecialtyTarget, TraitKey};
use crate::game_systems::{BasePool, PoolStatus, UnlockedPower};
use crate::reference::{
    allowed_disciplines, AbilityCategory, AttributeGroup, Background, GenerationInfo, Virtue,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    pub name: String,
    pub player: String,
    pub chronicle: String,
    pub concept: String,
    pub clan: String,
    pub sire: String,
    pub nature: String,
    pub demeanor: String,
    pub generation: GenerationInfo,
    pub attributes: Vec<GroupView>,
    pub abilities: Vec<GroupView>,
    pub disciplines: DisciplineSection,
    pub backgrounds: GroupView,
    pub virtues: GroupView,
    pub humanity: CompositeView,
    pub willpower: CompositeView,
    pub freebie_pool: u32,
    pub merits_flaws: String,
    pub notes: String,
}

/// A block of traits drawing on one base pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<PrioritySlot>,
    pub budget: u32,
    pub spent: u32,
    pub remaining: i64,
    pub traits: Vec<TraitView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitView {
    pub key: TraitKey,
    pub label: &'static str,
    pub base: u8,
    pub freebie: u8,
    pub total: u8,
    pub ceiling: u8,
    pub can_increment: bool,
    pub can_decrement: bool,
    pub can_buy: bool,
    pub can_refund: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineView {
    #[serde(flatten)]
    pub rating: TraitView,
    pub powers: Vec<UnlockedPower>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineSection {
    pub budget: u32,
    pub spent: u32,
    pub remaining: i64,
    pub disciplines: Vec<DisciplineView>,
}

/// Humanity or Willpower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeView {
    pub total: u8,
    pub bonus: u8,
    pub ceiling: u8,
    pub can_buy: bool,
    pub can_refund: bool,
}

impl CharacterState {
    pub fn sheet(&self) -> SheetView {
        let concept = &self.builder.concept;
        let discipline_pool = self.pool_status(BasePool::Disciplines);
        SheetView {
            name: concept.name.clone(),
            player: concept.player.clone(),
            chronicle: concept.chronicle.clone(),
            concept: concept.concept.clone(),
            clan: concept
                .clan
                .map(|c| c.display_name().to_string())
                .unwrap_or_default(),
            sire: concept.sire.clone(),
            nature: concept.nature.clone(),
            demeanor: concept.demeanor.clone(),
            generation: self.generation_info(),
            attributes: AttributeGroup::ALL
                .into_iter()
                .map(|group| {
                    self.group_view(
                        group.display_name(),
                        Some(self.builder.attributes.priorities.slot_of(group)),
                        BasePool::Attributes(group),
                        group.attributes().into_iter().map(TraitKey::from),
                    )
                })
                .collect(),
            abilities: AbilityCategory::ALL
                .into_iter()
                .map(|category| {
                    self.group_view(
                        category.display_name(),
                        Some(self.builder.abilities.priorities.slot_of(category)),
                        BasePool::Abilities(category),
                        category.abilities().into_iter().map(TraitKey::from),
                    )
                })
                .collect(),
            disciplines: DisciplineSection {
                budget: discipline_pool.budget,
                spent: discipline_pool.spent,
                remaining: discipline_pool.remaining(),
                disciplines: allowed_disciplines(concept.clan)
                    .iter()
                    .map(|d| DisciplineView {
                        rating: self.trait_view(TraitKey::Discipline(*d)),
                        powers: self.unlocked_powers(*d),
                    })
                    .collect(),
            },
            backgrounds: self.group_view(
                "Backgrounds",
                None,
                BasePool::Backgrounds,
                Background::ALL.into_iter().map(TraitKey::from),
            ),
            virtues: self.group_view(
                "Virtues",
                None,
                BasePool::Virtues,
                Virtue::ALL.into_iter().map(TraitKey::from),
            ),
            humanity: self.composite_view(FreebieTarget::Humanity),
            willpower: self.composite_view(FreebieTarget::Willpower),
            freebie_pool: self.freebies.pool,
            merits_flaws: self.builder.merits_flaws.clone(),
            notes: self.builder.notes.clone(),
        }
    }

    fn group_view(
        &self,
        label: &'static str,
        slot: Option<PrioritySlot>,
        pool: BasePool,
        keys: impl Iterator<Item = TraitKey>,
    ) -> GroupView {
        let PoolStatus { budget, spent } = self.pool_status(pool);
        GroupView {
            label,
            slot,
            budget,
            spent,
            remaining: i64::from(budget) - i64::from(spent),
            traits: keys.map(|key| self.trait_view(key)).collect(),
        }
    }

    pub fn trait_view(&self, key: TraitKey) -> TraitView {
        let target = FreebieTarget::from(key);
        let specialty = match key {
            TraitKey::Attribute(a) => self.visible_specialty(SpecialtyTarget::Attribute(a)),
            TraitKey::Ability(a) => self.visible_specialty(SpecialtyTarget::Ability(a)),
            _ => None,
        };
        TraitView {
            key,
            label: key.display_name(),
            base: self.builder.base(key),
            freebie: self.freebies.counter(target),
            total: self.total(key),
            ceiling: self.ceiling(key),
            can_increment: self.can_increment(key),
            can_decrement: self.can_decrement(key),
            can_buy: self.can_buy(target),
            can_refund: self.can_refund(target),
            specialty: specialty.map(str::to_string),
        }
    }

    fn composite_view(&self, target: FreebieTarget) -> CompositeView {
        CompositeView {
            total: self.target_total(target),
            bonus: self.freebies.counter(target),
            ceiling: self.target_ceiling(target),
            can_buy: self.can_buy(target),
            can_refund: self.can_refund(target),
        }
    }
}
