//! Builder actions against a session's character.
//!
//! Every action maps onto one guarded mutator on `CharacterState`. A guard
//! that refuses the action is not an error: the outcome simply reports
//! `applied: false` alongside the unchanged sheet.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vtm_builder_domain::reference::clan_name;
use vtm_builder_domain::{
    AbilityCategory, AttributeGroup, CharacterState, Clan, ConceptField, FreebieTarget,
    PrioritySlot, SheetSection, SheetView, SpecialtyTarget, TraitKey,
};

use crate::infrastructure::ports::{ClockPort, SessionError};
use crate::stores::{SessionId, SessionStore};

/// One user action on the builder or freebie pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BuilderAction {
    SetConcept {
        field: ConceptField,
        value: String,
    },
    SetClan {
        #[serde(default, with = "clan_name")]
        clan: Option<Clan>,
    },
    SetGeneration {
        generation: u8,
    },
    SetAttributePriority {
        slot: PrioritySlot,
        group: AttributeGroup,
    },
    SetAbilityPriority {
        slot: PrioritySlot,
        category: AbilityCategory,
    },
    Increment {
        key: TraitKey,
    },
    Decrement {
        key: TraitKey,
    },
    Buy {
        target: FreebieTarget,
    },
    Refund {
        target: FreebieTarget,
    },
    IncreasePool,
    DecreasePool,
    PrimeDisciplines,
    SetSpecialty {
        target: SpecialtyTarget,
        text: String,
    },
    SetNotes {
        text: String,
    },
    SetMeritsFlaws {
        text: String,
    },
    Clear {
        section: SheetSection,
    },
}

impl BuilderAction {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SetConcept { .. } => "set_concept",
            Self::SetClan { .. } => "set_clan",
            Self::SetGeneration { .. } => "set_generation",
            Self::SetAttributePriority { .. } => "set_attribute_priority",
            Self::SetAbilityPriority { .. } => "set_ability_priority",
            Self::Increment { .. } => "increment",
            Self::Decrement { .. } => "decrement",
            Self::Buy { .. } => "buy",
            Self::Refund { .. } => "refund",
            Self::IncreasePool => "increase_pool",
            Self::DecreasePool => "decrease_pool",
            Self::PrimeDisciplines => "prime_disciplines",
            Self::SetSpecialty { .. } => "set_specialty",
            Self::SetNotes { .. } => "set_notes",
            Self::SetMeritsFlaws { .. } => "set_merits_flaws",
            Self::Clear { .. } => "clear",
        }
    }

    /// Apply to `state`. Returns whether the guard allowed it.
    pub fn apply(self, state: &mut CharacterState) -> bool {
        match self {
            Self::SetConcept { field, value } => state.set_concept_field(field, value),
            Self::SetClan { clan } => state.set_clan(clan),
            Self::SetGeneration { generation } => state.set_generation(generation),
            Self::SetAttributePriority { slot, group } => state.set_attribute_priority(slot, group),
            Self::SetAbilityPriority { slot, category } => {
                state.set_ability_priority(slot, category)
            }
            Self::Increment { key } => state.increment(key),
            Self::Decrement { key } => state.decrement(key),
            Self::Buy { target } => state.buy(target),
            Self::Refund { target } => state.refund(target),
            Self::IncreasePool => state.increase_pool(),
            Self::DecreasePool => state.decrease_pool(),
            Self::PrimeDisciplines => {
                state.prime_disciplines();
                true
            }
            Self::SetSpecialty { target, text } => state.set_specialty(target, text),
            Self::SetNotes { text } => state.set_notes(text),
            Self::SetMeritsFlaws { text } => state.set_merits_flaws(text),
            Self::Clear { section } => state.clear_section(section),
        }
    }
}

/// Result of an action: whether it applied, and the sheet afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    pub applied: bool,
    pub sheet: SheetView,
}

pub struct EditCharacter {
    sessions: Arc<SessionStore>,
    clock: Arc<dyn ClockPort>,
}

impl EditCharacter {
    pub fn new(sessions: Arc<SessionStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { sessions, clock }
    }

    pub fn execute(
        &self,
        session_id: SessionId,
        action: BuilderAction,
    ) -> Result<ActionOutcome, SessionError> {
        let label = action.label();
        let now = self.clock.now();
        let outcome = self
            .sessions
            .update(session_id, |session| {
                let applied = action.apply(&mut session.state);
                if applied {
                    session.updated_at = now;
                }
                ActionOutcome {
                    applied,
                    sheet: session.state.sheet(),
                }
            })
            .ok_or(SessionError::NotFound(session_id))?;

        tracing::debug!(
            session_id = %session_id,
            action = label,
            applied = outcome.applied,
            freebie_pool = outcome.sheet.freebie_pool,
            "Builder action"
        );
        Ok(outcome)
    }
}
