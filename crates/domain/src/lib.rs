//! V20 point-buy character builder.
//!
//! `CharacterState` holds base dots and freebie counters. Methods on it
//! allocate, buy, refund, and derive; `sheet()` projects the whole character
//! for display and `export_document`/`import_document` move it in and out
//! of the JSON sheet format.

pub mod character;
pub mod error;
pub mod game_systems;
pub mod reference;
pub mod sheet;
pub mod transfer;
pub mod value_objects;

pub use character::{
    AbilityAllocation, AbilityDots, AbilitySpecialties, AttributeAllocation, AttributeDots,
    Builder, CharacterState, Concept, DotMap, FreebiePool, FreebieTarget, Priorities,
    PriorityCategory, PrioritySlot, SpecialtyTarget, TraitKey, TraitKind, STARTING_FREEBIES,
};
pub use error::DomainError;
pub use game_systems::{
    BasePool, ConceptField, PoolStatus, SheetSection, UnlockedPower, BACKGROUND_BUDGET,
    COMPOSITE_CAP, DISCIPLINE_BUDGET, SPECIALTY_THRESHOLD, TRAIT_CAP, VIRTUE_BUDGET,
};
pub use reference::{
    allowed_disciplines, generation_info, Ability, AbilityCategory, Attribute, AttributeGroup,
    Background, Clan, Discipline, GenerationInfo, PowerInfo, Virtue, NATURES,
};
pub use sheet::{CompositeView, DisciplineSection, DisciplineView, GroupView, SheetView, TraitView};
pub use transfer::{ImportDocument, ImportSummary};
pub use value_objects::{DiceError, DicePool, DicePoolResult};
