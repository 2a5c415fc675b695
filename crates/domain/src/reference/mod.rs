//! Static reference tables consumed by the builder.
//!
//! Everything here is immutable lookup data: trait vocabularies, clans and
//! their disciplines, the discipline power table, generation tiers, and the
//! Nature/Demeanor archetype list.

mod clans;
mod generation;
mod natures;
mod traits;

pub use clans::{allowed_disciplines, clan_name, Clan, Discipline, PowerInfo};
pub use generation::{
    generation_info, is_known_generation, GenerationInfo, DEFAULT_GENERATION, GENERATION_TABLE,
};
pub use natures::{is_listed_archetype, NATURES};
pub use traits::{Ability, AbilityCategory, Attribute, AttributeGroup, Background, Virtue};
