//! Generation tiers and the ceilings they select.

use serde::{Deserialize, Serialize};

/// Per-tier ceilings: attribute maximum, blood pool size, and blood spend rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInfo {
    pub generation: u8,
    pub trait_ceiling: u8,
    pub blood_pool: u8,
    pub blood_per_turn: u8,
}

/// The generation a new character starts at.
pub const DEFAULT_GENERATION: u8 = 13;

/// Known tiers from 13th down to 5th. The first entry is the fallback.
pub const GENERATION_TABLE: [GenerationInfo; 9] = [
    tier(13, 5, 10, 1),
    tier(12, 5, 11, 1),
    tier(11, 5, 12, 1),
    tier(10, 5, 13, 1),
    tier(9, 5, 14, 1),
    tier(8, 5, 15, 3),
    tier(7, 6, 20, 4),
    tier(6, 7, 30, 6),
    tier(5, 8, 40, 8),
];

const fn tier(generation: u8, trait_ceiling: u8, blood_pool: u8, blood_per_turn: u8) -> GenerationInfo {
    GenerationInfo {
        generation,
        trait_ceiling,
        blood_pool,
        blood_per_turn,
    }
}

/// Look up a tier. Unknown tiers resolve to the 13th generation entry.
pub fn generation_info(generation: u8) -> GenerationInfo {
    GENERATION_TABLE
        .iter()
        .find(|info| info.generation == generation)
        .copied()
        .unwrap_or(GENERATION_TABLE[0])
}

pub fn is_known_generation(generation: u8) -> bool {
    GENERATION_TABLE.iter().any(|info| info.generation == generation)
}
