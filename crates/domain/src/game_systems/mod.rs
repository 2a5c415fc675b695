//! Rules of the V20 point-buy builder.
//!
//! - `allocation`: base dots against priority and pool budgets
//! - `freebies`: the secondary currency and its refunds
//! - `derivation`: clamped totals and values computed from them
//!
//! All three extend `CharacterState` with inherent methods.

mod allocation;
mod derivation;
mod freebies;

pub use allocation::{
    BasePool, ConceptField, PoolStatus, SheetSection, BACKGROUND_BUDGET, DISCIPLINE_BUDGET,
    VIRTUE_BUDGET,
};
pub use derivation::{UnlockedPower, COMPOSITE_CAP, SPECIALTY_THRESHOLD, TRAIT_CAP};
