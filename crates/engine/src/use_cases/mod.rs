//! Use cases - User story orchestration.
//!
//! Each module covers one area of the builder. Use cases hold the stores and
//! ports they need and leave every rule to the domain crate.

pub mod builder;
pub mod dice;
pub mod reference;
pub mod session;
pub mod transfer;

pub use builder::{ActionOutcome, BuilderAction, EditCharacter};
pub use dice::RollDice;
pub use reference::{reference_data, ReferenceData};
pub use session::{SessionSnapshot, SessionUseCases};
pub use transfer::{ImportOutcome, SavedSheet, TransferUseCases};
