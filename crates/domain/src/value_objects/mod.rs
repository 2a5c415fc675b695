//! Value objects that sit beside the character model.

mod dice;

pub use dice::{
    DiceError, DicePool, DicePoolResult, DEFAULT_DIFFICULTY, DEFAULT_POOL, MAX_DIFFICULTY,
    MAX_POOL, MIN_DIFFICULTY, MIN_POOL,
};
