//! d10 dice pools.
//!
//! A pool of d10s is rolled against a difficulty. Each die showing at least
//! the difficulty is a success unless it shows 1; each 1 cancels a success.
//! The random source is passed in, so rolls are reproducible under test.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_POOL: u8 = 1;
pub const MAX_POOL: u8 = 30;
pub const MIN_DIFFICULTY: u8 = 2;
pub const MAX_DIFFICULTY: u8 = 10;
pub const DEFAULT_POOL: u8 = 5;
pub const DEFAULT_DIFFICULTY: u8 = 6;

/// Error when building a dice pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Pool size outside 1..=30
    #[error("Dice pool must be between {MIN_POOL} and {MAX_POOL}, got {0}")]
    PoolOutOfRange(u8),
    /// Difficulty outside 2..=10
    #[error("Difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {0}")]
    DifficultyOutOfRange(u8),
    /// The random source produced a face outside 1..=10
    #[error("Die face out of range: {0}")]
    BadFace(u8),
}

/// A validated number of d10s and a target number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DicePool {
    pool: u8,
    difficulty: u8,
}

impl DicePool {
    pub fn new(pool: u8, difficulty: u8) -> Result<Self, DiceError> {
        if !(MIN_POOL..=MAX_POOL).contains(&pool) {
            return Err(DiceError::PoolOutOfRange(pool));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(DiceError::DifficultyOutOfRange(difficulty));
        }
        Ok(Self { pool, difficulty })
    }

    pub fn pool(&self) -> u8 {
        self.pool
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Roll using `next_face`, which must yield values in 1..=10.
    pub fn roll_with(&self, mut next_face: impl FnMut() -> u8) -> Result<DicePoolResult, DiceError> {
        let rolls = (0..self.pool)
            .map(|_| {
                let face = next_face();
                if (1..=10).contains(&face) {
                    Ok(face)
                } else {
                    Err(DiceError::BadFace(face))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DicePoolResult::from_rolls(*self, rolls))
    }
}

impl Default for DicePool {
    fn default() -> Self {
        Self {
            pool: DEFAULT_POOL,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d10 vs {}", self.pool, self.difficulty)
    }
}

/// Outcome of a pool roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DicePoolResult {
    pub pool: u8,
    pub difficulty: u8,
    /// Individual die faces in roll order
    pub rolls: Vec<u8>,
    pub successes: u32,
    pub ones: u32,
    /// Successes minus ones; negative is a botch
    pub net: i32,
}

impl DicePoolResult {
    pub fn from_rolls(dice: DicePool, rolls: Vec<u8>) -> Self {
        let successes = rolls
            .iter()
            .filter(|r| **r >= dice.difficulty && **r != 1)
            .count() as u32;
        let ones = rolls.iter().filter(|r| **r == 1).count() as u32;
        Self {
            pool: dice.pool,
            difficulty: dice.difficulty,
            rolls,
            successes,
            ones,
            net: successes as i32 - ones as i32,
        }
    }

    pub fn is_botch(&self) -> bool {
        self.successes == 0 && self.ones > 0
    }

    /// Format as a breakdown string (e.g., "[7, 1, 9] = 2 successes, 1 one, net 1")
    pub fn breakdown(&self) -> String {
        let faces: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
        format!(
            "[{}] = {} successes, {} ones, net {}",
            faces.join(", "),
            self.successes,
            self.ones,
            self.net
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(faces: &[u8]) -> impl FnMut() -> u8 + '_ {
        let mut iter = faces.iter().copied().cycle();
        move || iter.next().unwrap_or(10)
    }

    #[test]
    fn test_pool_bounds() {
        assert!(DicePool::new(1, 6).is_ok());
        assert!(DicePool::new(30, 6).is_ok());
        assert_eq!(DicePool::new(0, 6), Err(DiceError::PoolOutOfRange(0)));
        assert_eq!(DicePool::new(31, 6), Err(DiceError::PoolOutOfRange(31)));
    }

    #[test]
    fn test_difficulty_bounds() {
        assert!(DicePool::new(5, 2).is_ok());
        assert!(DicePool::new(5, 10).is_ok());
        assert_eq!(DicePool::new(5, 1), Err(DiceError::DifficultyOutOfRange(1)));
        assert_eq!(DicePool::new(5, 11), Err(DiceError::DifficultyOutOfRange(11)));
    }

    #[test]
    fn test_counts_successes_and_ones() {
        let dice = DicePool::new(5, 6).unwrap();
        let result = dice.roll_with(scripted(&[6, 10, 1, 5, 3])).unwrap();
        assert_eq!(result.rolls, vec![6, 10, 1, 5, 3]);
        assert_eq!(result.successes, 2);
        assert_eq!(result.ones, 1);
        assert_eq!(result.net, 1);
        assert!(!result.is_botch());
    }

    #[test]
    fn test_one_never_succeeds_at_difficulty_two() {
        let dice = DicePool::new(3, 2).unwrap();
        let result = dice.roll_with(scripted(&[1, 1, 2])).unwrap();
        assert_eq!(result.successes, 1);
        assert_eq!(result.ones, 2);
        assert_eq!(result.net, -1);
    }

    #[test]
    fn test_botch() {
        let dice = DicePool::new(2, 8).unwrap();
        let result = dice.roll_with(scripted(&[1, 4])).unwrap();
        assert!(result.is_botch());
        assert_eq!(result.net, -1);
    }

    #[test]
    fn test_bad_face_rejected() {
        let dice = DicePool::new(2, 6).unwrap();
        assert_eq!(
            dice.roll_with(scripted(&[0])).unwrap_err(),
            DiceError::BadFace(0)
        );
    }

    #[test]
    fn test_breakdown() {
        let dice = DicePool::new(3, 6).unwrap();
        let result = dice.roll_with(scripted(&[7, 1, 9])).unwrap();
        assert_eq!(result.breakdown(), "[7, 1, 9] = 2 successes, 1 ones, net 1");
    }

    #[test]
    fn random_rolls_keep_counts_consistent() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(20);
        for pool in [1, 5, 30] {
            for difficulty in [2, 6, 10] {
                let dice = DicePool::new(pool, difficulty).unwrap();
                let result = dice.roll_with(|| rng.gen_range(1..=10)).unwrap();
                assert_eq!(result.rolls.len(), pool as usize);
                assert!(result.successes + result.ones <= pool as u32);
                assert_eq!(result.net, result.successes as i32 - result.ones as i32);
            }
        }
    }
}
