//! Dice pool rolls.

use std::sync::Arc;

use vtm_builder_domain::{DicePool, DicePoolResult};

use crate::infrastructure::clock::SeededRandom;
use crate::infrastructure::ports::{RandomPort, SessionError};

pub struct RollDice {
    random: Arc<dyn RandomPort>,
}

impl RollDice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Roll `pool` d10s against `difficulty`. A seed replays a fixed sequence
    /// instead of drawing from the shared source.
    pub fn execute(
        &self,
        pool: u8,
        difficulty: u8,
        seed: Option<u64>,
    ) -> Result<DicePoolResult, SessionError> {
        let dice = DicePool::new(pool, difficulty)?;
        let result = match seed {
            Some(seed) => roll(&dice, &SeededRandom::new(seed))?,
            None => roll(&dice, self.random.as_ref())?,
        };

        tracing::debug!(
            dice = %dice,
            seed = ?seed,
            successes = result.successes,
            net = result.net,
            "Dice rolled"
        );
        Ok(result)
    }
}

fn roll(dice: &DicePool, random: &dyn RandomPort) -> Result<DicePoolResult, SessionError> {
    // Faces that do not fit a u8 become 0, which the pool refuses
    Ok(dice.roll_with(|| u8::try_from(random.gen_range(1, 10)).unwrap_or(0))?)
}
