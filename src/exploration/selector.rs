use log::trace;
use rand::Rng;

use crate::error::Result;

use super::{argmax, softmax, Choice};

/// Result of a single [`ActionSelector::select`] call
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Index of the chosen action
    pub action: usize,
    /// Softmax of the raw action values
    pub probabilities: Vec<f32>,
    /// Whether the greedy action was overridden by a random one
    pub choice: Choice,
}

/// Softmax action selection with an optional uniform-random override
///
/// The source of randomness is injected so that tests can supply a seeded generator.
#[derive(Debug, Clone)]
pub struct ActionSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> ActionSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Choose an action from raw action values
    ///
    /// The greedy action is the argmax of the softmax of `action_values`. If `exploration_enabled`
    /// is set and a uniform draw from `[0, 100)` falls below `exploration_rate`, a uniformly random
    /// action is chosen instead.
    ///
    /// Fails with [`ContractViolation`](crate::error::Error::ContractViolation) if `action_values`
    /// is empty or not finite.
    pub fn select(
        &mut self,
        action_values: &[f32],
        exploration_enabled: bool,
        exploration_rate: f32,
    ) -> Result<Selection> {
        let probabilities = softmax(action_values)?;
        let greedy = argmax(&probabilities);

        if exploration_enabled && self.rng.gen_range(0.0..100.0) < exploration_rate {
            let action = self.rng.gen_range(0..probabilities.len());
            trace!("exploring: action {} overrides greedy {}", action, greedy);
            return Ok(Selection {
                action,
                probabilities,
                choice: Choice::Explore,
            });
        }

        Ok(Selection {
            action: greedy,
            probabilities,
            choice: Choice::Exploit,
        })
    }
}
