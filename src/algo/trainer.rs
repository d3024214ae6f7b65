use log::debug;

use crate::{
    approx::Approximator,
    ensure_interval,
    error::{Error, Result},
    exploration::{argmax, softmax},
    memory::{ReplayMemory, Transition},
};

/// Outcome of one [`Trainer::train`] pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainSummary {
    /// Number of approximator updates performed, one per transition
    pub updates: usize,
    /// Mean of the Bellman targets written into the update vectors
    pub mean_target: f32,
}

/// Episodic Bellman backup over a replay memory
///
/// Transitions are visited newest first. For each one, the approximator's softmaxed estimate is
/// taken as the update vector, and the entry of its greedy action is replaced by the target
///
/// target = r<sub>i</sub> + γ max softmax(Q(s<sub>i+1</sub>))
///
/// or just r<sub>i</sub> when the transition is the last one or carries the terminal reward.
///
/// The successor estimate is computed against the live approximator, which already holds the
/// updates made earlier in the same pass. There is no frozen target network, so values propagate
/// backward through the whole episode within a single pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trainer {
    discount: f32,
    terminal_reward: f32,
}

impl Trainer {
    /// Fails with [`Error::Configuration`] if `discount` is not in `[0, 1]` or `terminal_reward` is not finite
    pub fn new(discount: f32, terminal_reward: f32) -> Result<Self> {
        ensure_interval!(discount, 0.0, 1.0);
        if !terminal_reward.is_finite() {
            return Err(Error::config("terminal_reward", "must be finite"));
        }
        Ok(Self {
            discount,
            terminal_reward,
        })
    }

    /// Train `approximator` on every transition in `memory`, then clear the memory
    ///
    /// Fails with [`Error::ContractViolation`] if the memory is empty, and propagates any approximator
    /// failure. On failure the memory is left untouched.
    pub fn train<A>(&self, memory: &mut ReplayMemory, approximator: &mut A) -> Result<TrainSummary>
    where
        A: Approximator + ?Sized,
    {
        if memory.is_empty() {
            return Err(Error::contract("replay memory empty at training time"));
        }

        let summary = self.backup(memory, approximator)?;
        memory.clear();

        debug!(
            "trained on {} transitions, mean target {:.4}",
            summary.updates, summary.mean_target
        );
        Ok(summary)
    }

    fn backup<A>(&self, memory: &ReplayMemory, approximator: &mut A) -> Result<TrainSummary>
    where
        A: Approximator + ?Sized,
    {
        let transitions = memory.iter().collect::<Vec<_>>();
        let mut target_sum = 0.0;

        for (i, transition) in transitions.iter().enumerate().rev() {
            let mut predicted = softmax(&approximator.predict(transition.state())?)?;
            let action = argmax(&predicted);

            let target = self.target(transition, transitions.get(i + 1).copied(), approximator)?;
            predicted[action] = target;
            target_sum += target;

            approximator.update(transition.state(), &predicted)?;
        }

        Ok(TrainSummary {
            updates: transitions.len(),
            mean_target: target_sum / transitions.len() as f32,
        })
    }

    fn target<A>(&self, transition: &Transition, next: Option<&Transition>, approximator: &A) -> Result<f32>
    where
        A: Approximator + ?Sized,
    {
        let reward = transition.reward();
        match next {
            Some(next) if reward != self.terminal_reward => {
                let next_values = softmax(&approximator.predict(next.state())?)?;
                let max_next = next_values[argmax(&next_values)];
                Ok(reward + self.discount * max_next)
            }
            _ => Ok(reward),
        }
    }
}
