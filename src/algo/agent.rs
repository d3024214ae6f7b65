use log::info;
use rand::Rng;

use crate::{
    approx::Approximator,
    config::AgentConfig,
    env::Environment,
    error::{Error, Result},
    exploration::{ActionSelector, Choice, ExplorationScheduler},
    memory::{ReplayMemory, Transition},
    stats::{EpisodeStats, Report},
    util::{ensure_finite, ensure_len},
};

use super::{TrainSummary, Trainer};

/// Lifecycle of a [`QAgent`]
///
/// `Terminal` only lasts while an ended episode is being trained on. An agent left in `Terminal`
/// had its training fail and refuses further ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Alive,
    Terminal,
}

/// What happened during one [`QAgent::tick`]
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Index of the action applied
    pub action: usize,
    /// Whether the action was greedy or exploratory
    pub choice: Choice,
    /// Strength the action was applied with
    pub magnitude: f32,
    /// Reward stored for this tick
    pub reward: f32,
    /// Whether the episode ended on this tick
    pub terminal: bool,
    /// Exploration rate used for this tick
    pub exploration_rate: f32,
    /// Result of the end-of-episode training pass, if the episode ended
    pub training: Option<TrainSummary>,
}

/// An online Q-learning agent trained by an episodic Bellman backup
///
/// Every tick the agent observes, acts on the softmax of the approximator's action values, and
/// stores the observation with its reward. When the environment reports the episode ended, the
/// whole episode is replayed newest first through the [`Trainer`] and the environment is reset.
///
/// ### Generics
/// - `A`: The [`Approximator`] estimating action values
/// - `R`: The random number generator driving exploration
pub struct QAgent<A, R>
where
    A: Approximator,
    R: Rng,
{
    approximator: A,
    memory: ReplayMemory,
    scheduler: ExplorationScheduler,
    selector: ActionSelector<R>,
    trainer: Trainer,
    stats: EpisodeStats,
    config: AgentConfig,
    phase: Phase,
}

impl<A, R> QAgent<A, R>
where
    A: Approximator,
    R: Rng,
{
    /// Initialize a new `QAgent`
    ///
    /// ### Arguments
    /// - `approximator` The model to act with and train
    /// - `config` An [`AgentConfig`], validated here
    /// - `rng` Source of randomness for exploration
    pub fn new(approximator: A, config: AgentConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            approximator,
            memory: ReplayMemory::new(config.memory_capacity)?,
            scheduler: ExplorationScheduler::new(config.exploration)?,
            selector: ActionSelector::new(rng),
            trainer: Trainer::new(config.discount, config.terminal_reward)?,
            stats: EpisodeStats::default(),
            config,
            phase: Phase::Alive,
        })
    }

    /// Advance the agent by one fixed timestep of length `dt`
    ///
    /// Fails fast on any contract violation: a state of the wrong length, non-finite state or action
    /// values, a non-finite `dt`, or ticking an agent whose last training pass failed. Approximator
    /// failures are propagated unchanged.
    pub fn tick<E>(&mut self, env: &mut E, dt: f32) -> Result<Tick>
    where
        E: Environment + ?Sized,
    {
        if self.phase == Phase::Terminal {
            return Err(Error::contract(
                "agent ticked after a failed end-of-episode training pass",
            ));
        }
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(Error::contract(format!("invalid timestep {}", dt)));
        }

        self.stats.tick(dt);

        let state = env.observe();
        ensure_len("state vector", &state, self.config.state_size)?;
        ensure_finite("state vector", &state)?;

        let action_values = self.approximator.predict(&state)?;
        ensure_len("action-value vector", &action_values, self.config.num_actions)?;

        let exploration_rate = self.scheduler.decay();
        let selection =
            self.selector
                .select(&action_values, self.config.exploration_enabled, exploration_rate)?;

        let magnitude = self.config.action_magnitude_scale * selection.probabilities[selection.action];
        env.apply_action(selection.action, magnitude);

        let terminal = env.episode_ended();
        let reward = if terminal {
            self.config.terminal_reward
        } else {
            self.config.step_reward
        };
        if !reward.is_finite() {
            return Err(Error::contract(format!("non-finite reward {}", reward)));
        }

        self.memory.push(Transition::new(state, reward));

        let training = if terminal {
            Some(self.end_episode(env)?)
        } else {
            None
        };

        Ok(Tick {
            action: selection.action,
            choice: selection.choice,
            magnitude,
            reward,
            terminal,
            exploration_rate,
            training,
        })
    }

    /// Deploy the agent into the environment until one episode ends, returning the updated stats
    ///
    /// Loops forever if the environment never reports the end of an episode.
    pub fn go<E>(&mut self, env: &mut E, dt: f32) -> Result<EpisodeStats>
    where
        E: Environment + ?Sized,
    {
        while !self.tick(env, dt)?.terminal {}
        Ok(self.stats)
    }

    fn end_episode<E>(&mut self, env: &mut E) -> Result<TrainSummary>
    where
        E: Environment + ?Sized,
    {
        self.phase = Phase::Terminal;

        let episode_len = self.memory.len();
        let summary = self.trainer.train(&mut self.memory, &mut self.approximator)?;
        self.stats.finish_episode();

        info!(
            "episode {} ended after {} ticks | best time {:.2} | explore rate {:.4}",
            self.stats.fail_count,
            episode_len,
            self.stats.best_timer,
            self.scheduler.rate()
        );

        env.reset_to_start();
        self.memory.clear();
        self.phase = Phase::Alive;

        Ok(summary)
    }

    /// A read-only snapshot for display
    pub fn report(&self) -> Report {
        Report::new(&self.stats, self.scheduler.rate())
    }

    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    pub fn exploration_rate(&self) -> f32 {
        self.scheduler.rate()
    }

    pub fn memory(&self) -> &ReplayMemory {
        &self.memory
    }

    pub fn approximator(&self) -> &A {
        &self.approximator
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
