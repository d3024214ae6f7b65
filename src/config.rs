use serde::{Deserialize, Serialize};

use crate::{
    ensure_interval,
    error::{Error, Result},
    exploration::ExplorationConfig,
};

/// Configuration for the [`QAgent`](crate::algo::QAgent)
///
/// Immutable once handed to the agent. The defaults are those of the corridor bird.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Length of the state vector produced by the perception collaborator
    ///
    /// **Default**: `2`
    pub state_size: usize,
    /// Number of discrete actions, i.e. the length of the approximator's output
    ///
    /// **Default**: `2`
    pub num_actions: usize,
    /// Maximum number of transitions kept in replay memory
    ///
    /// **Default**: `10000`
    pub memory_capacity: usize,
    /// How much future states affect the value of the current one - must be between 0 and 1
    ///
    /// **Default**: `0.99`
    pub discount: f32,
    /// Whether the greedy action may be overridden by a random one
    ///
    /// **Default**: `false`
    pub exploration_enabled: bool,
    /// Exploration rate schedule
    pub exploration: ExplorationConfig,
    /// Reward of the tick on which the episode ends, also used to recognize terminal transitions during training
    ///
    /// **Default**: `-1.0`
    pub terminal_reward: f32,
    /// Reward of every other tick
    ///
    /// **Default**: `0.1`
    pub step_reward: f32,
    /// Multiplier applied to the chosen action's probability to get the action magnitude
    ///
    /// **Default**: `50.0`
    pub action_magnitude_scale: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            state_size: 2,
            num_actions: 2,
            memory_capacity: 10000,
            discount: 0.99,
            exploration_enabled: false,
            exploration: ExplorationConfig::default(),
            terminal_reward: -1.0,
            step_reward: 0.1,
            action_magnitude_scale: 50.0,
        }
    }
}

impl AgentConfig {
    /// The corridor bird: senses the distance to the top and bottom walls and flaps up or down
    pub fn bird() -> Self {
        Self::default()
    }

    /// The balance bot: senses plate tilt, ball position and ball velocity, and tilts the plate
    pub fn balance_bot() -> Self {
        Self {
            state_size: 3,
            action_magnitude_scale: 0.5,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON, filling unspecified fields with defaults, and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is in range
    pub fn validate(&self) -> Result<()> {
        if self.state_size == 0 {
            return Err(Error::config("state_size", "must be greater than 0"));
        }
        if self.num_actions == 0 {
            return Err(Error::config("num_actions", "must be greater than 0"));
        }
        if self.memory_capacity == 0 {
            return Err(Error::config("memory_capacity", "must be greater than 0"));
        }
        let discount = self.discount;
        ensure_interval!(discount, 0.0, 1.0);
        self.exploration.validate()?;
        for (name, value) in [
            ("terminal_reward", self.terminal_reward),
            ("step_reward", self.step_reward),
            ("action_magnitude_scale", self.action_magnitude_scale),
        ] {
            if !value.is_finite() {
                return Err(Error::config(name, "must be finite"));
            }
        }
        if self.terminal_reward == self.step_reward {
            return Err(Error::config(
                "terminal_reward",
                "must differ from step_reward so terminal transitions can be recognized",
            ));
        }
        Ok(())
    }
}
