/// A single tick's observation and the reward received for acting on it
///
/// Transitions are immutable once created. The action taken is not stored: at training time
/// it is recovered as the greedy action of the approximator's current estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    state: Vec<f32>,
    reward: f32,
}

impl Transition {
    pub fn new(state: Vec<f32>, reward: f32) -> Self {
        Self { state, reward }
    }

    /// The state vector observed on this tick
    pub fn state(&self) -> &[f32] {
        &self.state
    }

    /// The reward received on this tick
    pub fn reward(&self) -> f32 {
        self.reward
    }
}
