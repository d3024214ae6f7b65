mod senses;

pub use senses::{Ray, RayCast, RayHit, RaySenses};

/// The agent's view of the world: produces a fixed-length state vector each tick
pub trait Perception {
    /// Observe the current state
    ///
    /// The returned vector must always have the same length, matching the agent's configured state size.
    fn observe(&mut self) -> Vec<f32>;

    /// Whether the episode ended on the current tick (e.g. a wall was hit or the ball was dropped)
    fn episode_ended(&self) -> bool;
}

/// The agent's body: carries out chosen actions and can be put back at its start
pub trait Embodiment {
    /// Apply discrete action `action` with strength `magnitude`
    fn apply_action(&mut self, action: usize, magnitude: f32);

    /// Reset to the start position with zero velocity and clear the episode-ended flag
    fn reset_to_start(&mut self);
}

/// Everything an agent interacts with during a tick
pub trait Environment: Perception + Embodiment {}

impl<T: Perception + Embodiment> Environment for T {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A scripted environment: replays a fixed list of states and ends the episode after `episode_len` ticks
    #[derive(Debug, Clone, Default)]
    pub struct MockEnv {
        pub states: Vec<Vec<f32>>,
        pub episode_len: usize,
        pub tick: usize,
        pub actions: Vec<(usize, f32)>,
        pub resets: usize,
    }

    impl MockEnv {
        pub fn new(states: Vec<Vec<f32>>, episode_len: usize) -> Self {
            Self {
                states,
                episode_len,
                ..Default::default()
            }
        }
    }

    impl Perception for MockEnv {
        fn observe(&mut self) -> Vec<f32> {
            self.states[self.tick % self.states.len()].clone()
        }

        fn episode_ended(&self) -> bool {
            self.tick >= self.episode_len
        }
    }

    impl Embodiment for MockEnv {
        fn apply_action(&mut self, action: usize, magnitude: f32) {
            self.actions.push((action, magnitude));
            self.tick += 1;
        }

        fn reset_to_start(&mut self) {
            self.tick = 0;
            self.resets += 1;
        }
    }

    #[test]
    fn mock_env_ends_after_episode_len() {
        let mut env = MockEnv::new(vec![vec![0.0], vec![1.0]], 2);
        assert_eq!(env.observe(), [0.0]);
        env.apply_action(0, 1.0);
        assert!(!env.episode_ended());
        assert_eq!(env.observe(), [1.0]);
        env.apply_action(1, 1.0);
        assert!(env.episode_ended());

        env.reset_to_start();
        assert!(!env.episode_ended());
        assert_eq!(env.resets, 1);
    }
}
