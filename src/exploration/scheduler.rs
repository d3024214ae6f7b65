use serde::{Deserialize, Serialize};

use crate::{
    ensure_interval,
    error::{Error, Result},
};

/// Bounds and decay step of an exploration rate, on the same 0-100 scale as the draw it is
/// compared against in [`ActionSelector::select`](super::ActionSelector::select)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorationConfig {
    /// Rate at the first tick
    ///
    /// **Default**: `100.0`
    pub initial: f32,
    /// Floor the rate is clamped at
    ///
    /// **Default**: `0.01`
    pub min: f32,
    /// Ceiling the rate is clamped at
    ///
    /// **Default**: `100.0`
    pub max: f32,
    /// Amount subtracted on every tick
    ///
    /// **Default**: `0.0001`
    pub decay_step: f32,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            initial: 100.0,
            min: 0.01,
            max: 100.0,
            decay_step: 0.0001,
        }
    }
}

impl ExplorationConfig {
    pub fn validate(&self) -> Result<()> {
        let &Self {
            initial,
            min,
            max,
            decay_step,
        } = self;
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(Error::config(
                "exploration",
                format!("min ({}) and max ({}) must be finite with min <= max", min, max),
            ));
        }
        ensure_interval!(initial, min, max);
        ensure_interval!(decay_step, 0.0, f32::MAX);
        Ok(())
    }
}

/// A linearly decaying exploration rate, clamped to `[min, max]`
///
/// The rate only ever decreases and is never reset, so it keeps decaying across episodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorationScheduler {
    rate: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl ExplorationScheduler {
    /// Fails with [`Error::Configuration`] if the bounds are inconsistent
    pub fn new(config: ExplorationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rate: config.initial,
            min: config.min,
            max: config.max,
            step: config.decay_step,
        })
    }

    /// Advance the schedule by one tick and return the new rate
    ///
    /// r<sub>t+1</sub> = clamp(r<sub>t</sub> - step, min, max)
    pub fn decay(&mut self) -> f32 {
        self.rate = (self.rate - self.step).clamp(self.min, self.max);
        self.rate
    }

    /// The current rate
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn config(initial: f32, min: f32, max: f32, decay_step: f32) -> ExplorationConfig {
        ExplorationConfig {
            initial,
            min,
            max,
            decay_step,
        }
    }

    #[test]
    fn validate_functional() {
        assert!(ExplorationConfig::default().validate().is_ok());
        assert!(config(50.0, 0.0, 100.0, 1.0).validate().is_ok());
        assert!(config(101.0, 0.0, 100.0, 1.0).validate().is_err(), "initial above max");
        assert!(config(50.0, 60.0, 100.0, 1.0).validate().is_err(), "initial below min");
        assert!(config(50.0, 100.0, 0.0, 1.0).validate().is_err(), "min above max");
        assert!(config(50.0, 0.0, 100.0, -1.0).validate().is_err(), "negative step");
        assert!(config(50.0, f32::NAN, 100.0, 1.0).validate().is_err());
    }

    #[test]
    fn linear_decay() {
        let mut x = ExplorationScheduler::new(config(2.0, 0.5, 2.0, 0.5)).unwrap();
        assert_eq!(x.rate(), 2.0);
        assert_eq!(x.decay(), 1.5);
        assert_eq!(x.decay(), 1.0);
        assert_eq!(x.decay(), 0.5);
        assert_eq!(x.decay(), 0.5, "clamped at the floor");
        assert_eq!(x.rate(), 0.5);
    }

    #[test]
    fn zero_step_holds_rate() {
        let mut x = ExplorationScheduler::new(config(30.0, 0.0, 100.0, 0.0)).unwrap();
        for _ in 0..10 {
            assert_eq!(x.decay(), 30.0);
        }
    }

    proptest! {
        #[test]
        fn rate_is_non_increasing_and_bounded(
            min in 0.0f32..50.0,
            span in 0.0f32..50.0,
            frac in 0.0f32..=1.0,
            step in 0.0f32..5.0,
            ticks in 0usize..200,
        ) {
            let max = min + span;
            let initial = (min + span * frac).clamp(min, max);
            let mut x = ExplorationScheduler::new(config(initial, min, max, step)).unwrap();

            let mut prev = x.rate();
            for _ in 0..ticks {
                let rate = x.decay();
                prop_assert!(rate <= prev);
                prop_assert!(rate >= min && rate <= max);
                prev = rate;
            }
        }
    }
}
