mod mlp;

pub use mlp::{Mlp, MlpConfig, Network};

use crate::error::Result;

/// A trainable model mapping state vectors to one value estimate per action
///
/// The control loop treats the approximator as opaque: it only ever asks for predictions and
/// nudges the model toward a target vector. Implementations should wrap their own failures with
/// [`Error::approximator`](crate::error::Error::approximator).
pub trait Approximator {
    /// Predict the action values of `state`
    fn predict(&self, state: &[f32]) -> Result<Vec<f32>>;

    /// Perform one in-place gradient step moving the prediction for `state` toward `target`
    fn update(&mut self, state: &[f32], target: &[f32]) -> Result<()>;
}

impl<A: Approximator + ?Sized> Approximator for Box<A> {
    fn predict(&self, state: &[f32]) -> Result<Vec<f32>> {
        (**self).predict(state)
    }

    fn update(&mut self, state: &[f32], target: &[f32]) -> Result<()> {
        (**self).update(state, target)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;

    /// A call made against [`MockApproximator`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Predict(Vec<f32>),
        Update(Vec<f32>, Vec<f32>),
    }

    impl Call {
        /// The target vector of an update, empty for a prediction
        pub fn target(&self) -> &[f32] {
            match self {
                Call::Update(_, target) => target,
                Call::Predict(_) => &[],
            }
        }
    }

    /// A linear model `q_a(s) = weights[a] * sum(s)` that records every call made to it
    ///
    /// Updates move each weight a fixed fraction of the way toward the target, so later predictions
    /// observably depend on earlier updates.
    #[derive(Debug, Default)]
    pub struct MockApproximator {
        pub weights: Vec<f32>,
        pub rate: f32,
        pub calls: RefCell<Vec<Call>>,
    }

    impl MockApproximator {
        pub fn new(weights: Vec<f32>, rate: f32) -> Self {
            Self {
                weights,
                rate,
                calls: RefCell::default(),
            }
        }

        pub fn updates(&self) -> Vec<(Vec<f32>, Vec<f32>)> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|c| match c {
                    Call::Update(s, t) => Some((s.clone(), t.clone())),
                    Call::Predict(_) => None,
                })
                .collect()
        }
    }

    impl Approximator for MockApproximator {
        fn predict(&self, state: &[f32]) -> Result<Vec<f32>> {
            self.calls.borrow_mut().push(Call::Predict(state.to_vec()));
            let x: f32 = state.iter().sum();
            Ok(self.weights.iter().map(|w| w * x).collect())
        }

        fn update(&mut self, state: &[f32], target: &[f32]) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::Update(state.to_vec(), target.to_vec()));
            let x: f32 = state.iter().sum();
            if x != 0.0 {
                for (w, t) in self.weights.iter_mut().zip(target) {
                    *w += self.rate * (t / x - *w);
                }
            }
            Ok(())
        }
    }

    /// An approximator whose every call fails
    pub struct FailingApproximator;

    impl Approximator for FailingApproximator {
        fn predict(&self, _state: &[f32]) -> Result<Vec<f32>> {
            Err(crate::error::Error::approximator("backend unavailable"))
        }

        fn update(&mut self, _state: &[f32], _target: &[f32]) -> Result<()> {
            Err(crate::error::Error::approximator("backend unavailable"))
        }
    }

    #[test]
    fn mock_records_calls_in_order() {
        let mut m = MockApproximator::new(vec![1.0, 2.0], 0.5);
        assert_eq!(m.predict(&[1.0, 1.0]).unwrap(), [2.0, 4.0]);
        m.update(&[1.0, 1.0], &[4.0, 4.0]).unwrap();
        assert_eq!(m.weights, [1.5, 2.0]);
        assert_eq!(
            *m.calls.borrow(),
            [
                Call::Predict(vec![1.0, 1.0]),
                Call::Update(vec![1.0, 1.0], vec![4.0, 4.0])
            ]
        );
    }

    #[test]
    fn boxed_approximators_delegate() {
        let mut m: Box<dyn Approximator> = Box::new(MockApproximator::new(vec![1.0], 1.0));
        assert_eq!(m.predict(&[3.0]).unwrap(), [3.0]);
        assert!(m.update(&[3.0], &[6.0]).is_ok());
        assert_eq!(m.predict(&[3.0]).unwrap(), [6.0]);
    }
}
