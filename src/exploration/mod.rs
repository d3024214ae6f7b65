/// Exploration policy result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Explore,
    Exploit,
}

mod scheduler;
mod selector;
mod softmax;

pub use scheduler::{ExplorationConfig, ExplorationScheduler};
pub use selector::{ActionSelector, Selection};
pub use softmax::{argmax, softmax};
