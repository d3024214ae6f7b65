mod agent;
mod trainer;

pub use agent::{Phase, QAgent, Tick};
pub use trainer::{TrainSummary, Trainer};
