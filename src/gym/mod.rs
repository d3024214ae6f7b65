pub mod corridor;

pub use corridor::{Corridor, Flap};
