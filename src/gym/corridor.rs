use strum::{EnumIter, FromRepr, VariantArray};

use crate::env::{Embodiment, Perception, RayCast, RayHit, RaySenses};

/// Actions for the [`Corridor`] environment, representing a vertical force on the bird
#[derive(FromRepr, EnumIter, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flap {
    Up = 0,
    Down = 1,
}

/// A bird flying between a floor and a ceiling
///
/// The bird falls under gravity and is pushed up or down by its actions. Touching either wall ends
/// the episode. It senses its distance to both walls with two vertical rays.
///
/// Physics advance by one fixed step `dt` per applied action.
#[derive(Debug, Clone)]
pub struct Corridor {
    height: f32,
    start: f32,
    gravity: f32,
    dt: f32,
    y: f32,
    vy: f32,
    ended: bool,
    senses: RaySenses,
}

impl Corridor {
    /// A corridor `height` units tall with the bird starting halfway up
    pub fn new(height: f32, dt: f32) -> Self {
        Self {
            height,
            start: height / 2.0,
            gravity: 9.81,
            dt,
            y: height / 2.0,
            vy: 0.0,
            ended: false,
            senses: RaySenses::vertical(height * 2.0),
        }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Current height of the bird above the floor
    pub fn altitude(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> f32 {
        self.vy
    }
}

impl RayCast for Corridor {
    fn cast(&self, origin: (f32, f32), direction: (f32, f32), max_distance: f32) -> Option<RayHit> {
        let (distance, tag) = if direction.1 > 0.0 {
            (self.height - origin.1, "top")
        } else if direction.1 < 0.0 {
            (origin.1, "bottom")
        } else {
            return None;
        };
        (distance >= 0.0 && distance <= max_distance).then(|| RayHit {
            distance,
            tag: tag.to_string(),
        })
    }
}

impl Perception for Corridor {
    fn observe(&mut self) -> Vec<f32> {
        self.senses.sense(&*self, (0.0, self.y))
    }

    fn episode_ended(&self) -> bool {
        self.ended
    }
}

impl Embodiment for Corridor {
    fn apply_action(&mut self, action: usize, magnitude: f32) {
        let force = match Flap::from_repr(action) {
            Some(Flap::Up) => magnitude,
            Some(Flap::Down) => -magnitude,
            None => 0.0,
        };

        self.vy += (force - self.gravity) * self.dt;
        self.y += self.vy * self.dt;

        if self.y <= 0.0 || self.y >= self.height {
            self.y = self.y.clamp(0.0, self.height);
            self.ended = true;
        }
    }

    fn reset_to_start(&mut self) {
        self.y = self.start;
        self.vy = 0.0;
        self.ended = false;
    }
}
