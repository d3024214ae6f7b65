/// A ray hit reported by the physics engine
#[derive(Debug, Clone, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit
    pub distance: f32,
    /// Tag of the object that was hit
    pub tag: String,
}

/// Physics raycasting capability, provided by whatever world the agent lives in
pub trait RayCast {
    /// Cast a ray from `origin` along the unit vector `direction` and report the first hit within `max_distance`
    fn cast(&self, origin: (f32, f32), direction: (f32, f32), max_distance: f32) -> Option<RayHit>;
}

/// A ray fired by [`RaySenses`], only counting hits on objects tagged `tag`
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    pub direction: (f32, f32),
    pub tag: String,
}

impl Ray {
    pub fn new(direction: (f32, f32), tag: impl Into<String>) -> Self {
        Self {
            direction,
            tag: tag.into(),
        }
    }
}

/// Distance sensing with a configurable set of rays
///
/// Produces one distance per ray. A ray that hits nothing, or hits an object whose tag does not
/// match, reads `0.0`.
#[derive(Debug, Clone)]
pub struct RaySenses {
    rays: Vec<Ray>,
    max_distance: f32,
}

impl RaySenses {
    pub fn new(rays: Vec<Ray>, max_distance: f32) -> Self {
        Self { rays, max_distance }
    }

    /// The bird's senses: one ray straight up looking for `"top"`, one straight down looking for `"bottom"`
    pub fn vertical(max_distance: f32) -> Self {
        Self::new(
            vec![Ray::new((0.0, 1.0), "top"), Ray::new((0.0, -1.0), "bottom")],
            max_distance,
        )
    }

    /// Number of values produced by [`sense`](Self::sense)
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Cast every ray from `origin` and collect the distances
    pub fn sense(&self, world: &impl RayCast, origin: (f32, f32)) -> Vec<f32> {
        self.rays
            .iter()
            .map(|ray| match world.cast(origin, ray.direction, self.max_distance) {
                Some(hit) if hit.tag == ray.tag => hit.distance,
                _ => 0.0,
            })
            .collect()
    }
}
