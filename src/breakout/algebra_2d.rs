use egui::{Pos2, Vec2};
use parry2d::na::{Isometry2, Vector2};
use parry2d::query;
use parry2d::shape::Cuboid;

// max object distance to detect a contact
pub(super) const CONTACT_PREDICTION: f32 = 0.8;

/// Axis-aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AaBB {
    pub min: Pos2,
    pub max: Pos2,
}

impl AaBB {
    pub fn center(&self) -> Pos2 {
        Pos2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn half_extents(&self) -> Vector2<f32> {
        Vector2::new(
            (self.max.x - self.min.x) / 2.0,
            (self.max.y - self.min.y) / 2.0,
        )
    }

    pub fn intersects(&self, other: &AaBB) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// r = v - 2 (v ⋅ n) n
pub fn reflected_vector(v: Vec2, surface_normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(surface_normal) * surface_normal
}

/// Surface normal of `obstacle` at the contact point with `mover`, pointing away from the obstacle.
/// None if both boxes are further apart than the contact prediction.
pub fn contact_normal(mover: &AaBB, obstacle: &AaBB) -> Option<Vec2> {
    let mover_center = mover.center();
    let obstacle_center = obstacle.center();
    query::contact(
        &Isometry2::translation(mover_center.x, mover_center.y),
        &Cuboid::new(mover.half_extents()),
        &Isometry2::translation(obstacle_center.x, obstacle_center.y),
        &Cuboid::new(obstacle.half_extents()),
        CONTACT_PREDICTION,
    )
    .ok()
    .flatten()
    .map(|contact| Vec2::new(contact.normal2.x, contact.normal2.y))
}
