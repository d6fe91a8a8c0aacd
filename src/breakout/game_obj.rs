use std::fmt::{Display, Formatter};

use egui::{Color32, Pos2};

use super::algebra_2d::AaBB;

/// Stable identity of a game object, assigned by the model when the object is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjId(pub u32);

impl Display for ObjId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A positioned, sized and coloured rectangle in the playfield.
/// TOP / LEFT corner is 0/0
#[derive(Clone, Debug, PartialEq)]
pub struct GameObj {
    pub id: ObjId,
    pub top_x: f32,
    pub top_y: f32,
    pub width: f32,
    pub height: f32,
    pub colour: Color32,
    pub visible: bool,
}

impl GameObj {
    pub fn new(id: ObjId, top_x: f32, top_y: f32, width: f32, height: f32, colour: Color32) -> Self {
        Self {
            id,
            top_x,
            top_y,
            width,
            height,
            colour,
            visible: true,
        }
    }

    pub fn move_x(&mut self, dx: f32) {
        self.top_x += dx;
    }

    pub fn move_y(&mut self, dy: f32) {
        self.top_y += dy;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn aabb(&self) -> AaBB {
        AaBB {
            min: Pos2::new(self.top_x, self.top_y),
            max: Pos2::new(self.top_x + self.width, self.top_y + self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::{Color32, Pos2};

    use super::*;

    #[test]
    fn moves_keep_size() {
        let mut obj = GameObj::new(ObjId(7), 10.0, 20.0, 30.0, 5.0, Color32::GRAY);
        obj.move_x(-4.0);
        obj.move_y(2.5);
        let aabb = obj.aabb();
        assert_eq!(aabb.min, Pos2::new(6.0, 22.5));
        assert_eq!(aabb.max, Pos2::new(36.0, 27.5));
        assert!(obj.visible);
    }

    #[test]
    fn hidden_object_keeps_identity() {
        let mut obj = GameObj::new(ObjId(3), 0.0, 0.0, 1.0, 1.0, Color32::BLUE);
        obj.hide();
        assert!(!obj.visible);
        assert_eq!(obj.id, ObjId(3));
        assert_eq!(obj.id.to_string(), "#3");
    }
}
