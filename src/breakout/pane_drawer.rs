use egui::epaint::RectShape;
use egui::{Align2, FontId, Painter, Pos2, Rect, Rounding, Shape, Vec2};

use super::pane::{Label, Node, Pane, Rectangle};

/// Paints a pane onto an egui canvas, scaling pane coordinates to the canvas size.
pub struct PaneDrawer<'a> {
    canvas_size: Vec2,
    pane: &'a Pane,
}

impl<'a> PaneDrawer<'a> {
    pub fn new(canvas_size: Vec2, pane: &'a Pane) -> Self {
        Self { canvas_size, pane }
    }

    /// pos / PANE_LEN = result / canvas_size
    /// => result = pos * canvas_size / PANE_LEN
    fn scale(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            pos.x * self.canvas_size.x / self.pane.width,
            pos.y * self.canvas_size.y / self.pane.height,
        )
    }

    /// label font size follows the vertical scale of the canvas
    fn font_size(&self) -> f32 {
        self.pane.style.label_font_size * self.canvas_size.y / self.pane.height
    }

    pub fn paint(&self, painter: &Painter) {
        if !self.pane.visible {
            return;
        }
        let offset = painter.clip_rect().min.to_vec2();
        let mut background = self.background();
        background.translate(offset);
        painter.add(background);
        for node in self.pane.children() {
            match node {
                Node::Rect(_, rect) => {
                    let mut shape = self.rectangle(rect);
                    shape.translate(offset);
                    painter.add(shape);
                }
                Node::Label(label) => self.label(painter, label, offset),
            }
        }
    }

    fn background(&self) -> Shape {
        RectShape::filled(
            Rect::from_min_size(Pos2::ZERO, self.canvas_size),
            Rounding::none(),
            self.pane.style.background,
        )
        .into()
    }

    fn rectangle(&self, rect: &Rectangle) -> Shape {
        RectShape::filled(
            Rect::from_two_pos(
                self.scale(Pos2::new(rect.x, rect.y)),
                self.scale(Pos2::new(rect.x + rect.width, rect.y + rect.height)),
            ),
            Rounding::none(),
            rect.fill,
        )
        .into()
    }

    fn label(&self, painter: &Painter, label: &Label, offset: Vec2) {
        painter.text(
            self.scale(Pos2::new(label.x, label.y)) + offset,
            Align2::LEFT_TOP,
            &label.text,
            FontId::proportional(self.font_size()),
            self.pane.style.label_colour,
        );
    }
}
