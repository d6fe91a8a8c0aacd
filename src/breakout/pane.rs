use egui::Color32;

use super::game_obj::ObjId;
use super::stylesheet::Stylesheet;

pub const PANE_ID: &str = "Breakout";

/// Drawable state of one game object.
/// Fill and size are fixed when the rectangle is created; only the position follows the object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub fill: Color32,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self { text: text.into(), x, y }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Label(Label),
    Rect(ObjId, Rectangle),
}

/// Retained scene: the nodes drawn in the current frame, later ones on top.
#[derive(Clone, Debug)]
pub struct Pane {
    pub id: &'static str,
    pub width: f32,
    pub height: f32,
    pub style: Stylesheet,
    pub visible: bool,
    children: Vec<Node>,
}

impl Pane {
    pub fn new(width: f32, height: f32, style: Stylesheet) -> Self {
        Self {
            id: PANE_ID,
            width,
            height,
            style,
            visible: false,
            children: vec![],
        }
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn add(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn rect_ids(&self) -> Vec<ObjId> {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Rect(id, _) => Some(*id),
                Node::Label(_) => None,
            })
            .collect()
    }

    pub fn contains(&self, id: ObjId) -> bool {
        self.children.iter().any(|n| matches!(n, Node::Rect(i, _) if *i == id))
    }

    pub fn label(&self) -> Option<&Label> {
        self.children.iter().find_map(|n| match n {
            Node::Label(l) => Some(l),
            Node::Rect(..) => None,
        })
    }
}
