use anyhow::{ensure, Result};
use egui::Key;
use rustc_hash::FxHashMap;

use crate::util::format::format_score;

use super::controller::Controller;
use super::game_obj::{GameObj, ObjId};
use super::model::{read_model, Model, ModelObserver, SharedModel};
use super::pane::{Label, Node, Pane, Rectangle};
use super::stylesheet::Stylesheet;

/// info label position, measured from the top left corner
pub const LABEL_X: f32 = 50.0;
pub const LABEL_Y: f32 = 10.0;

const INITIAL_SCORE: i32 = 0;
const INITIAL_LIVES: u32 = 3;

pub fn info_text(score: i32, lives: u32) -> String {
    format!("BreakOut: Score = {} | lives remaining : {}", format_score(score), lives)
}

/// Data copied from the model for one redraw
#[derive(Clone, Debug)]
struct Snapshot {
    ball: GameObj,
    bat: GameObj,
    bricks: Vec<GameObj>,
    score: i32,
    lives: u32,
}

impl Snapshot {
    fn of<M: Model>(model: &M) -> Self {
        Self {
            ball: model.ball().clone(),
            bat: model.bat().clone(),
            bricks: model.bricks().to_vec(),
            score: model.score(),
            lives: model.lives(),
        }
    }
}

/// Displays the current state of the model and passes key presses on to the controller.
/// It knows nothing about the game rules.
pub struct View<M> {
    pub width: f32,
    pub height: f32,
    pane: Option<Pane>,
    info_text: Label,
    controller: Controller<M>,
    model: SharedModel<M>,
    /// one rectangle per game object, reused for every frame
    rectangle_store: FxHashMap<ObjId, Rectangle>,
}

impl<M: Model> View<M> {
    pub fn new(width: f32, height: f32, model: SharedModel<M>, controller: Controller<M>) -> Self {
        log::trace!("View::new");
        Self {
            width,
            height,
            pane: None,
            info_text: Label::new(info_text(INITIAL_SCORE, INITIAL_LIVES), LABEL_X, LABEL_Y),
            controller,
            model,
            rectangle_store: FxHashMap::default(),
        }
    }

    /// Builds the drawing pane. Key presses reach the view through [View::handle].
    pub fn start(&mut self, style: Stylesheet) -> Result<()> {
        ensure!(self.pane.is_none(), "view already started");
        let mut pane = Pane::new(self.width, self.height, style);
        pane.visible = true;
        self.pane = Some(pane);
        log::debug!("view started ({}x{})", self.width, self.height);
        Ok(())
    }

    /// key press handler - passes the key on to the controller unchanged
    pub fn handle(&self, key: Key) {
        self.controller.user_key_interaction(key);
    }

    /// Called whenever the model changed.
    /// The read guard is held from taking the snapshot until the picture is drawn.
    pub fn update(&mut self) {
        let model = self.model.clone();
        let guard = read_model(&model);
        let snapshot = Snapshot::of(&*guard);
        self.draw_picture(&snapshot);
        drop(guard);
    }

    fn draw_picture(&mut self, snapshot: &Snapshot) {
        let Some(pane) = self.pane.as_mut() else {
            log::warn!("view not started yet, nothing drawn");
            return;
        };
        pane.clear();
        self.info_text.set_text(info_text(snapshot.score, snapshot.lives));
        pane.add(Node::Label(self.info_text.clone()));

        self.display_game_obj(&snapshot.ball);
        self.display_game_obj(&snapshot.bat);
        for brick in snapshot.bricks.iter().filter(|b| b.visible) {
            self.display_game_obj(brick);
        }
    }

    /// Looks up (or creates) the rectangle for `obj`, moves it to the object's position
    /// and adds it to the pane.
    pub fn display_game_obj(&mut self, obj: &GameObj) {
        let rect = self.rectangle_store.entry(obj.id).or_insert_with(|| {
            log::debug!("new rectangle for game object {}", obj.id);
            Rectangle {
                fill: obj.colour,
                width: obj.width,
                height: obj.height,
                x: obj.top_x,
                y: obj.top_y,
            }
        });
        rect.x = obj.top_x;
        rect.y = obj.top_y;
        let rect = *rect;

        if let Some(pane) = self.pane.as_mut() {
            pane.add(Node::Rect(obj.id, rect));
        }
    }

    pub fn pane(&self) -> Option<&Pane> {
        self.pane.as_ref()
    }

    pub fn info_text(&self) -> &Label {
        &self.info_text
    }

    pub fn cached_shapes(&self) -> &FxHashMap<ObjId, Rectangle> {
        &self.rectangle_store
    }
}

impl<M: Model> ModelObserver for View<M> {
    fn update(&mut self) {
        View::update(self)
    }
}

#[cfg(test)]
mod tests {
    use egui::Color32;

    use crate::breakout::mechanics::BreakoutModel;
    use crate::breakout::model::share;

    use super::*;

    fn started_view() -> View<BreakoutModel> {
        let model = share(BreakoutModel::new());
        let mut view = View::new(600.0, 800.0, model.clone(), Controller::new(model));
        view.start(Stylesheet::default()).unwrap();
        view
    }

    #[test]
    fn start_twice_fails() {
        let mut view = started_view();
        assert!(view.start(Stylesheet::default()).is_err());
        assert!(view.pane().unwrap().visible);
    }

    #[test]
    fn update_before_start_draws_nothing() {
        let model = share(BreakoutModel::new());
        let mut view = View::new(600.0, 800.0, model.clone(), Controller::new(model));
        view.update();
        assert!(view.pane().is_none());
        assert!(view.cached_shapes().is_empty());
        assert_eq!(view.info_text().text, info_text(0, 3));
    }

    #[test]
    fn initial_label_shows_score_and_lives() {
        let view = started_view();
        assert_eq!(view.info_text().text, "BreakOut: Score = 0 | lives remaining : 3");
        assert_eq!((view.info_text().x, view.info_text().y), (LABEL_X, LABEL_Y));
    }

    #[test]
    fn label_groups_large_scores() {
        assert_eq!(info_text(12_350, 1), "BreakOut: Score = 12_350 | lives remaining : 1");
    }

    #[test]
    fn full_model_draws_every_object_once() {
        let mut view = started_view();
        view.update();

        let pane = view.pane().unwrap();
        // label + ball + bat + 12 bricks
        assert_eq!(pane.children().len(), 15);
        assert_eq!(view.cached_shapes().len(), 14);
        assert!(matches!(pane.children()[0], Node::Label(_)));
    }

    #[test]
    fn rectangle_keeps_first_seen_fill_and_size() {
        let mut view = started_view();
        let mut obj = GameObj::new(ObjId(99), 1.0, 2.0, 10.0, 20.0, Color32::RED);
        view.display_game_obj(&obj);

        obj.colour = Color32::GREEN;
        obj.width = 50.0;
        obj.top_x = 5.0;
        view.display_game_obj(&obj);

        let rect = view.cached_shapes()[&ObjId(99)];
        assert_eq!(rect.fill, Color32::RED);
        assert_eq!(rect.width, 10.0);
        assert_eq!(rect.x, 5.0);
        assert_eq!(view.pane().unwrap().rect_ids(), vec![ObjId(99), ObjId(99)]);
    }
}
