use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::thread::JoinHandle;

use anyhow::{anyhow, Result};
use eframe::glow;
use egui::{Context, Event, Id, Key, LayerId, Order, Painter, Vec2};

use breakout_mvc::breakout::controller::Controller;
use breakout_mvc::breakout::game_loop::run_progression;
use breakout_mvc::breakout::mechanics::{BreakoutModel, MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y};
use breakout_mvc::breakout::model::share;
use breakout_mvc::breakout::pane_drawer::PaneDrawer;
use breakout_mvc::breakout::stylesheet::{Stylesheet, STYLESHEET_NAME};
use breakout_mvc::breakout::view::View;
use breakout_mvc::util::init_logging;

pub const FRAME_SIZE_X: f32 = MODEL_GRID_LEN_X;
pub const FRAME_SIZE_Y: f32 = MODEL_GRID_LEN_Y;

/// overrides the stylesheet location
const STYLESHEET_ENV: &str = "BREAKOUT_STYLESHEET";

type SharedView = Arc<Mutex<View<BreakoutModel>>>;

pub struct BreakoutApp {
    view: SharedView,
    exit: Arc<AtomicBool>,
    progression_join_handle: JoinHandle<()>,
}

impl BreakoutApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        view: SharedView,
        exit: Arc<AtomicBool>,
        progression_join_handle: JoinHandle<()>,
    ) -> Self {
        Self {
            view,
            exit,
            progression_join_handle,
        }
    }

    fn lock_view(&self) -> MutexGuard<'_, View<BreakoutModel>> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// the single key press listener; every pressed key goes to the view unchanged
    fn forward_key_presses(&self, ctx: &Context) {
        let pressed_keys: Vec<Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    Event::Key { key, pressed: true, .. } => Some(*key),
                    _ => None,
                })
                .collect()
        });
        if pressed_keys.is_empty() {
            return;
        }
        let view = self.lock_view();
        for key in pressed_keys {
            view.handle(key);
        }
    }

    fn draw_game_content(&self, painter: &Painter) {
        let canvas_size = painter.clip_rect().size();
        let view = self.lock_view();
        if let Some(pane) = view.pane() {
            PaneDrawer::new(canvas_size, pane).paint(painter);
        }
    }
}

impl eframe::App for BreakoutApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        if self.progression_join_handle.is_finished() {
            frame.close()
        }
        frame.set_window_size(Vec2::new(FRAME_SIZE_X, FRAME_SIZE_Y));

        self.forward_key_presses(ctx);

        let game_painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        self.draw_game_content(&game_painter);
    }

    fn on_exit(&mut self, _: Option<&glow::Context>) {
        self.exit.store(true, Ordering::Relaxed);
    }
}

fn stylesheet_path() -> PathBuf {
    env::var_os(STYLESHEET_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(STYLESHEET_NAME))
}

fn breakout_user_game() -> Result<()> {
    let model = share(BreakoutModel::new());
    let controller = Controller::new(model.clone());
    let mut view = View::new(FRAME_SIZE_X, FRAME_SIZE_Y, model.clone(), controller);
    view.start(Stylesheet::load_or_default(&stylesheet_path()))?;
    let view: SharedView = Arc::new(Mutex::new(view));
    let exit = Arc::new(AtomicBool::new(false));

    let mut native_options = eframe::NativeOptions::default();
    native_options.default_theme = eframe::Theme::Dark;
    native_options.initial_window_size = Some(Vec2::new(FRAME_SIZE_X, FRAME_SIZE_Y));
    eframe::run_native(
        "Breakout",
        native_options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            let p_view = Arc::clone(&view);
            let p_exit = Arc::clone(&exit);
            let progression_join_handle =
                thread::spawn(move || run_progression(model, p_view, p_exit, move || egui_ctx.request_repaint()));
            Box::new(BreakoutApp::new(cc, view, exit, progression_join_handle))
        }),
    )
    .map_err(|e| anyhow!("{e}"))
}

fn main() -> Result<()> {
    init_logging();
    breakout_user_game()
}
