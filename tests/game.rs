use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use egui::Key;

use breakout_mvc::breakout::controller::Controller;
use breakout_mvc::breakout::game_loop::run_progression;
use breakout_mvc::breakout::mechanics::BreakoutModel;
use breakout_mvc::breakout::model::{share, GameState, Model};
use breakout_mvc::breakout::stylesheet::Stylesheet;
use breakout_mvc::breakout::view::View;

mod common;

#[test]
fn stop_key_ends_the_game_loop() {
    let model = share(BreakoutModel::new());
    let mut view = View::new(600.0, 800.0, model.clone(), Controller::new(model.clone()));
    view.start(Stylesheet::default()).unwrap();
    let view = Arc::new(Mutex::new(view));

    view.lock().unwrap().handle(Key::S);
    assert_eq!(model.read().unwrap().game_state(), GameState::Finished);

    run_progression(model.clone(), view.clone(), Arc::new(AtomicBool::new(false)), || {});

    let view = view.lock().unwrap();
    let pane = view.pane().unwrap();
    // label, ball, bat and the untouched wall of bricks
    assert_eq!(pane.children().len(), 3 + model.read().unwrap().bricks().len());
    assert_eq!(view.info_text().text, "BreakOut: Score = 0 | lives remaining : 3");
}

#[test]
fn arrow_keys_move_the_bat_until_the_border() {
    let model = share(BreakoutModel::new());
    let controller = Controller::new(model.clone());
    let start_x = model.read().unwrap().bat().top_x;

    controller.user_key_interaction(Key::ArrowRight);
    assert!(model.read().unwrap().bat().top_x > start_x);

    for _ in 0..200 {
        controller.user_key_interaction(Key::ArrowLeft);
    }
    let m = model.read().unwrap();
    assert_eq!(m.bat().top_x, 0.0);
    assert!(m.bat_border_left());
}
