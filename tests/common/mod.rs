#![allow(dead_code)]

use egui::Color32;

use breakout_mvc::breakout::game_obj::{GameObj, ObjId};
use breakout_mvc::breakout::model::{Direction, GameState, Model};

#[ctor::ctor]
fn init() {
    use log::LevelFilter;
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .init()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    MoveBat(Direction),
    SetFast(bool),
    SetGameState(GameState),
}

/// Model with directly settable state, recording every mutator call
#[derive(Clone, Debug)]
pub struct RecordingModel {
    pub ball: GameObj,
    pub bat: GameObj,
    pub bricks: Vec<GameObj>,
    pub score: i32,
    pub lives: u32,
    pub border_left: bool,
    pub border_right: bool,
    pub state: GameState,
    pub calls: Vec<Call>,
}

impl RecordingModel {
    pub fn with_bricks(num_bricks: u32) -> Self {
        Self {
            ball: GameObj::new(ObjId(0), 285.0, 385.0, 30.0, 30.0, Color32::RED),
            bat: GameObj::new(ObjId(1), 225.0, 755.0, 150.0, 7.5, Color32::GRAY),
            bricks: (0..num_bricks)
                .map(|i| GameObj::new(ObjId(2 + i), 50.0 * i as f32, 100.0, 50.0, 30.0, Color32::BLUE))
                .collect(),
            score: 0,
            lives: 3,
            border_left: false,
            border_right: false,
            state: GameState::Running,
            calls: vec![],
        }
    }
}

impl Model for RecordingModel {
    fn ball(&self) -> &GameObj {
        &self.ball
    }

    fn bat(&self) -> &GameObj {
        &self.bat
    }

    fn bricks(&self) -> &[GameObj] {
        &self.bricks
    }

    fn score(&self) -> i32 {
        self.score
    }

    fn lives(&self) -> u32 {
        self.lives
    }

    fn bat_border_left(&self) -> bool {
        self.border_left
    }

    fn bat_border_right(&self) -> bool {
        self.border_right
    }

    fn game_state(&self) -> GameState {
        self.state
    }

    fn move_bat(&mut self, direction: Direction) {
        self.calls.push(Call::MoveBat(direction));
    }

    fn set_fast(&mut self, fast: bool) {
        self.calls.push(Call::SetFast(fast));
    }

    fn set_game_state(&mut self, state: GameState) {
        self.calls.push(Call::SetGameState(state));
        self.state = state;
    }
}
