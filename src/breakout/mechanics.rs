use std::time::Duration;

use egui::{Color32, Vec2};
use rand::Rng;

use super::algebra_2d::{contact_normal, reflected_vector};
use super::game_obj::{GameObj, ObjId};
use super::model::{Direction, GameState, Model};

/// TOP / LEFT corner is 0/0
pub const MODEL_GRID_LEN_X: f32 = 600.0;
pub const MODEL_GRID_LEN_Y: f32 = 800.0;

/// space reserved for the info label
const CEILING_HEIGHT_Y: f32 = 40.0;

pub const TIME_GRANULARITY: Duration = Duration::from_millis(20);
const FAST_TIME_GRANULARITY: Duration = Duration::from_millis(10);

const BALL_SIZE: f32 = 30.0;
/// distance the ball travels per time step
const BALL_MOVE: f32 = 3.0;

const BRICK_WIDTH: f32 = 50.0;
const BRICK_HEIGHT: f32 = 30.0;
const BRICKS_SETUP_TOP_Y: f32 = 100.0;

const BAT_LEN_X: f32 = BRICK_WIDTH * 3.0;
const BAT_LEN_Y: f32 = BRICK_HEIGHT / 4.0;
/// distance the bat travels per move command
const BAT_MOVE: f32 = 10.0;

pub const HIT_BRICK: i32 = 50;
const INITIAL_LIVES: u32 = 3;

const BALL_ID: ObjId = ObjId(0);
const BAT_ID: ObjId = ObjId(1);
const FIRST_BRICK_ID: u32 = 2;

/// A plain Breakout rule set behind the [Model] interface.
#[derive(Clone, Debug)]
pub struct BreakoutModel {
    ball: GameObj,
    ball_direction: Vec2,
    bat: GameObj,
    bricks: Vec<GameObj>,
    score: i32,
    lives: u32,
    fast: bool,
    state: GameState,
    bat_border_left: bool,
    bat_border_right: bool,
}

impl Default for BreakoutModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakoutModel {
    pub fn new() -> Self {
        Self {
            ball: BreakoutModel::initial_ball(),
            ball_direction: BreakoutModel::initial_ball_direction(),
            bat: BreakoutModel::initial_bat(),
            bricks: BreakoutModel::initial_bricks(),
            score: 0,
            lives: INITIAL_LIVES,
            fast: false,
            state: GameState::Running,
            bat_border_left: false,
            bat_border_right: false,
        }
    }

    fn initial_bricks() -> Vec<GameObj> {
        let num_bricks = (MODEL_GRID_LEN_X / BRICK_WIDTH) as u32;
        (0..num_bricks)
            .map(|i| {
                GameObj::new(
                    ObjId(FIRST_BRICK_ID + i),
                    BRICK_WIDTH * i as f32,
                    BRICKS_SETUP_TOP_Y,
                    BRICK_WIDTH,
                    BRICK_HEIGHT,
                    Color32::BLUE,
                )
            })
            .collect()
    }

    fn initial_ball() -> GameObj {
        GameObj::new(
            BALL_ID,
            (MODEL_GRID_LEN_X - BALL_SIZE) / 2.0,
            (MODEL_GRID_LEN_Y - BALL_SIZE) / 2.0,
            BALL_SIZE,
            BALL_SIZE,
            Color32::RED,
        )
    }

    fn initial_ball_direction() -> Vec2 {
        Vec2::new(rand::thread_rng().gen_range(-0.35..0.35), -1.0)
    }

    fn initial_bat() -> GameObj {
        GameObj::new(
            BAT_ID,
            (MODEL_GRID_LEN_X - BAT_LEN_X) / 2.0,
            MODEL_GRID_LEN_Y - BRICK_HEIGHT * 1.5,
            BAT_LEN_X,
            BAT_LEN_Y,
            Color32::GRAY,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        match self.fast {
            true => FAST_TIME_GRANULARITY,
            false => TIME_GRANULARITY,
        }
    }

    pub fn finished(&self) -> bool {
        self.state == GameState::Finished
    }

    /// move one time step forward
    pub fn time_step(&mut self) {
        if self.finished() {
            return;
        }
        let move_vector = self.ball_direction.normalized() * BALL_MOVE;
        self.ball.move_x(move_vector.x);
        self.ball.move_y(move_vector.y);

        self.bounce_off_walls();
        self.bounce_off_bat();
        self.hit_bricks();
        self.check_ball_lost();
        self.check_game_end_situation();
    }

    fn bounce_off_walls(&mut self) {
        let ball = &mut self.ball;
        if ball.top_x <= 0.0 {
            ball.top_x = 0.0;
            self.ball_direction.x = self.ball_direction.x.abs();
        } else if ball.top_x + ball.width >= MODEL_GRID_LEN_X {
            ball.top_x = MODEL_GRID_LEN_X - ball.width;
            self.ball_direction.x = -self.ball_direction.x.abs();
        }
        if ball.top_y <= CEILING_HEIGHT_Y {
            ball.top_y = CEILING_HEIGHT_Y;
            self.ball_direction.y = self.ball_direction.y.abs();
        }
    }

    fn bounce_off_bat(&mut self) {
        if self.ball_direction.y > 0.0 && self.ball.aabb().intersects(&self.bat.aabb()) {
            self.ball.top_y = self.bat.top_y - self.ball.height;
            self.ball_direction.y = -self.ball_direction.y.abs();
        }
    }

    fn hit_bricks(&mut self) {
        let ball_box = self.ball.aabb();
        for brick in self.bricks.iter_mut().filter(|b| b.visible) {
            if !ball_box.intersects(&brick.aabb()) {
                continue;
            }
            if let Some(normal) = contact_normal(&ball_box, &brick.aabb()) {
                // a second brick hit in the same step must not undo the first reflection
                if self.ball_direction.dot(normal) < 0.0 {
                    self.ball_direction = reflected_vector(self.ball_direction, normal);
                }
                brick.hide();
                self.score += HIT_BRICK;
                log::debug!("brick {} hit, score: {}", brick.id, self.score);
            }
        }
    }

    fn check_ball_lost(&mut self) {
        if self.ball.top_y + self.ball.height >= MODEL_GRID_LEN_Y {
            self.lives = self.lives.saturating_sub(1);
            log::info!("ball lost, lives remaining: {}", self.lives);
            self.ball = BreakoutModel::initial_ball();
            self.ball_direction = BreakoutModel::initial_ball_direction();
        }
    }

    fn check_game_end_situation(&mut self) {
        if self.lives == 0 || self.bricks.iter().all(|b| !b.visible) {
            self.state = GameState::Finished;
        }
    }

    fn update_bat_border_flags(&mut self) {
        self.bat_border_left = self.bat.top_x <= 0.0;
        self.bat_border_right = self.bat.top_x + self.bat.width >= MODEL_GRID_LEN_X;
    }
}

impl Model for BreakoutModel {
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
        self.bat_border_left
    }

    fn bat_border_right(&self) -> bool {
        self.bat_border_right
    }

    fn game_state(&self) -> GameState {
        self.state
    }

    fn move_bat(&mut self, direction: Direction) {
        let potential_x = self.bat.top_x + direction.sign() as f32 * BAT_MOVE;
        self.bat.top_x = potential_x.clamp(0.0, MODEL_GRID_LEN_X - self.bat.width);
        self.update_bat_border_flags();
    }

    fn set_fast(&mut self, fast: bool) {
        self.fast = fast;
    }

    fn set_game_state(&mut self, state: GameState) {
        log::debug!("game state: {state}");
        self.state = state;
    }
}
