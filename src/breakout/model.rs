use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use super::game_obj::GameObj;

/// The model is shared between the GUI thread and the progression thread.
/// This lock is the only one guarding game state.
pub type SharedModel<M> = Arc<RwLock<M>>;

pub fn share<M: Model>(model: M) -> SharedModel<M> {
    Arc::new(RwLock::new(model))
}

pub fn read_model<M: Model>(model: &SharedModel<M>) -> RwLockReadGuard<'_, M> {
    model.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_model<M: Model>(model: &SharedModel<M>) -> RwLockWriteGuard<'_, M> {
    model.write().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Running,
    Finished,
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Running => write!(f, "running"),
            GameState::Finished => write!(f, "finished"),
        }
    }
}

impl FromStr for GameState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(GameState::Running),
            "finished" => Ok(GameState::Finished),
            other => Err(anyhow!("unknown game state '{other}'")),
        }
    }
}

/// Authoritative owner of the game state.
/// View and Controller talk to it only through this trait.
pub trait Model: Send + Sync {
    fn ball(&self) -> &GameObj;
    fn bat(&self) -> &GameObj;
    /// ordered; the order only matters for draw layering
    fn bricks(&self) -> &[GameObj];
    fn score(&self) -> i32;
    fn lives(&self) -> u32;
    /// bat touches the left playfield edge
    fn bat_border_left(&self) -> bool;
    /// bat touches the right playfield edge
    fn bat_border_right(&self) -> bool;
    fn game_state(&self) -> GameState;

    fn move_bat(&mut self, direction: Direction);
    fn set_fast(&mut self, fast: bool);
    fn set_game_state(&mut self, state: GameState);
}

/// Receives the model's change notifications.
pub trait ModelObserver: Send {
    fn update(&mut self);
}
