use egui::Key;

use super::model::{write_model, Direction, GameState, Model, SharedModel};

/// Model command derived from a single key press
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    MoveBat(Direction),
    SetFast(bool),
    Finish,
}

impl Command {
    pub fn for_key(key: Key) -> Option<Command> {
        match key {
            Key::ArrowLeft => Some(Command::MoveBat(Direction::Left)),
            Key::ArrowRight => Some(Command::MoveBat(Direction::Right)),
            // very fast ball movement
            Key::F => Some(Command::SetFast(true)),
            // normal speed ball movement
            Key::N => Some(Command::SetFast(false)),
            // stop the game
            Key::S => Some(Command::Finish),
            _ => None,
        }
    }
}

/// Converts key presses received by the View into commands for the Model.
pub struct Controller<M> {
    model: SharedModel<M>,
}

impl<M> Clone for Controller<M> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
        }
    }
}

impl<M: Model> Controller<M> {
    pub fn new(model: SharedModel<M>) -> Self {
        Self { model }
    }

    pub fn user_key_interaction(&self, key: Key) {
        log::trace!("Controller::user_key_interaction: key = {key:?}");

        let Some(command) = Command::for_key(key) else {
            return;
        };

        let mut model = write_model(&self.model);
        match command {
            Command::MoveBat(Direction::Left) => {
                if model.bat_border_left() {
                    log::debug!("bat blocked by left border");
                } else {
                    model.move_bat(Direction::Left);
                }
            }
            Command::MoveBat(Direction::Right) => {
                if model.bat_border_right() {
                    log::debug!("bat blocked by right border");
                } else {
                    model.move_bat(Direction::Right);
                }
            }
            Command::SetFast(fast) => model.set_fast(fast),
            Command::Finish => model.set_game_state(GameState::Finished),
        }
    }
}
