use std::ops::{Add, Div};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Instant;

use super::mechanics::BreakoutModel;
use super::model::{read_model, write_model, Model, ModelObserver, SharedModel};

/// Moves the game forward one time step per tick and notifies the observer after every step.
/// Returns when `exit` is raised or the game is finished.
///
/// The model guard is always released before the observer is locked.
pub fn run_progression<O, F>(model: SharedModel<BreakoutModel>, observer: Arc<Mutex<O>>, exit: Arc<AtomicBool>, repaint: F)
where
    O: ModelObserver + ?Sized,
    F: Fn(),
{
    let tick_interval = || read_model(&model).tick_interval();

    let mut next_step_time = Instant::now().add(tick_interval());
    loop {
        if exit.load(Ordering::Relaxed) {
            break;
        }
        if Instant::now().ge(&next_step_time) {
            let finished = {
                let mut model = write_model(&model);
                model.time_step();
                model.finished()
            };
            next_step_time = next_step_time.add(tick_interval());

            observer.lock().unwrap_or_else(PoisonError::into_inner).update();
            repaint();

            if finished {
                log::info!("game finished, score: {}", read_model(&model).score());
                break;
            }
        }
        thread::sleep(tick_interval().div(5));
    }
}
