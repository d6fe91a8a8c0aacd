pub mod algebra_2d;
pub mod controller;
pub mod game_loop;
pub mod game_obj;
pub mod mechanics;
pub mod model;
pub mod pane;
pub mod pane_drawer;
pub mod stylesheet;
pub mod view;
