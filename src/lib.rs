pub mod actor;
pub mod collision;
pub mod config;
pub mod error;
pub mod event_log;
pub mod game;
pub mod grid;
pub mod maze;
pub mod rect;
pub mod view;
pub mod walls;

pub use actor::{Actor, Gem, Intent};
pub use config::Config;
pub use error::MazeError;
pub use game::{Game, GameEvent, Phase};
pub use grid::{Cell, Direction, Grid};
pub use rect::Rect;
