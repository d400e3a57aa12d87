//! Level progression and the per-tick game core.
//!
//! `Game` owns everything the play loop touches: the current maze, its wall
//! segments, the player and the gem. An external driver feeds it one
//! `Intent` per tick and draws whatever state it exposes afterwards.

use crate::actor::{Actor, Gem, Intent};
use crate::collision::clamp_to;
use crate::config::Config;
use crate::grid::Grid;
use crate::maze;
use crate::rect::Rect;
use crate::walls::rasterize;
use crate::MazeError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Observable outcomes of a tick
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player reached the gem on this level
    LevelComplete { level: u32 },
    /// A fresh maze was generated for this level
    LevelStarted { level: u32, maze_size: i32 },
}

/// Playing is the only state visible between ticks; Transitioning exists
/// only while a new level is being built inside `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Transitioning,
}

/// Maze side length for `level`, growing by one per level from `min_size`
/// and capped at `max_size`
pub fn maze_size(level: u32, min_size: i32, max_size: i32) -> i32 {
    let grown = min_size as i64 + level.max(1) as i64 - 1;
    grown.min(max_size as i64) as i32
}

/// Top-left pixel position that centres a square of `size` inside a cell
pub fn cell_placement(col: i32, row: i32, cell_size: f32, size: f32) -> (f32, f32) {
    let margin = (cell_size - size) / 2.0;
    (col as f32 * cell_size + margin, row as f32 * cell_size + margin)
}

pub struct Game<R: Rng = StdRng> {
    config: Config,
    rng: R,
    level: u32,
    phase: Phase,
    maze_size: i32,
    grid: Grid,
    walls: Vec<Rect>,
    player: Actor,
    gem: Gem,
    ticks: u64,
}

impl Game<StdRng> {
    /// New game on level 1 with mazes drawn from OS entropy
    pub fn new(config: Config) -> Result<Self, MazeError> {
        Game::with_rng(config, StdRng::from_entropy())
    }

    /// New game whose sequence of mazes is fully determined by `seed`
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, MazeError> {
        Game::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: Config, mut rng: R) -> Result<Self, MazeError> {
        config.validate()?;

        let size = maze_size(1, config.maze.min_size, config.maze.max_size);
        let grid = maze::generate(size, size, &mut rng)?;
        let walls = rasterize(&grid, config.maze.cell_size, config.maze.wall_thickness);
        let player = Actor::new(0.0, 0.0, config.player.size, config.player.speed);
        let gem = Gem::new(0.0, 0.0, config.gem.size);

        let mut game = Game {
            config,
            rng,
            level: 1,
            phase: Phase::Playing,
            maze_size: size,
            grid,
            walls,
            player,
            gem,
            ticks: 0,
        };
        game.place_actors();
        Ok(game)
    }

    /// Advance the game by one tick.
    ///
    /// Moves the player by `intent`, then checks the gem. Reaching it
    /// completes the level and builds the next one before returning, so at
    /// most one level is gained per tick.
    pub fn tick(&mut self, intent: Intent) -> Result<Vec<GameEvent>, MazeError> {
        self.ticks += 1;
        let mut events = Vec::new();

        let bounds = self.play_bounds();
        self.player.step(intent, &self.walls, &bounds);

        if self.gem.is_collected_by(&self.player) {
            events.push(GameEvent::LevelComplete { level: self.level });
            self.phase = Phase::Transitioning;
            self.next_level()?;
            events.push(GameEvent::LevelStarted {
                level: self.level,
                maze_size: self.maze_size,
            });
        }

        Ok(events)
    }

    fn next_level(&mut self) -> Result<(), MazeError> {
        let level = self.level + 1;
        let size = maze_size(level, self.config.maze.min_size, self.config.maze.max_size);

        // Build the whole replacement before swapping it in
        let grid = maze::generate(size, size, &mut self.rng)?;
        let walls = rasterize(&grid, self.config.maze.cell_size, self.config.maze.wall_thickness);

        self.level = level;
        self.maze_size = size;
        self.grid = grid;
        self.walls = walls;
        self.place_actors();
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Player to cell (1, 1), gem two cells in from the far corner
    fn place_actors(&mut self) {
        let cell_size = self.config.maze.cell_size;
        let (px, py) = cell_placement(1, 1, cell_size, self.player.size);
        self.player.reset_to(px, py);

        let far = self.maze_size - 2;
        let (gx, gy) = cell_placement(far, far, cell_size, self.gem.size);
        self.gem.reset_to(gx, gy);
    }

    /// Pixel rectangle covered by the current maze
    pub fn play_bounds(&self) -> Rect {
        let extent = self.maze_size as f32 * self.config.maze.cell_size;
        Rect::new(0.0, 0.0, extent, extent)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn maze_size(&self) -> i32 {
        self.maze_size
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    pub fn gem(&self) -> &Gem {
        &self.gem
    }

    /// Teleport the player, e.g. for scripted scenarios. The position is
    /// clamped to the play area but not checked against walls.
    pub fn set_player_position(&mut self, x: f32, y: f32) {
        let (x, y) = clamp_to(&self.player.rect().at(x, y), &self.play_bounds());
        self.player.reset_to(x, y);
    }
}
