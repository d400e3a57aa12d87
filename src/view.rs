//! Screen layout for the driver: a HUD strip across the top and the maze
//! centred below it.

use crate::config::Config;
use crate::rect::Rect;

/// Height of the strip holding the level and version labels
pub const HUD_HEIGHT: f32 = 40.0;

/// Window size that fits the largest maze, its outer wall overhang and the HUD
pub fn window_size(config: &Config) -> (f32, f32) {
    let overhang = config.maze.wall_thickness;
    (
        config.play_area.width + overhang,
        config.play_area.height + overhang + HUD_HEIGHT,
    )
}

/// Screen position of the maze's pixel origin.
///
/// Edge walls are centred on the grid line and reach `thickness / 2` past
/// `bounds`, so the origin always keeps that much room on every side.
pub fn maze_origin(screen_width: f32, screen_height: f32, bounds: &Rect, thickness: f32) -> (f32, f32) {
    let half = thickness / 2.0;
    let ox = ((screen_width - bounds.width) / 2.0).max(half);
    let oy = HUD_HEIGHT + ((screen_height - HUD_HEIGHT - bounds.height) / 2.0).max(half);
    (ox, oy)
}
