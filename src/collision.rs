use crate::rect::Rect;

/// Check if a rectangle overlaps any wall segment
pub fn collides(rect: &Rect, walls: &[Rect]) -> bool {
    walls.iter().any(|wall| rect.overlaps(wall))
}

/// Resolve one tick of movement with per-axis sliding collision.
///
/// The x step is tried first with y held fixed, then the y step from the
/// (possibly updated) x. Each axis either moves the full distance or stays
/// put; there is no sweep, so a step longer than a wall is thick can pass
/// through it.
pub fn resolve(actor: &Rect, dx: f32, dy: f32, walls: &[Rect]) -> (f32, f32) {
    let mut x = actor.x;
    let mut y = actor.y;

    if dx != 0.0 && !collides(&actor.at(x + dx, y), walls) {
        x += dx;
    }

    if dy != 0.0 && !collides(&actor.at(x, y + dy), walls) {
        y += dy;
    }

    (x, y)
}

/// Clamp a rectangle's top-left corner so it stays fully inside `bounds`
pub fn clamp_to(rect: &Rect, bounds: &Rect) -> (f32, f32) {
    let max_x = (bounds.right() - rect.width).max(bounds.x);
    let max_y = (bounds.bottom() - rect.height).max(bounds.y);
    (rect.x.clamp(bounds.x, max_x), rect.y.clamp(bounds.y, max_y))
}
