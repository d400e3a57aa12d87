use crate::collision::{clamp_to, resolve};
use crate::rect::Rect;

/// Direction keys held during one tick. Opposite keys cancel out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Intent {
    pub const NONE: Intent = Intent { left: false, right: false, up: false, down: false };

    /// Unit steps (-1, 0 or 1) on each axis; y grows downwards
    pub fn axes(&self) -> (f32, f32) {
        let dx = self.right as i32 - self.left as i32;
        let dy = self.down as i32 - self.up as i32;
        (dx as f32, dy as f32)
    }
}

/// The player square, positioned by its top-left corner
#[derive(Clone, Debug)]
pub struct Actor {
    /// Side length of the actor's square
    pub size: f32,

    pub x: f32,
    pub y: f32,

    /// Pixels moved per tick along each active axis
    pub speed: f32,
}

impl Actor {
    pub fn new(x: f32, y: f32, size: f32, speed: f32) -> Self {
        Actor { size, x, y, speed }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.x, self.y, self.size)
    }

    pub fn reset_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Requested displacement for this tick. Diagonals are the plain vector
    /// sum of both axes, not normalised.
    pub fn displacement(&self, intent: Intent) -> (f32, f32) {
        let (ax, ay) = intent.axes();
        (ax * self.speed, ay * self.speed)
    }

    /// Move one tick against the wall set, then clamp into `bounds`
    pub fn step(&mut self, intent: Intent, walls: &[Rect], bounds: &Rect) {
        let (dx, dy) = self.displacement(intent);
        let (x, y) = resolve(&self.rect(), dx, dy, walls);
        let (x, y) = clamp_to(&self.rect().at(x, y), bounds);
        self.x = x;
        self.y = y;
    }

    /// Grid cell containing the centre of the actor
    pub fn cell(&self, cell_size: f32) -> (i32, i32) {
        let cx = self.x + self.size / 2.0;
        let cy = self.y + self.size / 2.0;
        ((cx / cell_size).floor() as i32, (cy / cell_size).floor() as i32)
    }
}

/// The gem the player is trying to reach
#[derive(Clone, Debug)]
pub struct Gem {
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

impl Gem {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Gem { size, x, y }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.x, self.y, self.size)
    }

    pub fn reset_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the actor is touching the gem with positive overlap
    pub fn is_collected_by(&self, actor: &Actor) -> bool {
        actor.rect().overlaps(&self.rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_axes() {
        let intent = Intent { right: true, up: true, ..Intent::NONE };
        assert_eq!(intent.axes(), (1.0, -1.0));

        let cancelled = Intent { left: true, right: true, ..Intent::NONE };
        assert_eq!(cancelled.axes(), (0.0, 0.0));
    }

    #[test]
    fn test_diagonal_is_vector_sum() {
        let actor = Actor::new(0.0, 0.0, 30.0, 5.0);
        let intent = Intent { right: true, down: true, ..Intent::NONE };
        assert_eq!(actor.displacement(intent), (5.0, 5.0));
    }

    #[test]
    fn test_step_clamps_to_bounds() {
        let mut actor = Actor::new(2.0, 2.0, 10.0, 5.0);
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        actor.step(Intent { left: true, up: true, ..Intent::NONE }, &[], &bounds);
        assert_eq!((actor.x, actor.y), (0.0, 0.0));
    }

    #[test]
    fn test_actor_cell() {
        let actor = Actor::new(45.0, 85.0, 30.0, 5.0);
        assert_eq!(actor.cell(40.0), (1, 2));
    }

    #[test]
    fn test_gem_pickup() {
        let gem = Gem::new(400.0, 400.0, 32.0);
        assert!(gem.is_collected_by(&Actor::new(390.0, 390.0, 32.0, 5.0)));
        assert!(!gem.is_collected_by(&Actor::new(368.0, 400.0, 32.0, 5.0)));
    }
}
