//! Player avatar: a square marker moved in fixed steps inside the play area.

use crate::engine::Rect;

/// Side length of the avatar square
pub const AVATAR_SIZE: i32 = 20;
/// Distance covered by one key press
pub const STEP: i32 = 20;
/// Spawn position (play-area coordinates)
pub const START_POS: (i32, i32) = (50, 50);

/// Movement direction requested by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a keydown key name. Anything other than the four arrows is `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -STEP),
            Direction::Down => (0, STEP),
            Direction::Left => (-STEP, 0),
            Direction::Right => (STEP, 0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Avatar {
    pub x: i32,
    pub y: i32,
    size: i32,
    /// Play-area size the avatar is confined to
    bounds_w: i32,
    bounds_h: i32,
}

impl Avatar {
    pub fn new(bounds_w: i32, bounds_h: i32) -> Self {
        let max_x = (bounds_w - AVATAR_SIZE).max(0);
        let max_y = (bounds_h - AVATAR_SIZE).max(0);
        Self {
            x: START_POS.0.min(max_x),
            y: START_POS.1.min(max_y),
            size: AVATAR_SIZE,
            bounds_w,
            bounds_h,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Step once in `dir`. Moves that would leave the bounds are dropped
    /// silently; returns whether the avatar actually moved.
    pub fn move_in(&mut self, dir: Direction) -> bool {
        let (dx, dy) = dir.delta();
        let nx = self.x + dx;
        let ny = self.y + dy;
        if nx < 0 || ny < 0 || nx + self.size > self.bounds_w || ny + self.size > self.bounds_h {
            tracing::debug!("Avatar blocked {:?} at ({},{})", dir, self.x, self.y);
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }

    /// Marker rectangle in play-area coordinates
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(Direction::from_key_name("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key_name("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key_name("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key_name("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key_name("arrowup"), None);
        assert_eq!(Direction::from_key_name("w"), None);
        assert_eq!(Direction::from_key_name(""), None);
    }

    #[test]
    fn starts_at_spawn() {
        let a = Avatar::new(640, 456);
        assert_eq!(a.position(), (50, 50));
    }

    #[test]
    fn steps_by_twenty() {
        let mut a = Avatar::new(640, 456);
        assert!(a.move_in(Direction::Right));
        assert_eq!(a.position(), (70, 50));
        assert!(a.move_in(Direction::Down));
        assert_eq!(a.position(), (70, 70));
    }

    #[test]
    fn blocked_at_edges() {
        let mut a = Avatar::new(640, 456);
        // 50 → 30 → 10, the next step would reach -10
        assert!(a.move_in(Direction::Up));
        assert!(a.move_in(Direction::Up));
        assert!(!a.move_in(Direction::Up));
        assert_eq!(a.y, 10);
        assert!(a.move_in(Direction::Left));
        assert!(a.move_in(Direction::Left));
        assert!(!a.move_in(Direction::Left));
        assert_eq!(a.position(), (10, 10));
    }

    #[test]
    fn stops_on_last_full_step() {
        // Limit is 120 - 20 = 100; from 50 the grid reaches 90 and 110
        let mut a = Avatar::new(120, 120);
        assert!(a.move_in(Direction::Right));
        assert!(a.move_in(Direction::Right));
        assert_eq!(a.x, 90);
        assert!(!a.move_in(Direction::Right));
        assert_eq!(a.x, 90);

        // Edge reached exactly: 50 → 70 → 90 → 110 = 130 - 20
        let mut b = Avatar::new(130, 130);
        for _ in 0..3 {
            assert!(b.move_in(Direction::Down));
        }
        assert_eq!(b.y, 110);
        assert!(!b.move_in(Direction::Down));
    }

    #[test]
    fn tiny_area_clamps_spawn() {
        let a = Avatar::new(30, 30);
        assert_eq!(a.position(), (10, 10));
    }

    #[test]
    fn random_walk_stays_in_bounds() {
        let (w, h) = (640, 456);
        let mut a = Avatar::new(w, h);
        let mut rng: u32 = 0x1234_5678;
        for _ in 0..10_000 {
            rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
            let dir = Direction::ALL[((rng >> 16) % 4) as usize];
            a.move_in(dir);
            assert!(a.x >= 0 && a.x <= w - AVATAR_SIZE, "x out of bounds: {}", a.x);
            assert!(a.y >= 0 && a.y <= h - AVATAR_SIZE, "y out of bounds: {}", a.y);
        }
    }
}
