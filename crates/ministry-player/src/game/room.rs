//! Rooms and the clickable furniture placed in them.
//!
//! Furniture geometry is given relative to the owning room's origin, the way
//! it was authored; the absolute rectangle is resolved when the item is added
//! to a room. Nothing stops furniture from sticking out of its room or
//! overlapping other items.

use crate::engine::Rect;
use crate::game::narrative::InteractionId;

/// Presentation tag. All styles behave the same, only the colors differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FurnitureStyle {
    #[default]
    Plain,
    Poster,
    MemoryHole,
    Desk,
}

impl FurnitureStyle {
    /// Fill and outline colors (ARGB)
    pub fn colors(self) -> (u32, u32) {
        match self {
            FurnitureStyle::Plain => (0xFF4a4a52, 0xFF9a9aa8),
            FurnitureStyle::Poster => (0xFF7a1c1c, 0xFFd04040),
            FurnitureStyle::MemoryHole => (0xFF101010, 0xFFb06020),
            FurnitureStyle::Desk => (0xFF5a4028, 0xFFa88050),
        }
    }
}

/// A clickable object inside a room
#[derive(Debug, Clone)]
pub struct Furniture {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub top: i32,
    pub left: i32,
    pub style: FurnitureStyle,
    interaction: InteractionId,
    /// Owning room origin, set by `Room::add_furniture`
    origin: (i32, i32),
}

impl Furniture {
    pub fn new(
        name: &str,
        width: i32,
        height: i32,
        top: i32,
        left: i32,
        interaction: InteractionId,
    ) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            top,
            left,
            style: FurnitureStyle::Plain,
            interaction,
            origin: (0, 0),
        }
    }

    /// Builder: set the presentation style
    pub fn styled(mut self, style: FurnitureStyle) -> Self {
        self.style = style;
        self
    }

    /// Activation yields the bound interaction
    pub fn activate(&self) -> InteractionId {
        self.interaction
    }

    /// Absolute rectangle in play-area coordinates
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.origin.0 + self.left,
            self.origin.1 + self.top,
            self.width,
            self.height,
        )
    }

    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        self.rect().contains(x, y)
    }
}

/// A labeled region of the play area
#[derive(Debug, Clone)]
pub struct Room {
    pub id: &'static str,
    pub label: String,
    pub rect: Rect,
    furniture: Vec<Furniture>,
}

impl Room {
    pub fn new(id: &'static str, label: &str, rect: Rect) -> Self {
        Self {
            id,
            label: label.to_string(),
            rect,
            furniture: Vec::new(),
        }
    }

    pub fn add_furniture(&mut self, mut item: Furniture) {
        item.origin = (self.rect.x, self.rect.y);
        tracing::debug!(
            "Room '{}': + {} {:?} at {:?}",
            self.id,
            item.name,
            item.style,
            item.rect()
        );
        self.furniture.push(item);
    }

    pub fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }

    /// Topmost furniture under a point (later additions draw on top)
    pub fn furniture_at(&self, x: i32, y: i32) -> Option<&Furniture> {
        self.furniture.iter().rev().find(|f| f.hit_test(x, y))
    }
}
