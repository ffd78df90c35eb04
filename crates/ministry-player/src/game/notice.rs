//! Acknowledgment notices: short non-blocking messages at the bottom of the
//! screen. Notices queue up and are shown one at a time; each stays for a
//! fixed number of frames unless clicked away.

use std::collections::VecDeque;

use crate::engine::font;
use crate::engine::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Clickable strip the active notice is drawn into. Sits in the bottom-right
/// corner of the play area, clear of all furniture.
pub const NOTICE_RECT: Rect = Rect::new(200, SCREEN_HEIGHT as i32 - 44, SCREEN_WIDTH as i32 - 208, 28);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub frames_left: u32,
}

pub struct NoticeBoard {
    active: Option<Notice>,
    queue: VecDeque<String>,
    duration_frames: u32,
}

impl NoticeBoard {
    pub fn new(duration_frames: u32) -> Self {
        Self {
            active: None,
            queue: VecDeque::new(),
            duration_frames: duration_frames.max(1),
        }
    }

    /// Show a notice now, or after the ones already waiting
    pub fn post(&mut self, text: &str) {
        tracing::debug!("Notice: {}", text);
        if self.active.is_some() {
            self.queue.push_back(text.to_string());
        } else {
            self.active = Some(self.make(text.to_string()));
        }
    }

    /// Advance one frame. Returns true if the displayed notice changed.
    pub fn tick(&mut self) -> bool {
        let Some(notice) = &mut self.active else {
            return false;
        };
        notice.frames_left = notice.frames_left.saturating_sub(1);
        if notice.frames_left == 0 {
            self.advance();
            return true;
        }
        false
    }

    /// Drop the current notice early and move on to the next one
    pub fn dismiss(&mut self) {
        if self.active.is_some() {
            self.advance();
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.active.as_ref()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_showing(&self) -> bool {
        self.active.is_some()
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.queue.clear();
    }

    fn advance(&mut self) {
        let next = self.queue.pop_front();
        self.active = next.map(|text| self.make(text));
    }

    fn make(&self, text: String) -> Notice {
        Notice {
            text,
            frames_left: self.duration_frames,
        }
    }

    pub fn draw(&self, fb: &mut [u32]) {
        let Some(notice) = self.current() else {
            return;
        };
        let r = NOTICE_RECT;
        font::draw_rect(fb, r.x, r.y, r.w, r.h, 0xFF141418);
        font::draw_rect_outline(fb, r.x, r.y, r.w, r.h, 0xFFC8A040);
        let text = font::clip_text(&notice.text, r.w - 16);
        font::draw_text_centered(fb, r, r.y + (r.h - font::GLYPH_HEIGHT) / 2, text, 0xFFF0D070);
        if self.pending() > 0 {
            let more = format!("+{}", self.pending());
            font::draw_text(fb, r.x + r.w - font::text_width(&more) - 4, r.y + 2, &more, 0xFF807050);
        }
    }
}
