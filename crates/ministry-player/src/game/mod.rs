//! Game logic: rooms, avatar, dialog choices, scores, game over.
//!
//! Screen layout (640×480):
//!   y 0..24    HUD strip (obedience, rebellion, suspicion meter)
//!   y 24..480  play area, four rooms in a 2×2 grid
//!
//! `GameState` is the only owner of the score state. Input arrives as
//! key names and click positions; every handler runs to completion before
//! the next frame, so nothing here ever waits on the player.

pub mod avatar;
pub mod dialog;
pub mod i18n;
pub mod narrative;
pub mod notice;
pub mod room;
pub mod scores;

use ministry_common::Language;

use crate::engine::{self, font, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::avatar::{Avatar, Direction};
use crate::game::dialog::{Dialog, Effect};
use crate::game::i18n::t;
use crate::game::narrative::InteractionId;
use crate::game::notice::{NoticeBoard, NOTICE_RECT};
use crate::game::room::{Furniture, Room};
use crate::game::scores::{Readouts, Scores, SUSPICION_MAX};

pub const HUD_HEIGHT: i32 = 24;
/// Play area origin on screen
pub const PLAY_X: i32 = 0;
pub const PLAY_Y: i32 = HUD_HEIGHT;
pub const PLAY_WIDTH: i32 = SCREEN_WIDTH as i32;
pub const PLAY_HEIGHT: i32 = SCREEN_HEIGHT as i32 - HUD_HEIGHT;

const GAME_OVER_BOX: Rect = Rect::new(170, 140, 300, 190);
const RESTART_BUTTON: Rect = Rect::new(260, 280, 120, 24);

const ROOM_FILLS: [u32; 4] = [0xFF23262b, 0xFF26282e, 0xFF2a2323, 0xFF24291f];

/// Scores captured at the moment the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub obedience: u32,
    pub rebellion: u32,
}

/// Whether the player can still act
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Only the restart button responds in this phase
    GameOver(GameOverSummary),
}

/// Central game state. All mutation goes through the methods below.
pub struct GameState {
    avatar: Avatar,
    rooms: Vec<Room>,
    dialog: Dialog,
    notices: NoticeBoard,
    readouts: Readouts,
    phase: Phase,
    language: Language,
    scores: Scores,
    /// Number of times the game has ended since launch
    game_overs: u32,
    /// Last known mouse position (screen coordinates)
    mouse: (i32, i32),
}

impl GameState {
    pub fn new(language: Language, notice_frames: u32) -> Self {
        let scores = Scores::default();
        let state = Self {
            avatar: Avatar::new(PLAY_WIDTH, PLAY_HEIGHT),
            rooms: narrative::build_rooms(),
            dialog: Dialog::new(),
            notices: NoticeBoard::new(notice_frames),
            readouts: Readouts::from_scores(&scores, language),
            phase: Phase::Playing,
            language,
            scores,
            game_overs: 0,
            mouse: (0, 0),
        };
        tracing::info!(
            "GameState initialized: {} rooms, language {}",
            state.rooms.len(),
            language.code()
        );
        state
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn readouts(&self) -> &Readouts {
        &self.readouts
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase(), Phase::GameOver(_))
    }

    #[cfg(test)]
    pub fn game_over_count(&self) -> u32 {
        self.game_overs
    }

    // ─── Input ─────────────────────────────────────────────────────────

    /// Keydown by name; only the four arrow keys do anything
    pub fn on_key_name(&mut self, name: &str) {
        match Direction::from_key_name(name) {
            Some(dir) => {
                self.on_direction(dir);
            }
            None => tracing::trace!("Ignored key '{}'", name),
        }
    }

    /// Move the avatar one step. Ignored once the game is over.
    pub fn on_direction(&mut self, dir: Direction) -> bool {
        if self.is_game_over() {
            tracing::debug!("Move {:?} ignored after game over", dir);
            return false;
        }
        self.avatar.move_in(dir)
    }

    pub fn on_mouse_move(&mut self, x: i32, y: i32) {
        self.mouse = (x, y);
    }

    /// Left click at a screen position.
    ///
    /// Priority: restart button (game over only), dialog buttons, the notice
    /// strip, then furniture. Clicks that miss the dialog box fall through,
    /// so picking other furniture replaces the open dialog.
    pub fn on_click(&mut self, x: i32, y: i32) {
        self.mouse = (x, y);

        if self.is_game_over() {
            if RESTART_BUTTON.contains(x, y) {
                self.restart();
            }
            return;
        }

        if let Some(layout) = self.dialog.layout() {
            if let Some(index) = layout.buttons.iter().position(|b| b.contains(x, y)) {
                self.choose(index);
                return;
            }
            if layout.frame.contains(x, y) {
                return;
            }
        }

        if self.notices.is_showing() && NOTICE_RECT.contains(x, y) {
            self.notices.dismiss();
            return;
        }

        let target = self
            .furniture_at(x - PLAY_X, y - PLAY_Y)
            .map(|f| (f.name.clone(), f.activate()));
        if let Some((name, id)) = target {
            tracing::info!("CLICK furniture '{}' at ({},{})", name, x, y);
            self.interact(id);
        }
    }

    // ─── Interactions ──────────────────────────────────────────────────

    /// Open the dialog bound to a furniture interaction
    pub fn interact(&mut self, id: InteractionId) -> bool {
        if self.is_game_over() {
            tracing::debug!("Interaction {:?} ignored after game over", id);
            return false;
        }
        let interaction = id.interaction();
        self.dialog.show(interaction.prompt, interaction.choices);
        tracing::debug!("Dialog: {}", self.dialog.prompt().unwrap_or_default());
        true
    }

    /// Take a choice of the open dialog
    pub fn choose(&mut self, index: usize) -> bool {
        if self.is_game_over() {
            return false;
        }
        match self.dialog.choose(index) {
            Some(effect) => {
                self.apply_effect(effect);
                true
            }
            None => false,
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        self.scores.add_obedience(effect.obedience);
        self.scores.add_rebellion(effect.rebellion);
        match effect.suspicion {
            d if d > 0 => self.increase_suspicion(d.unsigned_abs()),
            d if d < 0 => self.decrease_suspicion(d.unsigned_abs()),
            _ => {}
        }
        self.notices.post(effect.acknowledgment);
        self.update_scores();
    }

    // ─── Scores ────────────────────────────────────────────────────────

    pub fn increase_suspicion(&mut self, amount: u32) {
        let maxed = self.scores.raise_suspicion(amount);
        self.update_scores();
        if maxed && !self.is_game_over() {
            self.show_game_over();
        }
    }

    pub fn decrease_suspicion(&mut self, amount: u32) {
        self.scores.lower_suspicion(amount);
        self.update_scores();
    }

    /// Switch UI language; HUD readouts follow immediately
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.update_scores();
        tracing::info!("Language → {}", language.code());
    }

    /// Refresh the HUD text from the current scores
    pub fn update_scores(&mut self) {
        self.readouts = Readouts::from_scores(&self.scores, self.language);
    }

    fn show_game_over(&mut self) {
        let summary = GameOverSummary {
            obedience: self.scores.obedience(),
            rebellion: self.scores.rebellion(),
        };
        self.game_overs += 1;
        self.dialog.hide();
        self.phase = Phase::GameOver(summary);
        tracing::info!(
            "Game over #{}: obedience {}, rebellion {}",
            self.game_overs,
            summary.obedience,
            summary.rebellion
        );
    }

    /// Zero the scores and hide the game-over overlay. Avatar, rooms and
    /// furniture stay as they are; leftover notices are dropped. Does nothing
    /// unless the game is over.
    pub fn restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        self.scores.reset();
        self.notices.clear();
        self.update_scores();
        self.phase = Phase::Playing;
        tracing::info!("Restart");
        true
    }

    // ─── Frame ─────────────────────────────────────────────────────────

    pub fn update(&mut self) {
        self.notices.tick();
    }

    /// Topmost furniture at a play-area point
    fn furniture_at(&self, x: i32, y: i32) -> Option<&Furniture> {
        self.rooms.iter().rev().find_map(|room| room.furniture_at(x, y))
    }

    /// Name of whatever clickable thing is under the mouse
    pub fn hover_info(&self, x: i32, y: i32) -> Option<&str> {
        if self.is_game_over() {
            return RESTART_BUTTON
                .contains(x, y)
                .then(|| t(self.language, "restart"));
        }
        let dialog = self.dialog();
        if let Some(index) = dialog.choice_at(x, y) {
            return dialog.choices().get(index).map(|c| c.label);
        }
        if self.dialog.layout().is_some_and(|l| l.frame.contains(x, y)) {
            return None;
        }
        self.furniture_at(x - PLAY_X, y - PLAY_Y).map(|f| f.name.as_str())
    }

    // ─── Rendering ─────────────────────────────────────────────────────

    pub fn draw(&self, fb: &mut [u32]) {
        fb.fill(0xFF101012);
        self.draw_rooms(fb);
        self.draw_avatar(fb);
        self.draw_hud(fb);
        self.notices().draw(fb);
        let hint = self.hint_rect();
        font::draw_text(fb, hint.x, hint.y, t(self.language, "hud_hint"), 0xFF5a5a64);
        self.dialog.draw(fb, Some(self.mouse));
        if let Phase::GameOver(summary) = self.phase {
            self.draw_game_over(fb, summary);
        }
    }

    fn draw_rooms(&self, fb: &mut [u32]) {
        for (i, room) in self.rooms().iter().enumerate() {
            let r = room.rect.offset(PLAY_X, PLAY_Y);
            font::draw_rect(fb, r.x, r.y, r.w, r.h, ROOM_FILLS[i % ROOM_FILLS.len()]);
            font::draw_rect_outline(fb, r.x, r.y, r.w, r.h, 0xFF50505a);
            font::draw_text_shadow(fb, r.x + 6, r.y + 6, &room.label, 0xFF9090a0);
        }

        let (mx, my) = self.mouse;
        let hovered = if self.dialog.layout().is_some_and(|l| l.frame.contains(mx, my)) {
            None
        } else {
            self.furniture_at(mx - PLAY_X, my - PLAY_Y)
        };

        // Furniture after all rooms, so items reaching into a neighbour stay visible
        for f in self.rooms.iter().flat_map(|room| room.furniture()) {
            let r = f.rect().offset(PLAY_X, PLAY_Y);
            let (fill, mut outline) = f.style.colors();
            let is_hovered = hovered.is_some_and(|h| std::ptr::eq(h, f));
            if is_hovered {
                outline = 0xFFFFFFFF;
            }
            font::draw_rect(fb, r.x, r.y, r.w, r.h, fill);
            font::draw_rect_outline(fb, r.x, r.y, r.w, r.h, outline);

            let label = font::clip_text(&f.name, r.w - 4);
            if label.len() == f.name.len() && r.h >= font::GLYPH_HEIGHT + 2 {
                font::draw_text_centered(fb, r, r.y + (r.h - font::GLYPH_HEIGHT) / 2, label, 0xFFE0E0E0);
            } else if is_hovered {
                // Too small for its own label: show it as a tooltip above
                font::draw_text_shadow(fb, r.x, r.y - font::LINE_HEIGHT, &f.name, 0xFFFFFFFF);
            }
        }
    }

    /// Controls hint, right-aligned on the bottom line
    fn hint_rect(&self) -> Rect {
        let w = font::text_width(t(self.language, "hud_hint"));
        Rect::new(
            SCREEN_WIDTH as i32 - 8 - w,
            SCREEN_HEIGHT as i32 - 11,
            w,
            font::GLYPH_HEIGHT,
        )
    }

    fn draw_avatar(&self, fb: &mut [u32]) {
        let r = self.avatar().rect().offset(PLAY_X, PLAY_Y);
        font::draw_rect(fb, r.x, r.y, r.w, r.h, 0xFFC03030);
        font::draw_rect_outline(fb, r.x, r.y, r.w, r.h, 0xFFFF9090);
    }

    fn draw_hud(&self, fb: &mut [u32]) {
        font::draw_rect(fb, 0, 0, SCREEN_WIDTH as i32, HUD_HEIGHT, 0xFF08080a);
        font::draw_rect(fb, 0, HUD_HEIGHT - 1, SCREEN_WIDTH as i32, 1, 0xFF50505a);
        let text_y = (HUD_HEIGHT - font::GLYPH_HEIGHT) / 2;
        font::draw_text(fb, 8, text_y, &self.readouts.obedience, 0xFF80C0FF);
        font::draw_text(fb, 150, text_y, &self.readouts.rebellion, 0xFFFF9060);
        font::draw_text(fb, 292, text_y, &self.readouts.suspicion, 0xFFE0E0E0);

        // Suspicion meter
        let bar = Rect::new(440, 7, 190, 10);
        font::draw_rect(fb, bar.x, bar.y, bar.w, bar.h, 0xFF202024);
        let suspicion = self.scores().suspicion();
        let filled = bar.w * suspicion as i32 / SUSPICION_MAX as i32;
        let color = match suspicion {
            0..=39 => 0xFF40A040,
            40..=79 => 0xFFD0A030,
            _ => 0xFFD03030,
        };
        font::draw_rect(fb, bar.x, bar.y, filled, bar.h, color);
        font::draw_rect_outline(fb, bar.x, bar.y, bar.w, bar.h, 0xFF60606a);
    }

    fn draw_game_over(&self, fb: &mut [u32], summary: GameOverSummary) {
        engine::dim(fb);
        let b = GAME_OVER_BOX;
        let lang = self.language;
        font::draw_rect(fb, b.x, b.y, b.w, b.h, 0xFF1a0c0c);
        font::draw_rect_outline(fb, b.x, b.y, b.w, b.h, 0xFFC02020);
        font::draw_rect_outline(fb, b.x + 2, b.y + 2, b.w - 4, b.h - 4, 0xFF601010);

        font::draw_text_centered(fb, b, b.y + 18, t(lang, "game_over_title"), 0xFFFF4040);
        font::draw_text_centered(fb, b, b.y + 44, t(lang, "game_over_text"), 0xFFD0D0D0);
        let obedience = format!("{}: {}", t(lang, "hud_obedience"), summary.obedience);
        let rebellion = format!("{}: {}", t(lang, "hud_rebellion"), summary.rebellion);
        font::draw_text_centered(fb, b, b.y + 76, &obedience, 0xFF80C0FF);
        font::draw_text_centered(fb, b, b.y + 92, &rebellion, 0xFFFF9060);

        let btn = RESTART_BUTTON;
        let (mx, my) = self.mouse;
        let fill = if btn.contains(mx, my) { 0xFF7a2020 } else { 0xFF4a1818 };
        font::draw_rect(fb, btn.x, btn.y, btn.w, btn.h, fill);
        font::draw_rect_outline(fb, btn.x, btn.y, btn.w, btn.h, 0xFFE06060);
        font::draw_text_centered(fb, btn, btn.y + 9, t(lang, "restart"), 0xFFFFFFFF);
    }
}
