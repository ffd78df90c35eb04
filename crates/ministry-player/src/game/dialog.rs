//! Dialog overlay: a prompt with a short list of choice buttons.
//!
//! The dialog is either hidden or showing exactly one prompt. Showing a new
//! prompt while one is visible replaces it outright; there is no queue.
//! Choosing an option hands its effect back to the caller and hides the
//! dialog.

use crate::engine::font;
use crate::engine::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};

// ---------------------------------------------------------------------------
// Choice data
// ---------------------------------------------------------------------------

/// Score changes and feedback applied when a choice is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effect {
    pub obedience: u32,
    pub rebellion: u32,
    /// Positive raises suspicion, negative lowers it
    pub suspicion: i32,
    /// Acknowledgment shown once the choice is applied
    pub acknowledgment: &'static str,
}

/// One labeled option of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub effect: Effect,
}

// ---------------------------------------------------------------------------
// Dialog state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DialogState {
    #[default]
    Hidden,
    Visible {
        prompt: String,
        choices: Vec<Choice>,
    },
}

const BOX_W: i32 = 460;
const PAD: i32 = 16;
const BUTTON_H: i32 = 20;
const BUTTON_GAP: i32 = 6;

/// Screen-space layout of a visible dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    pub frame: Rect,
    pub prompt_lines: Vec<String>,
    pub prompt_y: i32,
    pub buttons: Vec<Rect>,
}

#[derive(Debug, Clone, Default)]
pub struct Dialog {
    state: DialogState,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present `prompt` with `choices`, replacing whatever was showing
    pub fn show(&mut self, prompt: &str, choices: &[Choice]) {
        if self.is_visible() {
            tracing::debug!("Dialog replaced while visible");
        }
        self.state = DialogState::Visible {
            prompt: prompt.to_string(),
            choices: choices.to_vec(),
        };
    }

    pub fn hide(&mut self) {
        self.state = DialogState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, DialogState::Visible { .. })
    }

    pub fn prompt(&self) -> Option<&str> {
        match &self.state {
            DialogState::Visible { prompt, .. } => Some(prompt),
            DialogState::Hidden => None,
        }
    }

    /// Choices currently on display (empty while hidden)
    pub fn choices(&self) -> &[Choice] {
        match &self.state {
            DialogState::Visible { choices, .. } => choices,
            DialogState::Hidden => &[],
        }
    }

    /// Take the choice at `index`: returns its effect and hides the dialog.
    /// Invalid indices leave the dialog showing.
    pub fn choose(&mut self, index: usize) -> Option<Effect> {
        let choice = *self.choices().get(index)?;
        tracing::info!("Dialog choice '{}'", choice.label);
        self.hide();
        Some(choice.effect)
    }

    pub fn layout(&self) -> Option<DialogLayout> {
        let DialogState::Visible { prompt, choices } = &self.state else {
            return None;
        };
        let prompt_lines = font::wrap_text(prompt, BOX_W - 2 * PAD);
        let text_h = prompt_lines.len() as i32 * font::LINE_HEIGHT;
        let buttons_h = choices.len() as i32 * (BUTTON_H + BUTTON_GAP);
        let box_h = PAD + text_h + PAD + buttons_h + PAD - BUTTON_GAP;
        let frame = Rect::new(
            (SCREEN_WIDTH as i32 - BOX_W) / 2,
            (SCREEN_HEIGHT as i32 - box_h) / 2,
            BOX_W,
            box_h,
        );
        let first_button_y = frame.y + PAD + text_h + PAD;
        let buttons = (0..choices.len() as i32)
            .map(|i| {
                Rect::new(
                    frame.x + PAD,
                    first_button_y + i * (BUTTON_H + BUTTON_GAP),
                    BOX_W - 2 * PAD,
                    BUTTON_H,
                )
            })
            .collect();
        Some(DialogLayout {
            frame,
            prompt_lines,
            prompt_y: frame.y + PAD,
            buttons,
        })
    }

    /// Index of the choice button under a screen point
    pub fn choice_at(&self, x: i32, y: i32) -> Option<usize> {
        self.layout()?.buttons.iter().position(|b| b.contains(x, y))
    }

    pub fn draw(&self, fb: &mut [u32], hover: Option<(i32, i32)>) {
        let Some(layout) = self.layout() else {
            return;
        };
        let f = layout.frame;
        font::draw_rect(fb, f.x + 4, f.y + 4, f.w, f.h, 0xFF000000);
        font::draw_rect(fb, f.x, f.y, f.w, f.h, 0xFF202024);
        font::draw_rect_outline(fb, f.x, f.y, f.w, f.h, 0xFFB02828);

        for (i, line) in layout.prompt_lines.iter().enumerate() {
            font::draw_text_shadow(
                fb,
                f.x + PAD,
                layout.prompt_y + i as i32 * font::LINE_HEIGHT,
                line,
                0xFFEEEEEE,
            );
        }

        for (button, choice) in layout.buttons.iter().zip(self.choices()) {
            let hovered = hover.is_some_and(|(hx, hy)| button.contains(hx, hy));
            let fill = if hovered { 0xFF5a2020 } else { 0xFF38383e };
            font::draw_rect(fb, button.x, button.y, button.w, button.h, fill);
            font::draw_rect_outline(fb, button.x, button.y, button.w, button.h, 0xFF8a8a96);
            let label = font::clip_text(choice.label, button.w - 12);
            font::draw_text_centered(fb, *button, button.y + 7, label, 0xFFFFFFFF);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YES: Choice = Choice {
        label: "Yes",
        effect: Effect { obedience: 1, rebellion: 0, suspicion: -1, acknowledgment: "ok" },
    };
    const NO: Choice = Choice {
        label: "No",
        effect: Effect { obedience: 0, rebellion: 1, suspicion: 1, acknowledgment: "hm" },
    };

    #[test]
    fn starts_hidden() {
        let d = Dialog::new();
        assert!(!d.is_visible());
        assert!(d.prompt().is_none());
        assert!(d.choices().is_empty());
        assert!(d.layout().is_none());
    }

    #[test]
    fn show_then_choose_hides() {
        let mut d = Dialog::new();
        d.show("Well?", &[YES, NO]);
        assert!(d.is_visible());
        assert_eq!(d.prompt(), Some("Well?"));
        assert_eq!(d.choose(1), Some(NO.effect));
        assert!(!d.is_visible());
        assert_eq!(d.choose(0), None);
    }

    #[test]
    fn second_show_replaces_first() {
        let mut d = Dialog::new();
        d.show("First", &[YES, NO]);
        d.show("Second", &[NO]);
        assert_eq!(d.prompt(), Some("Second"));
        assert_eq!(d.choices(), &[NO]);
        assert_eq!(d.choose(1), None);
        assert!(d.is_visible());
        d.hide();
        assert!(!d.is_visible());
    }

    #[test]
    fn hide_when_hidden_is_noop() {
        let mut d = Dialog::new();
        d.hide();
        assert!(!d.is_visible());
    }

    #[test]
    fn buttons_map_clicks_to_choices() {
        let mut d = Dialog::new();
        d.show("The telescreen blares Party propaganda. Do you listen or turn it off?", &[YES, NO]);
        let layout = d.layout().unwrap();
        assert_eq!(layout.buttons.len(), 2);
        // 69 glyphs = 413 px, inside the 428 px text column
        assert_eq!(layout.prompt_lines.len(), 1);
        let b0 = layout.buttons[0];
        let b1 = layout.buttons[1];
        assert!(b1.y > b0.y + b0.h - 1);
        assert_eq!(d.choice_at(b0.x + 1, b0.y + 1), Some(0));
        assert_eq!(d.choice_at(b1.x + b1.w - 1, b1.y + b1.h - 1), Some(1));
        assert_eq!(d.choice_at(layout.frame.x + 1, layout.frame.y + 1), None);
        assert!(layout.frame.contains(b1.x, b1.y + b1.h));
    }

    #[test]
    fn wrapped_prompt_pushes_buttons_down() {
        let mut short = Dialog::new();
        short.show("Well?", &[YES, NO]);
        let one = short.layout().unwrap();

        let mut long = Dialog::new();
        long.show(
            "You look at the Memory Hole, ready to destroy any evidence of thoughtcrime.",
            &[YES, NO],
        );
        let two = long.layout().unwrap();
        assert_eq!(two.prompt_lines.len(), 2);
        assert_eq!(
            two.prompt_lines.join(" "),
            "You look at the Memory Hole, ready to destroy any evidence of thoughtcrime."
        );
        for line in &two.prompt_lines {
            assert!(font::text_width(line) <= BOX_W - 2 * PAD);
        }

        // One extra line grows the box by a line and recenters it
        assert_eq!(two.frame.h, one.frame.h + font::LINE_HEIGHT);
        for (b1, b2) in one.buttons.iter().zip(&two.buttons) {
            let shift_in_frame = (b2.y - two.frame.y) - (b1.y - one.frame.y);
            assert_eq!(shift_in_frame, font::LINE_HEIGHT);
        }
        let last = two.buttons[1];
        assert!(two.prompt_y + 2 * font::LINE_HEIGHT <= two.buttons[0].y);
        assert!(two.frame.contains(last.x, last.y + last.h - 1));
        assert_eq!(long.choice_at(last.x + 1, last.y + 1), Some(1));
    }

    #[test]
    fn draw_is_noop_when_hidden() {
        let mut fb = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
        Dialog::new().draw(&mut fb, None);
        assert!(fb.iter().all(|&p| p == 0));
    }
}
