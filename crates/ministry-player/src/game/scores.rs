//! Score state and the HUD readouts derived from it.

use ministry_common::Language;

use crate::game::i18n::t;

/// Suspicion level that ends the game
pub const SUSPICION_MAX: u32 = 100;

/// Obedience and rebellion only grow; suspicion stays within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    obedience: u32,
    rebellion: u32,
    suspicion: u32,
}

impl Scores {
    pub fn obedience(&self) -> u32 {
        self.obedience
    }

    pub fn rebellion(&self) -> u32 {
        self.rebellion
    }

    pub fn suspicion(&self) -> u32 {
        self.suspicion
    }

    pub fn add_obedience(&mut self, amount: u32) {
        self.obedience = self.obedience.saturating_add(amount);
    }

    pub fn add_rebellion(&mut self, amount: u32) {
        self.rebellion = self.rebellion.saturating_add(amount);
    }

    /// Raise suspicion, capped at the maximum. Returns true when the cap is hit.
    pub fn raise_suspicion(&mut self, amount: u32) -> bool {
        self.suspicion = self.suspicion.saturating_add(amount).min(SUSPICION_MAX);
        self.suspicion >= SUSPICION_MAX
    }

    pub fn lower_suspicion(&mut self, amount: u32) {
        self.suspicion = self.suspicion.saturating_sub(amount);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// On-screen counter text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Readouts {
    pub obedience: String,
    pub rebellion: String,
    pub suspicion: String,
}

impl Readouts {
    pub fn from_scores(scores: &Scores, lang: Language) -> Self {
        Self {
            obedience: format!("{}: {}", t(lang, "hud_obedience"), scores.obedience()),
            rebellion: format!("{}: {}", t(lang, "hud_rebellion"), scores.rebellion()),
            suspicion: format!("{}: {}%", t(lang, "hud_suspicion"), scores.suspicion()),
        }
    }
}
