//! Internationalization: UI text translations for English and German.
//!
//! Only engine-drawn chrome is translated (HUD labels, pause menu, game-over
//! overlay). Narrative prompts and choices stay in English.

use ministry_common::Language;

/// All translatable UI strings, looked up by key.
/// Returns the translated string or "???" if the key is not found.
pub fn t(lang: Language, key: &str) -> &'static str {
    match (lang, key) {
        // ── HUD ──
        (Language::English, "hud_obedience") => "Obedience",
        (Language::German, "hud_obedience") => "Gehorsam",
        (Language::English, "hud_rebellion") => "Rebellion",
        (Language::German, "hud_rebellion") => "Rebellion",
        (Language::English, "hud_suspicion") => "Suspicion",
        (Language::German, "hud_suspicion") => "Verdacht",
        (Language::English, "hud_hint") => "Arrows: move | Click: interact | Esc: menu",
        (Language::German, "hud_hint") => "Pfeile: gehen | Klick: benutzen | Esc: Menue",

        // ── Game over ──
        (Language::English, "game_over_title") => "GAME OVER",
        (Language::German, "game_over_title") => "SPIEL VORBEI",
        (Language::English, "game_over_text") => "The Thought Police have come for you.",
        (Language::German, "game_over_text") => "Die Gedankenpolizei hat dich geholt.",
        (Language::English, "restart") => "Restart",
        (Language::German, "restart") => "Neustart",

        // ── Escape / Pause menu ──
        (Language::English, "pause_title") => "= PAUSED =",
        (Language::German, "pause_title") => "= PAUSE =",
        (Language::English, "menu_resume") => "Resume",
        (Language::German, "menu_resume") => "Weiterspielen",
        (Language::English, "menu_fullscreen") => "Toggle Fullscreen",
        (Language::German, "menu_fullscreen") => "Vollbild umschalten",
        (Language::English, "menu_language") => "Language: English",
        (Language::German, "menu_language") => "Sprache: Deutsch",
        (Language::English, "menu_quit") => "Quit",
        (Language::German, "menu_quit") => "Beenden",
        (Language::English, "pause_hint") => "Arrow keys + Enter | Esc",
        (Language::German, "pause_hint") => "Pfeiltasten + Enter | Esc",

        // ── Fallback ──
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 13] = [
        "hud_obedience", "hud_rebellion", "hud_suspicion", "hud_hint",
        "game_over_title", "game_over_text", "restart",
        "pause_title", "menu_resume", "menu_fullscreen", "menu_language",
        "menu_quit", "pause_hint",
    ];

    #[test]
    fn all_keys_translated() {
        for key in &KEYS {
            for lang in [Language::English, Language::German] {
                assert_ne!(t(lang, key), "???", "{:?} missing for '{}'", lang, key);
            }
        }
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(t(Language::English, "no_such_key"), "???");
    }

    #[test]
    fn hud_labels_are_plain_ascii() {
        // The bitmap font only covers ASCII
        for key in &KEYS {
            for lang in [Language::English, Language::German] {
                assert!(t(lang, key).is_ascii(), "{:?} '{}' not ASCII", lang, key);
            }
        }
    }
}
