//! Game engine: minifb-based window, input polling, and game loop.
//!
//! Uses a 640×480 pixel framebuffer with 32-bit ARGB pixels.

pub mod font;

use anyhow::Result;
use minifb::{CursorStyle, Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use ministry_common::{AppConfig, Language};

use crate::game::i18n::t;
use crate::game::GameState;

pub const SCREEN_WIDTH: usize = 640;
pub const SCREEN_HEIGHT: usize = 480;

/// Engine display state
#[derive(Clone, Copy)]
enum EngineState {
    Playing,
    EscapeMenu { selected: usize },
}

const ESCAPE_MENU_COUNT: usize = 4; // resume, fullscreen, language, quit
const MENU_BOX_W: i32 = 280;
const MENU_BOX_H: i32 = 176;
const MENU_ITEM_H: i32 = 26;

/// Axis-aligned rectangle in framebuffer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.w && py < self.y + self.h
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// Map an arrow key to the DOM-style key name the game understands.
/// Every other key is ignored.
pub fn key_name(key: Key) -> Option<&'static str> {
    match key {
        Key::Up => Some("ArrowUp"),
        Key::Down => Some("ArrowDown"),
        Key::Left => Some("ArrowLeft"),
        Key::Right => Some("ArrowRight"),
        _ => None,
    }
}

/// Scale the 640x480 framebuffer to any target size using per-axis nearest-
/// neighbor sampling.
fn scale_to_size(src: &[u32], dst: &mut [u32], dst_w: usize, dst_h: usize) {
    for dy in 0..dst_h {
        let sy = (dy * SCREEN_HEIGHT) / dst_h;
        let dst_row = dy * dst_w;
        let src_row = sy * SCREEN_WIDTH;
        for dx in 0..dst_w {
            let sx = (dx * SCREEN_WIDTH) / dst_w;
            dst[dst_row + dx] = src[src_row + sx];
        }
    }
}

/// Darken every pixel to a third of its brightness
pub fn dim(fb: &mut [u32]) {
    for pixel in fb.iter_mut() {
        let r = (*pixel >> 16) & 0xFF;
        let g = (*pixel >> 8) & 0xFF;
        let b = *pixel & 0xFF;
        *pixel = 0xFF000000 | ((r / 3) << 16) | ((g / 3) << 8) | (b / 3);
    }
}

fn menu_box() -> Rect {
    Rect::new(
        (SCREEN_WIDTH as i32 - MENU_BOX_W) / 2,
        (SCREEN_HEIGHT as i32 - MENU_BOX_H) / 2,
        MENU_BOX_W,
        MENU_BOX_H,
    )
}

/// Which escape-menu row (if any) lies under the mouse
fn menu_item_at(mx: i32, my: i32) -> Option<usize> {
    let b = menu_box();
    if mx < b.x + 6 || mx >= b.x + b.w - 6 {
        return None;
    }
    let rel_y = my - (b.y + 44);
    if rel_y < 0 {
        return None;
    }
    let idx = (rel_y / MENU_ITEM_H) as usize;
    (idx < ESCAPE_MENU_COUNT).then_some(idx)
}

/// Draw the pause menu overlay onto the 640x480 framebuffer
fn draw_escape_menu(fb: &mut [u32], selected: usize, lang: Language) {
    dim(fb);

    let b = menu_box();
    font::draw_rect(fb, b.x, b.y, b.w, b.h, 0xFF1a1a1a);
    font::draw_rect_outline(fb, b.x, b.y, b.w, b.h, 0xFF8a2020);
    font::draw_rect_outline(fb, b.x + 2, b.y + 2, b.w - 4, b.h - 4, 0xFF501010);

    font::draw_text_centered(fb, b, b.y + 14, t(lang, "pause_title"), 0xFFE0E0E0);

    let item_keys = ["menu_resume", "menu_fullscreen", "menu_language", "menu_quit"];
    for (i, key) in item_keys.iter().enumerate() {
        let iy = b.y + 46 + i as i32 * MENU_ITEM_H;
        let color = if i == selected { 0xFFFFFFFF } else { 0xFF999999 };
        if i == selected {
            font::draw_rect(fb, b.x + 6, iy - 2, b.w - 12, 20, 0xFF3a1515);
        }
        let prefix = if i == selected { "> " } else { "  " };
        let text = format!("{}{}", prefix, t(lang, key));
        font::draw_text_shadow(fb, b.x + 20, iy + 4, &text, color);
    }

    font::draw_text(fb, b.x + 14, b.y + b.h - 18, t(lang, "pause_hint"), 0xFF777777);
}

/// Run the game engine
pub fn run(config: &AppConfig) -> Result<()> {
    let mut game = GameState::new(config.language, config.notice_frames);
    let mut fullscreen = false;
    let mut engine_state = EngineState::Playing;
    let mut prev_mouse_down = false;
    let mut frame_count: u64 = 0;

    tracing::info!("Engine initialized, entering game loop");
    tracing::info!("Controls: Arrows=move | Click=interact | Esc=menu | F11=fullscreen");

    // Outer loop: window (re)creation on fullscreen toggle
    loop {
        let scale = config.window_scale as usize;
        let (win_w, win_h) = if fullscreen {
            (1920usize, 1080usize)
        } else {
            (SCREEN_WIDTH * scale, SCREEN_HEIGHT * scale)
        };

        let options = WindowOptions {
            resize: !fullscreen,
            borderless: fullscreen,
            scale_mode: minifb::ScaleMode::AspectRatioStretch,
            ..Default::default()
        };

        let mut window = Window::new("Ministry", win_w, win_h, options)
            .map_err(|e| anyhow::anyhow!("Window creation failed: {}", e))?;
        window.set_target_fps(config.fps as usize);

        let mut framebuffer = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];

        // Output buffer, sized to match window
        let mut out_w = win_w;
        let mut out_h = win_h;
        let mut scaled_buf = vec![0u32; out_w * out_h];
        let mut toggle_fs = false;

        while window.is_open() {
            let (actual_w, actual_h) = window.get_size();
            if actual_w > 0 && actual_h > 0 && (actual_w != out_w || actual_h != out_h) {
                out_w = actual_w;
                out_h = actual_h;
                scaled_buf.resize(out_w * out_h, 0);
            }

            // Mouse → logical 640×480
            let (mouse_x, mouse_y) = window
                .get_mouse_pos(MouseMode::Clamp)
                .unwrap_or((0.0, 0.0));
            let mx = ((mouse_x as usize) * SCREEN_WIDTH / out_w.max(1)) as i32;
            let my = ((mouse_y as usize) * SCREEN_HEIGHT / out_h.max(1)) as i32;
            let mx = mx.clamp(0, SCREEN_WIDTH as i32 - 1);
            let my = my.clamp(0, SCREEN_HEIGHT as i32 - 1);

            if window.is_key_pressed(Key::F11, KeyRepeat::No) {
                toggle_fs = true;
                break;
            }

            let esc_pressed = window.is_key_pressed(Key::Escape, KeyRepeat::No);
            let mouse_down = window.get_mouse_down(MouseButton::Left);
            let mouse_clicked = mouse_down && !prev_mouse_down;
            prev_mouse_down = mouse_down;
            game.on_mouse_move(mx, my);

            match engine_state {
                EngineState::Playing => {
                    if esc_pressed {
                        engine_state = EngineState::EscapeMenu { selected: 0 };
                    } else {
                        if mouse_clicked {
                            game.on_click(mx, my);
                        }
                        // Key repeat mirrors held-down keydown events
                        for key in window.get_keys_pressed(KeyRepeat::Yes) {
                            match key_name(key) {
                                Some(name) => game.on_key_name(name),
                                None => tracing::trace!("Ignored key {:?}", key),
                            }
                        }
                        game.update();
                    }
                }
                EngineState::EscapeMenu { selected } => {
                    if esc_pressed {
                        engine_state = EngineState::Playing;
                    } else {
                        let mut sel = selected;
                        if window.is_key_pressed(Key::Up, KeyRepeat::Yes) && sel > 0 {
                            sel -= 1;
                        }
                        if window.is_key_pressed(Key::Down, KeyRepeat::Yes)
                            && sel < ESCAPE_MENU_COUNT - 1
                        {
                            sel += 1;
                        }
                        if let Some(idx) = menu_item_at(mx, my) {
                            sel = idx;
                        }
                        engine_state = EngineState::EscapeMenu { selected: sel };

                        let mut action: Option<usize> = None;
                        if window.is_key_pressed(Key::Enter, KeyRepeat::No) {
                            action = Some(sel);
                        }
                        if mouse_clicked {
                            if let Some(idx) = menu_item_at(mx, my) {
                                action = Some(idx);
                            }
                        }

                        match action {
                            Some(0) => engine_state = EngineState::Playing,
                            Some(1) => toggle_fs = true,
                            Some(2) => game.set_language(game.language().next()),
                            Some(3) => {
                                tracing::info!("Engine shutdown (menu)");
                                return Ok(());
                            }
                            _ => {}
                        }
                    }
                }
            }

            if toggle_fs {
                break;
            }

            // Render
            game.draw(&mut framebuffer);
            if let EngineState::EscapeMenu { selected } = engine_state {
                draw_escape_menu(&mut framebuffer, selected, game.language());
            }

            let hover = game.hover_info(mx, my);
            window.set_cursor_style(if hover.is_some() {
                CursorStyle::OpenHand
            } else {
                CursorStyle::Arrow
            });

            frame_count += 1;
            if frame_count % 5 == 0 {
                let title = format!(
                    "Ministry | {} | ({},{}) | {}",
                    game.readouts().suspicion,
                    mx,
                    my,
                    hover.unwrap_or("-"),
                );
                window.set_title(&title);
            }

            scale_to_size(&framebuffer, &mut scaled_buf, out_w, out_h);
            window
                .update_with_buffer(&scaled_buf, out_w, out_h)
                .map_err(|e| anyhow::anyhow!("Display error: {}", e))?;
        }

        if toggle_fs {
            fullscreen = !fullscreen;
            tracing::info!("Fullscreen → {}", if fullscreen { "ON" } else { "OFF" });
            engine_state = EngineState::Playing;
            continue;
        }

        break; // Window was closed
    }

    tracing::info!("Engine shutdown");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_key_names() {
        assert_eq!(key_name(Key::Up), Some("ArrowUp"));
        assert_eq!(key_name(Key::Down), Some("ArrowDown"));
        assert_eq!(key_name(Key::Left), Some("ArrowLeft"));
        assert_eq!(key_name(Key::Right), Some("ArrowRight"));
        assert_eq!(key_name(Key::W), None);
        assert_eq!(key_name(Key::Space), None);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 10, 20, 5);
        assert!(r.contains(10, 10));
        assert!(r.contains(29, 14));
        assert!(!r.contains(30, 10));
        assert!(!r.contains(10, 15));
        assert!(!r.contains(9, 12));
    }

    #[test]
    fn scaling_doubles_pixels() {
        let mut src = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
        src[0] = 0xFFFF0000;
        src[1] = 0xFF00FF00;
        let (w, h) = (SCREEN_WIDTH * 2, SCREEN_HEIGHT * 2);
        let mut dst = vec![0u32; w * h];
        scale_to_size(&src, &mut dst, w, h);
        assert_eq!(dst[0], 0xFFFF0000);
        assert_eq!(dst[1], 0xFFFF0000);
        assert_eq!(dst[2], 0xFF00FF00);
        assert_eq!(dst[w], 0xFFFF0000);
    }

    #[test]
    fn menu_hit_rows() {
        let b = menu_box();
        let x = b.x + 40;
        assert_eq!(menu_item_at(x, b.y + 44), Some(0));
        assert_eq!(menu_item_at(x, b.y + 44 + MENU_ITEM_H), Some(1));
        assert_eq!(menu_item_at(x, b.y + 44 + 2 * MENU_ITEM_H), Some(2));
        assert_eq!(menu_item_at(x, b.y + 44 + 3 * MENU_ITEM_H), Some(3));
        assert_eq!(menu_item_at(x, b.y + 44 + 4 * MENU_ITEM_H), None);
        assert_eq!(menu_item_at(b.x, b.y + 50), None);
        assert_eq!(menu_item_at(x, b.y + 10), None);
    }

    #[test]
    fn dim_divides_channels() {
        let mut fb = [0xFF9F6F3Fu32];
        dim(&mut fb);
        assert_eq!(fb[0], 0xFF352515);
    }
}
