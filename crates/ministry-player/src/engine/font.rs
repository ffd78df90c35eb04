//! Built-in 5×7 bitmap font and rectangle primitives for the 640×480
//! framebuffer. Lowercase letters render with the uppercase glyphs.

use super::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal distance between glyph origins
pub const ADVANCE: i32 = 6;
pub const LINE_HEIGHT: i32 = 10;

fn glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10011, 0b10101, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],
        ':' => [0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '%' => [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '|' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '[' => [0b01100, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01100],
        ']' => [0b00110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00110],
        '~' => [0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000],
        ' ' => [0; 7],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}

/// Pixel width of a single line of text
pub fn text_width(text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        0
    } else {
        n * ADVANCE - (ADVANCE - GLYPH_WIDTH)
    }
}

#[inline]
fn put(fb: &mut [u32], x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 || x >= SCREEN_WIDTH as i32 || y >= SCREEN_HEIGHT as i32 {
        return;
    }
    let idx = y as usize * SCREEN_WIDTH + x as usize;
    if let Some(px) = fb.get_mut(idx) {
        *px = color;
    }
}

pub fn draw_text(fb: &mut [u32], x: i32, y: i32, text: &str, color: u32) {
    for (i, ch) in text.chars().enumerate() {
        let bitmap = glyph(ch);
        let cx = x + i as i32 * ADVANCE;
        for (row, bits) in bitmap.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    put(fb, cx + col, y + row as i32, color);
                }
            }
        }
    }
}

/// Text with a 1px dark drop shadow
pub fn draw_text_shadow(fb: &mut [u32], x: i32, y: i32, text: &str, color: u32) {
    draw_text(fb, x + 1, y + 1, text, 0xFF000000);
    draw_text(fb, x, y, text, color);
}

pub fn draw_text_centered(fb: &mut [u32], area: Rect, y: i32, text: &str, color: u32) {
    let x = area.x + (area.w - text_width(text)) / 2;
    draw_text_shadow(fb, x, y, text, color);
}

pub fn draw_rect(fb: &mut [u32], x: i32, y: i32, w: i32, h: i32, color: u32) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(SCREEN_WIDTH as i32);
    let y1 = (y + h).min(SCREEN_HEIGHT as i32);
    for py in y0..y1 {
        let row = py as usize * SCREEN_WIDTH;
        for px in x0..x1 {
            fb[row + px as usize] = color;
        }
    }
}

pub fn draw_rect_outline(fb: &mut [u32], x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 {
        return;
    }
    draw_rect(fb, x, y, w, 1, color);
    draw_rect(fb, x, y + h - 1, w, 1, color);
    draw_rect(fb, x, y, 1, h, color);
    draw_rect(fb, x + w - 1, y, 1, h, color);
}

/// Greedy word wrap to a pixel width. Words longer than a line are kept whole.
pub fn wrap_text(text: &str, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate_len = current.chars().count() + 1 + word.chars().count();
        if candidate_len as i32 * ADVANCE - (ADVANCE - GLYPH_WIDTH) <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate text so that it fits into `max_width` pixels
pub fn clip_text(text: &str, max_width: i32) -> &str {
    if text_width(text) <= max_width {
        return text;
    }
    let fits = ((max_width + (ADVANCE - GLYPH_WIDTH)) / ADVANCE).max(0) as usize;
    match text.char_indices().nth(fits) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_counts_chars() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("A"), 5);
        assert_eq!(text_width("AB"), 11);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("The telescreen blares Party propaganda.", 60);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line) <= 60 || !line.contains(' '), "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), "The telescreen blares Party propaganda.");
    }

    #[test]
    fn clip_shortens_long_labels() {
        assert_eq!(clip_text("Telescreen", 200), "Telescreen");
        let clipped = clip_text("Telescreen", 20);
        assert!(text_width(clipped) <= 20);
        assert!("Telescreen".starts_with(clipped));
    }

    #[test]
    fn drawing_off_screen_is_safe() {
        let mut fb = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
        draw_rect(&mut fb, -50, -50, 100, 100, 0xFFFFFFFF);
        draw_rect_outline(&mut fb, 600, 450, 100, 100, 0xFFFFFFFF);
        draw_text(&mut fb, 630, 475, "OVERFLOW", 0xFFFFFFFF);
        assert_eq!(fb[0], 0xFFFFFFFF);
        assert_eq!(fb[60 * SCREEN_WIDTH + 60], 0);
    }

    #[test]
    fn lowercase_uses_uppercase_glyphs() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_ne!(glyph('%'), glyph('?'));
    }
}
