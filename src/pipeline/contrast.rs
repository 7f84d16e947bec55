use crate::color::Color;
use crate::pipeline::generate::Palette;

/// Minimum contrast ratio for body text against the background (WCAG AA).
pub const MIN_TEXT_CONTRAST: f64 = 4.5;
/// Minimum contrast ratio for accent elements against the background.
pub const MIN_ACCENT_CONTRAST: f64 = 3.0;

const STEP: u8 = 5;

/// Nudge a foreground color until it meets `min_ratio` contrast against
/// `background`.
///
/// All three channels step together by 5 per iteration, saturating at the
/// channel bounds: darker than the background means the foreground lightens
/// toward white, lighter means it darkens toward black. Terminates in at
/// most 51 iterations. If every channel saturates before the ratio is met,
/// the clamped extreme is returned as a best effort.
pub fn ensure_contrast(background: Color, foreground: Color, min_ratio: f64) -> Color {
    let mut fg = foreground;
    if Color::contrast_ratio(background, fg) >= min_ratio {
        return fg;
    }

    let darken = background.relative_luminance() > fg.relative_luminance();
    loop {
        let exhausted = if darken {
            fg = Color::new(
                fg.r.saturating_sub(STEP),
                fg.g.saturating_sub(STEP),
                fg.b.saturating_sub(STEP),
            );
            fg == Color::new(0, 0, 0)
        } else {
            fg = Color::new(
                fg.r.saturating_add(STEP),
                fg.g.saturating_add(STEP),
                fg.b.saturating_add(STEP),
            );
            fg == Color::new(255, 255, 255)
        };
        if Color::contrast_ratio(background, fg) >= min_ratio || exhausted {
            return fg;
        }
    }
}

/// Enforce the palette's two contrast invariants in place: text at 4.5:1
/// and accent at 3:1 against the background. AccentText stays fixed white.
pub fn enforce_contrast(palette: &mut Palette) {
    palette.text = ensure_contrast(palette.background, palette.text, MIN_TEXT_CONTRAST);
    palette.accent = ensure_contrast(palette.background, palette.accent, MIN_ACCENT_CONTRAST);
}
