use crate::color::Color;

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Pure interpolation with no clamping: values outside the input range map
/// outside the output range. Callers are responsible for range discipline.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Derive one color from a seed/offset pair and HSL target ranges.
///
/// A raw value in [0, 360) is folded out of the seed and offset, then
/// remapped into the hue range; saturation and lightness are driven by
/// scaled copies of the same raw value so the three dimensions stay
/// correlated with the seed but not with each other.
pub fn generate_color(
    seed: u32,
    offset: u64,
    hue: (f64, f64),
    sat: (f64, f64),
    light: (f64, f64),
) -> Color {
    // Reduce both factors mod 360 before multiplying; the product stays
    // congruent and cannot overflow even at the maximum offset.
    let raw = ((u64::from(seed) % 360) * ((offset % 360 + 1) % 360) * 11 % 360) as f64;

    let h = map_range(raw, 0.0, 360.0, hue.0, hue.1);
    let s = map_range(
        (raw * 2.7 + offset as f64 * 13.0) % 100.0,
        0.0,
        100.0,
        sat.0,
        sat.1,
    );
    let l = map_range(
        (raw * 3.5 + offset as f64 * 17.0) % 100.0,
        0.0,
        100.0,
        light.0,
        light.1,
    );

    hsl_to_rgb(h, s, l)
}

/// Convert HSL (hue in degrees, saturation and lightness in percent) to sRGB.
///
/// Standard formula: `f(n) = L - A * clamp(min(k-3, 9-k), -1, 1)` with
/// `k = (n + H/30) mod 12` and `A = S * min(L, 1-L)`, sampled at n = 0 (red),
/// n = 8 (green), n = 4 (blue). Channels round to the nearest integer.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    let s = s / 100.0;
    let l = l / 100.0;
    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let a = s * l.min(1.0 - l);
        let value = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (255.0 * value).round() as u8
    };
    Color::new(channel(0.0), channel(8.0), channel(4.0))
}
