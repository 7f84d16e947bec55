use crate::color::{Color, ACCENT_TEXT};
use crate::pipeline::mapper::{generate_color, map_range};
use crate::pipeline::mood::MoodFlags;

/// The four roles a theme color can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Background,
    Text,
    Accent,
    AccentText,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::Accent,
        ColorRole::AccentText,
    ];

    /// Display name, e.g. for swatch labels and color cards.
    pub fn label(self) -> &'static str {
        match self {
            ColorRole::Background => "Background",
            ColorRole::Text => "Text",
            ColorRole::Accent => "Accent",
            ColorRole::AccentText => "Accent Text",
        }
    }

    /// One-line description of where the color is used.
    pub fn description(self) -> &'static str {
        match self {
            ColorRole::Background => "Primary background color",
            ColorRole::Text => "Main text color",
            ColorRole::Accent => "Buttons, links, highlights",
            ColorRole::AccentText => "Text on accent backgrounds",
        }
    }
}

/// A generated theme palette: one color per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub accent_text: Color,
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Text => self.text,
            ColorRole::Accent => self.accent,
            ColorRole::AccentText => self.accent_text,
        }
    }
}

/// HSL target ranges for one color role. Hue bounds are offsets added to
/// the palette's base hue (mod 360); saturation and lightness are absolute.
struct RoleRanges {
    hue: (f64, f64),
    sat: (f64, f64),
    light: (f64, f64),
}

struct Scheme {
    background: RoleRanges,
    text: RoleRanges,
    accent: RoleRanges,
}

/// The five color schemes: vibrant, pastel, professional, high-contrast,
/// earth. The numeric ranges are fixed design constants; regression tests
/// pin the colors they produce.
const SCHEMES: [Scheme; 5] = [
    // 0: vibrant: saturated pale background, complementary dark text
    Scheme {
        background: RoleRanges {
            hue: (0.0, 30.0),
            sat: (70.0, 90.0),
            light: (85.0, 95.0),
        },
        text: RoleRanges {
            hue: (180.0, 210.0),
            sat: (30.0, 50.0),
            light: (10.0, 20.0),
        },
        accent: RoleRanges {
            hue: (120.0, 150.0),
            sat: (80.0, 100.0),
            light: (50.0, 65.0),
        },
    },
    // 1: pastel: washed-out background, muted text
    Scheme {
        background: RoleRanges {
            hue: (0.0, 20.0),
            sat: (20.0, 40.0),
            light: (88.0, 96.0),
        },
        text: RoleRanges {
            hue: (200.0, 230.0),
            sat: (15.0, 30.0),
            light: (18.0, 28.0),
        },
        accent: RoleRanges {
            hue: (40.0, 70.0),
            sat: (45.0, 65.0),
            light: (60.0, 75.0),
        },
    },
    // 2: professional: near-neutral surfaces, cool accent
    Scheme {
        background: RoleRanges {
            hue: (0.0, 10.0),
            sat: (5.0, 15.0),
            light: (92.0, 98.0),
        },
        text: RoleRanges {
            hue: (0.0, 10.0),
            sat: (10.0, 25.0),
            light: (12.0, 22.0),
        },
        accent: RoleRanges {
            hue: (210.0, 240.0),
            sat: (50.0, 70.0),
            light: (35.0, 50.0),
        },
    },
    // 3: high contrast: dark background, light text, loud accent
    Scheme {
        background: RoleRanges {
            hue: (0.0, 15.0),
            sat: (10.0, 25.0),
            light: (5.0, 15.0),
        },
        text: RoleRanges {
            hue: (30.0, 60.0),
            sat: (15.0, 35.0),
            light: (85.0, 95.0),
        },
        accent: RoleRanges {
            hue: (90.0, 120.0),
            sat: (85.0, 100.0),
            light: (55.0, 70.0),
        },
    },
    // 4: earth: hue driven by earth_hue instead of the raw seed
    Scheme {
        background: RoleRanges {
            hue: (0.0, 25.0),
            sat: (15.0, 30.0),
            light: (85.0, 94.0),
        },
        text: RoleRanges {
            hue: (160.0, 190.0),
            sat: (20.0, 35.0),
            light: (15.0, 25.0),
        },
        accent: RoleRanges {
            hue: (60.0, 90.0),
            sat: (55.0, 80.0),
            light: (40.0, 55.0),
        },
    },
];

/// Pick the scheme index from seed, mood, and offset.
///
/// The mood checks run in a fixed order and each matching flag reassigns
/// unconditionally, so when several flags are set the later category wins:
/// natural over energetic over serious over calm over happy. The offset is
/// folded in afterwards so a refresh walks through the other schemes.
pub fn select_scheme(seed: u32, offset: u32, mood: MoodFlags) -> usize {
    let mut scheme = (seed % 5) as usize;
    if mood.happy {
        scheme = 0;
    }
    if mood.calm {
        scheme = 1;
    }
    if mood.serious {
        scheme = 2;
    }
    if mood.energetic {
        scheme = 3;
    }
    if mood.natural {
        scheme = 4;
    }
    (scheme + (offset % 5) as usize) % 5
}

/// Remap the seed into one of two earth-tone hue bands: warm browns
/// (20-60) for even seeds, cool blue-greens (180-240) for odd ones.
pub fn earth_hue(seed: u32) -> u32 {
    if seed % 2 == 0 {
        map_range(f64::from(seed % 40), 0.0, 40.0, 20.0, 60.0) as u32
    } else {
        map_range(f64::from(seed % 60), 0.0, 60.0, 180.0, 240.0) as u32
    }
}

/// Generate the raw (pre-contrast-adjustment) palette for a seed.
///
/// Background, text, and accent invoke the mapper with offsets 0, 1, and 2
/// past the caller's offset so the three colors decorrelate. AccentText is
/// always pure white.
pub fn generate_palette(seed: u32, offset: u32, mood: MoodFlags) -> Palette {
    let base_hue = f64::from(seed % 360);
    let scheme_index = select_scheme(seed, offset, mood);
    let scheme = &SCHEMES[scheme_index];

    // Earth tones ignore the raw seed's hue bias and key off a narrowed hue.
    let color_seed = if scheme_index == 4 {
        earth_hue(seed)
    } else {
        seed
    };

    let role_color = |ranges: &RoleRanges, role_offset: u32| {
        // Both hue bounds wrap individually so the mapper never sees a
        // domain that silently crossed 360.
        let hue = (
            (base_hue + ranges.hue.0) % 360.0,
            (base_hue + ranges.hue.1) % 360.0,
        );
        // Widen before adding: the role offset must not wrap the caller's
        // offset at the top of the u32 range.
        let mapper_offset = u64::from(role_offset) + u64::from(offset);
        generate_color(color_seed, mapper_offset, hue, ranges.sat, ranges.light)
    };

    Palette {
        background: role_color(&scheme.background, 0),
        text: role_color(&scheme.text, 1),
        accent: role_color(&scheme.accent, 2),
        accent_text: ACCENT_TEXT,
    }
}
