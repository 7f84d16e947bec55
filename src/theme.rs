use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::fonts::{select_pair, FontPair};
use crate::pipeline::contrast::enforce_contrast;
use crate::pipeline::generate::{generate_palette, Palette};
use crate::pipeline::hash::hash_word;
use crate::pipeline::mood::classify;

/// A complete generated theme: palette plus font pairing, exportable as a
/// CSS custom-property block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub word: String,
    pub palette: Palette,
    pub fonts: FontPair,
}

impl Theme {
    /// Run the full generation pipeline for a word and variation offset.
    ///
    /// The seed and mood derive from the lowercased word; the font index
    /// hashes the word as typed. Rejects empty or whitespace-only input;
    /// past that, generation cannot fail.
    pub fn generate(word: &str, offset: u32) -> Result<Self> {
        let word = word.trim();
        if word.is_empty() {
            bail!("word must not be empty");
        }

        let lower = word.to_lowercase();
        let seed = hash_word(&lower);
        let mood = classify(&lower);

        let mut palette = generate_palette(seed, offset, mood);
        enforce_contrast(&mut palette);

        let fonts = select_pair(word, offset);

        Ok(Self {
            word: word.to_string(),
            palette,
            fonts,
        })
    }

    /// The six custom-property declarations shared by both export shapes.
    fn properties(&self) -> [String; 6] {
        [
            format!("--background: {};", self.palette.background),
            format!("--text: {};", self.palette.text),
            format!("--accent: {};", self.palette.accent),
            format!("--accent-text: {};", self.palette.accent_text),
            format!("--heading-font: '{}', serif;", self.fonts.heading),
            format!("--body-font: '{}', sans-serif;", self.fonts.body),
        ]
    }

    /// Serialize the theme as a `:root` CSS block.
    pub fn to_css(&self) -> String {
        let mut out = String::from(":root {\n");
        for prop in self.properties() {
            out.push_str("  ");
            out.push_str(&prop);
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }

    /// Serialize the bare declarations under a `/* WORD COLOR PALETTE */`
    /// header, the shape used for copy-paste into an existing stylesheet.
    pub fn css_snippet(&self) -> String {
        let mut out = format!("/* {} COLOR PALETTE */\n", self.word.to_uppercase());
        for prop in self.properties() {
            out.push_str(&prop);
            out.push('\n');
        }
        out
    }

    /// Write the `:root` block to a file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_css())
            .with_context(|| format!("failed to write theme to {}", path.display()))?;
        Ok(())
    }
}
