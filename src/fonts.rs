use crate::pipeline::hash::hash_word;

/// A curated heading/body font pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPair {
    pub heading: &'static str,
    pub body: &'static str,
}

/// The fixed pairing table. Order matters: the selection index is pinned
/// by the generation contract.
pub const FONT_PAIRS: [FontPair; 10] = [
    FontPair {
        heading: "Playfair Display",
        body: "Source Sans Pro",
    },
    FontPair {
        heading: "Montserrat",
        body: "Merriweather",
    },
    FontPair {
        heading: "Roboto Slab",
        body: "Roboto",
    },
    FontPair {
        heading: "Lora",
        body: "Open Sans",
    },
    FontPair {
        heading: "Oswald",
        body: "Quattrocento",
    },
    FontPair {
        heading: "Raleway",
        body: "Lato",
    },
    FontPair {
        heading: "Abril Fatface",
        body: "Poppins",
    },
    FontPair {
        heading: "Cinzel",
        body: "Fauna One",
    },
    FontPair {
        heading: "Fjalla One",
        body: "Libre Baskerville",
    },
    FontPair {
        heading: "Arvo",
        body: "Lato",
    },
];

/// Pick a font pair for a word: `(hash(word) + offset) mod 10`.
///
/// The word is hashed as typed, not lowercased, unlike the palette seed.
/// That asymmetry is part of the pinned behavior: changing a word's case
/// can change its fonts while leaving its colors alone.
pub fn select_pair(word: &str, offset: u32) -> FontPair {
    let index = (u64::from(hash_word(word)) + u64::from(offset)) % FONT_PAIRS.len() as u64;
    FONT_PAIRS[index as usize]
}
