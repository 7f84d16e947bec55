/// Mood classification of a word across five keyword categories.
///
/// Flags are independent: a word may match several categories at once,
/// or none at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodFlags {
    pub happy: bool,
    pub calm: bool,
    pub serious: bool,
    pub energetic: bool,
    pub natural: bool,
}

const HAPPY: [&str; 8] = [
    "happy", "joy", "bright", "sunny", "fun", "smile", "laugh", "cheer",
];
const CALM: [&str; 8] = [
    "calm", "peace", "quiet", "gentle", "soft", "serene", "still", "rest",
];
const SERIOUS: [&str; 8] = [
    "serious",
    "formal",
    "business",
    "law",
    "bank",
    "trust",
    "firm",
    "corporate",
];
const ENERGETIC: [&str; 8] = [
    "energy", "fast", "bold", "power", "spark", "dash", "zoom", "fire",
];
const NATURAL: [&str; 8] = [
    "nature", "earth", "leaf", "forest", "ocean", "green", "wood", "river",
];

/// Classify a word by substring match against the keyword lists.
///
/// Matching is against the lowercased input, so `"Oceanic"` still reads
/// as natural. Substrings count: "joyful" matches "joy".
pub fn classify(word: &str) -> MoodFlags {
    let w = word.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| w.contains(k));
    MoodFlags {
        happy: matches(&HAPPY),
        calm: matches(&CALM),
        serious: matches(&SERIOUS),
        energetic: matches(&ENERGETIC),
        natural: matches(&NATURAL),
    }
}
