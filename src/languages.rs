//! Fixed registry of selectable languages
//!
//! The selectors in the UI only ever offer these names, and the prompt
//! builder interpolates them verbatim, so the display name doubles as the
//! identifier sent to the model.

/// All selectable languages, in display order
pub const LANGUAGES: [&str; 15] = [
    "English",
    "Italian",
    "Spanish",
    "French",
    "German",
    "Chinese (Simplified)",
    "Chinese (Traditional)",
    "Japanese",
    "Korean",
    "Portuguese",
    "Russian",
    "Dutch",
    "Arabic",
    "Swedish",
    "Greek",
];

/// Initial value of the "From:" selector
pub const DEFAULT_SOURCE: &str = "English";

/// Initial value of the "To:" selector
pub const DEFAULT_TARGET: &str = "Italian";

/// Whether `name` is one of the registry entries (exact match)
pub fn is_supported(name: &str) -> bool {
    position(name).is_some()
}

/// Index of `name` in [`LANGUAGES`]
pub fn position(name: &str) -> Option<usize> {
    LANGUAGES.iter().position(|lang| *lang == name)
}

/// The entry after `name`, wrapping to the first one.
///
/// Unknown names start the cycle from the beginning.
pub fn next(name: &str) -> &'static str {
    match position(name) {
        Some(idx) => LANGUAGES[(idx + 1) % LANGUAGES.len()],
        None => LANGUAGES[0],
    }
}

/// The entry before `name`, wrapping to the last one
pub fn previous(name: &str) -> &'static str {
    match position(name) {
        Some(0) | None => LANGUAGES[LANGUAGES.len() - 1],
        Some(idx) => LANGUAGES[idx - 1],
    }
}
