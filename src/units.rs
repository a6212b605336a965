//! # Unit Table & Fraction Codec
//!
//! This module holds the fixed catalogue of measurement units recognized in
//! ingredient lines, their canonical abbreviations, and the mapping between
//! Unicode vulgar fractions and their ASCII `n/d` spelling.
//!
//! ## Usage
//!
//! ```rust
//! use groceries::units::{is_unit, to_abbreviation, to_ascii_fraction};
//!
//! assert!(is_unit("Tablespoons"));
//! assert_eq!(to_abbreviation("tablespoons"), "tbsp");
//! assert_eq!(to_ascii_fraction("½"), "1/2");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Every recognized unit spelling paired with its canonical abbreviation.
///
/// Keys are lower-case. Two-word spellings are listed alongside single
/// words; none of their first words is a unit on its own.
const UNIT_FORMS: &[(&str, &str)] = &[
    // Volume units
    ("cup", "cup"),
    ("cups", "cup"),
    ("c", "cup"),
    ("c.", "cup"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("tbsp", "tbsp"),
    ("tbsp.", "tbsp"),
    ("tbsps", "tbsp"),
    ("tbs", "tbsp"),
    ("tbs.", "tbsp"),
    ("tbl", "tbsp"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("tsp", "tsp"),
    ("tsp.", "tsp"),
    ("tsps", "tsp"),
    ("fluid ounce", "fl oz"),
    ("fluid ounces", "fl oz"),
    ("fl oz", "fl oz"),
    ("fl. oz", "fl oz"),
    ("fl. oz.", "fl oz"),
    ("pint", "pt"),
    ("pints", "pt"),
    ("pt", "pt"),
    ("pt.", "pt"),
    ("quart", "qt"),
    ("quarts", "qt"),
    ("qt", "qt"),
    ("qt.", "qt"),
    ("gallon", "gal"),
    ("gallons", "gal"),
    ("gal", "gal"),
    ("gal.", "gal"),
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("ml", "ml"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    ("l", "l"),
    // Weight units
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("oz", "oz"),
    ("oz.", "oz"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("lb", "lb"),
    ("lb.", "lb"),
    ("lbs", "lb"),
    ("lbs.", "lb"),
    ("gram", "g"),
    ("grams", "g"),
    ("g", "g"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("kg", "kg"),
    ("milligram", "mg"),
    ("milligrams", "mg"),
    ("mg", "mg"),
    // Length units
    ("inch", "in"),
    ("inches", "in"),
    ("in.", "in"),
    ("centimeter", "cm"),
    ("centimeters", "cm"),
    ("cm", "cm"),
    // Count units
    ("pinch", "pinch"),
    ("pinches", "pinch"),
    ("dash", "dash"),
    ("dashes", "dash"),
    ("clove", "clove"),
    ("cloves", "clove"),
    ("can", "can"),
    ("cans", "can"),
    ("jar", "jar"),
    ("jars", "jar"),
    ("bottle", "bottle"),
    ("bottles", "bottle"),
    ("package", "pkg"),
    ("packages", "pkg"),
    ("pkg", "pkg"),
    ("pkg.", "pkg"),
    ("bag", "bag"),
    ("bags", "bag"),
    ("box", "box"),
    ("boxes", "box"),
    ("slice", "slice"),
    ("slices", "slice"),
    ("piece", "piece"),
    ("pieces", "piece"),
    ("stick", "stick"),
    ("sticks", "stick"),
    ("bunch", "bunch"),
    ("bunches", "bunch"),
    ("sprig", "sprig"),
    ("sprigs", "sprig"),
    ("head", "head"),
    ("heads", "head"),
    ("handful", "handful"),
    ("handfuls", "handful"),
    ("dozen", "dozen"),
    ("doz", "dozen"),
];

/// The 16 Unicode vulgar fraction characters and their ASCII spelling
pub const FRACTION_GLYPHS: [(char, &str); 16] = [
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅐', "1/7"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

static ABBREVIATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| UNIT_FORMS.iter().copied().collect());

/// Single-token unit spellings
static UNIT_TABLE: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    UNIT_FORMS
        .iter()
        .map(|(form, _)| *form)
        .filter(|form| !form.contains(' '))
        .collect()
});

static TWO_WORD_UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    UNIT_FORMS
        .iter()
        .map(|(form, _)| *form)
        .filter(|form| form.contains(' '))
        .collect()
});

/// Iterate over every recognized unit spelling and its abbreviation
pub fn unit_forms() -> impl Iterator<Item = (&'static str, &'static str)> {
    UNIT_FORMS.iter().copied()
}

/// Check whether a single word is a recognized unit (case-insensitive)
pub fn is_unit(word: &str) -> bool {
    UNIT_TABLE.contains(word.to_lowercase().as_str())
}

/// Check whether a space-joined word pair is a recognized two-word unit
pub fn is_two_word_unit(words: &str) -> bool {
    TWO_WORD_UNITS.contains(words.to_lowercase().as_str())
}

/// Map a recognized unit to its canonical abbreviation.
///
/// The whole input is looked up first, then its first two words, then its
/// first word. Anything unrecognized is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use groceries::units::to_abbreviation;
///
/// assert_eq!(to_abbreviation("Pounds"), "lb");
/// assert_eq!(to_abbreviation("fluid ounces"), "fl oz");
/// assert_eq!(to_abbreviation("handfull"), "handfull");
/// ```
pub fn to_abbreviation(unit: &str) -> String {
    let lowered = unit.trim().to_lowercase();

    if let Some(abbreviation) = ABBREVIATIONS.get(lowered.as_str()) {
        return (*abbreviation).to_string();
    }

    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.len() >= 2 {
        let pair = format!("{} {}", words[0], words[1]);
        if let Some(abbreviation) = ABBREVIATIONS.get(pair.as_str()) {
            return (*abbreviation).to_string();
        }
    }
    if let Some(abbreviation) = words.first().and_then(|word| ABBREVIATIONS.get(*word)) {
        return (*abbreviation).to_string();
    }

    unit.to_string()
}

/// Look up the ASCII spelling of a single fraction glyph
pub fn glyph_fraction(glyph: char) -> Option<&'static str> {
    FRACTION_GLYPHS
        .iter()
        .find(|(candidate, _)| *candidate == glyph)
        .map(|(_, ascii)| *ascii)
}

/// Check whether a character is one of the supported fraction glyphs
pub fn is_fraction_glyph(c: char) -> bool {
    glyph_fraction(c).is_some()
}

/// Map a Unicode fraction glyph to its `n/d` spelling.
///
/// Input that is not exactly one fraction glyph is returned unchanged.
pub fn to_ascii_fraction(glyph: &str) -> String {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => glyph_fraction(c).unwrap_or(glyph).to_string(),
        _ => glyph.to_string(),
    }
}

/// Replace every fraction glyph in `text` with its ASCII spelling.
///
/// A glyph directly following a digit is separated from it by a space, so
/// "1½" becomes "1 1/2".
pub fn replace_fraction_glyphs(text: &str) -> String {
    let mut replaced = String::with_capacity(text.len() + 4);
    let mut previous: Option<char> = None;

    for c in text.chars() {
        match glyph_fraction(c) {
            Some(ascii) => {
                if previous.is_some_and(|p| p.is_ascii_digit()) {
                    replaced.push(' ');
                }
                replaced.push_str(ascii);
            }
            None => replaced.push(c),
        }
        previous = Some(c);
    }

    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_table_is_case_insensitive() {
        assert!(is_unit("cup"));
        assert!(is_unit("CUPS"));
        assert!(is_unit("Tbsp."));
        assert!(!is_unit("flour"));
        assert!(!is_unit("fluid"));
    }

    #[test]
    fn test_two_word_units_are_not_single_units() {
        assert!(is_two_word_unit("fluid ounce"));
        assert!(is_two_word_unit("Fl Oz"));
        assert!(!is_unit("fl"));
        assert!(!is_unit("fl."));
        for (form, _) in unit_forms().filter(|(form, _)| form.contains(' ')) {
            let first = form.split(' ').next().unwrap();
            assert!(!is_unit(first), "first word of '{form}' must not be a unit");
        }
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(to_abbreviation("tablespoons"), "tbsp");
        assert_eq!(to_abbreviation("Teaspoon"), "tsp");
        assert_eq!(to_abbreviation("pounds"), "lb");
        assert_eq!(to_abbreviation("lbs."), "lb");
        assert_eq!(to_abbreviation("cups"), "cup");
        assert_eq!(to_abbreviation("fluid ounce"), "fl oz");
        assert_eq!(to_abbreviation("litres"), "l");
    }

    #[test]
    fn test_abbreviation_prefers_two_word_units() {
        assert_eq!(to_abbreviation("fluid ounces of milk"), "fl oz");
        assert_eq!(to_abbreviation("cups flour"), "cup");
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        assert_eq!(to_abbreviation("Smidgen"), "Smidgen");
        assert_eq!(to_abbreviation(""), "");
    }

    #[test]
    fn test_every_glyph_maps_to_ascii() {
        for (glyph, ascii) in FRACTION_GLYPHS {
            assert_eq!(to_ascii_fraction(&glyph.to_string()), ascii);
        }
        assert_eq!(FRACTION_GLYPHS.len(), 16);
    }

    #[test]
    fn test_non_glyph_passes_through() {
        assert_eq!(to_ascii_fraction("2"), "2");
        assert_eq!(to_ascii_fraction("½½"), "½½");
        assert_eq!(to_ascii_fraction("abc"), "abc");
    }

    #[test]
    fn test_replace_fraction_glyphs() {
        assert_eq!(replace_fraction_glyphs("1½ cups"), "1 1/2 cups");
        assert_eq!(replace_fraction_glyphs("¾ cup"), "3/4 cup");
        assert_eq!(replace_fraction_glyphs("1 ⅓"), "1 1/3");
        assert_eq!(replace_fraction_glyphs("no glyphs"), "no glyphs");
    }
}
