//! Region finder: R1, R2 and RV boundaries
//!
//! Regions are offsets into a [`Word`]. They are derived from vowel positions,
//! so after any deletion or insertion they are recomputed from the new word
//! content rather than shifted.

use super::charset::{CharSet, CharacterClassifier};
use super::word::Word;

/// Region boundaries of a word. Each offset is `<= word.len()`; an offset
/// equal to the length means the region is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    /// Start of R1
    pub r1: usize,
    /// Start of R2, never before R1
    pub r2: usize,
    /// Start of RV, computed independently of R1/R2
    pub rv: usize,
}

impl Regions {
    /// Regions before first computation: every region starts at the end
    pub fn unset(len: usize) -> Self {
        Self {
            r1: len,
            r2: len,
            rv: len,
        }
    }

    /// Offset at which a zone starts
    #[inline]
    pub fn start(&self, zone: Zone) -> usize {
        match zone {
            Zone::Word => 0,
            Zone::R1 => self.r1,
            Zone::R2 => self.r2,
            Zone::Rv => self.rv,
        }
    }
}

/// Region a suffix must lie in for a rule to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Anywhere in the word
    Word,
    R1,
    R2,
    Rv,
}

/// How a language family defines RV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RvStyle {
    /// The language does not use RV
    None,
    /// Spanish, Portuguese and Italian
    Romance,
    /// French, with the `par`/`col`/`tap` exceptions
    French,
    /// Russian: after the first vowel
    Slavic,
}

/// Static description of how a language lays out its regions
#[derive(Debug, Clone, Copy)]
pub struct RegionLayout {
    /// Vowels of the language
    pub vowels: CharSet,
    /// Minimum start of R1
    pub r1_floor: usize,
    /// Prefixes that fix R1 to their end when the word starts with them
    pub r1_prefixes: &'static [&'static str],
    /// Whether R2 is computed at all
    pub has_r2: bool,
    /// RV definition
    pub rv: RvStyle,
}

impl RegionLayout {
    /// Standard R1/R2 layout for the given vowels
    pub const fn new(vowels: CharSet) -> Self {
        Self {
            vowels,
            r1_floor: 0,
            r1_prefixes: &[],
            has_r2: true,
            rv: RvStyle::None,
        }
    }

    /// Require R1 to start at or after `floor`
    pub const fn with_r1_floor(mut self, floor: usize) -> Self {
        self.r1_floor = floor;
        self
    }

    /// Prefixes that define R1 directly
    pub const fn with_r1_prefixes(mut self, prefixes: &'static [&'static str]) -> Self {
        self.r1_prefixes = prefixes;
        self
    }

    /// Compute RV with the given style
    pub const fn with_rv(mut self, style: RvStyle) -> Self {
        self.rv = style;
        self
    }

    /// Leave R2 empty
    pub const fn without_r2(mut self) -> Self {
        self.has_r2 = false;
        self
    }

    /// Check whether a position holds an unfrozen vowel
    #[inline]
    pub fn is_vowel_at(&self, word: &Word, index: usize) -> bool {
        word.plain_char_at(index)
            .is_some_and(|ch| self.vowels.is_vowel(ch))
    }
}

/// Position just past the first non-vowel that follows a vowel, scanning
/// from `from`; the word length when there is none.
pub fn region_after(word: &Word, layout: &RegionLayout, from: usize) -> usize {
    let len = word.len();
    let Some(vowel) = (from..len).find(|&i| layout.is_vowel_at(word, i)) else {
        return len;
    };
    (vowel + 1..len)
        .find(|&i| !layout.is_vowel_at(word, i))
        .map_or(len, |i| i + 1)
}

/// Position just past the first vowel at or after `from`
fn past_vowel(word: &Word, layout: &RegionLayout, from: usize) -> Option<usize> {
    (from..word.len())
        .find(|&i| layout.is_vowel_at(word, i))
        .map(|i| i + 1)
}

/// Position just past the first non-vowel at or after `from`
fn past_non_vowel(word: &Word, layout: &RegionLayout, from: usize) -> Option<usize> {
    (from..word.len())
        .find(|&i| !layout.is_vowel_at(word, i))
        .map(|i| i + 1)
}

/// RV for Spanish, Portuguese and Italian.
///
/// If the second letter is a consonant, RV follows the next vowel; if the
/// first two letters are vowels, RV follows the next consonant; otherwise
/// (consonant then vowel) RV follows the third letter.
fn romance_rv(word: &Word, layout: &RegionLayout) -> Option<usize> {
    let len = word.len();
    if len < 2 {
        return None;
    }
    let first = layout.is_vowel_at(word, 0);
    let second = layout.is_vowel_at(word, 1);
    match (first, second) {
        (true, false) => past_vowel(word, layout, 2),
        (true, true) => past_non_vowel(word, layout, 2),
        (false, false) => past_vowel(word, layout, 2),
        (false, true) => (len >= 3).then_some(3),
    }
}

/// RV for French
fn french_rv(word: &Word, layout: &RegionLayout) -> Option<usize> {
    let len = word.len();
    if len >= 3 && layout.is_vowel_at(word, 0) && layout.is_vowel_at(word, 1) {
        return Some(3);
    }
    if ["par", "col", "tap"].iter().any(|p| word.starts_with(p)) {
        return Some(3);
    }
    past_vowel(word, layout, 1)
}

/// RV for Russian
fn slavic_rv(word: &Word, layout: &RegionLayout) -> Option<usize> {
    past_vowel(word, layout, 0)
}

/// Derive all region boundaries from the current word content
pub fn recompute_regions(word: &Word, layout: &RegionLayout) -> Regions {
    let len = word.len();

    let scanned_r1 = layout
        .r1_prefixes
        .iter()
        .find(|prefix| word.starts_with(prefix))
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| region_after(word, layout, 0));

    // R2 continues the scan from the unclamped R1
    let r2 = if layout.has_r2 {
        region_after(word, layout, scanned_r1)
    } else {
        len
    };
    let r1 = scanned_r1.max(layout.r1_floor).min(len);

    let rv = match layout.rv {
        RvStyle::None => None,
        RvStyle::Romance => romance_rv(word, layout),
        RvStyle::French => french_rv(word, layout),
        RvStyle::Slavic => slavic_rv(word, layout),
    }
    .unwrap_or(len);

    Regions {
        r1,
        r2: r2.max(r1),
        rv,
    }
}
