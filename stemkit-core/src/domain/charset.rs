//! Character classification for stemming
//!
//! Every language describes its vowels as a [`CharSet`]. Classification is a
//! pure lookup: characters outside a set are simply non-members, so letters
//! from scripts a language does not know pass through the pipeline untouched.

/// Classification of a single code point relative to a language's vowels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
    /// Member of the language's vowel set
    Vowel,
    /// Alphabetic character outside the vowel set
    Consonant,
    /// Whitespace
    Separator,
    /// Digits, punctuation, symbols
    Other,
}

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharacterClass;

    /// Check if character is a vowel
    fn is_vowel(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::Vowel)
    }

    /// Check if character is a consonant
    fn is_consonant(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::Consonant)
    }

    /// Check if character separates words
    fn is_separator(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::Separator)
    }
}

/// A fixed set of letters, such as a language's vowels or the letters that
/// may precede a deletable `s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharSet(&'static str);

impl CharSet {
    /// Create a set from the letters of a string
    pub const fn new(letters: &'static str) -> Self {
        Self(letters)
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.0.as_bytes().contains(&(ch as u8))
        } else {
            self.0.contains(ch)
        }
    }

    /// Check membership of an optional character; `None` is never a member
    #[inline]
    pub fn contains_opt(&self, ch: Option<char>) -> bool {
        ch.is_some_and(|c| self.contains(c))
    }

    /// The letters making up the set
    pub fn letters(&self) -> &'static str {
        self.0
    }
}

impl CharacterClassifier for CharSet {
    fn classify(&self, ch: char) -> CharacterClass {
        if self.contains(ch) {
            CharacterClass::Vowel
        } else if ch.is_alphabetic() {
            CharacterClass::Consonant
        } else if ch.is_whitespace() {
            CharacterClass::Separator
        } else {
            CharacterClass::Other
        }
    }
}

/// Fold a full-width ASCII variant (U+FF01..U+FF5E) and the ideographic space
/// to their narrow forms. Other characters are returned unchanged.
#[inline]
pub fn fold_width(ch: char) -> char {
    match ch {
        '\u{FF01}'..='\u{FF5E}' => {
            char::from_u32(ch as u32 - 0xFF01 + 0x21).unwrap_or(ch)
        }
        '\u{3000}' => ' ',
        _ => ch,
    }
}

/// Fold typographic apostrophes to the ASCII apostrophe
#[inline]
pub fn fold_apostrophe(ch: char) -> char {
    match ch {
        '\u{2019}' | '\u{2018}' | '\u{201B}' | '\u{02BC}' => '\'',
        _ => ch,
    }
}

/// Width-fold and lowercase a word before any region computation
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        out.extend(fold_width(ch).to_lowercase());
    }
    out
}

/// Letter-by-letter case-insensitive comparison.
///
/// Accented pairs such as `É`/`é` or `Ø`/`ø` compare equal through their
/// single-character lowercase mappings; characters whose lowercase form
/// expands to several code points only match themselves.
#[inline]
pub fn eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(&b);
    }
    single_lowercase(a).is_some_and(|la| Some(la) == single_lowercase(b))
}

fn single_lowercase(ch: char) -> Option<char> {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// True for the empty string and strings made only of separators
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|ch| fold_width(ch).is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOWELS: CharSet = CharSet::new("aeiouyæåø");

    #[test]
    fn test_classify() {
        assert_eq!(VOWELS.classify('a'), CharacterClass::Vowel);
        assert_eq!(VOWELS.classify('ø'), CharacterClass::Vowel);
        assert_eq!(VOWELS.classify('b'), CharacterClass::Consonant);
        assert_eq!(VOWELS.classify(' '), CharacterClass::Separator);
        assert_eq!(VOWELS.classify('7'), CharacterClass::Other);
    }

    #[test]
    fn test_unknown_script_is_not_a_vowel() {
        assert!(!VOWELS.is_vowel('я'));
        assert!(!VOWELS.is_vowel('日'));
        assert!(VOWELS.is_consonant('я'));
    }

    #[test]
    fn test_contains_opt() {
        assert!(VOWELS.contains_opt(Some('e')));
        assert!(!VOWELS.contains_opt(Some('t')));
        assert!(!VOWELS.contains_opt(None));
    }

    #[test]
    fn test_fold_width() {
        assert_eq!(fold_width('Ａ'), 'A');
        assert_eq!(fold_width('ｚ'), 'z');
        assert_eq!(fold_width('！'), '!');
        assert_eq!(fold_width('\u{3000}'), ' ');
        assert_eq!(fold_width('é'), 'é');
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("ＲＵＮＮＩＮＧ"), "running");
        assert_eq!(normalize("Ärger"), "ärger");
        assert_eq!(normalize("ПРИВЕТ"), "привет");
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case('A', 'a'));
        assert!(eq_ignore_case('É', 'é'));
        assert!(eq_ignore_case('Ж', 'ж'));
        assert!(!eq_ignore_case('e', 'é'));
        assert!(!eq_ignore_case('a', 'b'));
    }

    #[test]
    fn test_fold_apostrophe() {
        assert_eq!(fold_apostrophe('’'), '\'');
        assert_eq!(fold_apostrophe('x'), 'x');
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n"));
        assert!(is_blank("\u{3000}"));
        assert!(!is_blank(" a "));
    }
}
