//! Suffix primitives shared by the rule tables and hand-written steps

use super::buffer::StemBuffer;
use super::regions::Zone;
use super::word::Word;

/// Result of a conditional suffix deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixMatch {
    /// The word does not end with the literal
    Absent,
    /// The literal matched but a region or vowel condition rejected it
    Rejected,
    /// The literal was removed
    Deleted,
}

impl SuffixMatch {
    #[inline]
    pub fn deleted(self) -> bool {
        self == SuffixMatch::Deleted
    }
}

/// True iff the word ends with `literal`, compared letter by letter
#[inline]
pub fn is_suffix(word: &Word, literal: &str) -> bool {
    word.ends_with(literal)
}

/// True iff the word ends with `literal` and the match starts at or after
/// `region_offset`
pub fn is_suffix_in_region(word: &Word, region_offset: usize, literal: &str) -> bool {
    word.suffix_start(literal)
        .is_some_and(|start| start >= region_offset)
}

/// Remove `literal` if it is a suffix lying in `zone`. With
/// `require_preceding_vowel` the letter before the suffix must also be a
/// vowel.
pub fn delete_if_in_region(
    buffer: &mut StemBuffer,
    zone: Zone,
    literal: &str,
    require_preceding_vowel: bool,
) -> SuffixMatch {
    let Some(start) = buffer.suffix_start(literal) else {
        return SuffixMatch::Absent;
    };
    if !buffer.in_zone(zone, start) {
        return SuffixMatch::Rejected;
    }
    if require_preceding_vowel && !(start > 0 && buffer.is_vowel(start - 1)) {
        return SuffixMatch::Rejected;
    }
    buffer.truncate(start);
    SuffixMatch::Deleted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charset::CharSet;
    use crate::domain::regions::RegionLayout;

    static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouy"));

    #[test]
    fn test_is_suffix() {
        let word = Word::new("Hopeful");
        assert!(is_suffix(&word, "FUL"));
        assert!(is_suffix(&word, "ful"));
        assert!(!is_suffix(&word, "fuls"));
    }

    #[test]
    fn test_is_suffix_in_region() {
        let word = Word::new("hopeful");
        assert!(is_suffix_in_region(&word, 4, "ful"));
        assert!(!is_suffix_in_region(&word, 5, "ful"));
        assert!(is_suffix_in_region(&word, 0, ""));
    }

    #[test]
    fn test_delete_if_in_region() {
        let mut buffer = StemBuffer::new(Word::new("hopeful"), &LAYOUT);
        assert_eq!(
            delete_if_in_region(&mut buffer, Zone::R1, "less", false),
            SuffixMatch::Absent
        );
        assert_eq!(
            delete_if_in_region(&mut buffer, Zone::R2, "ful", false),
            SuffixMatch::Rejected
        );
        assert_eq!(
            delete_if_in_region(&mut buffer, Zone::R1, "ful", false),
            SuffixMatch::Deleted
        );
        assert_eq!(buffer.word().to_string(), "hope");
    }

    #[test]
    fn test_delete_requires_preceding_vowel() {
        let mut buffer = StemBuffer::new(Word::new("walked"), &LAYOUT);
        assert_eq!(
            delete_if_in_region(&mut buffer, Zone::Word, "ed", true),
            SuffixMatch::Rejected
        );
        let mut buffer = StemBuffer::new(Word::new("agreed"), &LAYOUT);
        assert!(delete_if_in_region(&mut buffer, Zone::Word, "d", true).deleted());
        assert_eq!(buffer.word().to_string(), "agree");
    }
}
