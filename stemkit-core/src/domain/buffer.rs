//! Word plus its current regions

use super::regions::{recompute_regions, RegionLayout, Regions, Zone};
use super::word::Word;

/// The state a pipeline step works on.
///
/// Every mutation goes through this type so the regions always describe the
/// current word content.
#[derive(Debug, Clone)]
pub struct StemBuffer {
    word: Word,
    regions: Regions,
    layout: &'static RegionLayout,
}

impl StemBuffer {
    /// Wrap a word and compute its regions
    pub fn new(word: Word, layout: &'static RegionLayout) -> Self {
        let regions = recompute_regions(&word, layout);
        Self {
            word,
            regions,
            layout,
        }
    }

    /// The word being stemmed
    #[inline]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Current region boundaries
    #[inline]
    pub fn regions(&self) -> Regions {
        self.regions
    }

    #[inline]
    pub fn layout(&self) -> &'static RegionLayout {
        self.layout
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Character at a position
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.word.char_at(index)
    }

    /// Unfrozen character at a position
    #[inline]
    pub fn plain_char_at(&self, index: usize) -> Option<char> {
        self.word.plain_char_at(index)
    }

    /// Unfrozen character just before `index`
    #[inline]
    pub fn plain_char_before(&self, index: usize) -> Option<char> {
        index.checked_sub(1).and_then(|i| self.word.plain_char_at(i))
    }

    /// Check whether the unfrozen letter before `start` is one of `letters`
    #[inline]
    pub fn preceded_by(&self, start: usize, letters: &str) -> bool {
        self.plain_char_before(start)
            .is_some_and(|ch| letters.contains(ch))
    }

    /// Check whether a position holds an unfrozen vowel of the language
    #[inline]
    pub fn is_vowel(&self, index: usize) -> bool {
        self.layout.is_vowel_at(&self.word, index)
    }

    /// Check whether a position exists and holds anything but a vowel
    #[inline]
    pub fn is_non_vowel(&self, index: usize) -> bool {
        index < self.word.len() && !self.is_vowel(index)
    }

    /// Check whether any vowel occurs before `end`
    pub fn has_vowel_before(&self, end: usize) -> bool {
        (0..end.min(self.word.len())).any(|i| self.is_vowel(i))
    }

    #[inline]
    pub fn ends_with(&self, literal: &str) -> bool {
        self.word.ends_with(literal)
    }

    #[inline]
    pub fn suffix_start(&self, literal: &str) -> Option<usize> {
        self.word.suffix_start(literal)
    }

    /// Check whether the text before `end` ends with `literal`
    #[inline]
    pub fn ends_with_before(&self, end: usize, literal: &str) -> bool {
        self.word.ends_with_before(end, literal)
    }

    /// Offset at which a zone starts
    #[inline]
    pub fn zone_start(&self, zone: Zone) -> usize {
        self.regions.start(zone)
    }

    /// Check whether a position lies inside a zone
    #[inline]
    pub fn in_zone(&self, zone: Zone, position: usize) -> bool {
        position >= self.zone_start(zone)
    }

    /// Start of `literal` if the word ends with it and it lies in `zone`
    pub fn suffix_in(&self, zone: Zone, literal: &str) -> Option<usize> {
        self.suffix_start(literal)
            .filter(|&start| self.in_zone(zone, start))
    }

    /// Shorten the word to `len` code points
    pub fn truncate(&mut self, len: usize) {
        self.word.truncate(len);
        self.refresh();
    }

    /// Remove the last `count` code points
    pub fn drop_last(&mut self, count: usize) {
        let len = self.word.len().saturating_sub(count);
        self.truncate(len);
    }

    /// Replace everything from `start` with `literal`
    pub fn replace_from(&mut self, start: usize, literal: &str) {
        self.word.replace_from(start, literal);
        self.refresh();
    }

    /// Append a literal
    pub fn push_str(&mut self, literal: &str) {
        self.word.push_literal(literal);
        self.refresh();
    }

    /// Remove a single position
    pub fn remove(&mut self, index: usize) {
        self.word.remove(index);
        self.refresh();
    }

    /// Overwrite a single position
    pub fn set(&mut self, index: usize, ch: char) {
        self.word.set(index, ch);
        self.refresh();
    }

    /// Give the word back once the pipeline has finished
    pub fn into_word(self) -> Word {
        self.word
    }

    fn refresh(&mut self) {
        self.regions = recompute_regions(&self.word, self.layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charset::CharSet;

    static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouy"));

    #[test]
    fn test_regions_follow_mutations() {
        let mut buffer = StemBuffer::new(Word::new("generalization"), &LAYOUT);
        assert_eq!(buffer.regions().r1, 3);
        assert_eq!(buffer.regions().r2, 5);

        buffer.truncate(4);
        assert_eq!(buffer.word().to_string(), "gene");
        assert_eq!(buffer.regions().r1, 3);
        assert_eq!(buffer.regions().r2, 4);

        buffer.push_str("ric");
        assert_eq!(buffer.regions().r2, 5);
    }

    #[test]
    fn test_suffix_in_zone() {
        let buffer = StemBuffer::new(Word::new("beautiful"), &LAYOUT);
        assert_eq!(buffer.suffix_in(Zone::R1, "ful"), Some(6));
        assert_eq!(buffer.suffix_in(Zone::R2, "ful"), None);
        assert_eq!(buffer.suffix_in(Zone::R2, "ul"), Some(7));
        assert_eq!(buffer.suffix_in(Zone::Word, "xful"), None);
    }

    #[test]
    fn test_vowel_queries() {
        let buffer = StemBuffer::new(Word::new("trying"), &LAYOUT);
        assert!(buffer.is_vowel(2));
        assert!(buffer.is_non_vowel(0));
        assert!(!buffer.is_non_vowel(6));
        assert!(buffer.has_vowel_before(3));
        assert!(!buffer.has_vowel_before(2));
        assert_eq!(buffer.plain_char_before(0), None);
        assert_eq!(buffer.plain_char_before(1), Some('t'));
        assert!(buffer.preceded_by(2, "rs"));
        assert!(!buffer.preceded_by(0, "rs"));
    }

    #[test]
    fn test_drop_last_saturates() {
        let mut buffer = StemBuffer::new(Word::new("ab"), &LAYOUT);
        buffer.drop_last(5);
        assert!(buffer.is_empty());
        assert_eq!(buffer.regions(), Regions::unset(0));
    }
}
