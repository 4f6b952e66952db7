//! The mutable word buffer shared by every pipeline stage

use super::charset::eq_ignore_case;
use smallvec::SmallVec;
use std::fmt;

/// Inline capacity; longer words spill to the heap
const INLINE: usize = 24;

/// A word as a sequence of code points plus a parallel mask marking letters
/// frozen in their consonant role (`y` between vowels and the like).
///
/// Frozen letters keep their lowercase form in the buffer. In suffix literals
/// and replacements an uppercase `I`, `U` or `Y` stands for the frozen letter,
/// every other literal character matches only unfrozen letters.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Word {
    chars: SmallVec<[char; INLINE]>,
    frozen: SmallVec<[bool; INLINE]>,
}

/// Check whether a literal character matches a word position
#[inline]
fn literal_matches(literal: char, ch: char, frozen: bool) -> bool {
    match literal {
        'I' | 'U' | 'Y' => frozen && ch == literal.to_ascii_lowercase(),
        _ => !frozen && eq_ignore_case(ch, literal),
    }
}

/// Translate a literal character to its buffer form and frozen flag
#[inline]
fn literal_char(literal: char) -> (char, bool) {
    match literal {
        'I' | 'U' | 'Y' => (literal.to_ascii_lowercase(), true),
        _ => (literal, false),
    }
}

impl Word {
    /// Create a word with no frozen letters
    pub fn new(text: &str) -> Self {
        let chars: SmallVec<[char; INLINE]> = text.chars().collect();
        let frozen = SmallVec::from_elem(false, chars.len());
        Self { chars, frozen }
    }

    /// Number of code points
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the word is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The code points of the word
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at a position
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Unfrozen character at a position; frozen letters read as `None`
    #[inline]
    pub fn plain_char_at(&self, index: usize) -> Option<char> {
        match self.frozen.get(index) {
            Some(false) => self.char_at(index),
            _ => None,
        }
    }

    /// Last character, frozen or not
    #[inline]
    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Check whether a position holds a frozen letter
    #[inline]
    pub fn is_frozen(&self, index: usize) -> bool {
        self.frozen.get(index).copied().unwrap_or(false)
    }

    /// Freeze the letter at a position
    pub fn freeze(&mut self, index: usize) {
        if let Some(flag) = self.frozen.get_mut(index) {
            *flag = true;
        }
    }

    /// Release every frozen letter
    pub fn thaw_all(&mut self) {
        self.frozen.iter_mut().for_each(|flag| *flag = false);
    }

    /// Check whether any letter is frozen
    pub fn has_frozen(&self) -> bool {
        self.frozen.iter().any(|&flag| flag)
    }

    /// Check whether `literal` occurs at `start`
    pub fn matches_at(&self, start: usize, literal: &str) -> bool {
        let mut index = start;
        for lit in literal.chars() {
            match self.chars.get(index) {
                Some(&ch) if literal_matches(lit, ch, self.frozen[index]) => index += 1,
                _ => return false,
            }
        }
        true
    }

    /// Start position of `literal` if the word ends with it
    pub fn suffix_start(&self, literal: &str) -> Option<usize> {
        let mut index = self.chars.len();
        for lit in literal.chars().rev() {
            if index == 0 {
                return None;
            }
            index -= 1;
            if !literal_matches(lit, self.chars[index], self.frozen[index]) {
                return None;
            }
        }
        Some(index)
    }

    /// Check whether the word ends with `literal`
    #[inline]
    pub fn ends_with(&self, literal: &str) -> bool {
        self.suffix_start(literal).is_some()
    }

    /// Check whether the text before `end` ends with `literal`
    pub fn ends_with_before(&self, end: usize, literal: &str) -> bool {
        let count = literal.chars().count();
        count <= end && self.matches_at(end - count, literal)
    }

    /// Check whether the word starts with `literal`
    #[inline]
    pub fn starts_with(&self, literal: &str) -> bool {
        self.matches_at(0, literal)
    }

    /// Check whether the whole word equals `literal`
    pub fn is(&self, literal: &str) -> bool {
        literal.chars().count() == self.chars.len() && self.matches_at(0, literal)
    }

    /// Shorten the word to `len` code points
    pub fn truncate(&mut self, len: usize) {
        self.chars.truncate(len);
        self.frozen.truncate(len);
    }

    /// Remove the first `count` code points
    pub fn drop_prefix(&mut self, count: usize) {
        let count = count.min(self.chars.len());
        self.chars.drain(..count);
        self.frozen.drain(..count);
    }

    /// Append a literal
    pub fn push_literal(&mut self, literal: &str) {
        for lit in literal.chars() {
            let (ch, frozen) = literal_char(lit);
            self.chars.push(ch);
            self.frozen.push(frozen);
        }
    }

    /// Replace everything from `start` to the end with `literal`
    pub fn replace_from(&mut self, start: usize, literal: &str) {
        self.truncate(start);
        self.push_literal(literal);
    }

    /// Overwrite a single position with an unfrozen character
    pub fn set(&mut self, index: usize, ch: char) {
        if index < self.chars.len() {
            self.chars[index] = ch;
            self.frozen[index] = false;
        }
    }

    /// Remove a single position
    pub fn remove(&mut self, index: usize) {
        if index < self.chars.len() {
            self.chars.remove(index);
            self.frozen.remove(index);
        }
    }

    /// Rewrite unfrozen characters through `map`; a `Some` result replaces
    /// the character with the returned literal.
    pub fn rewrite<F>(&mut self, map: F)
    where
        F: Fn(char) -> Option<&'static str>,
    {
        if !self.chars.iter().any(|&ch| map(ch).is_some()) {
            return;
        }
        let mut rewritten = Word::default();
        for (&ch, &frozen) in self.chars.iter().zip(self.frozen.iter()) {
            match map(ch) {
                Some(literal) if !frozen => rewritten.push_literal(literal),
                _ => {
                    rewritten.chars.push(ch);
                    rewritten.frozen.push(frozen);
                }
            }
        }
        *self = rewritten;
    }

    /// Combine each occurrence of `base` followed by `mark` into `combined`
    pub fn compose(&mut self, base: char, mark: char, combined: char) {
        let mut index = 0;
        while index + 1 < self.chars.len() {
            if self.chars[index] == base && self.chars[index + 1] == mark {
                self.chars[index] = combined;
                self.frozen[index] = false;
                self.remove(index + 1);
            }
            index += 1;
        }
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marked: String = self
            .chars
            .iter()
            .zip(self.frozen.iter())
            .map(|(&ch, &frozen)| {
                if frozen {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                }
            })
            .collect();
        f.debug_tuple("Word").field(&marked).finish()
    }
}
