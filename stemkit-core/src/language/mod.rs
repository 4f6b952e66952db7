//! Language-specific stemmers
//!
//! Each language is a unit struct implementing [`LanguageStemmer`]. The trait
//! supplies the shared front door ([`LanguageStemmer::stem`]); a language only
//! describes its regions, its exceptions, its prelude and postlude, and the
//! order in which its steps run.

use crate::api::Language;
use crate::domain::charset::{is_blank, normalize};
use crate::domain::{RegionLayout, StemBuffer, Word};

mod danish;
mod dutch;
mod english;
mod finnish;
mod french;
mod german;
mod italian;
mod norwegian;
mod portuguese;
mod russian;
mod spanish;
mod swedish;

pub use danish::Danish;
pub use dutch::Dutch;
pub use english::English;
pub use finnish::Finnish;
pub use french::French;
pub use german::German;
pub use italian::Italian;
pub use norwegian::Norwegian;
pub use portuguese::Portuguese;
pub use russian::Russian;
pub use spanish::Spanish;
pub use swedish::Swedish;

/// Suffix-stripping stemmer for one language
///
/// Implementations hold no state: anything a pipeline needs to remember
/// between steps lives on the stack of [`LanguageStemmer::run_steps`].
pub trait LanguageStemmer: Send + Sync {
    /// Language identity
    fn language(&self) -> Language;

    /// Vowels and region rules
    fn layout(&self) -> &'static RegionLayout;

    /// Words with fewer code points are returned unchanged
    fn min_length(&self) -> usize {
        3
    }

    /// Whole-word exceptions with a fixed stem
    fn exception(&self, _word: &Word) -> Option<&'static str> {
        None
    }

    /// Letter folding, clitic stripping and semivowel freezing
    fn prelude(&self, _word: &mut Word) {}

    /// The language's step pipeline
    fn run_steps(&self, buffer: &mut StemBuffer);

    /// Final normalization after every step has run
    fn postlude(&self, _word: &mut Word) {}

    /// Stem a word in place
    fn stem(&self, word: &mut String) {
        stem_word(self, word);
    }
}

/// Front door shared by every language
pub fn stem_word<S: LanguageStemmer + ?Sized>(stemmer: &S, text: &mut String) {
    if is_blank(text) {
        return;
    }
    let min_length = stemmer.min_length();
    if text.chars().count() < min_length {
        return;
    }

    let mut word = Word::new(&normalize(text));
    if let Some(fixed) = stemmer.exception(&word) {
        text.clear();
        text.push_str(fixed);
        return;
    }

    stemmer.prelude(&mut word);
    if word.len() >= min_length {
        let mut buffer = StemBuffer::new(word, stemmer.layout());
        stemmer.run_steps(&mut buffer);
        word = buffer.into_word();
    }
    stemmer.postlude(&mut word);
    word.thaw_all();

    *text = word.to_string();
}

/// Static stemmer for a language
pub fn stemmer_for(language: Language) -> &'static dyn LanguageStemmer {
    match language {
        Language::Danish => &Danish,
        Language::Dutch => &Dutch,
        Language::English => &English,
        Language::Finnish => &Finnish,
        Language::French => &French,
        Language::German => &German,
        Language::Italian => &Italian,
        Language::Norwegian => &Norwegian,
        Language::Portuguese => &Portuguese,
        Language::Russian => &Russian,
        Language::Spanish => &Spanish,
        Language::Swedish => &Swedish,
    }
}

/// Longest of `literals` ending right before `end`, with its start
pub(crate) fn longest_ending<'a>(
    buffer: &StemBuffer,
    end: usize,
    literals: &[&'a str],
) -> Option<(&'a str, usize)> {
    literals
        .iter()
        .filter(|&&literal| buffer.ends_with_before(end, literal))
        .map(|&literal| (literal, end - literal.chars().count()))
        .min_by_key(|&(_, start)| start)
}

/// Strip an elided article or pronoun such as `l'` or `dell'` from the
/// front of a word. Both the ASCII and the typographic apostrophe count.
pub(crate) fn strip_elision(word: &mut Word, prefixes: &[&str]) {
    let Some(apostrophe) = word
        .chars()
        .iter()
        .position(|&ch| ch == '\'' || ch == '\u{2019}')
    else {
        return;
    };
    if apostrophe + 1 >= word.len() {
        return;
    }
    let head: String = word.chars()[..apostrophe].iter().collect();
    if prefixes.contains(&head.as_str()) {
        word.drop_prefix(apostrophe + 1);
    }
}
