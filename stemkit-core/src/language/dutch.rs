//! Dutch

use super::{longest_ending, LanguageStemmer};
use crate::api::Language;
use crate::domain::{CharSet, RegionLayout, Rule, StemBuffer, Step, Word, Zone};

static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouyè")).with_r1_floor(3);

/// Dutch stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Dutch;

/// Flags carried between the steps of one call
#[derive(Debug, Default)]
struct CallState {
    e_found: bool,
}

fn undouble(buffer: &mut StemBuffer) {
    if ["kk", "dd", "tt"].iter().any(|pair| buffer.ends_with(pair)) {
        buffer.drop_last(1);
    }
}

/// `en` in R1 after a non-vowel that does not end `gem`
fn en_ending(buffer: &mut StemBuffer, start: usize) -> bool {
    let valid = buffer.in_zone(Zone::R1, start)
        && start > 0
        && buffer.is_non_vowel(start - 1)
        && !buffer.ends_with_before(start, "gem");
    if valid {
        buffer.truncate(start);
        undouble(buffer);
    }
    valid
}

/// Final `e` in R1 after a non-vowel
fn e_ending(buffer: &mut StemBuffer, state: &mut CallState) -> bool {
    state.e_found = false;
    let Some(start) = buffer.suffix_in(Zone::R1, "e") else {
        return false;
    };
    if !(start > 0 && buffer.is_non_vowel(start - 1)) {
        return false;
    }
    buffer.truncate(start);
    state.e_found = true;
    undouble(buffer);
    true
}

/// `s` or `se` in R1 after a non-vowel other than `j`
fn s_ending(buffer: &StemBuffer, start: usize) -> bool {
    start > 0 && buffer.is_non_vowel(start - 1) && buffer.char_at(start - 1) != Some('j')
}

const STEP_1: Step = Step::new(
    "dutch step 1",
    &[
        Rule::replace(&["heden"], Zone::R1, "heid"),
        Rule::custom(&["en", "ene"], Zone::R1, en_ending),
        Rule::delete(&["s", "se"], Zone::R1).when(s_ending),
    ],
);

fn step_3a(buffer: &mut StemBuffer) {
    let Some(start) = buffer.suffix_in(Zone::R2, "heid") else {
        return;
    };
    if buffer.ends_with_before(start, "c") {
        return;
    }
    buffer.truncate(start);
    if let Some(start) = buffer.suffix_start("en") {
        en_ending(buffer, start);
    }
}

fn step_3b(buffer: &mut StemBuffer, state: &mut CallState) {
    let suffixes = ["end", "ing", "ig", "lijk", "baar", "bar"];
    let Some((suffix, start)) = longest_ending(buffer, buffer.len(), &suffixes) else {
        return;
    };
    if !buffer.in_zone(Zone::R2, start) {
        return;
    }
    match suffix {
        "end" | "ing" => {
            buffer.truncate(start);
            match buffer.suffix_in(Zone::R2, "ig") {
                Some(ig) if !buffer.ends_with_before(ig, "e") => buffer.truncate(ig),
                _ => undouble(buffer),
            }
        }
        "ig" => {
            if !buffer.ends_with_before(start, "e") {
                buffer.truncate(start);
            }
        }
        "lijk" => {
            buffer.truncate(start);
            e_ending(buffer, state);
        }
        "baar" => buffer.truncate(start),
        _ => {
            if state.e_found {
                buffer.truncate(start);
            }
        }
    }
}

/// Undouble the vowel in a final consonant, long vowel, consonant group
fn step_4(buffer: &mut StemBuffer) {
    let len = buffer.len();
    if len < 4 {
        return;
    }
    let last = len - 1;
    let frozen_i = buffer.word().is_frozen(last) && buffer.char_at(last) == Some('i');
    if !buffer.is_non_vowel(last) || frozen_i {
        return;
    }
    let doubled = ["aa", "ee", "oo", "uu"]
        .iter()
        .any(|pair| buffer.ends_with_before(last, pair));
    if doubled && buffer.is_non_vowel(last - 3) {
        buffer.remove(last - 1);
    }
}

impl LanguageStemmer for Dutch {
    fn language(&self) -> Language {
        Language::Dutch
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn prelude(&self, word: &mut Word) {
        word.rewrite(|ch| match ch {
            'ä' | 'á' => Some("a"),
            'ë' | 'é' => Some("e"),
            'ï' | 'í' => Some("i"),
            'ö' | 'ó' => Some("o"),
            'ü' | 'ú' => Some("u"),
            _ => None,
        });
        if word.starts_with("y") {
            word.freeze(0);
        }
        for index in 1..word.len() {
            if !LAYOUT.is_vowel_at(word, index - 1) {
                continue;
            }
            match word.char_at(index) {
                Some('i') if LAYOUT.is_vowel_at(word, index + 1) => word.freeze(index),
                Some('y') => word.freeze(index),
                _ => {}
            }
        }
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        let mut state = CallState::default();
        STEP_1.apply(buffer);
        e_ending(buffer, &mut state);
        step_3a(buffer);
        step_3b(buffer, &mut state);
        step_4(buffer);
        log::trace!("dutch steps 2-4 -> {:?}", buffer.word());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        let mut text = word.to_string();
        Dutch.stem(&mut text);
        text
    }

    #[test]
    fn test_en_ending() {
        assert_eq!(stem("bomen"), "bom");
        assert_eq!(stem("opheffen"), "opheff");
        assert_eq!(stem("gemen"), "gemen");
    }

    #[test]
    fn test_heden_and_heid() {
        assert_eq!(stem("mogelijkheden"), "mogelijk");
    }

    #[test]
    fn test_lijk_then_e_ending() {
        assert_eq!(stem("lichamelijk"), "licham");
    }

    #[test]
    fn test_frozen_i_between_vowels() {
        assert_eq!(stem("mooie"), "mooi");
    }

    #[test]
    fn test_long_vowel_undoubled() {
        assert_eq!(stem("kaas"), "kas");
        assert_eq!(stem("maan"), "man");
    }

    #[test]
    fn test_accents_folded() {
        assert_eq!(stem("café"), "caf");
    }
}
