//! German

use super::LanguageStemmer;
use crate::api::Language;
use crate::domain::{CharSet, RegionLayout, Rule, StemBuffer, Step, Word, Zone};

static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouyäöü")).with_r1_floor(3);

/// Letters that may precede a deletable `s`
const S_ENDING: &str = "bdfghklmnrt";

/// Letters that may precede a deletable `st`
const ST_ENDING: &str = "bdfghklmnt";

/// German stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct German;

fn s_ending(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, S_ENDING)
}

/// The letter before `st` is a valid ending with at least three letters
/// before it
fn st_ending(buffer: &StemBuffer, start: usize) -> bool {
    start >= 4 && buffer.preceded_by(start, ST_ENDING)
}

fn not_after_e(buffer: &StemBuffer, start: usize) -> bool {
    !buffer.ends_with_before(start, "e")
}

fn strip_niss(buffer: &mut StemBuffer) {
    if buffer.ends_with("niss") {
        buffer.drop_last(1);
    }
}

fn ig_after_end_ung(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_in(Zone::R2, "ig") {
        if not_after_e(buffer, start) {
            buffer.truncate(start);
        }
    }
}

fn after_lich_heit(buffer: &mut StemBuffer) {
    AFTER_LICH_HEIT.apply(buffer);
}

fn after_keit(buffer: &mut StemBuffer) {
    AFTER_KEIT.apply(buffer);
}

const STEP_1: Step = Step::new(
    "german step 1",
    &[
        Rule::delete(&["em", "ern", "er"], Zone::R1),
        Rule::delete(&["e", "en", "es"], Zone::R1).then(strip_niss),
        Rule::delete(&["s"], Zone::R1).when(s_ending),
    ],
);

const STEP_2: Step = Step::new(
    "german step 2",
    &[
        Rule::delete(&["en", "er", "est"], Zone::R1),
        Rule::delete(&["st"], Zone::R1).when(st_ending),
    ],
);

const STEP_3: Step = Step::new(
    "german step 3",
    &[
        Rule::delete(&["end", "ung"], Zone::R2).then(ig_after_end_ung),
        Rule::delete(&["ig", "ik", "isch"], Zone::R2).when(not_after_e),
        Rule::delete(&["lich", "heit"], Zone::R2).then(after_lich_heit),
        Rule::delete(&["keit"], Zone::R2).then(after_keit),
    ],
);

const AFTER_LICH_HEIT: Step = Step::new(
    "german step 3 (lich/heit)",
    &[Rule::delete(&["er", "en"], Zone::R1)],
);

const AFTER_KEIT: Step = Step::new(
    "german step 3 (keit)",
    &[Rule::delete(&["lich", "ig"], Zone::R2)],
);

impl LanguageStemmer for German {
    fn language(&self) -> Language {
        Language::German
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn prelude(&self, word: &mut Word) {
        word.rewrite(|ch| (ch == 'ß').then_some("ss"));
        for index in 1..word.len().saturating_sub(1) {
            if matches!(word.char_at(index), Some('u' | 'y'))
                && LAYOUT.is_vowel_at(word, index - 1)
                && LAYOUT.is_vowel_at(word, index + 1)
            {
                word.freeze(index);
            }
        }
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        STEP_1.apply(buffer);
        STEP_2.apply(buffer);
        STEP_3.apply(buffer);
    }

    fn postlude(&self, word: &mut Word) {
        word.rewrite(|ch| match ch {
            'ä' => Some("a"),
            'ö' => Some("o"),
            'ü' => Some("u"),
            _ => None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        let mut text = word.to_string();
        German.stem(&mut text);
        text
    }

    #[test]
    fn test_inflection() {
        assert_eq!(stem("aufeinanderfolgenden"), "aufeinanderfolg");
        assert_eq!(stem("Häuser"), "haus");
        assert_eq!(stem("kinder"), "kind");
    }

    #[test]
    fn test_eszett_and_umlaut() {
        assert_eq!(stem("Straße"), "strass");
        assert_eq!(stem("größer"), "gross");
    }

    #[test]
    fn test_niss() {
        assert_eq!(stem("ergebnisse"), "ergebnis");
    }

    #[test]
    fn test_derivational() {
        assert_eq!(stem("freundlichkeit"), "freundlich");
        assert_eq!(stem("ordnung"), "ordnung");
        assert_eq!(stem("bedeutung"), "bedeut");
    }

    #[test]
    fn test_semivowel_between_vowels() {
        assert_eq!(stem("bauen"), "bau");
        assert_eq!(stem("feuer"), "feu");
    }
}
