//! English (Porter2)

use super::LanguageStemmer;
use crate::api::Language;
use crate::domain::charset::fold_apostrophe;
use crate::domain::{CharSet, RegionLayout, Rule, StemBuffer, Step, Word, Zone};

static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouy"))
    .with_r1_prefixes(&["gener", "commun", "arsen"]);

/// Words with a fixed stem, checked before anything else
const EXCEPTIONS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
    ("sky", "sky"),
    ("news", "news"),
    ("howe", "howe"),
    ("atlas", "atlas"),
    ("cosmos", "cosmos"),
    ("bias", "bias"),
    ("andes", "andes"),
];

/// Words left alone once step 1a has run
const INVARIANT_AFTER_1A: &[&str] = &[
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];

const DOUBLES: &[&str] = &["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

/// Letters that may precede a deletable `li`
const VALID_LI: &str = "cdeghkmnrt";

/// English stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

/// A short syllable ends at `end`: a non-vowel other than `w`, `x` or frozen
/// `y`, after a vowel, after a non-vowel; or a vowel at the start of the word
/// followed by a non-vowel.
fn short_syllable_before(buffer: &StemBuffer, end: usize) -> bool {
    if end < 2 {
        return false;
    }
    let (vowel, last) = (end - 2, end - 1);
    if !buffer.is_vowel(vowel) || buffer.is_vowel(last) {
        return false;
    }
    if vowel == 0 {
        return true;
    }
    let wxy = buffer.word().is_frozen(last) || matches!(buffer.char_at(last), Some('w' | 'x'));
    !wxy && !buffer.is_vowel(vowel - 1)
}

fn vowel_before_previous(buffer: &StemBuffer, start: usize) -> bool {
    start > 0 && buffer.has_vowel_before(start - 1)
}

fn vowel_before(buffer: &StemBuffer, start: usize) -> bool {
    buffer.has_vowel_before(start)
}

fn ied_ies(buffer: &mut StemBuffer, start: usize) -> bool {
    let with = if start > 1 { "i" } else { "ie" };
    buffer.replace_from(start, with);
    true
}

fn after_ed_ing(buffer: &mut StemBuffer) {
    if ["at", "bl", "iz"].iter().any(|s| buffer.ends_with(s)) {
        buffer.push_str("e");
    } else if DOUBLES.iter().any(|d| buffer.ends_with(d)) {
        buffer.drop_last(1);
    } else if buffer.regions().r1 >= buffer.len() && short_syllable_before(buffer, buffer.len()) {
        buffer.push_str("e");
    }
}

fn consonant_not_first(buffer: &StemBuffer, start: usize) -> bool {
    start > 1 && !buffer.is_vowel(start - 1)
}

fn preceded_by_l(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, "l")
}

fn valid_li(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, VALID_LI)
}

fn preceded_by_s_or_t(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, "st")
}

fn final_e(buffer: &mut StemBuffer, start: usize) -> bool {
    let deletable = buffer.in_zone(Zone::R2, start)
        || (buffer.in_zone(Zone::R1, start) && !short_syllable_before(buffer, start));
    if deletable {
        buffer.truncate(start);
    }
    deletable
}

const STEP_0: Step = Step::new(
    "english step 0",
    &[Rule::delete(&["'s'", "'s", "'"], Zone::Word)],
);

const STEP_1A: Step = Step::new(
    "english step 1a",
    &[
        Rule::replace(&["sses"], Zone::Word, "ss"),
        Rule::custom(&["ied", "ies"], Zone::Word, ied_ies),
        Rule::keep(&["us", "ss"]),
        Rule::delete(&["s"], Zone::Word).when(vowel_before_previous),
    ],
);

const STEP_1B: Step = Step::new(
    "english step 1b",
    &[
        Rule::replace(&["eed", "eedly"], Zone::R1, "ee"),
        Rule::delete(&["ed", "edly", "ing", "ingly"], Zone::Word)
            .when(vowel_before)
            .then(after_ed_ing),
    ],
);

const STEP_1C: Step = Step::new(
    "english step 1c",
    &[Rule::replace(&["y", "Y"], Zone::Word, "i").when(consonant_not_first)],
);

const STEP_2: Step = Step::new(
    "english step 2",
    &[
        Rule::replace(&["tional"], Zone::R1, "tion"),
        Rule::replace(&["enci"], Zone::R1, "ence"),
        Rule::replace(&["anci"], Zone::R1, "ance"),
        Rule::replace(&["abli"], Zone::R1, "able"),
        Rule::replace(&["entli"], Zone::R1, "ent"),
        Rule::replace(&["izer", "ization"], Zone::R1, "ize"),
        Rule::replace(&["ational", "ation", "ator"], Zone::R1, "ate"),
        Rule::replace(&["alism", "aliti", "alli"], Zone::R1, "al"),
        Rule::replace(&["fulness"], Zone::R1, "ful"),
        Rule::replace(&["ousli", "ousness"], Zone::R1, "ous"),
        Rule::replace(&["iveness", "iviti"], Zone::R1, "ive"),
        Rule::replace(&["biliti", "bli"], Zone::R1, "ble"),
        Rule::replace(&["ogi"], Zone::R1, "og").when(preceded_by_l),
        Rule::replace(&["fulli"], Zone::R1, "ful"),
        Rule::replace(&["lessli"], Zone::R1, "less"),
        Rule::delete(&["li"], Zone::R1).when(valid_li),
    ],
);

const STEP_3: Step = Step::new(
    "english step 3",
    &[
        Rule::replace(&["tional"], Zone::R1, "tion"),
        Rule::replace(&["ational"], Zone::R1, "ate"),
        Rule::replace(&["alize"], Zone::R1, "al"),
        Rule::replace(&["icate", "iciti", "ical"], Zone::R1, "ic"),
        Rule::delete(&["ful", "ness"], Zone::R1),
        Rule::delete(&["ative"], Zone::R2),
    ],
);

const STEP_4: Step = Step::new(
    "english step 4",
    &[
        Rule::delete(
            &[
                "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent",
                "ism", "ate", "iti", "ous", "ive", "ize",
            ],
            Zone::R2,
        ),
        Rule::delete(&["ion"], Zone::R2).when(preceded_by_s_or_t),
    ],
);

const STEP_5: Step = Step::new(
    "english step 5",
    &[
        Rule::custom(&["e"], Zone::R1, final_e),
        Rule::delete(&["l"], Zone::R2).when(preceded_by_l),
    ],
);

impl LanguageStemmer for English {
    fn language(&self) -> Language {
        Language::English
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn exception(&self, word: &Word) -> Option<&'static str> {
        EXCEPTIONS
            .iter()
            .find(|(form, _)| word.is(form))
            .map(|&(_, stem)| stem)
    }

    fn prelude(&self, word: &mut Word) {
        word.rewrite(|ch| (ch != '\'' && fold_apostrophe(ch) == '\'').then_some("'"));
        if word.starts_with("'") {
            word.drop_prefix(1);
        }
        if word.starts_with("y") {
            word.freeze(0);
        }
        for index in 1..word.len() {
            if word.char_at(index) == Some('y') && LAYOUT.is_vowel_at(word, index - 1) {
                word.freeze(index);
            }
        }
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        STEP_0.apply(buffer);
        STEP_1A.apply(buffer);
        if INVARIANT_AFTER_1A.iter().any(|w| buffer.word().is(w)) {
            return;
        }
        STEP_1B.apply(buffer);
        STEP_1C.apply(buffer);
        STEP_2.apply(buffer);
        STEP_3.apply(buffer);
        STEP_4.apply(buffer);
        STEP_5.apply(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        let mut text = word.to_string();
        English.stem(&mut text);
        text
    }

    #[test]
    fn test_same_stem_from_two_inflections() {
        assert_eq!(stem("documentation"), "document");
        assert_eq!(stem("documenting"), "document");
    }

    #[test]
    fn test_plurals_and_participles() {
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("ties"), "tie");
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("gas"), "gas");
        assert_eq!(stem("hopping"), "hop");
        assert_eq!(stem("hoping"), "hope");
        assert_eq!(stem("conflated"), "conflat");
        assert_eq!(stem("agreed"), "agre");
    }

    #[test]
    fn test_derivational_suffixes() {
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("generously"), "generous");
        assert_eq!(stem("hopefulness"), "hope");
        assert_eq!(stem("controlling"), "control");
        assert_eq!(stem("adjustment"), "adjust");
    }

    #[test]
    fn test_y_handling() {
        assert_eq!(stem("happy"), "happi");
        assert_eq!(stem("cry"), "cri");
        assert_eq!(stem("by"), "by");
        assert_eq!(stem("saying"), "say");
        assert_eq!(stem("Yelling"), "yell");
    }

    #[test]
    fn test_exceptions() {
        assert_eq!(stem("skies"), "sky");
        assert_eq!(stem("Dying"), "die");
        assert_eq!(stem("news"), "news");
        assert_eq!(stem("succeeding"), "succeed");
        assert_eq!(stem("proceed"), "proceed");
    }

    #[test]
    fn test_apostrophes() {
        assert_eq!(stem("'quoted"), "quot");
        assert_eq!(stem("dog's"), "dog");
        assert_eq!(stem("dogs\u{2019}"), "dog");
    }
}
