//! Finnish

use super::{longest_ending, LanguageStemmer};
use crate::api::Language;
use crate::domain::{CharSet, RegionLayout, Rule, StemBuffer, Step, Zone};

static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouyäö"));

/// Vowels that can precede `i` in `siin`, `den` and `tten`
const V2: CharSet = CharSet::new("aeiouäö");

const CONSONANTS: CharSet = CharSet::new("bcdfghjklmnpqrstvwxz");

/// Final vowels dropped after a consonant
const AEI: CharSet = CharSet::new("aäei");

const LONG_VOWELS: &[&str] = &["aa", "ee", "ii", "oo", "uu", "ää", "öö"];

/// Finnish stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Finnish;

/// Flags carried between the steps of one call
#[derive(Debug, Default)]
struct CallState {
    ending_removed: bool,
}

fn long_vowel_before(buffer: &StemBuffer, end: usize) -> bool {
    LONG_VOWELS
        .iter()
        .any(|pair| buffer.ends_with_before(end, pair))
}

fn after_particle_end(buffer: &StemBuffer, start: usize) -> bool {
    (start > 0 && buffer.is_vowel(start - 1)) || buffer.preceded_by(start, "nt")
}

fn not_after_k(buffer: &StemBuffer, start: usize) -> bool {
    !buffer.preceded_by(start, "k")
}

fn not_after_po(buffer: &StemBuffer, start: usize) -> bool {
    !buffer.ends_with_before(start, "po")
}

fn kse_to_ksi(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_start("kse") {
        buffer.replace_from(start, "ksi");
    }
}

fn after_back_case(buffer: &StemBuffer, start: usize) -> bool {
    ["ta", "ssa", "sta", "lla", "lta", "na"]
        .iter()
        .any(|case| buffer.ends_with_before(start, case))
}

fn after_front_case(buffer: &StemBuffer, start: usize) -> bool {
    ["tä", "ssä", "stä", "llä", "ltä", "nä"]
        .iter()
        .any(|case| buffer.ends_with_before(start, case))
}

fn after_lle_ine(buffer: &StemBuffer, start: usize) -> bool {
    buffer.ends_with_before(start, "lle") || buffer.ends_with_before(start, "ine")
}

/// Illative `hVn` repeats the vowel before it
fn vowel_repeated(buffer: &StemBuffer, start: usize) -> bool {
    buffer.plain_char_before(start) == buffer.plain_char_at(start + 1)
}

/// A vowel followed by `i` precedes the ending
fn after_vowel_i(buffer: &StemBuffer, start: usize) -> bool {
    start >= 2 && buffer.preceded_by(start, "i") && V2.contains_opt(buffer.plain_char_at(start - 2))
}

fn after_long_vowel(buffer: &StemBuffer, start: usize) -> bool {
    long_vowel_before(buffer, start)
}

/// A consonant and a vowel precede the ending
fn after_consonant_vowel(buffer: &StemBuffer, start: usize) -> bool {
    start >= 2
        && buffer.is_vowel(start - 1)
        && CONSONANTS.contains_opt(buffer.plain_char_at(start - 2))
}

fn after_e(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, "e")
}

/// Genitive or illative `n`; a long vowel or `ie` before it loses its last
/// letter too
fn genitive_or_illative(buffer: &mut StemBuffer, start: usize) -> bool {
    if long_vowel_before(buffer, start) || buffer.ends_with_before(start, "ie") {
        buffer.truncate(start - 1);
    } else {
        buffer.truncate(start);
    }
    true
}

const PARTICLES: Step = Step::new(
    "finnish particles",
    &[
        Rule::delete(
            &["kin", "kaan", "kään", "ko", "kö", "han", "hän", "pa", "pä"],
            Zone::Word,
        )
        .when(after_particle_end),
        Rule::delete(&["sti"], Zone::R2),
    ],
)
.within(Zone::R1);

const POSSESSIVES: Step = Step::new(
    "finnish possessives",
    &[
        Rule::delete(&["si"], Zone::Word).when(not_after_k),
        Rule::delete(&["ni"], Zone::Word).then(kse_to_ksi),
        Rule::delete(&["nsa", "nsä", "mme", "nne"], Zone::Word),
        Rule::delete(&["an"], Zone::Word).when(after_back_case),
        Rule::delete(&["än"], Zone::Word).when(after_front_case),
        Rule::delete(&["en"], Zone::Word).when(after_lle_ine),
    ],
)
.within(Zone::R1);

const CASE_ENDINGS: Step = Step::new(
    "finnish cases",
    &[
        Rule::delete(&["han", "hen", "hin", "hon", "hän", "hön"], Zone::Word)
            .when(vowel_repeated),
        Rule::delete(&["siin", "den", "tten"], Zone::Word).when_else_shorter(after_vowel_i),
        Rule::delete(&["seen"], Zone::Word).when_else_shorter(after_long_vowel),
        Rule::custom(&["n"], Zone::Word, genitive_or_illative),
        Rule::delete(&["a", "ä"], Zone::Word).when(after_consonant_vowel),
        Rule::delete(&["tta", "ttä"], Zone::Word).when(after_e),
        Rule::delete(
            &[
                "ta", "tä", "ssa", "ssä", "sta", "stä", "lla", "llä", "lta", "ltä", "lle", "na",
                "nä", "ksi", "ine",
            ],
            Zone::Word,
        ),
    ],
)
.within(Zone::R1);

const OTHER_ENDINGS: Step = Step::new(
    "finnish other endings",
    &[
        Rule::delete(&["mpi", "mpa", "mpä", "mmi", "mma", "mmä"], Zone::Word).when(not_after_po),
        Rule::delete(
            &["eja", "ejä", "impi", "impa", "impä", "immi", "imma", "immä"],
            Zone::Word,
        ),
    ],
)
.within(Zone::R2);

const I_PLURAL: Step =
    Step::new("finnish i plural", &[Rule::delete(&["i", "j"], Zone::Word)]).within(Zone::R1);

const T_PLURAL_MMA: Step = Step::new(
    "finnish t plural",
    &[
        Rule::delete(&["mma"], Zone::Word).when(not_after_po),
        Rule::delete(&["imma"], Zone::Word),
    ],
)
.within(Zone::R2);

/// Plural `t` after a vowel, both in R1
fn t_plural(buffer: &mut StemBuffer) {
    let Some(start) = buffer.suffix_in(Zone::R1, "t") else {
        return;
    };
    if !(start > 0 && buffer.in_zone(Zone::R1, start - 1) && buffer.is_vowel(start - 1)) {
        return;
    }
    buffer.truncate(start);
    T_PLURAL_MMA.apply(buffer);
}

/// Check that the last `count` letters lie in R1
fn tail_in_r1(buffer: &StemBuffer, count: usize) -> bool {
    buffer
        .len()
        .checked_sub(count)
        .is_some_and(|start| buffer.in_zone(Zone::R1, start))
}

fn tidy(buffer: &mut StemBuffer) {
    if let Some((_, start)) = longest_ending(buffer, buffer.len(), LONG_VOWELS) {
        if buffer.in_zone(Zone::R1, start) {
            buffer.drop_last(1);
        }
    }

    if tail_in_r1(buffer, 2) {
        let last = buffer.len() - 1;
        if AEI.contains_opt(buffer.plain_char_at(last))
            && CONSONANTS.contains_opt(buffer.plain_char_at(last - 1))
        {
            buffer.drop_last(1);
        }
    }

    if tail_in_r1(buffer, 2) && buffer.ends_with("j") && buffer.preceded_by(buffer.len() - 1, "ou")
    {
        buffer.drop_last(1);
    }

    if tail_in_r1(buffer, 2) && buffer.ends_with("jo") {
        buffer.drop_last(1);
    }

    // the last non-vowel loses its double
    let Some(index) = (0..buffer.len()).rev().find(|&i| !buffer.is_vowel(i)) else {
        return;
    };
    if index > 0
        && CONSONANTS.contains_opt(buffer.plain_char_at(index))
        && buffer.plain_char_at(index - 1) == buffer.plain_char_at(index)
    {
        buffer.remove(index);
    }
}

impl LanguageStemmer for Finnish {
    fn language(&self) -> Language {
        Language::Finnish
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn min_length(&self) -> usize {
        2
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        let mut state = CallState::default();
        PARTICLES.apply(buffer);
        POSSESSIVES.apply(buffer);
        state.ending_removed = CASE_ENDINGS.apply(buffer).applied();
        OTHER_ENDINGS.apply(buffer);
        if state.ending_removed {
            I_PLURAL.apply(buffer);
        } else {
            t_plural(buffer);
        }
        tidy(buffer);
    }
}
