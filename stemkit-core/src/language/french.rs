//! French

use super::{strip_elision, LanguageStemmer};
use crate::api::Language;
use crate::domain::{CharSet, Outcome, RegionLayout, Rule, RvStyle, StemBuffer, Step, Word, Zone};

static LAYOUT: RegionLayout =
    RegionLayout::new(CharSet::new("aeiouyâàëéêèïîôûù")).with_rv(RvStyle::French);

/// Elided articles, pronouns and conjunctions
const ELISIONS: &[&str] = &[
    "c", "d", "j", "l", "m", "n", "s", "t", "qu", "jusqu", "lorsqu", "puisqu", "quoiqu",
];

/// Step 1 endings after which the verb steps still run
const MENT_ENDINGS: &[&str] = &["amment", "emment", "ment", "ments"];

/// French stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct French;

/// Delete `suffix` when it lies in R2; otherwise replace it with `fallback`
fn delete_in_r2_or_replace(buffer: &mut StemBuffer, start: usize, fallback: &str) -> bool {
    if buffer.in_zone(Zone::R2, start) {
        buffer.truncate(start);
    } else {
        buffer.replace_from(start, fallback);
    }
    true
}

fn ic_to_iqu(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_start("ic") {
        delete_in_r2_or_replace(buffer, start, "iqU");
    }
}

fn ic_action(buffer: &mut StemBuffer, start: usize) -> bool {
    delete_in_r2_or_replace(buffer, start, "iqU")
}

fn abil_action(buffer: &mut StemBuffer, start: usize) -> bool {
    delete_in_r2_or_replace(buffer, start, "abl")
}

/// `eus`/`euse`: delete in R2, otherwise `eux` in R1
fn eus_action(buffer: &mut StemBuffer, start: usize) -> bool {
    if buffer.in_zone(Zone::R2, start) {
        buffer.truncate(start);
        true
    } else if buffer.in_zone(Zone::R1, start) {
        buffer.replace_from(start, "eux");
        true
    } else {
        false
    }
}

fn at_in_r2(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_in(Zone::R2, "at") {
        buffer.truncate(start);
    }
}

fn after_ement(buffer: &mut StemBuffer) {
    AFTER_EMENT.apply(buffer);
}

fn after_ite(buffer: &mut StemBuffer) {
    AFTER_ITE.apply(buffer);
}

fn after_if(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_in(Zone::R2, "at") {
        buffer.truncate(start);
        ic_to_iqu(buffer);
    }
}

fn after_non_vowel(buffer: &StemBuffer, start: usize) -> bool {
    start > 0 && buffer.is_non_vowel(start - 1)
}

/// The letter before the suffix is a vowel inside RV
fn vowel_in_rv_before(buffer: &StemBuffer, start: usize) -> bool {
    start > 0 && buffer.in_zone(Zone::Rv, start - 1) && buffer.is_vowel(start - 1)
}

/// The letter before the suffix is a non-vowel inside RV
fn non_vowel_in_rv_before(buffer: &StemBuffer, start: usize) -> bool {
    start > 0 && buffer.in_zone(Zone::Rv, start - 1) && buffer.is_non_vowel(start - 1)
}

fn e_in_rv(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_in(Zone::Rv, "e") {
        buffer.truncate(start);
    }
}

fn s_or_t_in_rv(buffer: &StemBuffer, start: usize) -> bool {
    start > 0 && buffer.in_zone(Zone::Rv, start - 1) && buffer.preceded_by(start, "st")
}

fn gu_in_rv(buffer: &StemBuffer, start: usize) -> bool {
    start >= 2 && buffer.in_zone(Zone::Rv, start - 2) && buffer.ends_with_before(start, "gu")
}

const STANDARD_SUFFIX: Step = Step::new(
    "french step 1",
    &[
        Rule::delete(
            &[
                "ance", "iqUe", "isme", "able", "iste", "eux", "ances", "iqUes", "ismes", "ables",
                "istes",
            ],
            Zone::R2,
        ),
        Rule::delete(
            &["atrice", "ateur", "ation", "atrices", "ateurs", "ations"],
            Zone::R2,
        )
        .then(ic_to_iqu),
        Rule::replace(&["logie", "logies"], Zone::R2, "log"),
        Rule::replace(&["usion", "ution", "usions", "utions"], Zone::R2, "u"),
        Rule::replace(&["ence", "ences"], Zone::R2, "ent"),
        Rule::delete(&["ement", "ements"], Zone::Rv).then(after_ement),
        Rule::delete(&["ité", "ités"], Zone::R2).then(after_ite),
        Rule::delete(&["if", "ive", "ifs", "ives"], Zone::R2).then(after_if),
        Rule::replace(&["eaux"], Zone::Word, "eau"),
        Rule::replace(&["aux"], Zone::R1, "al"),
        Rule::custom(&["euse", "euses"], Zone::Word, eus_action),
        Rule::delete(&["issement", "issements"], Zone::R1).when(after_non_vowel),
        Rule::replace(&["amment"], Zone::Rv, "ant"),
        Rule::replace(&["emment"], Zone::Rv, "ent"),
        Rule::delete(&["ment", "ments"], Zone::Word).when(vowel_in_rv_before),
    ],
);

const AFTER_EMENT: Step = Step::new(
    "french step 1 (ement)",
    &[
        Rule::delete(&["iv"], Zone::R2).then(at_in_r2),
        Rule::custom(&["eus"], Zone::Word, eus_action),
        Rule::delete(&["abl", "iqU"], Zone::R2),
        Rule::replace(&["ièr", "Ièr"], Zone::Rv, "i"),
    ],
);

const AFTER_ITE: Step = Step::new(
    "french step 1 (ité)",
    &[
        Rule::custom(&["abil"], Zone::Word, abil_action),
        Rule::custom(&["ic"], Zone::Word, ic_action),
        Rule::delete(&["iv"], Zone::R2),
    ],
);

const I_VERB_SUFFIX: Step = Step::new(
    "french step 2a",
    &[Rule::delete(
        &[
            "îmes", "ît", "îtes", "i", "ie", "ies", "ir", "ira", "irai", "iraIent", "irais",
            "irait", "iras", "irent", "irez", "iriez", "irions", "irons", "iront", "is",
            "issaIent", "issais", "issait", "issant", "issante", "issantes", "issants", "isse",
            "issent", "isses", "issez", "issiez", "issions", "issons", "it",
        ],
        Zone::Word,
    )
    .when(non_vowel_in_rv_before)],
)
.within(Zone::Rv);

const VERB_SUFFIX: Step = Step::new(
    "french step 2b",
    &[
        Rule::delete(&["ions"], Zone::R2),
        Rule::delete(
            &[
                "é", "ée", "ées", "és", "èrent", "er", "era", "erai", "eraIent", "erais", "erait",
                "eras", "erez", "eriez", "erions", "erons", "eront", "ez", "iez",
            ],
            Zone::Word,
        ),
        Rule::delete(
            &[
                "âmes", "ât", "âtes", "a", "ai", "aIent", "ais", "ait", "ant", "ante", "antes",
                "ants", "as", "asse", "assent", "asses", "assiez", "assions",
            ],
            Zone::Word,
        )
        .then(e_in_rv),
    ],
)
.within(Zone::Rv);

const RESIDUAL_SUFFIX: Step = Step::new(
    "french step 4",
    &[
        Rule::delete(&["ion"], Zone::R2).when(s_or_t_in_rv),
        Rule::replace(&["ier", "ière", "Ier", "Ière"], Zone::Word, "i"),
        Rule::delete(&["e"], Zone::Word),
        Rule::delete(&["ë"], Zone::Word).when(gu_in_rv),
    ],
)
.within(Zone::Rv);

const UNDOUBLE: Step = Step::new(
    "french step 5",
    &[Rule::custom(
        &["enn", "onn", "ett", "ell", "eill"],
        Zone::Word,
        drop_last_letter,
    )],
);

fn drop_last_letter(buffer: &mut StemBuffer, _start: usize) -> bool {
    buffer.drop_last(1);
    true
}

/// Final `s` not preceded by `a`, `i`, `o`, `u`, `è` or `s`
fn residual_s(buffer: &mut StemBuffer) {
    let Some(start) = buffer.suffix_start("s") else {
        return;
    };
    if start == 0 {
        return;
    }
    let keeps = buffer
        .plain_char_at(start - 1)
        .is_some_and(|ch| "aiouès".contains(ch));
    if !keeps {
        buffer.truncate(start);
    }
}

/// `é` or `è` followed only by non-vowels becomes `e`
fn unaccent(buffer: &mut StemBuffer) {
    let len = buffer.len();
    let mut index = len;
    while index > 0 && buffer.is_non_vowel(index - 1) {
        index -= 1;
    }
    if index == len || index == 0 {
        return;
    }
    if matches!(buffer.plain_char_at(index - 1), Some('é' | 'è')) {
        buffer.set(index - 1, 'e');
    }
}

fn is_vowel(ch: Option<char>) -> bool {
    LAYOUT.vowels.contains_opt(ch)
}

impl LanguageStemmer for French {
    fn language(&self) -> Language {
        Language::French
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn min_length(&self) -> usize {
        2
    }

    fn prelude(&self, word: &mut Word) {
        strip_elision(word, ELISIONS);
        for index in 0..word.len() {
            let here = word.plain_char_at(index);
            let next = word.plain_char_at(index + 1);
            let after = word.plain_char_at(index + 2);
            if is_vowel(here) {
                match next {
                    Some('u' | 'i') if is_vowel(after) => word.freeze(index + 1),
                    Some('y') => word.freeze(index + 1),
                    _ => {}
                }
            } else if here == Some('y') && is_vowel(next) {
                word.freeze(index);
            } else if here == Some('q') && next == Some('u') {
                word.freeze(index + 1);
            }
        }
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        let standard = match STANDARD_SUFFIX.apply(buffer) {
            Outcome::Applied(suffix) => !MENT_ENDINGS.contains(&suffix),
            _ => false,
        };
        let altered = standard
            || I_VERB_SUFFIX.apply(buffer).applied()
            || VERB_SUFFIX.apply(buffer).applied();

        if altered {
            if buffer.ends_with("Y") {
                buffer.replace_from(buffer.len() - 1, "i");
            } else if buffer.ends_with("ç") {
                buffer.replace_from(buffer.len() - 1, "c");
            }
        } else {
            residual_s(buffer);
            RESIDUAL_SUFFIX.apply(buffer);
        }

        UNDOUBLE.apply(buffer);
        unaccent(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        let mut text = word.to_string();
        French.stem(&mut text);
        text
    }

    #[test]
    fn test_standard_suffix_then_undouble() {
        assert_eq!(stem("continuellement"), "continuel");
    }

    #[test]
    fn test_standard_suffixes() {
        assert_eq!(stem("nationalité"), "national");
        assert_eq!(stem("chanteuses"), "chanteux");
    }

    #[test]
    fn test_verb_suffixes() {
        assert_eq!(stem("parlaient"), "parl");
        assert_eq!(stem("finissons"), "fin");
    }

    #[test]
    fn test_residual_and_unaccent() {
        assert_eq!(stem("maisons"), "maison");
        assert_eq!(stem("cèdre"), "cedr");
    }

    #[test]
    fn test_elision() {
        assert_eq!(stem("l'amour"), "amour");
        assert_eq!(stem("L\u{2019}amour"), "amour");
    }

    #[test]
    fn test_two_letter_minimum() {
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("le"), "le");
    }
}
