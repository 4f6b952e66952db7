//! Norwegian (Bokmål)

use super::LanguageStemmer;
use crate::api::Language;
use crate::domain::{CharSet, RegionLayout, Rule, StemBuffer, Step, Zone};

static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouyæåø"))
    .with_r1_floor(3)
    .without_r2();

const S_ENDING: &str = "bcdfghjlmnoprtvyz";

/// Norwegian stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Norwegian;

/// `s` follows a valid s-ending, or a `k` that itself follows a non-vowel
fn deletable_s(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, S_ENDING)
        || (buffer.preceded_by(start, "k") && start >= 2 && buffer.is_non_vowel(start - 2))
}

fn drop_t(buffer: &mut StemBuffer, _start: usize) -> bool {
    buffer.drop_last(1);
    true
}

const MAIN_SUFFIX: Step = Step::new(
    "norwegian main suffix",
    &[
        Rule::delete(
            &[
                "a", "e", "ede", "ande", "ende", "ane", "ene", "hetene", "en", "heten", "ar", "er",
                "heter", "as", "es", "edes", "endes", "enes", "hetenes", "ens", "hetens", "ers",
                "ets", "et", "het", "ast",
            ],
            Zone::Word,
        ),
        Rule::delete(&["s"], Zone::Word).when(deletable_s),
        Rule::replace(&["erte", "ert"], Zone::Word, "er"),
    ],
)
.within(Zone::R1);

const CONSONANT_PAIR: Step = Step::new(
    "norwegian consonant pair",
    &[Rule::custom(&["dt", "vt"], Zone::Word, drop_t)],
)
.within(Zone::R1);

const OTHER_SUFFIX: Step = Step::new(
    "norwegian other suffix",
    &[Rule::delete(
        &[
            "leg", "eleg", "ig", "eig", "lig", "elig", "els", "lov", "elov", "slov", "hetslov",
        ],
        Zone::Word,
    )],
)
.within(Zone::R1);

impl LanguageStemmer for Norwegian {
    fn language(&self) -> Language {
        Language::Norwegian
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        MAIN_SUFFIX.apply(buffer);
        CONSONANT_PAIR.apply(buffer);
        OTHER_SUFFIX.apply(buffer);
    }
}
