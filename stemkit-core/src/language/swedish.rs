//! Swedish

use super::LanguageStemmer;
use crate::api::Language;
use crate::domain::{CharSet, RegionLayout, Rule, StemBuffer, Step, Zone};

static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouyäåö"))
    .with_r1_floor(3)
    .without_r2();

const S_ENDING: &str = "bcdfghjklmnoprtvy";

/// Swedish stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Swedish;

fn s_ending(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, S_ENDING)
}

fn drop_last_letter(buffer: &mut StemBuffer, _start: usize) -> bool {
    buffer.drop_last(1);
    true
}

const MAIN_SUFFIX: Step = Step::new(
    "swedish main suffix",
    &[
        Rule::delete(
            &[
                "a", "arna", "erna", "heterna", "orna", "ad", "e", "ade", "ande", "arne", "are",
                "aste", "en", "anden", "aren", "heten", "ern", "ar", "er", "heter", "or", "as",
                "arnas", "ernas", "ornas", "es", "ades", "andes", "ens", "arens", "hetens", "erns",
                "at", "andet", "het", "ast",
            ],
            Zone::Word,
        ),
        Rule::delete(&["s"], Zone::Word).when(s_ending),
    ],
)
.within(Zone::R1);

const CONSONANT_PAIR: Step = Step::new(
    "swedish consonant pair",
    &[Rule::custom(
        &["dd", "gd", "nn", "dt", "gt", "kt", "tt"],
        Zone::Word,
        drop_last_letter,
    )],
)
.within(Zone::R1);

const OTHER_SUFFIX: Step = Step::new(
    "swedish other suffix",
    &[
        Rule::delete(&["lig", "ig", "els"], Zone::Word),
        Rule::replace(&["löst"], Zone::Word, "lös"),
        Rule::replace(&["fullt"], Zone::Word, "full"),
    ],
)
.within(Zone::R1);

impl LanguageStemmer for Swedish {
    fn language(&self) -> Language {
        Language::Swedish
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
