//! Danish

use super::LanguageStemmer;
use crate::api::Language;
use crate::domain::{CharSet, RegionLayout, Rule, StemBuffer, Step, Zone};

static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouyæåø"))
    .with_r1_floor(3)
    .without_r2();

/// Letters that may precede a deletable `s`
const S_ENDING: &str = "abcdfghjklmnoprtvyzå";

/// Danish stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Danish;

fn s_ending(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, S_ENDING)
}

/// Drop the last letter of `gd`, `dt`, `gt` or `kt` inside R1
fn consonant_pair(buffer: &mut StemBuffer) {
    if ["gd", "dt", "gt", "kt"]
        .iter()
        .any(|pair| buffer.suffix_in(Zone::R1, pair).is_some())
    {
        buffer.drop_last(1);
    }
}

/// Drop the last letter when it is a non-vowel in R1 doubling the one before
fn undouble(buffer: &mut StemBuffer) {
    let len = buffer.len();
    if len < 2 {
        return;
    }
    let last = len - 1;
    if buffer.in_zone(Zone::R1, last)
        && buffer.is_non_vowel(last)
        && buffer.char_at(last) == buffer.char_at(last - 1)
    {
        buffer.drop_last(1);
    }
}

const MAIN_SUFFIX: Step = Step::new(
    "danish main suffix",
    &[
        Rule::delete(
            &[
                "hed", "ethed", "ered", "e", "erede", "ende", "erende", "ene", "erne", "ere", "en",
                "heden", "eren", "er", "heder", "erer", "heds", "es", "endes", "erendes", "enes",
                "ernes", "eres", "ens", "hedens", "erens", "ers", "ets", "erets", "et", "eret",
            ],
            Zone::Word,
        ),
        Rule::delete(&["s"], Zone::Word).when(s_ending),
    ],
)
.within(Zone::R1);

const OTHER_SUFFIX: Step = Step::new(
    "danish other suffix",
    &[
        Rule::delete(&["ig", "lig", "elig", "els"], Zone::Word).then(consonant_pair),
        Rule::replace(&["løst"], Zone::Word, "løs"),
    ],
)
.within(Zone::R1);

impl LanguageStemmer for Danish {
    fn language(&self) -> Language {
        Language::Danish
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        MAIN_SUFFIX.apply(buffer);
        consonant_pair(buffer);
        if let Some(start) = buffer.suffix_start("igst") {
            buffer.truncate(start + 2);
        }
        OTHER_SUFFIX.apply(buffer);
        undouble(buffer);
    }
}
