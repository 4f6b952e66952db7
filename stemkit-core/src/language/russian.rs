//! Russian
//!
//! Every step searches RV only; the `а`/`я` that licenses a group 1 ending
//! must lie in RV as well.

use super::LanguageStemmer;
use crate::api::Language;
use crate::domain::{
    delete_if_in_region, CharSet, RegionLayout, Rule, RvStyle, StemBuffer, Step, Word, Zone,
};

static LAYOUT: RegionLayout =
    RegionLayout::new(CharSet::new("аеиоуыэюя")).with_rv(RvStyle::Slavic);

/// Russian stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Russian;

fn after_a_or_ya(buffer: &StemBuffer, start: usize) -> bool {
    start > 0 && buffer.in_zone(Zone::Rv, start - 1) && buffer.preceded_by(start, "ая")
}

fn after_n(buffer: &StemBuffer, start: usize) -> bool {
    start > 0 && buffer.in_zone(Zone::Rv, start - 1) && buffer.preceded_by(start, "н")
}

fn undouble_n(buffer: &mut StemBuffer) {
    if buffer.suffix_in(Zone::Rv, "нн").is_some() {
        buffer.drop_last(1);
    }
}

const PERFECTIVE_GERUND: Step = Step::new(
    "russian perfective gerund",
    &[
        Rule::delete(&["в", "вши", "вшись"], Zone::Word).when(after_a_or_ya),
        Rule::delete(
            &["ив", "ивши", "ившись", "ыв", "ывши", "ывшись"],
            Zone::Word,
        ),
    ],
)
.within(Zone::Rv);

const REFLEXIVE: Step =
    Step::new("russian reflexive", &[Rule::delete(&["ся", "сь"], Zone::Word)]).within(Zone::Rv);

const ADJECTIVE: Step = Step::new(
    "russian adjective",
    &[Rule::delete(
        &[
            "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым", "ом",
            "его", "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
        ],
        Zone::Word,
    )],
)
.within(Zone::Rv);

const PARTICIPLE: Step = Step::new(
    "russian participle",
    &[
        Rule::delete(&["ем", "нн", "вш", "ющ", "щ"], Zone::Word).when(after_a_or_ya),
        Rule::delete(&["ивш", "ывш", "ующ"], Zone::Word),
    ],
)
.within(Zone::Rv);

const VERB: Step = Step::new(
    "russian verb",
    &[
        Rule::delete(
            &[
                "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют", "ны",
                "ть", "ешь", "нно",
            ],
            Zone::Word,
        )
        .when(after_a_or_ya),
        Rule::delete(
            &[
                "ила", "ыла", "ена", "ейте", "уйте", "ите", "или", "ыли", "ей", "уй", "ил", "ыл",
                "им", "ым", "ен", "ило", "ыло", "ено", "ят", "ует", "уют", "ит", "ыт", "ены",
                "ить", "ыть", "ишь", "ую", "ю",
            ],
            Zone::Word,
        ),
    ],
)
.within(Zone::Rv);

const NOUN: Step = Step::new(
    "russian noun",
    &[Rule::delete(
        &[
            "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией", "ей",
            "ой", "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах", "иях", "ях",
            "ы", "ь", "ию", "ью", "ю", "ия", "ья", "я",
        ],
        Zone::Word,
    )],
)
.within(Zone::Rv);

const DERIVATIONAL: Step = Step::new(
    "russian derivational",
    &[Rule::delete(&["ост", "ость"], Zone::R2)],
)
.within(Zone::Rv);

const TIDY_UP: Step = Step::new(
    "russian tidy up",
    &[
        Rule::delete(&["ейш", "ейше"], Zone::Word).then(undouble_n),
        Rule::delete(&["н"], Zone::Word).when(after_n),
        Rule::delete(&["ь"], Zone::Word),
    ],
)
.within(Zone::Rv);

/// Adjective ending, optionally preceded by a participle ending
fn adjectival(buffer: &mut StemBuffer) -> bool {
    if !ADJECTIVE.apply(buffer).applied() {
        return false;
    }
    PARTICIPLE.apply(buffer);
    true
}

impl LanguageStemmer for Russian {
    fn language(&self) -> Language {
        Language::Russian
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn min_length(&self) -> usize {
        2
    }

    fn prelude(&self, word: &mut Word) {
        word.rewrite(|ch| (ch == 'ё').then_some("е"));
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        if !PERFECTIVE_GERUND.apply(buffer).applied() {
            REFLEXIVE.apply(buffer);
            if !adjectival(buffer) && !VERB.apply(buffer).applied() {
                NOUN.apply(buffer);
            }
        }

        delete_if_in_region(buffer, Zone::Rv, "и", false);

        DERIVATIONAL.apply(buffer);
        TIDY_UP.apply(buffer);
    }
}
