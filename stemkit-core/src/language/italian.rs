//! Italian

use super::{longest_ending, strip_elision, LanguageStemmer};
use crate::api::Language;
use crate::domain::{
    delete_if_in_region, CharSet, RegionLayout, Rule, RvStyle, StemBuffer, Step, Word, Zone,
};

static LAYOUT: RegionLayout =
    RegionLayout::new(CharSet::new("aeiouàèìòù")).with_rv(RvStyle::Romance);

const ELISIONS: &[&str] = &[
    "l", "d", "c", "m", "n", "s", "t", "v", "un", "all", "dall", "dell", "nell", "sull", "coll",
    "pell", "quell", "quest", "nessun", "sant", "bell",
];

const PRONOUNS: &[&str] = &[
    "ci", "gli", "la", "le", "li", "lo", "mi", "ne", "si", "ti", "vi", "sene", "gliela",
    "gliele", "glieli", "glielo", "gliene", "mela", "mele", "meli", "melo", "mene", "tela",
    "tele", "teli", "telo", "tene", "cela", "cele", "celi", "celo", "cene", "vela", "vele",
    "veli", "velo", "vene",
];

const PRONOUN_HOSTS: &[&str] = &["ando", "endo", "ar", "er", "ir"];

/// Italian stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Italian;

/// Remove an enclitic pronoun after a gerund, or turn it into `e` after an
/// infinitive stem
fn attached_pronoun(buffer: &mut StemBuffer) {
    let Some((_, pronoun)) = longest_ending(buffer, buffer.len(), PRONOUNS) else {
        return;
    };
    let Some((host, start)) = longest_ending(buffer, pronoun, PRONOUN_HOSTS) else {
        return;
    };
    if !buffer.in_zone(Zone::Rv, start) {
        return;
    }
    if host.ends_with("ndo") {
        buffer.truncate(pronoun);
    } else {
        buffer.replace_from(pronoun, "e");
    }
}

fn in_r2(buffer: &mut StemBuffer, literal: &str) -> bool {
    delete_if_in_region(buffer, Zone::R2, literal, false).deleted()
}

fn ic_in_r2(buffer: &mut StemBuffer) {
    in_r2(buffer, "ic");
}

fn at_in_r2(buffer: &mut StemBuffer) {
    in_r2(buffer, "at");
}

fn at_then_ic_in_r2(buffer: &mut StemBuffer) {
    if in_r2(buffer, "at") {
        in_r2(buffer, "ic");
    }
}

fn after_amente(buffer: &mut StemBuffer) {
    AFTER_AMENTE.apply(buffer);
}

fn after_ita(buffer: &mut StemBuffer) {
    AFTER_ITA.apply(buffer);
}

const STANDARD_SUFFIX: Step = Step::new(
    "italian step 1",
    &[
        Rule::delete(
            &[
                "anza", "anze", "ico", "ici", "ica", "ice", "iche", "ichi", "ismo", "ismi",
                "abile", "abili", "ibile", "ibili", "ista", "iste", "isti", "istà", "istè",
                "istì", "oso", "osi", "osa", "ose", "mente", "atrice", "atrici", "ante", "anti",
            ],
            Zone::R2,
        ),
        Rule::delete(&["azione", "azioni", "atore", "atori"], Zone::R2).then(ic_in_r2),
        Rule::replace(&["logia", "logie"], Zone::R2, "log"),
        Rule::replace(&["uzione", "uzioni", "usione", "usioni"], Zone::R2, "u"),
        Rule::replace(&["enza", "enze"], Zone::R2, "ente"),
        Rule::delete(&["amento", "amenti", "imento", "imenti"], Zone::Rv),
        Rule::delete(&["amente"], Zone::R1).then(after_amente),
        Rule::delete(&["ità"], Zone::R2).then(after_ita),
        Rule::delete(&["ivo", "ivi", "iva", "ive"], Zone::R2).then(at_then_ic_in_r2),
    ],
);

const AFTER_AMENTE: Step = Step::new(
    "italian step 1 (amente)",
    &[
        Rule::delete(&["iv"], Zone::R2).then(at_in_r2),
        Rule::delete(&["os", "ic", "abil"], Zone::R2),
    ],
);

const AFTER_ITA: Step = Step::new(
    "italian step 1 (ità)",
    &[Rule::delete(&["abil", "ic", "iv"], Zone::R2)],
);

const VERB_SUFFIX: Step = Step::new(
    "italian step 2",
    &[Rule::delete(
        &[
            "ammo", "ando", "ano", "are", "arono", "asse", "assero", "assi", "assimo", "ata",
            "ate", "ati", "ato", "ava", "avamo", "avano", "avate", "avi", "avo", "emmo", "enda",
            "ende", "endi", "endo", "erà", "erai", "eranno", "ere", "erebbe", "erebbero", "erei",
            "eremmo", "eremo", "ereste", "eresti", "erete", "erò", "erono", "essero", "ete",
            "eva", "evamo", "evano", "evate", "evi", "evo", "iamo", "immo", "irà", "irai",
            "iranno", "ire", "irebbe", "irebbero", "irei", "iremmo", "iremo", "ireste",
            "iresti", "irete", "irò", "irono", "isca", "iscano", "isce", "isci", "isco",
            "iscono", "issero", "ita", "ite", "iti", "ito", "iva", "ivamo", "ivano", "ivate",
            "ivi", "ivo", "ono", "uta", "ute", "uti", "uto", "ar", "ir",
        ],
        Zone::Word,
    )],
)
.within(Zone::Rv);

/// Final vowel in RV, then an `i` it leaves behind; then the `h` of a final
/// `ch`/`gh` whose consonant is in RV
fn vowel_suffix(buffer: &mut StemBuffer) {
    if let Some(last) = buffer.len().checked_sub(1) {
        let final_vowel = buffer
            .plain_char_at(last)
            .is_some_and(|ch| "aeioàèìò".contains(ch));
        if final_vowel && buffer.in_zone(Zone::Rv, last) {
            buffer.truncate(last);
            if let Some(start) = buffer.suffix_in(Zone::Rv, "i") {
                buffer.truncate(start);
            }
        }
    }

    if let Some(start) = buffer.suffix_start("h") {
        if start > 0 && buffer.preceded_by(start, "cg") && buffer.in_zone(Zone::Rv, start - 1) {
            buffer.truncate(start);
        }
    }
}

fn is_vowel(ch: Option<char>) -> bool {
    LAYOUT.vowels.contains_opt(ch)
}

impl LanguageStemmer for Italian {
    fn language(&self) -> Language {
        Language::Italian
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn min_length(&self) -> usize {
        2
    }

    fn prelude(&self, word: &mut Word) {
        strip_elision(word, ELISIONS);
        word.rewrite(|ch| match ch {
            'á' => Some("à"),
            'é' => Some("è"),
            'í' => Some("ì"),
            'ó' => Some("ò"),
            'ú' => Some("ù"),
            _ => None,
        });
        for index in 1..word.len() {
            if word.plain_char_at(index - 1) == Some('q') && word.plain_char_at(index) == Some('u')
            {
                word.freeze(index);
            }
        }
        for index in 1..word.len() {
            if !is_vowel(word.plain_char_at(index - 1)) {
                continue;
            }
            if matches!(word.plain_char_at(index), Some('u' | 'i'))
                && is_vowel(word.plain_char_at(index + 1))
            {
                word.freeze(index);
            }
        }
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        attached_pronoun(buffer);
        if !STANDARD_SUFFIX.apply(buffer).applied() {
            VERB_SUFFIX.apply(buffer);
        }
        vowel_suffix(buffer);
    }
}
