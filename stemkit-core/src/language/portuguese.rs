//! Portuguese
//!
//! The nasal vowels `ã` and `õ` are split into a base vowel plus a combining
//! tilde for the duration of the pipeline, so the tilde behaves as a
//! consonant in region computation.

use super::LanguageStemmer;
use crate::api::Language;
use crate::domain::{
    delete_if_in_region, CharSet, RegionLayout, Rule, RvStyle, StemBuffer, Step, Word, Zone,
};

static LAYOUT: RegionLayout =
    RegionLayout::new(CharSet::new("aeiouáéíóúâêô")).with_rv(RvStyle::Romance);

const TILDE: char = '\u{303}';

/// Portuguese stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Portuguese;

fn at_in_r2(buffer: &mut StemBuffer) {
    delete_if_in_region(buffer, Zone::R2, "at", false);
}

fn after_amente(buffer: &mut StemBuffer) {
    AFTER_AMENTE.apply(buffer);
}

fn after_mente(buffer: &mut StemBuffer) {
    AFTER_MENTE.apply(buffer);
}

fn after_idade(buffer: &mut StemBuffer) {
    AFTER_IDADE.apply(buffer);
}

fn after_e(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, "e")
}

/// `u` after `g`, or `i` after `c`, deleted when it lies in RV
fn gu_or_ci_in_rv(buffer: &mut StemBuffer) {
    let Some(last) = buffer.len().checked_sub(1) else {
        return;
    };
    let softened = (buffer.ends_with("u") && buffer.ends_with_before(last, "g"))
        || (buffer.ends_with("i") && buffer.ends_with_before(last, "c"));
    if softened && buffer.in_zone(Zone::Rv, last) {
        buffer.truncate(last);
    }
}

const STANDARD_SUFFIX: Step = Step::new(
    "portuguese step 1",
    &[
        Rule::delete(
            &[
                "eza", "ezas", "ico", "ica", "icos", "icas", "ismo", "ismos", "ável", "ível",
                "ista", "istas", "oso", "osa", "osos", "osas", "amento", "amentos", "imento",
                "imentos", "adora", "ador", "aça\u{303}o", "adoras", "adores", "aço\u{303}es",
                "ante", "antes", "ância",
            ],
            Zone::R2,
        ),
        Rule::replace(&["logia", "logias"], Zone::R2, "log"),
        Rule::replace(&["uça\u{303}o", "uço\u{303}es"], Zone::R2, "u"),
        Rule::replace(&["ência", "ências"], Zone::R2, "ente"),
        Rule::delete(&["amente"], Zone::R1).then(after_amente),
        Rule::delete(&["mente"], Zone::R2).then(after_mente),
        Rule::delete(&["idade", "idades"], Zone::R2).then(after_idade),
        Rule::delete(&["iva", "ivo", "ivas", "ivos"], Zone::R2).then(at_in_r2),
        Rule::replace(&["ira", "iras"], Zone::Rv, "ir").when(after_e),
    ],
);

const AFTER_AMENTE: Step = Step::new(
    "portuguese step 1 (amente)",
    &[
        Rule::delete(&["iv"], Zone::R2).then(at_in_r2),
        Rule::delete(&["os", "ic", "ad"], Zone::R2),
    ],
);

const AFTER_MENTE: Step = Step::new(
    "portuguese step 1 (mente)",
    &[Rule::delete(&["ante", "avel", "ível"], Zone::R2)],
);

const AFTER_IDADE: Step = Step::new(
    "portuguese step 1 (idade)",
    &[Rule::delete(&["abil", "ic", "iv"], Zone::R2)],
);

const VERB_SUFFIX: Step = Step::new(
    "portuguese step 2",
    &[Rule::delete(
        &[
            "ada", "ida", "ia", "aria", "eria", "iria", "ará", "ara", "erá", "era", "irá", "ava",
            "asse", "esse", "isse", "aste", "este", "iste", "ei", "arei", "erei", "irei", "am",
            "iam", "ariam", "eriam", "iriam", "aram", "eram", "iram", "avam", "em", "arem",
            "erem", "irem", "assem", "essem", "issem", "ado", "ido", "ando", "endo", "indo",
            "ara\u{303}o", "era\u{303}o", "ira\u{303}o", "ar", "er", "ir", "as", "adas", "idas",
            "ias", "arias", "erias", "irias", "arás", "aras", "erás", "eras", "irás", "avas",
            "es", "ardes", "erdes", "irdes", "ares", "eres", "ires", "asses", "esses", "isses",
            "astes", "estes", "istes", "is", "ais", "eis", "íeis", "aríeis", "eríeis", "iríeis",
            "áreis", "areis", "éreis", "ereis", "íreis", "ireis", "ásseis", "ésseis", "ísseis",
            "áveis", "ados", "idos", "ámos", "amos", "íamos", "aríamos", "eríamos", "iríamos",
            "áramos", "éramos", "íramos", "ávamos", "emos", "aremos", "eremos", "iremos",
            "ássemos", "êssemos", "íssemos", "imos", "armos", "ermos", "irmos", "eu", "iu", "ou",
            "ira", "iras",
        ],
        Zone::Word,
    )],
)
.within(Zone::Rv);

const RESIDUAL_SUFFIX: Step = Step::new(
    "portuguese step 4",
    &[Rule::delete(&["os", "a", "i", "o", "á", "í", "ó"], Zone::Rv)],
);

const RESIDUAL_FORM: Step = Step::new(
    "portuguese step 5",
    &[
        Rule::delete(&["e", "é", "ê"], Zone::Rv).then(gu_or_ci_in_rv),
        Rule::replace(&["ç"], Zone::Word, "c"),
    ],
);

impl LanguageStemmer for Portuguese {
    fn language(&self) -> Language {
        Language::Portuguese
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn min_length(&self) -> usize {
        2
    }

    fn prelude(&self, word: &mut Word) {
        word.rewrite(|ch| match ch {
            'ã' => Some("a\u{303}"),
            'õ' => Some("o\u{303}"),
            _ => None,
        });
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        let altered =
            STANDARD_SUFFIX.apply(buffer).applied() || VERB_SUFFIX.apply(buffer).applied();
        if altered {
            if let Some(start) = buffer.suffix_in(Zone::Rv, "i") {
                if buffer.ends_with_before(start, "c") {
                    buffer.truncate(start);
                }
            }
        } else {
            RESIDUAL_SUFFIX.apply(buffer);
        }
        RESIDUAL_FORM.apply(buffer);
    }

    fn postlude(&self, word: &mut Word) {
        word.compose('a', TILDE, 'ã');
        word.compose('o', TILDE, 'õ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        let mut text = word.to_string();
        Portuguese.stem(&mut text);
        text
    }

    #[test]
    fn test_verb_suffix() {
        assert_eq!(stem("chegada"), "cheg");
    }

    #[test]
    fn test_nasal_vowels_survive() {
        assert_eq!(stem("nações"), "naçõ");
    }

    #[test]
    fn test_standard_suffix() {
        assert_eq!(stem("felizmente"), "feliz");
    }

    #[test]
    fn test_residual_form() {
        assert_eq!(stem("cidade"), "cidad");
        assert_eq!(stem("faço"), "fac");
    }
}
