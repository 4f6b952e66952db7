//! Spanish

use super::{longest_ending, LanguageStemmer};
use crate::api::Language;
use crate::domain::{CharSet, RegionLayout, Rule, RvStyle, StemBuffer, Step, Word, Zone};

static LAYOUT: RegionLayout =
    RegionLayout::new(CharSet::new("aeiouáéíóúü")).with_rv(RvStyle::Romance);

const PRONOUNS: &[&str] = &[
    "me", "se", "sela", "selo", "selas", "selos", "la", "le", "lo", "las", "les", "los", "nos",
];

/// Verb endings that can carry an attached pronoun
const PRONOUN_HOSTS: &[&str] = &[
    "iéndo", "ándo", "ár", "ér", "ír", "ando", "iendo", "ar", "er", "ir", "yendo",
];

/// Spanish stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish;

/// Remove a clitic pronoun after a gerund or infinitive, dropping the accent
/// the pronoun forced onto the verb
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
    match host {
        "iéndo" => buffer.replace_from(start, "iendo"),
        "ándo" => buffer.replace_from(start, "ando"),
        "ár" => buffer.replace_from(start, "ar"),
        "ér" => buffer.replace_from(start, "er"),
        "ír" => buffer.replace_from(start, "ir"),
        "yendo" => {
            if buffer.preceded_by(start, "u") {
                buffer.truncate(pronoun);
            }
        }
        _ => buffer.truncate(pronoun),
    }
}

fn ic_in_r2(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_in(Zone::R2, "ic") {
        buffer.truncate(start);
    }
}

fn at_in_r2(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_in(Zone::R2, "at") {
        buffer.truncate(start);
    }
}

fn after_amente(buffer: &mut StemBuffer) {
    AFTER_AMENTE.apply(buffer);
}

fn after_mente(buffer: &mut StemBuffer) {
    AFTER_MENTE.apply(buffer);
}

fn after_idad(buffer: &mut StemBuffer) {
    AFTER_IDAD.apply(buffer);
}

fn after_u(buffer: &StemBuffer, start: usize) -> bool {
    buffer.preceded_by(start, "u")
}

/// Delete the ending, and the `u` of a preceding `gu` with it
fn delete_with_gu(buffer: &mut StemBuffer, start: usize) -> bool {
    if buffer.ends_with_before(start, "gu") {
        buffer.truncate(start - 1);
    } else {
        buffer.truncate(start);
    }
    true
}

/// Drop the `u` of a final `gu` when it lies in RV
fn gu_in_rv(buffer: &mut StemBuffer) {
    if let Some(start) = buffer.suffix_in(Zone::Rv, "u") {
        if buffer.ends_with_before(start, "g") {
            buffer.truncate(start);
        }
    }
}

const STANDARD_SUFFIX: Step = Step::new(
    "spanish step 1",
    &[
        Rule::delete(
            &[
                "anza", "anzas", "ico", "ica", "icos", "icas", "ismo", "ismos", "able", "ables",
                "ible", "ibles", "ista", "istas", "oso", "osa", "osos", "osas", "amiento",
                "amientos", "imiento", "imientos",
            ],
            Zone::R2,
        ),
        Rule::delete(
            &[
                "adora", "ador", "ación", "adoras", "adores", "aciones", "ante", "antes", "ancia",
                "ancias",
            ],
            Zone::R2,
        )
        .then(ic_in_r2),
        Rule::replace(&["logía", "logías"], Zone::R2, "log"),
        Rule::replace(&["ución", "uciones"], Zone::R2, "u"),
        Rule::replace(&["encia", "encias"], Zone::R2, "ente"),
        Rule::delete(&["amente"], Zone::R1).then(after_amente),
        Rule::delete(&["mente"], Zone::R2).then(after_mente),
        Rule::delete(&["idad", "idades"], Zone::R2).then(after_idad),
        Rule::delete(&["iva", "ivo", "ivas", "ivos"], Zone::R2).then(at_in_r2),
    ],
);

const AFTER_AMENTE: Step = Step::new(
    "spanish step 1 (amente)",
    &[
        Rule::delete(&["iv"], Zone::R2).then(at_in_r2),
        Rule::delete(&["os", "ic", "ad"], Zone::R2),
    ],
);

const AFTER_MENTE: Step = Step::new(
    "spanish step 1 (mente)",
    &[Rule::delete(&["ante", "able", "ible"], Zone::R2)],
);

const AFTER_IDAD: Step = Step::new(
    "spanish step 1 (idad)",
    &[Rule::delete(&["abil", "ic", "iv"], Zone::R2)],
);

const Y_VERB_SUFFIX: Step = Step::new(
    "spanish step 2a",
    &[Rule::delete(
        &[
            "ya", "ye", "yan", "yen", "yeron", "yendo", "yo", "yó", "yas", "yes", "yais", "yamos",
        ],
        Zone::Word,
    )
    .when(after_u)],
)
.within(Zone::Rv);

const VERB_SUFFIX: Step = Step::new(
    "spanish step 2b",
    &[
        Rule::custom(&["en", "es", "éis", "emos"], Zone::Word, delete_with_gu),
        Rule::delete(
            &[
                "arían", "arías", "arán", "arás", "aríais", "aría", "aréis", "aríamos", "aremos",
                "ará", "aré", "erían", "erías", "erán", "erás", "eríais", "ería", "eréis",
                "eríamos", "eremos", "erá", "eré", "irían", "irías", "irán", "irás", "iríais",
                "iría", "iréis", "iríamos", "iremos", "irá", "iré", "aba", "ada", "ida", "ía",
                "ara", "iera", "ad", "ed", "id", "ase", "iese", "aste", "iste", "an", "aban",
                "ían", "aran", "ieran", "asen", "iesen", "aron", "ieron", "ado", "ido", "ando",
                "iendo", "ió", "ar", "er", "ir", "as", "abas", "adas", "idas", "ías", "aras",
                "ieras", "ases", "ieses", "ís", "áis", "abais", "íais", "arais", "ierais",
                "aseis", "ieseis", "asteis", "isteis", "ados", "idos", "amos", "ábamos", "íamos",
                "imos", "áramos", "iéramos", "iésemos", "ásemos",
            ],
            Zone::Word,
        ),
    ],
)
.within(Zone::Rv);

const RESIDUAL_SUFFIX: Step = Step::new(
    "spanish step 3",
    &[
        Rule::delete(&["os", "a", "o", "á", "í", "ó"], Zone::Rv),
        Rule::delete(&["e", "é"], Zone::Rv).then(gu_in_rv),
    ],
);

impl LanguageStemmer for Spanish {
    fn language(&self) -> Language {
        Language::Spanish
    }

    fn layout(&self) -> &'static RegionLayout {
        &LAYOUT
    }

    fn min_length(&self) -> usize {
        2
    }

    fn run_steps(&self, buffer: &mut StemBuffer) {
        attached_pronoun(buffer);
        if !STANDARD_SUFFIX.apply(buffer).applied() && !Y_VERB_SUFFIX.apply(buffer).applied() {
            VERB_SUFFIX.apply(buffer);
        }
        RESIDUAL_SUFFIX.apply(buffer);
    }

    fn postlude(&self, word: &mut Word) {
        word.rewrite(|ch| match ch {
            'á' => Some("a"),
            'é' => Some("e"),
            'í' => Some("i"),
            'ó' => Some("o"),
            'ú' => Some("u"),
            _ => None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        let mut text = word.to_string();
        Spanish.stem(&mut text);
        text
    }

    #[test]
    fn test_verb_suffix() {
        assert_eq!(stem("cantaba"), "cant");
        assert_eq!(stem("siguen"), "sig");
    }

    #[test]
    fn test_attached_pronoun() {
        assert_eq!(stem("comiéndolo"), "com");
    }

    #[test]
    fn test_standard_suffix() {
        assert_eq!(stem("nacionalidades"), "nacional");
        assert_eq!(stem("rápidamente"), "rapid");
    }

    #[test]
    fn test_residual_suffix() {
        assert_eq!(stem("llegue"), "lleg");
    }

    #[test]
    fn test_accents_removed_last() {
        assert_eq!(stem("canción"), "cancion");
    }
}
