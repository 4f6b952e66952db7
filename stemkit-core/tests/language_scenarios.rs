//! End-to-end stemming scenarios for every supported language

use stemkit_core::{Language, Stemmer};

fn assert_stems(language: Language, cases: &[(&str, &str)]) {
    let stemmer = Stemmer::new(language);
    for (word, expected) in cases {
        assert_eq!(
            stemmer.stem(word),
            *expected,
            "{language}: stemming {word:?}"
        );
    }
}

#[test]
fn test_english_inflections_share_a_stem() {
    assert_stems(
        Language::English,
        &[
            ("documentation", "document"),
            ("documenting", "document"),
            ("caresses", "caress"),
            ("generously", "generous"),
            ("skies", "sky"),
        ],
    );
}

#[test]
fn test_french_adverb_and_undoubling() {
    assert_stems(
        Language::French,
        &[
            ("continuellement", "continuel"),
            ("nationalité", "national"),
            ("l'amour", "amour"),
        ],
    );
}

#[test]
fn test_danish_suffix_waits_for_r1() {
    assert_stems(
        Language::Danish,
        &[("ramningen", "ramning"), ("hestene", "hest"), ("og", "og")],
    );
}

#[test]
fn test_russian_participle_and_verb_endings() {
    assert_stems(
        Language::Russian,
        &[
            ("беспрестанно", "беспреста"),
            ("читающий", "чита"),
            ("Книги", "книг"),
        ],
    );
}

#[test]
fn test_spanish_accents_are_stripped_last() {
    // the accented endings are matched by the suffix rules before the
    // postlude folds what remains
    assert_stems(
        Language::Spanish,
        &[
            ("cantaba", "cant"),
            ("rápidamente", "rapid"),
            ("canción", "cancion"),
        ],
    );
}

#[test]
fn test_germanic_languages() {
    assert_stems(
        Language::German,
        &[("Häuser", "haus"), ("Straße", "strass")],
    );
    assert_stems(Language::Dutch, &[("bomen", "bom"), ("kaas", "kas")]);
    assert_stems(Language::Swedish, &[("flickorna", "flick")]);
    assert_stems(Language::Norwegian, &[("bilene", "bil")]);
}

#[test]
fn test_romance_languages() {
    assert_stems(Language::Italian, &[("parlandogli", "parl"), ("quando", "quand")]);
    assert_stems(Language::Portuguese, &[("nações", "naçõ"), ("faço", "fac")]);
}

#[test]
fn test_finnish_cases_and_plurals() {
    assert_stems(
        Language::Finnish,
        &[
            ("kirjassa", "kirj"),
            ("taloissa", "talo"),
            ("talot", "talo"),
            ("totuuden", "totuud"),
            ("kaupunkiseen", "kaupunkis"),
            ("kirjakseni", "kirj"),
            ("tavaroja", "tavaro"),
        ],
    );
}

#[test]
fn test_full_width_input_is_folded() {
    assert_stems(Language::English, &[("ＣＡＴＳ", "cat")]);
}
