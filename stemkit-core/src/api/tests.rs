//! Tests for the stemming API

#[cfg(test)]
mod api_tests {
    use crate::api::*;

    #[test]
    fn test_stemmer_creation() {
        let stemmer = Stemmer::default();
        assert_eq!(stemmer.language(), Language::English);

        let stemmer = Stemmer::with_language("fr").unwrap();
        assert_eq!(stemmer.config().language(), Language::French);

        let config = Config::builder()
            .language("german")
            .unwrap()
            .threads(Some(2))
            .parallel_threshold(64)
            .build()
            .unwrap();
        let stemmer = Stemmer::with_config(config).unwrap();
        assert_eq!(stemmer.language(), Language::German);
        assert_eq!(stemmer.config().threads(), Some(2));
        assert_eq!(stemmer.config().parallel_threshold(), 64);
    }

    #[test]
    fn test_invalid_configuration() {
        let result = Config::builder().threads(Some(0)).build();
        assert!(matches!(result, Err(Error::Configuration(_))));

        let result = Config::builder().parallel_threshold(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));

        let result = Stemmer::with_language("xx");
        assert!(matches!(result, Err(Error::InvalidLanguage(_))));
    }

    #[test]
    fn test_stem_and_stem_in_place_agree() {
        let stemmer = Stemmer::new(Language::English);
        let mut word = String::from("generously");
        stemmer.stem_in_place(&mut word);
        assert_eq!(word, stemmer.stem("generously"));
        assert_eq!(word, "generous");
    }

    #[test]
    fn test_batch_preserves_order() {
        let words = ["running", "cats", "happily", "", "a"];
        let stemmer = Stemmer::new(Language::English);
        let stems = stemmer.stem_batch(&words).unwrap();
        assert_eq!(stems, vec!["run", "cat", "happili", "", "a"]);
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let words: Vec<String> = ["nationalité", "chanteuses", "maisons", "parlaient"]
            .iter()
            .cycle()
            .take(400)
            .map(|w| w.to_string())
            .collect();

        let sequential = Stemmer::new(Language::French).stem_batch(&words).unwrap();

        let config = Config::builder()
            .language("fr")
            .unwrap()
            .threads(Some(4))
            .parallel_threshold(16)
            .build()
            .unwrap();
        let parallel = Stemmer::with_config(config)
            .unwrap()
            .stem_batch(&words)
            .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(parallel[0], "national");
        assert_eq!(parallel[3], "parl");
    }

    #[test]
    fn test_stemmer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stemmer>();
    }
}
