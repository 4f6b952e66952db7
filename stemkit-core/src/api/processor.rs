//! Caller-facing stemmer

use crate::api::{Config, Error, Language};
use crate::language::LanguageStemmer;

/// Stemmer bound to one language and configuration
///
/// The pipelines keep every per-call flag on the stack, so one `Stemmer` can
/// be shared across threads.
#[derive(Clone)]
pub struct Stemmer {
    stemmer: &'static dyn LanguageStemmer,
    config: Config,
}

impl std::fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stemmer")
            .field("language", &self.stemmer.language())
            .field("config", &self.config)
            .finish()
    }
}

impl Stemmer {
    /// Create a stemmer with the default configuration for a language
    pub fn new(language: Language) -> Self {
        Self {
            stemmer: language.stemmer(),
            config: Config::for_language(language),
        }
    }

    /// Create a stemmer with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            stemmer: config.language.stemmer(),
            config,
        })
    }

    /// Create a stemmer for a language code or name
    pub fn with_language(lang_code: impl Into<String>) -> Result<Self, Error> {
        let config = Config::builder().language(lang_code)?.build()?;
        Self::with_config(config)
    }

    /// Stem one word
    pub fn stem(&self, word: &str) -> String {
        let mut text = word.to_string();
        self.stemmer.stem(&mut text);
        text
    }

    /// Stem one word in place
    pub fn stem_in_place(&self, word: &mut String) {
        self.stemmer.stem(word);
    }

    /// Stem every word of a batch, preserving order
    pub fn stem_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<String>, Error> {
        if words.len() < self.config.parallel_threshold {
            log::debug!("stemming {} words sequentially", words.len());
            return Ok(self.stem_sequential(words));
        }

        #[cfg(feature = "parallel")]
        {
            self.stem_parallel(words)
        }
        #[cfg(not(feature = "parallel"))]
        {
            Ok(self.stem_sequential(words))
        }
    }

    fn stem_sequential<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words.iter().map(|word| self.stem(word.as_ref())).collect()
    }

    #[cfg(feature = "parallel")]
    fn stem_parallel<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<String>, Error> {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads.unwrap_or_else(num_cpus::get))
            .thread_name(|i| format!("stemkit-worker-{i}"))
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;

        log::debug!(
            "stemming {} words on {} threads",
            words.len(),
            pool.current_num_threads()
        );

        Ok(pool.install(|| {
            words
                .par_iter()
                .map(|word| self.stem(word.as_ref()))
                .collect()
        }))
    }

    /// Get the stemming language
    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
