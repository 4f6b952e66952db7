//! Snowball-style suffix-stripping stemmers
//!
//! This crate reduces inflected words to a stem for twelve European
//! languages. Each language is a staged pipeline of suffix rules restricted
//! to the regions R1, R2 and RV of the word.
//!
//! # Architecture
//!
//! - **Domain layer**: character classes, the word buffer, region finding,
//!   suffix primitives and data-driven pipeline steps
//! - **Language layer**: one rule set per language behind the
//!   [`LanguageStemmer`] trait
//! - **API layer**: [`Stemmer`], [`Config`] and [`Language`] for callers,
//!   plus the regression [`fixtures`] harness
//!
//! # Example
//!
//! ```rust
//! use stemkit_core::{Language, Stemmer};
//!
//! let stemmer = Stemmer::new(Language::English);
//! assert_eq!(stemmer.stem("documentation"), "document");
//!
//! let stems = stemmer.stem_batch(&["running", "ponies"]).unwrap();
//! assert_eq!(stems, vec!["run", "poni"]);
//! ```

pub mod api;
pub mod domain;
pub mod fixtures;
pub mod language;
pub mod numeric;

pub use api::{Config, ConfigBuilder, Error, Language, Result, Stemmer};
pub use domain::{CharSet, Outcome, RegionLayout, Regions, StemBuffer, Word, Zone};
pub use fixtures::{FixtureFailure, FixturePair, VerificationReport};
pub use language::LanguageStemmer;
