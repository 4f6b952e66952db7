//! Domain layer for suffix-stripping stemmers
//!
//! This module holds the language-independent machinery every stemmer is
//! built from: character classification, the word buffer with its frozen
//! letter mask, region computation, suffix primitives and the rule tables
//! that drive each pipeline step.

pub mod buffer;
pub mod charset;
pub mod pipeline;
pub mod regions;
pub mod suffix;
pub mod word;

pub use buffer::StemBuffer;
pub use charset::{CharSet, CharacterClass, CharacterClassifier};
pub use pipeline::{Action, Outcome, Rule, Step};
pub use regions::{recompute_regions, RegionLayout, Regions, RvStyle, Zone};
pub use suffix::{delete_if_in_region, is_suffix, is_suffix_in_region, SuffixMatch};
pub use word::Word;
