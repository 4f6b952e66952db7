//! Data-driven pipeline steps
//!
//! A [`Step`] is an ordered table of [`Rule`]s. Applying it finds the longest
//! suffix literal any rule lists; only that literal's rule is considered, so a
//! longer suffix that fails its region or guard check blocks every shorter
//! one. This mirrors the way the published algorithms phrase each step as
//! "search for the longest among the following suffixes".
//!
//! A guard added with [`Rule::when_else_shorter`] is part of the search
//! instead: a suffix whose guard fails is passed over and the next-longest
//! suffix is considered.

use super::buffer::StemBuffer;
use super::regions::Zone;

/// Extra condition on a matched suffix; receives the suffix start
pub type Guard = fn(&StemBuffer, usize) -> bool;

/// Hand-written action; receives the suffix start and returns whether it
/// changed anything
pub type CustomAction = fn(&mut StemBuffer, usize) -> bool;

/// Work to do after a rule fired
pub type FollowUp = fn(&mut StemBuffer);

/// What a rule does with its matched suffix
#[derive(Clone, Copy)]
pub enum Action {
    /// Remove the suffix
    Delete,
    /// Replace the suffix with a literal
    Replace(&'static str),
    /// Leave the suffix in place; the rule only stops shorter ones
    Keep,
    /// Run a hand-written function; it returns whether it changed the word,
    /// and `false` makes the step `Blocked`
    Custom(CustomAction),
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Delete => write!(f, "Delete"),
            Action::Replace(with) => write!(f, "Replace({with:?})"),
            Action::Keep => write!(f, "Keep"),
            Action::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// A group of suffixes sharing a zone, guard and action
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub suffixes: &'static [&'static str],
    pub zone: Zone,
    pub guard: Option<Guard>,
    pub action: Action,
    pub follow_up: Option<FollowUp>,
    /// A failing guard passes the search on to shorter suffixes
    pub falls_back: bool,
}

impl Rule {
    const fn with_action(suffixes: &'static [&'static str], zone: Zone, action: Action) -> Self {
        Self {
            suffixes,
            zone,
            guard: None,
            action,
            follow_up: None,
            falls_back: false,
        }
    }

    /// Delete the suffix when it lies in `zone`
    pub const fn delete(suffixes: &'static [&'static str], zone: Zone) -> Self {
        Self::with_action(suffixes, zone, Action::Delete)
    }

    /// Replace the suffix when it lies in `zone`
    pub const fn replace(
        suffixes: &'static [&'static str],
        zone: Zone,
        with: &'static str,
    ) -> Self {
        Self::with_action(suffixes, zone, Action::Replace(with))
    }

    /// Recognise the suffix without changing the word
    pub const fn keep(suffixes: &'static [&'static str]) -> Self {
        Self::with_action(suffixes, Zone::Word, Action::Keep)
    }

    /// Run a hand-written action when the suffix lies in `zone`
    pub const fn custom(
        suffixes: &'static [&'static str],
        zone: Zone,
        action: CustomAction,
    ) -> Self {
        Self::with_action(suffixes, zone, Action::Custom(action))
    }

    /// Add a guard
    pub const fn when(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard checked while searching; when it fails, the next-longest
    /// suffix gets its turn instead of the step being blocked
    pub const fn when_else_shorter(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self.falls_back = true;
        self
    }

    /// Whether a search-time guard passes over this suffix
    fn passed_over(&self, buffer: &StemBuffer, start: usize) -> bool {
        self.falls_back && self.guard.is_some_and(|guard| !guard(buffer, start))
    }

    /// Add a follow-up
    pub const fn then(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }

    fn fire(&self, buffer: &mut StemBuffer, start: usize) -> bool {
        if !buffer.in_zone(self.zone, start) {
            return false;
        }
        if let Some(guard) = self.guard {
            if !guard(buffer, start) {
                return false;
            }
        }
        match self.action {
            Action::Delete => buffer.truncate(start),
            Action::Replace(with) => buffer.replace_from(start, with),
            Action::Keep => {}
            Action::Custom(action) => {
                if !action(buffer, start) {
                    return false;
                }
            }
        }
        if let Some(follow_up) = self.follow_up {
            follow_up(buffer);
        }
        true
    }
}

/// Result of applying a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No listed suffix ends the word
    NoMatch,
    /// The longest suffix matched but its conditions rejected it
    Blocked(&'static str),
    /// The rule for this suffix fired
    Applied(&'static str),
}

impl Outcome {
    #[inline]
    pub fn applied(self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// Whether any suffix was found, fired or not
    #[inline]
    pub fn matched(self) -> bool {
        !matches!(self, Outcome::NoMatch)
    }

    /// The suffix that fired, if any
    #[inline]
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Outcome::Applied(suffix) => Some(suffix),
            _ => None,
        }
    }
}

/// One stage of a language pipeline
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub name: &'static str,
    pub rules: &'static [Rule],
    /// When set, suffixes reaching outside this zone are not searched for at
    /// all, so shorter suffixes inside it can still match
    pub scope: Option<Zone>,
}

impl Step {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            name,
            rules,
            scope: None,
        }
    }

    /// Limit the suffix search to a zone
    pub const fn within(mut self, zone: Zone) -> Self {
        self.scope = Some(zone);
        self
    }

    /// Longest listed suffix ending the word, with its rule and start
    pub fn find(&self, buffer: &StemBuffer) -> Option<(&'static Rule, &'static str, usize)> {
        let floor = self.scope.map_or(0, |zone| buffer.zone_start(zone));
        let mut best: Option<(&'static Rule, &'static str, usize)> = None;
        for rule in self.rules {
            for &suffix in rule.suffixes {
                let Some(start) = buffer.suffix_start(suffix) else {
                    continue;
                };
                if start < floor || rule.passed_over(buffer, start) {
                    continue;
                }
                if best.map_or(true, |(_, _, best_start)| start < best_start) {
                    best = Some((rule, suffix, start));
                }
            }
        }
        best
    }

    /// Apply the rule of the longest matching suffix
    pub fn apply(&self, buffer: &mut StemBuffer) -> Outcome {
        let outcome = match self.find(buffer) {
            None => Outcome::NoMatch,
            Some((rule, suffix, start)) => {
                if rule.fire(buffer, start) {
                    Outcome::Applied(suffix)
                } else {
                    Outcome::Blocked(suffix)
                }
            }
        };
        log::trace!(
            "{}: {:?} -> {:?} {:?}",
            self.name,
            outcome,
            buffer.word(),
            buffer.regions()
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charset::CharSet;
    use crate::domain::regions::RegionLayout;
    use crate::domain::word::Word;

    static LAYOUT: RegionLayout = RegionLayout::new(CharSet::new("aeiouy"));

    fn buffer(word: &str) -> StemBuffer {
        StemBuffer::new(Word::new(word), &LAYOUT)
    }

    fn preceded_by_l(buffer: &StemBuffer, start: usize) -> bool {
        buffer.ends_with_before(start, "l")
    }

    fn add_e(buffer: &mut StemBuffer) {
        buffer.push_str("e");
    }

    static STEP: Step = Step::new(
        "test",
        &[
            Rule::replace(&["ational"], Zone::R1, "ate"),
            Rule::replace(&["tional"], Zone::R1, "tion"),
            Rule::delete(&["al"], Zone::R2),
            Rule::replace(&["ogi"], Zone::R1, "og").when(preceded_by_l),
            Rule::keep(&["ss"]),
            Rule::delete(&["s"], Zone::Word),
            Rule::delete(&["at"], Zone::R1).then(add_e),
        ],
    );

    #[test]
    fn test_longest_suffix_wins() {
        let mut b = buffer("relational");
        assert_eq!(STEP.apply(&mut b), Outcome::Applied("ational"));
        assert_eq!(b.word().to_string(), "relate");
    }

    #[test]
    fn test_blocked_suffix_stops_shorter_ones() {
        // "ational" lies outside R1 of "rational"; "tional" and "al" are not tried
        let mut b = buffer("rational");
        assert_eq!(STEP.apply(&mut b), Outcome::Blocked("ational"));
        assert_eq!(b.word().to_string(), "rational");
    }

    #[test]
    fn test_scope_lets_shorter_suffix_match() {
        static SCOPED: Step = Step::new(
            "scoped",
            &[
                Rule::delete(&["ational"], Zone::Word),
                Rule::delete(&["al"], Zone::Word),
            ],
        )
        .within(Zone::R1);
        let mut b = buffer("rational");
        assert_eq!(SCOPED.apply(&mut b), Outcome::Applied("al"));
        assert_eq!(b.word().to_string(), "ration");
    }

    #[test]
    fn test_guard_and_keep() {
        let mut b = buffer("geologi");
        assert_eq!(STEP.apply(&mut b), Outcome::Applied("ogi"));
        assert_eq!(b.word().to_string(), "geolog");

        let mut b = buffer("biologi");
        assert_eq!(STEP.apply(&mut b), Outcome::Applied("ogi"));

        let mut b = buffer("anthropogi");
        assert_eq!(STEP.apply(&mut b), Outcome::Blocked("ogi"));

        let mut b = buffer("caress");
        assert_eq!(STEP.apply(&mut b), Outcome::Applied("ss"));
        assert_eq!(b.word().to_string(), "caress");

        let mut b = buffer("cats");
        assert_eq!(STEP.apply(&mut b), Outcome::Applied("s"));
        assert_eq!(b.word().to_string(), "cat");
    }

    #[test]
    fn test_failed_search_guard_falls_back_to_shorter_suffix() {
        static FALLBACK: Step = Step::new(
            "fallback",
            &[
                Rule::delete(&["den"], Zone::Word).when_else_shorter(preceded_by_l),
                Rule::delete(&["n"], Zone::Word),
            ],
        );
        let mut b = buffer("kalden");
        assert_eq!(FALLBACK.apply(&mut b), Outcome::Applied("den"));
        assert_eq!(b.word().to_string(), "kal");

        let mut b = buffer("kaden");
        assert_eq!(FALLBACK.apply(&mut b), Outcome::Applied("n"));
        assert_eq!(b.word().to_string(), "kade");
    }

    #[test]
    fn test_plain_guard_still_blocks() {
        static STRICT: Step = Step::new(
            "strict",
            &[
                Rule::delete(&["den"], Zone::Word).when(preceded_by_l),
                Rule::delete(&["n"], Zone::Word),
            ],
        );
        let mut b = buffer("kaden");
        assert_eq!(STRICT.apply(&mut b), Outcome::Blocked("den"));
        assert_eq!(b.word().to_string(), "kaden");
    }

    #[test]
    fn test_custom_action_returning_false_blocks() {
        fn refuse(_: &mut StemBuffer, _: usize) -> bool {
            false
        }
        fn drop_one(buffer: &mut StemBuffer, start: usize) -> bool {
            buffer.truncate(start + 1);
            true
        }
        static CUSTOM: Step = Step::new(
            "custom",
            &[
                Rule::custom(&["ing"], Zone::Word, refuse),
                Rule::custom(&["ed"], Zone::Word, drop_one),
            ],
        );
        let mut b = buffer("walking");
        assert_eq!(CUSTOM.apply(&mut b), Outcome::Blocked("ing"));
        assert_eq!(b.word().to_string(), "walking");

        let mut b = buffer("walked");
        assert_eq!(CUSTOM.apply(&mut b), Outcome::Applied("ed"));
        assert_eq!(b.word().to_string(), "walke");
    }

    #[test]
    fn test_follow_up_runs_after_action() {
        let mut b = buffer("conflat");
        assert_eq!(STEP.apply(&mut b), Outcome::Applied("at"));
        assert_eq!(b.word().to_string(), "confle");
    }

    #[test]
    fn test_no_match() {
        let mut b = buffer("xyz");
        assert_eq!(STEP.apply(&mut b), Outcome::NoMatch);
        assert!(!Outcome::NoMatch.matched());
        assert!(Outcome::Blocked("x").matched());
        assert_eq!(Outcome::Applied("s").suffix(), Some("s"));
    }
}
