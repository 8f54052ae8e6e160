//! Keyword heuristics that turn one spoken or typed request into form fields.
//!
//! Extraction never fails. Each field is matched on its own; a field whose
//! cue is absent (or whose capture does not make sense) is simply left out
//! of the returned [`PreferencePatch`].

mod lexicon;
mod numerals;

use chrono::{Days, NaiveDate};
use log::debug;
use unicode_normalization::UnicodeNormalization;

pub use lexicon::{CompanionRule, Lexicon};
use numerals::parse_count;

use crate::types::{Preference, PreferencePatch};

/// Extracts a [`PreferencePatch`] from a transcript.
///
/// # Examples
///
/// ```
/// use tripparse::{Preference, TranscriptExtractor};
///
/// let patch = TranscriptExtractor::new()
///     .extract("想去北京玩，预算2万，和家人一起，喜欢美食和历史", &Preference::default());
///
/// assert_eq!(patch.destination.as_deref(), Some("北京"));
/// assert_eq!(patch.budget, Some(20_000.0));
/// assert_eq!(patch.companions.as_deref(), Some("家庭出行"));
/// ```
#[derive(Debug, Clone)]
pub struct TranscriptExtractor {
    lexicon: Lexicon,
    positional_destination: bool,
}

impl Default for TranscriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptExtractor {
    /// Extractor with the simplified Chinese lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::zh_cn())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            positional_destination: false,
        }
    }

    /// When no destination cue matches, use the first segment of the
    /// transcript as the destination.
    pub fn with_positional_destination(mut self, enabled: bool) -> Self {
        self.positional_destination = enabled;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Infers form fields from `transcript`.
    ///
    /// `current` supplies the start date for duration cues when the
    /// transcript itself names none.
    pub fn extract(&self, transcript: &str, current: &Preference) -> PreferencePatch {
        let text: String = transcript.nfkc().collect();

        let mut patch = PreferencePatch {
            notes: Some(transcript.to_string()),
            ..PreferencePatch::default()
        };

        patch.destination = self.destination(&text);

        let mut dates = self.dates(&text);
        patch.start_date = dates.next();
        patch.end_date = dates.next();
        if patch.end_date.is_none() {
            let start = patch.start_date.or(current.start_date);
            patch.end_date = start.and_then(|start| self.end_from_duration(&text, start));
        }

        patch.budget = self.budget(&text);
        patch.companions = self.companions(&text);

        let themes = self.themes(&text);
        if !themes.is_empty() {
            patch.themes = Some(themes);
        }

        debug!(
            "[{}] extracted destination={:?} start={:?} end={:?} budget={:?} companions={:?} themes={:?}",
            self.lexicon.locale,
            patch.destination,
            patch.start_date,
            patch.end_date,
            patch.budget,
            patch.companions,
            patch.themes
        );

        patch
    }

    fn destination(&self, text: &str) -> Option<String> {
        let cued = self
            .lexicon
            .destination
            .captures(text)
            .and_then(|caps| non_empty(caps.name("place")?.as_str()));
        if cued.is_some() || !self.positional_destination {
            return cued;
        }

        let positional = self
            .lexicon
            .segment_separators
            .split(text)
            .find_map(non_empty);
        debug!("positional destination: {:?}", positional);
        positional
    }

    /// Valid calendar dates in transcript order.
    fn dates<'t>(&'t self, text: &'t str) -> impl Iterator<Item = NaiveDate> + 't {
        self.lexicon.date.captures_iter(text).filter_map(|caps| {
            let year = caps.name("y")?.as_str().parse().ok()?;
            let month = caps.name("m")?.as_str().parse().ok()?;
            let day = caps.name("d")?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        })
    }

    /// `start + (N - 1)` days for the first `N days` cue that is not an
    /// ordinal such as `第一天`.
    fn end_from_duration(&self, text: &str, start: NaiveDate) -> Option<NaiveDate> {
        let days = self
            .lexicon
            .duration
            .captures_iter(text)
            .filter(|caps| {
                let before = caps.get(0).map_or("", |m| &text[..m.start()]);
                !self
                    .lexicon
                    .ordinal_markers
                    .iter()
                    .any(|marker| before.ends_with(marker))
            })
            .find_map(|caps| parse_count(caps.name("n")?.as_str()))?;
        start.checked_add_days(Days::new(u64::from(days.saturating_sub(1))))
    }

    fn budget(&self, text: &str) -> Option<f64> {
        let caps = self.lexicon.budget.captures(text)?;
        let amount = caps.name("amount")?;
        // `1.2.3` is not a number.
        let mut rest = text[amount.end()..].chars();
        if rest.next() == Some('.') && rest.next().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        let amount: f64 = amount.as_str().replace(',', "").parse().ok()?;
        let factor = self
            .lexicon
            .scale_factor(caps.name("scale").map(|m| m.as_str()))?;
        let budget = amount * factor;
        (budget.is_finite() && budget >= 0.0).then_some(budget)
    }

    fn companions(&self, text: &str) -> Option<String> {
        self.lexicon
            .companions
            .iter()
            .find(|rule| rule.is_match(text))
            .map(|rule| rule.label().to_string())
    }

    /// Stated likes first, then vocabulary hits, without duplicates.
    fn themes(&self, text: &str) -> Vec<String> {
        let liked = self
            .lexicon
            .likes
            .captures_iter(text)
            .filter_map(|caps| caps.name("items"))
            .flat_map(|items| self.lexicon.like_separators.split(items.as_str()))
            .filter_map(non_empty);

        let lower = text.to_lowercase();
        let scanned = self
            .lexicon
            .themes
            .iter()
            .filter(|theme| lower.contains(*theme))
            .map(|theme| theme.to_string());

        let mut themes: Vec<String> = Vec::new();
        for theme in liked.chain(scanned) {
            if !themes.iter().any(|t| t.to_lowercase() == theme.to_lowercase()) {
                themes.push(theme);
            }
        }
        themes
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
