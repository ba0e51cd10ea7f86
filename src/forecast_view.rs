//! Contains `ForecastView`, the read-side query layer over a decoded
//! [`ForecastDocument`].
//!
//! A view sorts the document's entries by `valid_time` once, then answers
//! "what is the forecast now" and "how does this parameter evolve" queries
//! without ever failing: missing data comes back as `None` or as the sentinel
//! [`ParameterValue::unknown`].

use crate::types::forecast::{ForecastDocument, ForecastEntry};
use crate::types::parameter_name::ParameterName;
use crate::types::parameter_value::{ParameterValue, UNKNOWN_PARAMETER};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Decides which entries count as "current" relative to a reference instant.
///
/// # Examples
///
/// ```
/// use smhi_forecast::CutoffPolicy;
/// use chrono::{TimeZone, Utc};
///
/// let noon = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// assert_eq!(CutoffPolicy::Strict.threshold(noon), noon);
/// assert_eq!(
///     CutoffPolicy::skewed().threshold(noon),
///     Utc.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutoffPolicy {
    /// An entry is current from its `valid_time` onwards. The view is relevant
    /// while some entry lies strictly in the future.
    #[default]
    Strict,
    /// Entries stay current for `minutes` after their `valid_time`, absorbing
    /// clock and publication skew.
    Grace {
        /// Width of the grace window.
        minutes: u32,
    },
}

impl CutoffPolicy {
    /// A one hour grace window.
    pub const fn skewed() -> Self {
        CutoffPolicy::Grace { minutes: 60 }
    }

    /// The earliest `valid_time` still considered current at `as_of`.
    pub fn threshold(&self, as_of: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            CutoffPolicy::Strict => as_of,
            CutoffPolicy::Grace { minutes } => as_of - Duration::minutes(i64::from(*minutes)),
        }
    }
}

/// Sorted, time-aware queries over a [`ForecastDocument`].
///
/// Obtain one through [`ForecastDocument::view`] or [`ForecastDocument::view_with`].
///
/// # Examples
///
/// ```
/// use smhi_forecast::{decode_document, ParameterName};
/// use chrono::{TimeZone, Utc};
///
/// let body = r#"{
///   "approvedTime": "2024-01-15T10:05:00Z",
///   "referenceTime": "2024-01-15T10:00:00Z",
///   "geometry": {"type": "Point", "coordinates": [[17.70, 59.32]]},
///   "timeSeries": [
///     {"validTime": "2024-01-15T13:00:00Z", "parameters": [
///       {"name": "t", "levelType": "hl", "level": 2, "unit": "Cel", "values": [-1.0]}]},
///     {"validTime": "2024-01-15T12:00:00Z", "parameters": [
///       {"name": "t", "levelType": "hl", "level": 2, "unit": "Cel", "values": [-2.5]}]}
///   ]
/// }"#;
/// let document = decode_document(body.as_bytes())?;
/// let view = document.view();
///
/// let noon = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// assert_eq!(view.get_at(ParameterName::AirTemperature, noon).value(), -2.5);
///
/// let temperatures: Vec<f64> = view
///     .project(ParameterName::AirTemperature, |p| p.value())
///     .into_iter()
///     .map(|(_, value)| value)
///     .collect();
/// assert_eq!(temperatures, vec![-2.5, -1.0]);
/// # Ok::<(), smhi_forecast::ForecastError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ForecastView<'a> {
    document: &'a ForecastDocument,
    entries: Vec<&'a ForecastEntry>,
    cutoff: CutoffPolicy,
}

impl<'a> ForecastView<'a> {
    /// Builds a view, sorting the entries ascending by `valid_time`.
    pub fn new(document: &'a ForecastDocument, cutoff: CutoffPolicy) -> Self {
        let mut entries: Vec<&ForecastEntry> = document.time_series.iter().collect();
        entries.sort_by_key(|entry| entry.valid_time);
        Self {
            document,
            entries,
            cutoff,
        }
    }

    /// The document this view reads from.
    pub fn document(&self) -> &'a ForecastDocument {
        self.document
    }

    /// The cutoff policy in effect.
    pub fn cutoff(&self) -> CutoffPolicy {
        self.cutoff
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[&'a ForecastEntry] {
        &self.entries
    }

    /// Whether the forecast still says anything about the future.
    pub fn is_relevant(&self) -> bool {
        self.is_relevant_at(Utc::now())
    }

    /// [`ForecastView::is_relevant`] evaluated at `now`.
    ///
    /// Under [`CutoffPolicy::Strict`] some entry must be strictly after `now`.
    /// Under [`CutoffPolicy::Grace`] there must be a current entry at `now`.
    pub fn is_relevant_at(&self, now: DateTime<Utc>) -> bool {
        match self.cutoff {
            CutoffPolicy::Strict => self.entries.iter().any(|entry| entry.valid_time > now),
            CutoffPolicy::Grace { .. } => self.current_at(now).is_some(),
        }
    }

    /// The entry in effect right now.
    pub fn current(&self) -> Option<&'a ForecastEntry> {
        self.current_at(Utc::now())
    }

    /// The first entry, in time order, whose `valid_time` is at or after the
    /// cutoff threshold for `as_of`. `None` when every entry is older.
    pub fn current_at(&self, as_of: DateTime<Utc>) -> Option<&'a ForecastEntry> {
        let threshold = self.cutoff.threshold(as_of);
        self.entries
            .iter()
            .find(|entry| entry.valid_time >= threshold)
            .copied()
    }

    /// The named parameter of the current entry, or the sentinel.
    pub fn get(&self, name: ParameterName) -> &'a ParameterValue {
        self.get_at(name, Utc::now())
    }

    /// [`ForecastView::get`] evaluated at `as_of`.
    pub fn get_at(&self, name: ParameterName, as_of: DateTime<Utc>) -> &'a ParameterValue {
        match self.current_at(as_of) {
            Some(entry) => entry.get(name),
            None => &UNKNOWN_PARAMETER,
        }
    }

    /// Applies `extractor` to the named parameter of the current entry.
    pub fn get_with<T>(
        &self,
        name: ParameterName,
        extractor: impl FnOnce(&ParameterValue) -> T,
    ) -> T {
        extractor(self.get(name))
    }

    /// The named parameter of every entry, paired with the entry's `valid_time`,
    /// oldest first. Entries lacking the parameter contribute the sentinel.
    pub fn get_all(&self, name: ParameterName) -> Vec<(DateTime<Utc>, &'a ParameterValue)> {
        self.project(name, |parameter| parameter)
    }

    /// Like [`ForecastView::get_all`], mapping each parameter through `extractor`.
    pub fn project<T, F>(&self, name: ParameterName, extractor: F) -> Vec<(DateTime<Utc>, T)>
    where
        F: Fn(&'a ParameterValue) -> T,
    {
        self.entries
            .iter()
            .copied()
            .map(|entry| (entry.valid_time, extractor(entry.get(name))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, sample_document};

    #[test]
    fn test_entries_are_sorted() {
        let document = sample_document();
        let view = document.view();
        let times: Vec<_> = view.entries().iter().map(|e| e.valid_time).collect();
        assert_eq!(times, vec![at(11, 0), at(12, 0), at(13, 0)]);
    }

    #[test]
    fn test_current_at_exact_valid_time() {
        let document = sample_document();
        let current = document.view().current_at(at(12, 0)).unwrap();
        assert_eq!(current.valid_time, at(12, 0));
    }

    #[test]
    fn test_current_at_between_entries() {
        let document = sample_document();
        let strict = document.view().current_at(at(12, 30)).unwrap();
        assert_eq!(strict.valid_time, at(13, 0));

        let skewed = document
            .view_with(CutoffPolicy::skewed())
            .current_at(at(12, 30))
            .unwrap();
        assert_eq!(skewed.valid_time, at(12, 0));
    }

    #[test]
    fn test_current_is_none_when_everything_is_past() {
        let document = sample_document();
        assert!(document.view().current_at(at(14, 0)).is_none());
        assert!(document
            .view_with(CutoffPolicy::skewed())
            .current_at(at(14, 1))
            .is_none());
    }

    #[test]
    fn test_get_at_reads_current_entry() {
        let document = sample_document();
        let view = document.view();
        assert_eq!(view.get_at(ParameterName::AirTemperature, at(11, 30)).value(), -1.5);
        assert_eq!(view.get_at(ParameterName::WindSpeed, at(11, 30)).unit, "m/s");
    }

    #[test]
    fn test_get_at_returns_sentinel_for_missing_parameter() {
        let document = sample_document();
        let missing = document.view().get_at(ParameterName::ThunderProbability, at(12, 0));

        assert_eq!(missing.name, ParameterName::Unknown);
        assert_eq!(missing.level_type, crate::LevelType::Unknown);
        assert_eq!(missing.level, 0);
        assert_eq!(missing.unit, "");
        assert!(missing.values.is_empty());
    }

    #[test]
    fn test_get_at_returns_sentinel_without_current_entry() {
        let document = sample_document();
        let value = document.view().get_at(ParameterName::AirTemperature, at(18, 0));
        assert_eq!(value, ParameterValue::unknown());
    }

    #[test]
    fn test_get_all_is_chronological() {
        let document = sample_document();
        let series = document.view().get_all(ParameterName::AirTemperature);
        let pairs: Vec<_> = series.iter().map(|(t, p)| (*t, p.value())).collect();
        assert_eq!(
            pairs,
            vec![(at(11, 0), -2.0), (at(12, 0), -1.5), (at(13, 0), -0.5)]
        );
    }

    #[test]
    fn test_project_fills_gaps_with_sentinel() {
        let document = sample_document();
        let gusts = document
            .view()
            .project(ParameterName::WindGustSpeed, |p| p.values.len());
        assert_eq!(gusts, vec![(at(11, 0), 1), (at(12, 0), 0), (at(13, 0), 1)]);
    }

    #[test]
    fn test_is_relevant_strict() {
        let document = sample_document();
        let view = document.view();
        assert!(view.is_relevant_at(at(12, 59)));
        assert!(!view.is_relevant_at(at(13, 0)));
    }

    #[test]
    fn test_is_relevant_with_grace() {
        let document = sample_document();
        let view = document.view_with(CutoffPolicy::skewed());
        assert!(view.is_relevant_at(at(13, 30)));
        assert!(!view.is_relevant_at(at(14, 1)));
    }

    #[test]
    fn test_wall_clock_queries_on_a_past_forecast() {
        let document = sample_document();
        let view = document.view();

        assert!(!view.is_relevant());
        assert!(view.current().is_none());
        assert_eq!(view.get(ParameterName::AirTemperature), ParameterValue::unknown());
        assert_eq!(view.get_with(ParameterName::WindSpeed, |p| p.unit.clone()), "");
    }

    #[test]
    fn test_wall_clock_queries_on_an_upcoming_forecast() {
        let mut document = sample_document();
        let offset = Utc::now() - at(10, 0);
        for entry in &mut document.time_series {
            entry.valid_time += offset;
        }
        let view = document.view();

        assert!(view.is_relevant());
        assert_eq!(view.current().map(|e| e.valid_time), Some(at(11, 0) + offset));
        assert_eq!(view.get(ParameterName::AirTemperature).value(), -2.0);
        assert_eq!(view.get_with(ParameterName::AirTemperature, |p| p.values.len()), 1);
    }

    #[test]
    fn test_empty_document() {
        let mut document = sample_document();
        document.time_series.clear();
        let view = document.view();
        assert!(!view.is_relevant_at(at(0, 0)));
        assert!(view.current_at(at(0, 0)).is_none());
        assert!(view.get_all(ParameterName::AirTemperature).is_empty());
    }
}
