//! The decoded forecast document: metadata plus a time series of entries, each
//! holding the parameters valid at one instant.

use crate::forecast_view::{CutoffPolicy, ForecastView};
use crate::types::geometry::Geometry;
use crate::types::parameter_name::ParameterName;
use crate::types::parameter_value::{ParameterValue, UNKNOWN_PARAMETER};
use crate::types::weather_symbol::{PrecipitationCategory, WeatherSymbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped slice of the time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    /// The instant the parameters of this entry are valid for.
    pub valid_time: DateTime<Utc>,
    /// Parameters in the order the service sent them.
    pub parameters: Vec<ParameterValue>,
}

impl ForecastEntry {
    /// Looks up a parameter by name.
    ///
    /// Returns the sentinel [`ParameterValue::unknown`] when the entry has no such
    /// parameter, or when `name` is [`ParameterName::Unknown`] itself.
    pub fn get(&self, name: ParameterName) -> &ParameterValue {
        if name == ParameterName::Unknown {
            return &UNKNOWN_PARAMETER;
        }
        self.parameters
            .iter()
            .find(|parameter| parameter.name == name)
            .unwrap_or(&UNKNOWN_PARAMETER)
    }

    /// The `Wsymb2` parameter as a [`WeatherSymbol`], if present and in range.
    pub fn weather_symbol(&self) -> Option<WeatherSymbol> {
        self.code_of(ParameterName::WeatherSymbol)
            .and_then(WeatherSymbol::from_i64)
    }

    /// The `pcat` parameter as a [`PrecipitationCategory`], if present and in range.
    pub fn precipitation_category(&self) -> Option<PrecipitationCategory> {
        self.code_of(ParameterName::PrecipitationCategory)
            .and_then(PrecipitationCategory::from_i64)
    }

    fn code_of(&self, name: ParameterName) -> Option<i64> {
        let parameter = self.get(name);
        let value = *parameter.values.first()?;
        (value.fract() == 0.0).then_some(value as i64)
    }
}

/// A complete forecast for one grid point.
///
/// `time_series` is kept in the order the service sent it, which is not
/// guaranteed to be chronological. Use [`ForecastDocument::view`] for sorted,
/// time-aware queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDocument {
    /// When the forecast was approved for publication.
    pub approved_time: DateTime<Utc>,
    /// When the model run the forecast is based on was started.
    pub reference_time: DateTime<Utc>,
    /// The grid point the forecast is valid for.
    #[serde(default)]
    pub geometry: Geometry,
    /// The forecast entries.
    pub time_series: Vec<ForecastEntry>,
}

impl ForecastDocument {
    /// A query view using the strict cutoff policy.
    pub fn view(&self) -> ForecastView<'_> {
        ForecastView::new(self, CutoffPolicy::Strict)
    }

    /// A query view using an explicit cutoff policy.
    pub fn view_with(&self, cutoff: CutoffPolicy) -> ForecastView<'_> {
        ForecastView::new(self, cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::level_type::LevelType;
    use chrono::TimeZone;

    fn parameter(name: ParameterName, values: Vec<f64>) -> ParameterValue {
        ParameterValue {
            name,
            level_type: LevelType::GroundLevel,
            level: 0,
            unit: "category".to_string(),
            values,
        }
    }

    fn entry(parameters: Vec<ParameterValue>) -> ForecastEntry {
        ForecastEntry {
            valid_time: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            parameters,
        }
    }

    #[test]
    fn test_get_returns_sentinel_for_missing_parameter() {
        let entry = entry(vec![parameter(ParameterName::AirTemperature, vec![1.5])]);

        assert_eq!(entry.get(ParameterName::AirTemperature).value(), 1.5);
        assert_eq!(entry.get(ParameterName::WindSpeed), ParameterValue::unknown());
    }

    #[test]
    fn test_get_unknown_never_matches_degraded_parameters() {
        let entry = entry(vec![parameter(ParameterName::Unknown, vec![3.0])]);
        assert_eq!(entry.get(ParameterName::Unknown), ParameterValue::unknown());
    }

    #[test]
    fn test_symbol_helpers() {
        let entry = entry(vec![
            parameter(ParameterName::WeatherSymbol, vec![19.0]),
            parameter(ParameterName::PrecipitationCategory, vec![3.0]),
        ]);
        assert_eq!(entry.weather_symbol(), Some(WeatherSymbol::ModerateRain));
        assert_eq!(entry.precipitation_category(), Some(PrecipitationCategory::Rain));
    }

    #[test]
    fn test_symbol_helpers_reject_missing_or_fractional_codes() {
        let entry = entry(vec![parameter(ParameterName::WeatherSymbol, vec![2.5])]);
        assert_eq!(entry.weather_symbol(), None);
        assert_eq!(entry.precipitation_category(), None);
    }
}
