//! Defines the `ParameterName` enum, the closed set of forecast parameter codes
//! published by the pmp3g model.

use crate::types::tolerant::{deserialize_tolerant, serialize_code, TolerantCode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name of a forecast parameter, as carried in the `name` field of each
/// parameter in the forecast document.
///
/// See the [SMHI parameter table](https://opendata.smhi.se/apidocs/metfcst/parameters.html)
/// for units and value ranges. Codes the library does not know about decode to
/// [`ParameterName::Unknown`] instead of failing.
///
/// # Examples
///
/// ```
/// use smhi_forecast::{ParameterName, TolerantCode};
///
/// assert_eq!(ParameterName::from_code("t"), ParameterName::AirTemperature);
/// assert_eq!(ParameterName::from_code("T"), ParameterName::Unknown);
/// assert_eq!(ParameterName::WeatherSymbol.code(), "Wsymb2");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterName {
    /// `msl`: air pressure at mean sea level (hPa).
    AirPressure,
    /// `t`: air temperature (°C).
    AirTemperature,
    /// `vis`: horizontal visibility (km).
    Visibility,
    /// `wd`: wind direction (degrees).
    WindDirection,
    /// `ws`: wind speed (m/s).
    WindSpeed,
    /// `r`: relative humidity (%).
    RelativeHumidity,
    /// `tstm`: thunder probability (%).
    ThunderProbability,
    /// `tcc_mean`: mean total cloud cover (octas).
    CloudCoverTotal,
    /// `lcc_mean`: mean low level cloud cover (octas).
    CloudCoverLow,
    /// `mcc_mean`: mean medium level cloud cover (octas).
    CloudCoverMedium,
    /// `hcc_mean`: mean high level cloud cover (octas).
    CloudCoverHigh,
    /// `gust`: wind gust speed (m/s).
    WindGustSpeed,
    /// `pmin`: minimum precipitation intensity (mm/h).
    PrecipitationIntensityMin,
    /// `pmax`: maximum precipitation intensity (mm/h).
    PrecipitationIntensityMax,
    /// `spp`: percent of precipitation in frozen form (%).
    FrozenPrecipitation,
    /// `pcat`: precipitation category, see [`crate::PrecipitationCategory`].
    PrecipitationCategory,
    /// `pmean`: mean precipitation intensity (mm/h).
    PrecipitationIntensityMean,
    /// `pmedian`: median precipitation intensity (mm/h).
    PrecipitationIntensityMedian,
    /// `Wsymb2`: weather symbol, see [`crate::WeatherSymbol`].
    WeatherSymbol,
    /// Any code not listed above.
    #[default]
    Unknown,
}

impl ParameterName {
    /// Every known parameter, in the order the service documents them.
    pub const ALL: [ParameterName; 19] = [
        ParameterName::AirPressure,
        ParameterName::AirTemperature,
        ParameterName::Visibility,
        ParameterName::WindDirection,
        ParameterName::WindSpeed,
        ParameterName::RelativeHumidity,
        ParameterName::ThunderProbability,
        ParameterName::CloudCoverTotal,
        ParameterName::CloudCoverLow,
        ParameterName::CloudCoverMedium,
        ParameterName::CloudCoverHigh,
        ParameterName::WindGustSpeed,
        ParameterName::PrecipitationIntensityMin,
        ParameterName::PrecipitationIntensityMax,
        ParameterName::FrozenPrecipitation,
        ParameterName::PrecipitationCategory,
        ParameterName::PrecipitationIntensityMean,
        ParameterName::PrecipitationIntensityMedian,
        ParameterName::WeatherSymbol,
    ];
}

impl TolerantCode for ParameterName {
    const UNKNOWN: Self = ParameterName::Unknown;

    const KNOWN: &'static [(&'static str, Self)] = &[
        ("msl", ParameterName::AirPressure),
        ("t", ParameterName::AirTemperature),
        ("vis", ParameterName::Visibility),
        ("visibility", ParameterName::Visibility),
        ("wd", ParameterName::WindDirection),
        ("ws", ParameterName::WindSpeed),
        ("r", ParameterName::RelativeHumidity),
        ("tstm", ParameterName::ThunderProbability),
        ("tcc_mean", ParameterName::CloudCoverTotal),
        ("lcc_mean", ParameterName::CloudCoverLow),
        ("mcc_mean", ParameterName::CloudCoverMedium),
        ("hcc_mean", ParameterName::CloudCoverHigh),
        ("gust", ParameterName::WindGustSpeed),
        ("pmin", ParameterName::PrecipitationIntensityMin),
        ("pmax", ParameterName::PrecipitationIntensityMax),
        ("spp", ParameterName::FrozenPrecipitation),
        ("pcat", ParameterName::PrecipitationCategory),
        ("pmean", ParameterName::PrecipitationIntensityMean),
        ("pmedian", ParameterName::PrecipitationIntensityMedian),
        ("Wsymb2", ParameterName::WeatherSymbol),
        ("wsymb2", ParameterName::WeatherSymbol),
    ];

    fn code(&self) -> &'static str {
        match self {
            ParameterName::AirPressure => "msl",
            ParameterName::AirTemperature => "t",
            ParameterName::Visibility => "vis",
            ParameterName::WindDirection => "wd",
            ParameterName::WindSpeed => "ws",
            ParameterName::RelativeHumidity => "r",
            ParameterName::ThunderProbability => "tstm",
            ParameterName::CloudCoverTotal => "tcc_mean",
            ParameterName::CloudCoverLow => "lcc_mean",
            ParameterName::CloudCoverMedium => "mcc_mean",
            ParameterName::CloudCoverHigh => "hcc_mean",
            ParameterName::WindGustSpeed => "gust",
            ParameterName::PrecipitationIntensityMin => "pmin",
            ParameterName::PrecipitationIntensityMax => "pmax",
            ParameterName::FrozenPrecipitation => "spp",
            ParameterName::PrecipitationCategory => "pcat",
            ParameterName::PrecipitationIntensityMean => "pmean",
            ParameterName::PrecipitationIntensityMedian => "pmedian",
            ParameterName::WeatherSymbol => "Wsymb2",
            ParameterName::Unknown => "",
        }
    }
}

impl<'de> Deserialize<'de> for ParameterName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_tolerant(deserializer)
    }
}

impl Serialize for ParameterName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code(self, serializer)
    }
}

/// Formats the wire code, or `unknown` for [`ParameterName::Unknown`].
impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterName::Unknown => f.pad("unknown"),
            known => f.pad(known.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_known_code_round_trips() {
        for name in ParameterName::ALL {
            assert_eq!(ParameterName::from_code(name.code()), name);
        }
    }

    #[test]
    fn test_unrecognised_tokens_decode_to_unknown() {
        for raw in [
            json!(""),
            json!("T"),
            json!("MSL"),
            json!("does_not_exist"),
            json!(42),
            json!(1.5),
            json!(true),
            json!(null),
            json!(["t"]),
            json!({"name": "t"}),
        ] {
            let decoded: ParameterName = serde_json::from_value(raw.clone())
                .unwrap_or_else(|e| panic!("decoding {raw} raised {e}"));
            assert_eq!(decoded, ParameterName::Unknown, "for {raw}");
        }
    }

    #[test]
    fn test_aliases_encode_to_canonical_code() {
        let decoded: ParameterName = serde_json::from_value(json!("visibility")).unwrap();
        assert_eq!(decoded, ParameterName::Visibility);
        assert_eq!(serde_json::to_value(decoded).unwrap(), json!("vis"));

        let decoded: ParameterName = serde_json::from_value(json!("wsymb2")).unwrap();
        assert_eq!(decoded, ParameterName::WeatherSymbol);
        assert_eq!(serde_json::to_value(decoded).unwrap(), json!("Wsymb2"));
    }

    #[test]
    fn test_unknown_encodes_as_empty_string() {
        let encoded = serde_json::to_value(ParameterName::Unknown).unwrap();
        assert_eq!(encoded, json!(""));
        let decoded: ParameterName = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, ParameterName::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParameterName::WindSpeed.to_string(), "ws");
        assert_eq!(ParameterName::Unknown.to_string(), "unknown");
    }
}
