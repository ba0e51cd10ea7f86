//! Defines the `WeatherSymbol` and `PrecipitationCategory` enums, mapping the
//! integer codes of the `Wsymb2` and `pcat` parameters to descriptive variants.

/// Represents the weather symbol forecast by the pmp3g model.
///
/// This enum maps the integer values of the `Wsymb2` parameter to weather
/// descriptions. See the
/// [SMHI parameter documentation](https://opendata.smhi.se/apidocs/metfcst/parameters.html#parameter-wsymb)
/// for the official definitions.
///
/// Use [`WeatherSymbol::from_i64`] to convert a raw value, or
/// [`crate::ForecastEntry::weather_symbol`] to read it straight from an entry.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum WeatherSymbol {
    /// Code 1: Clear sky.
    ClearSky = 1,
    /// Code 2: Nearly clear sky.
    NearlyClearSky = 2,
    /// Code 3: Variable cloudiness.
    VariableCloudiness = 3,
    /// Code 4: Halfclear sky.
    HalfclearSky = 4,
    /// Code 5: Cloudy sky.
    CloudySky = 5,
    /// Code 6: Overcast.
    Overcast = 6,
    /// Code 7: Fog.
    Fog = 7,
    /// Code 8: Light rain showers.
    LightRainShowers = 8,
    /// Code 9: Moderate rain showers.
    ModerateRainShowers = 9,
    /// Code 10: Heavy rain showers.
    HeavyRainShowers = 10,
    /// Code 11: Thunderstorm.
    Thunderstorm = 11,
    /// Code 12: Light sleet showers.
    LightSleetShowers = 12,
    /// Code 13: Moderate sleet showers.
    ModerateSleetShowers = 13,
    /// Code 14: Heavy sleet showers.
    HeavySleetShowers = 14,
    /// Code 15: Light snow showers.
    LightSnowShowers = 15,
    /// Code 16: Moderate snow showers.
    ModerateSnowShowers = 16,
    /// Code 17: Heavy snow showers.
    HeavySnowShowers = 17,
    /// Code 18: Light rain.
    LightRain = 18,
    /// Code 19: Moderate rain.
    ModerateRain = 19,
    /// Code 20: Heavy rain.
    HeavyRain = 20,
    /// Code 21: Thunder.
    Thunder = 21,
    /// Code 22: Light sleet.
    LightSleet = 22,
    /// Code 23: Moderate sleet.
    ModerateSleet = 23,
    /// Code 24: Heavy sleet.
    HeavySleet = 24,
    /// Code 25: Light snowfall.
    LightSnowfall = 25,
    /// Code 26: Moderate snowfall.
    ModerateSnowfall = 26,
    /// Code 27: Heavy snowfall.
    HeavySnowfall = 27,
}

impl WeatherSymbol {
    /// Attempts to convert a `Wsymb2` value into a `WeatherSymbol` variant.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherSymbol)` if `value` is a known symbol code (1-27).
    /// * `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smhi_forecast::WeatherSymbol;
    ///
    /// assert_eq!(WeatherSymbol::from_i64(7), Some(WeatherSymbol::Fog));
    /// assert_eq!(WeatherSymbol::from_i64(0), None);
    ///
    /// match WeatherSymbol::from_i64(26) {
    ///     Some(WeatherSymbol::ModerateSnowfall) => println!("Bring a shovel"),
    ///     Some(other) => println!("Weather is: {:?}", other),
    ///     None => println!("Unknown weather symbol."),
    /// }
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(WeatherSymbol::ClearSky),
            2 => Some(WeatherSymbol::NearlyClearSky),
            3 => Some(WeatherSymbol::VariableCloudiness),
            4 => Some(WeatherSymbol::HalfclearSky),
            5 => Some(WeatherSymbol::CloudySky),
            6 => Some(WeatherSymbol::Overcast),
            7 => Some(WeatherSymbol::Fog),
            8 => Some(WeatherSymbol::LightRainShowers),
            9 => Some(WeatherSymbol::ModerateRainShowers),
            10 => Some(WeatherSymbol::HeavyRainShowers),
            11 => Some(WeatherSymbol::Thunderstorm),
            12 => Some(WeatherSymbol::LightSleetShowers),
            13 => Some(WeatherSymbol::ModerateSleetShowers),
            14 => Some(WeatherSymbol::HeavySleetShowers),
            15 => Some(WeatherSymbol::LightSnowShowers),
            16 => Some(WeatherSymbol::ModerateSnowShowers),
            17 => Some(WeatherSymbol::HeavySnowShowers),
            18 => Some(WeatherSymbol::LightRain),
            19 => Some(WeatherSymbol::ModerateRain),
            20 => Some(WeatherSymbol::HeavyRain),
            21 => Some(WeatherSymbol::Thunder),
            22 => Some(WeatherSymbol::LightSleet),
            23 => Some(WeatherSymbol::ModerateSleet),
            24 => Some(WeatherSymbol::HeavySleet),
            25 => Some(WeatherSymbol::LightSnowfall),
            26 => Some(WeatherSymbol::ModerateSnowfall),
            27 => Some(WeatherSymbol::HeavySnowfall),
            _ => None,
        }
    }
}

/// The form of precipitation forecast by the `pcat` parameter.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PrecipitationCategory {
    /// Code 0: No precipitation.
    None = 0,
    /// Code 1: Snow.
    Snow = 1,
    /// Code 2: Snow and rain.
    SnowAndRain = 2,
    /// Code 3: Rain.
    Rain = 3,
    /// Code 4: Drizzle.
    Drizzle = 4,
    /// Code 5: Freezing rain.
    FreezingRain = 5,
    /// Code 6: Freezing drizzle.
    FreezingDrizzle = 6,
}

impl PrecipitationCategory {
    /// Converts a `pcat` value (0-6) into a variant, `None` for anything else.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(PrecipitationCategory::None),
            1 => Some(PrecipitationCategory::Snow),
            2 => Some(PrecipitationCategory::SnowAndRain),
            3 => Some(PrecipitationCategory::Rain),
            4 => Some(PrecipitationCategory::Drizzle),
            5 => Some(PrecipitationCategory::FreezingRain),
            6 => Some(PrecipitationCategory::FreezingDrizzle),
            _ => None,
        }
    }
}
