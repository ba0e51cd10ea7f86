use crate::error::ForecastError;
use crate::types::coordinate::Coordinate;
use log::debug;
use url::Url;

pub(crate) const LONGITUDE_PLACEHOLDER: &str = "{LONGITUDE}";
pub(crate) const LATITUDE_PLACEHOLDER: &str = "{LATITUDE}";

/// Substitutes the coordinate into an endpoint template.
///
/// Fails with [`ForecastError::InvalidUrl`] only when the filled-in template is
/// not a valid URL, which for the default endpoint cannot happen.
///
/// # Examples
///
/// ```
/// use smhi_forecast::{build_url, Coordinate, DEFAULT_ENDPOINT};
///
/// let url = build_url(DEFAULT_ENDPOINT, &Coordinate::normalize(59.3258414, 17.7018733))?;
/// assert!(url.as_str().ends_with("/lon/17.701873/lat/59.325841/data.json"));
/// # Ok::<(), smhi_forecast::ForecastError>(())
/// ```
pub fn build_url(template: &str, coordinate: &Coordinate) -> Result<Url, ForecastError> {
    let raw = template
        .replace(LONGITUDE_PLACEHOLDER, &coordinate.longitude().to_string())
        .replace(LATITUDE_PLACEHOLDER, &coordinate.latitude().to_string());
    debug!("Built forecast URL {} for {}", raw, coordinate);
    Url::parse(&raw).map_err(|e| ForecastError::InvalidUrl(raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_longitude_comes_first_in_path() {
        let coordinate = Coordinate::normalize(59.3258414, 17.7018733);
        let url = build_url(DEFAULT_ENDPOINT, &coordinate).unwrap();
        assert_eq!(
            url.as_str(),
            "https://opendata-download-metfcst.smhi.se/api/category/pmp3g/version/2/geotype/point/lon/17.701873/lat/59.325841/data.json"
        );
    }

    #[test]
    fn test_negative_and_integral_coordinates() {
        let url = build_url(DEFAULT_ENDPOINT, &Coordinate::normalize(60.0, -0.5)).unwrap();
        assert!(url.path().ends_with("/lon/-0.5/lat/60/data.json"));
    }

    #[test]
    fn test_invalid_template() {
        let coordinate = Coordinate::normalize(1.0, 2.0);
        let result = build_url("not a url/{LONGITUDE}/{LATITUDE}", &coordinate);
        assert!(
            matches!(result, Err(ForecastError::InvalidUrl(raw, _)) if raw == "not a url/2/1")
        );
    }
}
