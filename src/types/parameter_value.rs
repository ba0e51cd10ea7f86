use crate::types::level_type::LevelType;
use crate::types::parameter_name::ParameterName;
use serde::{Deserialize, Serialize};

/// Sentinel returned by lookups that cannot resolve a parameter.
pub(crate) static UNKNOWN_PARAMETER: ParameterValue = ParameterValue {
    name: ParameterName::Unknown,
    level_type: LevelType::Unknown,
    level: 0,
    unit: String::new(),
    values: Vec::new(),
};

/// A single named measurement of a forecast entry.
///
/// `name` and `level_type` are decoded tolerantly (unknown codes become
/// `Unknown`); `level`, `unit` and `values` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterValue {
    /// Which parameter this is.
    #[serde(default)]
    pub name: ParameterName,
    /// The surface `level` is measured from.
    #[serde(default)]
    pub level_type: LevelType,
    /// Distance above `level_type`, in meters.
    pub level: i32,
    /// Unit of `values`, e.g. `"Cel"` or `"m/s"`.
    pub unit: String,
    /// Raw values. The point forecast carries exactly one.
    pub values: Vec<f64>,
}

impl ParameterValue {
    /// The sentinel value: unknown name and level type, level 0, empty unit, no values.
    ///
    /// ```
    /// use smhi_forecast::{ParameterName, ParameterValue};
    ///
    /// let sentinel = ParameterValue::unknown();
    /// assert_eq!(sentinel.name, ParameterName::Unknown);
    /// assert_eq!(sentinel.value(), 0.0);
    /// ```
    pub fn unknown() -> &'static ParameterValue {
        &UNKNOWN_PARAMETER
    }

    /// The first raw value, or `0.0` when there are none.
    pub fn value(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// Whether this value is the lookup sentinel or was decoded from an unrecognised name.
    pub fn is_unknown(&self) -> bool {
        self.name == ParameterName::Unknown
    }
}
