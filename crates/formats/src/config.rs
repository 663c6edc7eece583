//! Format configuration

use serde::{Deserialize, Serialize};

/// Settings consulted by the built-in formats.
///
/// Date and time patterns use `chrono` strftime syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Decimal separator for `double`, `float`, `monetary`, `price` and `tax`.
    pub decimal_separator: String,

    /// Pattern used by the `date` format.
    pub date_format: String,

    /// Pattern used by the `time` format.
    pub time_format: String,

    /// Pattern used by the `longtime` format.
    pub long_time_format: String,

    /// Pattern used by the `datetime` format.
    pub date_time_format: String,

    /// Pattern used by the `longdatetime` format.
    pub long_date_time_format: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            date_format: "%m/%d/%Y".to_string(),
            time_format: "%H:%M".to_string(),
            long_time_format: "%H:%M:%S".to_string(),
            date_time_format: "%m/%d/%Y %H:%M".to_string(),
            long_date_time_format: "%m/%d/%Y %H:%M:%S".to_string(),
        }
    }
}

impl FormatConfig {
    /// Day-first date patterns (`dd/mm/yyyy`), common outside the US.
    #[must_use]
    pub fn day_first() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
            date_time_format: "%d/%m/%Y %H:%M".to_string(),
            long_date_time_format: "%d/%m/%Y %H:%M:%S".to_string(),
            ..Self::default()
        }
    }

    /// Sets the decimal separator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }
}
