//! Formatting of evaluated results.

/// Options for [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// The number of digits written after the decimal point.
    ///
    /// The default value is `2`.
    pub precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl FormatOptions {
    /// Returns a builder that starts from these options.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// Builder for [`FormatOptions`].
#[derive(Debug, Clone, Default)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of digits written after the decimal point.
    pub fn precision(mut self, precision: usize) -> Self {
        self.0.precision = precision;
        self
    }

    /// Build the options.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// Rounds to the given number of decimal places, with ties rounded towards positive infinity.
/// Integral and non-finite values are returned unchanged, and so is any value with no digits
/// beyond `precision` that an `f64` can hold.
pub fn round_to(value: f64, precision: usize) -> f64 {
    if !value.is_finite() || value.fract() == 0.0 {
        return value;
    }

    let scale = 10f64.powi(precision.min(i32::MAX as usize) as i32);
    let scaled = value * scale;
    // from 2^52 up, every f64 is an integer
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    (scaled + 0.5).floor() / scale
}

/// Rounds the value to two decimal places, with ties rounded towards positive infinity, so
/// `0.125` rounds to `0.13` and `-0.125` to `-0.12`. Integral values are returned unchanged.
pub fn round(value: f64) -> f64 {
    round_to(value, 2)
}

/// Formats the value with exactly [`FormatOptions::precision`] digits after the decimal point.
///
/// `NaN` is written as `NaN` and infinities as `Infinity` and `-Infinity`. Negative zero, and any
/// negative value that rounds to zero, is written without a sign.
pub fn format(value: f64, options: FormatOptions) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let rounded = round_to(value, options.precision);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", options.precision, rounded)
}
