//! Numeric validation functions

/// Outcome of coercing a raw text input into a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    /// The input was empty (after trimming); the value is absent, not zero
    Absent,
    /// The input had content that does not read as a finite number
    NotANumber,
    /// A finite number
    Value(f64),
}

/// Coerces raw text into a number.
///
/// Surrounding whitespace is ignored. Empty input is [`NumberInput::Absent`]
/// rather than `0`, and `NaN`/infinities are rejected.
pub fn coerce_number(raw: &str) -> NumberInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NumberInput::Absent;
    }

    // Rust's float grammar also admits "inf" and "NaN" spellings
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => NumberInput::Value(value),
        _ => NumberInput::NotANumber,
    }
}

/// Strictly greater than zero
pub fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Has no fractional part
pub fn is_integer(value: f64) -> bool {
    value.fract() == 0.0
}

/// Validates value is within an inclusive range
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}
