/// Parse a positive, finite number of seconds.
///
/// Accepts integers and decimals (`1`, `0.5`). Rejects zero, negatives,
/// `NaN` and infinities so bad input fails at argument parsing.
///
/// # Errors
///
/// Returns an error message if the value is not a positive number.
pub fn parse_seconds(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number of seconds"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("seconds must be a positive number, got '{s}'"));
    }

    Ok(value)
}
