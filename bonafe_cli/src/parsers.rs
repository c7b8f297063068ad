use jiff::SignedDuration;

pub fn parse_positive_f64(input: &str) -> Result<f64, String> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{input}' is not a number"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("'{input}' must be a positive number"));
    }

    Ok(value)
}

pub fn parse_non_negative_f64(input: &str) -> Result<f64, String> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{input}' is not a number"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{input}' must be zero or a positive number"));
    }

    Ok(value)
}

/// Rounds to whole minutes, e.g. `1h 41min`.
pub fn format_duration(duration: SignedDuration) -> String {
    let minutes = (duration.as_secs_f64() / 60.0).round() as i64;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours == 0 {
        format!("{minutes}min")
    } else {
        format!("{hours}h {minutes:02}min")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_f64() {
        assert_eq!(parse_positive_f64("60"), Ok(60.0));
        assert_eq!(parse_positive_f64(" 42.5 "), Ok(42.5));
        assert!(parse_positive_f64("0").is_err());
        assert!(parse_positive_f64("-3").is_err());
        assert!(parse_positive_f64("inf").is_err());
        assert!(parse_positive_f64("sessenta").is_err());
    }

    #[test]
    fn test_parse_non_negative_f64() {
        assert_eq!(parse_non_negative_f64("0"), Ok(0.0));
        assert!(parse_non_negative_f64("-0.5").is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(SignedDuration::from_mins(41)), "41min");
        assert_eq!(format_duration(SignedDuration::from_mins(101)), "1h 41min");
        assert_eq!(format_duration(SignedDuration::from_hours(2)), "2h 00min");
        assert_eq!(format_duration(SignedDuration::from_secs(89)), "1min");
    }
}
