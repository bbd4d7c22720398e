/// Numeric id from a route segment. Anything that is not a number,
/// including a missing segment, becomes 0.
pub fn coerce_id(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return 0;
    };

    if let Ok(id) = raw.parse::<i64>() {
        return id;
    }

    match raw.parse::<f64>() {
        Ok(id) if id.is_finite() && id.fract() == 0.0 => id as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use super::coerce_id;

    #[test]
    fn test_coerce_id() {
        assert_eq!(coerce_id(Some("42")), 42);
        assert_eq!(coerce_id(Some(" 42 ")), 42);
        assert_eq!(coerce_id(Some("7.0")), 7);
        assert_eq!(coerce_id(Some("abc")), 0);
        assert_eq!(coerce_id(Some("4.5")), 0);
        assert_eq!(coerce_id(Some("NaN")), 0);
        assert_eq!(coerce_id(Some("")), 0);
        assert_eq!(coerce_id(None), 0);
    }
}
