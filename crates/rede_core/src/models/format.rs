/// Format an integer with `.` thousands separators, as rendered in pt-BR
/// (e.g. `1234567` -> `"1.234.567"`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}

/// Singular/plural institution count, e.g. `"1 instituição"`, `"12 instituições"`
pub fn format_institution_count(count: usize) -> String {
    if count == 1 {
        "1 instituição".to_string()
    } else {
        format!("{} instituições", format_thousands(count as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(7), "7");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1.000");
        assert_eq!(format_thousands(12_345), "12.345");
        assert_eq!(format_thousands(1_234_567), "1.234.567");
        assert_eq!(format_thousands(u64::MAX), "18.446.744.073.709.551.615");
    }

    #[test]
    fn test_format_institution_count() {
        assert_eq!(format_institution_count(0), "0 instituições");
        assert_eq!(format_institution_count(1), "1 instituição");
        assert_eq!(format_institution_count(1500), "1.500 instituições");
    }
}
