//! Display formatting shared by the table views

use sambucks_core::Timestamp;

/// Two-decimal price
pub fn price(value: f64) -> String {
    format!("{value:.2}")
}

/// Signed two-decimal percentage, e.g. `-1.25%`
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Integer with comma thousands separators, e.g. `1,234,567`
pub fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Wall-clock time of day, `HH:MM:SS` (UTC)
pub fn clock_time(time: Timestamp) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(5009), "5,009");
        assert_eq!(grouped(900_999), "900,999");
        assert_eq!(grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn test_price_and_percent() {
        assert_eq!(price(10.0), "10.00");
        assert_eq!(price(3.14159), "3.14");
        assert_eq!(percent(-1.257), "-1.26%");
        assert_eq!(percent(0.5), "0.50%");
    }

    #[test]
    fn test_clock_time() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(clock_time(t), "07:05:03");
    }
}
