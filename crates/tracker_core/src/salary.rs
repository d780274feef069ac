use std::sync::LazyLock;

use regex::Regex;

static LPA_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)\s*LPA\b").expect("valid LPA regex")
});

static MONTHLY_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*₹\s*(\d+(?:\.\d+)?)\s*k\s*-\s*₹?\s*(\d+(?:\.\d+)?)\s*k\b.*\bmonth")
        .expect("valid monthly regex")
});

const MONTHS_PER_YEAR: f64 = 12.0;

/// Sort key for the free-text salary field.
///
/// `"8-12 LPA"` yields the plain midpoint (10). `"₹40k-60k per month"` yields the
/// monthly midpoint in thousands, annualized (600). Anything else yields 0.
pub fn salary_midpoint(text: &str) -> f64 {
    if let Some((low, high)) = capture_range(&LPA_RANGE, text) {
        return (low + high) / 2.0;
    }
    if let Some((low, high)) = capture_range(&MONTHLY_RANGE, text) {
        return (low + high) / 2.0 * MONTHS_PER_YEAR;
    }
    0.0
}

fn capture_range(pattern: &Regex, text: &str) -> Option<(f64, f64)> {
    let caps = pattern.captures(text)?;
    let low = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let high = caps.get(2)?.as_str().parse::<f64>().ok()?;
    Some((low, high))
}
