use serde::{Deserialize, Deserializer};

pub fn ok_or_default<'a, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'a> + Default,
    D: Deserializer<'a>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Direction of a 24h change; zero counts as up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change < 0.0 { Trend::Down } else { Trend::Up }
    }
}

/// `$` amount with `,` thousands separators.
///
/// Whole amounts print without decimals, anything with cents prints two.
/// Sub-dollar amounts keep four decimals so they don't collapse to `$0`.
pub fn format_usd(price: f64) -> String {
    if !price.is_finite() {
        return "$-".to_string();
    }

    let decimals: u32 = if price != 0.0 && price.abs() < 1.0 { 4 } else { 2 };
    let scale = 10u64.pow(decimals);

    let scaled = (price.abs() * scale as f64).round();
    if scaled >= u64::MAX as f64 {
        return "$-".to_string();
    }
    let scaled = scaled as u64;
    let whole = scaled / scale;
    let frac = scaled % scale;

    let sign = if price < 0.0 && scaled > 0 { "-" } else { "" };
    let mut out = format!("{sign}${}", group_thousands(whole));

    if frac != 0 || decimals > 2 {
        out.push_str(&format!(".{frac:0width$}", width = decimals as usize));
    }

    out
}

/// Signed percent with two decimals, `+0.00%` for zero.
pub fn format_change(change: f64) -> String {
    // normalizes -0.0
    let change = if change == 0.0 { 0.0 } else { change };
    format!("{change:+.2}%")
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_out_of_range_is_a_dash() {
        assert_eq!(format_usd(f64::NAN), "$-");
        assert_eq!(format_usd(f64::INFINITY), "$-");
        assert_eq!(format_usd(1e18), "$-");
        assert_eq!(format_usd(-1e18), "$-");
    }

    #[test]
    fn usd_whole_amounts_have_no_decimals() {
        assert_eq!(format_usd(65000.0), "$65,000");
        assert_eq!(format_usd(3200.0), "$3,200");
        assert_eq!(format_usd(150.0), "$150");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn usd_keeps_two_decimals_for_cents() {
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(3200.5), "$3,200.50");
        assert_eq!(format_usd(999.999), "$1,000");
    }

    #[test]
    fn usd_sub_dollar_amounts() {
        assert_eq!(format_usd(0.5), "$0.5000");
        assert_eq!(format_usd(0.012345), "$0.0123");
    }

    #[test]
    fn usd_formatting_is_deterministic() {
        let first = format_usd(1234567.891);
        for _ in 0..10 {
            assert_eq!(format_usd(1234567.891), first);
        }
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn change_is_signed() {
        assert_eq!(format_change(2.5), "+2.50%");
        assert_eq!(format_change(-1.1), "-1.10%");
        assert_eq!(format_change(0.0), "+0.00%");
        assert_eq!(format_change(-0.0), "+0.00%");
    }

    #[test]
    fn trend_treats_zero_as_up() {
        assert_eq!(Trend::of(2.5), Trend::Up);
        assert_eq!(Trend::of(0.0), Trend::Up);
        assert_eq!(Trend::of(-0.0), Trend::Up);
        assert_eq!(Trend::of(-1.1), Trend::Down);
    }
}
