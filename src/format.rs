//! Display helpers for listing cards.

/// Render a price as "$4.5M", "$32K" or "$500".
///
/// Rounds half up, so 32_500 renders as "$33K".
pub fn format_price(amount: u64) -> String {
    if amount >= 1_000_000 {
        let tenths = round_half_up(amount, 100_000);
        format!("${}.{}M", tenths / 10, tenths % 10)
    } else if amount >= 1_000 {
        format!("${}K", round_half_up(amount, 1_000))
    } else {
        format!("${}", group_thousands(amount))
    }
}

/// Render an area as "4,200 sqft".
pub fn format_area(sqft: u32) -> String {
    format!("{} sqft", group_thousands(sqft as u64))
}

/// Whole bathroom counts drop the fraction: 4.0 -> "4", 3.5 -> "3.5".
pub fn format_baths(baths: f32) -> String {
    if baths.fract() == 0.0 {
        format!("{}", baths as u32)
    } else {
        format!("{:.1}", baths)
    }
}

/// `amount / unit`, rounded half up without overflowing near `u64::MAX`.
fn round_half_up(amount: u64, unit: u64) -> u64 {
    let whole = amount / unit;
    if amount % unit >= unit / 2 {
        whole + 1
    } else {
        whole
    }
}

fn group_thousands(value: u64) -> String {
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
    fn formats_millions_with_one_decimal() {
        assert_eq!(format_price(4_500_000), "$4.5M");
        assert_eq!(format_price(1_000_000), "$1.0M");
        assert_eq!(format_price(8_500_000), "$8.5M");
        assert_eq!(format_price(2_949_999), "$2.9M");
        assert_eq!(format_price(4_350_000), "$4.4M");
    }

    #[test]
    fn formats_largest_price_without_overflow() {
        // 18_446_744_073_709_551_615 is 18_446_744_073_709.55 million
        assert_eq!(format_price(u64::MAX), "$18446744073709.6M");
        assert_eq!(round_half_up(u64::MAX, 1_000), u64::MAX / 1_000 + 1);
    }

    #[test]
    fn formats_thousands_without_decimals() {
        assert_eq!(format_price(32_000), "$32K");
        assert_eq!(format_price(1_000), "$1K");
        assert_eq!(format_price(32_500), "$33K");
    }

    #[test]
    fn formats_small_amounts_literally() {
        assert_eq!(format_price(500), "$500");
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
    }

    #[test]
    fn groups_area_digits() {
        assert_eq!(format_area(4_200), "4,200 sqft");
        assert_eq!(format_area(950), "950 sqft");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn trims_whole_bathroom_counts() {
        assert_eq!(format_baths(4.0), "4");
        assert_eq!(format_baths(3.5), "3.5");
    }
}
