//! Money and number formatting in the Indian (en-IN) convention.
//!
//! Indian grouping keeps the last three digits together and then groups by
//! two: `1234567` -> `12,34,567`.

/// Group the integer part of `n` with Indian separators.
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut result = String::new();
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.push(',');
    result.push_str(tail);
    result
}

/// `₹12,34,567.00`; negative amounts keep the sign in front of the symbol.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0.00".to_string();
    }
    let paise = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, group_indian(paise / 100), paise % 100)
}

/// Whole rupees, no decimals: `₹12,45,890`
pub fn format_inr_whole(amount: f64) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return "₹0".to_string();
    }
    format!("₹{}", group_indian(amount.round() as u64))
}

/// Compact axis label: `₹45k`, `₹1.1M`
pub fn format_inr_compact(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("₹{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("₹{}k", (amount / 1_000.0).round() as u64)
    } else {
        format!("₹{}", amount.round() as i64)
    }
}

/// Growth indicator text: `+12.5%`, `-3%`, `+0%`
pub fn format_growth(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let sign = if rounded >= 0.0 { "+" } else { "" };
    if rounded.fract() == 0.0 {
        format!("{}{}%", sign, rounded as i64)
    } else {
        format!("{}{:.1}%", sign, rounded)
    }
}

/// Tax rates come back as plain percentages (`9.0`, `2.5`)
pub fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}%", rate as i64)
    } else {
        format!("{}%", rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(123456), "1,23,456");
        assert_eq!(group_indian(1234567), "12,34,567");
        assert_eq!(group_indian(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(1234567.0), "₹12,34,567.00");
        assert_eq!(format_inr(118000.5), "₹1,18,000.50");
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(-2500.0), "-₹2,500.00");
        assert_eq!(format_inr(f64::NAN), "₹0.00");
    }

    #[test]
    fn test_format_inr_whole_and_compact() {
        assert_eq!(format_inr_whole(1245890.0), "₹12,45,890");
        assert_eq!(format_inr_compact(45000.0), "₹45k");
        assert_eq!(format_inr_compact(1100000.0), "₹1.1M");
        assert_eq!(format_inr_compact(250.0), "₹250");
    }

    #[test]
    fn test_format_growth() {
        assert_eq!(format_growth(12.5), "+12.5%");
        assert_eq!(format_growth(8.0), "+8%");
        assert_eq!(format_growth(-3.2), "-3.2%");
        assert_eq!(format_growth(0.0), "+0%");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(9.0), "9%");
        assert_eq!(format_rate(2.5), "2.5%");
    }
}
