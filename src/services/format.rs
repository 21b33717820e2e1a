//! Display formatting for table cells

/// Format an amount as whole rupees with Indian digit grouping,
/// e.g. `2100000.0` -> `₹21,00,000`.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Currency cell text; missing amounts render as a dash
pub fn format_optional_inr(amount: Option<f64>) -> String {
    amount.map(format_inr).unwrap_or_else(|| "-".to_string())
}

/// Rank bar fill ratio: rank 1 is nearly full, rank 100 and beyond empty
pub fn ranking_ratio(overall: u32) -> f64 {
    (100.0 - f64::from(overall)).clamp(0.0, 100.0) / 100.0
}

/// Fixed-width text bar for a 0.0..=1.0 ratio
pub fn ratio_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(209550.0), "₹2,09,550");
        assert_eq!(format_inr(2100000.0), "₹21,00,000");
        assert_eq!(format_inr(19800000.0), "₹1,98,00,000");
    }

    #[test]
    fn test_format_inr_rounds() {
        assert_eq!(format_inr(1234.6), "₹1,235");
        assert_eq!(format_inr(-45000.0), "-₹45,000");
    }

    #[test]
    fn test_optional_inr() {
        assert_eq!(format_optional_inr(None), "-");
        assert_eq!(format_optional_inr(Some(15000.0)), "₹15,000");
    }

    #[test]
    fn test_ranking_ratio() {
        assert_eq!(ranking_ratio(1), 0.99);
        assert_eq!(ranking_ratio(100), 0.0);
        assert_eq!(ranking_ratio(250), 0.0);
    }

    #[test]
    fn test_ratio_bar() {
        assert_eq!(ratio_bar(0.5, 4), "██░░");
        assert_eq!(ratio_bar(1.0, 3), "███");
        assert_eq!(ratio_bar(0.0, 2), "░░");
    }
}
