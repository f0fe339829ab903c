use crate::model::month::MonthKey;

// nl-NL short month names, matching what the web dashboard renders.
const MONTHS_NL: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Short month / 2-digit-year display label, e.g. "jun 24".
pub fn month_label(month: MonthKey) -> String {
    let idx = (month.month() - 1) as usize;
    format!("{} {:02}", MONTHS_NL[idx], month.year().rem_euclid(100))
}

/// Whole-euro amount with dot thousands separators, e.g. "€ 1.234".
/// Commission amounts are whole euros, so there is no fractional part.
pub fn format_eur(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("€ {}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(MonthKey::parse("2024-06-01").unwrap()), "jun 24");
        assert_eq!(month_label(MonthKey::parse("2023-03-01").unwrap()), "mrt 23");
        assert_eq!(month_label(MonthKey::parse("2030-12-01").unwrap()), "dec 30");
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(0), "€ 0");
        assert_eq!(format_eur(50), "€ 50");
        assert_eq!(format_eur(1_234), "€ 1.234");
        assert_eq!(format_eur(1_234_567), "€ 1.234.567");
    }
}
