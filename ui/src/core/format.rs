//! Number formatting for chart labels and tooltips.

use crate::i18n::Language;

/// Integer with grouped thousands: `12,345` (en) / `12 345` (lv).
pub fn format_count(value: u64, lang: Language) -> String {
    let separator = match lang {
        Language::En => ",",
        Language::Lv => "\u{a0}",
    };
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// One decimal place, as shown on the GDP and employment charts.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}")
}

/// Round to one decimal place (the precision shares are reported with).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Shorten long axis labels to 17 characters plus an ellipsis.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(3);
        let head: String = label.chars().take(keep).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_per_language() {
        assert_eq!(format_count(0, Language::En), "0");
        assert_eq!(format_count(999, Language::En), "999");
        assert_eq!(format_count(1000, Language::En), "1,000");
        assert_eq!(format_count(1234567, Language::En), "1,234,567");
        assert_eq!(format_count(7420, Language::Lv), "7\u{a0}420");
    }

    #[test]
    fn long_labels_are_truncated_by_characters() {
        assert_eq!(truncate_label("Telecommunications", 20), "Telecommunications");
        assert_eq!(
            truncate_label("Datorprogrammatūras tiražēšana", 20),
            "Datorprogrammatūr..."
        );
    }

    #[test]
    fn percentages_keep_one_decimal() {
        assert_eq!(format_percent(5.0), "5.0");
        assert_eq!(round1(33.333), 33.3);
    }
}
