//! Amount-in-words (Indian numbering system).
//!
//! The invoice footer spells the total as a sentence: peel off crore, lakh,
//! thousand and hundred groups in order, spell each quotient recursively, and
//! join a trailing sub-hundred remainder with "and" when a higher-order word
//! already exists. Integer rupees only; the product never bills paisa.

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Unit ladder, largest first. Quotients above each unit recurse, so amounts
/// beyond one crore read "<spelled> crore ..." as expected.
const UNITS: [(u64, &str); 4] = [
    (10_000_000, "crore"),
    (100_000, "lakh"),
    (1_000, "thousand"),
    (100, "hundred"),
];

/// Spell a rupee amount: `115` → `"One hundred and fifteen rupees"`.
pub fn amount_in_words(amount: u64) -> String {
    let spelled = spell(amount);
    let mut chars = spelled.chars();
    match chars.next() {
        Some(first) => format!("{}{} rupees", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

fn spell(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }
    if n < 100 {
        return below_hundred(n);
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rem = n;
    for (unit, name) in UNITS {
        if rem >= unit {
            parts.push(format!("{} {}", spell(rem / unit), name));
            rem %= unit;
        }
    }
    // n >= 100 guarantees at least one unit word, so the remainder always
    // takes the "and" joiner.
    if rem > 0 {
        parts.push(format!("and {}", below_hundred(rem)));
    }
    parts.join(" ")
}

/// 1..=99 only.
fn below_hundred(n: u64) -> String {
    debug_assert!((1..100).contains(&n));
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        unit => format!("{tens} {}", ONES[unit as usize]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_zero_rupees() {
        assert_eq!(amount_in_words(0), "Zero rupees");
    }

    #[test]
    fn teens_and_tens() {
        assert_eq!(amount_in_words(7), "Seven rupees");
        assert_eq!(amount_in_words(19), "Nineteen rupees");
        assert_eq!(amount_in_words(20), "Twenty rupees");
        assert_eq!(amount_in_words(42), "Forty two rupees");
        assert_eq!(amount_in_words(99), "Ninety nine rupees");
    }

    #[test]
    fn hundred_group_joins_remainder_with_and() {
        assert_eq!(amount_in_words(100), "One hundred rupees");
        assert_eq!(amount_in_words(115), "One hundred and fifteen rupees");
        assert_eq!(amount_in_words(999), "Nine hundred and ninety nine rupees");
    }

    #[test]
    fn indian_unit_ladder() {
        assert_eq!(amount_in_words(1_000), "One thousand rupees");
        assert_eq!(amount_in_words(100_000), "One lakh rupees");
        assert_eq!(amount_in_words(10_000_000), "One crore rupees");
        assert_eq!(
            amount_in_words(1_234_567),
            "Twelve lakh thirty four thousand five hundred and sixty seven rupees"
        );
        assert_eq!(
            amount_in_words(70_000_015),
            "Seven crore and fifteen rupees"
        );
    }

    #[test]
    fn quotients_above_crore_recurse() {
        assert_eq!(amount_in_words(1_000_000_000), "One hundred crore rupees");
        assert_eq!(
            amount_in_words(250_000_000),
            "Twenty five crore rupees"
        );
    }

    proptest! {
        /// Property: output is always capitalized, ends in " rupees", and the
        /// "and" joiner never leads the sentence.
        #[test]
        fn sentence_shape_holds(n in 0u64..100_000_000_000) {
            let words = amount_in_words(n);
            prop_assert!(words.ends_with(" rupees"));
            let first = words.chars().next().unwrap();
            prop_assert!(first.is_ascii_uppercase());
            prop_assert!(!words.starts_with("And "));
            // No double spaces from empty segments.
            prop_assert!(!words.contains("  "));
        }
    }
}
