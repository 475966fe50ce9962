//! Rupee amount helpers.
//!
//! Amounts throughout the domain are whole rupees stored as `i64`. The backend
//! never sends paisa for this product, and the amount-in-words sentence on the
//! invoice is integer-only.

/// Format a rupee amount with Indian digit grouping.
///
/// The last three digits form one group, every group above it has two digits:
/// `1234567` → `"12,34,567"`. Negative amounts keep a leading minus sign.
pub fn format_rupees(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    let head_len = if digits.len() > 3 {
        // Everything above the final group of three splits into pairs.
        let head = &digits[..digits.len() - 3];
        let first = head.len() % 2;
        if first > 0 {
            grouped.push_str(&head[..first]);
        }
        for chunk in head.as_bytes()[first..].chunks(2) {
            if !grouped.is_empty() {
                grouped.push(',');
            }
            grouped.push_str(core::str::from_utf8(chunk).unwrap_or_default());
        }
        digits.len() - 3
    } else {
        0
    };

    if !grouped.is_empty() {
        grouped.push(',');
    }
    grouped.push_str(&digits[head_len..]);

    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
