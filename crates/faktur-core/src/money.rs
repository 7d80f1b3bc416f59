//! IDR amount formatting, matching `id-ID` locale output:
//! dot thousands separators, zero fraction digits.

/// Format a whole-rupiah amount with the `Rp` prefix, e.g. `Rp 1.234.567`.
pub fn format_rupiah(amount: i64) -> String {
    if amount < 0 {
        format!("-Rp {}", group_thousands(amount.unsigned_abs()))
    } else {
        format!("Rp {}", group_thousands(amount.unsigned_abs()))
    }
}

/// Format without the currency prefix, e.g. `1.234.567`.
///
/// Used for quantity cells, which share the locale grouping but are not
/// monetary.
pub fn format_plain(amount: i64) -> String {
    if amount < 0 {
        format!("-{}", group_thousands(amount.unsigned_abs()))
    } else {
        group_thousands(amount.unsigned_abs())
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(1_000), "Rp 1.000");
        assert_eq!(format_rupiah(1_234_567), "Rp 1.234.567");
        assert_eq!(format_rupiah(-5_000), "-Rp 5.000");
    }

    #[test]
    fn plain_variant() {
        assert_eq!(format_plain(12), "12");
        assert_eq!(format_plain(1_500_000), "1.500.000");
    }
}
