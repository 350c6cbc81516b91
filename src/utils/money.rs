/// Round a monetary amount to whole cents. Deposit and transfer rows are
/// recorded rounded; balances accumulate the rounded figures.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_exact_cent_amounts_unchanged() {
        assert_eq!(round_cents(120.55), 120.55);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn rounds_repeating_fractions_to_cents() {
        assert_eq!(round_cents(10.0 / 3.0), 3.33);
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
    }

    #[test]
    fn negative_amounts_round_toward_the_nearest_cent() {
        assert_eq!(round_cents(-10.0 / 3.0), -3.33);
    }
}
