/// Round to cents. Monetary outputs on the wire carry two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(6.8333), 6.83);
        assert_eq!(round2(2.718), 2.72);
        assert_eq!(round2(-2.718), -2.72);
        assert_eq!(round2(20.0), 20.0);
    }
}
