use rust_decimal::Decimal;

/// Strike prices travel the wire as integer milli-USD (USD × 1000) to avoid
/// the binary-floating-point drift a `f64` would introduce across repeated
/// encode/decode cycles.
pub fn milli_to_decimal(milli: i64) -> Decimal {
  Decimal::new(milli, 3)
}

pub fn decimal_to_milli(value: Decimal) -> i64 {
  (value * Decimal::new(1000, 0))
    .round()
    .try_into()
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trips_exact_milli_usd() {
    for milli in [0i64, 1, 999, 140_000, 145_000, 10_000_000] {
      let d = milli_to_decimal(milli);
      assert_eq!(decimal_to_milli(d), milli);
    }
  }

  #[test]
  fn displays_as_usd() {
    assert_eq!(milli_to_decimal(145_000).to_string(), "145.000");
  }
}
