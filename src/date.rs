use chrono::NaiveDate;

use crate::errors::ClientError;

/// Parse a `YYYYMMDD` integer (as used throughout tick tables and stream
/// payloads) into a calendar date.
pub fn parse_yyyymmdd(raw: i32) -> Result<NaiveDate, ClientError> {
  if !(0..=99_999_999).contains(&raw) {
    return Err(ClientError::ParseError(format!(
      "date integer out of range: {raw}"
    )));
  }
  let year = raw / 10_000;
  let month = (raw / 100) % 100;
  let day = raw % 100;
  NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    .ok_or_else(|| ClientError::ParseError(format!("invalid YYYYMMDD date: {raw}")))
}

/// Encode a calendar date back into the `YYYYMMDD` integer form used on requests.
pub fn format_yyyymmdd(date: NaiveDate) -> i32 {
  date.format("%Y%m%d").to_string().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_valid_date() {
    let d = parse_yyyymmdd(20221115).unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2022, 11, 15).unwrap());
  }

  #[test]
  fn rejects_invalid_date() {
    assert!(parse_yyyymmdd(20221332).is_err());
  }

  #[test]
  fn round_trips_through_format() {
    let d = NaiveDate::from_ymd_opt(2022, 11, 15).unwrap();
    assert_eq!(format_yyyymmdd(d), 20221115);
    assert_eq!(parse_yyyymmdd(format_yyyymmdd(d)).unwrap(), d);
  }
}
