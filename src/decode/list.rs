use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::date::parse_yyyymmdd;
use crate::errors::ClientError;
use crate::strike::milli_to_decimal;

/// Split an ASCII comma-separated body into its raw string tokens.
pub fn decode_tokens(body: &[u8]) -> Result<Vec<String>, ClientError> {
  let text = std::str::from_utf8(body)
    .map_err(|e| ClientError::ParseError(format!("list body is not ascii: {e}")))?;
  if text.is_empty() {
    return Ok(Vec::new());
  }
  Ok(text.split(',').map(|s| s.to_string()).collect())
}

/// Decode a comma-separated list of `YYYYMMDD` dates.
pub fn decode_dates(body: &[u8]) -> Result<Vec<NaiveDate>, ClientError> {
  decode_tokens(body)?
    .into_iter()
    .map(|tok| {
      tok
        .parse::<i32>()
        .map_err(|e| ClientError::ParseError(format!("invalid date token {tok:?}: {e}")))
        .and_then(parse_yyyymmdd)
    })
    .collect()
}

/// Decode a comma-separated list of strikes, carried on the wire as integer
/// milli-USD, into exact decimal USD values.
pub fn decode_strikes(body: &[u8]) -> Result<Vec<Decimal>, ClientError> {
  decode_tokens(body)?
    .into_iter()
    .map(|tok| {
      tok
        .parse::<i64>()
        .map(milli_to_decimal)
        .map_err(|e| ClientError::ParseError(format!("invalid strike token {tok:?}: {e}")))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_plain_tokens() {
    let toks = decode_tokens(b"AAPL,MSFT,TSLA").unwrap();
    assert_eq!(toks, vec!["AAPL", "MSFT", "TSLA"]);
  }

  #[test]
  fn empty_body_is_empty_list() {
    assert!(decode_tokens(b"").unwrap().is_empty());
  }

  #[test]
  fn decodes_strikes_exactly() {
    let strikes = decode_strikes(b"140000,145000,150000").unwrap();
    assert_eq!(strikes[0].to_string(), "140.000");
    assert_eq!(strikes[1].to_string(), "145.000");
    assert_eq!(strikes[2].to_string(), "150.000");
  }

  #[test]
  fn decodes_dates() {
    let dates = decode_dates(b"20221114,20221115").unwrap();
    assert_eq!(dates[1], NaiveDate::from_ymd_opt(2022, 11, 15).unwrap());
  }
}
