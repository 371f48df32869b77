use chrono::NaiveDate;

use crate::date::parse_yyyymmdd;
use crate::errors::ClientError;
use crate::models::sec_type::OptionRight;

/// Identity of an instrument: a root symbol, and for options an expiration,
/// strike (integer milli-USD), and right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Contract {
  pub root: String,
  pub is_option: bool,
  pub exp: Option<NaiveDate>,
  pub strike_milli: Option<i64>,
  pub right: Option<OptionRight>,
}

impl Contract {
  pub fn stock(root: impl Into<String>) -> Self {
    Self {
      root: root.into(),
      is_option: false,
      exp: None,
      strike_milli: None,
      right: None,
    }
  }

  pub fn option(
    root: impl Into<String>,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
  ) -> Self {
    Self {
      root: root.into(),
      is_option: true,
      exp: Some(exp),
      strike_milli: Some(strike_milli),
      right: Some(right),
    }
  }

  /// Decode a `Contract` from its variable-length wire representation.
  ///
  /// Layout: `total_len:u8, root_len:u8, root:ascii[root_len], is_option:u8`,
  /// and if `is_option`: `exp:u32, is_call:u8, reserved:u8, strike_milli:u32`.
  pub fn from_wire(data: &[u8]) -> Result<Self, ClientError> {
    if data.len() < 3 {
      return Err(ClientError::ParseError(
        "contract frame shorter than its fixed header".to_string(),
      ));
    }
    let root_len = data[1] as usize;
    let root_end = 2 + root_len;
    if data.len() < root_end + 1 {
      return Err(ClientError::ParseError(
        "contract frame truncated before root/is_option".to_string(),
      ));
    }
    let root = std::str::from_utf8(&data[2..root_end])
      .map_err(|e| ClientError::ParseError(format!("contract root is not ascii: {e}")))?
      .to_string();
    let is_option = data[root_end] == 1;
    if !is_option {
      return Ok(Self {
        root,
        is_option: false,
        exp: None,
        strike_milli: None,
        right: None,
      });
    }
    if data.len() < root_end + 11 {
      return Err(ClientError::ParseError(
        "contract frame truncated before option fields".to_string(),
      ));
    }
    let exp_raw = u32::from_be_bytes(data[root_end + 1..root_end + 5].try_into().unwrap());
    let is_call = data[root_end + 5] == 1;
    // root_end + 6 is a reserved byte.
    let strike_milli =
      u32::from_be_bytes(data[root_end + 7..root_end + 11].try_into().unwrap()) as i64;
    let exp = parse_yyyymmdd(exp_raw as i32)?;
    let right = if is_call {
      OptionRight::Call
    } else {
      OptionRight::Put
    };
    Ok(Self {
      root,
      is_option: true,
      exp: Some(exp),
      strike_milli: Some(strike_milli),
      right: Some(right),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn encode_stock(root: &str) -> Vec<u8> {
    let mut v = vec![0u8, root.len() as u8];
    v.extend_from_slice(root.as_bytes());
    v.push(0); // is_option = false
    v[0] = v.len() as u8;
    v
  }

  fn encode_option(root: &str, exp: u32, is_call: bool, strike_milli: u32) -> Vec<u8> {
    let mut v = vec![0u8, root.len() as u8];
    v.extend_from_slice(root.as_bytes());
    v.push(1); // is_option = true
    v.extend_from_slice(&exp.to_be_bytes());
    v.push(if is_call { 1 } else { 0 });
    v.push(0); // reserved
    v.extend_from_slice(&strike_milli.to_be_bytes());
    v[0] = v.len() as u8;
    v
  }

  #[test]
  fn decodes_stock_contract() {
    let wire = encode_stock("AAPL");
    let c = Contract::from_wire(&wire).unwrap();
    assert_eq!(c.root, "AAPL");
    assert!(!c.is_option);
    assert!(c.exp.is_none());
  }

  #[test]
  fn decodes_option_contract() {
    let wire = encode_option("AAPL", 20221216, true, 150000);
    let c = Contract::from_wire(&wire).unwrap();
    assert_eq!(c.root, "AAPL");
    assert!(c.is_option);
    assert_eq!(c.strike_milli, Some(150000));
    assert_eq!(c.right, Some(OptionRight::Call));
    assert_eq!(c.exp.unwrap(), NaiveDate::from_ymd_opt(2022, 12, 16).unwrap());
  }

  #[test]
  fn rejects_truncated_frame() {
    assert!(Contract::from_wire(&[0, 10, b'A']).is_err());
  }
}
