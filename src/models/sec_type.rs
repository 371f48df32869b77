use crate::errors::ClientError;

/// Security type, carried as its variant name on the wire (`sec=OPTION`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SecType {
  Option,
  Stock,
  Future,
  Forward,
  Swap,
  Debt,
  Crypto,
  Warrant,
}

impl SecType {
  pub fn as_wire_str(&self) -> &'static str {
    match self {
      SecType::Option => "OPTION",
      SecType::Stock => "STOCK",
      SecType::Future => "FUTURE",
      SecType::Forward => "FORWARD",
      SecType::Swap => "SWAP",
      SecType::Debt => "DEBT",
      SecType::Crypto => "CRYPTO",
      SecType::Warrant => "WARRANT",
    }
  }

  pub fn from_wire_str(s: &str) -> Result<Self, ClientError> {
    Ok(match s {
      "OPTION" => SecType::Option,
      "STOCK" => SecType::Stock,
      "FUTURE" => SecType::Future,
      "FORWARD" => SecType::Forward,
      "SWAP" => SecType::Swap,
      "DEBT" => SecType::Debt,
      "CRYPTO" => SecType::Crypto,
      "WARRANT" => SecType::Warrant,
      other => {
        return Err(ClientError::ParseError(format!(
          "unrecognized sec type: {other}"
        )))
      }
    })
  }
}

/// CALL or PUT, carried as a single ASCII letter on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OptionRight {
  Call,
  Put,
}

impl OptionRight {
  pub fn as_wire_str(&self) -> &'static str {
    match self {
      OptionRight::Call => "C",
      OptionRight::Put => "P",
    }
  }

  pub fn from_wire_str(s: &str) -> Result<Self, ClientError> {
    match s {
      "C" => Ok(OptionRight::Call),
      "P" => Ok(OptionRight::Put),
      other => Err(ClientError::ParseError(format!(
        "unrecognized option right: {other}"
      ))),
    }
  }
}

/// Request sub-type for option historical/last/at-time calls (`req=<code>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u16)]
pub enum OptionReqType {
  Eod = 1,
  Quote = 101,
  Volume = 102,
  OpenInterest = 103,
  Ohlc = 104,
  OhlcQuote = 105,
  Trade = 201,
  ImpliedVolatility = 202,
  Greeks = 203,
  Liquidity = 204,
  LiquidityPlus = 205,
  ImpliedVolatilityVerbose = 206,
  TradeGreeks = 301,
  GreeksSecondOrder = 302,
  GreeksThirdOrder = 303,
  AltCalcs = 304,
}

impl OptionReqType {
  pub fn code(self) -> u16 {
    self as u16
  }

  pub fn from_code(code: u16) -> Result<Self, ClientError> {
    use OptionReqType::*;
    Ok(match code {
      1 => Eod,
      101 => Quote,
      102 => Volume,
      103 => OpenInterest,
      104 => Ohlc,
      105 => OhlcQuote,
      201 => Trade,
      202 => ImpliedVolatility,
      203 => Greeks,
      204 => Liquidity,
      205 => LiquidityPlus,
      206 => ImpliedVolatilityVerbose,
      301 => TradeGreeks,
      302 => GreeksSecondOrder,
      303 => GreeksThirdOrder,
      304 => AltCalcs,
      other => {
        return Err(ClientError::EnumParseError {
          enm: "OptionReqType",
          value: other as i64,
        })
      }
    })
  }
}

/// Request sub-type for stock historical/last calls (`req=<code>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u16)]
pub enum StockReqType {
  Eod = 1,
  Quote = 101,
  Volume = 102,
  Ohlc = 104,
  Trade = 201,
}

impl StockReqType {
  pub fn code(self) -> u16 {
    self as u16
  }

  pub fn from_code(code: u16) -> Result<Self, ClientError> {
    use StockReqType::*;
    Ok(match code {
      1 => Eod,
      101 => Quote,
      102 => Volume,
      104 => Ohlc,
      201 => Trade,
      other => {
        return Err(ClientError::EnumParseError {
          enm: "StockReqType",
          value: other as i64,
        })
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sec_type_round_trips() {
    assert_eq!(SecType::from_wire_str("OPTION").unwrap(), SecType::Option);
    assert_eq!(SecType::Stock.as_wire_str(), "STOCK");
  }

  #[test]
  fn option_right_round_trips() {
    assert_eq!(OptionRight::from_wire_str("C").unwrap(), OptionRight::Call);
    assert_eq!(OptionRight::Put.as_wire_str(), "P");
  }

  #[test]
  fn req_type_unknown_code_errors() {
    assert!(OptionReqType::from_code(9999).is_err());
    assert!(StockReqType::from_code(9999).is_err());
  }
}
