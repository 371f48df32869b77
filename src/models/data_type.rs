use crate::errors::ClientError;

/// The 20-entry price-type multiplier table. Index 0 is the "no price" sentinel.
const PRICE_MULTIPLIERS: [f64; 20] = [
  0.0, 1e-9, 1e-8, 1e-7, 1e-6, 1e-5, 1e-4, 1e-3, 1e-2, 1e-1, 1.0, 1e1, 1e2, 1e3,
  1e4, 1e5, 1e6, 1e7, 1e8, 1e9,
];

/// Look up the scaling multiplier for a `PRICE_TYPE` column value.
///
/// `pt` outside `[0, 19]` is a protocol violation from the Terminal, not a
/// value this crate should silently clamp.
pub fn price_type_multiplier(pt: i32) -> Result<f64, ClientError> {
  PRICE_MULTIPLIERS
    .get(pt as usize)
    .copied()
    .ok_or(ClientError::EnumParseError {
      enm: "PriceType",
      value: pt as i64,
    })
}

/// Closed vocabulary of tick-table / stream-payload column types.
///
/// The wire code is the canonical identity; `is_price` selects which columns
/// the decoder scales through [`price_type_multiplier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(i32)]
pub enum DataType {
  Date = 0,
  MsOfDay = 1,
  Correction = 2,
  PriceType = 4,

  BidSize = 101,
  BidExchange = 102,
  Bid = 103,
  BidCondition = 104,
  AskSize = 105,
  AskExchange = 106,
  Ask = 107,
  AskCondition = 108,

  Midpoint = 111,
  Vwap = 112,
  Qwap = 113,
  Wap = 114,

  OpenInterest = 121,

  Sequence = 131,
  Size = 132,
  Condition = 133,
  Price = 134,

  Volume = 141,
  Count = 142,

  Theta = 151,
  Vega = 152,
  Delta = 153,
  Rho = 154,
  Epsilon = 155,
  Lambda = 156,

  Gamma = 161,
  Vanna = 162,
  Charm = 163,
  Vomma = 164,
  Veta = 165,
  Vera = 166,
  Sopdk = 167,

  Speed = 171,
  Zomma = 172,
  Color = 173,
  Ultima = 174,

  D1 = 181,
  D2 = 182,
  DualDelta = 183,
  DualGamma = 184,

  Open = 191,
  High = 192,
  Low = 193,
  Close = 194,

  ImpliedVol = 201,
  BidImpliedVol = 202,
  AskImpliedVol = 203,
  UnderlyingPrice = 204,

  Ratio = 211,
  Rating = 212,

  ExDate = 221,
  RecordDate = 222,
  PaymentDate = 223,
  AnnDate = 224,
  DividendAmount = 225,
  LessAmount = 226,
}

impl DataType {
  /// Whether this column's integer values are a price that must be scaled by
  /// the row's `PRICE_TYPE` multiplier.
  pub fn is_price(&self) -> bool {
    matches!(
      self,
      DataType::Bid
        | DataType::Ask
        | DataType::Midpoint
        | DataType::Vwap
        | DataType::Qwap
        | DataType::Wap
        | DataType::OpenInterest
        | DataType::Price
        | DataType::Theta
        | DataType::Vega
        | DataType::Delta
        | DataType::Rho
        | DataType::Epsilon
        | DataType::Lambda
        | DataType::Gamma
        | DataType::Vanna
        | DataType::Charm
        | DataType::Vomma
        | DataType::Veta
        | DataType::Vera
        | DataType::Sopdk
        | DataType::Speed
        | DataType::Zomma
        | DataType::Color
        | DataType::Ultima
        | DataType::D1
        | DataType::D2
        | DataType::DualDelta
        | DataType::DualGamma
        | DataType::Open
        | DataType::High
        | DataType::Low
        | DataType::Close
        | DataType::ImpliedVol
        | DataType::BidImpliedVol
        | DataType::AskImpliedVol
        | DataType::UnderlyingPrice
        | DataType::Ratio
        | DataType::Rating
        | DataType::DividendAmount
        | DataType::LessAmount
    )
  }

  /// Whether this column holds a YYYYMMDD date integer.
  pub fn is_date(&self) -> bool {
    matches!(
      self,
      DataType::Date
        | DataType::ExDate
        | DataType::RecordDate
        | DataType::PaymentDate
        | DataType::AnnDate
    )
  }

  pub fn from_code(code: i32) -> Result<Self, ClientError> {
    use DataType::*;
    Ok(match code {
      0 => Date,
      1 => MsOfDay,
      2 => Correction,
      4 => PriceType,
      101 => BidSize,
      102 => BidExchange,
      103 => Bid,
      104 => BidCondition,
      105 => AskSize,
      106 => AskExchange,
      107 => Ask,
      108 => AskCondition,
      111 => Midpoint,
      112 => Vwap,
      113 => Qwap,
      114 => Wap,
      121 => OpenInterest,
      131 => Sequence,
      132 => Size,
      133 => Condition,
      134 => Price,
      141 => Volume,
      142 => Count,
      151 => Theta,
      152 => Vega,
      153 => Delta,
      154 => Rho,
      155 => Epsilon,
      156 => Lambda,
      161 => Gamma,
      162 => Vanna,
      163 => Charm,
      164 => Vomma,
      165 => Veta,
      166 => Vera,
      167 => Sopdk,
      171 => Speed,
      172 => Zomma,
      173 => Color,
      174 => Ultima,
      181 => D1,
      182 => D2,
      183 => DualDelta,
      184 => DualGamma,
      191 => Open,
      192 => High,
      193 => Low,
      194 => Close,
      201 => ImpliedVol,
      202 => BidImpliedVol,
      203 => AskImpliedVol,
      204 => UnderlyingPrice,
      211 => Ratio,
      212 => Rating,
      221 => ExDate,
      222 => RecordDate,
      223 => PaymentDate,
      224 => AnnDate,
      225 => DividendAmount,
      226 => LessAmount,
      other => {
        return Err(ClientError::EnumParseError {
          enm: "DataType",
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
  fn price_type_zero_is_no_price() {
    assert_eq!(price_type_multiplier(0).unwrap(), 0.0);
  }

  #[test]
  fn price_type_ten_is_identity() {
    assert_eq!(price_type_multiplier(10).unwrap(), 1.0);
  }

  #[test]
  fn price_type_out_of_range_errors() {
    assert!(price_type_multiplier(20).is_err());
  }

  #[test]
  fn data_type_round_trips_known_codes() {
    assert!(matches!(DataType::from_code(134).unwrap(), DataType::Price));
    assert!(DataType::Price.is_price());
    assert!(!DataType::Sequence.is_price());
    assert!(DataType::Date.is_date());
  }

  #[test]
  fn data_type_unknown_code_errors() {
    assert!(DataType::from_code(9999).is_err());
  }
}
