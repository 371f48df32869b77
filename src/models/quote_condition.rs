/// Exchange-reported quote condition codes.
///
/// As with [`crate::models::TradeCondition`], unknown codes degrade to
/// [`QuoteCondition::Undefined`] instead of failing decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(i32)]
pub enum QuoteCondition {
  Regular = 0,
  BidAskAutoExec = 1,
  Rotation = 2,
  SpecialistAsk = 3,
  SpecialistBid = 4,
  Locked = 5,
  FastMarket = 6,
  SpecialistBidAsk = 7,
  OneSide = 8,
  OpeningQuote = 9,
  ClosingQuote = 10,
  MarketMakerClosed = 11,
  DepthOnAsk = 12,
  DepthOnBid = 13,
  DepthOnBidAsk = 14,
  Tier3 = 15,
  Crossed = 16,
  Halted = 17,
  OperationalHalt = 18,
  News = 19,
  NewsPending = 20,
  NonFirm = 21,
  DueToRelated = 22,
  Resume = 23,
  NoMarketMakers = 24,
  OrderImbalance = 25,
  OrderInflux = 26,
  Indicated = 27,
  PreOpen = 28,
  InViewOfCommon = 29,
  RelatedNewsPending = 30,
  RelatedNewsOut = 31,
  AdditionalInfo = 32,
  RelatedAddlInfo = 33,
  NoOpenResume = 34,
  Deleted = 35,
  RegulatoryHalt = 36,
  SecSuspension = 37,
  NonComliance = 38,
  FilingsNotCurrent = 39,
  CatsHalted = 40,
  Cats = 41,
  ExDivOrSplit = 42,
  Unassigned = 43,
  InsideOpen = 44,
  InsideClosed = 45,
  OfferWanted = 46,
  BidWanted = 47,
  Cash = 48,
  Inactive = 49,
  NationalBbo = 50,
  Nominal = 51,
  Cabinet = 52,
  NominalCabinet = 53,
  BlankPrice = 54,
  SlowBidAsk = 55,
  SlowList = 56,
  SlowBid = 57,
  SlowAsk = 58,
  BidOfferWanted = 59,
  SubPenny = 60,
  NonBbo = 61,
  Tba62 = 62,
  Tba63 = 63,
  Tba64 = 64,
  Tba65 = 65,
  Tba66 = 66,
  Tba67 = 67,
  Tba68 = 68,
  Tba69 = 69,
  Undefined = 10000,
}

impl QuoteCondition {
  pub fn from_code(code: i32) -> Self {
    use QuoteCondition::*;
    match code {
      0 => Regular,
      1 => BidAskAutoExec,
      2 => Rotation,
      3 => SpecialistAsk,
      4 => SpecialistBid,
      5 => Locked,
      6 => FastMarket,
      7 => SpecialistBidAsk,
      8 => OneSide,
      9 => OpeningQuote,
      10 => ClosingQuote,
      11 => MarketMakerClosed,
      12 => DepthOnAsk,
      13 => DepthOnBid,
      14 => DepthOnBidAsk,
      15 => Tier3,
      16 => Crossed,
      17 => Halted,
      18 => OperationalHalt,
      19 => News,
      20 => NewsPending,
      21 => NonFirm,
      22 => DueToRelated,
      23 => Resume,
      24 => NoMarketMakers,
      25 => OrderImbalance,
      26 => OrderInflux,
      27 => Indicated,
      28 => PreOpen,
      29 => InViewOfCommon,
      30 => RelatedNewsPending,
      31 => RelatedNewsOut,
      32 => AdditionalInfo,
      33 => RelatedAddlInfo,
      34 => NoOpenResume,
      35 => Deleted,
      36 => RegulatoryHalt,
      37 => SecSuspension,
      38 => NonComliance,
      39 => FilingsNotCurrent,
      40 => CatsHalted,
      41 => Cats,
      42 => ExDivOrSplit,
      43 => Unassigned,
      44 => InsideOpen,
      45 => InsideClosed,
      46 => OfferWanted,
      47 => BidWanted,
      48 => Cash,
      49 => Inactive,
      50 => NationalBbo,
      51 => Nominal,
      52 => Cabinet,
      53 => NominalCabinet,
      54 => BlankPrice,
      55 => SlowBidAsk,
      56 => SlowList,
      57 => SlowBid,
      58 => SlowAsk,
      59 => BidOfferWanted,
      60 => SubPenny,
      61 => NonBbo,
      62 => Tba62,
      63 => Tba63,
      64 => Tba64,
      65 => Tba65,
      66 => Tba66,
      67 => Tba67,
      68 => Tba68,
      69 => Tba69,
      10000 => Undefined,
      _ => Undefined,
    }
  }

  pub fn code(self) -> i32 {
    self as i32
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_code_round_trips() {
    assert_eq!(QuoteCondition::from_code(0), QuoteCondition::Regular);
    assert_eq!(QuoteCondition::from_code(17), QuoteCondition::Halted);
  }

  #[test]
  fn unknown_code_degrades_to_undefined() {
    assert_eq!(QuoteCondition::from_code(9999), QuoteCondition::Undefined);
  }
}
