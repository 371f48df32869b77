/// Exchange-reported trade condition codes.
///
/// Unlike [`crate::models::DataType`] or [`crate::models::MessageType`], an
/// unrecognized code here is not a protocol error: the Terminal's upstream
/// vendor adds condition codes over time, so [`TradeCondition::from_code`]
/// degrades to [`TradeCondition::Undefined`] rather than failing the whole
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(i32)]
pub enum TradeCondition {
  Regular = 0,
  FormT = 1,
  OutOfSeq = 2,
  AvgPrc = 3,
  AvgPrcNasdaq = 4,
  OpenReportLate = 5,
  OpenReportOutOfSeq = 6,
  OpenReportInSeq = 7,
  PriorReferencePrice = 8,
  NextDaySale = 9,
  Bunched = 10,
  CashSale = 11,
  Seller = 12,
  SoldLast = 13,
  Rule127 = 14,
  BunchedSold = 15,
  NonBoardLot = 16,
  Posit = 17,
  AutoExecution = 18,
  Halt = 19,
  Delayed = 20,
  Reopen = 21,
  Acquisition = 22,
  CashMarket = 23,
  NextDayMarket = 24,
  BurstBasket = 25,
  OpenDetail = 26,
  IntraDetail = 27,
  BasketOnClose = 28,
  Rule155 = 29,
  Distribution = 30,
  Split = 31,
  Reserved = 32,
  CustomBasketCross = 33,
  AdjTerms = 34,
  Spread = 35,
  Straddle = 36,
  BuyWrite = 37,
  Combo = 38,
  Stpd = 39,
  Canc = 40,
  CancLast = 41,
  CancOpen = 42,
  CancOnly = 43,
  CancStpd = 44,
  MatchCross = 45,
  FastMarket = 46,
  Nominal = 47,
  Cabinet = 48,
  BlankPrice = 49,
  NotSpecified = 50,
  McOfficialClose = 51,
  SpecialTerms = 52,
  ContingentOrder = 53,
  InternalCross = 54,
  StoppedRegular = 55,
  StoppedSoldLast = 56,
  StoppedOutOfSeq = 57,
  Basis = 58,
  Vwap = 59,
  SpecialSession = 60,
  NanexAdmin = 61,
  OpenReport = 62,
  MarketOnClose = 63,
  NotDefined = 64,
  OutOfSeqPreMkt = 65,
  McOfficialOpen = 66,
  FuturesSpread = 67,
  OpenRange = 68,
  CloseRange = 69,
  NominalCabinet = 70,
  ChangingTrans = 71,
  ChangingTransCab = 72,
  NominalUpdate = 73,
  PitSettlement = 74,
  BlockTrade = 75,
  ExgForPhysical = 76,
  VolumeAdjustment = 77,
  VolatilityTrade = 78,
  YellowFlag = 79,
  FloorPrice = 80,
  OfficialPrice = 81,
  UnofficialPrice = 82,
  MidBidAskPrice = 83,
  EndSessionHigh = 84,
  EndSessionLow = 85,
  Backwardation = 86,
  Contango = 87,
  Holiday = 88,
  PreOpening = 89,
  PostFull = 90,
  PostRestricted = 91,
  ClosingAuction = 92,
  Batch = 93,
  Trading = 94,
  IntermarketSweep = 95,
  Derivative = 96,
  Reopening = 97,
  Closing = 98,
  CapElection = 99,
  SpotSettlement = 100,
  BasisHigh = 101,
  BasisLow = 102,
  Yield = 103,
  PriceVariation = 104,
  StockOption = 105,
  StoppedIm = 106,
  Benchmark = 107,
  TradeThruExempt = 108,
  Implied = 109,
  Otc = 110,
  MktSupervision = 111,
  Reserved77 = 112,
  Reserved91 = 113,
  ContingentUtp = 114,
  OddLot = 115,
  Reserved89 = 116,
  CorrectedLast = 117,
  OpraExtHours = 118,
  Reserved78 = 119,
  Reserved81 = 120,
  Reserved84 = 121,
  Reserved878 = 122,
  Reserved90 = 123,
  QualifiedContingentTrade = 124,
  SingleLegAuctionNonIso = 125,
  SingleLegAuctionIso = 126,
  SingleLegCrossNonIso = 127,
  SingleLegCrossIso = 128,
  SingleLegFloorTrade = 129,
  MultiLegAutoElectronicTrade = 130,
  MultiLegAuction = 131,
  /// Carries the upstream vendor's literal (negative) code for this condition.
  MultiLegCross = -132,
  MultiLegFloorTrade = 133,
  MultiLegAutoElecTradeAgainstSingleLeg = 134,
  StockOptionsAuction = 135,
  MultiLegAuctionAgainstSingleLeg = 136,
  MultiLegFloorTradeAgainstSingleLeg = 137,
  StockOptionsAutoElecTrade = 138,
  StockOptionsCross = 139,
  StockOptionsFloorTrade = 140,
  StockOptionsAutoElecTradeAgainstSingleLeg = 141,
  StockOptionsAuctionAgainstSingleLeg = 142,
  StockOptionsFloorTradeAgainstSingleLeg = 143,
  MultiLegFloorTradeOfProprietaryProducts = 144,
  BidAggressor = 145,
  AskAggressor = 146,
  MultiLateralCompressionTradeOfProprietaryDataProducts = 147,
  ExtendedHoursTrade = 148,
  Undefined = 10000,
}

impl TradeCondition {
  pub fn from_code(code: i32) -> Self {
    use TradeCondition::*;
    match code {
      0 => Regular,
      1 => FormT,
      2 => OutOfSeq,
      3 => AvgPrc,
      4 => AvgPrcNasdaq,
      5 => OpenReportLate,
      6 => OpenReportOutOfSeq,
      7 => OpenReportInSeq,
      8 => PriorReferencePrice,
      9 => NextDaySale,
      10 => Bunched,
      11 => CashSale,
      12 => Seller,
      13 => SoldLast,
      14 => Rule127,
      15 => BunchedSold,
      16 => NonBoardLot,
      17 => Posit,
      18 => AutoExecution,
      19 => Halt,
      20 => Delayed,
      21 => Reopen,
      22 => Acquisition,
      23 => CashMarket,
      24 => NextDayMarket,
      25 => BurstBasket,
      26 => OpenDetail,
      27 => IntraDetail,
      28 => BasketOnClose,
      29 => Rule155,
      30 => Distribution,
      31 => Split,
      32 => Reserved,
      33 => CustomBasketCross,
      34 => AdjTerms,
      35 => Spread,
      36 => Straddle,
      37 => BuyWrite,
      38 => Combo,
      39 => Stpd,
      40 => Canc,
      41 => CancLast,
      42 => CancOpen,
      43 => CancOnly,
      44 => CancStpd,
      45 => MatchCross,
      46 => FastMarket,
      47 => Nominal,
      48 => Cabinet,
      49 => BlankPrice,
      50 => NotSpecified,
      51 => McOfficialClose,
      52 => SpecialTerms,
      53 => ContingentOrder,
      54 => InternalCross,
      55 => StoppedRegular,
      56 => StoppedSoldLast,
      57 => StoppedOutOfSeq,
      58 => Basis,
      59 => Vwap,
      60 => SpecialSession,
      61 => NanexAdmin,
      62 => OpenReport,
      63 => MarketOnClose,
      64 => NotDefined,
      65 => OutOfSeqPreMkt,
      66 => McOfficialOpen,
      67 => FuturesSpread,
      68 => OpenRange,
      69 => CloseRange,
      70 => NominalCabinet,
      71 => ChangingTrans,
      72 => ChangingTransCab,
      73 => NominalUpdate,
      74 => PitSettlement,
      75 => BlockTrade,
      76 => ExgForPhysical,
      77 => VolumeAdjustment,
      78 => VolatilityTrade,
      79 => YellowFlag,
      80 => FloorPrice,
      81 => OfficialPrice,
      82 => UnofficialPrice,
      83 => MidBidAskPrice,
      84 => EndSessionHigh,
      85 => EndSessionLow,
      86 => Backwardation,
      87 => Contango,
      88 => Holiday,
      89 => PreOpening,
      90 => PostFull,
      91 => PostRestricted,
      92 => ClosingAuction,
      93 => Batch,
      94 => Trading,
      95 => IntermarketSweep,
      96 => Derivative,
      97 => Reopening,
      98 => Closing,
      99 => CapElection,
      100 => SpotSettlement,
      101 => BasisHigh,
      102 => BasisLow,
      103 => Yield,
      104 => PriceVariation,
      105 => StockOption,
      106 => StoppedIm,
      107 => Benchmark,
      108 => TradeThruExempt,
      109 => Implied,
      110 => Otc,
      111 => MktSupervision,
      112 => Reserved77,
      113 => Reserved91,
      114 => ContingentUtp,
      115 => OddLot,
      116 => Reserved89,
      117 => CorrectedLast,
      118 => OpraExtHours,
      119 => Reserved78,
      120 => Reserved81,
      121 => Reserved84,
      122 => Reserved878,
      123 => Reserved90,
      124 => QualifiedContingentTrade,
      125 => SingleLegAuctionNonIso,
      126 => SingleLegAuctionIso,
      127 => SingleLegCrossNonIso,
      128 => SingleLegCrossIso,
      129 => SingleLegFloorTrade,
      130 => MultiLegAutoElectronicTrade,
      131 => MultiLegAuction,
      -132 => MultiLegCross,
      133 => MultiLegFloorTrade,
      134 => MultiLegAutoElecTradeAgainstSingleLeg,
      135 => StockOptionsAuction,
      136 => MultiLegAuctionAgainstSingleLeg,
      137 => MultiLegFloorTradeAgainstSingleLeg,
      138 => StockOptionsAutoElecTrade,
      139 => StockOptionsCross,
      140 => StockOptionsFloorTrade,
      141 => StockOptionsAutoElecTradeAgainstSingleLeg,
      142 => StockOptionsAuctionAgainstSingleLeg,
      143 => StockOptionsFloorTradeAgainstSingleLeg,
      144 => MultiLegFloorTradeOfProprietaryProducts,
      145 => BidAggressor,
      146 => AskAggressor,
      147 => MultiLateralCompressionTradeOfProprietaryDataProducts,
      148 => ExtendedHoursTrade,
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
    assert_eq!(TradeCondition::from_code(0), TradeCondition::Regular);
    assert_eq!(TradeCondition::from_code(148), TradeCondition::ExtendedHoursTrade);
  }

  #[test]
  fn unknown_code_degrades_to_undefined() {
    assert_eq!(TradeCondition::from_code(9999), TradeCondition::Undefined);
  }
}
