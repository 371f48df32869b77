use crate::errors::ClientError;

/// Exchange identifiers used by the Terminal, each carrying a numeric code, an
/// ISO 10383 MIC (where one is assigned), and a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum Exchange {
  Comp = 0,
  Nqex = 1,
  Nqad = 2,
  Nyse = 3,
  Amex = 4,
  Cboe = 5,
  Isex = 6,
  Pacf = 7,
  Cinc = 8,
  Phil = 9,
  Opra = 10,
  Bost = 11,
  Nqnm = 12,
  Nqsc = 13,
  Nqbb = 14,
  Nqpk = 15,
  Nqag = 16,
  Chic = 17,
  Tse = 18,
  Cdnx = 19,
  Cme = 20,
  Nybt = 21,
  Mrcy = 22,
  Comx = 23,
  Cbot = 24,
  Nymx = 25,
  Kcbt = 26,
  Mgex = 27,
  Wce = 28,
  Onec = 29,
  Dowj = 30,
  Gemi = 31,
  Simx = 32,
  Ftse = 33,
  Eurx = 34,
  Enxt = 35,
  Dtn = 36,
  Lmt = 37,
  Lme = 38,
  Ipex = 39,
  Mx = 40,
  Wse = 41,
  C2 = 42,
  Miax = 43,
  Clrp = 44,
  Bark = 45,
  Ten4 = 46,
  Nqbx = 47,
  Hots = 48,
  Euus = 49,
  Eueu = 50,
  Encm = 51,
  Enid = 52,
  Enir = 53,
  Cfe = 54,
  Pbot = 55,
  Hwtb = 56,
  Nqnx = 57,
  Btrf = 58,
  Ntrf = 59,
  Bats = 60,
  Nylf = 61,
  Pink = 62,
  Baty = 63,
  Edge = 64,
  Edgx = 65,
  Rusl = 66,
  Cmex = 67,
  Iex = 68,
  Tba69 = 69,
  Tba70 = 70,
  Tba71 = 71,
  Tba72 = 72,
  Tba73 = 73,
  Tba74 = 74,
  Tba75 = 75,
  Tba76 = 76,
  Tba77 = 77,
  Tba78 = 78,
  Tba79 = 79,
}

/// `(mic, display name)` indexed by exchange code, mirroring the Terminal's table.
const EXCHANGE_INFO: [(&str, &str); 80] = [
  ("", "Comp"),
  ("XNMS", "Nasdaq Exchange"),
  ("XADF", "Nasdaq Alternative Display Facility"),
  ("XNYS", "New York Stock Exchange"),
  ("XASE", "American Stock Exchange"),
  ("XCBO", "Chicago Board Options Exchange"),
  ("XISX", "International Securities Exchange"),
  ("ARCX", "NYSE ARCA (Pacific)"),
  ("XCIS", "National Stock Exchange (Cincinnati)"),
  ("XPHL", "Philidelphia Stock Exchange"),
  ("OPRA", "Options Pricing Reporting Authority"),
  ("XBOS", "Boston Stock/Options Exchange"),
  ("XNGS", "Nasdaq Global+Select Market (NMS)"),
  ("XNCM", "Nasdaq Capital Market (SmallCap)"),
  ("OOTC", "Nasdaq Bulletin Board"),
  ("OOTC", "Nasdaq OTC"),
  ("XADF", "Nasdaq Aggregate Quote"),
  ("CXHI", "Chicago Stock Exchange"),
  ("XTSE", "Toronto Stock Exchange"),
  ("XTSX", "Canadian Venture Exchange"),
  ("XCME", "Chicago Mercantile Exchange"),
  ("IMAG", "New York Board of Trade"),
  ("MCRY", "ISE Mercury"),
  ("XCEC", "COMEX (division of NYMEX)"),
  ("GLBX", "Chicago Board of Trade"),
  ("XNYM", "New York Mercantile Exchange"),
  ("XKBT", "Kansas City Board of Trade"),
  ("XMGE", "Minneapolis Grain Exchange"),
  ("IFCA", "Winnipeg Commodity Exchange"),
  ("XOCH", "OneChicago Exchange"),
  ("", "Dow Jones Indicies"),
  ("GMNI", "ISE Gemini"),
  ("XSES", "Singapore International Monetary Exchange"),
  ("XLON", "London Stock Exchange"),
  ("XEUR", "Eurex"),
  ("XAMS", "EuroNext"),
  ("", "Data Transmission Network"),
  ("XLME", "London Metals Exchange Matched Trades"),
  ("XLME", "London Metals Exchange"),
  ("IEPA", "Intercontinental Exchange (IPE)"),
  ("XMOD", "Montreal Stock Exchange"),
  ("XTSX", "Winnipeg Stock Exchange"),
  ("C2OX", "CBOE C2 Option Exchange"),
  ("XMIO", "Miami Exchange"),
  ("XNYM", "NYMEX Clearport"),
  ("BARX", "Barclays"),
  ("", "TenFore"),
  ("XBOS", "NASDAQ Boston"),
  ("XEUR", "HotSpot Eurex US"),
  ("XEUR", "Eurex US"),
  ("XEUR", "Eurex EU"),
  ("XEUC", "Euronext Commodities"),
  ("XEUE", "Euronext Index Derivatives"),
  ("XEUI", "Euronext Interest Rates"),
  ("XCBF", "CBOE Futures Exchange"),
  ("XPBT", "Philadelphia Board of Trade"),
  ("XHAN", "Hannover WTB Exchange"),
  ("FINN", "FINRA/NASDAQ Trade Reporting Facility"),
  ("XADF", "BSE Trade Reporting Facility"),
  ("FINY", "NYSE Trade Reporting Facility"),
  ("BATS", "BATS Trading"),
  ("XNLI", "NYSE LIFFE metals contracts"),
  ("OTCM", "Pink Sheets"),
  ("BATY", "BATS Trading"),
  ("EDGA", "Direct Edge"),
  ("EDGX", "Direct Edge"),
  ("", "Russell Indexes"),
  ("XIOM", "CME Indexes"),
  ("IEXG", "Investors Exchange"),
  ("", "TBA Exchange 69"),
  ("", "TBA Exchange 70"),
  ("", "TBA Exchange 71"),
  ("", "TBA Exchange 72"),
  ("", "TBA Exchange 73"),
  ("", "TBA Exchange 74"),
  ("", "TBA Exchange 75"),
  ("", "TBA Exchange 76"),
  ("", "TBA Exchange 77"),
  ("", "TBA Exchange 78"),
  ("", "TBA Exchange 79"),
];

impl Exchange {
  pub fn code(self) -> u8 {
    self as u8
  }

  pub fn mic(self) -> &'static str {
    EXCHANGE_INFO[self.code() as usize].0
  }

  pub fn display_name(self) -> &'static str {
    EXCHANGE_INFO[self.code() as usize].1
  }

  pub fn from_code(code: u8) -> Result<Self, ClientError> {
    use Exchange::*;
    Ok(match code {
      0 => Comp,
      1 => Nqex,
      2 => Nqad,
      3 => Nyse,
      4 => Amex,
      5 => Cboe,
      6 => Isex,
      7 => Pacf,
      8 => Cinc,
      9 => Phil,
      10 => Opra,
      11 => Bost,
      12 => Nqnm,
      13 => Nqsc,
      14 => Nqbb,
      15 => Nqpk,
      16 => Nqag,
      17 => Chic,
      18 => Tse,
      19 => Cdnx,
      20 => Cme,
      21 => Nybt,
      22 => Mrcy,
      23 => Comx,
      24 => Cbot,
      25 => Nymx,
      26 => Kcbt,
      27 => Mgex,
      28 => Wce,
      29 => Onec,
      30 => Dowj,
      31 => Gemi,
      32 => Simx,
      33 => Ftse,
      34 => Eurx,
      35 => Enxt,
      36 => Dtn,
      37 => Lmt,
      38 => Lme,
      39 => Ipex,
      40 => Mx,
      41 => Wse,
      42 => C2,
      43 => Miax,
      44 => Clrp,
      45 => Bark,
      46 => Ten4,
      47 => Nqbx,
      48 => Hots,
      49 => Euus,
      50 => Eueu,
      51 => Encm,
      52 => Enid,
      53 => Enir,
      54 => Cfe,
      55 => Pbot,
      56 => Hwtb,
      57 => Nqnx,
      58 => Btrf,
      59 => Ntrf,
      60 => Bats,
      61 => Nylf,
      62 => Pink,
      63 => Baty,
      64 => Edge,
      65 => Edgx,
      66 => Rusl,
      67 => Cmex,
      68 => Iex,
      69 => Tba69,
      70 => Tba70,
      71 => Tba71,
      72 => Tba72,
      73 => Tba73,
      74 => Tba74,
      75 => Tba75,
      76 => Tba76,
      77 => Tba77,
      78 => Tba78,
      79 => Tba79,
      other => {
        return Err(ClientError::EnumParseError {
          enm: "Exchange",
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
  fn round_trips_known_code() {
    let ex = Exchange::from_code(3).unwrap();
    assert_eq!(ex, Exchange::Nyse);
    assert_eq!(ex.mic(), "XNYS");
    assert_eq!(ex.display_name(), "New York Stock Exchange");
  }

  #[test]
  fn opra_is_options_exchange() {
    assert_eq!(Exchange::from_code(10).unwrap(), Exchange::Opra);
  }

  #[test]
  fn out_of_range_code_errors() {
    assert!(Exchange::from_code(200).is_err());
  }
}
