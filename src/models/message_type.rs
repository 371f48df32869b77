use crate::errors::ClientError;

/// Closed vocabulary of `Header.message_type` wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u16)]
pub enum MessageType {
  // internal client-communication codes
  Credentials = 0,
  SessionToken = 1,
  Info = 2,
  Metadata = 3,
  Connected = 4,
  Version = 5,

  // API-communication codes
  Ping = 100,
  Error = 101,
  Disconnected = 102,
  Reconnected = 103,
  ReqSyms = 104,
  SetSyms = 105,
  CantChangeSyms = 106,
  ChangedSyms = 107,
  Kill = 108,

  // client-data codes
  Hist = 200,
  AllExpirations = 201,
  AllStrikes = 202,
  HistEnd = 203,
  Last = 204,
  AllRoots = 205,
  ListEnd = 206,
  AllDates = 207,
  AtTime = 208,
  AllDatesBulk = 209,
  StreamReq = 210,
  StreamCallback = 211,
  StreamRemove = 212,

  // experimental codes
  RequestServerList = 300,
  RequestOptimalServer = 301,
  OptimalServer = 302,
  Packet = 303,
  BanIp = 304,
  Population = 305,
}

impl MessageType {
  pub fn from_code(code: u16) -> Result<Self, ClientError> {
    use MessageType::*;
    Ok(match code {
      0 => Credentials,
      1 => SessionToken,
      2 => Info,
      3 => Metadata,
      4 => Connected,
      5 => Version,
      100 => Ping,
      101 => Error,
      102 => Disconnected,
      103 => Reconnected,
      104 => ReqSyms,
      105 => SetSyms,
      106 => CantChangeSyms,
      107 => ChangedSyms,
      108 => Kill,
      200 => Hist,
      201 => AllExpirations,
      202 => AllStrikes,
      203 => HistEnd,
      204 => Last,
      205 => AllRoots,
      206 => ListEnd,
      207 => AllDates,
      208 => AtTime,
      209 => AllDatesBulk,
      210 => StreamReq,
      211 => StreamCallback,
      212 => StreamRemove,
      300 => RequestServerList,
      301 => RequestOptimalServer,
      302 => OptimalServer,
      303 => Packet,
      304 => BanIp,
      305 => Population,
      other => {
        return Err(ClientError::EnumParseError {
          enm: "MessageType",
          value: other as i64,
        })
      }
    })
  }

  pub fn code(self) -> u16 {
    self as u16
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trips_hist() {
    assert_eq!(MessageType::from_code(200).unwrap().code(), 200);
  }

  #[test]
  fn unknown_code_errors() {
    assert!(MessageType::from_code(9999).is_err());
  }
}
