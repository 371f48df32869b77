use crate::errors::ClientError;

/// Tag byte on stream-socket frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum StreamMsgType {
  Credentials = 0,
  SessionToken = 1,
  Info = 2,
  Metadata = 3,
  Connected = 4,

  Ping = 10,
  Error = 11,
  Disconnected = 12,
  Reconnected = 13,

  Contract = 20,
  Quote = 21,
  Trade = 22,
  OpenInterest = 23,
  Ohlcvc = 24,

  Start = 30,
  Restart = 31,
  Stop = 32,

  ReqResponse = 40,
}

impl StreamMsgType {
  pub fn from_code(code: u8) -> Result<Self, ClientError> {
    use StreamMsgType::*;
    Ok(match code {
      0 => Credentials,
      1 => SessionToken,
      2 => Info,
      3 => Metadata,
      4 => Connected,
      10 => Ping,
      11 => Error,
      12 => Disconnected,
      13 => Reconnected,
      20 => Contract,
      21 => Quote,
      22 => Trade,
      23 => OpenInterest,
      24 => Ohlcvc,
      30 => Start,
      31 => Restart,
      32 => Stop,
      40 => ReqResponse,
      other => {
        return Err(ClientError::EnumParseError {
          enm: "StreamMsgType",
          value: other as i64,
        })
      }
    })
  }

  pub fn code(self) -> u8 {
    self as u8
  }
}

/// Acknowledgement code carried in a `REQ_RESPONSE` stream frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u32)]
pub enum StreamResponseType {
  /// Doesn't guarantee data will flow for the contract, only that the
  /// subscription itself was accepted.
  Subscribed = 0,
  TimedOut = 1,
  MaxStreamsReached = 2,
  InvalidPerms = 3,
}

impl StreamResponseType {
  pub fn from_code(code: u32) -> Result<Self, ClientError> {
    use StreamResponseType::*;
    Ok(match code {
      0 => Subscribed,
      1 => TimedOut,
      2 => MaxStreamsReached,
      3 => InvalidPerms,
      other => {
        return Err(ClientError::EnumParseError {
          enm: "StreamResponseType",
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
  fn stream_msg_type_round_trips() {
    assert_eq!(StreamMsgType::from_code(22).unwrap(), StreamMsgType::Trade);
  }

  #[test]
  fn stream_msg_type_unknown_errors() {
    assert!(StreamMsgType::from_code(255).is_err());
  }

  #[test]
  fn stream_response_type_round_trips() {
    assert_eq!(
      StreamResponseType::from_code(2).unwrap(),
      StreamResponseType::MaxStreamsReached
    );
  }
}
