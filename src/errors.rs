use thiserror::Error;

/// Errors raised by the request client, the stream receiver, and the decoders.
#[derive(Debug, Error)]
pub enum ClientError {
  /// The control or stream socket could not be established or was lost mid-session.
  #[error("connection error: {0}")]
  ConnectionError(String),

  /// A read did not complete within the configured deadline.
  #[error("timed out waiting for {0}")]
  Timeout(String),

  /// The Terminal reported that the requested range has no data.
  #[error("no data: {0}")]
  NoData(String),

  /// The Terminal's upstream link is flapping; retry after a short delay.
  #[error("terminal reconnecting: {0}")]
  Reconnecting(String),

  /// Any other Terminal-reported error body.
  #[error("terminal error: {0}")]
  ResponseError(String),

  /// A header or body failed to decode even though its framing should have guaranteed it could.
  #[error("parse error: {0}")]
  ParseError(String),

  /// A wire code did not map to any known member of a closed enum.
  #[error("unrecognized {enm} code: {value}")]
  EnumParseError { enm: &'static str, value: i64 },
}

impl ClientError {
  /// Classify an `ERROR` response body per the Terminal's error-text convention.
  pub(crate) fn classify_response(body: &str) -> Self {
    let lower = body.to_ascii_lowercase();
    if lower.contains("no data") {
      ClientError::NoData(body.to_string())
    } else if lower.contains("disconnected") {
      ClientError::Reconnecting(body.to_string())
    } else {
      ClientError::ResponseError(body.to_string())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classifies_no_data() {
    match ClientError::classify_response("No data for the specified contract") {
      ClientError::NoData(_) => {}
      other => panic!("expected NoData, got {other:?}"),
    }
  }

  #[test]
  fn classifies_disconnected() {
    match ClientError::classify_response("Stream disconnected from upstream") {
      ClientError::Reconnecting(_) => {}
      other => panic!("expected Reconnecting, got {other:?}"),
    }
  }

  #[test]
  fn classifies_generic_response_error() {
    match ClientError::classify_response("Invalid request format") {
      ClientError::ResponseError(_) => {}
      other => panic!("expected ResponseError, got {other:?}"),
    }
  }
}
