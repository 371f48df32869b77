use std::time::Duration;

/// Connection parameters for a [`RequestClient`](crate::client::RequestClient).
///
/// Mirrors the shape of a manager config: plain data with a `Default` impl,
/// built up through [`ClientConfigBuilder`] when callers want a fluent API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
  pub host: String,
  pub request_port: u16,
  pub stream_port: u16,
  pub request_timeout: Duration,
  pub stream_timeout: Duration,
  pub connect_retries: u32,
  pub connect_backoff: Duration,
  pub client_version: String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      host: "127.0.0.1".to_string(),
      request_port: 11000,
      stream_port: 10000,
      request_timeout: Duration::from_secs(60),
      stream_timeout: Duration::from_secs(10),
      connect_retries: 15,
      connect_backoff: Duration::from_secs(1),
      client_version: "0.7.3".to_string(),
    }
  }
}

impl ClientConfig {
  pub fn builder() -> ClientConfigBuilder {
    ClientConfigBuilder::default()
  }
}

/// Fluent builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
  config: ClientConfig,
}

impl ClientConfigBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn host(mut self, host: impl Into<String>) -> Self {
    self.config.host = host.into();
    self
  }

  pub fn request_port(mut self, port: u16) -> Self {
    self.config.request_port = port;
    self
  }

  pub fn stream_port(mut self, port: u16) -> Self {
    self.config.stream_port = port;
    self
  }

  pub fn request_timeout(mut self, timeout: Duration) -> Self {
    self.config.request_timeout = timeout;
    self
  }

  pub fn stream_timeout(mut self, timeout: Duration) -> Self {
    self.config.stream_timeout = timeout;
    self
  }

  pub fn connect_retries(mut self, retries: u32) -> Self {
    self.config.connect_retries = retries;
    self
  }

  pub fn connect_backoff(mut self, backoff: Duration) -> Self {
    self.config.connect_backoff = backoff;
    self
  }

  pub fn client_version(mut self, version: impl Into<String>) -> Self {
    self.config.client_version = version.into();
    self
  }

  pub fn build(self) -> ClientConfig {
    self.config
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_matches_terminal_defaults() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.request_port, 11000);
    assert_eq!(cfg.stream_port, 10000);
    assert_eq!(cfg.connect_retries, 15);
  }

  #[test]
  fn builder_overrides_fields() {
    let cfg = ClientConfig::builder()
      .host("10.0.0.5")
      .request_port(21000)
      .connect_retries(3)
      .build();
    assert_eq!(cfg.host, "10.0.0.5");
    assert_eq!(cfg.request_port, 21000);
    assert_eq!(cfg.connect_retries, 3);
    assert_eq!(cfg.stream_port, 10000);
  }
}
