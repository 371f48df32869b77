use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::time::timeout;

use crate::errors::ClientError;
use crate::models::StreamResponseType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AckState {
  Pending,
  Subscribed,
  TimedOut,
  InvalidPerms,
  MaxStreamsReached,
}

/// Outcome of [`StreamCoordinator::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
  Subscribed,
  TimedOut,
  InvalidPerms,
  MaxStreamsReached,
}

#[derive(Debug, Default)]
struct Registry {
  next_id: u32,
  acks: HashMap<u32, AckState>,
}

/// Per-session subscription registry: allocates stream request ids and
/// correlates `REQ_RESPONSE` frames observed by the receiver back to the
/// caller waiting on [`StreamCoordinator::verify`].
///
/// A fresh coordinator is created for every `connect_stream` call; ids are
/// never carried across a reconnect.
#[derive(Debug, Clone)]
pub struct StreamCoordinator {
  registry: Arc<Mutex<Registry>>,
  notify: Arc<Notify>,
}

impl StreamCoordinator {
  pub fn new() -> Self {
    Self {
      registry: Arc::new(Mutex::new(Registry::default())),
      notify: Arc::new(Notify::new()),
    }
  }

  /// Allocate the next monotonic request id and mark it pending.
  pub fn allocate(&self) -> u32 {
    let mut reg = self.registry.lock();
    let id = reg.next_id;
    reg.next_id += 1;
    reg.acks.insert(id, AckState::Pending);
    id
  }

  /// Record an ack observed on the stream socket and wake any `verify` callers.
  pub fn record_ack(&self, req_id: u32, response_code: u32) -> Result<(), ClientError> {
    let state = match StreamResponseType::from_code(response_code)? {
      StreamResponseType::Subscribed => AckState::Subscribed,
      StreamResponseType::TimedOut => AckState::TimedOut,
      StreamResponseType::InvalidPerms => AckState::InvalidPerms,
      StreamResponseType::MaxStreamsReached => AckState::MaxStreamsReached,
    };
    self.registry.lock().acks.insert(req_id, state);
    self.notify.notify_waiters();
    Ok(())
  }

  /// Wait until `req_id`'s ack is recorded, or `deadline` elapses.
  pub async fn verify(
    &self,
    req_id: u32,
    deadline: Duration,
  ) -> Result<VerifyOutcome, ClientError> {
    let wait = async {
      loop {
        if let Some(state) = self.registry.lock().acks.get(&req_id).copied() {
          match state {
            AckState::Pending => {}
            AckState::Subscribed => return VerifyOutcome::Subscribed,
            AckState::TimedOut => return VerifyOutcome::TimedOut,
            AckState::InvalidPerms => return VerifyOutcome::InvalidPerms,
            AckState::MaxStreamsReached => return VerifyOutcome::MaxStreamsReached,
          }
        }
        self.notify.notified().await;
      }
    };
    timeout(deadline, wait)
      .await
      .map_err(|_| ClientError::Timeout(format!("subscription ack for request {req_id}")))
  }
}

impl Default for StreamCoordinator {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn verify_resolves_once_ack_recorded() {
    let coord = StreamCoordinator::new();
    let id = coord.allocate();
    coord.record_ack(id, 0).unwrap();
    let outcome = coord.verify(id, Duration::from_millis(50)).await.unwrap();
    assert_eq!(outcome, VerifyOutcome::Subscribed);
  }

  #[tokio::test]
  async fn verify_times_out_without_ack() {
    let coord = StreamCoordinator::new();
    let id = coord.allocate();
    let result = coord.verify(id, Duration::from_millis(20)).await;
    assert!(matches!(result, Err(ClientError::Timeout(_))));
  }

  #[tokio::test]
  async fn verify_wakes_on_concurrent_ack() {
    let coord = StreamCoordinator::new();
    let id = coord.allocate();
    let waiter = {
      let coord = coord.clone();
      tokio::spawn(async move { coord.verify(id, Duration::from_secs(1)).await })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;
    coord.record_ack(id, 3).unwrap();
    let outcome = waiter.await.unwrap().unwrap();
    assert_eq!(outcome, VerifyOutcome::InvalidPerms);
  }
}
