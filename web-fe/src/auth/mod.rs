//! Connection login: input validation and the storage policy behind it.
//!
//! Nothing here touches the DOM, so the whole flow runs under `cargo test`
//! with in-memory stores.

mod credential;
mod error;
mod persist;

pub use credential::*;
pub use error::*;
pub use persist::*;

use crate::{config::AuthConfig, storage::KeyValueStore};

pub const SUBMIT_LABEL: &str = "Kết nối";
pub const PROCESSING_LABEL: &str = "Đang xác thực...";
pub const CONNECTED_MESSAGE: &str = "Kết nối thành công! Đang vào hệ thống...";

/// `Idle -> (Rejected | Processing -> Persisted)`. A storage failure during
/// completion lands back in `Rejected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Processing,
    Rejected,
    Persisted,
}

impl SubmitPhase {
    /// The submit button is disabled only while waiting out the delay.
    pub fn is_processing(self) -> bool {
        self == SubmitPhase::Processing
    }

    pub fn submit_label(self) -> &'static str {
        if self.is_processing() {
            PROCESSING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Applies the outcome of validating a new submit. The current phase is
    /// ignored, so a submit while processing simply starts another round.
    pub fn validated<T>(self, outcome: &Result<T, AuthError>) -> Self {
        match outcome {
            Ok(_) => SubmitPhase::Processing,
            Err(_) => SubmitPhase::Rejected,
        }
    }

    /// Applies the outcome of persisting after the delay. Either way the
    /// button comes back.
    pub fn completed<T>(self, outcome: &Result<T, AuthError>) -> Self {
        match outcome {
            Ok(_) => SubmitPhase::Persisted,
            Err(_) => SubmitPhase::Rejected,
        }
    }
}

/// A submission that passed validation and is waiting out the auth delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub credential: ConnectionCredential,
    pub save_locally: bool,
}

impl PendingSubmit {
    pub fn begin(
        url: &str,
        api_key: &str,
        save_locally: bool,
        config: &AuthConfig,
    ) -> Result<Self, AuthError> {
        let credential = ConnectionCredential::validate(url, api_key, config)?;
        Ok(Self {
            credential,
            save_locally,
        })
    }

    pub fn complete(
        self,
        durable: &dyn KeyValueStore,
        session: &dyn KeyValueStore,
    ) -> Result<ConnectionCredential, AuthError> {
        persist(&self.credential, self.save_locally, durable, session)?;
        Ok(self.credential)
    }
}
