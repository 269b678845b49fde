use crate::{CaptureState, CoreError, ModelLoader, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::{Mutex, watch};

/// Idempotent, awaitable model initialization.
///
/// The first `ensure_ready` call runs the loader. Callers arriving while a
/// load is in flight wait on the same gate and then observe its outcome;
/// callers arriving later return immediately from the terminal state.
pub struct CaptureReadiness<L> {
    loader: L,
    state: watch::Sender<CaptureState>,
    gate: Mutex<()>,
}

impl<L: ModelLoader> CaptureReadiness<L> {
    pub fn new(loader: L) -> Self {
        let (state, _) = watch::channel(CaptureState::Uninitialized);
        Self {
            loader,
            state,
            gate: Mutex::new(()),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> CaptureState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<CaptureState> {
        self.state.subscribe()
    }

    pub async fn ensure_ready(&self) -> CoreErrorResult<()> {
        let _gate = self.gate.lock().await;

        match self.state() {
            CaptureState::Ready => return Ok(()),
            CaptureState::Failed { reason } => {
                return Err(CoreError::CaptureUnavailable {
                    message: reason,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            CaptureState::Uninitialized | CaptureState::Loading => {}
        }

        self.state.send_replace(CaptureState::Loading);
        info!("Loading capture models");

        match self.loader.load().await {
            Ok(()) => {
                self.state.send_replace(CaptureState::Ready);
                info!("Capture models ready");
                Ok(())
            }
            Err(e) => {
                warn!("Capture model load failed: {}", e);
                self.state.send_replace(CaptureState::Failed {
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
