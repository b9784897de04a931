//! One-shot position query.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use crate::error::LocationError;

/// Shown when the host offers no position capability at all.
pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by this platform.";

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn display_text(&self) -> String {
        format!(
            "Latitude: {}, Longitude: {}",
            self.latitude, self.longitude
        )
    }
}

/// A host position capability. May block, so it is queried off the UI thread.
pub trait PositionProvider: Send + 'static {
    fn current_position(&self) -> Result<Position, LocationError>;
}

impl<F> PositionProvider for F
where
    F: Fn() -> Result<Position, LocationError> + Send + 'static,
{
    fn current_position(&self) -> Result<Position, LocationError> {
        self()
    }
}

/// Provider answering from configuration: a fixed position, or a refusal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfiguredPosition {
    pub granted: bool,
    pub fix: Option<Position>,
}

impl PositionProvider for ConfiguredPosition {
    fn current_position(&self) -> Result<Position, LocationError> {
        if !self.granted {
            return Err(LocationError::PermissionDenied);
        }
        self.fix.ok_or(LocationError::PositionUnavailable)
    }
}

/// idle → pending → {resolved, failed}. Terminal states are never left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeState {
    /// No position capability; the probe never starts.
    Unsupported,
    Idle,
    Pending,
    Resolved(Position),
    Failed(LocationError),
}

/// Location probe bound to the location text surface.
pub struct LocationProbe {
    state: ProbeState,
    pending: Option<Receiver<Result<Position, LocationError>>>,
}

impl Default for LocationProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProbe {
    pub fn new() -> Self {
        Self {
            state: ProbeState::Idle,
            pending: None,
        }
    }

    pub fn unsupported() -> Self {
        Self {
            state: ProbeState::Unsupported,
            pending: None,
        }
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    /// Issue the query. Returns `false` (and does nothing) unless idle.
    pub fn start<P: PositionProvider>(&mut self, provider: P) -> bool {
        if self.state != ProbeState::Idle {
            return false;
        }
        let (tx, rx) = mpsc::channel();
        let spawned = std::thread::Builder::new()
            .name("location-probe".into())
            .spawn(move || {
                let _ = tx.send(provider.current_position());
            });
        match spawned {
            Ok(_) => {
                self.pending = Some(rx);
                self.state = ProbeState::Pending;
            }
            Err(e) => {
                log::warn!("could not start location query: {}", e);
                self.settle(Err(LocationError::Unknown));
            }
        }
        true
    }

    /// Pick up the query result if it has arrived. Returns `true` on transition.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => self.settle(result),
            Err(TryRecvError::Empty) => return false,
            // Provider panicked before answering.
            Err(TryRecvError::Disconnected) => self.settle(Err(LocationError::Unknown)),
        }
        true
    }

    /// Block up to `timeout` for the result. Returns `false` if still pending.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let Some(rx) = &self.pending else {
            return self.state != ProbeState::Pending;
        };
        match rx.recv_timeout(timeout) {
            Ok(result) => self.settle(result),
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => self.settle(Err(LocationError::Unknown)),
        }
        true
    }

    fn settle(&mut self, result: Result<Position, LocationError>) {
        self.pending = None;
        self.state = match result {
            Ok(pos) => {
                log::info!("location resolved: {}, {}", pos.latitude, pos.longitude);
                ProbeState::Resolved(pos)
            }
            Err(e) => {
                log::warn!("location query failed: {:?}", e);
                ProbeState::Failed(e)
            }
        };
    }

    /// Text for the location surface; `None` while nothing is known yet.
    pub fn display_text(&self) -> Option<String> {
        match self.state {
            ProbeState::Unsupported => Some(UNSUPPORTED_MESSAGE.to_string()),
            ProbeState::Idle | ProbeState::Pending => None,
            ProbeState::Resolved(pos) => Some(pos.display_text()),
            ProbeState::Failed(e) => Some(e.message().to_string()),
        }
    }
}
