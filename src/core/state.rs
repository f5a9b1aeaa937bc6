use std::sync::{Arc, Mutex};

use crate::core::session::ConverterSession;

/// Thread-safe converter state shared by the command layer.
///
/// The mutex serializes every session mutation, history appends included.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<ConverterSession>>,
}

impl AppState {
    pub fn new(session: ConverterSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session
    pub fn with_session<R>(&self, f: impl FnOnce(&mut ConverterSession) -> R) -> R {
        let mut session = match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Session mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        };
        f(&mut session)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConverterSession::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_appends_are_serialized() {
        let state = AppState::default();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let state = state.clone();
                thread::spawn(move || {
                    state.with_session(|s| s.set_value(i as f64)).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(state.with_session(|s| s.history().len()), 8);
    }
}
