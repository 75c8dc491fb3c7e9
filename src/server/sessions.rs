//! In-memory registry of open dashboard sessions
//!
//! Each session owns its `SelectionState` exclusively; the registry only
//! hands out copies, so views are always resolved outside the lock.
//! Clients can leave without closing their session, so a session that sees
//! no request for `idle_timeout` is treated as gone and its slot is reused.

use crate::domain::config_types::MaxSessions;
use crate::domain::selection::{InvalidSelectionError, SelectionState};
use crate::domain::session::{Session, SessionId};
use crate::server::error_response::ApiError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug)]
struct SessionEntry {
    selection: SelectionState,
    last_seen: Instant,
}

impl SessionEntry {
    fn is_expired(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) >= idle_timeout
    }
}

#[derive(Debug)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
    max_sessions: MaxSessions,
    idle_timeout: Duration,
}

impl SessionRegistry {
    pub fn new(max_sessions: MaxSessions, idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            idle_timeout,
        }
    }

    /// Register a new session starting from `initial`
    ///
    /// Idle sessions are reclaimed before the capacity check.
    pub fn open(&self, initial: SelectionState) -> Result<Session, ApiError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write();

        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, self.idle_timeout));
        let reclaimed = before - sessions.len();
        if reclaimed > 0 {
            debug!(reclaimed, "Reclaimed idle sessions");
        }

        if sessions.len() >= *self.max_sessions.as_ref() {
            return Err(ApiError::SessionLimitReached(self.max_sessions));
        }
        let session = Session::new(initial);
        sessions.insert(
            session.id,
            SessionEntry {
                selection: session.selection.clone(),
                last_seen: now,
            },
        );
        debug!(session_id = %session.id, open_sessions = sessions.len(), "Session opened");
        Ok(session)
    }

    /// Current selection of a live session; refreshes its idle timer
    pub fn get(&self, id: SessionId) -> Option<SelectionState> {
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        let entry = sessions
            .get_mut(&id)
            .filter(|entry| !entry.is_expired(now, self.idle_timeout))?;
        entry.last_seen = now;
        Some(entry.selection.clone())
    }

    /// Apply one selection change atomically
    ///
    /// A rejected change leaves the stored state untouched.
    pub fn update<F>(&self, id: SessionId, change: F) -> Result<SelectionState, ApiError>
    where
        F: FnOnce(&mut SelectionState) -> Result<(), InvalidSelectionError>,
    {
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        let entry = sessions
            .get_mut(&id)
            .filter(|entry| !entry.is_expired(now, self.idle_timeout))
            .ok_or(ApiError::SessionNotFound(id))?;
        entry.last_seen = now;
        let mut candidate = entry.selection.clone();
        change(&mut candidate)?;
        entry.selection = candidate.clone();
        Ok(candidate)
    }

    pub fn close(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().remove(&id).is_some();
        if removed {
            debug!(session_id = %id, "Session closed");
        }
        removed
    }

    /// Number of stored sessions, including idle ones not yet reclaimed
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::disease::{DiseaseKind, Metric};
    use crate::domain::selection::YearBounds;
    use crate::domain::types::Year;

    fn initial() -> SelectionState {
        SelectionState::new(YearBounds::new(Year::new(2012), Year::new(2025)))
    }

    fn registry(limit: usize) -> SessionRegistry {
        registry_with_timeout(limit, Duration::from_secs(60))
    }

    fn registry_with_timeout(limit: usize, idle_timeout: Duration) -> SessionRegistry {
        SessionRegistry::new(MaxSessions::try_new(limit).unwrap(), idle_timeout)
    }

    #[test]
    fn test_open_and_get() {
        let registry = registry(4);
        let session = registry.open(initial()).unwrap();
        assert_eq!(registry.get(session.id), Some(initial()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_limit_is_enforced() {
        let registry = registry(1);
        registry.open(initial()).unwrap();
        let err = registry.open(initial()).unwrap_err();
        assert!(matches!(err, ApiError::SessionLimitReached(_)));
    }

    #[test]
    fn test_sessions_are_independent() {
        let registry = registry(4);
        let a = registry.open(initial()).unwrap();
        let b = registry.open(initial()).unwrap();

        registry
            .update(a.id, |state| {
                state.set_disease(DiseaseKind::Rubella);
                Ok(())
            })
            .unwrap();

        assert_eq!(registry.get(a.id).unwrap().disease(), DiseaseKind::Rubella);
        assert_eq!(registry.get(b.id).unwrap().disease(), DiseaseKind::Measles);
    }

    #[test]
    fn test_rejected_update_leaves_state_unchanged() {
        let registry = registry(4);
        let session = registry.open(initial()).unwrap();

        let err = registry
            .update(session.id, |state| {
                state.clear_metric();
                state.set_metric(Metric::RubellaTotal)
            })
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidSelection(_)));
        assert_eq!(
            registry.get(session.id).unwrap().metric(),
            Some(Metric::MeaslesSuspect)
        );
    }

    #[test]
    fn test_unknown_session() {
        let registry = registry(4);
        let id = SessionId::generate();
        assert!(registry.get(id).is_none());
        assert!(matches!(
            registry.update(id, |_| Ok(())),
            Err(ApiError::SessionNotFound(_))
        ));
        assert!(!registry.close(id));
    }

    #[test]
    fn test_close_frees_a_slot() {
        let registry = registry(1);
        let session = registry.open(initial()).unwrap();
        assert!(registry.close(session.id));
        assert!(registry.is_empty());
        assert!(registry.open(initial()).is_ok());
    }

    #[test]
    fn test_idle_sessions_are_reclaimed_when_full() {
        let registry = registry_with_timeout(2, Duration::from_millis(50));
        let abandoned = registry.open(initial()).unwrap();
        registry.open(initial()).unwrap();
        assert!(matches!(
            registry.open(initial()),
            Err(ApiError::SessionLimitReached(_))
        ));

        std::thread::sleep(Duration::from_millis(80));

        let fresh = registry.open(initial()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(abandoned.id).is_none());
        assert!(registry.get(fresh.id).is_some());
    }

    #[test]
    fn test_expired_session_is_not_found() {
        let registry = registry_with_timeout(4, Duration::from_millis(20));
        let session = registry.open(initial()).unwrap();

        std::thread::sleep(Duration::from_millis(40));

        assert!(registry.get(session.id).is_none());
        assert!(matches!(
            registry.update(session.id, |_| Ok(())),
            Err(ApiError::SessionNotFound(_))
        ));
    }

    #[test]
    fn test_activity_keeps_session_alive() {
        let registry = registry_with_timeout(1, Duration::from_millis(300));
        let session = registry.open(initial()).unwrap();

        for _ in 0..3 {
            std::thread::sleep(Duration::from_millis(150));
            assert!(registry.get(session.id).is_some());
        }
        assert!(matches!(
            registry.open(initial()),
            Err(ApiError::SessionLimitReached(_))
        ));
    }
}
