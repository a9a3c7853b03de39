use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};
use uuid::Uuid;

use crate::application::session_controller::SharedSession;
use crate::domain::error::{AppError, Result};

/// Sessions kept at once. Tabs that die without closing their session are
/// evicted oldest first once this is reached.
pub const MAX_OPEN_SESSIONS: usize = 256;

#[derive(Default)]
struct Sessions {
    by_id: HashMap<Uuid, SharedSession>,
    created: VecDeque<Uuid>,
}

/// One session per open browser tab. Nothing outlives the process.
pub struct SessionRegistry {
    sessions: Mutex<Sessions>,
    capacity: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_capacity(MAX_OPEN_SESSIONS)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Mutex::new(Sessions::default()),
            capacity: capacity.max(1),
        }
    }

    fn sessions(&self) -> MutexGuard<'_, Sessions> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = SharedSession::new();
        let mut sessions = self.sessions();

        while sessions.by_id.len() >= self.capacity {
            let Some(oldest) = sessions.created.pop_front() else {
                break;
            };
            if sessions.by_id.remove(&oldest).is_some() {
                warn!(session_id = %oldest, "Session limit reached, evicting oldest session");
            }
        }

        sessions.by_id.insert(id, session.clone());
        sessions.created.push_back(id);
        info!(session_id = %id, open_sessions = sessions.by_id.len(), "Session created");
        (id, session)
    }

    pub fn get(&self, id: &Uuid) -> Result<SharedSession> {
        self.sessions()
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {}", id)))
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        let mut sessions = self.sessions();
        let removed = sessions.by_id.remove(id).is_some();
        if removed {
            sessions.created.retain(|created| created != id);
            info!(session_id = %id, "Session closed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
