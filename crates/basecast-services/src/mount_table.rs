//! Mount points advertised by the upstream caster.
//!
//! Rendered for the control API as `"<flag>\r<name>\r<name>..."`. A rebuild
//! clears the flag, replaces the names, and sets the flag last with release
//! ordering, so a reader that sees `1` also sees the complete list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone, Default)]
pub struct MountTable {
    names: Arc<RwLock<Vec<String>>>,
    valid: Arc<AtomicBool>,
    rebuild: Arc<Mutex<()>>,
}

impl MountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single rebuild slot, `None` if a discovery is in flight.
    pub fn try_begin_rebuild(&self) -> Option<OwnedMutexGuard<()>> {
        self.rebuild.clone().try_lock_owned().ok()
    }

    /// Replace the table. Callers hold the guard from [`try_begin_rebuild`].
    ///
    /// [`try_begin_rebuild`]: MountTable::try_begin_rebuild
    pub fn replace(&self, _guard: &OwnedMutexGuard<()>, names: Vec<String>) {
        self.valid.store(false, Ordering::Release);
        let valid = !names.is_empty();
        if let Ok(mut current) = self.names.write() {
            *current = names;
        }
        self.valid.store(valid, Ordering::Release);
    }

    pub fn is_valid(&self) -> bool {
        self.valid.load(Ordering::Acquire)
    }

    /// Names if the table is valid, empty otherwise.
    pub fn names(&self) -> Vec<String> {
        if !self.is_valid() {
            return Vec::new();
        }
        self.names.read().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn render(&self) -> String {
        let names = self.names();
        let flag = if names.is_empty() { '0' } else { '1' };
        let mut out = String::from(flag);
        for name in names {
            out.push('\r');
            out.push_str(&name);
        }
        out
    }
}
