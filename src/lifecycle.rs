//! Mount lifecycle of a component that loads data once.
//!
//! A [`Mount`] is created when the component mounts and dropped (or
//! explicitly unmounted) when it goes away. Work started during the mount
//! holds a [`MountToken`] and must check [`MountToken::is_live`] before
//! touching component state. Cancelling a token does not abort the work
//! itself; it only makes its result unwanted.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Identifies one mount of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

impl MountId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount-{}", self.0)
    }
}

/// Live mount. Unmounts on drop.
#[derive(Debug)]
pub struct Mount {
    id: MountId,
    live: Arc<AtomicBool>,
}

impl Mount {
    pub fn new(id: MountId) -> Self {
        Self {
            id,
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn id(&self) -> MountId {
        self.id
    }

    pub fn token(&self) -> MountToken {
        MountToken {
            id: self.id,
            live: self.live.clone(),
        }
    }

    pub fn unmount(&self) {
        self.live.store(false, Ordering::SeqCst);
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Handle held by work started during a mount.
#[derive(Debug, Clone)]
pub struct MountToken {
    id: MountId,
    live: Arc<AtomicBool>,
}

impl MountToken {
    pub fn id(&self) -> MountId {
        self.id
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}
