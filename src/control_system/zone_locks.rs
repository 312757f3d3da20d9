use crate::simulation_engine::geometry::ConflictZone;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// One try-lock per conflict zone, plus a notifier fired on every release so
/// that a controller whose path scan failed can park instead of spinning.
pub struct ZoneLockSet {
    held: [AtomicBool; ConflictZone::COUNT],
    released: Notify,
}

impl ZoneLockSet {
    pub fn new() -> Self {
        Self {
            held: std::array::from_fn(|_| AtomicBool::new(false)),
            released: Notify::new(),
        }
    }

    /// Non-blocking: takes the zone if it is free, reports contention as
    /// `false` rather than an error.
    pub fn try_acquire(&self, zone: ConflictZone) -> bool {
        self.held[zone.index()]
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Release never fails; the holder simply gives the zone back and wakes
    /// every parked path scan.
    pub fn release(&self, zone: ConflictZone) {
        self.held[zone.index()].store(false, Ordering::Release);
        self.released.notify_waiters();
    }

    /// One scan of the acquire-all-or-release-all protocol: try every zone on
    /// the path in order; on the first refusal give back everything this scan
    /// took and report failure. A failed scan leaves no zones held.
    fn try_acquire_path(&self, path: &[ConflictZone]) -> bool {
        for (scanned, &zone) in path.iter().enumerate() {
            if !self.try_acquire(zone) {
                for &taken in &path[..scanned] {
                    self.release(taken);
                }
                return false;
            }
        }
        true
    }

    /// Acquires every zone on the path atomically: rescan on contention until
    /// a scan takes the whole path. The release notifier is registered before
    /// each scan so a release landing between a failed scan and the park
    /// cannot be missed. An empty path succeeds immediately.
    pub async fn acquire_path(&self, path: &[ConflictZone]) {
        loop {
            let released = self.released.notified();
            tokio::pin!(released);
            released.as_mut().enable();
            if self.try_acquire_path(path) {
                return;
            }
            released.await;
        }
    }
}

impl Default for ZoneLockSet {
    fn default() -> Self {
        Self::new()
    }
}
