//! Debounced auto-advance commits.
//!
//! A qualifying single-tap answer advances the flow automatically after a
//! short delay, so the user can still change their mind. [`CommitScheduler`]
//! owns that delay: at most one pending commit per instance, superseded by a
//! newer schedule, cancelled explicitly or on drop, and suppressed entirely
//! when the user prefers reduced motion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Delay before a scheduled commit fires.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(400);

/// Reduced-motion accessibility signal, consulted at schedule time so a
/// mid-session preference change takes effect immediately.
pub trait MotionSignal: Send + Sync {
    /// Whether the user prefers reduced motion.
    fn reduced_motion(&self) -> bool;
}

/// A fixed motion signal, for tests and non-interactive contexts.
#[derive(Debug, Clone, Copy)]
pub struct StaticMotion(pub bool);

impl MotionSignal for StaticMotion {
    fn reduced_motion(&self) -> bool {
        self.0
    }
}

/// Commit callback; runs on the timer thread when the delay elapses.
pub type CommitFn = Box<dyn FnMut() + Send>;

struct PendingCommit {
    cancel_tx: mpsc::Sender<()>,
    fired: Arc<AtomicBool>,
}

/// Schedules a single cancellable delayed commit.
///
/// The timer is an owned resource: one pending handle per scheduler,
/// released on explicit cancellation, on superseding, and on drop, so a
/// commit can never fire against a discarded owner.
pub struct CommitScheduler {
    on_commit: Option<Arc<Mutex<CommitFn>>>,
    delay: Duration,
    disabled: bool,
    motion: Arc<dyn MotionSignal>,
    pending: Option<PendingCommit>,
}

impl CommitScheduler {
    /// Create a scheduler.
    ///
    /// `on_commit` may be absent, in which case every schedule is a no-op.
    /// `disabled` turns auto-advance off for this instance regardless of the
    /// motion signal.
    pub fn new(
        on_commit: Option<CommitFn>,
        delay: Duration,
        disabled: bool,
        motion: Arc<dyn MotionSignal>,
    ) -> Self {
        Self {
            on_commit: on_commit.map(|f| Arc::new(Mutex::new(f))),
            delay,
            disabled,
            motion,
            pending: None,
        }
    }

    /// Whether schedules are currently suppressed, either by construction or
    /// by the live motion signal.
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.motion.reduced_motion()
    }

    /// Whether a commit is armed and has not yet fired.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|p| !p.fired.load(Ordering::SeqCst))
            .unwrap_or(false)
    }

    /// Arm a commit after the configured delay.
    ///
    /// No-op when disabled, when no callback was supplied, or when the
    /// motion signal reports reduced motion at this moment. Any previously
    /// pending commit is cancelled first; the new delay runs in full.
    pub fn schedule_commit(&mut self) {
        if self.disabled || self.motion.reduced_motion() {
            return;
        }
        let Some(on_commit) = self.on_commit.clone() else {
            return;
        };

        self.cancel_commit();

        let (cancel_tx, cancel_rx) = mpsc::channel();
        let fired = Arc::new(AtomicBool::new(false));
        let fired_flag = Arc::clone(&fired);
        let delay = self.delay;

        // The timer thread sleeps on the cancel channel: a send (or plain
        // timeout) wakes it, and only the timeout path commits.
        thread::spawn(move || {
            if let Err(mpsc::RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                fired_flag.store(true, Ordering::SeqCst);
                if let Ok(mut commit) = on_commit.lock() {
                    commit();
                }
            }
        });

        self.pending = Some(PendingCommit { cancel_tx, fired });
    }

    /// Clear a pending commit. No effect when none is pending.
    pub fn cancel_commit(&mut self) {
        if let Some(pending) = self.pending.take() {
            // A send failure means the timer already fired or exited.
            let _ = pending.cancel_tx.send(());
        }
    }
}

impl Drop for CommitScheduler {
    fn drop(&mut self) {
        self.cancel_commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    const TICK: Duration = Duration::from_millis(40);

    struct FlipMotion(Arc<AtomicBool>);

    impl MotionSignal for FlipMotion {
        fn reduced_motion(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn counting_scheduler(
        delay: Duration,
        disabled: bool,
        motion: Arc<dyn MotionSignal>,
    ) -> (CommitScheduler, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let count_inner = Arc::clone(&count);
        let scheduler = CommitScheduler::new(
            Some(Box::new(move || {
                count_inner.fetch_add(1, Ordering::SeqCst);
            })),
            delay,
            disabled,
            motion,
        );
        (scheduler, count)
    }

    #[test]
    fn commit_fires_once_after_delay() {
        let (mut scheduler, count) =
            counting_scheduler(TICK, false, Arc::new(StaticMotion(false)));

        scheduler.schedule_commit();
        assert!(scheduler.is_pending());

        thread::sleep(TICK * 3);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn cancel_before_delay_prevents_commit() {
        let (mut scheduler, count) =
            counting_scheduler(TICK * 2, false, Arc::new(StaticMotion(false)));

        scheduler.schedule_commit();
        scheduler.cancel_commit();

        thread::sleep(TICK * 4);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cancel_without_pending_is_noop() {
        let (mut scheduler, count) =
            counting_scheduler(TICK, false, Arc::new(StaticMotion(false)));
        scheduler.cancel_commit();
        thread::sleep(TICK * 2);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn rescheduling_supersedes_instead_of_stacking() {
        let (mut scheduler, count) =
            counting_scheduler(TICK * 3, false, Arc::new(StaticMotion(false)));

        scheduler.schedule_commit();
        thread::sleep(TICK * 2);
        scheduler.schedule_commit();

        // The first schedule would have fired by now; it was superseded and
        // the second delay runs in full from the second call.
        thread::sleep(TICK * 2);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        thread::sleep(TICK * 3);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disabled_scheduler_never_commits() {
        let (mut scheduler, count) =
            counting_scheduler(TICK, true, Arc::new(StaticMotion(false)));

        scheduler.schedule_commit();
        assert!(!scheduler.is_pending());

        thread::sleep(TICK * 3);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(scheduler.is_disabled());
    }

    #[test]
    fn reduced_motion_suppresses_commits() {
        let (mut scheduler, count) =
            counting_scheduler(TICK, false, Arc::new(StaticMotion(true)));

        scheduler.schedule_commit();
        thread::sleep(TICK * 3);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(scheduler.is_disabled());
    }

    #[test]
    fn motion_signal_is_checked_at_schedule_time() {
        let reduced = Arc::new(AtomicBool::new(false));
        let motion: Arc<dyn MotionSignal> = Arc::new(FlipMotion(Arc::clone(&reduced)));

        let (mut scheduler, count) = counting_scheduler(TICK, false, motion);

        // Preference flips after construction; the next schedule sees it.
        reduced.store(true, Ordering::SeqCst);
        scheduler.schedule_commit();
        thread::sleep(TICK * 3);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        reduced.store(false, Ordering::SeqCst);
        scheduler.schedule_commit();
        thread::sleep(TICK * 3);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_callback_makes_schedule_a_noop() {
        let mut scheduler = CommitScheduler::new(
            None,
            TICK,
            false,
            Arc::new(StaticMotion(false)),
        );
        scheduler.schedule_commit();
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn drop_cancels_pending_commit() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_inner = Arc::clone(&count);

        {
            let mut scheduler = CommitScheduler::new(
                Some(Box::new(move || {
                    count_inner.fetch_add(1, Ordering::SeqCst);
                })),
                TICK * 2,
                false,
                Arc::new(StaticMotion(false)),
            );
            scheduler.schedule_commit();
        }

        thread::sleep(TICK * 4);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
