//! Simulated per-file staging progress
//!
//! Each staged file gets a counter that a background timer walks from 0
//! to 100 in fixed steps. The animation models no real transfer; an
//! embedder wiring in genuine upload tracking would feed
//! [`ProgressAnimator::progress_of`] from byte counts instead of a timer
//! and keep the same read contract.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

/// Terminal progress value.
pub const COMPLETE: u8 = 100;

/// Timer tuning for the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorConfig {
    /// Interval between increments
    pub period: Duration,
    /// Amount added per tick, clamped so the value never passes 100
    pub step: u8,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        AnimatorConfig {
            period: Duration::from_millis(200),
            step: 10,
        }
    }
}

/// Drives one progress counter per staged file on a repeating timer.
///
/// Counters are keyed by the staged file's id. Each `start` spawns an
/// independent tokio task; ticks of different files interleave freely
/// since no counter is shared. A counter is monotonically non-decreasing,
/// stops changing once it reaches [`COMPLETE`], and is retained for read
/// after completion until [`ProgressAnimator::cancel`] releases it.
#[derive(Debug)]
pub struct ProgressAnimator {
    config: AnimatorConfig,
    entries: Arc<Mutex<HashMap<String, u8>>>,
    timers: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
}

impl ProgressAnimator {
    /// Creates an animator with the default 200ms/10-step timer.
    pub fn new() -> Self {
        ProgressAnimator::with_config(AnimatorConfig::default())
    }

    /// Creates an animator with custom timer tuning.
    pub fn with_config(config: AnimatorConfig) -> Self {
        ProgressAnimator {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Begins animating the counter for `file_id`.
    ///
    /// Idempotent: a second call for an id that is already tracked
    /// (running or completed) returns `false` and spawns nothing, so a
    /// file can never be driven by two timers at once.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, file_id: &str) -> bool {
        {
            let mut entries = self.entries.lock();
            if entries.contains_key(file_id) {
                return false;
            }
            entries.insert(file_id.to_string(), 0);
        }

        let id = file_id.to_string();
        let entries = Arc::clone(&self.entries);
        let timers = Arc::clone(&self.timers);
        let period = self.config.period;
        let step = self.config.step.max(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first interval tick resolves immediately; consume it so
            // increments land at period boundaries.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let done = {
                    let mut entries = entries.lock();
                    match entries.get_mut(&id) {
                        // Entry released under us (file removed); stop
                        // without touching anything.
                        None => true,
                        Some(value) => {
                            *value = value.saturating_add(step).min(COMPLETE);
                            trace!(file = %id, progress = *value, "staging tick");
                            *value >= COMPLETE
                        }
                    }
                };
                if done {
                    break;
                }
            }
            timers.lock().remove(&id);
        });

        self.timers.lock().insert(file_id.to_string(), handle);
        true
    }

    /// Current counter value for `file_id`, or 0 when unknown.
    pub fn progress_of(&self, file_id: &str) -> u8 {
        self.entries.lock().get(file_id).copied().unwrap_or(0)
    }

    /// True once the counter for `file_id` has reached [`COMPLETE`].
    pub fn is_complete(&self, file_id: &str) -> bool {
        self.progress_of(file_id) >= COMPLETE
    }

    /// Stops the timer for `file_id` and releases its counter.
    ///
    /// Safe to call for completed or unknown ids. After this returns no
    /// further tick for the id is observable; failing that would leave a
    /// dangling callback referencing a removed record.
    pub fn cancel(&self, file_id: &str) {
        if let Some(handle) = self.timers.lock().remove(file_id) {
            handle.abort();
        }
        self.entries.lock().remove(file_id);
    }

    /// Number of counters currently tracked (running or completed).
    pub fn tracked(&self) -> usize {
        self.entries.lock().len()
    }

    /// Number of timer tasks still registered.
    ///
    /// Completed timers unregister themselves; this only stays non-zero
    /// while files are mid-animation.
    pub fn active_timers(&self) -> usize {
        self.timers.lock().len()
    }
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        ProgressAnimator::new()
    }
}

impl Drop for ProgressAnimator {
    fn drop(&mut self) {
        for (_, handle) in self.timers.lock().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_progress_advances_per_tick() {
        let animator = ProgressAnimator::new();
        assert!(animator.start("f1"));
        assert_eq!(animator.progress_of("f1"), 0);

        // Ticks land at 200ms and 400ms
        sleep(Duration::from_millis(450)).await;
        assert_eq!(animator.progress_of("f1"), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_monotone_and_bounded() {
        let animator = ProgressAnimator::new();
        animator.start("f1");

        let mut last = 0;
        for _ in 0..15 {
            sleep(Duration::from_millis(200)).await;
            let value = animator.progress_of("f1");
            assert!(value >= last, "progress went backwards: {} < {}", value, last);
            assert!(value <= COMPLETE);
            last = value;
        }
        assert_eq!(last, COMPLETE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_terminal_at_100() {
        let animator = ProgressAnimator::new();
        animator.start("f1");

        sleep(Duration::from_millis(2100)).await;
        assert_eq!(animator.progress_of("f1"), COMPLETE);
        assert!(animator.is_complete("f1"));
        // Timer has unregistered itself; the entry stays readable
        assert_eq!(animator.active_timers(), 0);
        assert_eq!(animator.tracked(), 1);

        // Further time changes nothing
        sleep(Duration::from_secs(5)).await;
        assert_eq!(animator.progress_of("f1"), COMPLETE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent() {
        let animator = ProgressAnimator::new();
        assert!(animator.start("f1"));
        assert!(!animator.start("f1"));
        assert_eq!(animator.active_timers(), 1);

        sleep(Duration::from_millis(2100)).await;
        // Completed ids are still tracked, so a restart is refused too
        assert!(!animator.start("f1"));
        assert_eq!(animator.progress_of("f1"), COMPLETE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_releases_entry_and_timer() {
        let animator = ProgressAnimator::new();
        animator.start("f1");

        sleep(Duration::from_millis(450)).await;
        assert_eq!(animator.progress_of("f1"), 20);

        animator.cancel("f1");
        assert_eq!(animator.progress_of("f1"), 0);
        assert_eq!(animator.active_timers(), 0);
        assert_eq!(animator.tracked(), 0);

        // No leaked timer keeps reporting progress for the stale id
        sleep(Duration::from_secs(3)).await;
        assert_eq!(animator.progress_of("f1"), 0);
        assert_eq!(animator.tracked(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_unknown_id_no_op() {
        let animator = ProgressAnimator::new();
        animator.cancel("ghost");
        assert_eq!(animator.tracked(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_files_animate_independently() {
        let animator = ProgressAnimator::new();
        animator.start("a");
        sleep(Duration::from_millis(410)).await;
        animator.start("b");
        sleep(Duration::from_millis(410)).await;

        assert_eq!(animator.progress_of("a"), 40);
        assert_eq!(animator.progress_of("b"), 20);

        animator.cancel("a");
        sleep(Duration::from_millis(210)).await;
        assert_eq!(animator.progress_of("a"), 0);
        assert_eq!(animator.progress_of("b"), 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_config() {
        let animator = ProgressAnimator::with_config(AnimatorConfig {
            period: Duration::from_millis(100),
            step: 50,
        });
        animator.start("f1");

        sleep(Duration::from_millis(250)).await;
        assert_eq!(animator.progress_of("f1"), COMPLETE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_step_never_overshoots() {
        let animator = ProgressAnimator::with_config(AnimatorConfig {
            period: Duration::from_millis(100),
            step: 33,
        });
        animator.start("f1");

        sleep(Duration::from_millis(1000)).await;
        // 33, 66, 99, then clamped to 100
        assert_eq!(animator.progress_of("f1"), COMPLETE);
    }
}
