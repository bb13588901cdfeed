//! Periodic timer driving a [`Carousel`].
//!
//! The timer is armed once when the carousel is spawned and never restarted.
//! Manual navigation goes through the same lock as the ticks and is visible
//! immediately; it only resets progress.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

use super::{Carousel, Slide, SlideState};

struct Shared {
    carousel: Mutex<Carousel>,
    updates: watch::Sender<SlideState>,
    cancelled: AtomicBool,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Carousel> {
        self.carousel.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owner of a running carousel.
///
/// Dropping the handle cancels the timer.
pub struct CarouselHandle {
    shared: Arc<Shared>,
    task: Option<JoinHandle<()>>,
}

/// Arm the periodic timer for `carousel` on the current tokio runtime.
///
/// The first tick fires one interval after the call. Missed ticks are
/// skipped rather than replayed in a burst.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
#[must_use]
pub fn spawn(carousel: Carousel) -> CarouselHandle {
    let period = carousel.timing().tick_interval();
    let (updates, _) = watch::channel(carousel.state());
    let shared = Arc::new(Shared {
        carousel: Mutex::new(carousel),
        updates,
        cancelled: AtomicBool::new(false),
    });

    let worker = Arc::clone(&shared);
    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            // Publish under the lock so updates arrive in mutation order.
            let mut carousel = worker.lock();
            if worker.cancelled.load(Ordering::Acquire) {
                break;
            }
            if carousel.tick() {
                debug!(index = carousel.current_index(), "Carousel advanced");
            }
            worker.updates.send_replace(carousel.state());
            drop(carousel);
        }
    });

    info!(?period, "Carousel timer armed");
    CarouselHandle {
        shared,
        task: Some(task),
    }
}

impl CarouselHandle {
    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> SlideState {
        self.shared.lock().state()
    }

    /// The slide showing.
    #[must_use]
    pub fn current_slide(&self) -> Option<Slide> {
        self.shared.lock().current_slide().cloned()
    }

    /// `"01 / 04"`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        self.shared.lock().counter_label()
    }

    /// Receive every state change, from ticks and manual navigation alike.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SlideState> {
        self.shared.updates.subscribe()
    }

    /// Show `index` (wrapping) with an empty progress bar.
    ///
    /// The timer keeps its cadence; the next tick lands where it would have
    /// anyway and counts from zero progress.
    pub fn go_to_slide(&self, index: usize) {
        let mut carousel = self.shared.lock();
        carousel.go_to_slide(index);
        let state = carousel.state();
        self.shared.updates.send_replace(state);
        drop(carousel);
        debug!(index = state.current_index, "Carousel navigated");
    }

    /// Whether the timer is still armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
            && !self.shared.cancelled.load(Ordering::Acquire)
    }

    /// Stop the timer. Calling this again does nothing.
    ///
    /// No tick is applied after this returns.
    pub fn cancel(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        {
            let _guard = self.shared.lock();
            self.shared.cancelled.store(true, Ordering::Release);
        }
        task.abort();
        info!("Carousel timer cancelled");
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for CarouselHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselHandle")
            .field("state", &self.snapshot())
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::carousel::{CarouselTiming, hero_slides};

    fn fast_carousel() -> Carousel {
        let timing =
            CarouselTiming::new(Duration::from_millis(700), Duration::from_millis(100)).unwrap();
        Carousel::new(hero_slides(), timing).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_advances_after_one_slide_duration() {
        let handle = spawn(fast_carousel());

        tokio::time::sleep(Duration::from_millis(650)).await;
        let state = handle.snapshot();
        assert_eq!(state.current_index, 0);
        assert_eq!(state.elapsed_ticks, 6);

        tokio::time::sleep(Duration::from_millis(100)).await;
        let state = handle.snapshot();
        assert_eq!(state.current_index, 1);
        assert_eq!(state.elapsed_ticks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_keeps_cadence() {
        let handle = spawn(fast_carousel());

        // Three ticks in, navigate between ticks.
        tokio::time::sleep(Duration::from_millis(350)).await;
        handle.go_to_slide(2);
        assert_eq!(handle.snapshot().current_index, 2);
        assert_eq!(handle.snapshot().elapsed_ticks, 0);

        // Next tick still lands at 400 ms, not 450 ms.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(handle.snapshot().elapsed_ticks, 1);

        // Seven ticks after navigating (at 1000 ms) the slide advances.
        tokio::time::sleep(Duration::from_millis(550)).await;
        assert_eq!(handle.snapshot().current_index, 2);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(handle.snapshot().current_index, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_ticks_and_navigation() {
        let handle = spawn(fast_carousel());
        let mut updates = handle.subscribe();

        handle.go_to_slide(1);
        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().current_index, 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().elapsed_ticks, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_latest_update_matches_state_under_contention() {
        let timing =
            CarouselTiming::new(Duration::from_millis(3), Duration::from_millis(1)).unwrap();
        let mut handle = spawn(Carousel::new(hero_slides(), timing).unwrap());
        let updates = handle.subscribe();

        for index in 0..500 {
            handle.go_to_slide(index);
            if index % 50 == 0 {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        }
        handle.cancel();

        assert_eq!(*updates.borrow(), handle.snapshot());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_idempotent_and_final() {
        let mut handle = spawn(fast_carousel());
        let mut updates = handle.subscribe();

        tokio::time::sleep(Duration::from_millis(250)).await;
        handle.cancel();
        handle.cancel();
        assert_eq!(updates.borrow_and_update().elapsed_ticks, 2);
        let frozen = handle.snapshot();
        assert!(!handle.is_running());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(handle.snapshot(), frozen);
        assert!(!updates.has_changed().unwrap());
    }
}
