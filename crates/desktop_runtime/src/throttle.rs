//! Leading-edge throttle with a trailing flush, driven by caller-supplied timestamps.
//!
//! The throttle owns no timers. [`Throttle::offer`] tells the caller whether to apply a sample
//! now or to schedule [`Throttle::fire`] after a delay; the caller owns the clock
//! (`performance.now()` in the browser, plain numbers in tests).

/// Pointer-move application interval (one frame at 60 Hz).
pub const POINTER_THROTTLE_MS: f64 = 16.0;
/// Viewport resize recompute interval.
pub const LAYOUT_THROTTLE_MS: f64 = 100.0;
/// Delay before re-probing after an orientation change.
pub const ORIENTATION_SETTLE_MS: u64 = 150;

/// Outcome of offering a sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Offer<T> {
    /// Apply this sample immediately.
    Apply(T),
    /// The sample is pending; call [`Throttle::fire`] with `generation` after `delay_ms`.
    ScheduleFlush { delay_ms: f64, generation: u64 },
    /// The sample replaced an already-pending one whose flush is scheduled.
    Coalesced,
}

#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval_ms: f64,
    last_applied_ms: Option<f64>,
    pending: Option<(u64, T)>,
    next_seq: u64,
    last_applied_seq: Option<u64>,
    generation: u64,
    flush_scheduled: bool,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_applied_ms: None,
            pending: None,
            next_seq: 0,
            last_applied_seq: None,
            generation: 0,
            flush_scheduled: false,
        }
    }

    pub fn offer(&mut self, value: T, now_ms: f64) -> Offer<T> {
        let seq = self.next_seq;
        self.next_seq += 1;

        let due = self
            .last_applied_ms
            .map_or(true, |last| now_ms - last >= self.interval_ms);
        if due && !self.flush_scheduled {
            self.pending = None;
            self.mark_applied(seq, now_ms);
            return Offer::Apply(value);
        }

        self.pending = Some((seq, value));
        if self.flush_scheduled {
            return Offer::Coalesced;
        }

        self.flush_scheduled = true;
        let elapsed = self.last_applied_ms.map_or(0.0, |last| now_ms - last);
        Offer::ScheduleFlush {
            delay_ms: (self.interval_ms - elapsed).max(0.0),
            generation: self.generation,
        }
    }

    /// Trailing-edge timer callback. Returns the newest pending sample unless the timer was
    /// superseded by [`Self::flush`] or [`Self::cancel`].
    pub fn fire(&mut self, generation: u64, now_ms: f64) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.flush_scheduled = false;
        self.take_pending(now_ms)
    }

    /// Takes the pending sample immediately (e.g. on pointer-up) and invalidates any timer.
    pub fn flush(&mut self, now_ms: f64) -> Option<T> {
        self.invalidate_timer();
        self.take_pending(now_ms)
    }

    /// Drops the pending sample and invalidates any timer.
    pub fn cancel(&mut self) {
        self.invalidate_timer();
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn take_pending(&mut self, now_ms: f64) -> Option<T> {
        let (seq, value) = self.pending.take()?;
        if self.last_applied_seq.is_some_and(|applied| seq <= applied) {
            return None;
        }
        self.mark_applied(seq, now_ms);
        Some(value)
    }

    fn mark_applied(&mut self, seq: u64, now_ms: f64) {
        self.last_applied_seq = Some(seq);
        self.last_applied_ms = Some(now_ms);
    }

    fn invalidate_timer(&mut self) {
        self.generation += 1;
        self.flush_scheduled = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_sample_applies_on_the_leading_edge() {
        let mut throttle = Throttle::new(16.0);
        assert_eq!(throttle.offer(1, 0.0), Offer::Apply(1));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn samples_inside_the_interval_coalesce_to_the_latest() {
        let mut throttle = Throttle::new(16.0);
        assert_eq!(throttle.offer(1, 0.0), Offer::Apply(1));
        assert_eq!(
            throttle.offer(2, 4.0),
            Offer::ScheduleFlush {
                delay_ms: 12.0,
                generation: 0
            }
        );
        assert_eq!(throttle.offer(3, 8.0), Offer::Coalesced);
        assert_eq!(throttle.offer(4, 12.0), Offer::Coalesced);

        assert_eq!(throttle.fire(0, 16.0), Some(4));
        assert_eq!(throttle.fire(0, 16.0), None);
    }

    #[test]
    fn samples_after_a_scheduled_flush_wait_for_it() {
        let mut throttle = Throttle::new(16.0);
        throttle.offer(1, 0.0);
        throttle.offer(2, 5.0);
        // Timer is late; a newer sample arrives first and must not jump the queue.
        assert_eq!(throttle.offer(3, 40.0), Offer::Coalesced);
        assert_eq!(throttle.fire(0, 41.0), Some(3));
        assert_eq!(throttle.offer(4, 80.0), Offer::Apply(4));
    }

    #[test]
    fn flush_takes_pending_and_invalidates_the_timer() {
        let mut throttle = Throttle::new(16.0);
        throttle.offer((10, 10), 0.0);
        let Offer::ScheduleFlush { generation, .. } = throttle.offer((20, 20), 3.0) else {
            panic!("expected a scheduled flush");
        };

        assert_eq!(throttle.flush(5.0), Some((20, 20)));
        assert_eq!(throttle.fire(generation, 16.0), None);
        assert_eq!(throttle.flush(6.0), None);
    }

    #[test]
    fn cancel_discards_the_pending_sample() {
        let mut throttle = Throttle::new(100.0);
        throttle.offer("a", 0.0);
        let Offer::ScheduleFlush { generation, .. } = throttle.offer("b", 10.0) else {
            panic!("expected a scheduled flush");
        };

        throttle.cancel();
        assert!(!throttle.has_pending());
        assert_eq!(throttle.fire(generation, 100.0), None);
        assert_eq!(throttle.offer("c", 200.0), Offer::Apply("c"));
    }
}
