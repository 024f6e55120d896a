//! Deterministic scheduler driven by an explicit clock.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Scheduler, TickCallback, TimerHandle};
use crate::core::Result;

struct Timer {
    handle: TimerHandle,
    interval_ms: u64,
    next_due_ms: u64,
    callback: Rc<RefCell<TickCallback>>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_id: i32,
    timers: Vec<Timer>,
}

/// Timers only fire when [`ManualScheduler::advance`] moves the clock. Clones share
/// the same clock, so a test can keep one while the grid owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn active_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move the clock forward by `ms`, firing every callback that comes due, in
    /// due-time order. Returns how many callbacks ran.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.clock.borrow().now_ms + ms;
        let mut fired = 0;

        loop {
            let due = {
                let clock = self.clock.borrow();
                clock
                    .timers
                    .iter()
                    .filter(|t| t.next_due_ms <= target)
                    .min_by_key(|t| (t.next_due_ms, t.handle.id()))
                    .map(|t| (t.handle, t.next_due_ms, Rc::clone(&t.callback)))
            };
            let Some((handle, due_ms, callback)) = due else {
                break;
            };

            {
                let mut clock = self.clock.borrow_mut();
                clock.now_ms = due_ms;
                if let Some(timer) = clock.timers.iter_mut().find(|t| t.handle == handle) {
                    timer.next_due_ms += timer.interval_ms;
                }
            }

            // Clock is released: the callback may schedule or cancel timers.
            (callback.borrow_mut())();
            fired += 1;
        }

        self.clock.borrow_mut().now_ms = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, interval_ms: u32, callback: TickCallback) -> Result<TimerHandle> {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let handle = TimerHandle::new(clock.next_id);
        let interval_ms = u64::from(interval_ms.max(1));
        let next_due_ms = clock.now_ms + interval_ms;
        clock.timers.push(Timer {
            handle,
            interval_ms,
            next_due_ms,
            callback: Rc::new(RefCell::new(callback)),
        });
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.clock.borrow_mut().timers.retain(|t| t.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, TickCallback) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn fires_once_per_elapsed_interval() {
        let mut sched = ManualScheduler::new();
        let (count, cb) = counter();
        sched.schedule(100, cb).unwrap();

        assert_eq!(sched.advance(99), 0);
        assert_eq!(sched.advance(1), 1);
        assert_eq!(sched.advance(350), 3);
        assert_eq!(count.get(), 4);
        assert_eq!(sched.now_ms(), 450);
    }

    #[test]
    fn cancelled_timers_stay_quiet() {
        let mut sched = ManualScheduler::new();
        let (count, cb) = counter();
        let handle = sched.schedule(10, cb).unwrap();
        sched.advance(25);
        sched.cancel(handle);
        sched.cancel(handle);
        assert_eq!(sched.advance(1000), 0);
        assert_eq!(count.get(), 2);
        assert_eq!(sched.active_timers(), 0);
    }

    #[test]
    fn interleaves_timers_by_due_time() {
        let mut sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (name, every) in [("slow", 30u32), ("fast", 20)] {
            let log = Rc::clone(&log);
            sched.schedule(every, Box::new(move || log.borrow_mut().push(name))).unwrap();
        }
        sched.advance(60);
        assert_eq!(*log.borrow(), vec!["fast", "slow", "fast", "slow", "fast"]);
    }

    #[test]
    fn callbacks_may_cancel_through_a_clone() {
        let sched = ManualScheduler::new();
        let handle_slot: Rc<Cell<Option<TimerHandle>>> = Rc::new(Cell::new(None));
        let mut inner = sched.clone();
        let slot = Rc::clone(&handle_slot);
        let handle = sched
            .clone()
            .schedule(
                5,
                Box::new(move || {
                    if let Some(h) = slot.get() {
                        inner.cancel(h);
                    }
                }),
            )
            .unwrap();
        handle_slot.set(Some(handle));

        assert_eq!(sched.advance(100), 1);
        assert_eq!(sched.active_timers(), 0);
    }
}
