//! Grid - the playable rain
//!
//! Wraps a shared [`GridCore`] with a scheduler. The core sits behind
//! `Rc<RefCell<..>>` because the timer callback and the window resize listener
//! both need to reach it; they hold only `Weak` references, so dropping the grid
//! tears everything down.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use crate::core::Result;
use crate::schedule::{Scheduler, TimerHandle};
use crate::simulation::GridCore;

pub type SharedCore = Rc<RefCell<GridCore>>;

pub struct Grid<S: Scheduler> {
    core: SharedCore,
    scheduler: S,
    timer: Option<TimerHandle>,
}

impl<S: Scheduler> Grid<S> {
    pub fn new(core: GridCore, scheduler: S) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
            scheduler,
            timer: None,
        }
    }

    pub fn core(&self) -> Ref<'_, GridCore> {
        self.core.borrow()
    }

    pub fn core_mut(&self) -> RefMut<'_, GridCore> {
        self.core.borrow_mut()
    }

    /// Weak handle for host callbacks (resize listeners and the like).
    pub fn downgrade(&self) -> Weak<RefCell<GridCore>> {
        Rc::downgrade(&self.core)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.core.borrow().config().tick_interval_ms
    }

    /// Start ticking on the configured interval. No-op while already playing.
    pub fn play(&mut self) -> Result<()> {
        if self.timer.is_some() {
            return Ok(());
        }
        let interval = self.tick_interval_ms();
        let weak = Rc::downgrade(&self.core);
        let handle = self.scheduler.schedule(interval, Box::new(move || tick_shared(&weak)))?;
        self.timer = Some(handle);
        log::info!("rain playing every {}ms", interval);
        Ok(())
    }

    /// Cancel the timer. A tick already running finishes first.
    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            log::info!("rain stopped");
        }
    }

    /// Single-step while stopped. Returns whether a tick ran.
    pub fn play_next_tick(&mut self) -> Result<bool> {
        if self.is_playing() {
            return Ok(false);
        }
        self.core.borrow_mut().tick()?;
        Ok(true)
    }

    /// Rebuild from the current viewport, discarding all in-flight markers.
    pub fn rebuild(&mut self) -> Result<()> {
        self.core.borrow_mut().rebuild()
    }

    /// Change the interval; a running timer is restarted on the new period.
    pub fn set_tick_interval_ms(&mut self, interval_ms: u32) -> Result<()> {
        self.core.borrow_mut().set_tick_interval_ms(interval_ms)?;
        if self.is_playing() {
            self.stop();
            self.play()?;
        }
        Ok(())
    }
}

impl<S: Scheduler> Drop for Grid<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer body: tick if the grid is still alive and not already borrowed.
fn tick_shared(weak: &Weak<RefCell<GridCore>>) {
    let Some(core) = weak.upgrade() else {
        return;
    };
    let Ok(mut core) = core.try_borrow_mut() else {
        log::warn!("skipping tick: grid is busy");
        return;
    };
    if let Err(err) = core.tick() {
        log::warn!("tick {} failed to paint: {}", core.tick_count(), err);
    }
}

/// Resize body: full rebuild, same liveness rules as a tick.
pub fn rebuild_shared(weak: &Weak<RefCell<GridCore>>) {
    let Some(core) = weak.upgrade() else {
        return;
    };
    let Ok(mut core) = core.try_borrow_mut() else {
        log::warn!("skipping rebuild: grid is busy");
        return;
    };
    if let Err(err) = core.rebuild() {
        log::warn!("rebuild failed: {}", err);
    }
}
