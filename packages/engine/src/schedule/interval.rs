//! Browser scheduler backed by `window.setInterval`.

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::{Scheduler, TickCallback, TimerHandle};
use crate::core::{RainError, Result};

pub struct IntervalScheduler {
    window: Window,
    /// JS holds only a reference; the closures must outlive their intervals.
    active: HashMap<i32, Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            active: HashMap::new(),
        }
    }

    pub fn from_global() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| RainError::Host("no global window".into()))?;
        Ok(Self::new(window))
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, interval_ms: u32, callback: TickCallback) -> Result<TimerHandle> {
        let closure = Closure::wrap(callback);
        let timeout = interval_ms.min(i32::MAX as u32) as i32;
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(RainError::host)?;
        self.active.insert(id, closure);
        Ok(TimerHandle::new(id))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.window.clear_interval_with_handle(handle.id());
        self.active.remove(&handle.id());
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        for id in self.active.keys() {
            self.window.clear_interval_with_handle(*id);
        }
    }
}
