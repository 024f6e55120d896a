use crate::core::Result;

use super::GridCore;

pub(super) fn set_spawn_chances(core: &mut GridCore, drop: f32, clear: f32) -> Result<()> {
    let mut next = core.config.clone();
    next.drop_chance = drop;
    next.clear_chance = clear;
    next.validate()?;
    core.config = next;
    Ok(())
}

pub(super) fn set_tick_interval_ms(core: &mut GridCore, interval_ms: u32) -> Result<()> {
    let mut next = core.config.clone();
    next.tick_interval_ms = interval_ms;
    next.validate()?;
    core.config = next;
    Ok(())
}
