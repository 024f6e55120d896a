//! Xorshift32 helpers shared by the generator, markers and columns.
//!
//! All randomness flows through a single `&mut u32` state owned by the grid, so a
//! seeded grid replays the exact same animation.

const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Xorshift never leaves the zero state, so zero is remapped.
#[inline]
pub fn seed_state(seed: u32) -> u32 {
    if seed == 0 { FALLBACK_SEED } else { seed }
}

/// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
#[inline]
pub fn rand_below(state: &mut u32, bound: u32) -> u32 {
    ((xorshift32(state) as u64 * bound as u64) >> 32) as u32
}

/// Uniform integer in `[min, max]`.
#[inline]
pub fn rand_inclusive(state: &mut u32, min: u32, max: u32) -> u32 {
    if max <= min {
        return min;
    }
    min + rand_below(state, max - min + 1)
}

/// Uniform float in `[0, 1)` built from the top 24 bits.
#[inline]
pub fn rand_unit(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Bernoulli trial. `1.0` always hits, `0.0` never does.
#[inline]
pub fn chance(state: &mut u32, p: f32) -> bool {
    rand_unit(state) < p
}

/// Seed from the host clock (wall time on wasm, system time natively).
pub fn clock_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now();
        seed_state((now as u64 ^ (now as u64 >> 32)) as u32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        seed_state((nanos ^ (nanos >> 32)) as u32)
    }
}
