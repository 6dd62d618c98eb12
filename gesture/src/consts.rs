//! Shared numeric constants for the gesture crate.

// ── Typewriter pacing ───────────────────────────────────────────

/// Nominal delay between revealed characters, in milliseconds.
pub const DEFAULT_SPEED_MS: u32 = 40;

/// Maximum deviation applied to each step delay, in either direction.
pub const SPEED_JITTER_MS: i32 = 15;

/// Floor for any single step delay, in milliseconds.
pub const MIN_STEP_DELAY_MS: u32 = 10;

// ── Stacking ────────────────────────────────────────────────────

/// Starting value of the page-wide stack counter. The first raise yields one above this.
pub const STACK_ORDER_BASE: i32 = 50;

// ── Drag feedback ───────────────────────────────────────────────

/// CSS classes applied to an element while it is being dragged.
pub const GRABBED_CLASSES: [&str; 2] = ["cursor-grabbing", "scale-[1.02]"];
