//! Control intent — the abstract per-tick input contract.
//!
//! The consumer translates raw key events into one of these per frame;
//! the core owns no input-device code.

use serde::{Deserialize, Serialize};

/// Input snapshot for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub firing: bool,
    pub special_attack: bool,
    /// One-shot pause toggle; the consumer raises it on key press,
    /// not while the key is held.
    pub toggle_pause: bool,
}

impl ControlIntent {
    /// Net horizontal direction. Conflicting move flags sum to zero
    /// rather than being rejected.
    pub fn move_dx(&self) -> f32 {
        let mut dx = 0.0;
        if self.move_left {
            dx -= 1.0;
        }
        if self.move_right {
            dx += 1.0;
        }
        dx
    }
}
