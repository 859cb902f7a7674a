//! Player physics and the double-jump / roll resource

use super::state::Player;
use crate::consts::*;

impl Player {
    /// Apply gravity, move, and settle on the ground at `ground_y`
    ///
    /// Ground contact is the only place jump charges come back.
    pub fn integrate(&mut self, ground_y: f32) {
        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;

        if self.pos.y + self.size.y >= ground_y {
            self.pos.y = ground_y - self.size.y;
            self.vel_y = 0.0;
            self.grounded = true;
            self.jump_charges = MAX_JUMP_CHARGES;
        } else {
            self.grounded = false;
        }
    }

    /// Spend a jump charge if one is left; returns whether a jump happened
    ///
    /// The last charge gives a weaker hop and starts the roll together with
    /// its (longer) invincibility window.
    pub fn jump(&mut self) -> bool {
        if self.jump_charges == 0 {
            return false;
        }

        self.vel_y = if self.jump_charges == MAX_JUMP_CHARGES {
            JUMP_IMPULSE
        } else {
            DOUBLE_JUMP_IMPULSE
        };
        self.jump_charges -= 1;

        if self.jump_charges == 0 {
            self.roll_timer = ROLL_TICKS;
            self.invincible_timer = INVINCIBLE_TICKS;
            log::debug!("Roll started");
        }
        true
    }

    pub fn is_rolling(&self) -> bool {
        self.roll_timer > 0
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0
    }
}
