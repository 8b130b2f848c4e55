//! Snack-bar notices ("Session created !", ...).
//!
//! DESIGN
//! ======
//! Every `show` bumps a sequence number and the auto-close timer only clears
//! the notice it was started for, so a fresh notice is never cut short by an
//! older timer.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays up.
pub const NOTICE_MS: u32 = 3000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub message: Option<String>,
    pub seq: u64,
}

impl NoticeState {
    /// Show `message` and return the sequence number its timer should expire.
    pub fn show(&mut self, message: &str) -> u64 {
        self.seq += 1;
        self.message = Some(message.to_owned());
        self.seq
    }

    /// Close the notice if it is still the one shown at `seq`.
    pub fn expire(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }

    pub fn close(&mut self) {
        self.message = None;
    }
}
