//! Unread-notification counter.

/// Non-negative unread count. Increments arrive from an event source
/// outside this core; the only operation here is acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationCounter {
    unread: u32,
}

impl NotificationCounter {
    /// Creates a counter with the given starting count.
    pub fn new(unread: u32) -> Self {
        Self { unread }
    }

    /// The current unread count.
    pub fn unread(&self) -> u32 {
        self.unread
    }

    /// Returns true when there is anything to acknowledge.
    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }

    /// Marks everything read. Unconditional and idempotent.
    pub fn acknowledge(&mut self) {
        self.unread = 0;
    }
}
