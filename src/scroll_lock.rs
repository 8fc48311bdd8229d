//! Page scroll lock shared by the mobile menu and the portfolio modal.
//!
//! Each overlay holds the lock under its own [`LockHolder`]. The page stays
//! locked while any holder remains, so closing the menu underneath an open
//! modal does not re-enable scrolling. Acquire and release are idempotent
//! per holder.

/// Components that can require the page to stop scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockHolder {
    Menu,
    Modal,
}

impl LockHolder {
    fn bit(self) -> u8 {
        match self {
            LockHolder::Menu => 0b01,
            LockHolder::Modal => 0b10,
        }
    }
}

/// Value written to `document.body.style.overflow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
    Auto,
}

impl Overflow {
    pub fn as_css(self) -> &'static str {
        match self {
            Overflow::Hidden => "hidden",
            Overflow::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: u8,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `holder`; returns the resulting body overflow.
    pub fn acquire(&mut self, holder: LockHolder) -> Overflow {
        self.holders |= holder.bit();
        tracing::trace!(?holder, holders = self.holders, "scroll lock acquired");
        self.overflow()
    }

    /// Drop `holder`'s claim; returns the resulting body overflow.
    pub fn release(&mut self, holder: LockHolder) -> Overflow {
        self.holders &= !holder.bit();
        tracing::trace!(?holder, holders = self.holders, "scroll lock released");
        self.overflow()
    }

    pub fn is_held_by(&self, holder: LockHolder) -> bool {
        self.holders & holder.bit() != 0
    }

    pub fn is_locked(&self) -> bool {
        self.holders != 0
    }

    /// Number of holders currently requiring the lock.
    pub fn holder_count(&self) -> u32 {
        self.holders.count_ones()
    }

    pub fn overflow(&self) -> Overflow {
        if self.is_locked() {
            Overflow::Hidden
        } else {
            Overflow::Auto
        }
    }
}
