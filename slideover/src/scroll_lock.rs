//! Freezes page scrolling while an overlay is visible.

use crate::host::{PageSurface, ViewportProbe};

/// Pins the page at its scroll position and restores it afterwards.
///
/// Inactive unless constructed with `enabled`; every call is then a no-op.
#[derive(Debug, Default)]
pub struct ScrollLock {
    enabled: bool,
    /// Scroll-Y captured by the last `lock`, present only while pinned.
    snapshot: Option<i32>,
}

impl ScrollLock {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            snapshot: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_locked(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<i32> {
        self.snapshot
    }

    /// Capture the scroll position and pin the page there.
    ///
    /// The page height is extended to viewport height plus scroll so the
    /// document keeps its length while pinned. A second `lock` keeps the first
    /// snapshot. Returns true if the page was pinned by this call.
    pub fn lock<H>(&mut self, host: &mut H) -> bool
    where
        H: ViewportProbe + PageSurface + ?Sized,
    {
        if !self.enabled || self.snapshot.is_some() {
            return false;
        }

        let scroll_y = host.scroll_y();
        let height = (host.viewport().height as i64 + scroll_y as i64).max(0);
        host.pin_page(-scroll_y, height.min(u32::MAX as i64) as u32);
        self.snapshot = Some(scroll_y);
        log::debug!("page pinned at scroll {scroll_y}");
        true
    }

    /// Unpin the page and scroll back to the snapshot.
    /// Without a snapshot this does nothing. Returns true if the page was unpinned.
    pub fn unlock<H>(&mut self, host: &mut H) -> bool
    where
        H: PageSurface + ?Sized,
    {
        let Some(scroll_y) = self.snapshot.take() else {
            return false;
        };

        host.unpin_page();
        if scroll_y != 0 {
            host.scroll_to(scroll_y);
        }
        log::debug!("page unpinned, scroll restored to {scroll_y}");
        true
    }
}
