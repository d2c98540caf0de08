//! Redraw gating for the main loop.

/// Decides when a new frame is worth drawing.
///
/// A frame is drawn immediately whenever the fingerprint of what would be shown
/// changes; otherwise at most once per `refresh_interval_ms`, so a terminal that
/// got scribbled on heals itself.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if !changed && !stale {
            return false;
        }
        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }

    /// Force the next call to render (e.g. after a terminal resize).
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}
