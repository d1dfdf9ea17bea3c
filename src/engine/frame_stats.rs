//=========================================================================
// Frame Statistics
//=========================================================================
//
// Counts frames and executed ticks over a fixed wall-clock period and
// reports rates once per period. Time comes from the scheduler's clock,
// so reports are deterministic under a manual clock.
//
//=========================================================================

use log::debug;

//=== StatsReport =========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct StatsReport {
    pub fps: f32,
    pub tps: f32,
    pub blend: f32,
}

//=== FrameStats ==========================================================

pub(crate) struct FrameStats {
    /// Zero disables reporting.
    period_ms: u64,
    window_start: Option<u64>,
    frames: u32,
    ticks: u64,
}

impl FrameStats {
    pub(crate) fn new(period_ms: u64) -> Self {
        Self { period_ms, window_start: None, frames: 0, ticks: 0 }
    }

    /// Records one frame that ran `ticks` ticks and ended with `blend`.
    pub(crate) fn record(&mut self, now: u64, ticks: u64, blend: f32) -> Option<StatsReport> {
        if self.period_ms == 0 {
            return None;
        }

        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;
        self.ticks += ticks;

        let elapsed = now.saturating_sub(start);
        if elapsed < self.period_ms {
            return None;
        }

        let secs = elapsed as f32 * 0.001;
        let report = StatsReport {
            fps: self.frames as f32 / secs,
            tps: self.ticks as f32 / secs,
            blend,
        };

        debug!(
            target: "engine",
            "fps={:.1} tps={:.1} blend={:.2}",
            report.fps,
            report.tps,
            report.blend
        );

        self.window_start = Some(now);
        self.frames = 0;
        self.ticks = 0;
        Some(report)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
