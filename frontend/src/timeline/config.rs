use thiserror::Error;

use crate::config::DESKTOP_MIN_WIDTH;
use crate::timeline::card::CardKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Desktop,
    Mobile,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Breakpoint::Desktop
        } else {
            Breakpoint::Mobile
        }
    }
}

/// Depth interval over which a card's opacity ramps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthWindow {
    pub start: f64,
    pub end: f64,
}

impl DepthWindow {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("card spacing must be positive, got {0}")]
    NonPositiveSpacing(f64),
    #[error("focal length must be positive, got {0}")]
    NonPositiveFocalLength(f64),
    #[error("start offset, end buffer and pinned distance must not be negative")]
    NegativeTravel,
    #[error("{0} window ends before it starts")]
    InvertedWindow(&'static str),
    #[error("fade-in must finish before fade-out starts")]
    OverlappingWindows,
    #[error("{0} window reaches the focal plane at {1}")]
    BeyondFocalPlane(&'static str, f64),
}

/// Tuning constants for one breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineTuning {
    pub spacing_z: f64,
    pub start_z_offset: f64,
    pub end_buffer: f64,
    /// Ignored for `fade_in.start` when `sequential` is set.
    pub fade_in: DepthWindow,
    pub fade_out: DepthWindow,
    pub summary_fade_out: DepthWindow,
    /// Extra depth the summary card travels past its derived fade-in start
    /// before it begins to show.
    pub summary_fade_in_lead: f64,
    /// Magnitude of the alternating sideways slot, in vw.
    pub lateral_vw: f64,
    pub focal_length: f64,
    /// Page scroll, in px, consumed by one pass of the timeline.
    pub pin_distance: f64,
    /// Derive the fade-in start from the previous card's fade-out end so
    /// that exactly one card is visible at a time.
    pub sequential: bool,
}

impl TimelineTuning {
    pub const fn desktop() -> Self {
        Self {
            spacing_z: 1200.0,
            start_z_offset: 1000.0,
            end_buffer: 1000.0,
            fade_in: DepthWindow::new(-1500.0, -500.0),
            fade_out: DepthWindow::new(200.0, 800.0),
            summary_fade_out: DepthWindow::new(100.0, 400.0),
            summary_fade_in_lead: 0.0,
            lateral_vw: 28.0,
            focal_length: 1000.0,
            pin_distance: 5000.0,
            sequential: false,
        }
    }

    pub const fn mobile() -> Self {
        Self {
            spacing_z: 1600.0,
            start_z_offset: 800.0,
            end_buffer: 500.0,
            fade_in: DepthWindow::new(-800.0, -200.0),
            fade_out: DepthWindow::new(200.0, 800.0),
            summary_fade_out: DepthWindow::new(100.0, 400.0),
            summary_fade_in_lead: 0.0,
            lateral_vw: 0.0,
            focal_length: 1000.0,
            pin_distance: 6000.0,
            sequential: true,
        }
    }

    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        match breakpoint {
            Breakpoint::Desktop => Self::desktop(),
            Breakpoint::Mobile => Self::mobile(),
        }
    }

    fn fade_in_window(&self) -> DepthWindow {
        if self.sequential {
            DepthWindow::new(self.fade_out.end - self.spacing_z, self.fade_in.end)
        } else {
            self.fade_in
        }
    }

    fn summary_fade_in_window(&self) -> DepthWindow {
        let fade_in = self.fade_in_window();
        DepthWindow::new(fade_in.start + self.summary_fade_in_lead, fade_in.end)
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if !(self.spacing_z > 0.0) {
            return Err(TimelineError::NonPositiveSpacing(self.spacing_z));
        }
        if !(self.focal_length > 0.0) {
            return Err(TimelineError::NonPositiveFocalLength(self.focal_length));
        }
        if self.start_z_offset < 0.0 || self.end_buffer < 0.0 || self.pin_distance < 0.0 {
            return Err(TimelineError::NegativeTravel);
        }

        let windows = [
            ("fade-in", self.fade_in_window()),
            ("summary fade-in", self.summary_fade_in_window()),
            ("fade-out", self.fade_out),
            ("summary fade-out", self.summary_fade_out),
        ];
        for (name, window) in windows {
            if window.end < window.start {
                return Err(TimelineError::InvertedWindow(name));
            }
        }
        for &(name, window) in &windows[2..] {
            if window.end >= self.focal_length {
                return Err(TimelineError::BeyondFocalPlane(name, window.end));
            }
        }
        if self.fade_in.end > self.fade_out.start || self.fade_in.end > self.summary_fade_out.start {
            return Err(TimelineError::OverlappingWindows);
        }
        Ok(())
    }
}

/// Resolved parameters for one breakpoint and one card count. Rebuilt
/// whenever either changes; never reused across a breakpoint change.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineConfig {
    pub breakpoint: Breakpoint,
    pub card_count: usize,
    pub spacing_z: f64,
    pub start_z_offset: f64,
    pub end_buffer: f64,
    pub total_travel: f64,
    pub fade_in: DepthWindow,
    pub fade_out: DepthWindow,
    pub summary_fade_in: DepthWindow,
    pub summary_fade_out: DepthWindow,
    pub lateral_vw: f64,
    pub focal_length: f64,
    pub pin_distance: f64,
}

impl TimelineConfig {
    pub fn from_tuning(
        breakpoint: Breakpoint,
        tuning: &TimelineTuning,
        card_count: usize,
    ) -> Result<Self, TimelineError> {
        tuning.validate()?;
        Ok(Self::build(breakpoint, tuning, card_count))
    }

    pub(crate) fn build(breakpoint: Breakpoint, tuning: &TimelineTuning, card_count: usize) -> Self {
        let (total_travel, pin_distance) = match card_count {
            0 => (0.0, 0.0),
            n => (
                tuning.start_z_offset + (n - 1) as f64 * tuning.spacing_z + tuning.end_buffer,
                tuning.pin_distance,
            ),
        };

        let mut config = Self {
            breakpoint,
            card_count,
            spacing_z: tuning.spacing_z,
            start_z_offset: tuning.start_z_offset,
            end_buffer: tuning.end_buffer,
            total_travel,
            fade_in: tuning.fade_in_window(),
            fade_out: tuning.fade_out,
            summary_fade_in: tuning.summary_fade_in_window(),
            summary_fade_out: tuning.summary_fade_out,
            lateral_vw: tuning.lateral_vw,
            focal_length: tuning.focal_length,
            pin_distance,
        };
        if tuning.sequential && card_count >= 2 {
            config.summary_fade_in = config.summary_handoff_window(tuning.summary_fade_in_lead);
        }
        config
    }

    /// Summary fade-in starting at the progress where the card before it
    /// finishes fading out. The summary is always the last card and moves
    /// over a shorter travel, so the start is mapped through its own travel.
    fn summary_handoff_window(&self, lead: f64) -> DepthWindow {
        let last = self.card_count - 1;
        let handoff = (self.fade_out.end - self.initial_depth(last - 1)) / self.total_travel;
        let end = self.summary_fade_in.end;
        let start = self.initial_depth(last) + handoff * self.travel(CardKind::Summary) + lead;
        DepthWindow::new(start.min(end), end)
    }

    pub fn initial_depth(&self, index: usize) -> f64 {
        -self.start_z_offset - index as f64 * self.spacing_z
    }

    /// Depth covered by a card over the full progress range. The summary
    /// card stops short by `end_buffer` so it settles on the camera plane.
    pub fn travel(&self, kind: CardKind) -> f64 {
        match kind {
            CardKind::Image => self.total_travel,
            CardKind::Summary => (self.total_travel - self.end_buffer).max(0.0),
        }
    }

    pub fn fade_windows(&self, kind: CardKind) -> (DepthWindow, DepthWindow) {
        match kind {
            CardKind::Image => (self.fade_in, self.fade_out),
            CardKind::Summary => (self.summary_fade_in, self.summary_fade_out),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.card_count == 0
    }
}

/// Config from the built-in preset for `breakpoint`.
pub fn resolve_config(breakpoint: Breakpoint, card_count: usize) -> TimelineConfig {
    TimelineConfig::build(breakpoint, &TimelineTuning::for_breakpoint(breakpoint), card_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn breakpoint_threshold_is_inclusive() {
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(1440.0), Breakpoint::Desktop);
    }

    #[test]
    fn presets_validate() {
        assert_eq!(TimelineTuning::desktop().validate(), Ok(()));
        assert_eq!(TimelineTuning::mobile().validate(), Ok(()));
    }

    #[test]
    fn desktop_travel_for_five_cards() {
        let config = resolve_config(Breakpoint::Desktop, 5);
        assert_eq!(config.total_travel, 6800.0);
        assert_eq!(config.initial_depth(0), -1000.0);
        assert_eq!(config.initial_depth(4), -5800.0);
        assert_eq!(config.pin_distance, 5000.0);
    }

    #[test]
    fn mobile_fade_in_is_derived_from_spacing() {
        let config = resolve_config(Breakpoint::Mobile, 5);
        assert_eq!(config.fade_in, DepthWindow::new(-800.0, -200.0));
        // Card 3 is done at (800 + 5600) / 7700; card 4 covers 7200 from -7200.
        let handoff = 6400.0 / 7700.0;
        assert!((config.summary_fade_in.start - (-7200.0 + handoff * 7200.0)).abs() < 1e-9);
        assert_eq!(config.summary_fade_in.end, -200.0);

        let wider = TimelineTuning { spacing_z: 2000.0, ..TimelineTuning::mobile() };
        let config = TimelineConfig::from_tuning(Breakpoint::Mobile, &wider, 3).unwrap();
        assert_eq!(config.fade_in.start, -1200.0);
    }

    #[test]
    fn summary_lead_delays_mobile_handoff() {
        let base = resolve_config(Breakpoint::Mobile, 6);
        let late = TimelineTuning { summary_fade_in_lead: 300.0, ..TimelineTuning::mobile() };
        let late = TimelineConfig::from_tuning(Breakpoint::Mobile, &late, 6).unwrap();
        assert!((late.summary_fade_in.start - base.summary_fade_in.start - 300.0).abs() < 1e-9);
        assert_eq!(late.fade_in, base.fade_in);
    }

    #[test]
    fn empty_timeline_consumes_no_scroll() {
        for breakpoint in [Breakpoint::Desktop, Breakpoint::Mobile] {
            let config = resolve_config(breakpoint, 0);
            assert!(config.is_empty());
            assert_eq!(config.total_travel, 0.0);
            assert_eq!(config.pin_distance, 0.0);
        }
    }

    #[test]
    fn initial_depths_strictly_decrease() {
        for breakpoint in [Breakpoint::Desktop, Breakpoint::Mobile] {
            let config = resolve_config(breakpoint, 8);
            for i in 1..8 {
                assert!(config.initial_depth(i) < config.initial_depth(i - 1));
            }
        }
    }

    #[test]
    fn summary_travel_drops_end_buffer() {
        let config = resolve_config(Breakpoint::Desktop, 6);
        assert_eq!(config.travel(CardKind::Image), 8000.0);
        assert_eq!(config.travel(CardKind::Summary), 7000.0);
        // Last card lands exactly on the camera plane.
        assert_eq!(config.initial_depth(5) + config.travel(CardKind::Summary), 0.0);
    }

    #[test]
    fn rejects_bad_tunings() {
        let flat = TimelineTuning { spacing_z: 0.0, ..TimelineTuning::desktop() };
        assert_eq!(flat.validate(), Err(TimelineError::NonPositiveSpacing(0.0)));

        let no_lens = TimelineTuning { focal_length: -1.0, ..TimelineTuning::desktop() };
        assert_eq!(no_lens.validate(), Err(TimelineError::NonPositiveFocalLength(-1.0)));

        let inverted = TimelineTuning {
            fade_out: DepthWindow::new(800.0, 200.0),
            ..TimelineTuning::desktop()
        };
        assert_eq!(inverted.validate(), Err(TimelineError::InvertedWindow("fade-out")));

        let past_lens = TimelineTuning {
            fade_out: DepthWindow::new(200.0, 1000.0),
            ..TimelineTuning::desktop()
        };
        assert_eq!(
            past_lens.validate(),
            Err(TimelineError::BeyondFocalPlane("fade-out", 1000.0))
        );

        let overlapping = TimelineTuning {
            fade_in: DepthWindow::new(-500.0, 300.0),
            ..TimelineTuning::desktop()
        };
        assert_eq!(overlapping.validate(), Err(TimelineError::OverlappingWindows));

        assert!(TimelineConfig::from_tuning(Breakpoint::Desktop, &flat, 3).is_err());
    }
}
