use log::debug;

use crate::timeline::advance::{advance, clamp_progress, RenderState};
use crate::timeline::card::{layout_cards, Card, CardKind};
use crate::timeline::config::{Breakpoint, TimelineConfig, TimelineError, TimelineTuning};

/// Identifies one scheduled rebuild. Only the most recently issued ticket
/// is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RebuildTicket(u64);

/// Mutable state behind a mounted timeline: the active config, the cards
/// laid out for it and the last progress value seen.
#[derive(Debug)]
pub struct TimelineSession {
    kinds: Vec<CardKind>,
    desktop: TimelineTuning,
    mobile: TimelineTuning,
    config: TimelineConfig,
    cards: Vec<Card>,
    progress: f64,
    generation: u64,
}

impl TimelineSession {
    pub fn new(width: f64, kinds: Vec<CardKind>) -> Self {
        let desktop = TimelineTuning::desktop();
        let mobile = TimelineTuning::mobile();
        Self::assemble(width, kinds, desktop, mobile)
    }

    #[cfg(test)]
    pub(crate) fn with_tunings(
        width: f64,
        kinds: Vec<CardKind>,
        desktop: TimelineTuning,
        mobile: TimelineTuning,
    ) -> Result<Self, TimelineError> {
        desktop.validate()?;
        mobile.validate()?;
        Ok(Self::assemble(width, kinds, desktop, mobile))
    }

    fn assemble(width: f64, kinds: Vec<CardKind>, desktop: TimelineTuning, mobile: TimelineTuning) -> Self {
        let breakpoint = Breakpoint::from_width(width);
        let tuning = match breakpoint {
            Breakpoint::Desktop => &desktop,
            Breakpoint::Mobile => &mobile,
        };
        let config = TimelineConfig::build(breakpoint, tuning, kinds.len());
        let cards = layout_cards(&kinds, &config);
        Self {
            kinds,
            desktop,
            mobile,
            config,
            cards,
            progress: 0.0,
            generation: 0,
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.config.breakpoint
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn pin_distance(&self) -> f64 {
        self.config.pin_distance
    }

    /// Issues a ticket for a rebuild that will run later. Any ticket issued
    /// before this one becomes stale.
    pub fn begin_rebuild(&mut self) -> RebuildTicket {
        self.generation += 1;
        RebuildTicket(self.generation)
    }

    /// Rebuilds config and card layout if `ticket` is current and `width`
    /// crosses into another breakpoint. Returns whether anything changed.
    pub fn apply_rebuild(&mut self, ticket: RebuildTicket, width: f64) -> bool {
        if ticket.0 != self.generation {
            debug!("Skipping stale timeline rebuild {:?}", ticket);
            return false;
        }

        let breakpoint = Breakpoint::from_width(width);
        if breakpoint == self.config.breakpoint {
            return false;
        }

        let tuning = match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Mobile => &self.mobile,
        };
        self.config = TimelineConfig::build(breakpoint, tuning, self.kinds.len());
        self.cards = layout_cards(&self.kinds, &self.config);
        self.progress = clamp_progress(self.progress);
        debug!(
            "Timeline rebuilt for {:?}: travel {} over {}px",
            breakpoint, self.config.total_travel, self.config.pin_distance
        );
        true
    }

    /// Computes one frame. All cards see the same progress value.
    pub fn tick(&mut self, progress: f64) -> Vec<RenderState> {
        self.progress = clamp_progress(progress);
        advance(self.progress, &self.config, &self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::config::resolve_config;
    use pretty_assertions::assert_eq;

    fn images(n: usize) -> Vec<CardKind> {
        vec![CardKind::Image; n]
    }

    #[test]
    fn picks_config_from_width() {
        assert_eq!(TimelineSession::new(1280.0, images(3)).breakpoint(), Breakpoint::Desktop);
        assert_eq!(TimelineSession::new(390.0, images(3)).breakpoint(), Breakpoint::Mobile);
    }

    #[test]
    fn resize_across_breakpoint_rebuilds_mid_scroll() {
        let mut session = TimelineSession::new(1280.0, images(5));
        session.tick(0.5);

        let ticket = session.begin_rebuild();
        assert!(session.apply_rebuild(ticket, 400.0));
        assert_eq!(session.config(), &resolve_config(Breakpoint::Mobile, 5));
        assert_eq!(session.progress(), 0.5);

        let states = session.tick(session.progress());
        let config = session.config().clone();
        for (state, card) in states.iter().zip(session.cards()) {
            assert_eq!(card.initial_depth, config.initial_depth(card.index));
            assert_eq!(card.lateral_vw, 0.0);
            assert_eq!(state.depth, card.initial_depth + 0.5 * config.total_travel);
            assert!(state.depth >= card.initial_depth);
            assert!(state.depth <= card.initial_depth + config.total_travel);
        }
    }

    #[test]
    fn resize_within_breakpoint_keeps_config() {
        let mut session = TimelineSession::new(1280.0, images(4));
        let ticket = session.begin_rebuild();
        assert!(!session.apply_rebuild(ticket, 1024.0));
        assert_eq!(session.breakpoint(), Breakpoint::Desktop);
    }

    #[test]
    fn stale_rebuild_is_ignored() {
        let mut session = TimelineSession::new(1280.0, images(4));
        let first = session.begin_rebuild();
        let second = session.begin_rebuild();

        assert!(!session.apply_rebuild(first, 400.0));
        assert_eq!(session.breakpoint(), Breakpoint::Desktop);

        assert!(session.apply_rebuild(second, 400.0));
        assert_eq!(session.breakpoint(), Breakpoint::Mobile);
    }

    #[test]
    fn tick_clamps_progress() {
        let mut session = TimelineSession::new(1280.0, images(2));
        session.tick(3.0);
        assert_eq!(session.progress(), 1.0);
        session.tick(-1.0);
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn empty_session_is_inert() {
        let mut session = TimelineSession::new(1280.0, Vec::new());
        assert_eq!(session.pin_distance(), 0.0);
        assert!(session.tick(0.4).is_empty());
    }

    #[test]
    fn custom_tunings_are_validated() {
        let broken = TimelineTuning { spacing_z: -5.0, ..TimelineTuning::desktop() };
        let result = TimelineSession::with_tunings(1280.0, images(2), broken, TimelineTuning::mobile());
        assert_eq!(result.unwrap_err(), TimelineError::NonPositiveSpacing(-5.0));
    }
}
