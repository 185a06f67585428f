use crate::timeline::config::{Breakpoint, TimelineConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    /// Case-study card with a background image; full travel.
    Image,
    /// Closing text card; reduced travel and a tighter fade-out.
    Summary,
}

/// One entry of the timeline, laid out for a specific config.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub index: usize,
    pub kind: CardKind,
    pub initial_depth: f64,
    /// Sideways slot in vw before perspective scaling.
    pub lateral_vw: f64,
}

impl Card {
    pub fn new(index: usize, kind: CardKind, config: &TimelineConfig) -> Self {
        Self {
            index,
            kind,
            initial_depth: config.initial_depth(index),
            lateral_vw: lateral_offset(index, kind, config),
        }
    }

    pub fn travel(&self, config: &TimelineConfig) -> f64 {
        config.travel(self.kind)
    }
}

fn lateral_offset(index: usize, kind: CardKind, config: &TimelineConfig) -> f64 {
    match (config.breakpoint, kind) {
        (Breakpoint::Mobile, _) | (_, CardKind::Summary) => 0.0,
        (Breakpoint::Desktop, CardKind::Image) if index % 2 == 0 => -config.lateral_vw,
        (Breakpoint::Desktop, CardKind::Image) => config.lateral_vw,
    }
}

pub fn layout_cards(kinds: &[CardKind], config: &TimelineConfig) -> Vec<Card> {
    kinds
        .iter()
        .enumerate()
        .map(|(index, kind)| Card::new(index, *kind, config))
        .collect()
}
