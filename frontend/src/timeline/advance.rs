use crate::anim::ramp;
use crate::timeline::card::Card;
use crate::timeline::config::{DepthWindow, TimelineConfig};

/// Per-card output of one frame, consumed by the render stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub index: usize,
    pub depth: f64,
    /// Horizontal translation in vw after perspective.
    pub screen_x: f64,
    pub screen_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub interactive: bool,
}

impl RenderState {
    fn hidden(index: usize, depth: f64) -> Self {
        Self {
            index,
            depth,
            screen_x: 0.0,
            screen_y: 0.0,
            scale: 0.0,
            opacity: 0.0,
            interactive: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Clamps scroll progress into [0, 1]; NaN counts as the start.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Progress through a pinned region given how far its top has scrolled
/// past the viewport top.
pub fn pinned_progress(scrolled_into: f64, pin_distance: f64) -> f64 {
    if pin_distance <= 0.0 {
        return 0.0;
    }
    clamp_progress(scrolled_into / pin_distance)
}

/// Perspective scale for a depth, `None` at or past the focal plane.
pub fn project(depth: f64, focal_length: f64) -> Option<f64> {
    let distance = focal_length - depth;
    if distance > 0.0 && distance.is_finite() {
        Some(focal_length / distance)
    } else {
        None
    }
}

/// Evaluates every card against the same progress value.
pub fn advance(progress: f64, config: &TimelineConfig, cards: &[Card]) -> Vec<RenderState> {
    let progress = clamp_progress(progress);
    cards
        .iter()
        .map(|card| evaluate(progress, config, card))
        .collect()
}

fn evaluate(progress: f64, config: &TimelineConfig, card: &Card) -> RenderState {
    let depth = card.initial_depth + progress * card.travel(config);

    let Some(scale) = project(depth, config.focal_length) else {
        return RenderState::hidden(card.index, depth);
    };

    let opacity = opacity(progress, config, card);
    RenderState {
        index: card.index,
        depth,
        screen_x: card.lateral_vw * scale,
        screen_y: 0.0,
        scale,
        opacity,
        interactive: opacity > 0.0,
    }
}

pub fn opacity(progress: f64, config: &TimelineConfig, card: &Card) -> f64 {
    let (fade_in, fade_out) = config.fade_windows(card.kind);
    let shown = window_ramp(progress, to_progress(fade_in, card, config));
    let hidden = window_ramp(progress, to_progress(fade_out, card, config));
    // Windows never overlap, so the minimum is the fade-in ramp before the
    // fade-out window and the fade-out ramp inside it.
    shown.min(1.0 - hidden).clamp(0.0, 1.0)
}

/// A depth window as `(start, end)` progress for one card.
fn to_progress(window: DepthWindow, card: &Card, config: &TimelineConfig) -> (f64, f64) {
    let travel = card.travel(config);
    let at = |z: f64| {
        if travel > 0.0 {
            (z - card.initial_depth) / travel
        } else if z <= card.initial_depth {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    };
    (at(window.start), at(window.end))
}

/// How far `progress` is through a window clamped to [0, 1]. A window that
/// closed before the start is complete, one that opens at the end never runs.
fn window_ramp(progress: f64, (start, end): (f64, f64)) -> f64 {
    if start >= 1.0 {
        return 0.0;
    }
    if end <= 0.0 {
        return 1.0;
    }
    ramp(progress, start.clamp(0.0, 1.0), end.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::card::{layout_cards, CardKind};
    use crate::timeline::config::{resolve_config, Breakpoint, TimelineTuning};

    const EPS: f64 = 1e-9;

    fn timeline(breakpoint: Breakpoint, kinds: &[CardKind]) -> (TimelineConfig, Vec<Card>) {
        let config = resolve_config(breakpoint, kinds.len());
        let cards = layout_cards(kinds, &config);
        (config, cards)
    }

    fn samples() -> impl Iterator<Item = f64> {
        (0..=10_000).map(|step| step as f64 / 10_000.0)
    }

    #[test]
    fn five_card_desktop_scenario() {
        let (config, cards) = timeline(Breakpoint::Desktop, &[CardKind::Image; 5]);
        assert_eq!(config.total_travel, 6800.0);

        let start = advance(0.0, &config, &cards);
        assert_eq!(start[0].depth, -1000.0);

        let end = advance(1.0, &config, &cards);
        assert_eq!(end[4].depth, 1000.0);
    }

    #[test]
    fn endpoints_are_exact() {
        let kinds = [CardKind::Image, CardKind::Image, CardKind::Image, CardKind::Summary];
        for breakpoint in [Breakpoint::Desktop, Breakpoint::Mobile] {
            let (config, cards) = timeline(breakpoint, &kinds);
            let start = advance(0.0, &config, &cards);
            let end = advance(1.0, &config, &cards);
            for card in &cards {
                assert_eq!(start[card.index].depth, card.initial_depth);
                assert_eq!(end[card.index].depth, card.initial_depth + card.travel(&config));
            }
            assert_eq!(end[3].depth, 0.0);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let (config, cards) = timeline(Breakpoint::Desktop, &[CardKind::Image; 3]);
        assert_eq!(advance(-0.5, &config, &cards), advance(0.0, &config, &cards));
        assert_eq!(advance(7.0, &config, &cards), advance(1.0, &config, &cards));
        assert_eq!(advance(f64::NAN, &config, &cards), advance(0.0, &config, &cards));
    }

    #[test]
    fn opacity_stays_in_range_and_continuous() {
        let kinds = [CardKind::Image, CardKind::Image, CardKind::Image, CardKind::Image, CardKind::Summary];
        for breakpoint in [Breakpoint::Desktop, Breakpoint::Mobile] {
            let (config, cards) = timeline(breakpoint, &kinds);
            let mut previous: Option<Vec<RenderState>> = None;
            for progress in samples() {
                let states = advance(progress, &config, &cards);
                for state in &states {
                    assert!(!state.opacity.is_nan());
                    assert!((0.0..=1.0).contains(&state.opacity));
                    assert_eq!(state.interactive, state.opacity > 0.0);
                }
                if let Some(previous) = &previous {
                    for (before, after) in previous.iter().zip(&states) {
                        assert!(
                            (before.opacity - after.opacity).abs() < 0.01,
                            "card {} jumped at {}",
                            after.index,
                            progress
                        );
                    }
                }
                previous = Some(states);
            }
        }
    }

    #[test]
    fn projection_hides_cards_at_the_focal_plane() {
        assert_eq!(project(1000.0, 1000.0), None);
        assert_eq!(project(1200.0, 1000.0), None);
        assert_eq!(project(0.0, 1000.0), Some(1.0));

        let (config, _) = timeline(Breakpoint::Desktop, &[CardKind::Image]);
        for offset in [100.0, 10.0, 1.0, 1e-3, 1e-9, 0.0] {
            let card = Card {
                index: 0,
                kind: CardKind::Image,
                initial_depth: config.focal_length - offset,
                lateral_vw: -28.0,
            };
            let state = advance(0.0, &config, &[card])[0];
            assert!(!state.opacity.is_nan());
            assert!(!state.scale.is_nan());
            assert!(!state.screen_x.is_nan());
            assert_eq!(state.opacity, 0.0);
            assert!(!state.interactive);
        }
    }

    #[test]
    fn mobile_cards_never_double_expose() {
        let kinds = [CardKind::Image, CardKind::Image, CardKind::Image, CardKind::Image, CardKind::Summary];
        let (config, cards) = timeline(Breakpoint::Mobile, &kinds);

        let mut last_visible = vec![None; cards.len()];
        let mut first_visible = vec![None; cards.len()];
        for progress in samples() {
            for state in advance(progress, &config, &cards) {
                if state.is_visible() {
                    first_visible[state.index].get_or_insert(progress);
                    last_visible[state.index] = Some(progress);
                }
            }
        }

        for i in 0..cards.len() - 1 {
            let gone = last_visible[i].expect("card fades in");
            let next = first_visible[i + 1].expect("next card fades in");
            assert!(gone <= next + 1e-3, "card {} still visible at {} > {}", i, gone, next);
        }
    }

    #[test]
    fn mobile_windows_meet_exactly() {
        let (config, cards) = timeline(Breakpoint::Mobile, &[CardKind::Image; 4]);
        for pair in cards.windows(2) {
            let (_, out_end) = to_progress(config.fade_out, &pair[0], &config);
            let (in_start, _) = to_progress(config.fade_in, &pair[1], &config);
            assert!((out_end - in_start).abs() < EPS);
        }
    }

    #[test]
    fn mobile_summary_takes_over_without_a_gap() {
        let mut kinds = vec![CardKind::Image; 5];
        kinds.push(CardKind::Summary);
        let (config, cards) = timeline(Breakpoint::Mobile, &kinds);

        let (_, out_end) = to_progress(config.fade_out, &cards[4], &config);
        let (in_start, _) = to_progress(config.summary_fade_in, &cards[5], &config);
        assert!((out_end - in_start).abs() < EPS);

        let mut last_visible = vec![None; cards.len()];
        let mut first_visible = vec![None; cards.len()];
        for progress in samples() {
            for state in advance(progress, &config, &cards) {
                if state.is_visible() {
                    first_visible[state.index].get_or_insert(progress);
                    last_visible[state.index] = Some(progress);
                }
            }
        }
        for i in 0..cards.len() - 1 {
            let gone: f64 = last_visible[i].expect("card fades in");
            let next: f64 = first_visible[i + 1].expect("next card fades in");
            assert!(next - gone < 0.01, "blank stage between card {} and {}: {} .. {}", i, i + 1, gone, next);
            assert!(gone <= next + 1e-3);
        }
    }

    #[test]
    fn desktop_allows_overlap() {
        let (config, cards) = timeline(Breakpoint::Desktop, &[CardKind::Image; 5]);
        let overlapping = samples().any(|progress| {
            advance(progress, &config, &cards)
                .iter()
                .filter(|state| state.is_visible())
                .count()
                > 1
        });
        assert!(overlapping);
    }

    #[test]
    fn desktop_screen_x_follows_lateral_sign() {
        let (config, cards) = timeline(Breakpoint::Desktop, &[CardKind::Image; 4]);
        for state in advance(0.3, &config, &cards) {
            if state.scale > 0.0 {
                assert_eq!(state.screen_x < 0.0, state.index % 2 == 0);
            }
            assert_eq!(state.screen_y, 0.0);
        }
    }

    #[test]
    fn summary_card_settles_visible() {
        let kinds = [CardKind::Image, CardKind::Image, CardKind::Summary];
        for breakpoint in [Breakpoint::Desktop, Breakpoint::Mobile] {
            let (config, cards) = timeline(breakpoint, &kinds);
            let last = advance(1.0, &config, &cards)[2];
            assert_eq!(last.depth, 0.0);
            assert!((last.scale - 1.0).abs() < EPS);
            assert_eq!(last.opacity, 1.0);
            assert!(last.interactive);
        }
    }

    #[test]
    fn summary_fades_out_sooner_than_images() {
        let (config, _) = timeline(Breakpoint::Desktop, &[CardKind::Image; 3]);
        let image = Card { index: 0, kind: CardKind::Image, initial_depth: -1000.0, lateral_vw: 0.0 };
        let summary = Card { kind: CardKind::Summary, ..image.clone() };
        // Same depth past the summary window but inside the image window.
        let image_progress = (500.0 - image.initial_depth) / image.travel(&config);
        let summary_progress = (500.0 - summary.initial_depth) / summary.travel(&config);
        assert!(opacity(image_progress, &config, &image) > 0.0);
        assert_eq!(opacity(summary_progress, &config, &summary), 0.0);
    }

    #[test]
    fn degenerate_fade_in_is_instant() {
        let tuning = TimelineTuning {
            fade_in: crate::timeline::config::DepthWindow::new(-600.0, -600.0),
            ..TimelineTuning::desktop()
        };
        let config = TimelineConfig::from_tuning(Breakpoint::Desktop, &tuning, 2).unwrap();
        let cards = layout_cards(&[CardKind::Image; 2], &config);
        let step = (-600.0 - cards[0].initial_depth) / config.total_travel;
        assert_eq!(opacity(step - 1e-6, &config, &cards[0]), 0.0);
        assert_eq!(opacity(step, &config, &cards[0]), 1.0);
    }

    #[test]
    fn window_before_start_is_already_visible() {
        let (config, _) = timeline(Breakpoint::Desktop, &[CardKind::Image; 2]);
        let close = Card { index: 0, kind: CardKind::Image, initial_depth: -100.0, lateral_vw: 0.0 };
        assert_eq!(opacity(0.0, &config, &close), 1.0);
    }

    #[test]
    fn empty_timeline_renders_nothing() {
        let (config, cards) = timeline(Breakpoint::Desktop, &[]);
        assert!(advance(0.5, &config, &cards).is_empty());
        assert_eq!(pinned_progress(1200.0, config.pin_distance), 0.0);
    }

    #[test]
    fn pinned_progress_clamps() {
        assert_eq!(pinned_progress(-300.0, 5000.0), 0.0);
        assert_eq!(pinned_progress(2500.0, 5000.0), 0.5);
        assert_eq!(pinned_progress(9000.0, 5000.0), 1.0);
    }
}
