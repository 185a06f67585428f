use web_sys::Element;
use yew::NodeRef;

use crate::error::DomError;
use crate::timeline::advance::RenderState;

impl RenderState {
    /// Inline style placing the card on screen. Cards are centred on the
    /// stage and nearer cards stack above farther ones.
    pub fn style(&self) -> String {
        if self.scale <= 0.0 {
            return "opacity: 0; visibility: hidden; pointer-events: none;".to_string();
        }
        format!(
            "transform: translate(-50%, -50%) translate({:.3}vw, {:.3}px) scale({:.4}); \
             opacity: {:.3}; visibility: {}; pointer-events: {}; z-index: {};",
            self.screen_x,
            self.screen_y,
            self.scale,
            self.opacity,
            if self.is_visible() { "visible" } else { "hidden" },
            if self.interactive { "auto" } else { "none" },
            self.stack_order(),
        )
    }

    fn stack_order(&self) -> i64 {
        (self.depth.round() as i64 + 100_000).max(0)
    }
}

/// Writes one frame of card states onto their elements. Cards whose node
/// is not mounted yet are skipped.
pub fn apply_states(states: &[RenderState], nodes: &[NodeRef]) -> Result<(), DomError> {
    for state in states {
        let Some(element) = nodes.get(state.index).and_then(|node| node.cast::<Element>()) else {
            continue;
        };
        element.set_attribute("style", &state.style())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(scale: f64, opacity: f64) -> RenderState {
        RenderState {
            index: 0,
            depth: -250.0,
            screen_x: -22.4,
            screen_y: 0.0,
            scale,
            opacity,
            interactive: opacity > 0.0,
        }
    }

    #[test]
    fn visible_card_style() {
        assert_eq!(
            state(0.8, 0.5).style(),
            "transform: translate(-50%, -50%) translate(-22.400vw, 0.000px) scale(0.8000); \
             opacity: 0.500; visibility: visible; pointer-events: auto; z-index: 99750;"
        );
    }

    #[test]
    fn transparent_card_ignores_pointer() {
        let style = state(0.8, 0.0).style();
        assert!(style.contains("pointer-events: none"));
        assert!(style.contains("visibility: hidden"));
    }

    #[test]
    fn projected_out_card_is_hidden() {
        assert_eq!(
            state(0.0, 0.0).style(),
            "opacity: 0; visibility: hidden; pointer-events: none;"
        );
    }
}
