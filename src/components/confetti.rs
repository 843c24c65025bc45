use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub left: f64,
    pub delay: f64,
    pub rotation: f64,
}

impl ConfettiPiece {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.2}s; transform: rotate({:.0}deg);",
            self.left, self.delay, self.rotation
        )
    }
}

/// Places `count` pieces using `rng`, which yields values in `[0, 1)`.
pub fn scatter(count: usize, mut rng: impl FnMut() -> f64) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            left: rng() * 100.0,
            delay: rng() * 2.0,
            rotation: rng() * 360.0,
        })
        .collect()
}

#[function_component(Confetti)]
pub fn confetti() -> Html {
    // Scattered once per mount so re-renders don't reshuffle the pieces
    let pieces = use_state(|| scatter(config::CONFETTI_PIECES, Math::random));

    html! {
        <div class="confetti" aria-hidden="true">
            <style>
                {r#"
                    .confetti {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                        z-index: 50;
                    }
                    .confetti__piece {
                        position: absolute;
                        top: -1rem;
                        width: 0.5rem;
                        height: 0.5rem;
                        background: #22c55e;
                        border-radius: 9999px;
                        animation: confettiFall 3s linear infinite;
                    }
                    @keyframes confettiFall {
                        0% { top: -1rem; opacity: 1; }
                        100% { top: 100vh; opacity: 0; }
                    }
                "#}
            </style>
            { for pieces.iter().enumerate().map(|(i, piece)| html! {
                <div key={i} class="confetti__piece" style={piece.style()}></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_scales_each_axis() {
        let mut values = [0.5, 0.25, 0.125].into_iter().cycle();
        let pieces = scatter(3, move || values.next().unwrap_or(0.0));

        assert_eq!(pieces.len(), 3);
        assert_eq!(
            pieces[0],
            ConfettiPiece {
                left: 50.0,
                delay: 0.5,
                rotation: 45.0,
            }
        );
    }

    #[test]
    fn pieces_stay_on_screen() {
        let pieces = scatter(config::CONFETTI_PIECES, || 0.999);
        assert_eq!(pieces.len(), 50);
        assert!(pieces.iter().all(|p| p.left < 100.0 && p.delay < 2.0 && p.rotation < 360.0));
    }

    #[test]
    fn style_renders_css() {
        let piece = ConfettiPiece {
            left: 12.5,
            delay: 1.5,
            rotation: 90.0,
        };
        assert_eq!(
            piece.style(),
            "left: 12.50%; animation-delay: 1.50s; transform: rotate(90deg);"
        );
    }
}
