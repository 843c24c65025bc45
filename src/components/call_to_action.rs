use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    /// Tons cut so far in the tracker.
    pub reduced: u32,
    pub on_reset: Callback<()>,
}

/// `mailto:` link inviting a friend, carrying the current progress.
pub fn share_link(reduced: u32) -> String {
    let subject = "Join me in the Race to Zero";
    let body = if reduced == 0 {
        "I'm starting my company's race to zero. Pick your initiatives and cut carbon with me!"
            .to_string()
    } else {
        format!(
            "We just cut {} tons of CO₂ in the Race to Zero. Can your team beat that?",
            reduced
        )
    };
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    )
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_reset.emit(());
        })
    };

    html! {
        <section class="cta">
            <div class="cta__inner">
                <h2 class="section-title">{"Ready to Make a Difference?"}</h2>
                <p class="cta__lead">
                    {"Share your progress and inspire others to join the race to zero!"}
                </p>
                <div class="cta__actions">
                    <button class="button button--solid" onclick={on_reset}>
                        {"Start Over"}
                    </button>
                    <a class="button button--outline" href={share_link(props.reduced)}>
                        {"Challenge a Friend"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .cta {
                        padding: 5rem 1rem;
                        background: #f0fdf4;
                    }
                    .cta__inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .cta__lead {
                        font-size: 1.25rem;
                        color: #4b5563;
                        margin-bottom: 3rem;
                    }
                    .cta__actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_reports_progress() {
        let link = share_link(30);
        assert!(link.starts_with("mailto:?subject=Join%20me%20in%20the%20Race%20to%20Zero&body="));
        assert!(link.contains("cut%2030%20tons"));
    }

    #[test]
    fn share_link_without_progress_invites_to_start() {
        let link = share_link(0);
        assert!(link.contains("starting%20my%20company"));
        assert!(!link.contains("tons"));
    }
}
