use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::reveal::{reveal_class, use_reveal};

fn scroll_to_tracker() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(config::TRACKER_ANCHOR) {
        Some(section) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No #{} section to scroll to", config::TRACKER_ANCHOR),
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let (section_ref, visible) = use_reveal();

    let start = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_tracker();
    });

    html! {
        <section ref={section_ref} class={classes!("hero", reveal_class(visible))}>
            <div class="hero__blobs">
                <div class="blob blob--one"></div>
                <div class="blob blob--two"></div>
                <div class="blob blob--three"></div>
                <div class="blob blob--four"></div>
            </div>

            <div class="hero__content">
                <h1 class="hero__title">{"Race to Zero"}</h1>
                <p class="hero__subtitle">
                    {"Cut your daily carbon footprint — one action at a time"}
                </p>
                <button class="button button--solid hero__cta" onclick={start}>
                    {"Start Cutting Carbon"}
                </button>
            </div>

            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        position: relative;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1rem;
                        background: linear-gradient(to bottom right, #f0fdf4, #dcfce7, #ffffff);
                    }
                    .hero__blobs {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .blob {
                        position: absolute;
                        width: 100%;
                        height: 100%;
                        border-radius: 9999px;
                        opacity: 0.2;
                        animation: blob 7s infinite;
                    }
                    .blob--one { top: -50%; left: -50%; background: #bbf7d0; }
                    .blob--two { top: -50%; right: -50%; background: #86efac; animation-delay: 2s; }
                    .blob--three { bottom: -50%; left: -50%; background: #4ade80; animation-delay: 4s; }
                    .blob--four { bottom: -50%; right: -50%; background: #22c55e; animation-delay: 4s; }
                    @keyframes blob {
                        0% { transform: translate(0px, 0px) scale(1); }
                        33% { transform: translate(30px, -50px) scale(1.1); }
                        66% { transform: translate(-20px, 20px) scale(0.9); }
                        100% { transform: translate(0px, 0px) scale(1); }
                    }
                    .hero__content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                    }
                    .hero__title {
                        font-size: 4.5rem;
                        font-weight: 700;
                        color: #166534;
                        margin-bottom: 1.5rem;
                        animation: fadeIn 0.8s ease-out;
                    }
                    .hero__subtitle {
                        font-size: 1.5rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        animation: fadeInUp 1s ease-out;
                    }
                    .hero__cta {
                        font-size: 1.25rem;
                        padding: 1rem 2.5rem;
                        animation: bounceSubtle 2s ease-in-out infinite;
                    }
                    @keyframes bounceSubtle {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-5px); }
                    }
                "#}
            </style>
        </section>
    }
}
