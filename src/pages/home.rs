use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::carbon_tracker::CarbonTracker;
use crate::pages::{about::About, footer::Footer, hero::Hero, tips::Tips};

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_memo(
        |_| {
            Catalog::builtin().map(Rc::new).map_err(|e| {
                error!("Initiative catalog failed to load: {}", e);
                e
            })
        },
        (),
    );

    let tracker = match &*catalog {
        Ok(catalog) => html! { <CarbonTracker catalog={catalog.clone()} /> },
        Err(_) => html! {
            <section class="tracker-error">
                <p>{"The carbon tracker is unavailable right now. Please try again later."}</p>
            </section>
        },
    };

    html! {
        <div class="page">
            <Hero />
            <About />
            {tracker}
            <Tips />
            <Footer />
            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                    }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1f2937;
                    }
                    .page {
                        min-height: 100vh;
                    }
                    .reveal {
                        opacity: 0;
                        transition: opacity 1s ease;
                    }
                    .reveal--visible {
                        opacity: 1;
                    }
                    .section-title {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #166534;
                        text-align: center;
                        margin-bottom: 3rem;
                        transition: transform 0.3s ease;
                    }
                    .section-title:hover {
                        transform: scale(1.05);
                    }
                    .button {
                        display: inline-block;
                        font-weight: 700;
                        font-size: 1.125rem;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        cursor: pointer;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .button--solid {
                        background: #16a34a;
                        color: #ffffff;
                        border: 2px solid #16a34a;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .button--solid:hover {
                        background: #15803d;
                        transform: scale(1.05);
                    }
                    .button--outline {
                        background: #ffffff;
                        color: #15803d;
                        border: 2px solid #16a34a;
                    }
                    .button--outline:hover {
                        background: #dcfce7;
                    }
                    .tracker-error {
                        padding: 5rem 1rem;
                        text-align: center;
                        color: #991b1b;
                        background: #fef2f2;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </div>
    }
}
