use yew::prelude::*;

use crate::reveal::{reveal_class, use_reveal};

const STATS: &[(&str, &str)] = &[
    ("16.5", "kg CO₂ emitted per person daily"),
    ("60%", "from transportation and food"),
    ("2.5", "tons CO₂ saved per year with small changes"),
];

#[function_component(About)]
pub fn about() -> Html {
    let (section_ref, visible) = use_reveal();

    html! {
        <section ref={section_ref} class={classes!("about", reveal_class(visible))}>
            <div class="about__inner">
                <h2 class="section-title">{"Why Race to Zero?"}</h2>
                <div class="about__stats">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="stat">
                            <p class="stat__value">{*value}</p>
                            <p class="stat__label">{*label}</p>
                        </div>
                    }) }
                </div>
                <p class="about__quote">
                    {"\"We can't do everything. But we can all do something.\""}
                </p>
            </div>
            <style>
                {r#"
                    .about {
                        padding: 5rem 1rem;
                        background: #ffffff;
                    }
                    .about__inner {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .about__stats {
                        display: grid;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    @media (min-width: 768px) {
                        .about__stats {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .stat {
                        background: #f0fdf4;
                        padding: 2rem;
                        border-radius: 0.75rem;
                        text-align: center;
                        transition: all 0.3s ease;
                    }
                    .stat:hover {
                        transform: scale(1.05);
                        background: #dcfce7;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .stat__value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #16a34a;
                        margin-bottom: 1rem;
                    }
                    .stat__label {
                        color: #4b5563;
                    }
                    .about__quote {
                        font-size: 1.5rem;
                        font-style: italic;
                        color: #4b5563;
                        text-align: center;
                    }
                "#}
            </style>
        </section>
    }
}
