use yew::prelude::*;

use crate::reveal::{reveal_class, use_reveal};

struct TipCategory {
    title: &'static str,
    tips: &'static [&'static str],
}

struct Resource {
    name: &'static str,
    url: &'static str,
    description: &'static str,
}

const TIPS: &[TipCategory] = &[
    TipCategory {
        title: "Transportation",
        tips: &[
            "Use public transport or carpool when possible",
            "Consider electric or hybrid vehicles",
            "Walk or bike for short distances",
        ],
    },
    TipCategory {
        title: "Food",
        tips: &[
            "Reduce meat consumption",
            "Buy local and seasonal produce",
            "Minimize food waste",
        ],
    },
    TipCategory {
        title: "Energy",
        tips: &[
            "Switch to renewable energy providers",
            "Use energy-efficient appliances",
            "Turn off lights and electronics when not in use",
        ],
    },
];

const RESOURCES: &[Resource] = &[
    Resource {
        name: "Carbon Footprint Calculator",
        url: "https://www.carbonfootprint.com/calculator.aspx",
        description: "Calculate your personal carbon footprint",
    },
    Resource {
        name: "Climate Action Resources",
        url: "https://www.un.org/en/actnow",
        description: "UN resources for climate action",
    },
];

#[function_component(Tips)]
pub fn tips() -> Html {
    let (section_ref, visible) = use_reveal();

    html! {
        <section ref={section_ref} class={classes!("tips", reveal_class(visible))}>
            <div class="tips__inner">
                <h2 class="section-title">{"Tips & Resources"}</h2>

                <div class="tips__grid">
                    { for TIPS.iter().map(|category| html! {
                        <div key={category.title} class="tips__category">
                            <h3>{category.title}</h3>
                            <ul>
                                { for category.tips.iter().map(|tip| html! {
                                    <li>
                                        <span class="tips__bullet">{"•"}</span>
                                        <span>{*tip}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="tips__resources">
                    <h3>{"Additional Resources"}</h3>
                    { for RESOURCES.iter().map(|resource| html! {
                        <a
                            key={resource.url}
                            class="resource"
                            href={resource.url}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <p class="resource__name">{resource.name}</p>
                            <p class="resource__description">{resource.description}</p>
                        </a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .tips {
                        padding: 5rem 1rem;
                        background: #ffffff;
                    }
                    .tips__inner {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .tips__grid {
                        display: grid;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    @media (min-width: 768px) {
                        .tips__grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .tips__category {
                        background: #f0fdf4;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                    }
                    .tips__category h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #15803d;
                        margin-bottom: 1rem;
                    }
                    .tips__category ul {
                        list-style: none;
                        padding: 0;
                    }
                    .tips__category li {
                        display: flex;
                        gap: 0.5rem;
                        color: #4b5563;
                        margin-bottom: 0.5rem;
                    }
                    .tips__bullet {
                        color: #16a34a;
                    }
                    .tips__resources {
                        text-align: center;
                    }
                    .tips__resources h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #166534;
                        margin-bottom: 1.5rem;
                    }
                    .resource {
                        display: block;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        background: #f0fdf4;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }
                    .resource:hover {
                        background: #dcfce7;
                    }
                    .resource__name {
                        font-weight: 500;
                        color: #15803d;
                    }
                    .resource__description {
                        color: #4b5563;
                    }
                "#}
            </style>
        </section>
    }
}
