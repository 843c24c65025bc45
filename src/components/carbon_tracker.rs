use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::catalog::{Catalog, Initiative};
use crate::components::call_to_action::CallToAction;
use crate::components::confetti::Confetti;
use crate::config;
use crate::reveal::{reveal_class, use_reveal};
use crate::tracker::{ClampPolicy, TrackerCommand, TrackerState, Transition};

#[derive(Properties, PartialEq)]
pub struct CarbonTrackerProps {
    pub catalog: Rc<Catalog>,
}

/// Tracker section: reads the clamp policy from the URL and fades in on scroll.
#[function_component(CarbonTracker)]
pub fn carbon_tracker(props: &CarbonTrackerProps) -> Html {
    let clamp = use_search_param(config::CLAMP_PARAM.to_string());
    let policy = config::clamp_policy(clamp.as_deref());
    let (section_ref, visible) = use_reveal();

    html! {
        <TrackerBoard
            catalog={props.catalog.clone()}
            policy={policy}
            section_ref={section_ref}
            visible={visible}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TrackerBoardProps {
    pub catalog: Rc<Catalog>,
    pub policy: ClampPolicy,
    pub section_ref: NodeRef,
    pub visible: bool,
}

/// Owns the selection state; every click arrives as a `TrackerCommand`.
pub struct TrackerBoard {
    state: TrackerState,
}

impl Component for TrackerBoard {
    type Message = TrackerCommand;
    type Properties = TrackerBoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let state = TrackerState::new(&props.catalog, props.policy);
        info!(
            "Tracker ready: {} initiatives, {} t, {:?} clamping",
            props.catalog.len(),
            state.initial_total(),
            state.policy()
        );
        Self { state }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match self.state.apply(&ctx.props().catalog, msg) {
            Transition::Completed => info!(
                "Carbon neutral with {} initiatives, celebrating",
                self.state.selected().count()
            ),
            Transition::Reopened => info!("Left carbon neutrality"),
            Transition::Unchanged => {}
        }
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.catalog != old_props.catalog || props.policy != old_props.policy {
            info!("Tracker configuration changed, starting over");
            self.state = TrackerState::new(&props.catalog, props.policy);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let state = &self.state;
        let on_reset = ctx.link().callback(|_: ()| TrackerCommand::Reset);

        html! {
            <>
                <section
                    id={config::TRACKER_ANCHOR}
                    ref={props.section_ref.clone()}
                    class={classes!("tracker", reveal_class(props.visible))}
                >
                    <div class="tracker__inner">
                        <h2 class="section-title">{"Corporate Carbon Tracker"}</h2>

                        <div class="tracker__counter">
                            <div class="tracker__remaining">{state.remaining()}</div>
                            <div class="tracker__bar">
                                <div
                                    class="tracker__bar-fill"
                                    style={format!("width: {:.1}%;", state.progress_percent())}
                                ></div>
                            </div>
                            <p class="tracker__unit">{"tons CO₂ remaining"}</p>
                        </div>

                        <div class="tracker__grid">
                            { for props.catalog.iter().map(|initiative| self.initiative_card(ctx, initiative)) }
                        </div>

                        {
                            if state.remaining() == 0 {
                                html! {
                                    <div class="tracker__done">
                                        <p class="tracker__done-title">{"🎉 Congratulations!"}</p>
                                        <p class="tracker__done-text">
                                            {"Your company has reached carbon neutrality! Share this achievement with stakeholders."}
                                        </p>
                                        {
                                            if state.is_complete() {
                                                html! { <Confetti /> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <style>
                        {r#"
                            .tracker {
                                position: relative;
                                overflow: hidden;
                                padding: 5rem 1rem;
                                background: linear-gradient(to bottom, #f0fdf4, #ffffff);
                            }
                            .tracker__inner {
                                max-width: 72rem;
                                margin: 0 auto;
                            }
                            .tracker__counter {
                                text-align: center;
                                margin-bottom: 3rem;
                            }
                            .tracker__remaining {
                                font-size: 6rem;
                                font-weight: 700;
                                color: #16a34a;
                                transition: all 0.5s ease;
                            }
                            .tracker__bar {
                                width: 8rem;
                                height: 0.25rem;
                                margin: 0.5rem auto 0;
                                background: #bbf7d0;
                                border-radius: 9999px;
                                overflow: hidden;
                            }
                            .tracker__bar-fill {
                                height: 100%;
                                background: #16a34a;
                                transition: width 1s ease;
                            }
                            .tracker__unit {
                                font-size: 1.25rem;
                                color: #4b5563;
                                margin-top: 2rem;
                            }
                            .tracker__grid {
                                display: grid;
                                gap: 1.5rem;
                            }
                            @media (min-width: 768px) {
                                .tracker__grid {
                                    grid-template-columns: repeat(2, 1fr);
                                }
                            }
                            .initiative {
                                display: flex;
                                align-items: flex-start;
                                gap: 1rem;
                                padding: 1.5rem;
                                text-align: left;
                                border: 2px solid transparent;
                                border-radius: 0.75rem;
                                background: #ffffff;
                                color: #1f2937;
                                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                                cursor: pointer;
                                transition: all 0.3s ease;
                            }
                            .initiative:hover {
                                transform: scale(1.05);
                                background: #f0fdf4;
                                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                            }
                            .initiative--selected {
                                background: #dcfce7;
                                color: #166534;
                                border-color: #22c55e;
                                box-shadow: none;
                            }
                            .initiative__emoji {
                                font-size: 2.25rem;
                                margin-top: 0.25rem;
                            }
                            .initiative__body {
                                flex: 1;
                            }
                            .initiative__name {
                                font-size: 1.125rem;
                                font-weight: 500;
                                margin-bottom: 0.25rem;
                            }
                            .initiative__description {
                                font-size: 0.875rem;
                                color: #4b5563;
                                margin-bottom: 0.5rem;
                            }
                            .initiative__meta {
                                display: flex;
                                justify-content: space-between;
                                align-items: center;
                                font-size: 0.75rem;
                            }
                            .initiative__impact {
                                color: #16a34a;
                                font-weight: 700;
                            }
                            .initiative__target {
                                color: #6b7280;
                            }
                            .tracker__done {
                                margin-top: 3rem;
                                text-align: center;
                                animation: fadeIn 0.8s ease-out;
                            }
                            .tracker__done-title {
                                font-size: 1.875rem;
                                font-weight: 700;
                                color: #16a34a;
                                margin-bottom: 1rem;
                            }
                            .tracker__done-text {
                                font-size: 1.25rem;
                                color: #4b5563;
                            }
                        "#}
                    </style>
                </section>
                <CallToAction reduced={state.reduced()} on_reset={on_reset} />
            </>
        }
    }
}

impl TrackerBoard {
    fn initiative_card(&self, ctx: &Context<Self>, initiative: &Initiative) -> Html {
        let id = initiative.id;
        let selected = self.state.is_selected(id);
        let onclick = ctx.link().callback(move |_: MouseEvent| TrackerCommand::Toggle(id));

        html! {
            <button
                key={id}
                class={classes!("initiative", selected.then(|| "initiative--selected"))}
                aria-pressed={selected.to_string()}
                onclick={onclick}
            >
                <span class="initiative__emoji">{&initiative.emoji}</span>
                <div class="initiative__body">
                    <p class="initiative__name">{&initiative.name}</p>
                    <p class="initiative__description">{&initiative.description}</p>
                    <div class="initiative__meta">
                        <p class="initiative__impact">{impact_label(selected, initiative.weight)}</p>
                        <p class="initiative__target">{&initiative.target}</p>
                    </div>
                </div>
            </button>
        }
    }
}

/// Shows what clicking the card would do: cut the weight, or give it back.
fn impact_label(selected: bool, weight: u32) -> String {
    if selected {
        format!("+{} tons CO₂", weight)
    } else {
        format!("-{} tons CO₂", weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_label_flips_with_selection() {
        assert_eq!(impact_label(false, 30), "-30 tons CO₂");
        assert_eq!(impact_label(true, 30), "+30 tons CO₂");
    }
}
