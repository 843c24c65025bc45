use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1 class="section-title">{"Nothing to cut here"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="button button--solid">
                {"Back to the race"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        color: #4b5563;
                        background: #f0fdf4;
                    }
                "#}
            </style>
        </section>
    }
}
