use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer__inner">
                <p class="footer__made">{"Created with ❤️ for a sustainable future"}</p>
                <p class="footer__note">
                    {"Not affiliated with any organization — just doing my part"}
                </p>
                <div class="footer__links">
                    <a href={config::AUTHOR_GITHUB} target="_blank" rel="noopener noreferrer">
                        {"GitHub"}
                    </a>
                    <span class="footer__dot">{"•"}</span>
                    <a href={config::AUTHOR_PORTFOLIO} target="_blank" rel="noopener noreferrer">
                        {"Portfolio"}
                    </a>
                </div>
                <p class="footer__copyright">{format!("© {} Race to Zero", year)}</p>
            </div>
            <style>
                {r#"
                    .footer {
                        background: #166534;
                        color: #ffffff;
                        padding: 3rem 1rem;
                    }
                    .footer__inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .footer__made {
                        margin-bottom: 1rem;
                    }
                    .footer__note {
                        color: #bbf7d0;
                        margin-bottom: 2rem;
                    }
                    .footer__links {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .footer__links a {
                        color: #bbf7d0;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer__links a:hover {
                        color: #ffffff;
                    }
                    .footer__dot {
                        color: #4ade80;
                    }
                    .footer__copyright {
                        margin-top: 2rem;
                        font-size: 0.875rem;
                        color: #86efac;
                    }
                "#}
            </style>
        </footer>
    }
}
