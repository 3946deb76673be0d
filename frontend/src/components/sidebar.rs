use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CtaSidebarProps {
    #[prop_or_default]
    pub children: Children,
}

/// Static calls to action shown beside long-form pages.
#[function_component(CtaSidebar)]
pub fn cta_sidebar(props: &CtaSidebarProps) -> Html {
    html! {
        <aside class="cta-sidebar">
            { for props.children.iter() }
            <div class="cta-card">
                <h3>{"Talk to a Lawyer Today"}</h3>
                <p>{"Free consultation. No fees unless we win."}</p>
                <a class="cta-phone" href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                <a class="cta-email" href={format!("mailto:{}", config::INTAKE_EMAIL)}>{config::INTAKE_EMAIL}</a>
                <Link<Route> to={Route::FreeConsultation} classes="cta-button">
                    {"Request a Free Consultation"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .cta-sidebar {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    position: sticky;
                    top: 90px;
                }
                .cta-card {
                    background: #1e3a8a;
                    color: #ffffff;
                    border-radius: 12px;
                    padding: 1.75rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .cta-card a {
                    color: #ffffff;
                }
                .cta-phone {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .cta-button {
                    margin-top: 0.5rem;
                    padding: 0.8rem 1rem;
                    background: #f59e0b;
                    border-radius: 8px;
                    text-align: center;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </aside>
    }
}
