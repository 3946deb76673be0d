use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page Not Found"}</h1>
            <p>{"The page you are looking for does not exist or has moved."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">{"Back to Home"}</Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 60vh;
                    padding: 10rem 1.5rem 4rem;
                    text-align: center;
                }
                .not-found-home {
                    display: inline-block;
                    margin-top: 1.5rem;
                    color: #1e3a8a;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
