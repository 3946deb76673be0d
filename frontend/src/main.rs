use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content {
    pub mod blog_posts;
    pub mod practice_areas;
}
mod forms {
    pub mod calculator;
    pub mod schemas;
    pub mod step_wizard;
    pub mod transport;
    pub mod wizard;
}
mod scroll {
    pub mod hook;
    pub mod memory;
    pub mod storage;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod faq;
    pub mod go_back;
    pub mod hero;
    pub mod sidebar;
}
mod pages {
    pub mod blog;
    pub mod car_accident_calculator;
    pub mod case_evaluation;
    pub mod free_consultation;
    pub mod home;
    pub mod not_found;
    pub mod practice_area;
}

use content::practice_areas::PRACTICE_AREAS;
use pages::{
    blog::{Blog, BlogPostPage},
    car_accident_calculator::CarAccidentCalculatorPage,
    case_evaluation::CaseEvaluationPage,
    free_consultation::FreeConsultation,
    home::Home,
    not_found::NotFound,
    practice_area::PracticeAreaPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/practice-areas/:slug")]
    PracticeArea { slug: String },
    #[at("/practice-areas/:slug/case-evaluation")]
    CaseEvaluation { slug: String },
    #[at("/free-consultation")]
    FreeConsultation,
    #[at("/car-accident-calculator")]
    CarAccidentCalculator,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::PracticeArea { slug } => {
            info!("Rendering practice area {}", slug);
            html! { <PracticeAreaPage {slug} /> }
        }
        Route::CaseEvaluation { slug } => {
            info!("Rendering case evaluation for {}", slug);
            html! { <CaseEvaluationPage {slug} /> }
        }
        Route::FreeConsultation => {
            info!("Rendering Free Consultation page");
            html! { <FreeConsultation /> }
        }
        Route::CarAccidentCalculator => {
            info!("Rendering Car Accident Calculator page");
            html! { <CarAccidentCalculatorPage /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    let scroll_y = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0);
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::FIRM_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for PRACTICE_AREAS.iter().map(|area| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::PracticeArea { slug: area.slug.to_string() }} classes="nav-link">
                                {area.name}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::CarAccidentCalculator} classes="nav-link">
                            {"Settlement Calculator"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::FreeConsultation} classes="nav-cta-button">
                            {"Free Consultation"}
                        </Link<Route>>
                    </div>
                    <a class="nav-phone" href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{config::FIRM_NAME}</p>
            <p>
                <a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                {" · "}
                <a href={format!("mailto:{}", config::INTAKE_EMAIL)}>{config::INTAKE_EMAIL}</a>
            </p>
            <p class="footer-disclaimer">
                {"The information on this website is for general information purposes only. Nothing on this site should be taken as legal advice for any individual case or situation."}
            </p>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
