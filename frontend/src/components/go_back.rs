use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Scroll distance after which the floating button shows.
const VISIBLE_AFTER_PX: f64 = 300.0;

#[derive(Properties, PartialEq)]
pub struct GoBackProps {
    #[prop_or_else(|| "/".to_string())]
    pub fallback_path: String,
}

#[function_component(GoBack)]
pub fn go_back(props: &GoBackProps) -> Html {
    let scroll = use_window_scroll();
    let visible = scroll.1 > VISIBLE_AFTER_PX;

    let onclick = {
        let fallback_path = props.fallback_path.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(window) = window() else {
                return;
            };
            let history_len = window.history().and_then(|h| h.length()).unwrap_or(0);
            if history_len > 1 {
                if let Ok(history) = window.history() {
                    if let Err(e) = history.back() {
                        warn!("history.back failed: {:?}", e);
                    }
                }
            } else {
                debug!("No history to go back to, opening {}", fallback_path);
                if let Err(e) = window.location().set_href(&fallback_path) {
                    warn!("Could not open {}: {:?}", fallback_path, e);
                }
            }
        })
    };

    html! {
        <button class={classes!("go-back-button", visible.then(|| "visible"))} {onclick}>
            {"← Go Back"}
            <style>
                {r#"
                .go-back-button {
                    position: fixed;
                    top: 90px;
                    left: 1.5rem;
                    z-index: 50;
                    padding: 0.6rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(30, 58, 138, 0.2);
                    background: rgba(255, 255, 255, 0.92);
                    color: #1e3a8a;
                    font-weight: 600;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .go-back-button.visible {
                    opacity: 1;
                    pointer-events: auto;
                }
                "#}
            </style>
        </button>
    }
}
