use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::scroll::memory::{ScrollMemory, TimeoutScheduler, WindowViewport};
use crate::scroll::storage::BrowserSessionStore;

type BrowserScrollMemory = ScrollMemory<BrowserSessionStore, TimeoutScheduler>;

/// Remembers the scroll offset of the current route for the rest of the
/// browsing session and restores it when the page is mounted again.
#[hook]
pub fn use_scroll_restoration() {
    let route_key = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    use_effect_with_deps(
        move |route_key: &String| {
            debug!("Scroll memory mounted for {}", route_key);
            let memory: Rc<BrowserScrollMemory> = Rc::new(ScrollMemory::mount(
                route_key.clone(),
                BrowserSessionStore,
                WindowViewport,
                TimeoutScheduler,
            ));

            let on_scroll = {
                let memory = memory.clone();
                Closure::<dyn Fn()>::new(move || {
                    memory.record_scroll(WindowViewport::current_offset());
                })
            };
            // full page exits never unmount the component
            let on_page_hide = {
                let memory = memory.clone();
                Closure::<dyn Fn()>::new(move || {
                    memory.navigate_away(WindowViewport::current_offset());
                })
            };

            let window = web_sys::window();
            if let Some(window) = &window {
                for (event, listener) in [("scroll", &on_scroll), ("pagehide", &on_page_hide)] {
                    if let Err(e) = window
                        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                    {
                        warn!("Could not listen for {}: {:?}", event, e);
                    }
                }
            }

            move || {
                if let Some(window) = window {
                    for (event, listener) in [("scroll", &on_scroll), ("pagehide", &on_page_hide)] {
                        let _ = window.remove_event_listener_with_callback(
                            event,
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
                memory.unmount(WindowViewport::current_offset());
                debug!("Scroll memory released for {}", memory.route_key());
            }
        },
        route_key,
    );
}
