use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::window;

use crate::config;
use crate::scroll::storage::{read_offset, write_offset, SessionStore};

/// Runs a callback once on the UI event loop. Dropping the handle cancels
/// the callback if it has not fired yet.
pub trait Scheduler {
    type Handle;
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub trait Viewport {
    fn scroll_to(&self, offset: u32);
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowViewport;

impl WindowViewport {
    pub fn current_offset() -> u32 {
        window()
            .and_then(|w| w.scroll_y().ok())
            .filter(|y| y.is_finite() && *y > 0.0)
            .map(|y| y.round().min(f64::from(u32::MAX)) as u32)
            .unwrap_or(0)
    }
}

impl Viewport for WindowViewport {
    fn scroll_to(&self, offset: u32) {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, f64::from(offset));
        }
    }
}

/// Keeps one route's scroll offset in session storage while its page is
/// mounted, and puts it back when the page mounts again.
pub struct ScrollMemory<S, T: Scheduler> {
    route_key: String,
    store: S,
    scheduler: T,
    pending_write: RefCell<Option<T::Handle>>,
    pending_restore: RefCell<Option<T::Handle>>,
    active: Cell<bool>,
}

impl<S, T> ScrollMemory<S, T>
where
    S: SessionStore + Clone + 'static,
    T: Scheduler,
{
    /// Reads the saved offset now and scrolls to it once the page has had
    /// `SCROLL_RESTORE_DELAY_MS` to lay out.
    pub fn mount<V>(route_key: impl Into<String>, store: S, viewport: V, scheduler: T) -> Self
    where
        V: Viewport + 'static,
    {
        let route_key = route_key.into();
        let pending_restore = read_offset(&store, &route_key).map(|offset| {
            debug!("Restoring {} to {}px", route_key, offset);
            scheduler.schedule(
                config::SCROLL_RESTORE_DELAY_MS,
                Box::new(move || viewport.scroll_to(offset)),
            )
        });

        Self {
            route_key,
            store,
            scheduler,
            pending_write: RefCell::new(None),
            pending_restore: RefCell::new(pending_restore),
            active: Cell::new(true),
        }
    }

    pub fn route_key(&self) -> &str {
        &self.route_key
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Trailing-edge debounce: only the last offset of a burst is written.
    pub fn record_scroll(&self, offset: u32) {
        if !self.active.get() {
            return;
        }
        let store = self.store.clone();
        let route_key = self.route_key.clone();
        let handle = self.scheduler.schedule(
            config::SCROLL_PERSIST_DEBOUNCE_MS,
            Box::new(move || write_offset(&store, &route_key, offset)),
        );
        // replacing the handle cancels the previous write
        *self.pending_write.borrow_mut() = Some(handle);
    }

    /// Writes immediately, dropping any debounced write still pending.
    pub fn navigate_away(&self, offset: u32) {
        if !self.active.get() {
            return;
        }
        *self.pending_write.borrow_mut() = None;
        write_offset(&self.store, &self.route_key, offset);
    }

    /// Final write for this mount. Cancels every pending callback; later
    /// calls on this instance do nothing.
    pub fn unmount(&self, offset: u32) {
        if !self.active.replace(false) {
            return;
        }
        *self.pending_restore.borrow_mut() = None;
        *self.pending_write.borrow_mut() = None;
        write_offset(&self.store, &self.route_key, offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::testing::{FailingStore, ManualScheduler, MemoryStore, RecordingViewport};

    const ROUTE: &str = "/practice-areas/railroad-accidents";

    fn mount(
        store: &MemoryStore,
        viewport: &RecordingViewport,
        scheduler: &ManualScheduler,
    ) -> ScrollMemory<MemoryStore, ManualScheduler> {
        ScrollMemory::mount(ROUTE, store.clone(), viewport.clone(), scheduler.clone())
    }

    #[test]
    fn restore_waits_for_layout_delay() {
        let store = MemoryStore::default();
        store.set("scrollPosition_/practice-areas/railroad-accidents", "640").unwrap();
        let viewport = RecordingViewport::default();
        let scheduler = ManualScheduler::default();

        let _memory = mount(&store, &viewport, &scheduler);
        scheduler.advance(config::SCROLL_RESTORE_DELAY_MS - 1);
        assert!(viewport.scrolls().is_empty());
        scheduler.advance(1);
        assert_eq!(viewport.scrolls(), vec![640]);
    }

    #[test]
    fn unvisited_route_does_not_scroll() {
        let store = MemoryStore::default();
        let viewport = RecordingViewport::default();
        let scheduler = ManualScheduler::default();

        let memory = mount(&store, &viewport, &scheduler);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(1_000);
        assert!(viewport.scrolls().is_empty());
        assert_eq!(memory.route_key(), ROUTE);
    }

    #[test]
    fn scroll_burst_is_written_once_with_last_offset() {
        let store = MemoryStore::default();
        let scheduler = ManualScheduler::default();
        let memory = mount(&store, &RecordingViewport::default(), &scheduler);

        for offset in [120, 240, 360, 480] {
            memory.record_scroll(offset);
            scheduler.advance(config::SCROLL_PERSIST_DEBOUNCE_MS / 2);
        }
        assert_eq!(store.write_count(), 0);

        scheduler.advance(config::SCROLL_PERSIST_DEBOUNCE_MS);
        assert_eq!(store.write_count(), 1);
        assert_eq!(read_offset(&store, ROUTE), Some(480));
    }

    #[test]
    fn separate_bursts_are_written_separately() {
        let store = MemoryStore::default();
        let scheduler = ManualScheduler::default();
        let memory = mount(&store, &RecordingViewport::default(), &scheduler);

        memory.record_scroll(100);
        scheduler.advance(config::SCROLL_PERSIST_DEBOUNCE_MS);
        memory.record_scroll(900);
        scheduler.advance(config::SCROLL_PERSIST_DEBOUNCE_MS);

        assert_eq!(store.write_count(), 2);
        assert_eq!(read_offset(&store, ROUTE), Some(900));
    }

    #[test]
    fn unmount_flushes_immediately_and_cancels_pending_write() {
        let store = MemoryStore::default();
        let scheduler = ManualScheduler::default();
        let memory = mount(&store, &RecordingViewport::default(), &scheduler);

        memory.record_scroll(300);
        memory.unmount(350);
        assert_eq!(read_offset(&store, ROUTE), Some(350));
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(1_000);
        memory.record_scroll(999);
        memory.navigate_away(999);
        memory.unmount(999);
        scheduler.advance(1_000);
        assert_eq!(store.write_count(), 1);
        assert_eq!(read_offset(&store, ROUTE), Some(350));
        assert!(!memory.is_active());
    }

    #[test]
    fn unmount_cancels_pending_restore() {
        let store = MemoryStore::default();
        store.set("scrollPosition_/practice-areas/railroad-accidents", "800").unwrap();
        let viewport = RecordingViewport::default();
        let scheduler = ManualScheduler::default();

        let memory = mount(&store, &viewport, &scheduler);
        memory.unmount(0);
        scheduler.advance(1_000);
        assert!(viewport.scrolls().is_empty());
    }

    #[test]
    fn dropping_memory_cancels_callbacks() {
        let store = MemoryStore::default();
        let scheduler = ManualScheduler::default();
        {
            let memory = mount(&store, &RecordingViewport::default(), &scheduler);
            memory.record_scroll(42);
        }
        scheduler.advance(1_000);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn navigate_away_writes_now_and_stays_active() {
        let store = MemoryStore::default();
        let scheduler = ManualScheduler::default();
        let memory = mount(&store, &RecordingViewport::default(), &scheduler);

        memory.record_scroll(10);
        memory.navigate_away(75);
        scheduler.advance(1_000);
        assert_eq!(store.write_count(), 1);
        assert_eq!(read_offset(&store, ROUTE), Some(75));

        memory.record_scroll(90);
        scheduler.advance(config::SCROLL_PERSIST_DEBOUNCE_MS);
        assert_eq!(read_offset(&store, ROUTE), Some(90));
    }

    #[test]
    fn position_survives_remount() {
        let store = MemoryStore::default();
        let viewport = RecordingViewport::default();
        let scheduler = ManualScheduler::default();

        let first = mount(&store, &viewport, &scheduler);
        first.record_scroll(1_500);
        scheduler.advance(config::SCROLL_PERSIST_DEBOUNCE_MS);
        drop(first);

        let second = mount(&store, &viewport, &scheduler);
        scheduler.advance(config::SCROLL_RESTORE_DELAY_MS);
        assert_eq!(viewport.scrolls(), vec![1_500]);

        second.unmount(2_000);
        let _third = mount(&store, &viewport, &scheduler);
        scheduler.advance(config::SCROLL_RESTORE_DELAY_MS);
        assert_eq!(viewport.scrolls(), vec![1_500, 2_000]);
    }

    #[test]
    fn other_routes_are_untouched() {
        let store = MemoryStore::default();
        store.set("scrollPosition_/blog", "64").unwrap();
        let scheduler = ManualScheduler::default();
        let memory = mount(&store, &RecordingViewport::default(), &scheduler);

        memory.unmount(500);
        assert_eq!(read_offset(&store, "/blog"), Some(64));
    }

    #[test]
    fn failing_storage_never_raises() {
        let viewport = RecordingViewport::default();
        let scheduler = ManualScheduler::default();

        let memory = ScrollMemory::mount(ROUTE, FailingStore, viewport.clone(), scheduler.clone());
        memory.record_scroll(200);
        scheduler.advance(config::SCROLL_PERSIST_DEBOUNCE_MS);
        memory.navigate_away(250);
        memory.unmount(300);
        scheduler.advance(1_000);

        assert!(viewport.scrolls().is_empty());
    }
}
