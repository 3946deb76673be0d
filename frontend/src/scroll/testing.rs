//! Fakes for the browser pieces scroll memory talks to.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::scroll::memory::{Scheduler, Viewport};
use crate::scroll::storage::{SessionStore, StorageError};

#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Behaves like storage in a locked-down private window.
#[derive(Clone, Copy, Default)]
pub struct FailingStore;

impl SessionStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Rejected("SecurityError".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("QuotaExceededError".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct RecordingViewport {
    scrolls: Rc<RefCell<Vec<u32>>>,
}

impl RecordingViewport {
    pub fn scrolls(&self) -> Vec<u32> {
        self.scrolls.borrow().clone()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to(&self, offset: u32) {
        self.scrolls.borrow_mut().push(offset);
    }
}

struct ScheduledTask {
    id: u64,
    due: u32,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct TaskQueue {
    now: u32,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

/// Virtual-time scheduler. Nothing runs until [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<TaskQueue>>,
}

pub struct ManualHandle {
    id: u64,
    queue: Weak<RefCell<TaskQueue>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            if let Ok(mut queue) = queue.try_borrow_mut() {
                queue.tasks.retain(|task| task.id != self.id);
            }
        }
    }
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    pub fn advance(&self, ms: u32) {
        let target = self.queue.borrow().now + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let earliest = queue
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.id))
                    .map(|(index, _)| index);
                earliest.map(|index| {
                    let task = queue.tasks.remove(index);
                    queue.now = task.due;
                    task
                })
            };
            match next {
                Some(task) => (task.run)(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + delay_ms;
        queue.tasks.push(ScheduledTask { id, due, run: task });
        ManualHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}
