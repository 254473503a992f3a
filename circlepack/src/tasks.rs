//! Deferred task queue.
//!
//! Work queued during a layout pass runs on a later tick of the same
//! event loop, after every synchronous mutation of the pass has landed.

use std::collections::VecDeque;

/// FIFO of tasks waiting for the next tick.
#[derive(Debug)]
pub struct TaskQueue<T> {
    tasks: VecDeque<T>,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Queue a task for the next tick.
    pub fn defer(&mut self, task: T) {
        self.tasks.push_back(task);
    }

    /// Take every queued task, oldest first. Tasks deferred while the
    /// returned batch runs wait for the following tick.
    pub fn drain(&mut self) -> Vec<T> {
        self.tasks.drain(..).collect()
    }

    /// Drop queued tasks matching `pred`.
    pub fn cancel(&mut self, pred: impl Fn(&T) -> bool) {
        self.tasks.retain(|task| !pred(task));
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_is_fifo() {
        let mut queue = TaskQueue::new();
        queue.defer(1);
        queue.defer(2);
        queue.defer(3);
        assert!(!queue.is_empty());
        assert_eq!(queue.drain(), vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_tasks_deferred_after_drain_wait() {
        let mut queue = TaskQueue::new();
        queue.defer("first");
        let batch = queue.drain();
        queue.defer("second");
        assert_eq!(batch, vec!["first"]);
        assert_eq!(queue.drain(), vec!["second"]);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TaskQueue::new();
        for i in 0..5 {
            queue.defer(i);
        }
        queue.cancel(|&i| i % 2 == 0);
        assert_eq!(queue.drain(), vec![1, 3]);
    }
}
