//! To-do list widget.
//!
//! Items are appended in creation order and never reordered. Deleting an item
//! removes it from the live list at once, but its row stays in the render list
//! playing an exit animation until a delayed detach task drops it.

use super::Motion;
use crate::timeline::Timeline;
use std::time::Duration;
use thiserror::Error;

pub type TodoId = u64;

/// Longest accepted task text, in characters.
pub const MAX_TODO_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// Display timestamp taken when the item was added.
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Please enter a task")]
    Empty,
    #[error("Task is too long ({len}/{max} characters)")]
    TooLong { len: usize, max: usize },
}

#[derive(Debug, Clone)]
pub struct TodoRow {
    pub item: TodoItem,
    pub motion: Motion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TodoTask {
    Settle(TodoId),
    Detach(TodoId),
}

#[derive(Debug, Clone, Copy)]
pub struct TodoTiming {
    pub enter: Duration,
    pub exit: Duration,
}

#[derive(Debug)]
pub struct TodoList {
    rows: Vec<TodoRow>,
    next_id: TodoId,
    added: usize,
    timing: TodoTiming,
    timeline: Timeline<TodoTask>,
}

impl TodoList {
    pub fn new(timing: TodoTiming) -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            added: 0,
            timing,
            timeline: Timeline::new(),
        }
    }

    /// Validate and append a new task. The text is trimmed first.
    pub fn add(&mut self, text: &str, created: String) -> Result<&TodoItem, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::Empty);
        }
        let len = text.chars().count();
        if len > MAX_TODO_LEN {
            return Err(TodoError::TooLong {
                len,
                max: MAX_TODO_LEN,
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.added += 1;
        let idx = self.rows.len();
        self.rows.push(TodoRow {
            item: TodoItem {
                id,
                text: text.to_string(),
                completed: false,
                created,
            },
            motion: Motion::Entering {
                since: self.timeline.now(),
            },
        });
        self.timeline.after(self.timing.enter, TodoTask::Settle(id));
        tracing::debug!(id, "todo added");

        Ok(&self.rows[idx].item)
    }

    /// Flip the completed flag. Returns the new value, or `None` for an
    /// unknown or already deleted id.
    pub fn toggle(&mut self, id: TodoId) -> Option<bool> {
        let row = self.live_row_mut(id)?;
        row.item.completed = !row.item.completed;
        Some(row.item.completed)
    }

    /// Replace the text when the new value is non-empty and differs from the
    /// current one. Returns whether anything changed.
    ///
    /// The length limit of [`TodoList::add`] is not applied here.
    pub fn edit(&mut self, id: TodoId, text: &str) -> bool {
        let text = text.trim();
        let Some(row) = self.live_row_mut(id) else {
            return false;
        };
        if text.is_empty() || text == row.item.text {
            return false;
        }
        row.item.text = text.to_string();
        tracing::debug!(id, "todo edited");
        true
    }

    /// Start the exit animation and schedule the row's detach. The item is
    /// gone from [`TodoList::items`] immediately.
    pub fn delete(&mut self, id: TodoId) -> Option<TodoItem> {
        let now = self.timeline.now();
        let row = self.live_row_mut(id)?;
        row.motion = Motion::Leaving { since: now };
        let item = row.item.clone();
        self.timeline.after(self.timing.exit, TodoTask::Detach(id));
        tracing::debug!(id, "todo deleted");
        Some(item)
    }

    pub fn advance(&mut self, now: Duration) {
        while let Some(task) = self.timeline.pop_due(now) {
            match task {
                TodoTask::Settle(id) => {
                    if let Some(row) = self.rows.iter_mut().find(|r| r.item.id == id) {
                        if row.motion.is_entering() {
                            row.motion = Motion::Settled;
                        }
                    }
                }
                TodoTask::Detach(id) => {
                    self.rows.retain(|r| r.item.id != id);
                }
            }
        }
        self.timeline.advance_to(now);
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items().find(|item| item.id == id)
    }

    /// Live items, excluding rows that are animating out.
    pub fn items(&self) -> impl Iterator<Item = &TodoItem> {
        self.rows
            .iter()
            .filter(|r| !r.motion.is_leaving())
            .map(|r| &r.item)
    }

    /// Everything currently on screen, including leaving rows.
    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items().count()
    }

    /// Number of tasks ever added. Deleting does not lower it.
    pub fn added(&self) -> usize {
        self.added
    }

    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn timing(&self) -> TodoTiming {
        self.timing
    }

    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }

    fn live_row_mut(&mut self, id: TodoId) -> Option<&mut TodoRow> {
        self.rows
            .iter_mut()
            .find(|r| r.item.id == id && !r.motion.is_leaving())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> TodoList {
        TodoList::new(TodoTiming {
            enter: Duration::from_millis(300),
            exit: Duration::from_millis(300),
        })
    }

    fn add(list: &mut TodoList, text: &str) -> Result<TodoId, TodoError> {
        list.add(text, "12:00".into()).map(|item| item.id)
    }

    #[test]
    fn test_add_valid_text() {
        let mut todos = list();
        let item = todos.add("Buy milk", "12:00".into()).unwrap().clone();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos.added(), 1);
        assert!(todos.rows()[0].motion.is_entering());

        todos.advance(Duration::from_millis(300));
        assert_eq!(todos.rows()[0].motion, Motion::Settled);
    }

    #[test]
    fn test_duplicate_text_gets_distinct_ids() {
        let mut todos = list();
        let a = add(&mut todos, "Buy milk").unwrap();
        let b = add(&mut todos, "Buy milk").unwrap();
        assert_ne!(a, b);
        assert!(b > a);
        let texts: Vec<_> = todos.items().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Buy milk"]);
    }

    #[test]
    fn test_rejects_empty_and_too_long() {
        let mut todos = list();
        assert_eq!(add(&mut todos, ""), Err(TodoError::Empty));
        assert_eq!(add(&mut todos, "   "), Err(TodoError::Empty));
        let long = "x".repeat(51);
        assert_eq!(
            add(&mut todos, &long),
            Err(TodoError::TooLong { len: 51, max: 50 })
        );
        assert_eq!(todos.len(), 0);
        assert_eq!(todos.added(), 0);
    }

    #[test]
    fn test_length_limit_counts_chars_not_bytes() {
        let mut todos = list();
        assert!(add(&mut todos, &"x".repeat(50)).is_ok());
        assert!(add(&mut todos, &"é".repeat(50)).is_ok());
        assert!(add(&mut todos, &"é".repeat(51)).is_err());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut todos = list();
        let id = add(&mut todos, "Walk dog").unwrap();
        assert_eq!(todos.toggle(id), Some(true));
        assert_eq!(todos.toggle(id), Some(false));
        assert!(!todos.get(id).unwrap().completed);
        assert_eq!(todos.toggle(999), None);
    }

    #[test]
    fn test_toggle_keeps_order() {
        let mut todos = list();
        let a = add(&mut todos, "a").unwrap();
        let b = add(&mut todos, "b").unwrap();
        todos.toggle(a);
        let ids: Vec<_> = todos.items().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_edit_rules() {
        let mut todos = list();
        let id = add(&mut todos, "Call mom").unwrap();
        assert!(!todos.edit(id, ""));
        assert!(!todos.edit(id, "Call mom"));
        assert!(todos.edit(id, "Call dad"));
        assert_eq!(todos.get(id).unwrap().text, "Call dad");
        // no length re-validation on edit
        let long = "y".repeat(80);
        assert!(todos.edit(id, &long));
        assert_eq!(todos.get(id).unwrap().text.len(), 80);
    }

    #[test]
    fn test_delete_animates_then_detaches() {
        let mut todos = list();
        let id = add(&mut todos, "Temp").unwrap();
        todos.advance(Duration::from_millis(500));

        let removed = todos.delete(id).unwrap();
        assert_eq!(removed.text, "Temp");
        assert_eq!(todos.len(), 0);
        assert_eq!(todos.rows().len(), 1);
        assert!(todos.rows()[0].motion.is_leaving());

        todos.advance(Duration::from_millis(799));
        assert_eq!(todos.rows().len(), 1);
        todos.advance(Duration::from_millis(800));
        assert!(todos.rows().is_empty());

        // the added counter is not lowered by a delete
        assert_eq!(todos.added(), 1);
    }

    #[test]
    fn test_deleted_item_is_terminal() {
        let mut todos = list();
        let id = add(&mut todos, "Gone").unwrap();
        todos.delete(id);
        assert_eq!(todos.toggle(id), None);
        assert!(!todos.edit(id, "Back"));
        assert!(todos.delete(id).is_none());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut todos = list();
        let a = add(&mut todos, "a").unwrap();
        todos.delete(a);
        todos.advance(Duration::from_secs(1));
        let b = add(&mut todos, "b").unwrap();
        assert!(b > a);
    }
}
