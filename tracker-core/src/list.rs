//! TaskList — the flat task collection behind the CLI.
//!
//! Design:
//! - Tasks live in a Vec in storage (insertion) order; `list` walks that
//!   order directly.
//! - `update`/`set_status` sort the vec by ID and binary-search it, like the
//!   original flat-file tool did. The reorder is incidental; callers must
//!   not rely on it.
//! - New IDs are max(existing) + 1, so a fresh ID can never collide with a
//!   surviving task's ID, no matter what was deleted in between.

use crate::task::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new `todo` task and return its ID.
    pub fn add(&mut self, description: impl Into<String>) -> u32 {
        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.tasks.push(Task::new(id, description));
        id
    }

    /// Replace a task's description. `None` if no task has that ID.
    pub fn update(&mut self, id: u32, description: impl Into<String>) -> Option<&Task> {
        let idx = self.locate(id)?;
        let task = &mut self.tasks[idx];
        task.description = description.into();
        task.touch();
        Some(&self.tasks[idx])
    }

    /// Overwrite a task's status. `None` if no task has that ID.
    pub fn set_status(&mut self, id: u32, status: TaskStatus) -> Option<&Task> {
        let idx = self.locate(id)?;
        let task = &mut self.tasks[idx];
        task.status = status;
        task.touch();
        Some(&self.tasks[idx])
    }

    /// Remove a task in place, preserving the order of the remainder.
    pub fn remove(&mut self, id: u32) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Tasks in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Tasks with an exact status match, in storage order.
    pub fn iter_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.status == status)
    }

    // Binary search requires ID order, so sort first.
    fn locate(&mut self, id: u32) -> Option<usize> {
        self.tasks.sort_unstable_by_key(|t| t.id);
        self.tasks.binary_search_by_key(&id, |t| t.id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(descriptions: &[&str]) -> TaskList {
        let mut l = TaskList::new();
        for d in descriptions {
            l.add(*d);
        }
        l
    }

    #[test]
    fn sequential_adds_get_ids_1_to_n() {
        let l = list_of(&["a", "b", "c"]);
        let ids: Vec<u32> = l.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(l.iter().all(|t| t.status == TaskStatus::Todo));
    }

    #[test]
    fn update_replaces_description_and_stamps_time() {
        let mut l = list_of(&["buy milk"]);
        let t = l.update(1, "buy oat milk").unwrap();
        assert_eq!(t.description, "buy oat milk");
        assert!(t.updated_at.is_some());
    }

    #[test]
    fn update_missing_id_leaves_tasks_unchanged() {
        let mut l = list_of(&["a", "b"]);
        let before: Vec<Task> = l.iter().cloned().collect();
        assert!(l.update(99, "nope").is_none());
        let mut after: Vec<Task> = l.iter().cloned().collect();
        after.sort_by_key(|t| t.id);
        assert_eq!(before, after);
    }

    #[test]
    fn delete_removes_only_the_matching_task() {
        let mut l = list_of(&["a", "b", "c"]);
        assert_eq!(l.remove(2).unwrap().description, "b");
        let ids: Vec<u32> = l.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(l.remove(2).is_none());
    }

    #[test]
    fn mark_done_then_filter_includes_task() {
        let mut l = list_of(&["a", "b"]);
        l.set_status(2, TaskStatus::Done).unwrap();
        let done: Vec<u32> = l.iter_status(TaskStatus::Done).map(|t| t.id).collect();
        assert_eq!(done, vec![2]);
        let todo: Vec<u32> = l.iter_status(TaskStatus::Todo).map(|t| t.id).collect();
        assert_eq!(todo, vec![1]);
    }

    #[test]
    fn new_id_never_collides_with_a_survivor() {
        let mut l = list_of(&["a", "b", "c"]);
        l.remove(2).unwrap();
        assert_eq!(l.add("d"), 4);
        let ids: Vec<u32> = l.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn lookup_still_works_after_deletions() {
        let mut l = list_of(&["a", "b", "c", "d"]);
        l.remove(1).unwrap();
        l.remove(3).unwrap();
        assert!(l.set_status(4, TaskStatus::InProgress).is_some());
        assert_eq!(l.get(4).unwrap().status, TaskStatus::InProgress);
        assert!(l.set_status(3, TaskStatus::Done).is_none());
    }
}
