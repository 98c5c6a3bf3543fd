//! Per-session step completion tracking.
//!
//! Progress is deliberately ephemeral: it lives only for the current session
//! and is never persisted. Indices are 0-based; anything outside
//! `[0, steps.len())` is ignored when computing the percentage, and a
//! zero-step project is defined as 0 % complete rather than a division by
//! zero.

use std::collections::{HashMap, HashSet};

use crate::catalog::DiyProject;

#[derive(Debug, Default)]
pub struct ProgressTracker {
    completed: HashMap<String, HashSet<usize>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a step done, or un-mark it if it already was. Self-inverse.
    pub fn toggle_step(&mut self, project_id: &str, step_index: usize) {
        let steps = self.completed.entry(project_id.to_string()).or_default();
        if !steps.insert(step_index) {
            steps.remove(&step_index);
        }
    }

    /// Whether a step is currently marked done.
    pub fn is_done(&self, project_id: &str, step_index: usize) -> bool {
        self.completed
            .get(project_id)
            .is_some_and(|s| s.contains(&step_index))
    }

    /// Number of completed in-bounds steps for a project.
    pub fn completed_count(&self, project: &DiyProject) -> usize {
        self.completed
            .get(&project.id)
            .map(|s| s.iter().filter(|&&i| i < project.steps.len()).count())
            .unwrap_or(0)
    }

    /// Rounded completion percentage, 0..=100. Zero-step projects are 0 %.
    pub fn percent_complete(&self, project: &DiyProject) -> u8 {
        let total = project.steps.len();
        if total == 0 {
            return 0;
        }
        let done = self.completed_count(project);
        (100.0 * done as f64 / total as f64).round() as u8
    }

    /// Forget all progress for one project.
    pub fn clear(&mut self, project_id: &str) {
        self.completed.remove(project_id);
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Difficulty};

    fn project_with_steps(n: usize) -> DiyProject {
        DiyProject {
            id: "p1".into(),
            title: "t".into(),
            description: "d".into(),
            category: Category::Paper,
            difficulty: Difficulty::Easy,
            steps: (0..n).map(|i| format!("step {i}")).collect(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_absent_project_is_zero_percent() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.percent_complete(&project_with_steps(4)), 0);
    }

    #[test]
    fn test_half_done_four_step_project_is_fifty_percent() {
        let mut tracker = ProgressTracker::new();
        tracker.toggle_step("p1", 0);
        tracker.toggle_step("p1", 2);
        assert_eq!(tracker.percent_complete(&project_with_steps(4)), 50);
    }

    #[test]
    fn test_zero_step_project_never_panics() {
        let mut tracker = ProgressTracker::new();
        tracker.toggle_step("p1", 0);
        assert_eq!(tracker.percent_complete(&project_with_steps(0)), 0);
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut tracker = ProgressTracker::new();
        tracker.toggle_step("p1", 3);
        assert!(tracker.is_done("p1", 3));
        tracker.toggle_step("p1", 3);
        assert!(!tracker.is_done("p1", 3));
        assert_eq!(tracker.percent_complete(&project_with_steps(4)), 0);
    }

    #[test]
    fn test_out_of_bounds_indices_are_ignored() {
        let mut tracker = ProgressTracker::new();
        tracker.toggle_step("p1", 0);
        tracker.toggle_step("p1", 99);
        // Only the in-bounds step counts: 1 of 4 = 25.
        assert_eq!(tracker.percent_complete(&project_with_steps(4)), 25);
    }

    #[test]
    fn test_rounding() {
        let mut tracker = ProgressTracker::new();
        tracker.toggle_step("p1", 0);
        // 1 of 3 = 33.33… rounds to 33
        assert_eq!(tracker.percent_complete(&project_with_steps(3)), 33);
        tracker.toggle_step("p1", 1);
        // 2 of 3 = 66.67 rounds to 67
        assert_eq!(tracker.percent_complete(&project_with_steps(3)), 67);
    }

    #[test]
    fn test_clear() {
        let mut tracker = ProgressTracker::new();
        tracker.toggle_step("p1", 0);
        tracker.toggle_step("p2", 1);
        tracker.clear("p1");
        assert!(!tracker.is_done("p1", 0));
        assert!(tracker.is_done("p2", 1));
    }
}
