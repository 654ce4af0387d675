//! One day of study tasks.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyTask {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub minutes: u32,
    pub completed: bool,
    pub priority: Priority,
}

/// Tasks scheduled for a single date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyPlan {
    pub date: String,
    pub tasks: Vec<StudyTask>,
    completed_minutes: u32,
}

impl StudyPlan {
    pub fn new(date: impl Into<String>, tasks: Vec<StudyTask>) -> Self {
        let mut day = Self {
            date: date.into(),
            tasks,
            completed_minutes: 0,
        };
        day.recompute();
        day
    }

    /// Built-in plan shown on the study plan page.
    pub fn sample() -> Self {
        let task = |id, title: &str, subject: &str, minutes, completed, priority| StudyTask {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            minutes,
            completed,
            priority,
        };
        Self::new(
            "2024-01-15",
            vec![
                task(1, "Review Mathematics Chapter 5", "Mathematics", 60, true, Priority::High),
                task(2, "Practice Chemistry Problems", "Chemistry", 45, true, Priority::Medium),
                task(3, "Read History Chapter 8", "History", 90, false, Priority::High),
                task(4, "English Essay Draft", "English", 45, false, Priority::Medium),
            ],
        )
    }

    /// Flip a task and recompute completed minutes. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u32) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            self.recompute();
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.tasks.iter().map(|t| t.minutes).sum()
    }

    pub fn completed_minutes(&self) -> u32 {
        self.completed_minutes
    }

    /// Completed minutes over total minutes; 0 for an empty day.
    pub fn completion_percent(&self) -> f64 {
        let total = self.total_minutes();
        if total == 0 {
            return 0.0;
        }
        self.completed_minutes as f64 / total as f64 * 100.0
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    pub fn is_done(&self) -> bool {
        !self.tasks.is_empty() && self.remaining_count() == 0
    }

    fn recompute(&mut self) {
        self.completed_minutes = self
            .tasks
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.minutes)
            .sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_day_is_half_done() {
        let day = StudyPlan::sample();
        assert_eq!(day.total_minutes(), 240);
        assert_eq!(day.completed_minutes(), 105);
        assert_eq!(day.completed_count(), 2);
        assert_eq!(day.remaining_count(), 2);
    }

    #[test]
    fn test_toggle_recomputes_minutes() {
        let mut day = StudyPlan::sample();
        day.toggle(3);
        assert_eq!(day.completed_minutes(), 195);
        day.toggle(4);
        assert!(day.is_done());
        assert_eq!(day.completion_percent(), 100.0);
        day.toggle(1);
        assert_eq!(day.completed_minutes(), 180);
        assert!(!day.is_done());
    }

    #[test]
    fn test_empty_day() {
        let day = StudyPlan::new("2024-01-16", Vec::new());
        assert_eq!(day.completion_percent(), 0.0);
        assert!(!day.is_done());
    }
}
