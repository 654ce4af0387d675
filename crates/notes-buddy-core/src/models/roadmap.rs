//! Study roadmap: an ordered list of steps the student ticks off.

/// One roadmap step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Estimated effort in minutes.
    pub minutes: u32,
    pub completed: bool,
}

impl RoadmapStep {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        minutes: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            minutes,
            completed: false,
        }
    }

    /// e.g. `15 minutes`
    pub fn estimated_time(&self) -> String {
        format!("{} minutes", self.minutes)
    }
}

/// A generated roadmap for one topic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roadmap {
    pub topic: String,
    pub steps: Vec<RoadmapStep>,
}

impl Roadmap {
    pub fn new(topic: impl Into<String>, steps: Vec<RoadmapStep>) -> Self {
        Self {
            topic: topic.into(),
            steps,
        }
    }

    /// Flip completion of the step with `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u32) {
        if let Some(step) = self.steps.iter_mut().find(|s| s.id == id) {
            step.completed = !step.completed;
        }
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// Completed share in percent; 0 for an empty roadmap.
    pub fn progress_percent(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.steps.len() as f64 * 100.0
    }

    /// True once every step of a non-empty roadmap is done.
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.completed_count() == self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roadmap {
        Roadmap::new(
            "Cells",
            vec![
                RoadmapStep::new(1, "Read", "Read it", 15),
                RoadmapStep::new(2, "Quiz", "Quiz yourself", 20),
            ],
        )
    }

    #[test]
    fn test_toggle_and_progress() {
        let mut roadmap = sample();
        assert_eq!(roadmap.progress_percent(), 0.0);
        roadmap.toggle(1);
        assert_eq!(roadmap.completed_count(), 1);
        assert_eq!(roadmap.progress_percent(), 50.0);
        assert!(!roadmap.is_complete());
        roadmap.toggle(2);
        assert!(roadmap.is_complete());
        roadmap.toggle(2);
        assert!(!roadmap.is_complete());
    }

    #[test]
    fn test_unknown_step_ignored() {
        let mut roadmap = sample();
        roadmap.toggle(99);
        assert_eq!(roadmap.completed_count(), 0);
    }

    #[test]
    fn test_empty_roadmap_never_complete() {
        let roadmap = Roadmap::default();
        assert!(!roadmap.is_complete());
        assert_eq!(roadmap.progress_percent(), 0.0);
    }

    #[test]
    fn test_estimated_time() {
        assert_eq!(sample().steps[0].estimated_time(), "15 minutes");
    }
}
