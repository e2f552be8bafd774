use crate::ui;
use std::time::Instant;

/// Tracks the numbered steps of one CLI operation
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<String>,
    current_step: usize,
}

impl ProgressTracker {
    pub fn new(operation_name: &str) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
        }
    }

    #[must_use]
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Announce the step that is about to run
    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::status_message(&format!(
                "[{}/{}] {step}",
                self.current_step + 1,
                self.steps.len()
            ));
        }
    }

    /// Mark the current step as done and move on
    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::success_message(step);
            self.current_step += 1;
        }
    }

    /// Announce that the whole operation finished
    pub fn complete(&self) {
        let elapsed = self.start_time.elapsed().as_secs();
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            if elapsed < 60 {
                format!("{elapsed} seconds")
            } else {
                format!("{} minutes {} seconds", elapsed / 60, elapsed % 60)
            }
        ));
    }
}
