use super::state::Step;
use super::summary::SummaryEntry;

/// What the controller needs from whatever displays the steps.
pub trait StepView {
    /// False when the markup for `step` is missing; navigation then no-ops.
    fn has_step(&self, step: Step) -> bool;
    fn activate(&mut self, step: Step);
    fn deactivate(&mut self, step: Step);
    fn set_completed(&mut self, step: Step, completed: bool);
    fn render_summary(&mut self, entries: &[SummaryEntry]);
    /// Brings the form container into view.
    fn reveal_form(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStatus {
    pub active: bool,
    pub completed: bool,
}

/// In-memory step panel and progress indicator state, read by the component
/// when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBoard {
    statuses: Vec<StepStatus>,
    summary: Vec<SummaryEntry>,
    reveal_pending: bool,
}

impl Default for ProgressBoard {
    fn default() -> Self {
        let statuses = Step::all()
            .map(|step| StepStatus { active: step == Step::FIRST, completed: false })
            .collect();
        Self {
            statuses,
            summary: Vec::new(),
            reveal_pending: false,
        }
    }
}

impl ProgressBoard {
    pub fn status(&self, step: Step) -> StepStatus {
        self.statuses.get(step.index()).copied().unwrap_or_default()
    }

    pub fn summary(&self) -> &[SummaryEntry] {
        &self.summary
    }

    /// Returns true once per `reveal_form` request.
    pub fn take_reveal(&mut self) -> bool {
        std::mem::take(&mut self.reveal_pending)
    }
}

impl StepView for ProgressBoard {
    fn has_step(&self, step: Step) -> bool {
        step.index() < self.statuses.len()
    }

    fn activate(&mut self, step: Step) {
        if let Some(status) = self.statuses.get_mut(step.index()) {
            status.active = true;
        }
    }

    fn deactivate(&mut self, step: Step) {
        if let Some(status) = self.statuses.get_mut(step.index()) {
            status.active = false;
        }
    }

    fn set_completed(&mut self, step: Step, completed: bool) {
        if let Some(status) = self.statuses.get_mut(step.index()) {
            status.completed = completed;
        }
    }

    fn render_summary(&mut self, entries: &[SummaryEntry]) {
        self.summary = entries.to_vec();
    }

    fn reveal_form(&mut self) {
        self.reveal_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_starts_on_first_step() {
        let board = ProgressBoard::default();
        assert!(board.status(Step::FIRST).active);
        for step in Step::all().skip(1) {
            assert_eq!(board.status(step), StepStatus::default());
        }
    }

    #[test]
    fn reveal_is_consumed_once() {
        let mut board = ProgressBoard::default();
        assert!(!board.take_reveal());
        board.reveal_form();
        assert!(board.take_reveal());
        assert!(!board.take_reveal());
    }
}
