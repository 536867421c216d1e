use log::{debug, info};

use super::feedback::{Expiries, ValidationFeedback};
use super::form::{FormDefinition, FormValues, OTHER_TRIGGER};
use super::state::{Step, WizardState};
use super::submission::SubmitError;
use super::summary::build_summary;
use super::validation::{validate_step, StepValidation};
use super::view::StepView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Prev,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Moved { from: Step, to: Step },
    /// Required inputs missing; `expiries` are the feedback timers to schedule.
    Blocked { validation: StepValidation, expiries: Expiries },
    /// Stale or out-of-range request, or missing markup.
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

pub struct WizardController<V: StepView> {
    state: WizardState,
    form: FormDefinition,
    values: FormValues,
    view: V,
    feedback: ValidationFeedback,
    submission: SubmissionStatus,
}

impl<V: StepView> WizardController<V> {
    pub fn new(form: FormDefinition, form_name: &str, view: V) -> Self {
        let values = FormValues::for_form(&form, form_name);
        Self {
            state: WizardState::default(),
            form,
            values,
            view,
            feedback: ValidationFeedback::default(),
            submission: SubmissionStatus::default(),
        }
    }

    pub fn current_step(&self) -> Step {
        self.state.current()
    }

    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn feedback(&self) -> &ValidationFeedback {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut ValidationFeedback {
        &mut self.feedback
    }

    pub fn submission(&self) -> SubmissionStatus {
        self.submission
    }

    /// Single entry point for navigation controls: an action tag plus the
    /// step number the control belongs to.
    pub fn dispatch(&mut self, action: NavAction, step_number: u8) -> NavOutcome {
        let Some(step) = Step::new(step_number) else {
            debug!("Ignoring {:?} for unknown step {}", action, step_number);
            return NavOutcome::Ignored;
        };
        match action {
            NavAction::Next => self.advance(step),
            NavAction::Prev => self.retreat(step),
        }
    }

    pub fn advance(&mut self, from: Step) -> NavOutcome {
        if !self.state.is_at(from) {
            return NavOutcome::Ignored;
        }
        let Some(to) = from.next() else {
            return NavOutcome::Ignored;
        };
        if !self.view.has_step(from) || !self.view.has_step(to) {
            return NavOutcome::Ignored;
        }

        let validation = validate_step(&self.form, &self.values, from);
        if let Some(expiries) = self.feedback.report(&validation) {
            info!(
                "Step {} blocked: {} fields, {} groups missing",
                from,
                validation.missing_fields.len(),
                validation.missing_groups.len()
            );
            return NavOutcome::Blocked { validation, expiries };
        }

        self.view.deactivate(from);
        self.view.set_completed(from, true);
        self.state.forward();
        self.view.activate(to);
        if to.is_terminal() {
            let summary = build_summary(&self.values);
            self.view.render_summary(&summary);
        }
        self.view.reveal_form();

        debug!("Advanced from step {} to {}", from, to);
        NavOutcome::Moved { from, to }
    }

    /// Never validates; only the step bounds and markup guard apply.
    pub fn retreat(&mut self, from: Step) -> NavOutcome {
        if !self.state.is_at(from) {
            return NavOutcome::Ignored;
        }
        let Some(to) = from.prev() else {
            return NavOutcome::Ignored;
        };
        if !self.view.has_step(from) || !self.view.has_step(to) {
            return NavOutcome::Ignored;
        }

        self.view.deactivate(from);
        self.state.backward();
        self.view.activate(to);
        self.view.set_completed(to, false);
        self.view.reveal_form();

        debug!("Went back from step {} to {}", from, to);
        NavOutcome::Moved { from, to }
    }

    /// Text input. Returns true when an error style was cleared.
    pub fn input(&mut self, name: &str, value: String) -> bool {
        self.values.set(name, value);
        self.feedback.clear_field(name)
    }

    pub fn select(&mut self, name: &str, option: &str) {
        self.values.set(name, option);
    }

    pub fn check(&mut self, name: &str, option: &str, checked: bool) {
        self.values.set_checked(name, option, checked);
        if (name, option) == OTHER_TRIGGER {
            self.form.set_other_detail(checked);
        }
    }

    /// Hands out the answers for one submission attempt, or `None` when one
    /// is already in flight, has succeeded, or the visitor is not on the
    /// terminal step.
    pub fn begin_submission(&mut self) -> Option<FormValues> {
        if self.submission != SubmissionStatus::Idle || !self.current_step().is_terminal() {
            return None;
        }
        self.submission = SubmissionStatus::Sending;
        Some(self.values.clone())
    }

    /// Failures keep every answer so the visitor can resubmit.
    pub fn finish_submission(&mut self, result: &Result<(), SubmitError>) {
        self.submission = match result {
            Ok(()) => SubmissionStatus::Sent,
            Err(_) => SubmissionStatus::Idle,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::{CONFIRMATION_FIELD, OTHER_DETAIL_FIELD};
    use crate::wizard::submission::{submit, FormTransport};
    use crate::wizard::summary::SummaryEntry;
    use crate::wizard::view::{ProgressBoard, StepStatus};
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Board that records how often summaries are produced and can pretend
    /// some step markup is missing.
    #[derive(Default)]
    struct FakeView {
        board: ProgressBoard,
        missing: Option<Step>,
        summaries: Vec<Vec<SummaryEntry>>,
    }

    impl StepView for FakeView {
        fn has_step(&self, step: Step) -> bool {
            self.missing != Some(step)
        }
        fn activate(&mut self, step: Step) {
            self.board.activate(step);
        }
        fn deactivate(&mut self, step: Step) {
            self.board.deactivate(step);
        }
        fn set_completed(&mut self, step: Step, completed: bool) {
            self.board.set_completed(step, completed);
        }
        fn render_summary(&mut self, entries: &[SummaryEntry]) {
            self.summaries.push(entries.to_vec());
        }
        fn reveal_form(&mut self) {
            self.board.reveal_form();
        }
    }

    struct CountingTransport {
        calls: Cell<usize>,
        outcome: Result<(), SubmitError>,
    }

    impl FormTransport for CountingTransport {
        async fn post_form(&self, _body: String) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn controller() -> WizardController<FakeView> {
        WizardController::new(FormDefinition::diagnostic(), "diagnostico", FakeView::default())
    }

    fn step(n: u8) -> Step {
        Step::new(n).unwrap()
    }

    fn fill_step(c: &mut WizardController<FakeView>, n: u8) {
        match n {
            1 => {
                c.input("nombre", "Ana".into());
                c.input("organizacion", "Acme".into());
                c.input("email", "a@b.com".into());
            }
            2 => {
                c.select("sector", "Privado");
                c.select("tamano", "11 a 50");
            }
            3 => {
                c.input("desafio", "Ordenar el proceso de decisión".into());
                c.select("horizonte", "Inmediato");
            }
            _ => {}
        }
    }

    fn walk_to_terminal(c: &mut WizardController<FakeView>) {
        for n in 1..=3 {
            fill_step(c, n);
            assert!(matches!(c.dispatch(NavAction::Next, n), NavOutcome::Moved { .. }));
        }
    }

    #[test]
    fn empty_required_field_blocks_with_one_banner() {
        for n in 1..=3u8 {
            let mut c = controller();
            for prior in 1..n {
                fill_step(&mut c, prior);
                c.dispatch(NavAction::Next, prior);
            }
            assert_eq!(c.current_step(), step(n));

            c.dispatch(NavAction::Next, n);
            let outcome = c.dispatch(NavAction::Next, n);
            assert!(matches!(outcome, NavOutcome::Blocked { .. }), "step {n}");
            assert_eq!(c.current_step(), step(n));
            assert!(c.feedback().banner_for(step(n)).is_some());
            assert!(Step::all().filter(|s| *s != step(n)).all(|s| c.feedback().banner_for(s).is_none()));
            assert!(!c.view().board.status(step(n)).completed);
        }
    }

    #[test]
    fn valid_step_advances_by_one_and_marks_completed() {
        let mut c = controller();
        for n in 1..=3u8 {
            fill_step(&mut c, n);
            assert_eq!(
                c.dispatch(NavAction::Next, n),
                NavOutcome::Moved { from: step(n), to: step(n + 1) }
            );
            assert_eq!(c.current_step(), step(n + 1));
            assert_eq!(c.view().board.status(step(n)), StepStatus { active: false, completed: true });
            assert!(c.view().board.status(step(n + 1)).active);
        }
        assert!(c.view_mut().board.take_reveal());
    }

    #[test]
    fn retreat_ignores_field_contents() {
        let mut c = controller();
        walk_to_terminal(&mut c);
        c.input("nombre", "".into());
        c.select("sector", "");

        for n in (2..=4u8).rev() {
            assert_eq!(
                c.dispatch(NavAction::Prev, n),
                NavOutcome::Moved { from: step(n), to: step(n - 1) }
            );
            let status = c.view().board.status(step(n - 1));
            assert!(status.active && !status.completed);
        }
        assert_eq!(c.dispatch(NavAction::Prev, 1), NavOutcome::Ignored);
        assert_eq!(c.current_step(), Step::FIRST);
    }

    #[test]
    fn stale_and_unknown_steps_are_ignored() {
        let mut c = controller();
        assert_eq!(c.dispatch(NavAction::Next, 2), NavOutcome::Ignored);
        assert_eq!(c.dispatch(NavAction::Next, 9), NavOutcome::Ignored);
        assert_eq!(c.dispatch(NavAction::Prev, 0), NavOutcome::Ignored);
        assert_eq!(c.current_step(), Step::FIRST);
    }

    #[test]
    fn missing_markup_turns_navigation_into_noop() {
        let mut c = controller();
        c.view_mut().missing = Some(step(2));
        fill_step(&mut c, 1);
        assert_eq!(c.dispatch(NavAction::Next, 1), NavOutcome::Ignored);
        assert_eq!(c.current_step(), Step::FIRST);
        assert!(c.feedback().banner_for(Step::FIRST).is_none());
    }

    #[test]
    fn reaching_terminal_renders_summary_once() {
        let mut c = controller();
        c.input("cargo", "  ".into());
        c.check("areas", "Otro", true);
        c.input(OTHER_DETAIL_FIELD, "Sucesión".into());
        walk_to_terminal(&mut c);

        assert_eq!(c.view().summaries.len(), 1);
        let labels: Vec<_> = c.view().summaries[0].iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Nombre",
                "Organización",
                "Correo electrónico",
                "Sector",
                "Tamaño de la organización",
                "Áreas de interés",
                "Principal desafío",
                "Horizonte de tiempo",
            ]
        );

        c.dispatch(NavAction::Prev, 4);
        c.dispatch(NavAction::Next, 3);
        assert_eq!(c.view().summaries.len(), 2);
    }

    #[test]
    fn other_checkbox_controls_companion_requirement() {
        let mut c = controller();
        c.check("areas", "Otro", true);
        c.input(OTHER_DETAIL_FIELD, "algo".into());
        c.check("areas", "Otro", false);

        let field = c.form().field(OTHER_DETAIL_FIELD).unwrap();
        assert!(!field.visible && !field.required);

        c.check("areas", "Estrategia", true);
        assert!(!c.form().field(OTHER_DETAIL_FIELD).unwrap().visible);
    }

    #[test]
    fn input_clears_error_style_once() {
        let mut c = controller();
        c.dispatch(NavAction::Next, 1);
        assert!(c.feedback().is_field_flagged("nombre"));
        assert!(c.input("nombre", "A".into()));
        assert!(!c.input("nombre", "An".into()));
    }

    #[test]
    fn successful_submission_hides_the_form() {
        let mut c = controller();
        walk_to_terminal(&mut c);
        c.check(CONFIRMATION_FIELD, "on", true);

        let transport = CountingTransport { calls: Cell::new(0), outcome: Ok(()) };
        let values = c.begin_submission().unwrap();
        assert_eq!(c.submission(), SubmissionStatus::Sending);
        assert!(c.begin_submission().is_none());

        let result = block_on(submit(&values, &transport));
        c.finish_submission(&result);
        assert_eq!(result, Ok(()));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(c.submission(), SubmissionStatus::Sent);
        assert!(c.begin_submission().is_none());
    }

    #[test]
    fn failed_submission_keeps_answers_for_retry() {
        let mut c = controller();
        walk_to_terminal(&mut c);
        c.check(CONFIRMATION_FIELD, "on", true);

        let transport = CountingTransport {
            calls: Cell::new(0),
            outcome: Err(SubmitError::Network("offline".into())),
        };
        let values = c.begin_submission().unwrap();
        let result = block_on(submit(&values, &transport));
        c.finish_submission(&result);

        assert_eq!(c.submission(), SubmissionStatus::Idle);
        assert_eq!(c.values().get("nombre"), Some("Ana"));
        assert_eq!(c.begin_submission(), Some(values));
    }

    #[test]
    fn unconfirmed_submission_issues_no_request() {
        let mut c = controller();
        walk_to_terminal(&mut c);

        let transport = CountingTransport { calls: Cell::new(0), outcome: Ok(()) };
        let values = c.begin_submission().unwrap();
        let result = block_on(submit(&values, &transport));
        c.finish_submission(&result);

        assert_eq!(result, Err(SubmitError::NotConfirmed));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(c.submission(), SubmissionStatus::Idle);
    }

    #[test]
    fn submission_only_from_terminal_step() {
        let mut c = controller();
        assert!(c.begin_submission().is_none());
    }
}
