use std::fmt;

pub const TOTAL_STEPS: u8 = 4;

/// One page of the wizard. Always within `1..=TOTAL_STEPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(1);
    pub const TERMINAL: Step = Step(TOTAL_STEPS);

    pub fn new(number: u8) -> Option<Step> {
        (1..=TOTAL_STEPS).contains(&number).then_some(Step(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn next(self) -> Option<Step> {
        Step::new(self.0 + 1)
    }

    pub fn prev(self) -> Option<Step> {
        Step::new(self.0.checked_sub(1)?)
    }

    pub fn is_terminal(self) -> bool {
        self == Step::TERMINAL
    }

    pub fn all() -> impl Iterator<Item = Step> {
        (1..=TOTAL_STEPS).map(Step)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the visitor currently is. Created at page load and dropped with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    current: Step,
}

impl Default for WizardState {
    fn default() -> Self {
        Self { current: Step::FIRST }
    }
}

impl WizardState {
    pub fn current(&self) -> Step {
        self.current
    }

    pub fn is_at(&self, step: Step) -> bool {
        self.current == step
    }

    /// Moves one step forward. Returns the new step, or `None` at the terminal step.
    pub fn forward(&mut self) -> Option<Step> {
        let next = self.current.next()?;
        self.current = next;
        Some(next)
    }

    /// Moves one step back. Returns the new step, or `None` at the first step.
    pub fn backward(&mut self) -> Option<Step> {
        let prev = self.current.prev()?;
        self.current = prev;
        Some(prev)
    }
}
