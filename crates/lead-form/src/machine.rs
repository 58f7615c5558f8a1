//! # Form Reducer and Session Wrapper
//!
//! [`FormState`] + [`FormAction`] + pure [`reduce`] implement the transition
//! table; [`MultiStepForm`] exposes the operation surface used by the UI and
//! owns the state for the duration of a form session.

use chrono::{Local, NaiveDate};

use lead_core::{
    validate_form, validate_step, FieldErrors, FieldKey, FieldValue, FormDraft, Step,
};

use crate::endpoint::SubmitEndpoint;

/// Index of the last step (review).
const LAST_STEP: usize = Step::ALL.len() - 1;

/// The state of one lead form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Index into [`Step::ALL`], always in `0..=3`.
    pub current_step: usize,
    /// Accumulated field values, mutated field-by-field as the user types.
    pub draft: FormDraft,
    /// Per-field messages from the last validation pass.
    pub errors: FieldErrors,
    /// A submission network call is in flight.
    pub is_submitting: bool,
    /// The form was accepted by the submission endpoint.
    pub is_completed: bool,
}

/// Commands processed by [`reduce`]. Every state mutation is one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Write a field value; clears that field's error.
    SetField { field: FieldKey, value: FieldValue },
    /// Replace the error map wholesale.
    SetErrors(FieldErrors),
    /// Drop all errors.
    ClearErrors,
    /// Advance one step, clamped to the review step.
    NextStep,
    /// Retreat one step, clamped to the first step. Never validates.
    PrevStep,
    /// Direct jump, clamped into range. Unguarded by validation.
    GoToStep(usize),
    /// Toggle the in-flight flag.
    SetSubmitting(bool),
    /// Toggle the completed flag.
    SetCompleted(bool),
    /// Return to the initial state.
    Reset,
}

/// Pure transition function: current state + action → next state.
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    let mut next = state.clone();
    match action {
        FormAction::SetField { field, value } => {
            next.draft.set(field, value);
            next.errors.remove(&field);
        }
        FormAction::SetErrors(errors) => next.errors = errors,
        FormAction::ClearErrors => next.errors.clear(),
        FormAction::NextStep => {
            next.current_step = (state.current_step + 1).min(LAST_STEP);
        }
        FormAction::PrevStep => {
            next.current_step = state.current_step.saturating_sub(1);
        }
        FormAction::GoToStep(step) => {
            next.current_step = step.min(LAST_STEP);
        }
        FormAction::SetSubmitting(submitting) => next.is_submitting = submitting,
        FormAction::SetCompleted(completed) => next.is_completed = completed,
        FormAction::Reset => next = FormState::default(),
    }
    next
}

/// One form session. Exclusively owns its [`FormState`]; all mutation goes
/// through [`reduce`].
#[derive(Debug, Clone, Default)]
pub struct MultiStepForm {
    state: FormState,
}

impl MultiStepForm {
    /// Fresh session at the company step with empty data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The step the user is currently on.
    pub fn current_step(&self) -> Step {
        // current_step is kept in range by the reducer's clamping.
        Step::ALL[self.state.current_step.min(LAST_STEP)]
    }

    fn apply(&mut self, action: FormAction) {
        self.state = reduce(&self.state, action);
    }

    /// Write a field value, clearing any stale error on that field.
    /// No validation side effect.
    pub fn set_field(&mut self, field: FieldKey, value: FieldValue) {
        self.apply(FormAction::SetField { field, value });
    }

    /// Validate the current step and populate (or clear) the error map.
    pub fn validate_current_step(&mut self) -> bool {
        self.validate_current_step_on(local_today())
    }

    /// [`Self::validate_current_step`] with an explicit `today` for the
    /// start-date rule.
    pub fn validate_current_step_on(&mut self, today: NaiveDate) -> bool {
        match validate_step(self.current_step(), &self.state.draft, today) {
            Ok(()) => {
                self.apply(FormAction::ClearErrors);
                true
            }
            Err(errors) => {
                self.apply(FormAction::SetErrors(errors));
                false
            }
        }
    }

    /// Non-mutating "can the advance control be enabled" check.
    pub fn can_proceed(&self) -> bool {
        self.can_proceed_on(local_today())
    }

    /// [`Self::can_proceed`] with an explicit `today`.
    pub fn can_proceed_on(&self, today: NaiveDate) -> bool {
        validate_step(self.current_step(), &self.state.draft, today).is_ok()
    }

    /// Validate the current step; on success advance one step (the review
    /// step never advances further). Returns whether the form advanced.
    pub fn next_step(&mut self) -> bool {
        self.next_step_on(local_today())
    }

    /// [`Self::next_step`] with an explicit `today`.
    pub fn next_step_on(&mut self, today: NaiveDate) -> bool {
        if !self.validate_current_step_on(today) {
            return false;
        }
        if self.state.current_step < LAST_STEP {
            self.apply(FormAction::NextStep);
            return true;
        }
        false
    }

    /// Retreat one step. Users may always go back; nothing is validated.
    pub fn prev_step(&mut self) {
        self.apply(FormAction::PrevStep);
    }

    /// Jump directly to a step (programmatic navigation, e.g. error
    /// recovery). Unguarded.
    pub fn go_to_step(&mut self, step: usize) {
        self.apply(FormAction::GoToStep(step));
    }

    /// Validate the full form and, if it passes, submit it.
    ///
    /// On validation failure the error map is populated and no network call
    /// is made. Endpoint failure is swallowed into the `false` return — the
    /// error map is left untouched (boolean-only contract).
    pub async fn submit(&mut self, endpoint: &dyn SubmitEndpoint) -> bool {
        self.submit_on(local_today(), endpoint).await
    }

    /// [`Self::submit`] with an explicit `today`.
    pub async fn submit_on(&mut self, today: NaiveDate, endpoint: &dyn SubmitEndpoint) -> bool {
        let lead = match validate_form(&self.state.draft, today) {
            Ok(lead) => {
                self.apply(FormAction::ClearErrors);
                lead
            }
            Err(errors) => {
                self.apply(FormAction::SetErrors(errors));
                return false;
            }
        };

        self.apply(FormAction::SetSubmitting(true));
        let result = endpoint.submit_lead(&lead).await;
        self.apply(FormAction::SetSubmitting(false));

        match result {
            Ok(()) => {
                self.apply(FormAction::SetCompleted(true));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "lead submission failed");
                false
            }
        }
    }

    /// Restart the session: step 0, empty data, empty errors, flags false.
    pub fn reset(&mut self) {
        self.apply(FormAction::Reset);
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
