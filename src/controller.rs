//! Form controller
//!
//! Mediates between field state, the schema and the submission client. The
//! lifecycle lives in [`SubmissionState`]; the form is only mutable while that
//! state is editable, so a second request can never start while one is in
//! flight.

use crate::api::SubmissionClient;
use crate::schema::{self, Field};
use crate::state::{Accepted, OnboardingForm, SubmissionState};
use chrono::NaiveDate;

pub struct FormController<C> {
    client: C,
    form: OnboardingForm,
    state: SubmissionState,
}

impl<C: SubmissionClient> FormController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            form: OnboardingForm::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    /// Mutable access to the fields, only while the form is editable
    pub fn form_mut(&mut self) -> Option<&mut OnboardingForm> {
        self.state.is_editable().then_some(&mut self.form)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Validate the current fields and, if they pass, enter `Submitting`.
    ///
    /// Returns whether a request is now pending. On validation failure the
    /// first error of each field is shown inline and the state is unchanged.
    pub fn begin_submit(&mut self, today: NaiveDate) -> bool {
        if !self.state.is_editable() {
            return false;
        }
        self.form.submitted = true;

        match schema::validate(&self.form.to_raw(), today) {
            Ok(data) => {
                self.form.clear_errors();
                tracing::info!(
                    services = %data.services_display(),
                    "submitting onboarding form"
                );
                self.state = SubmissionState::Submitting(data);
                true
            }
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields(), "submission blocked by validation");
                self.form.apply_errors(&errors);
                false
            }
        }
    }

    /// Send the pending submission, if any, and record the outcome
    pub async fn send(&mut self) {
        let data = match &self.state {
            SubmissionState::Submitting(data) => data.clone(),
            _ => return,
        };

        self.state = match self.client.submit(&data).await {
            Ok(receipt) => {
                tracing::info!("onboarding submission accepted");
                SubmissionState::Success(Accepted { data, receipt })
            }
            Err(e) => {
                tracing::warn!("Submission error: {e}");
                SubmissionState::Failure(e.user_message())
            }
        };
        tracing::debug!(state = self.state.label(), "submission finished");
    }

    /// Validate, then send in one step
    #[cfg(test)]
    pub async fn submit(&mut self, today: NaiveDate) -> &SubmissionState {
        if self.begin_submit(today) {
            self.send().await;
        }
        &self.state
    }

    /// Leave the confirmation view with a cleared form.
    ///
    /// Only valid from `Success`; returns whether the reset happened.
    pub fn submit_another(&mut self) -> bool {
        if !matches!(self.state, SubmissionState::Success(_)) {
            return false;
        }
        self.form.reset();
        self.state = SubmissionState::Idle;
        true
    }

    /// Refresh the inline error of `field` once it has been touched or the
    /// form has been submitted
    pub fn revalidate(&mut self, field: Field, today: NaiveDate) {
        if !self.state.is_editable() {
            return;
        }
        if !self.form.submitted && !self.form.field(field).touched {
            return;
        }
        let result = schema::validate(&self.form.to_raw(), today);
        self.form.refresh_error(field, result.as_ref().err());
    }
}
