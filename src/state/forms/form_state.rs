//! Onboarding form state

use super::field::FormField;
use crate::schema::{Field, ValidationErrors};
use serde_json::{json, Value};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the submit button row, after the seven fields
pub const SUBMIT_ROW: usize = Field::ALL.len();

/// Field state for the client onboarding form
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Set after the first submit attempt; edits re-validate live from then on
    pub submitted: bool,
}

impl OnboardingForm {
    pub fn new() -> Self {
        let fields = vec![
            FormField::text(Field::FullName, "Full Name"),
            FormField::text(Field::Email, "Email"),
            FormField::text(Field::CompanyName, "Company Name"),
            FormField::choices(Field::Services, "Services Interested In"),
            FormField::number(Field::BudgetUsd, "Budget (USD)")
                .optional()
                .with_placeholder("Optional"),
            FormField::date(Field::ProjectStartDate, "Project Start Date")
                .with_placeholder("YYYY-MM-DD"),
            FormField::toggle(Field::AcceptTerms, "Accept Terms and Conditions"),
        ];
        Self {
            fields,
            active_field_index: 0,
            submitted: false,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn index_of(field: Field) -> usize {
        Field::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default()
    }

    pub fn field(&self, field: Field) -> &FormField {
        &self.fields[Self::index_of(field)]
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FormField {
        &mut self.fields[Self::index_of(field)]
    }

    /// The focused field, or `None` when the submit button is focused
    pub fn current_field(&self) -> Option<Field> {
        self.fields.get(self.active_field_index).map(|f| f.field)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    fn current_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    /// Type a character into the focused field.
    /// Returns the field if its value changed.
    pub fn input_char(&mut self, c: char) -> Option<Field> {
        let field = self.current_mut()?;
        field.push_char(c).then_some(field.field)
    }

    pub fn backspace(&mut self) -> Option<Field> {
        let field = self.current_mut()?;
        field.pop_char().then_some(field.field)
    }

    /// Toggle the focused checkbox or highlighted service
    pub fn toggle(&mut self) -> Option<Field> {
        let field = self.current_mut()?;
        field.toggle_value().then_some(field.field)
    }

    /// Move the highlight within the services list
    pub fn choice_next(&mut self) {
        if let Some(choices) = self.current_mut().and_then(FormField::as_choices_mut) {
            choices.next();
        }
    }

    pub fn choice_prev(&mut self) {
        if let Some(choices) = self.current_mut().and_then(FormField::as_choices_mut) {
            choices.prev();
        }
    }

    /// Build the untyped record handed to the schema
    pub fn to_raw(&self) -> Value {
        let services: Vec<&str> = self
            .field(Field::Services)
            .as_choices()
            .map(|c| c.selected.iter().map(|s| s.label()).collect())
            .unwrap_or_default();

        json!({
            "fullName": self.field(Field::FullName).as_text(),
            "email": self.field(Field::Email).as_text(),
            "companyName": self.field(Field::CompanyName).as_text(),
            "services": services,
            "budgetUsd": budget_value(self.field(Field::BudgetUsd).as_text()),
            "projectStartDate": self.field(Field::ProjectStartDate).as_text(),
            "acceptTerms": self.field(Field::AcceptTerms).as_toggle(),
        })
    }

    /// Show the first error of every field, clearing fields that now pass
    pub fn apply_errors(&mut self, errors: &ValidationErrors) {
        for field in &mut self.fields {
            field.error = errors.first_for(field.field).map(str::to_string);
        }
    }

    /// Refresh the inline error of a single field
    pub fn refresh_error(&mut self, field: Field, errors: Option<&ValidationErrors>) {
        let message = errors
            .and_then(|e| e.first_for(field))
            .map(str::to_string);
        self.field_mut(field).error = message;
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    #[cfg(test)]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Return every field to its empty/default state
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
        self.submitted = false;
    }
}

/// Map the budget text box to JSON: empty stays `""`, numbers become numbers
fn budget_value(text: &str) -> Value {
    let text = text.trim();
    if text.is_empty() {
        return json!("");
    }
    if let Ok(n) = text.parse::<i64>() {
        return json!(n);
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => json!(n),
        _ => json!(text),
    }
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for OnboardingForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // seven fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        // Leaving a field marks it touched
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.touched = true;
        }
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
