//! Form field value objects

use crate::schema::{Field, Service};

/// Checkbox list over the available services
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceChoices {
    /// Selected services in the order they were ticked
    pub selected: Vec<Service>,
    /// Index into `Service::ALL` of the highlighted option
    pub cursor: usize,
}

impl ServiceChoices {
    pub fn is_selected(&self, service: Service) -> bool {
        self.selected.contains(&service)
    }

    /// Tick or untick the highlighted option
    pub fn toggle_current(&mut self) {
        let service = Service::ALL[self.cursor];
        if let Some(pos) = self.selected.iter().position(|s| *s == service) {
            self.selected.remove(pos);
        } else {
            self.selected.push(service);
        }
    }

    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % Service::ALL.len();
    }

    pub fn prev(&mut self) {
        if self.cursor == 0 {
            self.cursor = Service::ALL.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choices(ServiceChoices),
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Characters a text field accepts from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFilter {
    Any,
    Digits,
    /// Digits and `-`, for `YYYY-MM-DD`
    Date,
}

impl InputFilter {
    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Any => !c.is_control(),
            Self::Digits => c.is_ascii_digit(),
            Self::Date => c.is_ascii_digit() || c == '-',
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    pub label: String,
    pub value: FieldValue,
    pub required: bool,
    pub placeholder: Option<String>,
    /// Inline validation message currently shown under the field
    pub error: Option<String>,
    /// Set once focus has left the field
    pub touched: bool,
    filter: InputFilter,
}

impl FormField {
    fn new(field: Field, label: &str, value: FieldValue, filter: InputFilter) -> Self {
        Self {
            field,
            label: label.to_string(),
            value,
            required: true,
            placeholder: None,
            error: None,
            touched: false,
            filter,
        }
    }

    /// Create a new text field
    pub fn text(field: Field, label: &str) -> Self {
        Self::new(field, label, FieldValue::Text(String::new()), InputFilter::Any)
    }

    /// Create a text field restricted to digits
    pub fn number(field: Field, label: &str) -> Self {
        Self::new(
            field,
            label,
            FieldValue::Text(String::new()),
            InputFilter::Digits,
        )
    }

    /// Create a `YYYY-MM-DD` date field
    pub fn date(field: Field, label: &str) -> Self {
        Self::new(field, label, FieldValue::Text(String::new()), InputFilter::Date)
    }

    /// Create the services checkbox list
    pub fn choices(field: Field, label: &str) -> Self {
        Self::new(
            field,
            label,
            FieldValue::Choices(ServiceChoices::default()),
            InputFilter::Any,
        )
    }

    /// Create a single checkbox
    pub fn toggle(field: Field, label: &str) -> Self {
        Self::new(field, label, FieldValue::Toggle(false), InputFilter::Any)
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the checkbox state (false for non-toggle fields)
    pub fn as_toggle(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(true))
    }

    pub fn as_choices(&self) -> Option<&ServiceChoices> {
        match &self.value {
            FieldValue::Choices(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_choices_mut(&mut self) -> Option<&mut ServiceChoices> {
        match &mut self.value {
            FieldValue::Choices(c) => Some(c),
            _ => None,
        }
    }

    /// Set the text value
    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    /// Push a character to the field value.
    /// Returns whether the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match &mut self.value {
            FieldValue::Text(s) if self.filter.accepts(c) => {
                s.push(c);
                true
            }
            _ => false,
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => s.pop().is_some(),
            _ => false,
        }
    }

    /// Flip a checkbox, or the highlighted option of a checkbox list
    pub fn toggle_value(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Toggle(b) => {
                *b = !*b;
                true
            }
            FieldValue::Choices(c) => {
                c.toggle_current();
                true
            }
            FieldValue::Text(_) => false,
        }
    }

    /// Clear the field value and its validation state
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choices(c) => *c = ServiceChoices::default(),
            FieldValue::Toggle(b) => *b = false,
        }
        self.error = None;
        self.touched = false;
    }

    /// Get the display value for rendering
    #[cfg(test)]
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choices(c) => c
                .selected
                .iter()
                .map(Service::label)
                .collect::<Vec<_>>()
                .join(", "),
            FieldValue::Toggle(true) => "[x]".to_string(),
            FieldValue::Toggle(false) => "[ ]".to_string(),
        }
    }
}
