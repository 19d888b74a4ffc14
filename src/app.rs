//! Application state and key handling

use crate::api::SubmissionClient;
use crate::controller::FormController;
use crate::schema::Field;
use crate::state::{Form, SubmissionState};
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// No modifier other than Shift, so the key is text input
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// Main application struct
pub struct App<C> {
    /// Form state and submission lifecycle
    pub controller: FormController<C>,
    /// Where submissions are posted, shown in the status bar
    pub endpoint: String,
    /// Whether the app should quit
    quit: bool,
    /// Source of the current date for start date checks
    clock: fn() -> NaiveDate,
}

impl<C: SubmissionClient> App<C> {
    /// Create a new App instance
    pub fn new(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            controller: FormController::new(client),
            endpoint: endpoint.into(),
            quit: false,
            clock: local_today,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.controller.state() {
            // Busy: the submit control is disabled, nothing to do but wait
            SubmissionState::Submitting(_) => {}
            SubmissionState::Success(_) => self.handle_success_key(key),
            SubmissionState::Idle | SubmissionState::Failure(_) => self.handle_form_key(key),
        }
    }

    /// Send the submission accepted by the last key press, if any
    pub async fn send_pending(&mut self) {
        self.controller.send().await;
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                self.controller.submit_another();
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let today = self.today();
        let Some(form) = self.controller.form_mut() else {
            return;
        };
        let current = form.current_field();
        let on_submit_row = form.is_submit_row_active();

        // Field whose value changed and needs live re-validation
        let mut changed: Option<Field> = None;

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(today);
                return;
            }
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit(today);
                return;
            }
            KeyCode::Enter if on_submit_row => {
                self.submit(today);
                return;
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Left if current == Some(Field::Services) => form.choice_prev(),
            KeyCode::Right if current == Some(Field::Services) => form.choice_next(),
            KeyCode::Char(' ')
                if is_plain(key.modifiers)
                    && matches!(current, Some(Field::Services | Field::AcceptTerms)) =>
            {
                changed = form.toggle();
            }
            KeyCode::Char(c) if is_plain(key.modifiers) => changed = form.input_char(c),
            KeyCode::Backspace => changed = form.backspace(),
            _ => {}
        }

        let moved_from = current.filter(|f| form.current_field() != Some(*f));
        if let Some(field) = changed.or(moved_from) {
            self.controller.revalidate(field, today);
        }
    }

    fn submit(&mut self, today: NaiveDate) {
        if !self.controller.begin_submit(today) {
            tracing::debug!("submit blocked, showing field errors");
        }
    }
}
