//! Application state management

use crate::ui::progress::SubmitProgress;
use rapidticket_client::{DeskEvent, TicketForm};
use rapidticket_core::models::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    EmployeeKey,
    Issue,
    ReportingTo,
    Submit,
}

impl FormField {
    pub const ALL: [Self; 4] = [
        Self::EmployeeKey,
        Self::Issue,
        Self::ReportingTo,
        Self::Submit,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    ConfirmQuit,
}

pub struct App {
    pub form: TicketForm,
    pub config: Config,
    pub focused_field: FormField,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub should_quit: bool,
    pub progress: SubmitProgress,
}

impl App {
    pub fn new(form: TicketForm, config: Config) -> Self {
        Self {
            form,
            config,
            focused_field: FormField::EmployeeKey,
            input_mode: InputMode::Normal,
            show_help: false,
            should_quit: false,
            progress: SubmitProgress::new(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused_field = self.focused_field.previous();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn handle_desk_event(&mut self, event: DeskEvent) {
        let was_submitting = self.form.is_submitting();
        self.form.handle_event(event);

        if was_submitting && !self.form.is_submitting() {
            self.progress.finish();
            if self.form.employee().is_none() {
                self.focused_field = FormField::EmployeeKey;
            }
        }
    }

    pub fn submit(&mut self) {
        if self.form.submit() {
            self.progress.start();
        }
    }

    /// Advance animations and expire old status messages.
    pub fn tick(&mut self) {
        self.progress.tick();
        let ttl = chrono::Duration::seconds(self.config.ui.status_ttl_secs as i64);
        self.form.expire_status(ttl);
    }

    pub fn request_quit(&mut self) {
        if self.form.has_unsaved_input() || self.form.is_submitting() {
            self.input_mode = InputMode::ConfirmQuit;
        } else {
            self.should_quit = true;
        }
    }

    pub fn handle_char(&mut self, c: char) {
        match self.focused_field {
            FormField::EmployeeKey => self.form.push_key_char(c),
            FormField::Issue => self.form.push_issue_char(c),
            FormField::ReportingTo => match c {
                ' ' | 'l' => self.form.cycle_reporting_to(true),
                'h' => self.form.cycle_reporting_to(false),
                _ => {}
            },
            FormField::Submit => {
                if c == ' ' {
                    self.submit();
                }
            }
        }
    }

    pub fn handle_backspace(&mut self) {
        match self.focused_field {
            FormField::EmployeeKey => self.form.pop_key_char(),
            FormField::Issue => self.form.pop_issue_char(),
            FormField::ReportingTo => self.form.clear_reporting_to(),
            FormField::Submit => {}
        }
    }

    pub fn handle_enter(&mut self) {
        match self.focused_field {
            FormField::EmployeeKey | FormField::ReportingTo => self.focus_next(),
            FormField::Issue => self.form.push_issue_char('\n'),
            FormField::Submit => self.submit(),
        }
    }
}
