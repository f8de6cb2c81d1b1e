use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dialfield_lookup::LookupService;

use crate::field::PhoneField;
use crate::util::apply_text_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Phone,
    Note,
}

/// Demo host form: a phone/SID field next to an ordinary free-text field.
/// The host owns both raw values; field state lives in `PhoneField`.
#[derive(Debug)]
pub struct App {
    pub field: PhoneField,
    pub phone_value: String,
    pub note_value: String,
    pub focus: Focus,
    pub helper_override: Option<String>,
    pub should_quit: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new(mut field: PhoneField, now: Instant) -> Self {
        // Mount counts as the first value change: the debounce window is
        // armed with the (empty) initial value.
        let mut phone_value = String::new();
        field.apply_change(&mut phone_value, now);
        Self {
            field,
            phone_value,
            note_value: String::new(),
            focus: Focus::Phone,
            helper_override: None,
            should_quit: false,
            status: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let disabled = !self.field.disabled();
                self.field.set_disabled(disabled);
                self.set_status(if disabled {
                    "Field disabled"
                } else {
                    "Field enabled"
                });
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Phone => Focus::Note,
                    Focus::Note => Focus::Phone,
                };
            }
            _ => match self.focus {
                Focus::Phone => {
                    if self.field.disabled() {
                        return;
                    }
                    if apply_text_input(&mut self.phone_value, key) {
                        self.field.apply_change(&mut self.phone_value, now);
                    }
                }
                Focus::Note => {
                    apply_text_input(&mut self.note_value, key);
                }
            },
        }
    }

    pub fn tick(&mut self, now: Instant, lookup: &mut dyn LookupService) {
        self.field.tick(now, lookup);
    }
}
