use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply one keystroke to a host-owned text value. Ctrl+U clears, Ctrl+W
/// deletes the last word, Backspace deletes one character.
pub fn apply_text_input(target: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
            true
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
            true
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                false
            } else {
                target.push(ch);
                true
            }
        }
        KeyCode::Backspace => {
            target.pop();
            true
        }
        _ => false,
    }
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::apply_text_input;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn chars_append_and_backspace_deletes() {
        let mut value = String::new();
        assert!(apply_text_input(&mut value, press(KeyCode::Char('+'))));
        assert!(apply_text_input(&mut value, press(KeyCode::Char('1'))));
        assert_eq!(value, "+1");
        assert!(apply_text_input(&mut value, press(KeyCode::Backspace)));
        assert_eq!(value, "+");
    }

    #[test]
    fn ctrl_u_clears_the_value() {
        let mut value = "+1415".to_string();
        assert!(apply_text_input(&mut value, ctrl('u')));
        assert_eq!(value, "");
    }

    #[test]
    fn ctrl_w_deletes_the_last_word() {
        let mut value = "call me maybe".to_string();
        assert!(apply_text_input(&mut value, ctrl('w')));
        assert_eq!(value, "call me ");
    }

    #[test]
    fn other_keys_leave_the_value_alone() {
        let mut value = "+1".to_string();
        assert!(!apply_text_input(&mut value, press(KeyCode::Tab)));
        assert!(!apply_text_input(&mut value, ctrl('x')));
        assert_eq!(value, "+1");
    }
}
