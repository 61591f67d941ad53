//! A radio group driven by line commands.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::debug;
use radiogroup::{
    RadioButton, RadioButtonDelegate, RadioButtonId, RadioGroup, RadioGroupDelegate,
    SelectionMode,
};

use crate::command::{Command, CommandError, HELP};

/// Collects group events until the session drains them.
#[derive(Default)]
struct EventLog {
    lines: Mutex<Vec<String>>,
}

impl EventLog {
    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    fn drain(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut lines| std::mem::take(&mut *lines))
            .unwrap_or_default()
    }
}

impl RadioGroupDelegate for EventLog {
    fn did_press(&self, index: usize, _group: &RadioGroup) {
        self.push(format!("pressed {index}"));
    }

    fn did_unpress(&self, index: usize, _group: &RadioGroup) {
        self.push(format!("unpressed {index}"));
    }
}

/// Denies every state change request.
struct Locked;

impl RadioButtonDelegate for Locked {
    fn should_change_state(&self, button: &RadioButton) -> bool {
        debug!("{}: locked", button.id());
        false
    }
}

/// Owns a group and the delegates attached to it and its members.
pub struct Session {
    group: RadioGroup,
    events: Arc<EventLog>,
    locks: HashMap<RadioButtonId, Arc<Locked>>,
}

impl Session {
    pub fn new(mode: SelectionMode) -> Self {
        let group = RadioGroup::new(mode);
        let events = Arc::new(EventLog::default());
        group.set_delegate(&events);
        Self {
            group,
            events,
            locks: HashMap::new(),
        }
    }

    pub fn group(&self) -> &RadioGroup {
        &self.group
    }

    /// Run a command, returning the lines to print.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, CommandError> {
        let mut output = Vec::new();
        match command {
            Command::Add(count) => {
                for _ in 0..count {
                    self.group.add_member(&RadioButton::new());
                }
                output.push(format!("{} members", self.group.len()));
            }
            Command::Remove(index) => {
                let button = self.member(index)?;
                self.group.remove_member(&button);
                self.locks.remove(&button.id());
                output.push(format!("{} members", self.group.len()));
            }
            Command::Press(index) => self.member(index)?.request_state_change(),
            Command::Set(index, pressed) => self.member(index)?.set_pressed(pressed),
            Command::Veto(index, on) => {
                let button = self.member(index)?;
                if on {
                    let lock = Arc::new(Locked);
                    button.set_delegate(&lock);
                    self.locks.insert(button.id(), lock);
                } else {
                    button.clear_delegate();
                    self.locks.remove(&button.id());
                }
            }
            Command::Defaults(indexes) => {
                let defaults = indexes
                    .into_iter()
                    .map(|index| self.member(index))
                    .collect::<Result<Vec<_>, _>>()?;
                self.group.set_default_pressed_members(&defaults);
            }
            Command::Mode(mode) => self.group.set_selection_mode(mode),
            Command::Keep(keep) => self.group.set_keep_one_pressed(keep),
            Command::Show => output.push(self.describe()),
            Command::Help => output.push(HELP.to_string()),
            Command::Quit => {}
        }

        let mut lines = self.events.drain();
        lines.extend(output);
        Ok(lines)
    }

    fn member(&self, index: usize) -> Result<RadioButton, CommandError> {
        self.group.member_at(index).ok_or(CommandError::NoSuchMember {
            index,
            len: self.group.len(),
        })
    }

    fn describe(&self) -> String {
        let config = self.group.config();
        let states: String = self
            .group
            .members()
            .iter()
            .map(|member| {
                let mark = if member.is_pressed() { '◉' } else { '◯' };
                if self.locks.contains_key(&member.id()) {
                    format!("{mark}!")
                } else {
                    mark.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "mode={} keep={} [{}] pressed={:?}",
            config.selection_mode,
            if config.keep_one_pressed { "on" } else { "off" },
            states,
            self.group.pressed_indexes()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> Vec<String> {
        let command = Command::parse(line).unwrap().unwrap();
        session.execute(command).unwrap()
    }

    #[test]
    fn test_single_mode_session() {
        let mut session = Session::new(SelectionMode::Single);
        assert_eq!(run(&mut session, "add 3"), vec!["3 members"]);
        assert_eq!(run(&mut session, "press 0"), vec!["pressed 0"]);
        assert_eq!(run(&mut session, "press 1"), vec!["unpressed 0", "pressed 1"]);
        assert_eq!(run(&mut session, "press 1"), vec!["unpressed 1"]);
    }

    #[test]
    fn test_keep_one_session() {
        let mut session = Session::new(SelectionMode::Single);
        run(&mut session, "add 3");
        run(&mut session, "keep on");
        run(&mut session, "defaults 1");
        assert!(run(&mut session, "press 1").is_empty());
        assert_eq!(session.group().pressed_indexes(), vec![1]);
    }

    #[test]
    fn test_veto_session() {
        let mut session = Session::new(SelectionMode::Multiple);
        run(&mut session, "add 2");
        run(&mut session, "veto 0 on");
        assert!(run(&mut session, "press 0").is_empty());
        assert_eq!(run(&mut session, "set 0 on"), vec!["pressed 0"]);

        run(&mut session, "veto 0 off");
        assert_eq!(run(&mut session, "press 0"), vec!["unpressed 0"]);
    }

    #[test]
    fn test_remove_reindexes() {
        let mut session = Session::new(SelectionMode::Single);
        run(&mut session, "add 3");
        run(&mut session, "remove 1");
        assert_eq!(run(&mut session, "press 1"), vec!["pressed 1"]);
    }

    #[test]
    fn test_out_of_range_member() {
        let mut session = Session::new(SelectionMode::Single);
        run(&mut session, "add");
        let err = session.execute(Command::Press(4)).unwrap_err();
        assert_eq!(err, CommandError::NoSuchMember { index: 4, len: 1 });
    }

    #[test]
    fn test_show() {
        let mut session = Session::new(SelectionMode::Multiple);
        run(&mut session, "add 2");
        run(&mut session, "press 1");
        assert_eq!(
            run(&mut session, "show"),
            vec!["mode=multiple keep=off [◯ ◉] pressed=[1]"]
        );
    }
}
