//! Shared delegates for radio group tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use radiogroup::{RadioButton, RadioButtonDelegate, RadioGroup, RadioGroupDelegate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pressed(usize),
    Unpressed(usize),
}

/// Records every group event in order.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
    /// Pressed indexes observed from inside each callback
    snapshots: Mutex<Vec<Vec<usize>>>,
}

impl Recorder {
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    pub fn snapshots(&self) -> Vec<Vec<usize>> {
        self.snapshots.lock().unwrap().clone()
    }
}

impl RadioGroupDelegate for Recorder {
    fn did_press(&self, index: usize, group: &RadioGroup) {
        self.events.lock().unwrap().push(Event::Pressed(index));
        self.snapshots.lock().unwrap().push(group.pressed_indexes());
    }

    fn did_unpress(&self, index: usize, group: &RadioGroup) {
        self.events.lock().unwrap().push(Event::Unpressed(index));
        self.snapshots.lock().unwrap().push(group.pressed_indexes());
    }
}

/// Implements only `did_press`.
#[derive(Default)]
pub struct PressOnly {
    pub presses: Mutex<Vec<usize>>,
}

impl RadioGroupDelegate for PressOnly {
    fn did_press(&self, index: usize, _group: &RadioGroup) {
        self.presses.lock().unwrap().push(index);
    }
}

/// Veto delegate whose answer can be flipped, counting how often it was asked.
pub struct Gate {
    allow: AtomicBool,
    asked: AtomicUsize,
}

impl Gate {
    pub fn allowing() -> Self {
        Self {
            allow: AtomicBool::new(true),
            asked: AtomicUsize::new(0),
        }
    }

    pub fn denying() -> Self {
        Self {
            allow: AtomicBool::new(false),
            asked: AtomicUsize::new(0),
        }
    }

    pub fn set_allow(&self, allow: bool) {
        self.allow.store(allow, Ordering::SeqCst);
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl RadioButtonDelegate for Gate {
    fn should_change_state(&self, _button: &RadioButton) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.allow.load(Ordering::SeqCst)
    }
}

/// Delegate that relies on the default `should_change_state`.
pub struct Silent;

impl RadioButtonDelegate for Silent {}

pub fn buttons(n: usize) -> Vec<RadioButton> {
    (0..n).map(|_| RadioButton::new()).collect()
}

pub fn pressed_count(group: &RadioGroup) -> usize {
    group.pressed_indexes().len()
}
