//! Radio group state.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use indexmap::IndexMap;
use log::{debug, warn};

use super::RadioGroupDelegate;
use crate::button::{RadioButton, RadioButtonId};
use crate::config::GroupConfig;
use crate::selection::SelectionMode;

/// Unique identifier for a RadioGroup instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadioGroupId(usize);

impl RadioGroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for RadioGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__radio_group_{}", self.0)
    }
}

/// Internal state for a RadioGroup
#[derive(Default)]
pub(crate) struct RadioGroupInner {
    /// Members keyed by button id; map position is the notification index
    members: IndexMap<RadioButtonId, RadioButton>,
    /// Selection policy
    config: GroupConfig,
    /// Optional event delegate
    delegate: Option<Weak<dyn RadioGroupDelegate>>,
}

/// Non-owning link from a button back to a group tracking it.
#[derive(Clone)]
pub(crate) struct GroupLink {
    id: RadioGroupId,
    inner: Weak<RwLock<RadioGroupInner>>,
}

impl GroupLink {
    pub(crate) fn id(&self) -> RadioGroupId {
        self.id
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub(crate) fn upgrade(&self) -> Option<RadioGroup> {
        self.inner.upgrade().map(|inner| RadioGroup { id: self.id, inner })
    }
}

/// A group of radio buttons with a shared selection policy.
///
/// The group keeps its members in insertion order; a member's position is the
/// index used in [`RadioGroupDelegate`] events and in
/// [`pressed_indexes`](Self::pressed_indexes). Removing a member shifts the
/// members after it down by one.
///
/// Whenever a member flips, the group applies its policy:
///
/// - in [`SelectionMode::Single`], pressing a member unpresses every other
///   pressed member (in ascending index order) before the press is reported;
/// - with keep-one-pressed enabled, unpressing the last pressed member is
///   undone silently.
///
/// Misuse such as adding a duplicate or removing a non-member is ignored.
///
/// # Example
///
/// ```
/// use radiogroup::{RadioButton, RadioGroup, SelectionMode};
///
/// let group = RadioGroup::new(SelectionMode::Single);
/// let (a, b) = (RadioButton::new(), RadioButton::new());
/// group.add_members([&a, &b]);
///
/// a.request_state_change();
/// b.request_state_change();
/// assert_eq!(group.pressed_indexes(), vec![1]);
/// assert!(!a.is_pressed());
/// ```
pub struct RadioGroup {
    /// Unique identifier for this group instance
    id: RadioGroupId,
    /// Internal state
    inner: Arc<RwLock<RadioGroupInner>>,
}

impl RadioGroup {
    /// Create an empty group with the given selection mode
    pub fn new(selection_mode: SelectionMode) -> Self {
        Self::with_config(GroupConfig::new(selection_mode))
    }

    /// Create an empty group from a full config
    pub fn with_config(config: GroupConfig) -> Self {
        Self {
            id: RadioGroupId::new(),
            inner: Arc::new(RwLock::new(RadioGroupInner {
                config,
                ..Default::default()
            })),
        }
    }

    /// Get the unique ID for this group
    pub fn id(&self) -> RadioGroupId {
        self.id
    }

    fn link(&self) -> GroupLink {
        GroupLink {
            id: self.id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Get the current selection policy
    pub fn config(&self) -> GroupConfig {
        self.inner
            .read()
            .map(|guard| guard.config)
            .unwrap_or_default()
    }

    /// Get the selection mode
    pub fn selection_mode(&self) -> SelectionMode {
        self.config().selection_mode
    }

    /// Change the selection mode. Already pressed members are left alone.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        if let Ok(mut guard) = self.inner.write() {
            guard.config.selection_mode = mode;
        }
    }

    /// Check if the last pressed member is protected from being unpressed
    pub fn keep_one_pressed(&self) -> bool {
        self.config().keep_one_pressed
    }

    /// Enable or disable the keep-one-pressed rule
    pub fn set_keep_one_pressed(&self, keep: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.config.keep_one_pressed = keep;
        }
    }

    /// Attach an event delegate.
    ///
    /// Only a weak reference is kept; the caller owns the delegate.
    pub fn set_delegate<D: RadioGroupDelegate + 'static>(&self, delegate: &Arc<D>) {
        let weak: Weak<dyn RadioGroupDelegate> = Arc::downgrade(delegate) as Weak<D>;
        if let Ok(mut guard) = self.inner.write() {
            guard.delegate = Some(weak);
        }
    }

    /// Detach the event delegate
    pub fn clear_delegate(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.delegate = None;
        }
    }

    pub(crate) fn delegate(&self) -> Option<Arc<dyn RadioGroupDelegate>> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.delegate.as_ref().and_then(Weak::upgrade))
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Add a button at the next index. Adding a member twice does nothing.
    pub fn add_member(&self, button: &RadioButton) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.members.contains_key(&button.id())
        {
            guard.members.insert(button.id(), button.clone());
            button.attach_group(self.link());
            debug!(
                "{}: added {} at index {}",
                self.id,
                button.id(),
                guard.members.len() - 1
            );
        }
    }

    /// Add several buttons in iteration order
    pub fn add_members<'a>(&self, buttons: impl IntoIterator<Item = &'a RadioButton>) {
        for button in buttons {
            self.add_member(button);
        }
    }

    /// Remove a button. Its pressed state is left as is.
    pub fn remove_member(&self, button: &RadioButton) {
        if let Ok(mut guard) = self.inner.write()
            && let Some((index, _, _)) = guard.members.shift_remove_full(&button.id())
        {
            button.detach_group(self.id);
            debug!("{}: removed {} from index {}", self.id, button.id(), index);
        }
    }

    /// Remove several buttons
    pub fn remove_members<'a>(&self, buttons: impl IntoIterator<Item = &'a RadioButton>) {
        for button in buttons {
            self.remove_member(button);
        }
    }

    /// Seed the group's state.
    ///
    /// Exactly the given members end up pressed and every other member
    /// unpressed. Neither veto delegates nor the group policy are consulted,
    /// so the caller is responsible for passing a set that satisfies the
    /// selection mode and keep-one-pressed rule. Buttons that aren't members
    /// are ignored.
    ///
    /// Each flip is reported to the delegate: unpresses first, then presses,
    /// both in ascending index order. Other groups tracking a flipped member
    /// are told before this group's delegate, and a flip they undo is not
    /// reported here.
    pub fn set_default_pressed_members<'a>(
        &self,
        buttons: impl IntoIterator<Item = &'a RadioButton>,
    ) {
        let defaults: HashSet<RadioButtonId> = buttons.into_iter().map(RadioButton::id).collect();
        let members = self.members();

        let pressed_count = members
            .iter()
            .filter(|member| defaults.contains(&member.id()))
            .count();
        let config = self.config();
        if config.selection_mode.is_exclusive() && pressed_count > 1 {
            warn!(
                "{}: seeding {} pressed members into a single-selection group",
                self.id, pressed_count
            );
        }
        if config.keep_one_pressed && pressed_count == 0 && !members.is_empty() {
            warn!("{}: seeding no pressed members while keep-one-pressed is set", self.id);
        }

        let mut unpressed = Vec::new();
        let mut pressed = Vec::new();
        for member in members {
            let target = defaults.contains(&member.id());
            if member.store_pressed(target) {
                if target {
                    pressed.push(member);
                } else {
                    unpressed.push(member);
                }
            }
        }

        // Other groups see each flip first; one they undo is not notified here.
        for member in unpressed {
            member.report_transition(false, Some(self.id));
            if !member.is_pressed() {
                self.notify_unpressed(&member);
            }
        }
        for member in pressed {
            member.report_transition(true, Some(self.id));
            if member.is_pressed() {
                self.notify_pressed(&member);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the members in index order
    pub fn members(&self) -> Vec<RadioButton> {
        self.inner
            .read()
            .map(|guard| guard.members.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Get the indexes of pressed members, ascending
    pub fn pressed_indexes(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .members
                    .values()
                    .enumerate()
                    .filter(|(_, member)| member.is_pressed())
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the pressed members in index order
    pub fn pressed_members(&self) -> Vec<RadioButton> {
        self.members()
            .into_iter()
            .filter(RadioButton::is_pressed)
            .collect()
    }

    /// Check if any member is pressed
    pub fn any_pressed(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.members.values().any(RadioButton::is_pressed))
            .unwrap_or(false)
    }

    /// Get the number of members
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.members.len())
            .unwrap_or(0)
    }

    /// Check if the group has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a button is a member
    pub fn contains(&self, button: &RadioButton) -> bool {
        self.index_of(button).is_some()
    }

    /// Get the current index of a member
    pub fn index_of(&self, button: &RadioButton) -> Option<usize> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.members.get_index_of(&button.id()))
    }

    /// Get the member at an index
    pub fn member_at(&self, index: usize) -> Option<RadioButton> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.members.get_index(index).map(|(_, member)| member.clone()))
    }
}

impl Clone for RadioGroup {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::with_config(GroupConfig::default())
    }
}

impl fmt::Debug for RadioGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioGroup")
            .field("id", &self.id)
            .field("config", &self.config())
            .field("pressed_indexes", &self.pressed_indexes())
            .finish()
    }
}
