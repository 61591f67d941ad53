//! Radio button state.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};
use std::time::Duration;

use super::RadioButtonDelegate;
use crate::group::{GroupLink, RadioGroup, RadioGroupId};

/// Fill and unfill animation duration used unless overridden.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Unique identifier for a RadioButton instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadioButtonId(usize);

impl RadioButtonId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for RadioButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__radio_button_{}", self.0)
    }
}

/// Internal state for a RadioButton
struct RadioButtonInner {
    /// Whether the button is pressed (selected)
    pressed: bool,
    /// Hint for the render layer, not read by the state machine
    animation_duration: Duration,
    /// Optional veto delegate
    delegate: Option<Weak<dyn RadioButtonDelegate>>,
    /// Groups tracking this button, in adoption order
    groups: Vec<GroupLink>,
}

impl Default for RadioButtonInner {
    fn default() -> Self {
        Self {
            pressed: false,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            delegate: None,
            groups: Vec::new(),
        }
    }
}

/// A radio button with shared state.
///
/// `RadioButton` is a handle: clones refer to the same button, and equality
/// and hashing go through its [`RadioButtonId`]. It can be used on its own or
/// as a member of one or more [`RadioGroup`]s.
///
/// State changes go through [`request_state_change`](Self::request_state_change),
/// which consults the delegate, or [`set_pressed`](Self::set_pressed), which
/// doesn't. Either way the transition is reported to every group tracking the
/// button.
///
/// # Example
///
/// ```
/// use radiogroup::RadioButton;
///
/// let button = RadioButton::new();
/// button.request_state_change();
/// assert!(button.is_pressed());
/// ```
pub struct RadioButton {
    /// Unique identifier for this button instance
    id: RadioButtonId,
    /// Internal state
    inner: Arc<RwLock<RadioButtonInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl RadioButton {
    /// Create a new unpressed button
    pub fn new() -> Self {
        Self {
            id: RadioButtonId::new(),
            inner: Arc::new(RwLock::new(RadioButtonInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a pressed button
    pub fn pressed() -> Self {
        Self {
            id: RadioButtonId::new(),
            inner: Arc::new(RwLock::new(RadioButtonInner {
                pressed: true,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Override the fill and unfill animation duration
    pub fn with_animation_duration(self, duration: Duration) -> Self {
        self.set_animation_duration(duration);
        self
    }

    /// Get the unique ID for this button
    pub fn id(&self) -> RadioButtonId {
        self.id
    }

    /// Get the ID as a string
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Check if the button is pressed
    pub fn is_pressed(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.pressed)
            .unwrap_or(false)
    }

    /// Get the fill and unfill animation duration
    pub fn animation_duration(&self) -> Duration {
        self.inner
            .read()
            .map(|guard| guard.animation_duration)
            .unwrap_or(DEFAULT_ANIMATION_DURATION)
    }

    /// Check if a live delegate is attached
    pub fn has_delegate(&self) -> bool {
        self.delegate().is_some()
    }

    /// Get the groups currently tracking this button
    pub fn groups(&self) -> Vec<RadioGroup> {
        self.inner
            .read()
            .map(|guard| guard.groups.iter().filter_map(GroupLink::upgrade).collect())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the fill and unfill animation duration
    pub fn set_animation_duration(&self, duration: Duration) {
        if let Ok(mut guard) = self.inner.write() {
            guard.animation_duration = duration;
        }
    }

    /// Attach a veto delegate.
    ///
    /// Only a weak reference is kept; the caller owns the delegate.
    pub fn set_delegate<D: RadioButtonDelegate + 'static>(&self, delegate: &Arc<D>) {
        let weak: Weak<dyn RadioButtonDelegate> = Arc::downgrade(delegate) as Weak<D>;
        if let Ok(mut guard) = self.inner.write() {
            guard.delegate = Some(weak);
        }
    }

    /// Detach the veto delegate
    pub fn clear_delegate(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.delegate = None;
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the pressed state has changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Crate internals
    // -------------------------------------------------------------------------

    pub(crate) fn delegate(&self) -> Option<Arc<dyn RadioButtonDelegate>> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.delegate.as_ref().and_then(Weak::upgrade))
    }

    /// Store `pressed` without reporting. Returns true if the value changed.
    pub(crate) fn store_pressed(&self, pressed: bool) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if guard.pressed == pressed {
            return false;
        }
        guard.pressed = pressed;
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    pub(crate) fn attach_group(&self, link: GroupLink) {
        if let Ok(mut guard) = self.inner.write() {
            guard.groups.retain(|existing| existing.is_alive() && existing.id() != link.id());
            guard.groups.push(link);
        }
    }

    pub(crate) fn detach_group(&self, group: RadioGroupId) {
        if let Ok(mut guard) = self.inner.write() {
            guard.groups.retain(|existing| existing.is_alive() && existing.id() != group);
        }
    }
}

impl Clone for RadioButton {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for RadioButton {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RadioButton {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RadioButton {}

impl Hash for RadioButton {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for RadioButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioButton")
            .field("id", &self.id)
            .field("pressed", &self.is_pressed())
            .finish()
    }
}
