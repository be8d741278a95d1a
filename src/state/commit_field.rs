//! Numeric input with deferred commit.
//!
//! Keystrokes only touch the display buffer. The owner's value is updated at
//! confirmation points: blur, Enter, or an atomic stepper action. Escape
//! reverts the buffer and swallows the blur that follows it.
//!
//! The field never calls back into its owner directly. Every operation returns
//! a [`FieldResponse`]; `commit` carries the value the owner's update operation
//! must receive.

use std::fmt;
use std::rc::Rc;

use super::temporal::round_half_up;
use crate::utils::parse_numeric_input;

/// Post-validation hook applied to the clamped integer.
pub type FieldFormat = Rc<dyn Fn(i64) -> i64>;

/// Inclusive range and step advertised by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl FieldBounds {
    pub fn new(min: i64, max: i64, step: i64) -> Self {
        Self { min, max, step }
    }
}

/// How a value change reached the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    InsertText,
    DeleteBackward,
    Paste,
    StepUp,
    StepDown,
    Other,
}

impl InputKind {
    /// Map a DOM `InputEvent.inputType`.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type {
            "insertText" => InputKind::InsertText,
            "deleteContentBackward" => InputKind::DeleteBackward,
            "insertFromPaste" => InputKind::Paste,
            "stepUp" => InputKind::StepUp,
            "stepDown" => InputKind::StepDown,
            _ => InputKind::Other,
        }
    }

    /// Plain editing that must not reach the owner until confirmed.
    pub fn is_typing(self) -> bool {
        matches!(
            self,
            InputKind::InsertText | InputKind::DeleteBackward | InputKind::Paste
        )
    }
}

/// Keys the field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    Delete,
    Character,
    Other,
}

impl FieldKey {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => FieldKey::Enter,
            "Escape" => FieldKey::Escape,
            "ArrowUp" => FieldKey::ArrowUp,
            "ArrowDown" => FieldKey::ArrowDown,
            "Backspace" | "Delete" => FieldKey::Delete,
            _ if name.chars().count() == 1 => FieldKey::Character,
            _ => FieldKey::Other,
        }
    }
}

/// Infers the kind of the next input event from the key that preceded it,
/// for runtimes that do not expose `inputType`.
///
/// An input event with no live key came from the native stepper buttons. A key
/// stays live until its keyup; a key the input rejects (Backspace on empty
/// text, ArrowUp at `max`) must not leak into a later stepper click.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputClassifier {
    pending: Option<InputKind>,
}

impl InputClassifier {
    pub fn key_down(&mut self, key: FieldKey) {
        let kind = match key {
            FieldKey::ArrowUp => InputKind::StepUp,
            FieldKey::ArrowDown => InputKind::StepDown,
            FieldKey::Delete => InputKind::DeleteBackward,
            FieldKey::Character => InputKind::InsertText,
            FieldKey::Enter | FieldKey::Escape | FieldKey::Other => return,
        };
        self.pending = Some(kind);
    }

    pub fn classify(&mut self) -> InputKind {
        self.pending.take().unwrap_or(InputKind::Other)
    }

    /// Forget a key that produced no input event. Called on keyup, pointer
    /// down, focus and blur.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FieldMode {
    #[default]
    Idle,
    Editing,
}

/// What the host has to do after a field operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldResponse {
    /// Value for the owner's update callback.
    pub commit: Option<i64>,
    /// Select the whole text so the next keystroke replaces it.
    pub select_all: bool,
    /// Drop focus from the input.
    pub release_focus: bool,
}

impl FieldResponse {
    fn select_all() -> Self {
        Self {
            select_all: true,
            ..Self::default()
        }
    }
}

pub struct CommitField {
    committed: i64,
    buffer: String,
    suppress_commit: bool,
    mode: FieldMode,
    bounds: FieldBounds,
    format: Option<FieldFormat>,
}

impl fmt::Debug for CommitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitField")
            .field("committed", &self.committed)
            .field("buffer", &self.buffer)
            .field("suppress_commit", &self.suppress_commit)
            .field("mode", &self.mode)
            .field("bounds", &self.bounds)
            .field("format", &self.format.is_some())
            .finish()
    }
}

impl CommitField {
    pub fn new(committed: i64, bounds: FieldBounds) -> Self {
        Self {
            committed,
            buffer: committed.to_string(),
            suppress_commit: false,
            mode: FieldMode::Idle,
            bounds,
            format: None,
        }
    }

    pub fn with_format(mut self, format: impl Fn(i64) -> i64 + 'static) -> Self {
        self.format = Some(Rc::new(format));
        self
    }

    pub fn set_format(&mut self, format: FieldFormat) {
        self.format = Some(format);
    }

    /// Bounds may follow other state, e.g. the time field's max tracks the duration.
    pub fn set_bounds(&mut self, bounds: FieldBounds) {
        self.bounds = bounds;
    }

    pub fn committed(&self) -> i64 {
        self.committed
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppress_commit
    }

    /// The owner's value changed from outside; show it.
    pub fn sync_committed(&mut self, value: i64) {
        if value == self.committed {
            return;
        }
        self.committed = value;
        self.buffer = value.to_string();
    }

    pub fn focus(&mut self) -> FieldResponse {
        self.mode = FieldMode::Editing;
        self.suppress_commit = false;
        FieldResponse::select_all()
    }

    /// New raw text from the input element.
    pub fn input(&mut self, text: &str, kind: InputKind) -> FieldResponse {
        self.mode = FieldMode::Editing;
        self.buffer = text.to_string();
        if kind.is_typing() {
            return FieldResponse::default();
        }
        FieldResponse {
            commit: Some(self.validate(text)),
            select_all: true,
            release_focus: false,
        }
    }

    /// Programmatic stepper action: move one step from the shown value and
    /// commit right away.
    pub fn step(&mut self, direction: i64) -> FieldResponse {
        let base = parse_numeric_input(&self.buffer)
            .map(round_half_up)
            .unwrap_or(self.committed as f64);
        let next = base + (direction.signum() * self.bounds.step) as f64;
        let kind = if direction >= 0 {
            InputKind::StepUp
        } else {
            InputKind::StepDown
        };
        self.input(&next.to_string(), kind)
    }

    pub fn key(&mut self, key: FieldKey) -> FieldResponse {
        match key {
            FieldKey::Enter => {
                let value = self.validate(&self.buffer.clone());
                self.mode = FieldMode::Idle;
                FieldResponse {
                    commit: Some(value),
                    select_all: false,
                    release_focus: true,
                }
            }
            FieldKey::Escape => {
                self.buffer = self.committed.to_string();
                self.suppress_commit = true;
                self.mode = FieldMode::Idle;
                FieldResponse {
                    release_focus: true,
                    ..FieldResponse::default()
                }
            }
            FieldKey::ArrowUp | FieldKey::ArrowDown => {
                self.mode = FieldMode::Editing;
                FieldResponse::select_all()
            }
            FieldKey::Delete | FieldKey::Character | FieldKey::Other => {
                self.mode = FieldMode::Editing;
                FieldResponse::default()
            }
        }
    }

    /// Focus left the input. Commits unless Escape or Enter already settled
    /// this edit.
    pub fn blur(&mut self) -> FieldResponse {
        if self.suppress_commit || self.mode == FieldMode::Idle {
            self.suppress_commit = false;
            self.mode = FieldMode::Idle;
            return FieldResponse::default();
        }
        let value = self.validate(&self.buffer.clone());
        self.mode = FieldMode::Idle;
        FieldResponse {
            commit: Some(value),
            ..FieldResponse::default()
        }
    }

    /// Normalize `text` into the value handed to the owner.
    ///
    /// Unparseable text re-affirms the committed value.
    fn validate(&mut self, text: &str) -> i64 {
        let Some(number) = parse_numeric_input(text) else {
            self.buffer = self.committed.to_string();
            return self.committed;
        };
        let clamped = round_half_up(number)
            .min(self.bounds.max as f64)
            .max(self.bounds.min as f64) as i64;
        let value = match &self.format {
            Some(format) => format(clamped),
            None => clamped,
        };
        self.buffer = value.to_string();
        value
    }
}
