//! Leptos Inline Edit
//!
//! Edit-in-place for list rows, modelled as a two-state machine
//! (`Viewing` / `Editing`) driven by named triggers. The machine itself
//! knows nothing about DOM events; the `make_on_*` helpers at the bottom
//! translate browser events into triggers.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

// ========================
// State Machine
// ========================

/// Edit state of a single row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    /// Editing with the current (uncommitted) draft text
    Editing { draft: String },
}

/// Named transition triggers
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTrigger {
    /// Double-activation or an explicit edit action
    Begin,
    /// Draft text changed
    Input(String),
    /// Accept the draft (Enter)
    Confirm,
    /// Discard the draft (Escape)
    Cancel,
    /// Focus left the field; commits like `Confirm`
    Blur,
}

/// Side effect requested by a transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing for the caller to do
    None,
    /// Editing started; the caller should focus the field
    Started,
    /// Store this text for the row
    Commit(String),
    /// Drop the draft and show the original text again
    Revert,
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Editing { draft } => Some(draft),
            EditState::Viewing => None,
        }
    }

    /// Apply a trigger. `original` seeds the draft on `Begin`; a `locked`
    /// row (e.g. completed) never enters editing.
    pub fn apply(self, trigger: EditTrigger, original: &str, locked: bool) -> (EditState, EditOutcome) {
        match (self, trigger) {
            (EditState::Viewing, EditTrigger::Begin) if !locked => (
                EditState::Editing { draft: original.to_string() },
                EditOutcome::Started,
            ),
            (EditState::Editing { .. }, EditTrigger::Input(text)) => {
                (EditState::Editing { draft: text }, EditOutcome::None)
            }
            (EditState::Editing { draft }, EditTrigger::Confirm | EditTrigger::Blur) => {
                (EditState::Viewing, EditOutcome::Commit(draft))
            }
            (EditState::Editing { .. }, EditTrigger::Cancel) => (EditState::Viewing, EditOutcome::Revert),
            (state, _) => (state, EditOutcome::None),
        }
    }
}

/// Map a `KeyboardEvent.key` value to a trigger
pub fn key_trigger(key: &str) -> Option<EditTrigger> {
    match key {
        "Enter" => Some(EditTrigger::Confirm),
        "Escape" | "Esc" => Some(EditTrigger::Cancel),
        _ => None,
    }
}

// ========================
// Leptos Bindings
// ========================

/// Per-row edit signals
#[derive(Clone, Copy)]
pub struct EditSignals {
    pub state_read: ReadSignal<EditState>,
    pub state_write: WriteSignal<EditState>,
    /// Text the row showed when it was rendered
    original: StoredValue<String>,
    /// Whether editing is suppressed for this row
    locked: StoredValue<bool>,
}

pub fn create_edit_signals(original: String, locked: bool) -> EditSignals {
    let (state_read, state_write) = signal(EditState::Viewing);
    EditSignals {
        state_read,
        state_write,
        original: StoredValue::new(original),
        locked: StoredValue::new(locked),
    }
}

impl EditSignals {
    /// Run one transition and return what the caller must do
    ///
    /// Events reaching a row that was already disposed (e.g. the blur fired
    /// while the list rebuilds) are ignored.
    pub fn dispatch(&self, trigger: EditTrigger) -> EditOutcome {
        let Some(current) = self.state_read.try_get_untracked() else {
            return EditOutcome::None;
        };
        let locked = self.locked.try_get_value().unwrap_or(true);
        let Some((next, outcome)) = self
            .original
            .try_with_value(|original| current.clone().apply(trigger, original, locked))
        else {
            return EditOutcome::None;
        };
        if next != current {
            let _ = self.state_write.try_set(next);
        }
        outcome
    }

    /// Reactive: is the row currently being edited
    pub fn is_editing(&self) -> bool {
        self.state_read.with(EditState::is_editing)
    }

    /// Reactive: draft while editing, original text otherwise
    pub fn display_text(&self) -> String {
        self.state_read
            .with(|state| state.draft().map(str::to_string))
            .unwrap_or_else(|| self.original.get_value())
    }
}

fn settle(outcome: EditOutcome, on_commit: Callback<String>) {
    if let EditOutcome::Commit(text) = outcome {
        on_commit.run(text);
    }
}

/// Handler for double-click and the explicit edit button
pub fn make_on_begin(edit: EditSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        edit.dispatch(EditTrigger::Begin);
    }
}

/// Handler keeping the draft in sync with the field
pub fn make_on_input<E: JsCast + 'static>(edit: EditSignals) -> impl Fn(E) + Copy + 'static {
    move |ev: E| {
        edit.dispatch(EditTrigger::Input(event_target_value(&ev)));
    }
}

/// Handler for Enter / Escape inside the field
pub fn make_on_keydown(
    edit: EditSignals,
    on_commit: Callback<String>,
) -> impl Fn(web_sys::KeyboardEvent) + Copy + 'static {
    move |ev: web_sys::KeyboardEvent| {
        if let Some(trigger) = key_trigger(&ev.key()) {
            ev.prevent_default();
            settle(edit.dispatch(trigger), on_commit);
        }
    }
}

/// Handler for focus loss
pub fn make_on_blur(
    edit: EditSignals,
    on_commit: Callback<String>,
) -> impl Fn(web_sys::FocusEvent) + Copy + 'static {
    move |_ev: web_sys::FocusEvent| {
        settle(edit.dispatch(EditTrigger::Blur), on_commit);
    }
}
