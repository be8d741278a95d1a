use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::*;
use crate::state::{CommitField, FieldBounds, FieldKey, FieldResponse, InputClassifier};

/// Number input that reports to its owner only at confirmation points.
///
/// `value` is the owner's committed value; `format` runs on every validated
/// value before `on_commit` sees it.
#[component]
pub fn NumberInput(
    id: String,
    label: &'static str,
    value: i64,
    min: i64,
    max: i64,
    step: i64,
    format: Callback<i64, i64>,
    on_commit: EventHandler<i64>,
) -> Element {
    let bounds = FieldBounds::new(min, max, step);
    let field = use_hook(|| Rc::new(RefCell::new(CommitField::new(value, bounds))));
    let classifier = use_hook(|| Rc::new(RefCell::new(InputClassifier::default())));
    let revision = use_signal(|| 0u64);

    {
        let mut field = field.borrow_mut();
        field.set_bounds(bounds);
        field.set_format(Rc::new(move |v: i64| format.call(v)));
        field.sync_committed(value);
    }
    let _ = revision();
    let text = field.borrow().buffer().to_string();

    let field_focus = field.clone();
    let field_input = field.clone();
    let field_key = field.clone();
    let field_blur = field.clone();
    let classifier_input = classifier.clone();
    let classifier_focus = classifier.clone();
    let classifier_blur = classifier.clone();
    let classifier_keyup = classifier.clone();
    let classifier_pointer = classifier.clone();
    let id_focus = id.clone();
    let id_input = id.clone();
    let id_key = id.clone();
    let id_blur = id.clone();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 6px; min-width: 0;",
            span {
                style: "font-size: 11px; color: {TEXT_SECONDARY};",
                "{label}"
            }
            input {
                id: "{id}",
                r#type: "number",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{text}",
                style: "
                    width: 72px; min-width: 0; box-sizing: border-box;
                    padding: 4px 6px; font-size: 12px;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none;
                    user-select: text;
                ",
                onfocus: move |_| {
                    classifier_focus.borrow_mut().reset();
                    let response = field_focus.borrow_mut().focus();
                    apply_response(response, &id_focus, on_commit, revision);
                },
                oninput: move |e| {
                    let kind = classifier_input.borrow_mut().classify();
                    let response = field_input.borrow_mut().input(&e.value(), kind);
                    apply_response(response, &id_input, on_commit, revision);
                },
                onkeydown: move |e: KeyboardEvent| {
                    let key = FieldKey::from_name(&e.key().to_string());
                    classifier.borrow_mut().key_down(key);
                    let response = field_key.borrow_mut().key(key);
                    apply_response(response, &id_key, on_commit, revision);
                },
                onkeyup: move |_| classifier_keyup.borrow_mut().reset(),
                onmousedown: move |_| classifier_pointer.borrow_mut().reset(),
                onblur: move |_| {
                    classifier_blur.borrow_mut().reset();
                    let response = field_blur.borrow_mut().blur();
                    apply_response(response, &id_blur, on_commit, revision);
                },
            }
        }
    }
}

fn apply_response(
    response: FieldResponse,
    input_id: &str,
    on_commit: EventHandler<i64>,
    mut revision: Signal<u64>,
) {
    if let Some(value) = response.commit {
        tracing::debug!(input = input_id, value, "field commit");
        on_commit.call(value);
    }
    if response.select_all {
        let _ = document::eval(&format!("document.getElementById('{input_id}')?.select();"));
    }
    if response.release_focus {
        let _ = document::eval(&format!("document.getElementById('{input_id}')?.blur();"));
    }
    *revision.write() += 1;
}
