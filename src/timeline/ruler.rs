use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{BAR_HEIGHT_PX, BORDER_DEFAULT, RULER_BAR_FILL};
use crate::state::{DragSeeker, Viewport};

use super::bridge::{apply_drag_report, drag_script, BridgeCapture, DragReport, BRIDGE_RETRY};
use super::context::use_timeline;

/// Horizontally scrollable ruler. The bar is `duration` pixels wide; pressing
/// or dragging on it seeks.
#[component]
pub fn Ruler() -> Element {
    let handle = use_timeline();
    let temporal = handle.temporal_signal();
    let width_memo = use_memo(move || temporal.read().content_width_px());
    let layout = handle.layout();
    let ruler_id = handle.viewport_id(Viewport::Ruler);
    let bar_id = handle.element_id("ruler-bar");

    let seeker = use_hook(|| Rc::new(RefCell::new(None::<DragSeeker<BridgeCapture>>)));

    {
        let seeker = seeker.clone();
        let bar_id = bar_id.clone();
        use_future(move || {
            let seeker = seeker.clone();
            let script = drag_script(&bar_id);
            let mut temporal = temporal;
            async move {
                loop {
                    let mut bridge = document::eval(&script);
                    // Replacing a live seeker releases its capture first.
                    *seeker.borrow_mut() = Some(DragSeeker::new(BridgeCapture::new(bridge.clone())));
                    loop {
                        match bridge.recv::<DragReport>().await {
                            Ok(report) => {
                                let mut slot = seeker.borrow_mut();
                                let Some(active) = slot.as_mut() else {
                                    break;
                                };
                                if !active.is_dragging() && !matches!(report, DragReport::Press { .. }) {
                                    continue;
                                }
                                apply_drag_report(active, report, &mut *temporal.write());
                            }
                            Err(err) => {
                                tracing::warn!("drag bridge closed: {:?}", err);
                                break;
                            }
                        }
                    }
                    tokio::time::sleep(BRIDGE_RETRY).await;
                }
            }
        });
    }

    // Guaranteed detach on unmount, mid-drag or not.
    {
        let seeker = seeker.clone();
        use_drop(move || {
            if let Some(seeker) = seeker.borrow_mut().as_mut() {
                seeker.teardown();
            }
        });
    }

    let padding_x = layout.ruler_padding_x;
    let width = width_memo();

    rsx! {
        div {
            id: "{ruler_id}",
            style: "
                padding: 8px {padding_x}px; min-width: 0;
                border-bottom: 1px solid {BORDER_DEFAULT};
                overflow-x: auto; overflow-y: hidden;
            ",
            div {
                id: "{bar_id}",
                style: "
                    width: {width}px; height: {BAR_HEIGHT_PX}px;
                    border-radius: 6px; background-color: {RULER_BAR_FILL};
                    cursor: pointer; touch-action: none;
                ",
            }
        }
    }
}
