//! JavaScript bridges for the DOM access Dioxus does not expose directly:
//! document-wide pointer listeners, scroll offset assignment and reads.
//!
//! Each bridge is a `document::eval` script that exchanges JSON messages with
//! Rust through `dioxus.send` / `dioxus.recv`. Element ids are spliced in so
//! every timeline instance talks only to its own elements.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::state::{
    BarPosition, DragSeeker, PointerCapture, PointerSource, ScrollOffset, TemporalState, Viewport,
};

use super::context::TimelineHandle;

/// Pause before a closed bridge script is evaluated again.
pub(crate) const BRIDGE_RETRY: Duration = Duration::from_millis(100);

const SCROLL_BRIDGE_SCRIPT: &str = r#"
const ids = {
    ruler: "__RULER_ID__",
    track_list: "__TRACK_LIST_ID__",
    keyframe_list: "__KEYFRAME_LIST_ID__",
};

const bound = [];
let observer = null;
let closed = false;

function attach() {
    if (closed) {
        return;
    }
    const elements = {};
    for (const [viewport, id] of Object.entries(ids)) {
        const el = document.getElementById(id);
        if (!el) {
            setTimeout(attach, 100);
            return;
        }
        elements[viewport] = el;
    }
    for (const [viewport, el] of Object.entries(elements)) {
        const onScroll = () => {
            dioxus.send({ kind: "scroll", viewport, left: el.scrollLeft, top: el.scrollTop });
        };
        el.addEventListener("scroll", onScroll, { passive: true });
        bound.push([el, onScroll]);
    }
    const ruler = elements.ruler;
    const sendWidth = () => dioxus.send({ kind: "resize", width: ruler.clientWidth || 0 });
    observer = new ResizeObserver(() => sendWidth());
    observer.observe(ruler);
    sendWidth();
}

function detach() {
    closed = true;
    for (const [el, onScroll] of bound) {
        el.removeEventListener("scroll", onScroll);
    }
    bound.length = 0;
    if (observer) {
        observer.disconnect();
        observer = null;
    }
}

attach();

try {
    while (true) {
        const msg = await dioxus.recv();
        if (!msg) {
            continue;
        }
        const el = document.getElementById(ids[msg.viewport]);
        if (!el) {
            continue;
        }
        const prop = msg.axis === "left" ? "scrollLeft" : "scrollTop";
        if (el[prop] !== msg.value) {
            el[prop] = msg.value;
        }
    }
} catch (_) {
    detach();
}
"#;

const DRAG_BRIDGE_SCRIPT: &str = r#"
const barId = "__BAR_ID__";
let attached = false;

function barLeft() {
    const bar = document.getElementById(barId);
    return bar ? bar.getBoundingClientRect().left : 0;
}

function onMouseMove(e) {
    if (!document.getElementById(barId)) {
        detachDocument();
        return;
    }
    dioxus.send({ phase: "motion", source: "mouse", client_x: e.clientX, bar_left: barLeft() });
}

function onMouseUp() {
    dioxus.send({ phase: "release", source: "mouse" });
}

function onTouchMove(e) {
    if (!document.getElementById(barId)) {
        detachDocument();
        return;
    }
    if (e.touches.length === 0) {
        return;
    }
    dioxus.send({ phase: "motion", source: "touch", client_x: e.touches[0].clientX, bar_left: barLeft() });
}

function onTouchEnd() {
    dioxus.send({ phase: "release", source: "touch" });
}

function attachDocument() {
    if (attached) {
        return;
    }
    document.addEventListener("mousemove", onMouseMove);
    document.addEventListener("mouseup", onMouseUp);
    document.addEventListener("touchmove", onTouchMove);
    document.addEventListener("touchend", onTouchEnd);
    attached = true;
}

function detachDocument() {
    if (!attached) {
        return;
    }
    document.removeEventListener("mousemove", onMouseMove);
    document.removeEventListener("mouseup", onMouseUp);
    document.removeEventListener("touchmove", onTouchMove);
    document.removeEventListener("touchend", onTouchEnd);
    attached = false;
}

function onBarMouseDown(e) {
    e.preventDefault();
    attachDocument();
    dioxus.send({ phase: "press", source: "mouse", client_x: e.clientX, bar_left: barLeft() });
}

function onBarTouchStart(e) {
    if (e.touches.length === 0) {
        return;
    }
    attachDocument();
    dioxus.send({ phase: "press", source: "touch", client_x: e.touches[0].clientX, bar_left: barLeft() });
}

let boundBar = null;
let closed = false;

function bindBar() {
    if (closed) {
        return;
    }
    const bar = document.getElementById(barId);
    if (!bar) {
        setTimeout(bindBar, 100);
        return;
    }
    bar.addEventListener("mousedown", onBarMouseDown);
    bar.addEventListener("touchstart", onBarTouchStart, { passive: true });
    boundBar = bar;
}

function unbindBar() {
    if (!boundBar) {
        return;
    }
    boundBar.removeEventListener("mousedown", onBarMouseDown);
    boundBar.removeEventListener("touchstart", onBarTouchStart);
    boundBar = null;
}

bindBar();

try {
    while (true) {
        const cmd = await dioxus.recv();
        if (cmd === "attach") {
            attachDocument();
        } else if (cmd === "detach") {
            detachDocument();
        }
    }
} catch (_) {
    closed = true;
    detachDocument();
    unbindBar();
}
"#;

/// Message from the scroll bridge.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollReport {
    Scroll { viewport: Viewport, left: f64, top: f64 },
    Resize { width: f64 },
}

/// Message from the drag bridge.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DragReport {
    Press {
        source: PointerSource,
        client_x: f64,
        bar_left: f64,
    },
    Motion {
        source: PointerSource,
        client_x: f64,
        bar_left: f64,
    },
    Release {
        source: PointerSource,
    },
}

/// Message to the drag bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragCommand {
    Attach,
    Detach,
}

pub fn scroll_script(handle: &TimelineHandle) -> String {
    SCROLL_BRIDGE_SCRIPT
        .replace("__RULER_ID__", &handle.viewport_id(Viewport::Ruler))
        .replace("__TRACK_LIST_ID__", &handle.viewport_id(Viewport::TrackList))
        .replace("__KEYFRAME_LIST_ID__", &handle.viewport_id(Viewport::KeyframeList))
}

pub fn drag_script(bar_id: &str) -> String {
    DRAG_BRIDGE_SCRIPT.replace("__BAR_ID__", bar_id)
}

/// Document listeners living in the drag bridge script.
pub struct BridgeCapture {
    bridge: document::Eval,
}

impl BridgeCapture {
    pub fn new(bridge: document::Eval) -> Self {
        Self { bridge }
    }

    fn send(&self, command: DragCommand) {
        if let Err(err) = self.bridge.send(command) {
            tracing::warn!(?command, "drag bridge send failed: {:?}", err);
        }
    }
}

impl PointerCapture for BridgeCapture {
    fn attach(&mut self) {
        self.send(DragCommand::Attach);
    }

    fn detach(&mut self) {
        self.send(DragCommand::Detach);
    }
}

/// Feed one bridge message into the seek state machine.
pub fn apply_drag_report<C: PointerCapture>(
    seeker: &mut DragSeeker<C>,
    report: DragReport,
    temporal: &mut TemporalState,
) {
    match report {
        DragReport::Press {
            source,
            client_x,
            bar_left,
        } => seeker.press(source, BarPosition::new(client_x, bar_left), temporal),
        DragReport::Motion {
            client_x, bar_left, ..
        } => {
            seeker.motion(BarPosition::new(client_x, bar_left), temporal);
        }
        DragReport::Release { .. } => seeker.release(),
    }
}

/// Start the scroll bridge for a mounted timeline and mirror offsets through
/// its `ScrollSynchronizer`. A closed bridge is evaluated again after
/// `BRIDGE_RETRY`.
pub fn use_scroll_bridge(handle: TimelineHandle) {
    use_future(move || {
        let script = scroll_script(&handle);
        let mut scroll = handle.scroll_signal();
        async move {
            loop {
                let mut bridge = document::eval(&script);
                loop {
                    match bridge.recv::<ScrollReport>().await {
                        Ok(ScrollReport::Scroll { viewport, left, top }) => {
                            let writes = scroll
                                .write()
                                .on_user_scroll(viewport, ScrollOffset::new(left, top));
                            for write in writes {
                                if let Err(err) = bridge.send(write) {
                                    tracing::warn!(?write, "scroll bridge send failed: {:?}", err);
                                }
                            }
                        }
                        Ok(ScrollReport::Resize { width }) => {
                            scroll.write().set_ruler_client_width(width);
                        }
                        Err(err) => {
                            tracing::warn!("scroll bridge closed: {:?}", err);
                            break;
                        }
                    }
                }
                tokio::time::sleep(BRIDGE_RETRY).await;
            }
        }
    });
}
