//! DOM helpers: exclusion predicate, mobile probe, body class toggling.

use wasm_bindgen::JsValue;
use web_sys::Element;

/// Class applied to `<body>` while a drag is in progress, for cursor styling.
pub const BODY_DRAGGING_CLASS: &str = "drag-scroll-dragging";

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Decide whether a press may start a gesture, given what exclusion-selector
/// matching found. `matched` is `None` when no inclusive ancestor of the
/// press target matched the selector, `Some(contains_viewport)` when one did.
fn press_is_draggable(matched: Option<bool>) -> bool {
    match matched {
        // An exclusion region that encloses the whole scroll container
        // cannot mean "don't drag here".
        Some(contains_viewport) => contains_viewport,
        None => true,
    }
}

/// Exclusion predicate: may a press on `target` start a gesture?
///
/// With no selector every target is draggable. Otherwise the nearest
/// inclusive ancestor matching the selector rejects the press, unless that
/// ancestor also contains the viewport itself. A selector the engine cannot
/// parse fails open.
pub fn is_draggable(target: &Element, viewport: &Element, ignore: Option<&str>) -> bool {
    let Some(selector) = ignore else {
        return true;
    };
    let matched = match target.closest(selector) {
        Ok(found) => found.map(|ancestor| {
            let viewport_node: &web_sys::Node = viewport;
            ancestor.contains(Some(viewport_node))
        }),
        Err(_) => {
            warn(&format!("drag-scroll: invalid ignore selector {selector:?}"));
            None
        }
    };
    press_is_draggable(matched)
}

/// Default mobile probe: orientation-capable window or a mobile user agent.
/// Checked once at mount, after load, so server-side rendering stays safe.
pub fn is_mobile_device() -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    let win_obj: &JsValue = win.as_ref();
    if js_sys::Reflect::has(win_obj, &JsValue::from_str("orientation")).unwrap_or(false) {
        return true;
    }
    win.navigator()
        .user_agent()
        .map(|ua| ua.contains("IEMobile"))
        .unwrap_or(false)
}

/// Add or remove the body-level dragging class. Quietly does nothing when
/// there is no document body to touch.
pub fn set_body_dragging(active: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if active {
        classes.add_1(BODY_DRAGGING_CLASS)
    } else {
        classes.remove_1(BODY_DRAGGING_CLASS)
    };
    result.ok();
}

#[cfg(test)]
mod tests {
    use super::press_is_draggable;

    #[test]
    fn press_outside_exclusion_region_is_draggable() {
        assert!(press_is_draggable(None));
    }

    #[test]
    fn exclusion_region_rejects_press() {
        assert!(!press_is_draggable(Some(false)));
    }

    #[test]
    fn exclusion_region_enclosing_viewport_does_not_apply() {
        assert!(press_is_draggable(Some(true)));
    }
}
