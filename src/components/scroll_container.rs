use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, EventTarget};
use yew::prelude::*;

use crate::controller::{DragScrollController, MotionOutcome, ScrollConfig};
use crate::listeners::EventSubscription;
use crate::state::PointerKind;
use crate::util;
use crate::viewport::ScrollMetrics;

/// Class names emitted on the container div. Styling is left to the host
/// application; `--hide-scrollbars` and `--dragging` exist to hang
/// scrollbar-hiding and cursor rules on.
const BASE_CLASS: &str = "drag-scroll";
const DRAGGING_CLASS: &str = "drag-scroll--dragging";
const HIDE_SCROLLBARS_CLASS: &str = "drag-scroll--hide-scrollbars";
const MOBILE_CLASS: &str = "drag-scroll--mobile";

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollContainerProps {
    /// Apply horizontal drag deltas to the scroll offset.
    #[prop_or(true)]
    pub horizontal: bool,
    /// Apply vertical drag deltas to the scroll offset.
    #[prop_or(true)]
    pub vertical: bool,
    /// Emit the scrollbar-hiding modifier class.
    #[prop_or(true)]
    pub hide_scrollbars: bool,
    /// Pointer travel (px) along an enabled axis before a mouse press
    /// becomes a drag.
    #[prop_or(10.0)]
    pub activation_distance: f64,
    /// CSS selector for regions that must not initiate a drag, e.g.
    /// interactive controls inside the container.
    #[prop_or_default]
    pub ignore_elements: Option<AttrValue>,
    /// Probe for a touch-capable environment once at mount and emit the
    /// mobile modifier class.
    #[prop_or(true)]
    pub preserve_mobile_behavior: bool,
    /// Overrides the built-in mobile probe, letting the host inject its own
    /// environment detection.
    #[prop_or_default]
    pub mobile_probe: Option<Callback<(), bool>>,
    /// Fired once per gesture when the activation distance is crossed.
    #[prop_or_default]
    pub on_start_scroll: Callback<ScrollMetrics>,
    /// Fired on every move handled while dragging.
    #[prop_or_default]
    pub on_scroll: Callback<ScrollMetrics>,
    /// Fired once per gesture on release, only if a drag actually started.
    #[prop_or_default]
    pub on_end_scroll: Callback<ScrollMetrics>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

fn apply_motion_outcome(
    outcome: MotionOutcome,
    props: &RefCell<ScrollContainerProps>,
    dragging_flag: &RefCell<bool>,
    rerender: &UseStateHandle<bool>,
    rerender_on_start: bool,
) {
    // Clone the callbacks out so no borrow is held while user code runs.
    let (on_start, on_scroll) = {
        let props = props.borrow();
        (props.on_start_scroll.clone(), props.on_scroll.clone())
    };
    if let Some(metrics) = outcome.started {
        *dragging_flag.borrow_mut() = true;
        util::set_body_dragging(true);
        on_start.emit(metrics);
        // Touch drags skip the forced re-render; native scrolling keeps the
        // frame moving and the body class carries the cursor styling. The
        // flag still surfaces the modifier on the next render either way.
        if rerender_on_start {
            rerender.set(true);
        }
    }
    if let Some(metrics) = outcome.scrolled {
        on_scroll.emit(metrics);
    }
}

/// Scrollable `<div>` whose content pans with click-and-drag.
///
/// Mouse drags past [`activation_distance`](ScrollContainerProps::activation_distance)
/// move the scroll offset directly; touch gestures ride the browser's native
/// scrolling and only report through the callbacks. Move and release
/// listeners are window-scoped so a drag keeps tracking after the pointer
/// leaves the container.
///
/// ```rust,ignore
/// html! {
///     <ScrollContainer
///         vertical={false}
///         ignore_elements={"button, a"}
///         on_end_scroll={on_end}
///     >
///         <div class="wide-content" />
///     </ScrollContainer>
/// }
/// ```
#[function_component(ScrollContainer)]
pub fn scroll_container(props: &ScrollContainerProps) -> Html {
    let container_ref = use_node_ref();
    let controller = use_mut_ref(DragScrollController::default);
    let props_ref = use_mut_ref(|| props.clone());
    // Render-time source of truth for the dragging modifier; the state
    // handle below only forces the re-renders the mouse path needs.
    let dragging_flag = use_mut_ref(|| false);
    let dragging = use_state(|| false);
    let is_mobile = use_state(|| false);

    // Keep the window-listener closures reading current props and config.
    *props_ref.borrow_mut() = props.clone();
    controller.borrow_mut().set_config(ScrollConfig {
        horizontal: props.horizontal,
        vertical: props.vertical,
        activation_distance: props.activation_distance,
    });

    // Mobile probe, once, after mount.
    {
        let is_mobile = is_mobile.clone();
        let probe = props.mobile_probe.clone();
        let preserve = props.preserve_mobile_behavior;
        use_effect_with((), move |_| {
            if preserve {
                let mobile = match &probe {
                    Some(cb) => cb.emit(()),
                    None => util::is_mobile_device(),
                };
                if mobile {
                    is_mobile.set(true);
                }
            }
            || ()
        });
    }

    // Window listeners: move/release must track the pointer outside the
    // container. Guards are dropped by the cleanup closure on unmount.
    {
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let props_ref = props_ref.clone();
        let dragging_flag = dragging_flag.clone();
        let dragging = dragging.clone();
        use_effect_with((), move |_| {
            let window: EventTarget = web_sys::window().expect("window").into();

            let mouse_move = {
                let container_ref = container_ref.clone();
                let controller = controller.clone();
                let props_ref = props_ref.clone();
                let dragging_flag = dragging_flag.clone();
                let dragging = dragging.clone();
                EventSubscription::new(&window, "mousemove", move |e: web_sys::MouseEvent| {
                    if !controller.borrow().is_active() {
                        return;
                    }
                    e.prevent_default();
                    let Some(mut viewport) = container_ref.cast::<Element>() else {
                        return;
                    };
                    let outcome = controller.borrow_mut().motion(
                        PointerKind::Mouse,
                        e.client_x() as f64,
                        e.client_y() as f64,
                        &mut viewport,
                    );
                    apply_motion_outcome(outcome, &props_ref, &dragging_flag, &dragging, true);
                })
            };

            let mouse_up = {
                let container_ref = container_ref.clone();
                let controller = controller.clone();
                let props_ref = props_ref.clone();
                let dragging_flag = dragging_flag.clone();
                let dragging = dragging.clone();
                EventSubscription::new(&window, "mouseup", move |e: web_sys::MouseEvent| {
                    if !controller.borrow().is_active() {
                        return;
                    }
                    e.prevent_default();
                    e.stop_propagation();
                    let ended = match container_ref.cast::<Element>() {
                        Some(viewport) => controller.borrow_mut().release(&viewport),
                        None => {
                            // Viewport gone mid-gesture: end it without
                            // metrics, leaving no dragging style behind.
                            let was_dragging = controller.borrow().is_dragging();
                            controller.borrow_mut().reset();
                            if was_dragging {
                                *dragging_flag.borrow_mut() = false;
                                util::set_body_dragging(false);
                                dragging.set(false);
                            }
                            None
                        }
                    };
                    if let Some(metrics) = ended {
                        *dragging_flag.borrow_mut() = false;
                        util::set_body_dragging(false);
                        let on_end = props_ref.borrow().on_end_scroll.clone();
                        on_end.emit(metrics);
                        dragging.set(false);
                    }
                })
            };

            // Non-passive so preventDefault stays honored on the touch path.
            let touch_opts = AddEventListenerOptions::new();
            touch_opts.set_passive(false);
            let touch_move = {
                let container_ref = container_ref.clone();
                let controller = controller.clone();
                let props_ref = props_ref.clone();
                let dragging_flag = dragging_flag.clone();
                let dragging = dragging.clone();
                EventSubscription::with_options(
                    &window,
                    "touchmove",
                    &touch_opts,
                    move |e: web_sys::TouchEvent| {
                        if !controller.borrow().is_active() {
                            return;
                        }
                        let Some(touch) = e.touches().get(0) else {
                            return;
                        };
                        let Some(mut viewport) = container_ref.cast::<Element>() else {
                            return;
                        };
                        let outcome = controller.borrow_mut().motion(
                            PointerKind::Touch,
                            touch.client_x() as f64,
                            touch.client_y() as f64,
                            &mut viewport,
                        );
                        apply_motion_outcome(outcome, &props_ref, &dragging_flag, &dragging, false);
                    },
                )
            };

            let touch_end = {
                let container_ref = container_ref.clone();
                let controller = controller.clone();
                let props_ref = props_ref.clone();
                let dragging_flag = dragging_flag.clone();
                let dragging = dragging.clone();
                EventSubscription::new(&window, "touchend", move |_e: web_sys::TouchEvent| {
                    if !controller.borrow().is_active() {
                        return;
                    }
                    let ended = match container_ref.cast::<Element>() {
                        Some(viewport) => controller.borrow_mut().release(&viewport),
                        None => {
                            let was_dragging = controller.borrow().is_dragging();
                            controller.borrow_mut().reset();
                            if was_dragging {
                                *dragging_flag.borrow_mut() = false;
                                util::set_body_dragging(false);
                                dragging.set(false);
                            }
                            None
                        }
                    };
                    if let Some(metrics) = ended {
                        *dragging_flag.borrow_mut() = false;
                        util::set_body_dragging(false);
                        let on_end = props_ref.borrow().on_end_scroll.clone();
                        on_end.emit(metrics);
                        dragging.set(false);
                    }
                })
            };

            let controller_cleanup = controller.clone();
            move || {
                drop(mouse_move);
                drop(mouse_up);
                drop(touch_move);
                drop(touch_end);
                // Unmounting mid-drag must not leave the body class behind.
                controller_cleanup.borrow_mut().reset();
                util::set_body_dragging(false);
            }
        });
    }

    let onmousedown = {
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let ignore = props.ignore_elements.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(viewport) = container_ref.cast::<Element>() else {
                return;
            };
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if util::is_draggable(&target, &viewport, ignore.as_deref()) {
                controller
                    .borrow_mut()
                    .press(e.client_x() as f64, e.client_y() as f64);
                // Nested containers must not capture the same gesture.
                e.stop_propagation();
                e.prevent_default();
            }
        })
    };

    let ontouchstart = {
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let ignore = props.ignore_elements.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(viewport) = container_ref.cast::<Element>() else {
                return;
            };
            let Some(touch) = e.touches().get(0) else {
                return;
            };
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if util::is_draggable(&target, &viewport, ignore.as_deref()) {
                controller
                    .borrow_mut()
                    .press(touch.client_x() as f64, touch.client_y() as f64);
                e.stop_propagation();
            }
        })
    };

    html! {
        <div
            ref={container_ref}
            class={classes!(
                BASE_CLASS,
                (*dragging_flag.borrow()).then_some(DRAGGING_CLASS),
                props.hide_scrollbars.then_some(HIDE_SCROLLBARS_CLASS),
                (*is_mobile).then_some(MOBILE_CLASS),
                props.class.clone(),
            )}
            style={props.style.clone()}
            onmousedown={onmousedown}
            ontouchstart={ontouchstart}
        >
            { props.children.clone() }
        </div>
    }
}
