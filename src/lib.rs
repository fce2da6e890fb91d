//! Drag-to-scroll container for Yew.
//!
//! [`ScrollContainer`] renders a scrollable `<div>` that pans its content
//! while the user holds and drags, the usual "grab scrolling" interaction.
//! Mouse drags move past an activation dead-zone, then write the viewport's
//! scroll offsets directly; touch gestures ride the browser's native
//! scrolling and are only observed. Axis locking, an exclusion selector for
//! interactive children, and start/move/end callbacks are supported.
//!
//! The gesture logic lives in [`DragScrollController`], which is DOM-free:
//! it consumes press/move/release events, mutates any [`Viewport`], and
//! reports what happened. The component layer wires it to window-level
//! mouse/touch listeners whose lifetimes are tied to the component mount.
//!
//! ```rust,ignore
//! use yew::prelude::*;
//! use yew_drag_scroll::ScrollContainer;
//!
//! #[function_component(App)]
//! fn app() -> Html {
//!     html! {
//!         <ScrollContainer activation_distance={8.0}>
//!             <div class="board" />
//!         </ScrollContainer>
//!     }
//! }
//! ```

pub mod components;
pub mod controller;
pub mod listeners;
pub mod state;
pub mod util;
pub mod viewport;

pub use components::{ScrollContainer, ScrollContainerProps};
pub use controller::{DragScrollController, MotionOutcome, ScrollConfig};
pub use listeners::EventSubscription;
pub use state::{GestureState, Phase, PointerKind};
pub use viewport::{ScrollMetrics, Viewport};
