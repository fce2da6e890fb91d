pub mod scroll_container;

pub use scroll_container::{ScrollContainer, ScrollContainerProps};
