pub mod gesture;

pub use gesture::{GestureState, Phase, PointerKind};
