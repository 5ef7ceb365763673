pub mod canvas;
pub mod input;
pub mod interaction;

pub use canvas::Diagram;
pub use input::{InputEvent, Modifiers};
pub use interaction::{Interaction, InteractionState};
