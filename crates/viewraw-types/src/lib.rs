pub mod events;
pub mod models;
pub mod settings;

pub use events::{GestureKind, Outcome, PointerEvent};
pub use models::{ChannelRef, MessageRecord};
pub use settings::{ClickPolicy, SelectChoice, SelectOption, CLICK_METHOD};
