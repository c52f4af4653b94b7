pub mod countdown;
pub mod modal;
pub mod selection;

pub use countdown::{Countdown, CountdownAction};
pub use modal::{ModalAction, ModalStage, ModalState, MODAL_EXPAND_DELAY_MS};
pub use selection::{Selection, SelectionAction};
