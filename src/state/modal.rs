//! Clue modal display state: the show/expand animation stages, whether the
//! question text has been revealed, and which winner button is highlighted.

use std::rc::Rc;
use yew::Reducible;

use crate::model::TeamId;

/// Two-stage reveal: the dialog becomes visible immediately, then expands
/// after a short delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalStage {
    #[default]
    Hidden,
    Shown,
    Expanded,
}

/// Milliseconds between the Shown and Expanded stages.
pub const MODAL_EXPAND_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub stage: ModalStage,
    /// False shows the reveal trigger, true shows the question text; never
    /// both at once.
    pub question_revealed: bool,
    /// Winner button currently marked selected, by team id.
    pub highlighted: Option<TeamId>,
}

#[derive(Clone, Copy, Debug)]
pub enum ModalAction {
    /// Show the dialog. The owner schedules the one-shot expand timer.
    Open,
    /// Expand timer fired. Ignored unless still in the Shown stage, so a
    /// dismiss during the delay cannot resurrect the dialog.
    Expand,
    /// "Done": conceal the question, drop the highlight, and hide both
    /// stages atomically.
    Dismiss,
    RevealQuestion,
    /// Mark one winner button selected, clearing any other.
    Highlight(TeamId),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.stage != ModalStage::Hidden
    }

    pub fn apply(self, action: ModalAction) -> Self {
        match action {
            ModalAction::Open => Self {
                stage: ModalStage::Shown,
                ..self
            },
            ModalAction::Expand => {
                if self.stage == ModalStage::Shown {
                    Self {
                        stage: ModalStage::Expanded,
                        ..self
                    }
                } else {
                    self
                }
            }
            ModalAction::Dismiss => Self::default(),
            ModalAction::RevealQuestion => Self {
                question_revealed: true,
                ..self
            },
            ModalAction::Highlight(team) => Self {
                highlighted: Some(team),
                ..self
            },
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
