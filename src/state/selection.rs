//! Board-side interaction state: which cell carries the selection border,
//! which cells have their toggle on (value label faded out), and which clue
//! is currently open in the modal. The grid renders purely from this, never
//! by inspecting rendered classes.

use std::collections::BTreeSet;
use std::rc::Rc;
use yew::Reducible;

use crate::model::ClueId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// The one cell showing the selection border, if any.
    pub outlined: Option<ClueId>,
    /// Cells whose toggle is checked; their value labels stay faded until
    /// unchecked, even after the modal is dismissed.
    pub checked: BTreeSet<ClueId>,
    /// The clue currently shown in the modal. Modal-button handlers read
    /// this; the toggle lifecycle guarantees it is set while they are
    /// interactable.
    pub open: Option<ClueId>,
}

#[derive(Clone, Copy, Debug)]
pub enum SelectionAction {
    /// Cell toggle flipped on: the clue opens.
    CheckCell(ClueId),
    /// Cell toggle flipped off: the claim is being retracted elsewhere;
    /// here only the visual state unwinds.
    UncheckCell(ClueId),
}

impl Selection {
    pub fn is_outlined(&self, id: ClueId) -> bool {
        self.outlined == Some(id)
    }

    pub fn is_checked(&self, id: ClueId) -> bool {
        self.checked.contains(&id)
    }

    /// Border toggle, preserved from the board's behavior: the toggled cell
    /// becomes the sole outlined cell, unless it already was, in which case
    /// no cell is outlined.
    fn toggle_outline(&mut self, id: ClueId) {
        self.outlined = if self.outlined == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn apply(mut self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::CheckCell(id) => {
                self.toggle_outline(id);
                self.checked.insert(id);
                self.open = Some(id);
            }
            SelectionAction::UncheckCell(id) => {
                self.toggle_outline(id);
                self.checked.remove(&id);
                self.open = Some(id);
            }
        }
        self
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}
