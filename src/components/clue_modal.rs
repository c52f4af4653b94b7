//! The clue dialog: answer text, a reveal trigger that swaps to the question
//! text, the countdown readout, one winner button per team, and Done.
//! Always present in the markup; the show/expand classes come straight from
//! [`ModalState`] and the countdown readout from [`Countdown`].

use yew::prelude::*;

use crate::model::TeamId;
use crate::state::{Countdown, ModalStage, ModalState};

#[derive(Properties, PartialEq, Clone)]
pub struct ClueModalProps {
    /// Answer text of the open clue; empty when no clue has been opened yet.
    pub answer: String,
    /// Question text of the open clue, populated even before reveal.
    pub question: String,
    pub modal: ModalState,
    pub countdown: Countdown,
    pub team_count: u32,
    pub on_reveal: Callback<()>,
    pub on_winner: Callback<TeamId>,
    pub on_done: Callback<()>,
}

#[function_component(ClueModal)]
pub fn clue_modal(props: &ClueModalProps) -> Html {
    let reveal = {
        let cb = props.on_reveal.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let done = {
        let cb = props.on_done.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let winner_buttons = (1..=props.team_count).map(|n| {
        let team = TeamId(n);
        let onclick = {
            let cb = props.on_winner.clone();
            Callback::from(move |_| cb.emit(team))
        };
        html! {
            <button
                key={n}
                class={classes!((props.modal.highlighted == Some(team)).then_some("selected"))}
                {onclick}
            >
                { team.to_string() }
            </button>
        }
    });

    html! {
        <div
            id="modal"
            class={classes!(
                "modal",
                props.modal.is_open().then_some("show"),
                (props.modal.stage == ModalStage::Expanded).then_some("expand"),
            )}
        >
            <div class="modal-body">
                <span
                    id="modal-countdown"
                    class={classes!((!props.countdown.visible).then_some("hidden"))}
                >
                    { props.countdown.remaining }
                </span>
                <p id="modal-answer">{ &props.answer }</p>
                <button
                    id="show-question"
                    class={classes!(props.modal.question_revealed.then_some("hidden"))}
                    onclick={reveal}
                >
                    { "Show Question" }
                </button>
                <p
                    id="modal-question"
                    class={classes!((!props.modal.question_revealed).then_some("hidden"))}
                >
                    { &props.question }
                </p>
                <div class="modal-teams">
                    <div class="winner-buttons">
                        { for winner_buttons }
                    </div>
                </div>
                <button class="done" onclick={done}>{ "Done" }</button>
            </div>
        </div>
    }
}
