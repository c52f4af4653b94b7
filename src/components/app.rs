//! Root component. Owns the game reducer plus the interaction state objects
//! and translates every DOM event into dispatches — the controller of the
//! triad. The only imperative resources here are the two timer handles
//! (countdown ticker, modal expand delay).

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use super::{board::BoardGrid, clue_modal::ClueModal, score_panel::ScorePanel};
use crate::dataset;
use crate::model::{Board, ClueId, GameAction, GameState, TeamId};
use crate::state::{
    Countdown, CountdownAction, ModalAction, ModalState, Selection, SelectionAction,
    MODAL_EXPAND_DELAY_MS,
};
use crate::util::{clog, cwarn};

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| {
        let board = dataset::bundled_board().unwrap_or_else(|err| {
            cwarn(&format!("bundled clue dataset failed to parse: {err}"));
            Board::default()
        });
        GameState::new(board)
    });
    let selection = use_reducer(Selection::default);
    let modal = use_reducer(ModalState::default);
    let countdown = use_reducer(Countdown::default);

    // Live timer handles; dropping one cancels it, so replacing the ticker
    // on every start guarantees at most one active ticker.
    let ticker = use_mut_ref(|| None::<Interval>);
    let expand_timer = use_mut_ref(|| None::<Timeout>);

    {
        let game = game.clone();
        use_effect_with((), move |_| {
            clog(&format!(
                "board loaded: {} categories, {} rows",
                game.board.categories.len(),
                game.board.max_rows()
            ));
            || ()
        });
    }

    // Drop the ticker once the countdown stops ticking, whether that was an
    // explicit stop or natural expiry at zero.
    {
        let ticker = ticker.clone();
        use_effect_with(countdown.running, move |running| {
            if !*running {
                ticker.borrow_mut().take();
            }
            || ()
        });
    }

    let on_toggle: Callback<(ClueId, bool)> = {
        let game = game.clone();
        let selection = selection.clone();
        let modal = modal.clone();
        let countdown = countdown.clone();
        let ticker = ticker.clone();
        let expand_timer = expand_timer.clone();
        Callback::from(move |(id, checked): (ClueId, bool)| {
            let Some(clue) = game.board.clue(id) else {
                cwarn(&format!("toggle for unknown cell {id:?}"));
                return;
            };
            if checked {
                clog(&format!("opened clue {id:?} (${})", clue.value));
                selection.dispatch(SelectionAction::CheckCell(id));
                modal.dispatch(ModalAction::Open);
                let modal = modal.clone();
                *expand_timer.borrow_mut() = Some(Timeout::new(MODAL_EXPAND_DELAY_MS, move || {
                    modal.dispatch(ModalAction::Expand);
                }));
                countdown.dispatch(CountdownAction::Start);
                let countdown = countdown.clone();
                *ticker.borrow_mut() = Some(Interval::new(1_000, move || {
                    countdown.dispatch(CountdownAction::Tick);
                }));
            } else {
                clog(&format!("retracted clue {id:?}"));
                selection.dispatch(SelectionAction::UncheckCell(id));
                game.dispatch(GameAction::ClearWinner { id });
                ticker.borrow_mut().take();
                countdown.dispatch(CountdownAction::Stop);
            }
        })
    };

    let on_winner: Callback<TeamId> = {
        let game = game.clone();
        let selection = selection.clone();
        let modal = modal.clone();
        Callback::from(move |team: TeamId| {
            let Some(id) = selection.open else {
                cwarn("winner picked with no open clue");
                return;
            };
            clog(&format!("{team} wins clue {id:?}"));
            modal.dispatch(ModalAction::Highlight(team));
            game.dispatch(GameAction::AssignWinner { team, id });
        })
    };

    // Done leaves the countdown and the cell toggle exactly as they are;
    // only the dialog state unwinds.
    let on_done: Callback<()> = {
        let modal = modal.clone();
        Callback::from(move |()| modal.dispatch(ModalAction::Dismiss))
    };

    let on_reveal: Callback<()> = {
        let modal = modal.clone();
        Callback::from(move |()| modal.dispatch(ModalAction::RevealQuestion))
    };

    let on_team_count_change: Callback<u32> = {
        let game = game.clone();
        Callback::from(move |count: u32| {
            clog(&format!("team count set to {count}"));
            game.dispatch(GameAction::SetTeamCount(count));
        })
    };

    let (question, answer) = selection
        .open
        .and_then(|id| game.board.clue(id))
        .map(|clue| (clue.question.clone(), clue.answer.clone()))
        .unwrap_or_default();

    html! {
        <div id="root">
            <header id="top-bar">
                <h1>{ "Trivia Board" }</h1>
                <ScorePanel
                    rows={game.scoreboard_rows()}
                    team_count={game.team_count}
                    on_team_count_change={on_team_count_change}
                />
            </header>
            <BoardGrid
                board={game.board.clone()}
                selection={(*selection).clone()}
                on_toggle={on_toggle}
            />
            <ClueModal
                answer={answer}
                question={question}
                modal={*modal}
                countdown={*countdown}
                team_count={game.team_count}
                on_reveal={on_reveal}
                on_winner={on_winner}
                on_done={on_done}
            />
        </div>
    }
}
