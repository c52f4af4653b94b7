//! The category/clue grid. Every visual flag (selection border, faded value
//! label, toggle state) is projected from [`Selection`]; the component never
//! reads anything back out of the DOM.

use yew::prelude::*;

use crate::model::{Board, ClueId};
use crate::state::Selection;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardGridProps {
    pub board: Board,
    pub selection: Selection,
    /// Emitted with the structured cell position and the new toggle state.
    pub on_toggle: Callback<(ClueId, bool)>,
}

#[function_component(BoardGrid)]
pub fn board_grid(props: &BoardGridProps) -> Html {
    let columns = props.board.categories.len();
    if columns == 0 {
        return html! {<div class="board-empty">{"No clue data loaded."}</div>};
    }
    let grid_style = format!(
        "display:grid; grid-template-columns:repeat({columns}, minmax(120px, 1fr)); gap:6px;"
    );

    let headers = props.board.categories.iter().map(|category| {
        html! {<div class="category">{ &category.name }</div>}
    });

    let rows = (0..props.board.max_rows()).map(|row| {
        let cells = (0..columns).map(|category| {
            let id = ClueId { category, row };
            match props.board.clue(id) {
                Some(clue) => {
                    let checked = props.selection.is_checked(id);
                    let onchange = {
                        let on_toggle = props.on_toggle.clone();
                        Callback::from(move |e: Event| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            on_toggle.emit((id, input.checked()));
                        })
                    };
                    html! {
                        <label
                            key={format!("{category}-{row}")}
                            class={classes!(
                                "square",
                                props.selection.is_outlined(id).then_some("square-border"),
                            )}
                        >
                            <input type="checkbox" {checked} {onchange} />
                            <span class={classes!("square-value", checked.then_some("fade"))}>
                                { format!("${}", clue.value) }
                            </span>
                        </label>
                    }
                }
                // Uneven column: keep the grid aligned with a blank cell.
                None => html! {<div key={format!("{category}-{row}")} class="square square-blank"></div>},
            }
        });
        html! { for cells }
    });

    html! {
        <div class="board" style={grid_style}>
            { for headers }
            { for rows }
        </div>
    }
}
