//! Scoreboard and team-count control. The list is a straight projection of
//! the configured team rows; changing the count rebuilds it on the spot.

use yew::prelude::*;

use crate::model::TeamId;
use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct ScorePanelProps {
    /// One `(team, score)` pair per configured team, in display order.
    pub rows: Vec<(TeamId, u64)>,
    pub team_count: u32,
    pub on_team_count_change: Callback<u32>,
}

#[function_component(ScorePanel)]
pub fn score_panel(props: &ScorePanelProps) -> Html {
    let onchange = {
        let on_team_count_change = props.on_team_count_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            match input.value().parse::<u32>() {
                Ok(count) if count >= 1 => on_team_count_change.emit(count),
                _ => cwarn(&format!("ignoring team count input {:?}", input.value())),
            }
        })
    };

    let items = props.rows.iter().map(|&(team, score)| {
        html! {
            <li key={team.0}>
                <span>{ format!("{team}:") }</span>
                <span class="score-value">{ score }</span>
            </li>
        }
    });

    html! {
        <div class="score-panel">
            <label class="team-count">
                { "Teams" }
                <input
                    type="number"
                    min="1"
                    value={props.team_count.to_string()}
                    {onchange}
                />
            </label>
            <ul class="score-list">
                { for items }
            </ul>
        </div>
    }
}
