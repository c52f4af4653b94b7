//! Core data model for the trivia board.
//! Holds the board (categories of clues), the per-team score map, and the
//! configured team count, with all mutation going through [`GameAction`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// 1-based team number as shown to the presenter ("Team 1", "Team 2", ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Structured board position: which category column, which row within it.
/// Passed alongside every cell event instead of a string-encoded position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClueId {
    pub category: usize,
    pub row: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub value: u64,
    /// The team the presenter awarded this clue to, if any. The only field
    /// that changes after the dataset is loaded.
    pub claimed_by: Option<TeamId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Display order; the row index doubles as the clue's identity within
    /// the category.
    pub clues: Vec<Clue>,
}

/// The full game board. Any positive category/clue count is valid; the sample
/// dataset happens to be 6x5.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub categories: Vec<Category>,
}

impl Board {
    pub fn clue(&self, id: ClueId) -> Option<&Clue> {
        self.categories.get(id.category)?.clues.get(id.row)
    }

    fn clue_mut(&mut self, id: ClueId) -> Option<&mut Clue> {
        self.categories.get_mut(id.category)?.clues.get_mut(id.row)
    }

    /// Longest clue column, used by the view to size the grid.
    pub fn max_rows(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.clues.len())
            .max()
            .unwrap_or(0)
    }
}

pub const DEFAULT_TEAM_COUNT: u32 = 3;

/// Authoritative game state: the board plus scoring. Scores are derived and
/// always recomputable from the board's claims.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub scores: BTreeMap<TeamId, u64>,
    /// Operator-configured number of teams shown on the scoreboard and as
    /// winner buttons. Changing it never touches recorded claims.
    pub team_count: u32,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            scores: BTreeMap::new(),
            team_count: DEFAULT_TEAM_COUNT,
        }
    }

    /// Score shown for a team: its computed entry, or 0 when it has never
    /// held a claim.
    pub fn score_of(&self, team: TeamId) -> u64 {
        self.scores.get(&team).copied().unwrap_or(0)
    }

    /// Award the clue at `id` to `team`. Overwriting another team's claim is
    /// allowed; re-awarding the same team is a no-op in effect.
    pub fn assign_winner(&mut self, team: TeamId, id: ClueId) {
        if let Some(clue) = self.board.clue_mut(id) {
            clue.claimed_by = Some(team);
        }
    }

    /// Retract whatever claim the clue at `id` holds.
    pub fn clear_winner(&mut self, id: ClueId) {
        if let Some(clue) = self.board.clue_mut(id) {
            clue.claimed_by = None;
        }
    }

    /// Rows for the visible scoreboard: exactly the configured teams in
    /// order, each with its current score (0 when it has none recorded).
    pub fn scoreboard_rows(&self) -> Vec<(TeamId, u64)> {
        (1..=self.team_count)
            .map(|n| (TeamId(n), self.score_of(TeamId(n))))
            .collect()
    }

    /// Rebuild the score map from scratch: zero every team already present,
    /// then sum `value` over each claimed clue, inserting entries for teams
    /// seen for the first time. Total and idempotent.
    pub fn recompute_scores(&mut self) {
        for score in self.scores.values_mut() {
            *score = 0;
        }
        for category in &self.board.categories {
            for clue in &category.clues {
                if let Some(team) = clue.claimed_by {
                    *self.scores.entry(team).or_insert(0) += clue.value;
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Presenter picked a winner for the clue at `id`.
    AssignWinner { team: TeamId, id: ClueId },
    /// Presenter retracted the clue at `id` (cell toggled back off).
    ClearWinner { id: ClueId },
    /// Operator changed the number of teams. Claims are kept as-is; teams
    /// above the new count simply have no scoreboard row to show in.
    SetTeamCount(u32),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            GameAction::AssignWinner { team, id } => {
                new.assign_winner(team, id);
                new.recompute_scores();
            }
            GameAction::ClearWinner { id } => {
                new.clear_winner(id);
                new.recompute_scores();
            }
            GameAction::SetTeamCount(count) => {
                new.team_count = count.max(1);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(question: &str, value: u64) -> Clue {
        Clue {
            question: question.to_string(),
            answer: format!("answer to {question}"),
            value,
            claimed_by: None,
        }
    }

    fn single_category_board(values: &[u64]) -> Board {
        Board {
            categories: vec![Category {
                name: "X".to_string(),
                clues: values.iter().map(|&v| clue("q", v)).collect(),
            }],
        }
    }

    fn id(category: usize, row: usize) -> ClueId {
        ClueId { category, row }
    }

    #[test]
    fn scores_equal_sum_of_claimed_values() {
        let mut game = GameState::new(single_category_board(&[200, 400]));
        game.assign_winner(TeamId(1), id(0, 0));
        game.assign_winner(TeamId(2), id(0, 1));
        game.recompute_scores();
        assert_eq!(game.score_of(TeamId(1)), 200);
        assert_eq!(game.score_of(TeamId(2)), 400);
    }

    #[test]
    fn reassigning_moves_value_between_teams() {
        // Team 1 takes over clue 1 from team 2; the full value moves with it.
        let mut game = GameState::new(single_category_board(&[200, 400]));
        game.assign_winner(TeamId(1), id(0, 0));
        game.assign_winner(TeamId(2), id(0, 1));
        game.recompute_scores();
        game.assign_winner(TeamId(1), id(0, 1));
        game.recompute_scores();
        assert_eq!(game.score_of(TeamId(1)), 600);
        assert_eq!(game.score_of(TeamId(2)), 0);
        // Team 2 stays in the map at zero rather than vanishing.
        assert_eq!(game.scores.get(&TeamId(2)), Some(&0));
    }

    #[test]
    fn clearing_removes_value_from_holder() {
        let mut game = GameState::new(single_category_board(&[200, 400]));
        game.assign_winner(TeamId(1), id(0, 0));
        game.recompute_scores();
        assert_eq!(game.score_of(TeamId(1)), 200);
        game.clear_winner(id(0, 0));
        game.recompute_scores();
        assert_eq!(game.score_of(TeamId(1)), 0);
    }

    #[test]
    fn clearing_unclaimed_clue_is_noop() {
        let mut game = GameState::new(single_category_board(&[200, 400]));
        let before = game.clone();
        game.clear_winner(id(0, 0));
        game.recompute_scores();
        assert_eq!(game.board, before.board);
        assert!(game.scores.is_empty());
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut game = GameState::new(single_category_board(&[200, 400, 600]));
        game.assign_winner(TeamId(3), id(0, 2));
        game.recompute_scores();
        let first = game.scores.clone();
        game.recompute_scores();
        assert_eq!(game.scores, first);
    }

    #[test]
    fn unknown_positions_are_ignored() {
        let mut game = GameState::new(single_category_board(&[200]));
        game.assign_winner(TeamId(1), id(5, 0));
        game.assign_winner(TeamId(1), id(0, 9));
        game.recompute_scores();
        assert!(game.scores.is_empty());
    }

    #[test]
    fn reducer_assign_and_clear_roundtrip() {
        let game = Rc::new(GameState::new(single_category_board(&[200, 400])));
        let game = game.reduce(GameAction::AssignWinner {
            team: TeamId(2),
            id: id(0, 1),
        });
        assert_eq!(game.score_of(TeamId(2)), 400);
        let game = game.reduce(GameAction::ClearWinner { id: id(0, 1) });
        assert_eq!(game.score_of(TeamId(2)), 0);
        assert_eq!(game.board.clue(id(0, 1)).unwrap().claimed_by, None);
    }

    #[test]
    fn team_count_change_keeps_claims() {
        let game = Rc::new(GameState::new(single_category_board(&[200])));
        let game = game.reduce(GameAction::AssignWinner {
            team: TeamId(3),
            id: id(0, 0),
        });
        let game = game.reduce(GameAction::SetTeamCount(2));
        assert_eq!(game.team_count, 2);
        assert_eq!(
            game.board.clue(id(0, 0)).unwrap().claimed_by,
            Some(TeamId(3))
        );
        // The orphaned team's score is still computed, just not displayed.
        assert_eq!(game.score_of(TeamId(3)), 200);
    }

    #[test]
    fn scoreboard_shrinks_and_grows_with_team_count() {
        let game = Rc::new(GameState::new(single_category_board(&[200])));
        let game = game.reduce(GameAction::AssignWinner {
            team: TeamId(2),
            id: id(0, 0),
        });
        assert_eq!(game.scoreboard_rows().len(), 3);
        let game = game.reduce(GameAction::SetTeamCount(2));
        assert_eq!(
            game.scoreboard_rows(),
            vec![(TeamId(1), 0), (TeamId(2), 200)]
        );
        let game = game.reduce(GameAction::SetTeamCount(5));
        assert_eq!(game.scoreboard_rows().len(), 5);
        assert_eq!(game.scoreboard_rows()[4], (TeamId(5), 0));
    }

    #[test]
    fn team_count_never_drops_below_one() {
        let game = Rc::new(GameState::new(Board::default()));
        let game = game.reduce(GameAction::SetTeamCount(0));
        assert_eq!(game.team_count, 1);
    }

    #[test]
    fn max_rows_over_uneven_columns() {
        let mut board = single_category_board(&[200, 400]);
        board.categories.push(Category {
            name: "Y".to_string(),
            clues: vec![clue("q", 200), clue("q", 400), clue("q", 600)],
        });
        assert_eq!(board.max_rows(), 3);
        assert_eq!(Board::default().max_rows(), 0);
    }
}
