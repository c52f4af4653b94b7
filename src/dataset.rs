//! Clue dataset loading.
//! The board seed is external, read-only data: a JSON file bundled at build
//! time and deserialized once at startup. Claims always start empty here;
//! they only ever change through the game reducer.

use serde::Deserialize;

use crate::model::{Board, Category, Clue};

/// Sample 6x5 web-trivia board shipped with the app.
pub const BUNDLED_CLUES: &str = include_str!("../assets/clues.json");

#[derive(Debug, Deserialize)]
struct ClueData {
    question: String,
    answer: String,
    value: u64,
}

#[derive(Debug, Deserialize)]
struct CategoryData {
    name: String,
    clues: Vec<ClueData>,
}

#[derive(Debug, Deserialize)]
struct BoardData {
    categories: Vec<CategoryData>,
}

impl From<BoardData> for Board {
    fn from(data: BoardData) -> Self {
        Board {
            categories: data
                .categories
                .into_iter()
                .map(|category| Category {
                    name: category.name,
                    clues: category
                        .clues
                        .into_iter()
                        .map(|clue| Clue {
                            question: clue.question,
                            answer: clue.answer,
                            value: clue.value,
                            claimed_by: None,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Parse a board out of dataset JSON. Any positive category/clue count is
/// accepted; the grid shape is whatever the data says.
pub fn parse_board(json: &str) -> Result<Board, serde_json::Error> {
    let data: BoardData = serde_json::from_str(json)?;
    Ok(data.into())
}

/// The board the app starts with. The bundled dataset is part of the build,
/// so a parse failure here is a packaging defect; fall back to an empty board
/// and let the caller log it.
pub fn bundled_board() -> Result<Board, serde_json::Error> {
    parse_board(BUNDLED_CLUES)
}
