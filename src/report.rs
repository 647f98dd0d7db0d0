use crate::reader::GameRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("game {game} has no PlyCount tag")]
    MissingPlyCount { game: usize },

    #[error("game {game} has an invalid PlyCount value \"{value}\"")]
    InvalidPlyCount {
        game: usize,
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("no complete games found in input")]
    NoGames,
}

/// Mean of the records' `PlyCount` tags divided by two, approximating
/// the average number of full moves per game.
pub fn average_game_length(games: &[GameRecord]) -> Result<f64, ReportError> {
    if games.is_empty() {
        return Err(ReportError::NoGames);
    }

    let mut total_plies: i64 = 0;
    for (game, record) in games.iter().enumerate() {
        let value = record
            .tag("PlyCount")
            .ok_or(ReportError::MissingPlyCount { game })?;
        total_plies += value
            .parse::<i64>()
            .map_err(|source| ReportError::InvalidPlyCount {
                game,
                value: value.to_string(),
                source,
            })?;
    }

    Ok(total_plies as f64 / (games.len() * 2) as f64)
}
