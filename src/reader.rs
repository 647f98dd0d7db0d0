mod parser;

pub use self::parser::{GameRecord, Parser};

use anyhow::Result;
use std::path::PathBuf;

pub fn parse_pgn_file(pgn_file_path: &PathBuf) -> Result<Vec<GameRecord>> {
    Parser::parse_file(pgn_file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_records_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[Event \"Round robin\"]\n[PlyCount \"40\"]\n1. e4 e5 *\n"
        )
        .unwrap();

        let games = parse_pgn_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].tag("Event"), Some("Round robin"));
        assert_eq!(games[0].tag("PlyCount"), Some("40"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_pgn_file(&PathBuf::from("/no/such/file.pgn")).is_err());
    }
}
