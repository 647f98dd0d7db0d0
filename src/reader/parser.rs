use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Metadata tags of a single game, keyed by tag name.
///
/// Tag names are not predeclared; whatever names the input uses become
/// keys. A tag repeated within one block keeps the last value.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GameRecord {
    tags: BTreeMap<String, String>,
}

impl GameRecord {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    fn set_tag(&mut self, name: &str, value: &str) {
        self.tags.insert(name.to_string(), value.to_string());
    }
}

pub struct Parser {
    tag_re: Regex,
    games: Vec<GameRecord>,
    current: Option<GameRecord>,
}

impl Parser {
    fn new() -> Result<Self> {
        Ok(Parser {
            tag_re: Regex::new(r#"^\[(.*) "(.*)"\]"#)?,
            games: Vec::new(),
            current: None,
        })
    }

    pub fn parse_file(path: &PathBuf) -> Result<Vec<GameRecord>> {
        let file = File::open(path)?;
        Self::parse_reader(BufReader::new(file))
    }

    pub fn parse_reader<R: BufRead>(input: R) -> Result<Vec<GameRecord>> {
        let mut parser = Parser::new()?;

        for line_result in input.lines() {
            parser.feed(&line_result?);
        }

        Ok(parser.finish())
    }

    fn feed(&mut self, line: &str) {
        if let Some(tag_match) = self.tag_re.captures(line) {
            trace!("tag: {} = {}", &tag_match[1], &tag_match[2]);
            let record = self.current.get_or_insert_with(GameRecord::default);
            record.set_tag(&tag_match[1], &tag_match[2]);
        } else if let Some(record) = self.current.take() {
            debug!("closed game record with {} tags", record.tags.len());
            self.games.push(record);
        }
    }

    // A block is only closed by a following non-tag line, so a record
    // still open at end of input is dropped rather than counted.
    fn finish(self) -> Vec<GameRecord> {
        if self.current.is_some() {
            debug!("dropping unterminated tag block at end of input");
        }
        self.games
    }
}
