use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::config::{Heuristic, Strategy};
use crate::data::{BLANK, CELLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Length(usize),
    InvalidSymbol(usize, char),
    DuplicateSymbol(usize, char),
    UnknownMethod(String),
    MissingOption(String),
    UnexpectedOption(String),
    InvalidHeuristic(String),
    InvalidDepthLimit(String),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParserErr::Length(len) => {
                write!(f, "State must have exactly {} symbols, got {}", CELLS, len)
            }
            ParserErr::InvalidSymbol(i, c) => write!(f, "Invalid symbol {:?} at position {}", c, i),
            ParserErr::DuplicateSymbol(i, c) => {
                write!(f, "Symbol {:?} at position {} appears more than once", c, i)
            }
            ParserErr::UnknownMethod(m) => write!(
                f,
                "Unknown search method {:?} - use BFS, DFS, DLS, GBFS or AStar",
                m
            ),
            ParserErr::MissingOption(m) => write!(f, "Search method {} needs an option", m),
            ParserErr::UnexpectedOption(m) => write!(f, "Search method {} takes no option", m),
            ParserErr::InvalidHeuristic(o) => write!(f, "Invalid heuristic {:?} - use h1 or h2", o),
            ParserErr::InvalidDepthLimit(o) => {
                write!(f, "Invalid depth limit {:?} - use a non-negative integer", o)
            }
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_state(s)
    }
}

impl FromStr for Heuristic {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h1" => Ok(Heuristic::Misplaced),
            "h2" => Ok(Heuristic::Manhattan),
            _ => Err(ParserErr::InvalidHeuristic(s.to_owned())),
        }
    }
}

fn is_symbol(c: char) -> bool {
    match c {
        '1'..='9' | 'A'..='F' => true,
        _ => c == BLANK,
    }
}

/// Validates that `state` is a permutation of the 16 symbols.
pub fn parse_state(state: &str) -> Result<Board, ParserErr> {
    let len = state.chars().count();
    if len != CELLS {
        return Err(ParserErr::Length(len));
    }

    let mut seen = Vec::with_capacity(CELLS);
    for (i, c) in state.chars().enumerate() {
        if !is_symbol(c) {
            return Err(ParserErr::InvalidSymbol(i, c));
        }
        if seen.contains(&c) {
            return Err(ParserErr::DuplicateSymbol(i, c));
        }
        seen.push(c);
    }

    Ok(Board::from_state(state))
}

fn require_option<'a>(method: &str, option: Option<&'a str>) -> Result<&'a str, ParserErr> {
    option.ok_or_else(|| ParserErr::MissingOption(method.to_owned()))
}

/// Resolves the method token and its option.
pub fn parse_strategy(method: &str, option: Option<&str>) -> Result<Strategy, ParserErr> {
    match method {
        "BFS" | "DFS" => {
            if option.is_some() {
                return Err(ParserErr::UnexpectedOption(method.to_owned()));
            }
            if method == "BFS" {
                Ok(Strategy::Bfs)
            } else {
                Ok(Strategy::Dfs)
            }
        }
        "GBFS" => Ok(Strategy::Greedy(require_option(method, option)?.parse()?)),
        "AStar" => Ok(Strategy::AStar(require_option(method, option)?.parse()?)),
        "DLS" => {
            let option = require_option(method, option)?;
            // u32::from_str also takes a leading '+'
            if !option.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(ParserErr::InvalidDepthLimit(option.to_owned()));
            }
            let limit = option
                .parse::<u32>()
                .map_err(|_| ParserErr::InvalidDepthLimit(option.to_owned()))?;
            Ok(Strategy::Dls(limit))
        }
        _ => Err(ParserErr::UnknownMethod(method.to_owned())),
    }
}
