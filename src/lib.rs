// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod config;
pub mod data;
pub mod parser;
pub mod solver;

mod grid;

use crate::config::Strategy;
use crate::solver::SearchReport;

pub trait Solve {
    fn solve(&self, strategy: Strategy, print_status: bool) -> SearchReport;
}
