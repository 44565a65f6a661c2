//! `qxiangqi` command-line front end for the quantum Xiangqi rule engine

pub mod cli;
pub mod core;

pub use qxiangqi_engine as engine;
