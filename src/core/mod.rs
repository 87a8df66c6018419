pub mod classify;
pub mod cli;
pub mod context;
pub mod grouping;
pub mod models;
pub mod roster;
pub mod types;
