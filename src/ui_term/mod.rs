// Terminal front end for the date selector

pub mod grid;

pub use grid::{render_period, render_summary};
