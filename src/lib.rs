// Meal Calendar Library
// Date selection for meal planning, with session and settings support

pub mod models;
pub mod services;
pub mod ui_term;
pub mod utils;
