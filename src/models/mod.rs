// Module exports for models

pub mod calendar_day;
pub mod capabilities;
pub mod date_rule;
pub mod selection;
pub mod session;
pub mod settings;
