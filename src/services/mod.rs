// Service module exports

pub mod calendar;
pub mod session;
pub mod settings;
