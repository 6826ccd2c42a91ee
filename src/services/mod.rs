// Service module exports

pub mod calendar;
pub mod database;
pub mod event;
pub mod settings;
