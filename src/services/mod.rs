// Service module exports

pub mod calendar;
pub mod compliance;
pub mod cost;
pub mod filter;
pub mod fraud;
pub mod grants;
pub mod reports;
pub mod sample_data;
pub mod settings;
