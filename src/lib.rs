#[macro_use]
extern crate log;

#[macro_use]
extern crate derive_builder;

pub mod model;
pub mod query;
pub mod samples;
pub mod time;
