//! Domain models for campus navigation and day planning.
//!
//! Provides the data types shared by the graph, search, and scheduling
//! components. All models derive serde traits so a consumer can ingest
//! activity records from an already-parsed task file.

mod activity;
mod schedule;
mod time;

pub use activity::{Activity, Priority};
pub use schedule::Schedule;
pub use time::TimeOfDay;
