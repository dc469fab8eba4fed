#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod core;
pub mod error;
pub mod feedback;
pub mod gateway;
pub mod links;
pub mod providers;
pub mod report;
pub mod utils;

pub use config::Config;
pub use crate::core::rubric::{EvaluationResult, evaluate};
pub use error::{Result, ZentaoError};
