#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Content store verification for ensuring database/filesystem consistency

mod mapper;
mod probe;
mod validator;

pub use mapper::map_to_path;
pub use probe::{probe_file, FileProbe};
pub use validator::ContentValidator;
