pub mod associations;
pub mod batch;
pub mod common;
pub mod grades;
pub mod groups;
pub mod people;
pub mod records;
pub mod reports;
pub mod subjects;

pub use common::*;
pub use records::Record;
