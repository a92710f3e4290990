mod gender;
mod kinds;
mod name;
mod tabular;

pub use gender::Gender;
pub use kinds::ModelKind;
pub use name::FullName;
pub use tabular::{Tabular, average_cell, optional_cell};
