mod application;
mod file_type;
mod operator;
mod size_unit;

pub use application::{Application, Colors, Styles};
pub use file_type::FileType;
pub use operator::OperatorType;
pub use size_unit::{SIZE_UNITS, SizeUnit, ToleranceResults};
