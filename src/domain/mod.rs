pub mod project_row;
pub mod severity;
