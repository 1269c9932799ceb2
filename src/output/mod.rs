pub mod errors;
pub mod rows;
