pub mod case;
pub mod field;
pub mod survey;
