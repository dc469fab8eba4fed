pub mod rubric;
pub mod source;
