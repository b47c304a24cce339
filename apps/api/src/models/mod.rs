pub mod candidate;
pub mod internship;
pub mod recommendation;
