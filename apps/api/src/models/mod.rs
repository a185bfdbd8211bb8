pub mod bio;
pub mod employee;
pub mod resume;
