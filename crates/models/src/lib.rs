pub mod actor;
pub mod days;
pub mod grade;
pub mod hold;
pub mod requisite;
pub mod standing;
pub mod term;
