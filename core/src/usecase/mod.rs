pub mod admin;
pub mod overview;
