pub mod catalog;
pub mod skills;
