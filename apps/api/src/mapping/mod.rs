pub mod calculator;
pub mod handlers;
pub mod view;
