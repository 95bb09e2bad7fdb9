pub mod command;
pub mod validate;
