pub mod channel;
pub mod command;
pub mod guild;
pub mod permission;
