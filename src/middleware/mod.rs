pub mod owner;
pub mod permission;
