pub mod quick;
pub mod selection;
