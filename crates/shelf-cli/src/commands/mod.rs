pub mod bom;
pub mod chat;
pub mod quote;
pub mod utils;
