pub mod chat;
pub mod recommend;
mod utils;
