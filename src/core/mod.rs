pub mod attendance;
pub mod auth;
pub mod chat_parser;
pub mod sheet;
