//! SQLite Persistence - SQLite 数据库持久化实现

mod data_store;
mod database;

pub use data_store::*;
pub use database::*;
