//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod data_store;

pub use data_store::{DataStorePort, Row, StoreError};

#[cfg(test)]
pub(crate) mod testing;
