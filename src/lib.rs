//! bizdb - 公司与发票 REST 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Company Context: 公司创建校验
//! - Invoice Context: 发票创建校验
//!
//! 应用层 (application/):
//! - Ports: DataStore 端口定义
//! - Commands / Queries: 各操作的输入
//! - Resources: CompanyResource、InvoiceResource
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
