//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod company_commands;
mod invoice_commands;

pub use company_commands::*;
pub use invoice_commands::*;
