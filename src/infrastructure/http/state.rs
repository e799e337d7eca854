//! Application State
//!
//! 持有基于注入的 DataStore 构造的资源

use std::sync::Arc;

use crate::application::{CompanyResource, DataStorePort, InvoiceResource};

/// 应用状态
///
/// 请求之间没有共享的可变状态，一致性交给存储层
pub struct AppState {
    pub companies: CompanyResource,
    pub invoices: InvoiceResource,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn DataStorePort>) -> Self {
        Self {
            companies: CompanyResource::new(store.clone()),
            invoices: InvoiceResource::new(store),
        }
    }
}
