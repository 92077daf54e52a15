// ==========================================
// 湖北省创业扶持可视化系统 - 数据仓储层
// ==========================================
// 职责: 持有六类集合的只读数据,校验必填字段
// 红线: 加载后只读,不提供任何修改入口
// ==========================================

pub mod error;
pub mod record_store;

// 重导出核心类型
pub use error::StoreError;
pub use record_store::{RawCollections, RecordStore};
