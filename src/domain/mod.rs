// ==========================================
// 湖北省创业扶持可视化系统 - 领域模型层
// ==========================================
// 职责: 定义六类清单/名录实体与共享类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================
// 实体间只通过 city 字段软关联,无引用完整性
// 所有实体加载后只读,会话期间不增删改
// ==========================================

pub mod financing;
pub mod mentor;
pub mod policy;
pub mod service;
pub mod training;
pub mod types;
pub mod venue;

// 重导出核心类型
pub use financing::FinancingProduct;
pub use mentor::Mentor;
pub use policy::SupportPolicy;
pub use service::ServiceInstitution;
pub use training::{TrainingOrg, TrainingRecord};
pub use types::CollectionKind;
pub use venue::Venue;
