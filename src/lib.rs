// ==========================================
// 湖北省创业扶持可视化系统 - 核心库
// ==========================================
// 技术栈: Rust (纯同步、无 I/O 核心)
// 系统定位: 数据聚合与视图投影引擎
// ==========================================
// 职责: 将静态记录集合转换为统计数字、
//       图表序列与筛选分页视图
// 红线: 核心层不做网络/文件 I/O,不持可变状态
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 记录存储
pub mod store;

// 引擎层 - 聚合/投影/筛选/分页
pub mod engine;

// 配置层 - 展示常量
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CollectionKind, FinancingProduct, Mentor, ServiceInstitution, SupportPolicy, TrainingOrg,
    TrainingRecord, Venue,
};

// 仓储
pub use store::{RawCollections, RecordStore, StoreError};

// 引擎
pub use engine::{
    paginate, ChartPoint, DashboardStats, EngineError, Page, ResolvedTraining, ScatterPoint,
    TrainingFilterEngine, TrainingQuery,
};

// API
pub use api::{ApiError, ApiResult, DashboardApi, TrainingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "湖北·四清单两名录可视化系统";
