// ==========================================
// 湖北省创业扶持可视化系统 - API 层
// ==========================================
// 职责: 提供面向展示层的业务接口,
//       封装引擎层的聚合/投影/筛选/分页
// ==========================================

pub mod error;
pub mod dashboard_api;
pub mod training_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use dashboard_api::{DashboardApi, NavigationCounts};
pub use training_api::{
    FilterOptions, TrainingApi, TrainingPageQuery, TrainingPageResponse, TrainingRow,
};
