// ==========================================
// 湖北省创业扶持可视化系统 - 引擎层
// ==========================================
// 职责: 聚合统计 / 图表投影 / 筛选搜索 / 分页
// 红线: 全部为纯函数,同输入必同输出
// 红线: 引擎不做 I/O,不持可变状态
// ==========================================

pub mod error;
pub mod filter;
pub mod paginator;
pub mod projector;
pub mod stats;

// 重导出核心引擎
pub use error::EngineError;
pub use filter::{ResolvedTraining, TrainingFilterEngine, TrainingQuery};
pub use paginator::{paginate, Page};
pub use projector::{
    financing_radar_series, policy_amount_series, project, project_xy, ChartPoint, ScatterPoint,
};
pub use stats::{count_distinct, sum_field, total_training_sessions, DashboardStats};
