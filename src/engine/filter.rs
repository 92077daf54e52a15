// ==========================================
// 湖北省创业扶持可视化系统 - 筛选搜索引擎
// ==========================================
// 职责: 培训明细的有效性过滤、填充解析与组合筛选
// 红线: 筛选只过滤不排序,保持原始相对顺序
// 红线: 填充解析只依赖原始顺序与原始值,
//       与任何激活的筛选条件无关
// ==========================================

mod core;


pub use self::core::{ResolvedTraining, TrainingFilterEngine, TrainingQuery};
