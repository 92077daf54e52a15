// ==========================================
// 湖北省创业扶持可视化系统 - API层错误类型
// ==========================================
// 职责: 汇聚仓储/引擎错误,补充输入校验错误
// 工具: thiserror 派生宏
// ==========================================

use crate::engine::EngineError;
use crate::store::StoreError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务输入错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 下层错误透传 =====
    #[error("数据装载失败: {0}")]
    Store(#[from] StoreError),

    #[error("视图计算失败: {0}")]
    Engine(#[from] EngineError),
}

/// API层结果类型
pub type ApiResult<T> = Result<T, ApiError>;
