// ==========================================
// 湖北省创业扶持可视化系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    // ===== 分页错误 =====
    /// 页码越界不在引擎内静默截断,由调用方自行钳制
    #[error("页码越界: page={page}, 有效范围 [1, {total_pages}]")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("每页记录数必须大于 0")]
    InvalidPageSize,
}
