// ==========================================
// 湖北省创业扶持可视化系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::CollectionKind;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    // ===== 数据格式错误 =====
    #[error("数据格式错误: 集合={collection}, 第{index}条记录缺少必填字段 {field}")]
    MalformedInput {
        collection: CollectionKind,
        index: usize,
        field: &'static str,
    },

    #[error("JSON 解析失败: {0}")]
    ParseError(#[from] serde_json::Error),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
