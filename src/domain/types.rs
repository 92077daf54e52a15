// ==========================================
// 湖北省创业扶持可视化系统 - 共享类型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 记录集合类别
///
/// 对应原始数据的四张清单与两张名录,外加培训明细数据集
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// 场地信息清单
    Venues,
    /// 融资信息清单
    Financing,
    /// 培训信息清单 (驾驶舱级汇总)
    Training,
    /// 创业扶持政策清单
    Policies,
    /// 创业导师名录
    Mentors,
    /// 公共就业服务机构名录
    Services,
    /// 培训期数明细数据集 (清单页)
    TrainingRecords,
}

impl CollectionKind {
    /// 集合在原始数据中的键名
    pub fn key(&self) -> &'static str {
        match self {
            CollectionKind::Venues => "venues",
            CollectionKind::Financing => "financing",
            CollectionKind::Training => "training",
            CollectionKind::Policies => "policies",
            CollectionKind::Mentors => "mentors",
            CollectionKind::Services => "services",
            CollectionKind::TrainingRecords => "trainingRecords",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
