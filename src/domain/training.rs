// ==========================================
// 湖北省创业扶持可视化系统 - 培训实体
// ==========================================
// 对应: 培训信息清单 (Sheet3) + 培训期数明细数据集
// ==========================================
// 两套数据粒度不同: TrainingOrg 是驾驶舱级汇总,
// TrainingRecord 是清单页的逐机构明细
// ==========================================

use crate::config;
use serde::{Deserialize, Serialize};

/// 培训机构 (驾驶舱级汇总)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingOrg {
    pub id: u32,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub content: String,
    /// 培训期数
    #[serde(default)]
    pub periods: u32,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub students: u32,
    /// 满意度 (0-5, 来源未强制范围,原样透传)
    #[serde(default)]
    pub satisfaction: f64,
}

/// 培训期数明细记录
///
/// 来源数据带有占位行: institution 为 "nan"(不区分大小写)
/// 的记录是结构性无效记录,所有聚合与清单均须排除。
///
/// city/address 允许为空,显示时按填充规则继承最近一条
/// 前序有效记录的值 (见 engine::filter)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub courses: Vec<String>,
    /// 培训期数
    #[serde(default)]
    pub sessions: u32,
    /// 培训对象
    #[serde(default)]
    pub audience: String,
    /// 联系方式
    #[serde(default)]
    pub contact: String,
}

impl TrainingRecord {
    /// 是否为有效记录
    ///
    /// 机构名非空且不是哨兵值 "nan"(不区分大小写)
    pub fn is_valid(&self) -> bool {
        let name = self.institution.trim();
        !name.is_empty() && !name.eq_ignore_ascii_case(config::NAN_SENTINEL)
    }
}
