// ==========================================
// 湖北省创业扶持可视化系统 - 场地实体
// ==========================================
// 对应: 场地信息清单 (Sheet1)
// ==========================================

use serde::{Deserialize, Serialize};

/// 创业场地
///
/// 面积单位为平方米。数据中 available_area 均不大于 total_area,
/// 但来源未强制该约束,本层原样透传不做校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: u32,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// 场地级别标签,多值以顿号分隔 (如 "国家级、省级、市级")
    #[serde(default)]
    pub category: String,
    /// 总场地面积 (㎡)
    #[serde(default)]
    pub total_area: f64,
    /// 空余面积 (㎡)
    #[serde(default)]
    pub available_area: f64,
    #[serde(default)]
    pub facilities: String,
    #[serde(default)]
    pub policies: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: String,
}
