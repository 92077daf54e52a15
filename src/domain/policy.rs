// ==========================================
// 湖北省创业扶持可视化系统 - 扶持政策实体
// ==========================================
// 对应: 湖北省创业扶持政策清单 (Sheet4)
// ==========================================

use serde::{Deserialize, Serialize};

/// 创业扶持政策
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportPolicy {
    pub id: u32,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    /// 政策类别 (贷款贴息/场地租金/培训补贴/孵化园/设备补贴)
    #[serde(default)]
    pub category: String,
    /// 支持金额 (万元)
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub online_link: String,
}
