// ==========================================
// 湖北省创业扶持可视化系统 - 融资产品实体
// ==========================================
// 对应: 融资信息清单 (Sheet2)
// ==========================================

use serde::{Deserialize, Serialize};

/// 融资产品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingProduct {
    pub id: u32,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// 政策原文 (自由文本)
    #[serde(default)]
    pub policy: String,
    #[serde(default)]
    pub online_link: String,
    #[serde(default)]
    pub finance_contact: String,
    #[serde(default)]
    pub finance_phone: String,
    #[serde(default)]
    pub hr_contact: String,
    #[serde(default)]
    pub hr_phone: String,
    /// 最高贷款额度 (万元)
    #[serde(default)]
    pub max_amount: f64,
    /// 利率描述,如 "LPR+150BPs" (自由文本,不解析)
    #[serde(default)]
    pub interest_rate: String,
}
