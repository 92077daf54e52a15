// ==========================================
// 湖北省创业扶持可视化系统 - 服务机构实体
// ==========================================
// 对应: 公共就业服务机构名录 (Sheet6)
// ==========================================

use serde::{Deserialize, Serialize};

/// 公共就业服务机构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstitution {
    pub id: u32,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// 机构级别 (市级/区级)
    #[serde(default)]
    pub category: String,
    /// 提供的服务 (自由文本)
    #[serde(default)]
    pub services: String,
    /// 服务客户数
    #[serde(default)]
    pub clients: u32,
    /// 满意度 (0-5, 来源未强制范围,原样透传)
    #[serde(default)]
    pub satisfaction: f64,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub online_link: String,
}
