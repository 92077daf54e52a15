// ==========================================
// 湖北省创业扶持可视化系统 - 创业导师实体
// ==========================================
// 对应: 创业导师名录 (Sheet5)
// ==========================================

use serde::{Deserialize, Serialize};

/// 创业导师
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: u32,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub specialty: String,
    /// 经验描述 (自由文本)
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub experience_years: u32,
    /// 评分 (0-5, 来源未强制范围,原样透传)
    #[serde(default)]
    pub rating: f64,
    /// 指导学员数
    #[serde(default)]
    pub students: u32,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}
