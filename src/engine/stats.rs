// ==========================================
// 湖北省创业扶持可视化系统 - 聚合统计引擎
// ==========================================
// 职责: 驾驶舱数字瓦片的汇总计算
// 红线: 无状态,全部纯函数
// 红线: 培训总期数在驾驶舱瓦片与清单页表头
//       共用同一实现,两处数字必须一致
// ==========================================
// 容错策略: 非数值字段按 0 计,缺失按 0 计,
//           聚合永不报错 (展示层韧性优先)
// ==========================================

use crate::domain::TrainingRecord;
use crate::store::RecordStore;
use serde::Serialize;
use std::collections::HashSet;

/// 对集合求某数值字段之和
///
/// 选择器返回 None 表示该记录字段脏/缺失,按 0 计;
/// 空集合返回 0
pub fn sum_field<T>(records: &[T], selector: impl Fn(&T) -> Option<f64>) -> f64 {
    records
        .iter()
        .map(|record| selector(record).unwrap_or(0.0))
        .sum()
}

/// 统计集合内某字段的去重取值数
pub fn count_distinct<'a, T>(records: &'a [T], selector: impl Fn(&'a T) -> &'a str) -> usize {
    records
        .iter()
        .map(selector)
        .collect::<HashSet<&str>>()
        .len()
}

/// 培训总期数
///
/// 只累加有效记录 (机构名非空且非 "nan" 占位行) 的期数。
/// 驾驶舱瓦片与培训清单页表头都必须调用本函数。
pub fn total_training_sessions(records: &[TrainingRecord]) -> u64 {
    records
        .iter()
        .filter(|record| record.is_valid())
        .map(|record| u64::from(record.sessions))
        .sum()
}

/// 驾驶舱统计数字
///
/// 九个数字瓦片,金额单位万元,面积单位平方米
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_venues: usize,
    /// 总场地面积 (㎡)
    pub total_area: f64,
    /// 空余面积 (㎡)
    pub available_area: f64,
    pub total_financing: usize,
    /// 培训总期数 (与清单页表头共用口径)
    pub total_training_sessions: u64,
    pub total_policies: usize,
    pub total_mentors: usize,
    pub total_services: usize,
    /// 扶持政策总支持金额 (万元)
    pub total_support_amount: f64,
}

impl DashboardStats {
    /// 从记录存储计算全部瓦片数字
    pub fn compute(store: &RecordStore) -> Self {
        let stats = Self {
            total_venues: store.venues().len(),
            total_area: sum_field(store.venues(), |v| Some(v.total_area)),
            available_area: sum_field(store.venues(), |v| Some(v.available_area)),
            total_financing: store.financing().len(),
            total_training_sessions: total_training_sessions(store.training_records()),
            total_policies: store.policies().len(),
            total_mentors: store.mentors().len(),
            total_services: store.services().len(),
            total_support_amount: sum_field(store.policies(), |p| Some(p.amount)),
        };
        tracing::debug!(?stats, "驾驶舱统计计算完成");
        stats
    }
}
