// ==========================================
// 湖北省创业扶持可视化系统 - 驾驶舱 API
// ==========================================
// 职责: 首页数字瓦片 + 六个模块图表的序列投影
// 架构: API 层 → 引擎层 (stats / projector)
// ==========================================
// 红线: 培训期数瓦片与清单页表头共用
//       total_training_sessions,两处必须一致
// ==========================================

use crate::config;
use crate::engine::projector::{self, ChartPoint, ScatterPoint};
use crate::engine::stats::{self, DashboardStats};
use crate::store::RecordStore;
use serde::Serialize;

/// 底部导航栏的模块计数
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationCounts {
    pub venues: usize,
    pub financing: usize,
    /// 培训期数 (累计期数,非机构数)
    pub training_sessions: u64,
    pub policies: usize,
    pub mentors: usize,
    pub services: usize,
}

/// 驾驶舱API
///
/// 只读借用记录存储,所有方法都是对引擎层的薄封装
pub struct DashboardApi<'a> {
    store: &'a RecordStore,
}

impl<'a> DashboardApi<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// 九个数字瓦片
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(self.store)
    }

    /// 底部导航栏计数
    pub fn navigation_counts(&self) -> NavigationCounts {
        NavigationCounts {
            venues: self.store.venues().len(),
            financing: self.store.financing().len(),
            training_sessions: stats::total_training_sessions(self.store.training_records()),
            policies: self.store.policies().len(),
            mentors: self.store.mentors().len(),
            services: self.store.services().len(),
        }
    }

    // ==========================================
    // 图表序列 (保持集合原始顺序)
    // ==========================================

    /// 场地面积饼图: 场地名 → 总面积
    pub fn venue_area_series(&self) -> Vec<ChartPoint> {
        projector::project(self.store.venues(), |v| v.name.clone(), |v| v.total_area)
    }

    /// 培训期数折线图: 城市 → 期数 (驾驶舱级汇总表)
    pub fn training_periods_series(&self) -> Vec<ChartPoint> {
        projector::project(
            self.store.training_orgs(),
            |t| t.city.clone(),
            |t| f64::from(t.periods),
        )
    }

    /// 服务机构满意度柱状图: 机构名 → 满意度
    ///
    /// 只取前 SERVICE_CHART_LIMIT 家机构,满意度轴范围
    /// 见 config::SATISFACTION_AXIS
    pub fn service_satisfaction_series(&self) -> Vec<ChartPoint> {
        let services = self.store.services();
        let limit = config::SERVICE_CHART_LIMIT.min(services.len());
        projector::project(
            &services[..limit],
            |s| s.name.clone(),
            |s| s.satisfaction,
        )
    }

    /// 导师散点图: (评分, 学员数)
    ///
    /// 坐标轴范围见 config::MENTOR_RATING_AXIS /
    /// config::MENTOR_STUDENTS_AXIS
    pub fn mentor_scatter_series(&self) -> Vec<ScatterPoint> {
        projector::project_xy(
            self.store.mentors(),
            |m| m.rating,
            |m| f64::from(m.students),
        )
    }

    /// 融资服务评估雷达图 (固定序列)
    pub fn financing_radar_series(&self) -> Vec<ChartPoint> {
        projector::financing_radar_series()
    }

    /// 扶持政策金额面积图 (固定序列)
    pub fn policy_amount_series(&self) -> Vec<ChartPoint> {
        projector::policy_amount_series()
    }
}
