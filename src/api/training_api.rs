// ==========================================
// 湖北省创业扶持可视化系统 - 培训清单 API
// ==========================================
// 职责: 培训期数清单页的查询接口
//       (筛选 → 分页 → 行投影)
// 架构: API 层 → 引擎层 (filter / paginator / stats)
// ==========================================
// 调用方约定: 任一筛选条件变化后 page 须重置为 1,
// 本层不代为钳制,越界页码按错误返回
// ==========================================

use crate::config;
use crate::engine::filter::{ResolvedTraining, TrainingFilterEngine, TrainingQuery};
use crate::engine::paginator;
use crate::engine::stats;
use crate::store::RecordStore;
use crate::api::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// 培训清单页查询
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingPageQuery {
    pub search_term: String,
    pub city_filter: String,
    pub course_filter: String,
    /// 页码,基于 1
    pub page: usize,
}

impl Default for TrainingPageQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            city_filter: String::new(),
            course_filter: String::new(),
            page: 1,
        }
    }
}

/// 清单表格一行 (填充解析后的展示值)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRow {
    /// 解析后城市
    pub city: String,
    pub institution: String,
    /// 解析后地址
    pub address: String,
    pub courses: Vec<String>,
    pub sessions: u32,
    /// 培训对象,空值显示 "未指定"
    pub audience: String,
    /// 联系方式,空值显示 "未指定"
    pub contact: String,
}

/// 清单页响应
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPageResponse {
    pub rows: Vec<TrainingRow>,
    /// 有效记录总数 ("共计 N 个培训机构")
    pub total_records: usize,
    /// 筛选命中数 ("M 个符合条件")
    pub filtered_count: usize,
    pub page: usize,
    pub total_pages: usize,
    /// 本页首条在筛选结果中的下标 (基于 0, 半开区间)
    pub start_index: usize,
    pub end_index: usize,
    /// 培训总期数 (与驾驶舱瓦片同口径)
    pub total_sessions: u64,
}

/// 筛选器下拉选项
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub courses: Vec<String>,
}

/// 培训清单API
///
/// 构造时完成一次填充解析,后续查询复用解析结果
pub struct TrainingApi<'a> {
    store: &'a RecordStore,
    engine: TrainingFilterEngine<'a>,
}

impl<'a> TrainingApi<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            engine: TrainingFilterEngine::new(store.training_records()),
        }
    }

    /// 查询一页清单
    ///
    /// # 返回
    /// - Ok(TrainingPageResponse): 当前页行数据与页元信息
    /// - Err(ApiError::InvalidInput): 页码为 0
    /// - Err(ApiError::Engine): 页码超出筛选结果的页数范围
    pub fn query_page(&self, query: &TrainingPageQuery) -> ApiResult<TrainingPageResponse> {
        if query.page == 0 {
            return Err(ApiError::InvalidInput("页码必须从 1 开始".to_string()));
        }

        let filter_query = TrainingQuery {
            search_term: query.search_term.clone(),
            city_filter: query.city_filter.clone(),
            course_filter: query.course_filter.clone(),
        };
        let filtered = self.engine.filter(&filter_query);
        let page = paginator::paginate(&filtered, config::PAGE_SIZE, query.page)?;

        Ok(TrainingPageResponse {
            rows: page.items.iter().map(|item| to_row(item)).collect(),
            total_records: self.engine.valid_count(),
            filtered_count: filtered.len(),
            page: query.page,
            total_pages: page.total_pages,
            start_index: page.start_index,
            end_index: page.end_index,
            total_sessions: stats::total_training_sessions(self.store.training_records()),
        })
    }

    /// 筛选器下拉选项 (始终来自全量有效记录,与激活筛选无关)
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            cities: self.engine.city_options(),
            courses: self.engine.course_options(),
        }
    }

    /// 有效记录总数
    pub fn total_records(&self) -> usize {
        self.engine.valid_count()
    }
}

/// 记录 → 表格行,空展示字段替换为 "未指定"
fn to_row(item: &ResolvedTraining<'_>) -> TrainingRow {
    TrainingRow {
        city: item.effective_city.clone(),
        institution: item.record.institution.clone(),
        address: item.effective_address.clone(),
        courses: item.record.courses.clone(),
        sessions: item.record.sessions,
        audience: display_or_unspecified(&item.record.audience),
        contact: display_or_unspecified(&item.record.contact),
    }
}

fn display_or_unspecified(value: &str) -> String {
    if value.trim().is_empty() {
        config::UNSPECIFIED.to_string()
    } else {
        value.to_string()
    }
}
