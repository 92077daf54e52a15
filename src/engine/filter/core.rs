// ==========================================
// 筛选搜索引擎 - 核心实现
// ==========================================
// 填充规则 (fill-down): city/address 为空的记录继承
// 最近一条前序有效记录的非空值,无则取哨兵 "未指定"。
// 原实现对每条记录向前回扫 (O(n²)),此处改为单次
// 前向累积遍历 (O(n)),行为一致。
// ==========================================

use crate::config;
use crate::domain::TrainingRecord;

/// 培训清单查询条件
///
/// 空字符串表示 "全部" (不筛选)。三个条件按逻辑与组合。
/// 调用方约定: 任一条件变化后页码须重置为 1,本层不强制。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingQuery {
    /// 关键词,对机构/地址/城市/课程做不区分大小写的子串匹配
    pub search_term: String,
    /// 城市,与解析后城市精确相等
    pub city_filter: String,
    /// 课程,与课程列表中某项去空格后精确相等
    pub course_filter: String,
}

impl TrainingQuery {
    /// 三个条件是否全部为空 (恒等筛选)
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.city_filter.is_empty() && self.course_filter.is_empty()
    }
}

/// 完成填充解析的培训记录
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTraining<'a> {
    pub record: &'a TrainingRecord,
    /// 解析后城市 (自身值或继承值,否则 "未指定")
    pub effective_city: String,
    /// 解析后地址 (自身值或继承值,否则 "未指定")
    pub effective_address: String,
}

/// 培训明细筛选引擎
///
/// 构造时排除无效记录并一次性完成填充解析,
/// 之后的筛选调用都基于同一份解析结果
/// (同一记录多次解析必得同一值)
pub struct TrainingFilterEngine<'a> {
    resolved: Vec<ResolvedTraining<'a>>,
}

impl<'a> TrainingFilterEngine<'a> {
    /// 对原始明细建立引擎
    ///
    /// 单次前向遍历: 跳过无效记录,携带最近一次出现的
    /// 非空城市/地址作为继承值
    pub fn new(records: &'a [TrainingRecord]) -> Self {
        let mut resolved = Vec::new();
        let mut last_city: Option<&'a str> = None;
        let mut last_address: Option<&'a str> = None;

        for record in records.iter().filter(|record| record.is_valid()) {
            if !record.city.trim().is_empty() {
                last_city = Some(record.city.as_str());
            }
            if !record.address.trim().is_empty() {
                last_address = Some(record.address.as_str());
            }
            resolved.push(ResolvedTraining {
                record,
                effective_city: last_city.unwrap_or(config::UNSPECIFIED).to_string(),
                effective_address: last_address.unwrap_or(config::UNSPECIFIED).to_string(),
            });
        }

        tracing::debug!(
            raw = records.len(),
            valid = resolved.len(),
            "培训明细填充解析完成"
        );

        Self { resolved }
    }

    /// 全部有效记录 (原始顺序,未筛选)
    pub fn valid(&self) -> &[ResolvedTraining<'a>] {
        &self.resolved
    }

    /// 有效记录数 (清单页表头 "共计 N 个培训机构")
    pub fn valid_count(&self) -> usize {
        self.resolved.len()
    }

    /// 按查询条件筛选,保持原始相对顺序
    pub fn filter(&self, query: &TrainingQuery) -> Vec<&ResolvedTraining<'a>> {
        let mut filtered: Vec<&ResolvedTraining<'a>> = self.resolved.iter().collect();

        if !query.search_term.is_empty() {
            let needle = query.search_term.to_lowercase();
            filtered.retain(|item| matches_search(item, &needle));
        }

        if !query.city_filter.is_empty() {
            filtered.retain(|item| item.effective_city == query.city_filter);
        }

        if !query.course_filter.is_empty() {
            let course = query.course_filter.trim();
            filtered.retain(|item| item.record.courses.iter().any(|c| c.trim() == course));
        }

        tracing::debug!(
            total = self.resolved.len(),
            matched = filtered.len(),
            ?query,
            "培训明细筛选完成"
        );

        filtered
    }

    /// 城市下拉选项
    ///
    /// 取自全部有效记录的解析后城市,按出现顺序去重,
    /// 排除 "未指定"
    pub fn city_options(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for item in &self.resolved {
            if item.effective_city != config::UNSPECIFIED
                && !cities.contains(&item.effective_city)
            {
                cities.push(item.effective_city.clone());
            }
        }
        cities
    }

    /// 课程下拉选项
    ///
    /// 取自全部有效记录的课程列表,去空格去重后按字典序排列
    pub fn course_options(&self) -> Vec<String> {
        let mut courses: Vec<String> = self
            .resolved
            .iter()
            .flat_map(|item| item.record.courses.iter())
            .map(|course| course.trim())
            .filter(|course| !course.is_empty())
            .map(str::to_string)
            .collect();
        courses.sort();
        courses.dedup();
        courses
    }
}

/// 关键词匹配: 机构名/解析后地址/解析后城市/任一课程
fn matches_search(item: &ResolvedTraining<'_>, needle: &str) -> bool {
    item.record.institution.to_lowercase().contains(needle)
        || item.effective_address.to_lowercase().contains(needle)
        || item.effective_city.to_lowercase().contains(needle)
        || item
            .record
            .courses
            .iter()
            .any(|course| course.to_lowercase().contains(needle))
}
