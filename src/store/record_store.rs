// ==========================================
// 湖北省创业扶持可视化系统 - 记录存储
// ==========================================
// 职责: 一次性装载静态集合,暴露只读访问器
// 输入: 预解析的 JSON 集合 (解析由外部协作方负责,
//       from_json_str 仅作便捷入口)
// ==========================================
// 必填字段缺失对该条记录是致命错误 (MalformedInput);
// 培训明细的 "nan" 占位行是软性数据质量问题,
// 保留在存储中,由引擎层统一排除
// ==========================================

use crate::domain::{
    CollectionKind, FinancingProduct, Mentor, ServiceInstitution, SupportPolicy, TrainingOrg,
    TrainingRecord, Venue,
};
use crate::store::error::StoreError;
use serde::Deserialize;

/// 预解析的原始集合
///
/// 对应打包的静态 JSON: 四张清单、两张名录,
/// 外加培训期数明细数据集
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollections {
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub financing: Vec<FinancingProduct>,
    #[serde(default)]
    pub training: Vec<TrainingOrg>,
    #[serde(default)]
    pub policies: Vec<SupportPolicy>,
    #[serde(default)]
    pub mentors: Vec<Mentor>,
    #[serde(default)]
    pub services: Vec<ServiceInstitution>,
    #[serde(default)]
    pub training_records: Vec<TrainingRecord>,
}

/// 只读记录存储
///
/// 所有集合保持原始装载顺序,会话期间不增删改
#[derive(Debug, Clone)]
pub struct RecordStore {
    venues: Vec<Venue>,
    financing: Vec<FinancingProduct>,
    training_orgs: Vec<TrainingOrg>,
    policies: Vec<SupportPolicy>,
    mentors: Vec<Mentor>,
    services: Vec<ServiceInstitution>,
    training_records: Vec<TrainingRecord>,
}

impl RecordStore {
    /// 从预解析集合装载存储
    ///
    /// # 返回
    /// - Ok(RecordStore): 全部必填字段校验通过
    /// - Err(StoreError::MalformedInput): 某条记录缺少必填字段
    pub fn load(raw: RawCollections) -> Result<Self, StoreError> {
        validate_names(&raw.venues, CollectionKind::Venues, |v| &v.name)?;
        validate_names(&raw.financing, CollectionKind::Financing, |f| &f.name)?;
        validate_names(&raw.training, CollectionKind::Training, |t| &t.name)?;
        validate_names(&raw.policies, CollectionKind::Policies, |p| &p.name)?;
        validate_names(&raw.mentors, CollectionKind::Mentors, |m| &m.name)?;
        validate_names(&raw.services, CollectionKind::Services, |s| &s.name)?;

        let store = Self {
            venues: raw.venues,
            financing: raw.financing,
            training_orgs: raw.training,
            policies: raw.policies,
            mentors: raw.mentors,
            services: raw.services,
            training_records: raw.training_records,
        };

        tracing::info!(
            venues = store.venues.len(),
            financing = store.financing.len(),
            training_orgs = store.training_orgs.len(),
            policies = store.policies.len(),
            mentors = store.mentors.len(),
            services = store.services.len(),
            training_records = store.training_records.len(),
            "记录存储装载完成"
        );

        Ok(store)
    }

    /// 从 JSON 字符串装载存储
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let raw: RawCollections = serde_json::from_str(json)?;
        Self::load(raw)
    }

    // ==========================================
    // 只读访问器 (稳定原始顺序)
    // ==========================================

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn financing(&self) -> &[FinancingProduct] {
        &self.financing
    }

    pub fn training_orgs(&self) -> &[TrainingOrg] {
        &self.training_orgs
    }

    pub fn policies(&self) -> &[SupportPolicy] {
        &self.policies
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn services(&self) -> &[ServiceInstitution] {
        &self.services
    }

    pub fn training_records(&self) -> &[TrainingRecord] {
        &self.training_records
    }

    /// 指定集合的记录数
    pub fn count(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Venues => self.venues.len(),
            CollectionKind::Financing => self.financing.len(),
            CollectionKind::Training => self.training_orgs.len(),
            CollectionKind::Policies => self.policies.len(),
            CollectionKind::Mentors => self.mentors.len(),
            CollectionKind::Services => self.services.len(),
            CollectionKind::TrainingRecords => self.training_records.len(),
        }
    }
}

/// 校验集合内每条记录的名称字段非空
fn validate_names<T>(
    records: &[T],
    collection: CollectionKind,
    name: impl Fn(&T) -> &str,
) -> Result<(), StoreError> {
    for (index, record) in records.iter().enumerate() {
        if name(record).trim().is_empty() {
            return Err(StoreError::MalformedInput {
                collection,
                index,
                field: "name",
            });
        }
    }
    Ok(())
}
