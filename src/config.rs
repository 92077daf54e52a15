// ==========================================
// 湖北省创业扶持可视化系统 - 配置层
// ==========================================
// 职责: 展示层常量(分页大小/坐标轴范围/哨兵值)
// 红线: 坐标轴范围是展示配置,不从数据推导
// ==========================================

/// 培训清单页每页记录数
pub const PAGE_SIZE: usize = 20;

/// 脏数据哨兵: 机构名为 "nan"(不区分大小写)的记录视为无效
pub const NAN_SENTINEL: &str = "nan";

/// 缺省值哨兵: 城市/地址/联系方式缺失时的显示值
pub const UNSPECIFIED: &str = "未指定";

/// 服务机构满意度柱状图只取前 N 家机构
pub const SERVICE_CHART_LIMIT: usize = 3;

/// 图表坐标轴的固定数值范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

/// 满意度坐标轴 (服务机构柱状图)
pub const SATISFACTION_AXIS: AxisDomain = AxisDomain { min: 0.0, max: 5.0 };

/// 政策金额坐标轴 (扶持政策面积图, 单位万元)
pub const POLICY_AMOUNT_AXIS: AxisDomain = AxisDomain { min: 0.0, max: 130.0 };

/// 导师评分坐标轴 (导师散点图 X 轴)
pub const MENTOR_RATING_AXIS: AxisDomain = AxisDomain { min: 4.0, max: 5.0 };

/// 导师学员数坐标轴 (导师散点图 Y 轴)
pub const MENTOR_STUDENTS_AXIS: AxisDomain = AxisDomain { min: 0.0, max: 60.0 };
