// ==========================================
// 湖北省创业扶持可视化系统 - 图表投影引擎
// ==========================================
// 职责: 将集合映射为图表期望的 标签/数值 序列
// 红线: 保持集合原始顺序,类目轴依赖顺序而非排序
// 红线: 固定序列逐字复刻,不从数据推导
// ==========================================

use serde::Serialize;

/// 类目图表数据点 (饼图/柱状图/折线图/面积图/雷达图)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// 散点图数据点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// 将集合按原始顺序投影为 标签/数值 序列
pub fn project<T>(
    records: &[T],
    label: impl Fn(&T) -> String,
    value: impl Fn(&T) -> f64,
) -> Vec<ChartPoint> {
    records
        .iter()
        .map(|record| ChartPoint {
            label: label(record),
            value: value(record),
        })
        .collect()
}

/// 将集合按原始顺序投影为二维散点序列
pub fn project_xy<T>(
    records: &[T],
    x: impl Fn(&T) -> f64,
    y: impl Fn(&T) -> f64,
) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|record| ScatterPoint {
            x: x(record),
            y: y(record),
        })
        .collect()
}

// ==========================================
// 固定序列 (恒等投影,与记录存储无关)
// ==========================================

/// 融资服务评估雷达图 (五维固定值,满分 100)
pub fn financing_radar_series() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("企业贷款", 100.0),
        ChartPoint::new("个人贷款", 80.0),
        ChartPoint::new("贴息支持", 90.0),
        ChartPoint::new("申请便利", 85.0),
        ChartPoint::new("审批速度", 95.0),
    ]
}

/// 扶持政策金额面积图 (按类别固定值,单位万元)
pub fn policy_amount_series() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("孵化园", 120.0),
        ChartPoint::new("贷款贴息", 100.0),
        ChartPoint::new("培训补贴", 60.0),
        ChartPoint::new("场地租金", 80.0),
        ChartPoint::new("设备补贴", 40.0),
    ]
}
