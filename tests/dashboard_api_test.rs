// ==========================================
// 驾驶舱 API 集成测试
// ==========================================
// 覆盖: 数字瓦片 / 导航计数 / 图表序列投影
// 一致性: 培训期数瓦片与清单页表头必须同值
// ==========================================

use chuangye_dashboard::api::{DashboardApi, TrainingApi};
use chuangye_dashboard::store::RecordStore;
use chuangye_dashboard::{logging, ChartPoint};

fn load_fixture() -> RecordStore {
    logging::init_test();
    let json = include_str!("fixtures/sample_collections.json");
    RecordStore::from_json_str(json).expect("测试数据装载失败")
}

#[test]
fn test_dashboard_stats_tiles() {
    let store = load_fixture();
    let api = DashboardApi::new(&store);
    let stats = api.stats();

    assert_eq!(stats.total_venues, 2);
    assert_eq!(stats.total_area, 35000.0);
    assert_eq!(stats.available_area, 5500.0);
    assert_eq!(stats.total_financing, 2);
    // nan 占位行 (100 期) 不计入
    assert_eq!(stats.total_training_sessions, 18);
    assert_eq!(stats.total_policies, 3);
    assert_eq!(stats.total_mentors, 2);
    assert_eq!(stats.total_services, 4);
    assert_eq!(stats.total_support_amount, 240.0);
}

#[test]
fn test_tile_total_agrees_with_training_page_header() {
    let store = load_fixture();
    let dashboard = DashboardApi::new(&store);
    let training = TrainingApi::new(&store);

    let tile = dashboard.stats().total_training_sessions;
    let header = training
        .query_page(&Default::default())
        .unwrap()
        .total_sessions;
    assert_eq!(tile, header);
    assert_eq!(dashboard.navigation_counts().training_sessions, tile);
}

#[test]
fn test_venue_area_series_preserves_order() {
    let store = load_fixture();
    let api = DashboardApi::new(&store);
    let series = api.venue_area_series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0], ChartPoint::new("光谷创业咖啡", 20000.0));
    assert_eq!(series[1], ChartPoint::new("武汉理工大学创业学院", 15000.0));
}

#[test]
fn test_training_periods_series_uses_city_labels() {
    let store = load_fixture();
    let api = DashboardApi::new(&store);
    let series = api.training_periods_series();
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["武汉市", "宜昌市", "襄阳市"]);
    assert_eq!(series[0].value, 8.0);
}

#[test]
fn test_service_satisfaction_series_takes_first_three() {
    let store = load_fixture();
    let api = DashboardApi::new(&store);
    // 数据里有 4 家机构,柱状图只取前 3 家
    let series = api.service_satisfaction_series();
    assert_eq!(series.len(), 3);
    assert_eq!(series[0].label, "江岸区公共就业和人才服务中心");
    assert_eq!(series[2].value, 4.6);
}

#[test]
fn test_mentor_scatter_series() {
    let store = load_fixture();
    let api = DashboardApi::new(&store);
    let series = api.mentor_scatter_series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].x, 4.8);
    assert_eq!(series[0].y, 45.0);
}

#[test]
fn test_fixed_series_pass_through() {
    let store = load_fixture();
    let api = DashboardApi::new(&store);

    let radar = api.financing_radar_series();
    assert_eq!(radar.len(), 5);
    assert_eq!(radar[0], ChartPoint::new("企业贷款", 100.0));

    let area = api.policy_amount_series();
    assert_eq!(area.len(), 5);
    assert_eq!(area[1], ChartPoint::new("贷款贴息", 100.0));
    assert_eq!(area[4], ChartPoint::new("设备补贴", 40.0));
}
