// ==========================================
// 培训清单 API 集成测试
// ==========================================
// 覆盖: 筛选 → 分页 → 行投影全链路,
//       下拉选项,页码越界,临时文件装载
// ==========================================

use chuangye_dashboard::api::{ApiError, TrainingApi, TrainingPageQuery};
use chuangye_dashboard::config;
use chuangye_dashboard::domain::TrainingRecord;
use chuangye_dashboard::engine::EngineError;
use chuangye_dashboard::store::{RawCollections, RecordStore};
use chuangye_dashboard::logging;

fn load_fixture() -> RecordStore {
    logging::init_test();
    let json = include_str!("fixtures/sample_collections.json");
    RecordStore::from_json_str(json).expect("测试数据装载失败")
}

#[test]
fn test_default_query_lists_all_valid_records() {
    let store = load_fixture();
    let api = TrainingApi::new(&store);
    let page = api.query_page(&TrainingPageQuery::default()).unwrap();

    // nan 行不可见
    assert_eq!(page.total_records, 3);
    assert_eq!(page.filtered_count, 3);
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.start_index, 0);
    assert_eq!(page.end_index, 3);
    assert_eq!(page.total_sessions, 18);
}

#[test]
fn test_rows_carry_fill_down_and_unspecified() {
    let store = load_fixture();
    let api = TrainingApi::new(&store);
    let page = api.query_page(&TrainingPageQuery::default()).unwrap();

    // 第二条记录自身城市/地址为空,继承第一条的值
    let row = &page.rows[1];
    assert_eq!(row.institution, "武汉创业培训中心");
    assert_eq!(row.city, "武汉市");
    assert_eq!(row.address, "武汉市江汉区经济开发区智慧大厦");
    // 空展示字段替换为哨兵
    assert_eq!(row.audience, config::UNSPECIFIED);
    assert_eq!(row.contact, config::UNSPECIFIED);
}

#[test]
fn test_city_filter_and_search_compose() {
    let store = load_fixture();
    let api = TrainingApi::new(&store);

    let page = api
        .query_page(&TrainingPageQuery {
            city_filter: "宜昌市".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(page.filtered_count, 1);
    assert_eq!(page.rows[0].institution, "宜昌创业学院");

    let page = api
        .query_page(&TrainingPageQuery {
            search_term: "syb".to_string(),
            city_filter: "武汉市".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(page.filtered_count, 1);
    assert_eq!(page.rows[0].institution, "武汉伟鼎职业培训学校");
}

#[test]
fn test_filter_options_from_full_valid_set() {
    let store = load_fixture();
    let api = TrainingApi::new(&store);
    let options = api.filter_options();

    // 城市按出现顺序去重 (继承值也计入),课程字典序
    assert_eq!(options.cities, vec!["武汉市", "宜昌市"]);
    assert!(options.courses.contains(&"SYB培训".to_string()));
    assert!(!options.courses.contains(&"占位课程".to_string()));
    let mut sorted = options.courses.clone();
    sorted.sort();
    assert_eq!(options.courses, sorted);
}

#[test]
fn test_page_out_of_range_is_error_not_clamped() {
    let store = load_fixture();
    let api = TrainingApi::new(&store);

    let err = api
        .query_page(&TrainingPageQuery {
            page: 2,
            ..Default::default()
        })
        .unwrap_err();
    match err {
        ApiError::Engine(EngineError::PageOutOfRange { page, total_pages }) => {
            assert_eq!(page, 2);
            assert_eq!(total_pages, 1);
        }
        other => panic!("意外的错误类型: {other}"),
    }

    let err = api
        .query_page(&TrainingPageQuery {
            page: 0,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_pagination_covers_45_records() {
    logging::init_test();
    let raw = RawCollections {
        training_records: (0..45)
            .map(|i| TrainingRecord {
                institution: format!("机构{i:02}"),
                city: "武汉市".to_string(),
                address: String::new(),
                courses: vec![],
                sessions: 1,
                audience: String::new(),
                contact: String::new(),
            })
            .collect(),
        ..Default::default()
    };
    let store = RecordStore::load(raw).unwrap();
    let api = TrainingApi::new(&store);

    let first = api
        .query_page(&TrainingPageQuery::default())
        .unwrap();
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.rows.len(), config::PAGE_SIZE);

    // 三页合起来恰好覆盖全部记录,无缺页无重复
    let mut institutions = Vec::new();
    for page_number in 1..=first.total_pages {
        let page = api
            .query_page(&TrainingPageQuery {
                page: page_number,
                ..Default::default()
            })
            .unwrap();
        institutions.extend(page.rows.iter().map(|r| r.institution.clone()));
    }
    assert_eq!(institutions.len(), 45);
    let expected: Vec<String> = (0..45).map(|i| format!("机构{i:02}")).collect();
    assert_eq!(institutions, expected);

    let last = api
        .query_page(&TrainingPageQuery {
            page: 3,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(last.rows.len(), 5);
    assert_eq!(last.start_index, 40);
    assert_eq!(last.end_index, 45);
}

#[test]
fn test_load_from_temp_file() -> anyhow::Result<()> {
    logging::init_test();
    // 模拟外部协作方从打包文件读入 JSON 再交给本核心
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("collections.json");
    std::fs::write(&path, include_str!("fixtures/sample_collections.json"))?;

    let json = std::fs::read_to_string(&path)?;
    let store = RecordStore::from_json_str(&json)?;
    let api = TrainingApi::new(&store);
    assert_eq!(api.total_records(), 3);
    Ok(())
}
