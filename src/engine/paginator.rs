// ==========================================
// 湖北省创业扶持可视化系统 - 分页引擎
// ==========================================
// 职责: 将筛选结果切为固定大小的页
// 红线: 页码越界报错而非静默钳制,
//       范围钳制是调用方 (UI) 的职责
// ==========================================

use crate::engine::error::EngineError;

/// 一页记录及页元信息
///
/// 索引为半开区间 [start_index, end_index),基于 0
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// 对集合切页
///
/// # 参数
/// - `page_size`: 每页记录数,必须大于 0
/// - `page_number`: 页码,基于 1
///
/// # 返回
/// - Ok(Page): 请求页的切片与元信息
/// - Err(EngineError::PageOutOfRange): 页码不在 [1, total_pages]
/// - Err(EngineError::InvalidPageSize): page_size 为 0
///
/// 空集合视为一个空页 (total_pages 最小为 1)
pub fn paginate<T>(
    records: &[T],
    page_size: usize,
    page_number: usize,
) -> Result<Page<'_, T>, EngineError> {
    if page_size == 0 {
        return Err(EngineError::InvalidPageSize);
    }

    let total_pages = records.len().div_ceil(page_size).max(1);
    if page_number < 1 || page_number > total_pages {
        return Err(EngineError::PageOutOfRange {
            page: page_number,
            total_pages,
        });
    }

    let start_index = (page_number - 1) * page_size;
    let end_index = (start_index + page_size).min(records.len());

    Ok(Page {
        items: &records[start_index..end_index],
        total_pages,
        start_index,
        end_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_one_empty_page() {
        let records: Vec<u32> = vec![];
        let page = paginate(&records, 20, 1).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.start_index, 0);
        assert_eq!(page.end_index, 0);
    }

    #[test]
    fn test_45_records_page_size_20() {
        let records: Vec<usize> = (0..45).collect();

        let first = paginate(&records, 20, 1).unwrap();
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items, &records[0..20]);

        let last = paginate(&records, 20, 3).unwrap();
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items, &records[40..45]);
        assert_eq!(last.start_index, 40);
        assert_eq!(last.end_index, 45);
    }

    #[test]
    fn test_page_out_of_range() {
        let records: Vec<usize> = (0..20).collect();
        // 恰好一页,第 2 页越界
        let err = paginate(&records, 20, 2).unwrap_err();
        assert_eq!(
            err,
            EngineError::PageOutOfRange {
                page: 2,
                total_pages: 1
            }
        );
        assert!(paginate(&records, 20, 0).is_err());
    }

    #[test]
    fn test_zero_page_size() {
        let records: Vec<usize> = (0..3).collect();
        assert_eq!(
            paginate(&records, 0, 1).unwrap_err(),
            EngineError::InvalidPageSize
        );
    }

    #[test]
    fn test_pages_cover_collection_without_gaps() {
        let records: Vec<usize> = (0..45).collect();
        let total_pages = paginate(&records, 20, 1).unwrap().total_pages;

        let mut seen = Vec::new();
        for page_number in 1..=total_pages {
            let page = paginate(&records, 20, page_number).unwrap();
            seen.extend_from_slice(page.items);
        }
        // 无缺页无重复
        assert_eq!(seen, records);
    }
}
