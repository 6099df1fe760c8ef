use serde::Serialize;

use crate::error::{ProgressError, Result};
use crate::models::ReportConfig;

/// Én side av en liste (1-basert sidetall).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
}

pub fn page_count(len: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(ProgressError::InvalidPageSize);
    }
    Ok(len.div_ceil(page_size))
}

/// Henter side `page` (1-basert). Sider utenfor området klemmes til nærmeste gyldige.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Result<Page<'_, T>> {
    let total_pages = page_count(items.len(), page_size)?;
    if total_pages == 0 {
        return Ok(Page { items: &items[..0], page: 1, total_pages });
    }

    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Ok(Page {
        items: &items[start..end],
        page,
        total_pages,
    })
}

/// `paginate` med sidestørrelse fra konfig.
pub fn paginate_with_config<'a, T>(items: &'a [T], page: usize, cfg: &ReportConfig) -> Result<Page<'a, T>> {
    paginate(items, page, cfg.page_size)
}
