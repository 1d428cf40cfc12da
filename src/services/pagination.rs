// 分页窗口计算
//
// 以当前页为中心取 max_visible 个页码，靠近边界时整体平移以保持宽度，
// 并给出首页/末页快捷入口与省略号标记。

use serde::Serialize;

/// 默认可见页码数
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// 分页器中的一个渲染单元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current_page: u32,
    pub total_pages: u32,
    /// 窗口内的页码，严格递增
    pub pages: Vec<u32>,
    /// 是否显示首页快捷入口
    pub show_first: bool,
    pub leading_ellipsis: bool,
    /// 是否显示末页快捷入口
    pub show_last: bool,
    pub trailing_ellipsis: bool,
}

impl PageWindow {
    /// 只有一页或没有数据时不渲染分页器
    pub fn should_render(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 按渲染顺序展开：首页、省略号、窗口页码、省略号、末页
    pub fn items(&self) -> Vec<PageItem> {
        let mut items = Vec::with_capacity(self.pages.len() + 4);
        if self.show_first {
            items.push(PageItem::Page(1));
            if self.leading_ellipsis {
                items.push(PageItem::Ellipsis);
            }
        }
        items.extend(self.pages.iter().copied().map(PageItem::Page));
        if self.show_last {
            if self.trailing_ellipsis {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(self.total_pages));
        }
        items
    }
}

/// 计算分页窗口
///
/// 越界的 `current_page` 会被收敛到 `[1, total_pages]`；`total_pages == 0` 时窗口为空。
pub fn compute_window(current_page: u32, total_pages: u32, max_visible: u32) -> PageWindow {
    if total_pages == 0 || max_visible == 0 {
        return PageWindow {
            current_page: current_page.max(1),
            total_pages,
            pages: Vec::new(),
            show_first: false,
            leading_ellipsis: false,
            show_last: false,
            trailing_ellipsis: false,
        };
    }

    let current = current_page.clamp(1, total_pages);
    let half = max_visible / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = total_pages.min(start.saturating_add(max_visible - 1));
    if end - start < max_visible - 1 {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    PageWindow {
        current_page: current,
        total_pages,
        pages: (start..=end).collect(),
        show_first: start > 1,
        leading_ellipsis: start > 2,
        show_last: end < total_pages,
        trailing_ellipsis: end.saturating_add(1) < total_pages,
    }
}
