use serde::{Deserialize, Serialize};

/// 图片类别，不同类别的尺寸档位不同
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Poster,
    Backdrop,
}

/// 图片尺寸档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    XLarge,
}

impl ImageSize {
    /// CDN 路径中的尺寸段
    pub fn code(&self, kind: ImageKind) -> &'static str {
        match (kind, self) {
            (ImageKind::Poster, ImageSize::Small) => "w185",
            (ImageKind::Poster, ImageSize::Medium) => "w342",
            (ImageKind::Poster, ImageSize::Large) => "w500",
            (ImageKind::Poster, ImageSize::XLarge) => "w780",
            (ImageKind::Backdrop, ImageSize::Small) => "w300",
            (ImageKind::Backdrop, ImageSize::Medium) => "w780",
            (ImageKind::Backdrop, ImageSize::Large) => "w1280",
            (ImageKind::Backdrop, ImageSize::XLarge) => "original",
        }
    }
}

/// 构建图片 CDN 地址
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `path` 为远程服务返回的图片路径（以 `/` 开头）
    pub fn url(&self, path: &str, kind: ImageKind, size: ImageSize) -> String {
        format!("{}/{}{}", self.base_url, size.code(kind), path)
    }
}
