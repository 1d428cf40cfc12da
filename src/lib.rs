// 电影发现客户端库
//
// 本库提供电影浏览客户端的数据层，包括：
// - 远程电影数据接口（搜索、热门、高分、发现、详情、演职人员、类型）
// - 查询参数构建
// - 筛选、搜索、列表、详情等状态存储
// - 分页窗口计算
// - 界面偏好

pub mod app;
pub mod config;
pub mod external;
pub mod models;
pub mod services;

pub use app::{AppError, MovieApp};
pub use config::{AppConfig, ConfigError};
pub use external::{MovieSource, RemoteError, TmdbClient};
