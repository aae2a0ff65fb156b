//! 学年学期缓存
//!
//! 当前学年与学期几乎每个请求都会用到，启动时从数据库加载一次，
//! 更新设置后同步刷新。使用 RwLock 保护，支持热更新。

use std::sync::OnceLock;
use tokio::sync::RwLock;

use crate::models::system::entities::SystemSetting;

static SETTING_CACHE: OnceLock<RwLock<Option<SystemSetting>>> = OnceLock::new();

pub struct SettingCache;

impl SettingCache {
    fn cell() -> &'static RwLock<Option<SystemSetting>> {
        SETTING_CACHE.get_or_init(|| RwLock::new(None))
    }

    /// 启动时调用，None 表示数据库中尚无设置
    pub async fn init(setting: Option<SystemSetting>) {
        let mut guard = Self::cell().write().await;
        match &setting {
            Some(s) => tracing::info!(
                "Current school year {} semester {} loaded",
                s.current_school_year,
                s.current_semester
            ),
            None => tracing::info!("No system setting stored yet, using configured defaults"),
        }
        *guard = setting;
    }

    pub async fn get() -> Option<SystemSetting> {
        Self::cell().read().await.clone()
    }

    pub async fn update(setting: SystemSetting) {
        let mut guard = Self::cell().write().await;
        tracing::debug!(
            "System setting cache updated: {}/{}",
            setting.current_school_year,
            setting.current_semester
        );
        *guard = Some(setting);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_replaces_cached_value() {
        let setting = SystemSetting {
            current_school_year: 2025,
            current_semester: 2,
            updated_at: None,
        };
        SettingCache::update(setting.clone()).await;
        assert_eq!(SettingCache::get().await, Some(setting));
    }
}
