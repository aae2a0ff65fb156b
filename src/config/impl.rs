use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 形如 `KEY -> config.path` 的环境变量覆盖表
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("APP_ENV", "app.environment"),
    ("RUST_LOG", "app.log_level"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("UNIX_SOCKET", "server.unix_socket_path"),
    ("CPU_COUNT", "server.workers"),
    ("JWT_SECRET", "jwt.secret"),
    ("DATABASE_URL", "database.url"),
    ("REDIS_URL", "cache.redis.url"),
    ("REDIS_KEY_PREFIX", "cache.redis.key_prefix"),
    ("UPLOAD_DIR", "upload.dir"),
    ("SCHOOL_YEAR", "school.default_school_year"),
];

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{environment}")).required(false))
            .add_source(
                Environment::with_prefix("SCHOOLMATE")
                    .separator("__")
                    .try_parsing(true),
            );

        for (env_key, config_key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*config_key, std::env::var(env_key).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.normalize();
        Ok(app_config)
    }

    /// 补全运行时才能确定的默认值
    fn normalize(&mut self) {
        if self.server.workers == 0 {
            self.server.workers = num_cpus::get().min(self.server.max_workers.max(1));
        }
        if self.school.default_school_year <= 0 {
            self.school.default_school_year = chrono::Datelike::year(&chrono::Local::now());
        }
        if !(1..=2).contains(&self.school.default_semester) {
            self.school.default_semester = 1;
        }
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))
    }

    /// 使用内置默认值初始化（测试或无配置文件时），已初始化则忽略
    pub fn init_with_defaults() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            let mut config = AppConfig::default();
            config.normalize();
            config
        })
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        Some(self.server.unix_socket_path.as_str()).filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_normalized() {
        let mut config = AppConfig::default();
        config.server.workers = 0;
        config.school.default_semester = 5;
        config.normalize();

        assert!(config.server.workers >= 1);
        assert!(config.server.workers <= config.server.max_workers);
        assert_eq!(config.school.default_semester, 1);
        assert!(config.school.default_school_year > 2000);
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
    }
}
