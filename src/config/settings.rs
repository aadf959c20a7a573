// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、数据库和认证会话等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 认证与会话配置
    pub auth: AuthSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 认证配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// 会话 Cookie 名称
    pub session_cookie_name: String,
    /// 会话有效期（秒）
    pub session_ttl_secs: i64,
    /// Argon2 内存开销（KiB）
    pub password_memory_kib: u32,
    /// Argon2 迭代次数
    pub password_time_cost: u32,
    /// Argon2 并行度
    pub password_parallelism: u32,
    /// 登录成功且没有安全的 `next` 参数时跳转的地址
    pub login_redirect: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次合并内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `YANOTE__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("YANOTE").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 仅基于内置默认值和给定覆盖项构建配置
    ///
    /// 不读取配置文件和环境变量，测试和嵌入场景使用
    pub fn with_overrides(overrides: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite://yanote.db?mode=rwc")?
            // Default DB pool settings
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default auth settings, two weeks like a browser session cookie
            .set_default("auth.session_cookie_name", "sessionid")?
            .set_default("auth.session_ttl_secs", 1_209_600)?
            .set_default("auth.password_memory_kib", 19_456)?
            .set_default("auth.password_time_cost", 2)?
            .set_default("auth.password_parallelism", 1)?
            .set_default("auth.login_redirect", "/")
    }
}
