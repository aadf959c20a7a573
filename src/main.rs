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

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use yanote::config::settings::Settings;
use yanote::infrastructure::database::connection;
use yanote::presentation::routes;
use yanote::presentation::state::AppState;
use yanote::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    if std::env::var("YANOTE_LOG_FORMAT").as_deref() == Ok("json") {
        telemetry::init_json_telemetry();
    } else {
        telemetry::init_telemetry();
    }
    info!("Starting yanote...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    connection::run_migrations(db.as_ref()).await?;

    // 4. Wire services
    let state = AppState::new(db.clone(), settings.clone())?;
    let purged = state.sessions.purge_expired().await?;
    info!("Removed {} expired sessions", purged);

    // 5. Start HTTP server
    let app = routes::router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
