//! # Catalog 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. 라우터 생성 후 HTTP 서버 시작

use anyhow::Result;
use catalog::{
    app::{build_app, AppState},
    config::Config,
    db,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // RUST_LOG가 없으면 catalog, tower_http, axum 모듈을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting catalog server on {}", config.bind_addr());

    // 연결 풀: 요청마다 여기서 연결(세션)을 빌려 쓰고 돌려줍니다.
    let pool = db::connect(&config).await?;
    tracing::info!(
        max_connections = config.database_max_connections,
        "Connected to {}",
        config.database_url
    );

    tracing::info!("Running database migrations...");
    db::MIGRATOR.run(&pool).await?;

    let app = build_app(AppState { pool });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    // Ctrl+C로 종료할 때까지 실행됩니다.
    axum::serve(listener, app).await?;

    Ok(())
}
