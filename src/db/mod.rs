//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! - `products`: 상품 조회 쿼리와 동적 필터 빌더
//! - `session`: 요청마다 커넥션을 빌려주는 `DbSession` 추출자

pub mod products;
pub mod session;

pub use products::*;
pub use session::DbSession;

use crate::config::Config;
use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

/// `./migrations` 폴더의 SQL 파일들을 컴파일 타임에 바이너리에 포함시킵니다.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// 설정값으로 SQLite 연결 풀을 생성합니다.
///
/// 데이터베이스 파일이 없으면 새로 만듭니다. 스키마는 만들지 않으므로
/// 호출한 쪽에서 `MIGRATOR.run(&pool)`을 실행해야 합니다.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await
}
