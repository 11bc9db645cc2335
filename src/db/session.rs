//! # 요청 단위 DB 세션
//!
//! `DbSession`은 핸들러 매개변수로 쓰는 Axum 추출자(Extractor)입니다.
//! 요청이 들어오면 풀에서 연결 하나를 빌려오고, 핸들러가 끝나면
//! (성공이든 에러든) 값이 drop되면서 연결이 자동으로 풀에 반환됩니다.
//!
//! ```ignore
//! pub async fn handler(mut session: DbSession) -> Result<Json<Vec<Product>>, AppError> {
//!     let products = db::list_products(&mut session).await?;
//!     Ok(Json(products))
//! } // ← 여기서 session이 drop되어 연결 반환
//! ```

use crate::{app::AppState, error::AppError};
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection};
use std::ops::{Deref, DerefMut};

/// 풀에서 빌린 SQLite 연결
///
/// `Deref<Target = SqliteConnection>`을 구현하므로 `&mut session`을
/// `&mut SqliteConnection`을 받는 `db::` 함수에 그대로 넘길 수 있습니다.
pub struct DbSession(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 풀이 가득 차 있으면 acquire_timeout까지 기다린 뒤 PoolTimedOut → 500
        let conn = state.pool.acquire().await?;
        Ok(DbSession(conn))
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
