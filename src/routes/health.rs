//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "ok" }`
//!
//! 서버 프로세스뿐 아니라 DB 연결까지 확인합니다.
//! 풀에서 세션을 얻지 못하거나 쿼리가 실패하면 500 `database_error`를 반환합니다.

use crate::{db::DbSession, error::AppError};
use axum::Json;
use serde_json::{json, Value};

/// `GET /health`: 세션을 하나 빌려 `SELECT 1`을 실행합니다.
pub async fn health_check(mut session: DbSession) -> Result<Json<Value>, AppError> {
    sqlx::query("SELECT 1").execute(&mut *session).await?;

    Ok(Json(json!({
        "status": "ok"
    })))
}
