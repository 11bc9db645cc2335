//! # 카테고리 라우트 핸들러
//!
//! 고정된 확인 응답만 돌려주는 두 엔드포인트입니다. 데이터 의존성이 없습니다.
//!
//! ## 엔드포인트
//! - `GET /`     → `{ "message": "ok" }`
//! - `GET /list` → `{ "message": "hi" }`

use axum::Json;
use serde_json::{json, Value};

/// `GET /`: 고정 응답 `{"message": "ok"}`
pub async fn get_categories() -> Json<Value> {
    Json(json!({ "message": "ok" }))
}

/// `GET /list`: 고정 응답 `{"message": "hi"}`
pub async fn get_list() -> Json<Value> {
    Json(json!({ "message": "hi" }))
}
