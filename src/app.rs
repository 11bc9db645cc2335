//! # 라우터 조립
//!
//! URL 경로와 핸들러를 연결하고 공통 미들웨어(CORS, 요청 로깅)를 씌웁니다.
//! 실행 파일(main.rs)과 통합 테스트(tests/)가 같은 `build_app`을 사용합니다.

use crate::routes;
use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State<AppState>`나 `DbSession` 추출자를 통해 접근합니다.
/// `SqlitePool`은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// 전체 라우터를 생성합니다.
///
/// ## 경로 순서
/// `/products/search`, `/products/paginated` 같은 고정 경로는
/// `/products/{product_id}`보다 먼저 등록합니다. axum(matchit)은 등록 순서와
/// 상관없이 고정 세그먼트를 캡처보다 우선하지만, 읽는 사람이 헷갈리지 않도록
/// 순서도 맞춰 둡니다.
pub fn build_app(state: AppState) -> Router {
    // 카테고리 라우트 (고정 응답)
    let category_routes = Router::new()
        .route("/", get(routes::get_categories))
        .route("/list", get(routes::get_list));

    // 상품 라우트
    let product_routes = Router::new()
        .route("/products", get(routes::list_products))
        .route("/products/", get(routes::list_products))
        .route("/products/search", get(routes::search_products))
        .route("/products/filter/category", get(routes::filter_by_category))
        .route("/products/filter/price", get(routes::filter_by_price))
        .route("/products/paginated", get(routes::list_paginated))
        .route("/products/in-stock", get(routes::filter_by_stock))
        .route("/products/{product_id}", get(routes::get_product));

    let api_routes = Router::new()
        .merge(category_routes)
        .merge(product_routes)
        // 헬스체크 API (서버와 DB 연결 상태 확인용)
        .route("/health", get(routes::health_check))
        .with_state(state);

    // 개발 환경 기준으로 모든 출처를 허용합니다. 읽기 전용 API라 쿠키/자격증명은 쓰지 않습니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_routes
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
