//! # 상품 API 라우트 핸들러
//!
//! 상품 조회, 검색, 필터, 페이지네이션을 처리하는 HTTP 핸들러입니다.
//! 모든 핸들러는 `DbSession`으로 요청마다 연결을 하나 빌리고, 쿼리 하나를 실행합니다.
//! 추출자는 인자 순서대로 실행되므로 `Path`/`Query`를 앞에 두어
//! 잘못된 입력은 연결을 빌리기 전에 거부됩니다.
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /products/ | `list_products` | 전체 상품 |
//! | GET | /products/{product_id} | `get_product` | 단일 상품 (없으면 404) |
//! | GET | /products/search?name= | `search_products` | 이름 부분 검색 |
//! | GET | /products/filter/category?category= | `filter_by_category` | 카테고리 일치 |
//! | GET | /products/filter/price?min_price=&max_price= | `filter_by_price` | 가격 범위 |
//! | GET | /products/paginated?limit=&offset= | `list_paginated` | 페이지 단위 목록 |
//! | GET | /products/in-stock?status= | `filter_by_stock` | 재고 여부 |
//!
//! ## 입력 검증
//! 필수 파라미터 누락이나 타입 오류(`?status=maybe`, `?limit=-1`)는 `Query`/`Path`
//! 추출자가 핸들러 실행 전에 400으로 거부합니다.

use crate::{
    db::{self, DbSession, Page},
    error::AppError,
    models::Product,
};
use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{de, Deserialize, Deserializer};

/// `GET /products/search?name=...`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// 검색어 (필수). 빈 문자열이면 전체 목록입니다.
    pub name: String,
}

/// `GET /products/filter/category?category=...`
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: String,
}

/// `GET /products/filter/price?min_price=...&max_price=...`
///
/// 두 경계 모두 선택 사항입니다. 빠진 쪽은 제약이 없습니다.
#[derive(Debug, Deserialize)]
pub struct PriceRangeQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// `GET /products/paginated?limit=...&offset=...`
///
/// `u64`이므로 음수는 역직렬화 단계에서 거부됩니다.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    Page::default().limit
}

impl From<PaginationQuery> for Page {
    fn from(query: PaginationQuery) -> Self {
        Page {
            limit: query.limit,
            offset: query.offset,
        }
    }
}

/// `GET /products/in-stock?status=...`
#[derive(Debug, Deserialize)]
pub struct StockQuery {
    #[serde(deserialize_with = "deserialize_flag")]
    pub status: bool,
}

/// 쿼리 문자열의 불리언 값을 파싱합니다.
///
/// `true/1/yes/on`과 `false/0/no/off`를 대소문자 구분 없이 받고,
/// 그 밖의 값은 역직렬화 에러(→ 400)입니다.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        de::Error::invalid_value(de::Unexpected::Str(&raw), &"a boolean (true/false, 1/0, yes/no, on/off)")
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `GET /products/`: 전체 상품 목록
pub async fn list_products(mut session: DbSession) -> Result<Json<Vec<Product>>, AppError> {
    let products = db::list_products(&mut session).await?;
    Ok(Json(products))
}

/// `GET /products/{product_id}`: 단일 상품 조회
///
/// 정수가 아닌 경로(`/products/abc`)는 `Path<i64>`가 400으로 거부합니다.
pub async fn get_product(
    Path(product_id): Path<i64>,
    mut session: DbSession,
) -> Result<Json<Product>, AppError> {
    let product = db::get_product(&mut session, product_id)
        .await?
        .ok_or(AppError::NotFound("Product"))?;
    Ok(Json(product))
}

/// `GET /products/search?name=...`: 이름 부분 검색 (대소문자 무시)
pub async fn search_products(
    Query(query): Query<SearchQuery>,
    mut session: DbSession,
) -> Result<Json<Vec<Product>>, AppError> {
    tracing::debug!(name = %query.name, "searching products");
    let products = db::search_products(&mut session, &query.name).await?;
    Ok(Json(products))
}

/// `GET /products/filter/category?category=...`: 카테고리 정확히 일치
pub async fn filter_by_category(
    Query(query): Query<CategoryQuery>,
    mut session: DbSession,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = db::filter_by_category(&mut session, &query.category).await?;
    Ok(Json(products))
}

/// `GET /products/filter/price`: 가격 범위 필터 (경계 포함)
///
/// `NaN`이나 `inf`는 `f64`로 파싱되지만 가격 비교에 의미가 없으므로 400을 반환합니다.
/// `min_price > max_price`는 에러가 아니라 빈 목록입니다.
pub async fn filter_by_price(
    Query(query): Query<PriceRangeQuery>,
    mut session: DbSession,
) -> Result<Json<Vec<Product>>, AppError> {
    for (key, bound) in [("min_price", query.min_price), ("max_price", query.max_price)] {
        if bound.is_some_and(|v| !v.is_finite()) {
            return Err(AppError::BadRequest(format!("{key} must be a finite number")));
        }
    }

    tracing::debug!(min_price = ?query.min_price, max_price = ?query.max_price, "filtering by price");
    let products = db::filter_by_price(&mut session, query.min_price, query.max_price).await?;
    Ok(Json(products))
}

/// `GET /products/paginated`: `limit`(기본 10), `offset`(기본 0)
pub async fn list_paginated(
    Query(query): Query<PaginationQuery>,
    mut session: DbSession,
) -> Result<Json<Vec<Product>>, AppError> {
    let page = Page::from(query);
    tracing::debug!(limit = page.limit, offset = page.offset, "listing page");
    let products = db::list_paginated(&mut session, page).await?;
    Ok(Json(products))
}

/// `GET /products/in-stock?status=...`: 재고 여부 필터
pub async fn filter_by_stock(
    Query(query): Query<StockQuery>,
    mut session: DbSession,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = db::filter_by_stock(&mut session, query.status).await?;
    Ok(Json(products))
}
