//! # 상품 데이터베이스 쿼리 모듈
//!
//! `products` 테이블에 대한 읽기 전용 쿼리 함수들입니다.
//! HTTP 표면은 상품을 만들거나 수정하지 않으므로 INSERT/UPDATE 함수는 없습니다.
//!
//! ## 동적 쿼리 구성
//! 필터 조건은 요청마다 달라집니다 (가격 하한만, 상한만, 둘 다, 둘 다 없음...).
//! `ProductFilter`는 필터 없는 `SELECT`에서 시작해서 주어진 조건만 `WHERE`/`AND`로
//! 이어 붙입니다. 값은 모두 `push_bind`로 바인딩하므로 SQL 문자열에 사용자 입력이
//! 직접 들어가지 않습니다.
//!
//! 모든 함수는 `&mut SqliteConnection`(요청마다 빌린 세션)을 받습니다.

use crate::error::AppError;
use crate::models::Product;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

/// 필터 없는 기본 조회 쿼리. 모든 목록 쿼리가 여기서 시작합니다.
const SELECT_PRODUCTS: &str = "SELECT id, name, category, price, in_stock FROM products";

/// `LIMIT`/`OFFSET` 윈도우
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: 10, offset: 0 }
    }
}

/// 상품 목록 조회 조건
///
/// 각 필드가 `None`이면 해당 조건은 쿼리에 들어가지 않습니다.
/// 빌더 메서드는 `self`를 받아 반환하므로 체이닝할 수 있습니다:
///
/// ```
/// use catalog::db::ProductFilter;
///
/// let filter = ProductFilter::new().min_price(1.0).in_stock(true);
/// assert_eq!(filter.build().sql(),
///     "SELECT id, name, category, price, in_stock FROM products \
///      WHERE price >= ? AND in_stock = ? ORDER BY id");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name_contains: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
    pub page: Option<Page>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이름에 `needle`이 (대소문자 무시) 포함된 상품
    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// `price >= min` (경계 포함)
    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    /// `price <= max` (경계 포함)
    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    /// 조건을 SQL로 조립합니다.
    ///
    /// 바인딩 값은 모두 소유된 값(String, f64 등)이라 반환된 빌더는 `self`를 빌리지 않습니다.
    /// 결과는 항상 `id`순으로 정렬되어 페이지네이션 윈도우가 요청 간에 안정적입니다.
    pub fn build(&self) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(SELECT_PRODUCTS);
        let mut first = true;

        if let Some(needle) = &self.name_contains {
            push_clause(&mut qb, &mut first);
            // LIKE는 ASCII 범위에서 대소문자를 구분하지 않습니다 (SQLite 기본값).
            // 입력의 `%`, `_`는 와일드카드가 아닌 문자 그대로 매칭되도록 이스케이프합니다.
            qb.push("name LIKE ");
            qb.push_bind(format!("%{}%", escape_like(needle)));
            qb.push(" ESCAPE '\\'");
        }

        if let Some(category) = &self.category {
            push_clause(&mut qb, &mut first);
            qb.push("category = ");
            qb.push_bind(category.clone());
        }

        if let Some(min) = self.min_price {
            push_clause(&mut qb, &mut first);
            qb.push("price >= ");
            qb.push_bind(min);
        }

        if let Some(max) = self.max_price {
            push_clause(&mut qb, &mut first);
            qb.push("price <= ");
            qb.push_bind(max);
        }

        if let Some(in_stock) = self.in_stock {
            push_clause(&mut qb, &mut first);
            qb.push("in_stock = ");
            qb.push_bind(in_stock);
        }

        qb.push(" ORDER BY id");

        if let Some(page) = self.page {
            qb.push(" LIMIT ");
            qb.push_bind(clamp_to_i64(page.limit));
            qb.push(" OFFSET ");
            qb.push_bind(clamp_to_i64(page.offset));
        }

        qb
    }
}

/// 첫 조건 앞에는 ` WHERE `, 그 뒤로는 ` AND `를 붙입니다.
fn push_clause(qb: &mut QueryBuilder<'static, Sqlite>, first: &mut bool) {
    qb.push(if *first { " WHERE " } else { " AND " });
    *first = false;
}

/// SQLite 정수는 i64이므로 그보다 큰 값은 `i64::MAX`로 자릅니다.
/// 어느 쪽이든 실제 행 수보다 크므로 결과는 같습니다.
fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// LIKE 패턴의 메타문자(`\`, `%`, `_`)를 `\`로 이스케이프합니다.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 조건에 맞는 상품 목록을 조회합니다. 아래 함수들은 모두 이 함수를 거칩니다.
pub async fn find_products(
    conn: &mut SqliteConnection,
    filter: &ProductFilter,
) -> Result<Vec<Product>, AppError> {
    let mut qb = filter.build();
    let products = qb
        .build_query_as::<Product>()
        .fetch_all(&mut *conn)
        .await?;

    Ok(products)
}

/// 모든 상품을 조회합니다.
pub async fn list_products(conn: &mut SqliteConnection) -> Result<Vec<Product>, AppError> {
    find_products(conn, &ProductFilter::new()).await
}

/// ID로 상품 하나를 조회합니다.
///
/// # 반환값
/// - `Ok(Some(Product))`: 상품을 찾은 경우
/// - `Ok(None)`: 해당 ID의 상품이 없는 경우 (라우트 핸들러에서 404로 변환)
pub async fn get_product(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Product>, AppError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, category, price, in_stock FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(product)
}

/// 이름에 `name`이 포함된 상품을 대소문자 구분 없이 검색합니다.
/// 빈 문자열은 모든 상품과 매칭됩니다.
pub async fn search_products(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Vec<Product>, AppError> {
    find_products(conn, &ProductFilter::new().name_contains(name)).await
}

/// 카테고리가 정확히 일치하는 상품
pub async fn filter_by_category(
    conn: &mut SqliteConnection,
    category: &str,
) -> Result<Vec<Product>, AppError> {
    find_products(conn, &ProductFilter::new().category(category)).await
}

/// 가격 범위로 필터링합니다. 주어진 경계만 적용되고, 둘 다 없으면 전체 목록입니다.
pub async fn filter_by_price(
    conn: &mut SqliteConnection,
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Result<Vec<Product>, AppError> {
    let filter = ProductFilter {
        min_price,
        max_price,
        ..ProductFilter::default()
    };
    find_products(conn, &filter).await
}

/// `page.offset`개를 건너뛰고 최대 `page.limit`개를 반환합니다.
/// 범위를 벗어난 offset은 에러가 아니라 빈 목록입니다.
pub async fn list_paginated(
    conn: &mut SqliteConnection,
    page: Page,
) -> Result<Vec<Product>, AppError> {
    find_products(conn, &ProductFilter::new().page(page)).await
}

/// 재고 여부(`in_stock`)로 필터링합니다.
pub async fn filter_by_stock(
    conn: &mut SqliteConnection,
    in_stock: bool,
) -> Result<Vec<Product>, AppError> {
    find_products(conn, &ProductFilter::new().in_stock(in_stock)).await
}
