//! # 상품 모델 정의
//!
//! 카탈로그의 유일한 엔티티인 상품(Product)을 정의합니다.

use serde::{Deserialize, Serialize};

/// 상품 엔티티: DB의 `products` 테이블 한 행(row)에 대응합니다.
///
/// - `Serialize`: API 응답 JSON `{id, name, category, price, in_stock}` 생성
/// - `sqlx::FromRow`: SQL 결과 행을 이 구조체로 자동 매핑
///
/// SQLite에는 BOOLEAN 타입이 없어 `in_stock`은 INTEGER 0/1로 저장되지만,
/// sqlx가 읽을 때 `bool`로 변환해 줍니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// 상품 고유 식별자 (INTEGER PRIMARY KEY)
    pub id: i64,
    /// 상품 이름. 검색은 대소문자를 구분하지 않는 부분 문자열 매칭입니다.
    pub name: String,
    /// 카테고리 (예: "fruit")
    pub category: String,
    pub price: f64,
    pub in_stock: bool,
}
