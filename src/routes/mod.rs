//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `categories`: 고정 응답 카테고리 엔드포인트
//! - `health`: 서버/DB 상태 확인 (헬스체크)
//! - `products`: 상품 조회/검색/필터/페이지네이션

pub mod categories;
pub mod health;
pub mod products;

// app.rs에서 `routes::list_products`처럼 바로 접근 가능하게 재공개합니다.
pub use categories::*;
pub use health::*;
pub use products::*;
