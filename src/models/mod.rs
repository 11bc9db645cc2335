//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `product`: 상품(Product) 엔티티

pub mod product;

pub use product::*;
