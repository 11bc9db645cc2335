//! # Catalog
//!
//! 상품 카탈로그를 읽기 전용 HTTP API로 노출하는 라이브러리입니다.
//! 실행 파일(main.rs)은 설정 로딩과 서버 시작만 담당하고,
//! 라우터와 DB 계층은 여기서 공개하여 통합 테스트에서도 같은 코드를 사용합니다.
//!
//! - `app`: 라우터 조립과 공유 상태(`AppState`)
//! - `config`: 환경변수 기반 설정
//! - `db`: SQLite 쿼리, 동적 필터 빌더, 요청 단위 세션
//! - `error`: `AppError`와 HTTP 에러 응답 변환
//! - `models`: 상품 엔티티
//! - `routes`: HTTP 핸들러

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
