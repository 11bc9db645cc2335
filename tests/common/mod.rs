#![allow(dead_code)]

use catalog::{
    app::{build_app, AppState},
    db::MIGRATOR,
};
use sqlx::sqlite::SqlitePoolOptions;

pub struct TestServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// 인메모리 DB에 `rows`를 넣고, 실제 라우터를 임시 포트에 띄웁니다.
    pub async fn spawn(rows: &[(i64, &str, &str, f64, bool)]) -> Self {
        // 인메모리 DB는 마지막 연결이 닫히면 사라지므로 연결 하나를 계속 유지합니다.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        MIGRATOR.run(&pool).await.expect("failed to run migrations");

        for &(id, name, category, price, in_stock) in rows {
            sqlx::query(
                "INSERT INTO products (id, name, category, price, in_stock) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(id)
            .bind(name)
            .bind(category)
            .bind(price)
            .bind(in_stock)
            .execute(&pool)
            .await
            .expect("failed to insert fixture row");
        }

        let app = build_app(AppState { pool });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub const FRUIT: &[(i64, &str, &str, f64, bool)] = &[
    (1, "Apple", "fruit", 1.5, true),
    (2, "Banana", "fruit", 0.5, false),
];
