mod common;

use catalog::models::Product;
use common::{TestServer, FRUIT};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn get_products(srv: &TestServer, path: &str) -> Vec<Product> {
    let res = reqwest::get(srv.url(path)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK, "GET {path}");
    res.json().await.unwrap()
}

fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn lists_all_products_with_and_without_trailing_slash() {
    let srv = TestServer::spawn(FRUIT).await;

    assert_eq!(ids(&get_products(&srv, "/products/").await), vec![1, 2]);
    assert_eq!(ids(&get_products(&srv, "/products").await), vec![1, 2]);
}

#[tokio::test]
async fn product_json_has_the_entity_fields() {
    let srv = TestServer::spawn(FRUIT).await;

    let body: Value = reqwest::get(srv.url("/products/1"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Apple", "category": "fruit", "price": 1.5, "in_stock": true })
    );
}

#[tokio::test]
async fn missing_product_is_404_with_message() {
    let srv = TestServer::spawn(FRUIT).await;

    let res = reqwest::get(srv.url("/products/99")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Product not found");
}

#[tokio::test]
async fn session_is_released_after_an_error_response() {
    // 테스트 풀은 연결이 하나뿐이라, 404 경로에서 연결이 반환되지 않으면
    // 다음 요청은 acquire 타임아웃으로 끝납니다.
    let srv = TestServer::spawn(FRUIT).await;

    for _ in 0..3 {
        let res = reqwest::get(srv.url("/products/99")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = reqwest::get(srv.url("/products/1")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = reqwest::get(srv.url("/products/filter/price?min_price=inf")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ids(&get_products(&srv, "/products/").await), vec![1, 2]);
}

#[tokio::test]
async fn non_integer_id_is_a_client_error() {
    let srv = TestServer::spawn(FRUIT).await;

    let res = reqwest::get(srv.url("/products/abc")).await.unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn static_segments_are_not_parsed_as_ids() {
    let srv = TestServer::spawn(FRUIT).await;

    assert_eq!(ids(&get_products(&srv, "/products/search?name=ban").await), vec![2]);
    assert_eq!(ids(&get_products(&srv, "/products/paginated").await), vec![1, 2]);
    assert_eq!(ids(&get_products(&srv, "/products/in-stock?status=true").await), vec![1]);
}

#[tokio::test]
async fn search_requires_name_and_matches_case_insensitively() {
    let srv = TestServer::spawn(FRUIT).await;

    assert_eq!(ids(&get_products(&srv, "/products/search?name=APPLE").await), vec![1]);
    assert_eq!(ids(&get_products(&srv, "/products/search?name=").await), vec![1, 2]);
    assert!(get_products(&srv, "/products/search?name=kiwi").await.is_empty());

    let res = reqwest::get(srv.url("/products/search")).await.unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn filters_by_exact_category() {
    let srv = TestServer::spawn(&[
        (1, "Apple", "fruit", 1.5, true),
        (2, "Carrot", "vegetable", 0.8, true),
    ])
    .await;

    assert_eq!(ids(&get_products(&srv, "/products/filter/category?category=vegetable").await), vec![2]);
    assert!(get_products(&srv, "/products/filter/category?category=veg").await.is_empty());

    let res = reqwest::get(srv.url("/products/filter/category")).await.unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn filters_by_price_range() {
    let srv = TestServer::spawn(FRUIT).await;

    assert_eq!(ids(&get_products(&srv, "/products/filter/price?min_price=1.0").await), vec![1]);
    assert_eq!(ids(&get_products(&srv, "/products/filter/price?max_price=1").await), vec![2]);
    assert_eq!(
        ids(&get_products(&srv, "/products/filter/price?min_price=0.5&max_price=1.5").await),
        vec![1, 2]
    );
    assert_eq!(ids(&get_products(&srv, "/products/filter/price").await), vec![1, 2]);

    let res = reqwest::get(srv.url("/products/filter/price?min_price=cheap")).await.unwrap();
    assert!(res.status().is_client_error());

    let res = reqwest::get(srv.url("/products/filter/price?max_price=NaN")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn paginates_with_defaults_and_empty_tail() {
    let rows: Vec<(i64, String)> = (1..=15).map(|i| (i, format!("Item {i}"))).collect();
    let fixtures: Vec<(i64, &str, &str, f64, bool)> = rows
        .iter()
        .map(|(id, name)| (*id, name.as_str(), "misc", 1.0, true))
        .collect();
    let srv = TestServer::spawn(&fixtures).await;

    let first = get_products(&srv, "/products/paginated").await;
    assert_eq!(ids(&first), (1..=10).collect::<Vec<_>>());

    let tail = get_products(&srv, "/products/paginated?limit=10&offset=10").await;
    assert_eq!(ids(&tail), (11..=15).collect::<Vec<_>>());

    assert!(get_products(&srv, "/products/paginated?offset=100").await.is_empty());

    // u32 범위를 넘는 정수도 유효한 limit/offset입니다
    assert_eq!(ids(&get_products(&srv, "/products/paginated?limit=5000000000").await).len(), 15);
    assert!(get_products(&srv, "/products/paginated?offset=5000000000").await.is_empty());

    let res = reqwest::get(srv.url("/products/paginated?limit=-1")).await.unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn stock_filter_partitions_products() {
    let srv = TestServer::spawn(FRUIT).await;

    assert_eq!(ids(&get_products(&srv, "/products/in-stock?status=true").await), vec![1]);
    assert_eq!(ids(&get_products(&srv, "/products/in-stock?status=false").await), vec![2]);

    for flag in ["1", "True", "yes", "on", "YES"] {
        let path = format!("/products/in-stock?status={flag}");
        assert_eq!(ids(&get_products(&srv, &path).await), vec![1], "{flag}");
    }
    for flag in ["0", "False", "no", "off"] {
        let path = format!("/products/in-stock?status={flag}");
        assert_eq!(ids(&get_products(&srv, &path).await), vec![2], "{flag}");
    }

    let res = reqwest::get(srv.url("/products/in-stock")).await.unwrap();
    assert!(res.status().is_client_error());
    let res = reqwest::get(srv.url("/products/in-stock?status=maybe")).await.unwrap();
    assert!(res.status().is_client_error());
}
