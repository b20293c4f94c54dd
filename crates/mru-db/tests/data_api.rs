//! Request-shape tests against a mock data API.

use mru_config::{BackendConfig, StorageConfig};
use mru_core::MarketError;
use mru_db::MarketClient;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANON: &str = "anon-key";
const SINGLE: &str = "application/vnd.pgrst.object+json";

fn client(server: &MockServer) -> MarketClient {
    let backend = BackendConfig {
        url: server.uri(),
        anon_key: ANON.into(),
        ..BackendConfig::default()
    };
    MarketClient::new(&backend, &StorageConfig::default()).expect("client builds")
}

fn product_row(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "user_id": "seller-1",
        "title": title,
        "description": "Gently used",
        "price": 25.0,
        "stock_count": 1,
        "image": {"images": ["lamp.png"]},
        "isListed": true,
        "isDeleted": false,
        "created_at": "2025-03-14T10:00:00Z"
    })
}

fn interaction_row(blocked_first: bool) -> Value {
    json!({
        "id": 7,
        "user_id_1": "bob",
        "user_id_2": "alice",
        "user_1_is_blocked": blocked_first,
        "user_1_is_muted": false,
        "user_2_is_blocked": false,
        "user_2_is_muted": false,
        "created_at": "2025-03-14T10:00:00Z"
    })
}

fn no_rows() -> ResponseTemplate {
    ResponseTemplate::new(406).set_body_json(json!({
        "code": "PGRST116",
        "message": "JSON object requested, multiple (or no) rows returned",
        "details": "The result contains 0 rows",
        "hint": null
    }))
}

#[tokio::test]
async fn single_lookup_with_no_rows_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Product_Information"))
        .and(query_param("id", "eq.404"))
        .and(header("accept", SINGLE))
        .and(header("apikey", ANON))
        .and(header("accept-profile", "mru_dev"))
        .respond_with(no_rows())
        .expect(1)
        .mount(&server)
        .await;

    let error = client(&server).product(404).await.expect_err("no rows");
    assert_eq!(
        error,
        MarketError::NotFound {
            entity: "product".into()
        }
    );
}

#[tokio::test]
async fn backend_errors_pass_through_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/Reports"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "42501",
            "message": "permission denied for table Reports",
            "details": null,
            "hint": null
        })))
        .mount(&server)
        .await;

    let error = client(&server)
        .remove_reports("uid-1", &[3])
        .await
        .expect_err("denied");
    assert_eq!(error.code(), Some("42501"));
    assert_eq!(error.to_string(), "permission denied for table Reports");
}

#[tokio::test]
async fn invalid_price_never_reaches_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/Product_Information"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut builder = client.product_builder();
    builder
        .seller("seller-1")
        .and_then(|b| b.title("Desk Lamp"))
        .and_then(|b| b.description("Gently used"))
        .and_then(|b| b.stock("1"))
        .expect("valid fields");
    let error = builder.price("-5").expect_err("negative");
    assert_eq!(error.message, "Product price cannot be negative");

    let error = builder.submit().await.expect_err("price never set");
    assert!(error.is_validation());
}

#[tokio::test]
async fn submit_inserts_only_validated_columns() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/Product_Information"))
        .and(query_param("select", "id"))
        .and(header("content-profile", "mru_dev"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({
            "user_id": "seller-1",
            "title": "Desk Lamp",
            "description": "Gently used",
            "price": 25.0,
            "stock_count": 1,
            "image": {"images": ["lamp.png"]}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 31})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut builder = client.product_builder();
    builder
        .seller("seller-1")
        .and_then(|b| b.title(" Desk Lamp "))
        .and_then(|b| b.description("Gently used"))
        .and_then(|b| b.price("25"))
        .and_then(|b| b.stock("1"))
        .and_then(|b| b.image(&["lamp.png"]))
        .expect("valid fields");
    assert_eq!(builder.submit().await.expect("inserted").id, 31);
}

#[tokio::test]
async fn block_updates_the_targets_side_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/User_Interactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(interaction_row(false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/User_Interactions"))
        .and(query_param("id", "eq.7"))
        .and(body_json(json!({"user_1_is_blocked": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(interaction_row(true)))
        .expect(1)
        .mount(&server)
        .await;

    // bob sits in user_id_1, so alice blocking bob writes side one
    let row = client(&server)
        .block("alice", "bob", true)
        .await
        .expect("blocked");
    assert!(row.is_blocked("bob"));
    assert!(!row.is_blocked("alice"));
}

#[tokio::test]
async fn category_filter_intersects_two_queries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Product_Information"))
        .and(query_param("price", "gte.10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_row(1, "Desk Lamp"),
            product_row(2, "Calculus Textbook"),
            product_row(3, "Bike Lock"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Category_Assigned_Products"))
        .and(query_param("select", "product_id"))
        .and(query_param("product_id", r#"in.("1","2","3")"#))
        .and(query_param("category_id", r#"in.("4")"#))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"product_id": 2}, {"product_id": 3}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut filter = client.product_filter();
    filter
        .price(40.0, 10.0)
        .and_then(|f| f.categories(&[4]))
        .expect("valid");
    let ids: Vec<i64> = filter
        .find()
        .await
        .expect("found")
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn category_filter_skips_second_query_when_nothing_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Product_Information"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Category_Assigned_Products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut filter = client.product_filter();
    filter.categories(&[4]).expect("valid");
    assert!(filter.find().await.expect("empty").is_empty());
}

#[tokio::test]
async fn bookmark_creates_bookmarker_on_first_use() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Shopping_Cart"))
        .and(query_param("user_id", "eq.uid-1"))
        .respond_with(no_rows())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/Shopping_Cart"))
        .and(body_json(json!({"user_id": "uid-1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "user_id": "uid-1",
            "created_at": "2025-03-14T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/Shopping_Cart_Products"))
        .and(body_json(json!([{"shopping_cart_id": 5, "product_id": 12}])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "shopping_cart_id": 5,
            "product_id": 12,
            "created_at": "2025-03-14T10:00:01Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let stored = client(&server)
        .bookmark("uid-1", &[12])
        .await
        .expect("bookmarked");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].shopping_cart_id, 5);
}

#[tokio::test]
async fn bookmark_never_adds_a_bookmarker_when_several_exist() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Shopping_Cart"))
        .and(query_param("user_id", "eq.uid-1"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned",
            "details": "The result contains 2 rows",
            "hint": null
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/Shopping_Cart"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let error = client(&server)
        .bookmark("uid-1", &[12])
        .await
        .expect_err("ambiguous bookmarker");
    assert!(!error.is_not_found());
    assert!(matches!(
        error,
        MarketError::Backend(ref backend) if backend.code.as_deref() == Some("PGRST116")
    ));
}

#[tokio::test]
async fn mark_sold_calls_procedure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/mark_product_as_sold"))
        .and(body_json(json!({"product_id_param": 9})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).mark_sold(9).await.expect("sold");
}

#[tokio::test]
async fn average_rating_is_computed_by_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Reviews"))
        .and(query_param("select", "rating:rating.avg()"))
        .and(query_param("created_on_id", "eq.seller-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rating": 4.5})))
        .expect(1)
        .mount(&server)
        .await;

    let average = client(&server)
        .average_seller_rating("seller-1")
        .await
        .expect("average");
    assert_eq!(average, Some(4.5));
}

#[tokio::test]
async fn signed_in_requests_use_session_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Messages"))
        .and(header("authorization", "Bearer user-jwt"))
        .and(query_param("visible", "eq.true"))
        .and(query_param("order", "created_at.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.set_access_token(Some("user-jwt".into()));
    assert!(client.messages(3).await.expect("messages").is_empty());
}

#[tokio::test]
async fn close_reports_is_scoped_to_reporter() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/Reports"))
        .and(query_param("created_by_id", "eq.uid-1"))
        .and(query_param("id", r#"in.("3","4")"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let closed = client(&server)
        .close_reports("uid-1", &[3, 4])
        .await
        .expect("closed");
    assert!(closed.is_empty());

    let requests = server.received_requests().await.expect("recording on");
    let body: Value = serde_json::from_slice(&requests[0].body).expect("json body");
    assert_eq!(body["is_closed"], json!(true));
    assert!(body["closed_date"].is_string());
}

#[tokio::test]
async fn modify_review_rejects_out_of_range_rating_before_io() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client(&server)
        .modify_review("uid-1", 2, Some(5.5), None)
        .await
        .expect_err("too high");
    assert!(error.is_validation());
}
