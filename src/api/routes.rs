//! Routing definitions for the pizza shop API.

use crate::api::{AppState, handlers};
use axum::Router;
use axum::routing::{get, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Creates the API router with every route and the CORS and tracing layers.
///
/// ```ignore
/// let router = create_router(state);
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Pizzas
        .route(
            "/pizzas",
            get(handlers::pizza::list_pizzas).post(handlers::pizza::create_pizza),
        )
        .route(
            "/pizzas/specialty",
            get(handlers::pizza::list_specialty_pizzas),
        )
        .route(
            "/pizzas/{id}",
            get(handlers::pizza::get_pizza)
                .put(handlers::pizza::update_pizza)
                .delete(handlers::pizza::delete_pizza),
        )
        // Ingredients
        .route("/ing", get(handlers::ingredient::list_ingredients))
        .route(
            "/ing/available",
            get(handlers::ingredient::list_available_ingredients),
        )
        .route(
            "/ing/{id}",
            put(handlers::ingredient::update_ingredient),
        )
        // Orders
        .route(
            "/orders",
            get(handlers::order::list_orders).post(handlers::order::create_order),
        )
        .route(
            "/orders/{id}",
            get(handlers::order::get_order)
                .put(handlers::order::update_order)
                .delete(handlers::order::delete_order),
        )
        // Boards
        .route(
            "/boards",
            get(handlers::board::list_boards).post(handlers::board::create_board),
        )
        .route(
            "/boards/{id}",
            get(handlers::board::get_board).delete(handlers::board::delete_board),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::api::SimulatedLatency;
    use crate::api::error::ErrorBody;
    use crate::errors::Result;
    use crate::models::{Board, Ingredient, Order, Pizza};
    use crate::notify::{LogNotifier, Notifier};
    use crate::test_utils::*;
    use axum::body::{Body, Bytes};
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tokio::sync::mpsc;
    use tower::ServiceExt;

    /// Records every confirmation it is asked to send, optionally failing afterwards.
    struct RecordingNotifier {
        sent: mpsc::UnboundedSender<String>,
        fail: bool,
    }

    impl Notifier for RecordingNotifier {
        fn send_order_confirmation(&self, email_address: &str, _order: &Order) -> std::io::Result<()> {
            let _ = self.sent.send(email_address.to_string());
            if self.fail {
                Err(std::io::Error::other("mail relay unreachable"))
            } else {
                Ok(())
            }
        }
    }

    fn app(db: DatabaseConnection) -> Router {
        app_with(db, SimulatedLatency::default(), Arc::new(LogNotifier))
    }

    fn app_with(db: DatabaseConnection, latency: SimulatedLatency, notifier: Arc<dyn Notifier>) -> Router {
        create_router(AppState::new(db, latency, notifier))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes)
    }

    fn margherita_order() -> Value {
        json!({
            "orderStatus": "Pending",
            "delivery": true,
            "employeeName": "Sam",
            "orderTime": "2024-05-17T18:30:00",
            "custAddress": "123 Maple Street",
            "custEmail": "a@b.com",
            "pizzas": [{
                "pizzaSize": "large",
                "dough": "classic",
                "shape": "round",
                "sauceType": "traditional red",
                "available": true,
                "pizzaPrice": 15.0,
                "status": "Pending",
                "ingredients": [
                    { "ingredientName": "Mozzarella" },
                    { "ingredientName": "Basil" }
                ]
            }]
        })
    }

    #[tokio::test]
    async fn test_health_check() -> Result<()> {
        let app = app(setup_test_db().await?);

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_then_fetch_it() -> Result<()> {
        init_test_tracing();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(RecordingNotifier { sent: tx, fail: false });
        let app = app_with(setup_with_ingredients().await?, SimulatedLatency::default(), notifier);

        let (status, body) = send(&app, Method::POST, "/orders", Some(margherita_order())).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Order = serde_json::from_slice(&body).unwrap();
        assert!(created.id > 0);
        assert_eq!(created.pizzas.len(), 1);
        assert_eq!(
            created.pizzas[0].ingredient_names().collect::<Vec<_>>(),
            vec!["Basil", "Mozzarella"]
        );

        let (status, body) = send(&app, Method::GET, &format!("/orders/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Order = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created);

        let emailed = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(emailed.as_deref(), Some("a@b.com"));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_confirmation_does_not_fail_the_order() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(RecordingNotifier { sent: tx, fail: true });
        let app = app_with(setup_with_ingredients().await?, SimulatedLatency::default(), notifier);

        let (status, _) = send(&app, Method::POST, "/orders", Some(margherita_order())).await;
        assert_eq!(status, StatusCode::CREATED);

        let attempted = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(attempted.as_deref(), Some("a@b.com"));

        let (status, body) = send(&app, Method::GET, "/orders", None).await;
        assert_eq!(status, StatusCode::OK);
        let orders: Vec<Order> = serde_json::from_slice(&body).unwrap();
        assert_eq!(orders.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_order_with_unknown_ingredient_is_a_server_error() -> Result<()> {
        let app = app(setup_with_ingredients().await?);
        let mut order = margherita_order();
        order["pizzas"][0]["ingredients"][1]["ingredientName"] = json!("Anchovy");

        let (status, body) = send(&app, Method::POST, "/orders", Some(order)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.message, "Unknown ingredient: Anchovy");

        let (_, body) = send(&app, Method::GET, "/orders", None).await;
        let orders: Vec<Order> = serde_json::from_slice(&body).unwrap();
        assert!(orders.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_board_is_404() -> Result<()> {
        let app = app(setup_test_db().await?);

        let (status, body) = send(&app, Method::GET, "/boards/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "No board found with id 999");
        Ok(())
    }

    #[tokio::test]
    async fn test_pizza_lifecycle() -> Result<()> {
        let app = app(setup_with_ingredients().await?);

        let input = json!({
            "pizzaSize": "medium",
            "dough": "thin",
            "shape": "square",
            "sauceType": "pesto",
            "description": "House special",
            "available": true,
            "pizzaPrice": 18.5,
            "isSpecialty": true,
            "status": "Pending",
            "ingredients": [{ "ingredientName": "Pepperoni" }]
        });
        let (status, body) = send(&app, Method::POST, "/pizzas", Some(input)).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Pizza = serde_json::from_slice(&body).unwrap();
        assert!(created.is_specialty);

        let (status, body) = send(&app, Method::GET, "/pizzas/specialty", None).await;
        assert_eq!(status, StatusCode::OK);
        let specialty: Vec<Pizza> = serde_json::from_slice(&body).unwrap();
        assert_eq!(specialty, vec![created.clone()]);

        // The path id wins over the body id
        let mut changed = created.clone();
        changed.id = 12345;
        changed.pizza_price = 20.0;
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/pizzas/{}", created.id),
            Some(serde_json::to_value(&changed).unwrap()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let echoed: Pizza = serde_json::from_slice(&body).unwrap();
        assert_eq!(echoed.id, created.id);

        let (status, body) = send(&app, Method::GET, &format!("/pizzas/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Pizza = serde_json::from_slice(&body).unwrap();
        assert!((fetched.pizza_price - 20.0).abs() < f64::EPSILON);

        let (status, body) = send(&app, Method::DELETE, &format!("/pizzas/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, _) = send(&app, Method::GET, &format!("/pizzas/{}", created.id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_pizza_are_404() -> Result<()> {
        let app = app(setup_with_ingredients().await?);
        let body = serde_json::to_value(test_pizza("large", &["Basil"])).unwrap();

        let (status, _) = send(&app, Method::PUT, "/pizzas/77", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, Method::DELETE, "/pizzas/77", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.message, "No pizza found with id 77");

        let (_, body) = send(&app, Method::GET, "/pizzas", None).await;
        let pizzas: Vec<Pizza> = serde_json::from_slice(&body).unwrap();
        assert!(pizzas.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_ingredient_routes() -> Result<()> {
        let app = app(setup_with_ingredients().await?);

        let (status, body) = send(&app, Method::GET, "/ing", None).await;
        assert_eq!(status, StatusCode::OK);
        let all: Vec<Ingredient> = serde_json::from_slice(&body).unwrap();
        assert_eq!(all.len(), 4);

        let (_, body) = send(&app, Method::GET, "/ing/available", None).await;
        let available: Vec<Ingredient> = serde_json::from_slice(&body).unwrap();
        assert_eq!(available.len(), 3);

        let truffle = all
            .iter()
            .find(|i| i.ingredient_name == "Truffle")
            .cloned()
            .unwrap();
        let restocked = Ingredient {
            is_available: true,
            ..truffle.clone()
        };
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/ing/{}", truffle.id),
            Some(serde_json::to_value(&restocked).unwrap()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/ing/available", None).await;
        let available: Vec<Ingredient> = serde_json::from_slice(&body).unwrap();
        assert_eq!(available.len(), 4);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/ing/999",
            Some(serde_json::to_value(&restocked).unwrap()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_unsupported_routes_return_501() -> Result<()> {
        let db = setup_test_db().await?;
        let board = create_test_board(&db, "Pending").await?;
        let app = app(db);

        let (status, body) = send(&app, Method::POST, "/boards", Some(json!({ "title": "Done" }))).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNSUPPORTED");

        let (status, _) = send(&app, Method::DELETE, &format!("/boards/{}", board.id), None).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

        let (status, _) = send(&app, Method::PUT, "/orders/1", Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

        let (status, _) = send(&app, Method::DELETE, "/orders/1", None).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

        let (status, body) = send(&app, Method::GET, "/boards", None).await;
        assert_eq!(status, StatusCode::OK);
        let boards: Vec<Board> = serde_json::from_slice(&body).unwrap();
        assert_eq!(boards.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() -> Result<()> {
        let app = app(setup_test_db().await?);

        let (status, _) = send(&app, Method::GET, "/pizzas/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_simulated_latency_delays_single_reads() -> Result<()> {
        let latency = SimulatedLatency::new(Duration::from_millis(50));
        let app = app_with(setup_test_db().await?, latency, Arc::new(LogNotifier));

        let started = Instant::now();
        let (status, _) = send(&app, Method::GET, "/boards/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(started.elapsed() >= latency.delay());
        Ok(())
    }

    #[tokio::test]
    async fn test_delayed_reads_pause_concurrently() -> Result<()> {
        let db = setup_with_ingredients().await?;
        let board = create_test_board(&db, "Pending").await?;
        let mut on_board = test_pizza("large", &["Mozzarella"]);
        on_board.board_id = Some(board.id);
        let pizza = crate::core::pizza::create_pizza(&db, &on_board).await?;
        let order = crate::core::order::create_order(
            &db,
            &test_order("a@b.com", vec![test_pizza("small", &["Basil"])]),
        )
        .await?;

        let latency = SimulatedLatency::new(Duration::from_millis(200));
        let app = app_with(db, latency, Arc::new(LogNotifier));

        let pizza_uri = format!("/pizzas/{}", pizza.id);
        let order_uri = format!("/orders/{}", order.id);
        let board_uri = format!("/boards/{}", board.id);

        let started = Instant::now();
        let (pizza_res, order_res, boards_res, board_res) = tokio::join!(
            send(&app, Method::GET, &pizza_uri, None),
            send(&app, Method::GET, &order_uri, None),
            send(&app, Method::GET, "/boards", None),
            send(&app, Method::GET, &board_uri, None),
        );
        let elapsed = started.elapsed();

        for (status, _) in [&pizza_res, &order_res, &boards_res, &board_res] {
            assert_eq!(*status, StatusCode::OK);
        }
        // Every route paused, but the pauses overlapped
        assert!(elapsed >= latency.delay());
        assert!(elapsed < latency.delay() * 2, "took {elapsed:?}");

        let started = Instant::now();
        let (status, _) = send(&app, Method::GET, "/pizzas", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(started.elapsed() < latency.delay() / 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_put_without_ingredients_keeps_them() -> Result<()> {
        let app = app(setup_with_ingredients().await?);

        let (_, body) = send(
            &app,
            Method::POST,
            "/pizzas",
            Some(serde_json::to_value(test_pizza("large", &["Mozzarella", "Basil"])).unwrap()),
        )
        .await;
        let created: Pizza = serde_json::from_slice(&body).unwrap();

        let mut without_ingredients = serde_json::to_value(&created).unwrap();
        without_ingredients.as_object_mut().unwrap().remove("ingredients");
        without_ingredients["status"] = json!("In Oven");

        let uri = format!("/pizzas/{}", created.id);
        let (status, _) = send(&app, Method::PUT, &uri, Some(without_ingredients)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, &uri, None).await;
        let fetched: Pizza = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched.status, "In Oven");
        assert_eq!(
            fetched.ingredient_names().collect::<Vec<_>>(),
            vec!["Basil", "Mozzarella"]
        );
        Ok(())
    }
}
