mod common;

use common::{init_test_logging, subscription_json, user_json, TestEnvironment};
use pretty_assertions::assert_eq;
use recipehub_client::client::{NewSubscription, NewUser, UserUpdate};
use recipehub_client::ClientError;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_user_parses_dates() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    Mock::given(method("GET"))
        .and(path("/User/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(3, "dana")))
        .mount(&env.server)
        .await;

    let user = env.client.users.get(3).await.expect("fetch succeeds");
    assert_eq!(user.username.as_deref(), Some("dana"));
    assert_eq!(user.total_recipes, 12);
    let joined = user.join_date.expect("join date parses");
    assert_eq!(joined.to_string(), "2024-01-15 10:30:00");
}

#[tokio::test]
async fn test_create_user() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    Mock::given(method("POST"))
        .and(path("/User"))
        .and(body_json(serde_json::json!({
            "username": "nora",
            "email": "nora@example.com",
            "password": "secret",
            "subscriptionId": 1,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json(12, "nora")))
        .expect(1)
        .mount(&env.server)
        .await;

    let stored = env
        .client
        .users
        .create(&NewUser {
            username: "nora".to_string(),
            email: "nora@example.com".to_string(),
            password: "secret".to_string(),
            subscription_id: 1,
        })
        .await
        .expect("creation succeeds");
    assert_eq!(stored.id, 12);
}

#[tokio::test]
async fn test_partial_user_update_sends_only_set_fields() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    // Exact body match: unset fields must be absent, not null.
    Mock::given(method("PUT"))
        .and(path("/User/3"))
        .and(body_json(serde_json::json!({
            "email": "dana@newhost.example",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(3, "dana")))
        .expect(1)
        .mount(&env.server)
        .await;

    env.client
        .users
        .update(3, &UserUpdate {
            email: Some("dana@newhost.example".to_string()),
            ..UserUpdate::default()
        })
        .await
        .expect("update succeeds");
}

#[tokio::test]
async fn test_delete_user() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    Mock::given(method("DELETE"))
        .and(path("/User/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    env.client.users.delete(3).await.expect("delete succeeds");
}

#[tokio::test]
async fn test_find_subscription_by_plan_name() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    Mock::given(method("GET"))
        .and(path("/Subscription"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            subscription_json(1, "Basic", 0.0),
            subscription_json(2, "Premium", 9.99),
        ])))
        .mount(&env.server)
        .await;

    let premium = env
        .client
        .subscriptions
        .by_type("premium")
        .await
        .expect("lookup succeeds")
        .expect("plan exists");
    assert_eq!(premium.id, 2);
    assert_eq!(premium.price, 9.99);

    let missing = env
        .client
        .subscriptions
        .by_type("Enterprise")
        .await
        .expect("lookup succeeds");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_create_subscription() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    Mock::given(method("POST"))
        .and(path("/Subscription"))
        .and(body_json(serde_json::json!({
            "subscriptionType": "Family",
            "price": 14.99,
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(subscription_json(4, "Family", 14.99)),
        )
        .expect(1)
        .mount(&env.server)
        .await;

    let stored = env
        .client
        .subscriptions
        .create(&NewSubscription {
            subscription_type: "Family".to_string(),
            price: 14.99,
        })
        .await
        .expect("creation succeeds");
    assert_eq!(stored.id, 4);
    assert_eq!(stored.subscription_type.as_deref(), Some("Family"));
}

#[tokio::test]
async fn test_update_subscription_price() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    Mock::given(method("PUT"))
        .and(path("/Subscription/2"))
        .and(body_json(serde_json::json!({
            "subscriptionType": "Premium",
            "price": 11.49,
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(subscription_json(2, "Premium", 11.49)),
        )
        .expect(1)
        .mount(&env.server)
        .await;

    let updated = env
        .client
        .subscriptions
        .update(2, &NewSubscription {
            subscription_type: "Premium".to_string(),
            price: 11.49,
        })
        .await
        .expect("update succeeds");
    assert_eq!(updated.price, 11.49);
}

#[tokio::test]
async fn test_delete_subscription() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    Mock::given(method("DELETE"))
        .and(path("/Subscription/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    env.client.subscriptions.delete(4).await.expect("delete succeeds");
}

#[tokio::test]
async fn test_negative_subscription_price_never_reaches_server() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");
    // No POST mock mounted: a request would surface as an API error.

    let err = env
        .client
        .subscriptions
        .create(&NewSubscription {
            subscription_type: "Basic".to_string(),
            price: -1.0,
        })
        .await
        .expect_err("rejected");
    assert!(matches!(err, ClientError::Validation(_)), "got: {err}");
}

#[tokio::test]
async fn test_list_dietary_preferences() {
    init_test_logging();
    let env = TestEnvironment::new().await.expect("test environment");

    Mock::given(method("GET"))
        .and(path("/DietaryPreference"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "preferenceName": "Vegetarian" },
            { "id": 2, "preferenceName": "Gluten-Free" },
        ])))
        .mount(&env.server)
        .await;

    let preferences = env
        .client
        .dietary_preferences
        .list_all()
        .await
        .expect("listing succeeds");
    assert_eq!(preferences.len(), 2);
    assert_eq!(preferences[0].preference_name.as_deref(), Some("Vegetarian"));
}
