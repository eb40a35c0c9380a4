//! Ingredient lookup against the mock server

use crate::integration::mock_server::{MockServerFixture, NIACINAMIDE_JSON};
use dermalytics::{ErrorKind, Ingredient};

#[tokio::test]
async fn test_get_ingredient_returns_body() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/ingredients/Niacinamide", 200, NIACINAMIDE_JSON)
        .await;

    let ingredient = fixture.client().get_ingredient("Niacinamide").await.unwrap();

    let expected: Ingredient = serde_json::from_str(NIACINAMIDE_JSON).unwrap();
    assert_eq!(ingredient, expected);
    assert_eq!(ingredient.category.name, "Vitamins");
    assert_eq!(ingredient.description.as_deref(), Some("A form of vitamin B3"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_ingredient_trims_and_encodes_name() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/ingredients/Hyaluronic%20Acid", 200, NIACINAMIDE_JSON)
        .await;

    fixture
        .client()
        .get_ingredient("  Hyaluronic Acid  ")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_ingredient_slash_stays_in_segment() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/ingredients/PEG%2FPPG-18", 200, NIACINAMIDE_JSON)
        .await;

    fixture.client().get_ingredient("PEG/PPG-18").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_blank_name_fails_without_network() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_untouched("GET").await;
    let client = fixture.client();

    for name in ["", "   "] {
        let err = client.get_ingredient(name).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Ingredient name is required");
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trailing_slash_base_url_hits_same_path() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/ingredients/Aqua", 200, NIACINAMIDE_JSON)
        .await;

    let client = dermalytics::DermalyticsClient::builder()
        .api_key("  test-key  ")
        .base_url(format!("{}/", fixture.base_url))
        .build()
        .unwrap();
    client.get_ingredient("Aqua").await.unwrap();
    mock.assert_async().await;
}
