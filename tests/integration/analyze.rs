//! Product analysis against the mock server

use crate::integration::mock_server::{MockServerFixture, ANALYSIS_JSON, TEST_API_KEY};
use dermalytics::{ErrorKind, ProductAnalysis};
use mockito::Matcher;

#[tokio::test]
async fn test_analyze_posts_ingredients() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/analyze")
        .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(
            r#"{"ingredients":["Aqua","Glycerin"]}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ANALYSIS_JSON)
        .create_async()
        .await;

    let analysis = fixture
        .client()
        .analyze(&["Aqua", "Glycerin"])
        .await
        .unwrap();

    let expected: ProductAnalysis = serde_json::from_str(ANALYSIS_JSON).unwrap();
    assert_eq!(analysis, expected);
    assert_eq!(analysis.ingredients.len(), 2);
    assert!(analysis.warnings.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_accepts_owned_strings() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("POST", "/analyze", 200, ANALYSIS_JSON)
        .await;

    let names: Vec<String> = vec!["Aqua".into(), "Glycerin".into()];
    fixture.client().analyze(&names).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_list_fails_without_network() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_untouched("POST").await;
    let client = fixture.client();

    let empty: Vec<String> = Vec::new();
    let err = client.analyze(&empty).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.message(),
        "Ingredients array is required and must not be empty"
    );

    let absent: Option<Vec<&str>> = None;
    let err = client
        .analyze(absent.as_deref().unwrap_or_default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(ANALYSIS_JSON)
        .expect(4)
        .create_async()
        .await;
    let client = fixture.client();
    let cloned = client.clone();

    let (a, b, c, d) = tokio::join!(
        client.analyze(&["Aqua"]),
        cloned.analyze(&["Glycerin"]),
        client.analyze(&["Aqua", "Glycerin"]),
        cloned.analyze(&["Niacinamide"]),
    );
    for result in [a, b, c, d] {
        assert_eq!(result.unwrap().safety_status, "safe");
    }
    mock.assert_async().await;
}
