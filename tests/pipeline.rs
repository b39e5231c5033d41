//! End-to-end: mock API -> content client -> derived view models.

mod common;

use common::mock_api::{MockApi, Stub};
use folio::api::{endpoints, ContentClient, Post, Project};
use folio::archive::ChronoIndex;
use folio::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use folio::config::ApiConfig;
use folio::mvi::Reducer;

fn client_for(api: &MockApi) -> ContentClient {
    let config = ApiConfig {
        base_url: api.base_url(),
        ..ApiConfig::default()
    };
    ContentClient::new(&config)
}

#[tokio::test]
async fn fetched_posts_flow_into_the_archive() {
    let api = MockApi::start().await;
    api.stub(
        "/blogs/",
        Stub::json(
            r#"{"count": 3, "results": [
                {"id": 1, "title": "A", "slug": "a", "created_at": "2024-01-15"},
                {"id": 2, "title": "B", "slug": "b", "created_at": "2024-03-02"},
                {"id": 3, "title": "C", "slug": "c", "created_at": "2023-12-01"}
            ]}"#,
        ),
    )
    .await;

    let client = client_for(&api);
    let posts: Vec<Post> = client.fetch_collection(endpoints::BLOGS).await.unwrap();
    let index = ChronoIndex::build(&posts, 2024);

    let years: Vec<i32> = index.years.iter().map(|y| y.year).collect();
    assert_eq!(years, vec![2024, 2023]);

    let months: Vec<&str> = index.year(2024).unwrap().months.iter().map(|m| m.name).collect();
    assert_eq!(months, vec!["March", "January"]);
    assert_eq!(index.year(2024).unwrap().month("March").unwrap().posts[0].title, "B");
    assert_eq!(index.year(2023).unwrap().month("December").unwrap().posts[0].title, "C");
}

#[tokio::test]
async fn fetched_projects_drive_the_carousel() {
    let api = MockApi::start().await;
    api.stub(
        "/projects/",
        Stub::json(
            r#"[
                {"id": 1, "title": "One", "tag": ["rust"]},
                {"id": 2, "title": "Two", "tag": []},
                {"id": 3, "title": "Three", "tag": []}
            ]"#,
        ),
    )
    .await;

    let client = client_for(&api);
    let projects: Vec<Project> = client.fetch_collection(endpoints::PROJECTS).await.unwrap();

    let mut state = CarouselReducer::reduce(
        CarouselState::default(),
        CarouselIntent::Load {
            items: projects,
            autoplay: true,
            swipe_threshold_px: 50.0,
        },
    );
    assert_eq!(state.current().unwrap().title, "One");

    let (prev, next) = state.neighbors().unwrap();
    assert_eq!(prev.title, "Three");
    assert_eq!(next.title, "Two");

    for _ in 0..3 {
        state = CarouselReducer::reduce(state, CarouselIntent::Next);
    }
    assert_eq!(state.current().unwrap().title, "One", "cyclic closure");
}

#[tokio::test]
async fn failed_fetch_degrades_to_an_empty_archive() {
    let api = MockApi::start().await;
    // blogs/ is not stubbed: the fetch fails with a 404.

    let client = client_for(&api);
    let posts: Vec<Post> = client
        .fetch_collection(endpoints::BLOGS)
        .await
        .unwrap_or_default();

    let index = ChronoIndex::build(&posts, 2025);
    assert_eq!(index.post_count(), 0);
    assert_eq!(index.years.len(), 1, "placeholder heading for the current year");
}
