use std::path::PathBuf;

use reqwest::StatusCode;

use greennest_catalog::SortKey;
use greennest_session::{SessionGate, UserIdentity};
use greennest_site::pages::{BlogPage, PlantOfTheWeekPage, PlantsPage, TopRatedSection};
use greennest_site::{NavigationOutcome, resolve, resolve_navigation};
use greennest_store::FetchClient;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Build the same app as prod over the shipped fixtures, but bind to an
    /// ephemeral port.
    async fn spawn() -> Self {
        let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let app = greennest_site::fixtures::build_app(fixtures);

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
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_answers() {
    let server = TestServer::spawn().await;
    let response = reqwest::get(format!("{}/health", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = TestServer::spawn().await;
    let response = reqwest::get(format!("{}/plants.json.bak", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn plants_page_full_flow() {
    let server = TestServer::spawn().await;
    let client = FetchClient::new(server.base_url.clone());

    let mut page = PlantsPage::new();
    assert!(page.mount(&client).await);

    // Everything, source order, before any controls are touched.
    assert_eq!(page.result_count(), 8);
    assert_eq!(
        page.category_options(),
        vec!["Indoor", "Outdoor", "Herb", "Succulent"]
    );

    page.set_category(Some("Indoor".to_string()));
    page.set_sort(Some(SortKey::NameAscending));

    let names: Vec<String> = page.visible().into_iter().map(|i| i.name).collect();
    assert_eq!(
        names,
        vec!["Boston Fern", "Cushion Moss", "Monstera Deliciosa", "Snake Plant"]
    );
    assert_eq!(page.result_count(), 4);
}

#[tokio::test]
async fn blog_page_search_flow() {
    let server = TestServer::spawn().await;
    let client = FetchClient::new(server.base_url.clone());

    let mut page = BlogPage::new();
    assert!(page.mount(&client).await);
    assert_eq!(page.result_count(), 5);

    page.set_category(Some("Care Tips".to_string()));
    page.set_search(Some("roots".to_string()));

    let names: Vec<String> = page.visible().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Repotting Season Checklist"]);
}

#[tokio::test]
async fn top_rated_and_featured_agree_with_the_fixtures() {
    let server = TestServer::spawn().await;
    let client = FetchClient::new(server.base_url.clone());

    let mut section = TopRatedSection::new();
    assert!(section.mount(&client).await);

    let names: Vec<String> = section.top().into_iter().map(|i| i.name).collect();
    assert_eq!(
        names,
        vec!["Golden Barrel Cactus", "Monstera Deliciosa", "Snake Plant"]
    );

    let mut week = PlantOfTheWeekPage::new();
    assert!(week.mount(&client).await);
    assert_eq!(week.featured().unwrap().name, "Golden Barrel Cactus");
}

#[tokio::test]
async fn profile_navigation_follows_the_session() {
    let mut gate = SessionGate::new();
    let profile = resolve("/profile").unwrap();

    // Unknown: hold, never redirect.
    assert_eq!(
        resolve_navigation(&gate, &profile),
        NavigationOutcome::Loading
    );

    // Anonymous: redirect, remembering where the user was headed.
    gate.observe(None).unwrap();
    match resolve_navigation(&gate, &profile) {
        NavigationOutcome::RedirectToLogin(redirect) => {
            assert_eq!(redirect.return_path.as_deref(), Some("/profile"))
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    // Signed in: straight through.
    gate.observe(Some(UserIdentity::new("u1"))).unwrap();
    assert_eq!(
        resolve_navigation(&gate, &profile),
        NavigationOutcome::Render
    );
}
