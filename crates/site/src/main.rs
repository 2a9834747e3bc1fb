#[tokio::main]
async fn main() {
    greennest_observability::init();

    let fixtures = std::env::var("GREENNEST_FIXTURES").unwrap_or_else(|_| {
        tracing::warn!("GREENNEST_FIXTURES not set; serving ./fixtures");
        "fixtures".to_string()
    });

    let app = greennest_site::fixtures::build_app(fixtures.into());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
