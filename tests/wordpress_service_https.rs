use bylines::auth::Auth;
use bylines::conf::{SiteConfig, TOKEN_ENV};
use bylines::wordpress::service::{Service, WordPressService};

// These tests talk to the live WordPress.com API and need a real token in
// $WP_ACCESS_TOKEN, so they only run when asked for with --ignored. Checking
// that we get a non-empty body back is enough to show the types line up.

fn service() -> WordPressService {
    let auth = Auth::from_env(TOKEN_ENV).expect("Could not create auth. Is $WP_ACCESS_TOKEN set?");
    WordPressService::new(&SiteConfig::default(), auth).expect("could not create service")
}

#[tokio::test]
#[ignore]
async fn it_retrieves_top_authors() {
    let query = [("period", String::from("month"))];
    let resp = service()
        .get_resource("stats/top-authors", &query)
        .await
        .unwrap();
    assert_ne!(resp, "");
}

#[tokio::test]
#[ignore]
async fn it_retrieves_posts() {
    let query = [
        ("number", String::from("1")),
        ("fields", String::from("ID,author,date,title")),
    ];
    let resp = service().get_resource("posts", &query).await.unwrap();
    assert_ne!(resp, "");
}
