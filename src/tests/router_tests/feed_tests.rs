use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{read_body, test_app};
use astra::Body;
use http::{Method, Request};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_links_both_feeds() {
    let app = test_app();

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("href=\"/posts\""));
    assert!(body.contains("href=\"/products\""));
    assert!(body.contains("12 products"));
}

#[test]
fn products_page_shows_first_page_only() {
    let app = test_app();

    let resp = handle(get("/products?sort=price"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert_eq!(body.matches("<article").count(), 12);
    assert!(body.contains("Found <strong>12</strong> listings."));
    assert!(body.contains("No more results"));
    assert!(body.contains("Download as spreadsheet"));
}

#[test]
fn category_filter_narrows_products() {
    let app = test_app();

    let resp = handle(get("/products?category=Spices"), &app).expect("Handler failed");
    let body = read_body(resp);

    assert_eq!(body.matches("<article").count(), 4);
    assert!(body.contains("Ceylon Cinnamon Quills"));
    assert!(!body.contains("Fresh Carrots"));
}

#[test]
fn posts_load_three_at_a_time() {
    let app = test_app();

    let first = read_body(handle(get("/posts?sort=recent"), &app).unwrap());
    assert_eq!(first.matches("<article").count(), 3);
    assert!(first.contains("/posts/feed?sort=recent&amp;page=2"));

    let second = read_body(handle(get("/posts/feed?sort=recent&page=2"), &app).unwrap());
    assert_eq!(second.matches("<article").count(), 3);
    assert!(!second.contains("<html"));
    assert!(second.contains("page=3"));

    let third = read_body(handle(get("/posts/feed?sort=recent&page=3"), &app).unwrap());
    assert_eq!(third.matches("<article").count(), 1);
    assert!(third.contains("No more results"));
}

#[test]
fn recent_sort_puts_newest_post_first() {
    let app = test_app();

    let body = read_body(handle(get("/posts?sort=recent"), &app).unwrap());

    // 201 was posted on 6 May, the latest in the seed data.
    let newest = body.find("listing-201").unwrap();
    let older = body.find("listing-202").unwrap();
    assert!(newest < older);
}

#[test]
fn full_page_reveals_requested_pages() {
    let app = test_app();

    let body = read_body(handle(get("/posts?page=2"), &app).unwrap());

    assert_eq!(body.matches("<article").count(), 6);
}

#[test]
fn no_matches_renders_empty_state() {
    let app = test_app();

    let body = read_body(handle(get("/products?category=Dairy&organic=1"), &app).unwrap());

    assert!(body.contains("No listings match these filters."));
    assert_eq!(body.matches("<article").count(), 0);
}

#[test]
fn bad_sort_is_a_bad_request() {
    let app = test_app();

    let Err(err) = handle(get("/products?sort=cheapest"), &app) else {
        panic!("unknown sort should be rejected");
    };

    assert!(matches!(err, ServerError::BadRequest(_)));
    let resp = crate::templates::html_error_response(err);
    assert_eq!(resp.status(), 400);
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();

    let Err(err) = handle(get("/producers"), &app) else {
        panic!("unknown route should not resolve");
    };

    assert!(matches!(err, ServerError::NotFound));
}
