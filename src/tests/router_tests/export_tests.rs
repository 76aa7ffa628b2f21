use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::tests::utils::test_app;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

#[test]
fn export_returns_spreadsheet_attachment() {
    let app = test_app();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/products/export?category=Spices&sort=price")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        XLSX_CONTENT_TYPE
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("helatrade-products.xlsx"));

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn export_rejects_bad_price_range() {
    let app = test_app();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/products/export?price=lots")
        .body(Body::empty())
        .unwrap();

    assert!(handle(req, &app).is_err());
}
