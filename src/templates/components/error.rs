use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match &err {
        ServerError::NotFound => render_error(404, "Not Found"),

        ServerError::BadRequest(msg) => render_error(400, msg),

        ServerError::DbError(_)
        | ServerError::Source(_)
        | ServerError::Pagination(_)
        | ServerError::XlsxError(_)
        | ServerError::InternalError => {
            tracing::error!(error = %err, "request failed");
            render_error(500, &err.to_string())
        }
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
