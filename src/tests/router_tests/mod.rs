use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

mod add_record_tests;
mod explore_tests;

pub(crate) fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub(crate) fn get(db: &Database, uri: &str) -> Result<Response, ServerError> {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, db)
}

pub(crate) fn post_form(db: &Database, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();
    handle(req, db).expect("Handler failed")
}
