//! Typed descriptions of read-only API endpoints.

use std::marker::PhantomData;

use crate::http::HttpMethod;
use crate::types::{Recipe, RecipeResponse};

/// One endpoint call, typed by the shape its response body decodes into.
///
/// Query parameters keep insertion order. Duplicate keys are appended as-is.
#[derive(Debug)]
pub struct Request<T> {
    pub method: HttpMethod,
    pub path: String,
    pub params: Vec<(String, String)>,
    response: PhantomData<fn() -> T>,
}

impl<T> Request<T> {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            params: Vec::new(),
            response: PhantomData,
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

impl<T> Clone for Request<T> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            path: self.path.clone(),
            params: self.params.clone(),
            response: PhantomData,
        }
    }
}

impl Recipe {
    /// `GET /recipes`
    pub fn fetch_all() -> Request<RecipeResponse> {
        Request::get("/recipes")
    }

    /// `GET /recipes/{id}`
    pub fn fetch(id: i64) -> Request<Recipe> {
        Request::get(format!("/recipes/{id}"))
    }
}
