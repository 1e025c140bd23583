//! Clients for the four opaque collaborator services: the auth provider, the
//! relational store, the vote procedure, and the object store. All of them
//! speak plain HTTPS against the hosted backend project.

use crate::{
	config,
	response::Response,
	session::{AuthSession, SessionValue},
};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

pub mod auth;
pub mod friends;
pub mod storage;
pub mod swipes;

/// A request against the relational store (or its rpc namespace). Requests
/// ride on the signed-in user's bearer token when one exists, and on the
/// publishable anon key otherwise.
pub(crate) fn rest<T>(method: Method, path: &str) -> Response<T>
where
	T: DeserializeOwned,
{
	let endpoint = format!("{}/rest/v1{path}", config::PROJECT_URL);
	Response::<T>::from(authorized(method, &endpoint))
}

pub(crate) fn authorized(method: Method, endpoint: &str) -> RequestBuilder {
	let token = match AuthSession::load() {
		Some(session) => session.access_token,
		None => config::ANON_KEY.to_owned(),
	};
	reqwest::Client::new()
		.request(method, endpoint)
		.header("apikey", config::ANON_KEY)
		.header("Authorization", format!("Bearer {token}"))
		.header("Accept", "application/json")
}
