use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};

/// A pending remote request with a typed payload. All transport, status, and
/// decode failures collapse into one error path; the caller surfaces a single
/// generic notice and never retries.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_query<Q>(mut self, query: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.query(query);
		self
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub fn with_bytes(mut self, bytes: Vec<u8>, content_type: &str) -> Self {
		self.builder = self.builder.header("Content-Type", content_type).body(bytes);
		self
	}

	pub async fn send(self) -> anyhow::Result<T> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		if !status.is_success() {
			return Err(RequestFailed(status, text))?;
		}
		let output = match serde_json::from_str(&text) {
			Ok(data) => data,
			Err(err) => {
				return Err(InvalidJson(text, err))?;
			}
		};
		Ok(output)
	}

	/// Send a request whose response body is irrelevant (inserts, rpc calls,
	/// object uploads). Only the status is inspected.
	pub async fn send_ok(self) -> anyhow::Result<()> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		if !status.is_success() {
			let text = response.text().await.unwrap_or_default();
			return Err(RequestFailed(status, text))?;
		}
		Ok(())
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}

#[derive(thiserror::Error, Debug)]
#[error("Request failed with status {0}: {1}")]
pub struct RequestFailed(pub reqwest::StatusCode, pub String);
