//! Settings, query building and pagination wired together the way a resource
//! service uses them.

use async_trait::async_trait;
use exh::prelude::*;
use exh::{MemorySink, conf::normalize_host};
use futures::StreamExt;
use rstest::{fixture, rstest};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct User {
	id: String,
	email: String,
}

#[derive(Debug, Error)]
enum UsersError {
	#[error("no canned response for {0}")]
	NotFound(String),
	#[error(transparent)]
	Decode(#[from] serde_json::Error),
}

/// Answers `/users` requests from canned JSON bodies keyed by query string.
struct Users {
	host: String,
	bodies: HashMap<String, &'static str>,
	calls: AtomicUsize,
}

impl Users {
	fn new(host: String) -> Self {
		Self {
			host,
			bodies: HashMap::new(),
			calls: AtomicUsize::new(0),
		}
	}

	fn respond(mut self, url: &str, body: &'static str) -> Self {
		self.bodies.insert(url.to_string(), body);
		self
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Find<User> for Users {
	type Error = UsersError;

	async fn find(&self, options: FindOptions) -> Result<PagedResult<User>, UsersError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let url = format!("{}{}", self.host, options.base_rql().to_url("/users"));
		let body = self.bodies.get(&url).ok_or_else(|| UsersError::NotFound(url.clone()))?;
		Ok(serde_json::from_str(body)?)
	}
}

#[fixture]
fn settings() -> Settings {
	Settings::from_toml_str(
		r#"
		host = "http://api.staging.example.io/"

		[pagination]
		max_page_size = 2
		"#,
	)
	.unwrap()
}

#[rstest]
fn test_host_is_normalized(settings: Settings) {
	assert_eq!(
		settings.api_host().as_deref(),
		Some("https://api.staging.example.io")
	);
	assert_eq!(normalize_host("staging.example.io"), "https://api.staging.example.io");
}

#[rstest]
#[tokio::test]
async fn test_active_users_fit_in_one_page() {
	// Arrange
	let users = Users::new("https://api.example.io".to_string()).respond(
		"https://api.example.io/users?eq(status,active)&limit(50)",
		r#"{"page":{"total":3,"offset":0,"limit":50},"data":[
			{"id":"u1","email":"a@example.io"},
			{"id":"u2","email":"b@example.io"},
			{"id":"u3","email":"c@example.io"}]}"#,
	);
	let sink = MemorySink::new();
	let paginator = Paginator::new().diagnostics(Arc::new(sink.clone()));
	let options = FindOptions::from(rql().eq("status", "active").build());

	// Act
	let active = paginator.find_all(&users, options).await.unwrap();

	// Assert
	assert_eq!(active.len(), 3);
	assert_eq!(active[2].id, "u3");
	assert_eq!(users.calls(), 1);
	assert!(sink.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_configured_page_size_drives_every_strategy(settings: Settings) {
	// Arrange
	let host = settings.api_host().unwrap();
	let users = Arc::new(
		Users::new(host)
			.respond(
				"https://api.staging.example.io/users?sort(email)&limit(2)",
				r#"{"page":{"total":3,"offset":0,"limit":2},"data":[
					{"id":"u1","email":"a@example.io"},{"id":"u2","email":"b@example.io"}]}"#,
			)
			.respond(
				"https://api.staging.example.io/users?sort(email)&limit(2,2)",
				r#"{"page":{"total":3,"offset":2,"limit":2},"data":[
					{"id":"u3","email":"c@example.io"}]}"#,
			),
	);
	let paginator = Paginator::from_settings(&settings.pagination);
	let options = FindOptions::from(rql().sort("email").build());

	// Act
	let eager = paginator.find_all(users.as_ref(), options.clone()).await.unwrap();
	let lazy: Vec<_> = paginator
		.find_all_iter(users.as_ref(), options.clone())
		.map(|page| page.unwrap().data.len())
		.collect()
		.await;
	let first = users
		.find(FindOptions::from(rql().sort("email").limit(2).build()))
		.await
		.unwrap();
	let mut cursor = paginator.with_pagers(users.clone(), options, first);
	let second = cursor.next().await.unwrap();

	// Assert
	let emails: Vec<_> = eager.iter().map(|user| user.email.as_str()).collect();
	assert_eq!(emails, vec!["a@example.io", "b@example.io", "c@example.io"]);
	assert_eq!(lazy, vec![2, 1]);
	assert_eq!(second.data[0].id, "u3");
	assert!(!second.page.has_next());
	assert!(second.page.has_previous());
}

#[rstest]
#[tokio::test]
async fn test_provider_error_surfaces_unchanged() {
	// Arrange
	let users = Users::new("https://api.example.io".to_string());

	// Act
	let error = users.find_all(FindOptions::new()).await.unwrap_err();

	// Assert
	match error {
		PaginationError::Fetch(UsersError::NotFound(url)) => {
			assert_eq!(url, "https://api.example.io/users?limit(50)");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[rstest]
fn test_whitespace_in_arguments_is_reported() {
	// Arrange
	let sink = MemorySink::new();

	// Act
	let expression = RqlBuilder::with_sink(Arc::new(sink.clone()))
		.eq("name", "Jane Doe")
		.build();

	// Assert
	assert_eq!(expression.as_str(), "?eq(name,Jane Doe)");
	assert_eq!(
		sink.records(),
		vec![Diagnostic::WhitespaceInArguments {
			operator: "eq".to_string(),
			arguments: "name,Jane Doe".to_string(),
		}]
	);
}
