#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use link_shortener::application::services::LinkService;
use link_shortener::domain::entities::{Link, NewLink};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::routes::{app_router, router};
use link_shortener::state::AppState;
use link_shortener::utils::key_generator::KeyGenerator;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const WEBSITE_URL: &str = "http://localhost:3030";

/// In-memory stand-in for the `links` table.
///
/// Enforces key uniqueness like the primary key does, and can be switched
/// into a failing mode to simulate database outages.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<BTreeMap<String, Link>>,
    failing: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: &str, url: &str, count: i64) {
        self.links.lock().unwrap().insert(
            id.to_string(),
            Link::new(id.to_string(), url.to_string(), count),
        );
    }

    pub fn get(&self, id: &str) -> Option<Link> {
        self.links.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal(
                "Database error",
                json!({ "cause": "simulated outage" }),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.id) {
            return Err(AppError::conflict(
                "Short key already exists",
                json!({ "key": new_link.id }),
            ));
        }

        let link = Link::new(new_link.id.clone(), new_link.url, 0);
        links.insert(new_link.id, link.clone());
        Ok(link)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn increment_count(&self, id: &str) -> Result<bool, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();

        Ok(links
            .get_mut(id)
            .map(|link| link.count += 1)
            .is_some())
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<Link>, AppError> {
        self.check()?;
        let offset = ((page - 1) * page_size) as usize;

        Ok(self
            .links
            .lock()
            .unwrap()
            .values()
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.len() as i64)
    }

    async fn total_visits(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.links.lock().unwrap().values().map(|l| l.count).sum())
    }
}

pub fn create_test_state(
    repo: Arc<InMemoryLinkRepository>,
    key_generator: KeyGenerator,
    require_http_url: bool,
) -> AppState {
    let repo: Arc<dyn LinkRepository> = repo;
    let link_service: LinkService =
        LinkService::with_key_generator(repo, key_generator).require_http_url(require_http_url);

    AppState::new(Arc::new(link_service), WEBSITE_URL)
}

pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<InMemoryLinkRepository>,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(KeyGenerator::new(), false)
}

pub fn spawn_app_with(key_generator: KeyGenerator, require_http_url: bool) -> TestApp {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = create_test_state(repo.clone(), key_generator, require_http_url);
    let server = TestServer::new(router(state)).unwrap();

    TestApp { server, repo }
}

/// Spawns the app as it is served, including trailing-slash normalization.
pub fn spawn_served_app() -> TestApp {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = create_test_state(repo.clone(), KeyGenerator::new(), false);
    let service = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(service).unwrap();

    TestApp { server, repo }
}

/// Pulls the key out of the first `{WEBSITE_URL}/s/XXXXXX` in `body`.
pub fn extract_key(body: &str) -> Option<String> {
    let prefix = format!("{}/s/", WEBSITE_URL);
    let start = body.find(&prefix)? + prefix.len();

    let key: String = body[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    (!key.is_empty()).then_some(key)
}
