//! In-memory repositories and context helpers for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::Value;

use reaction_common::auth::JwtService;
use reaction_common::config::{AssetsConfig, HostConfig};
use reaction_core::entities::{
    MostReactedQuery, NewReaction, Publication, ReactedPublication, Reaction, ReactionFilter, User,
};
use reaction_core::traits::{OptionRepository, ReactionRepository, RepoResult, UserRepository};
use reaction_core::value_objects::{ObjectRef, ObjectType, ReactionSettings, UserId};
use reaction_core::DomainError;

use super::context::ServiceContext;
use super::settings::SettingsService;

pub const SECRET: &str = "test-secret-key-that-is-long-enough";

#[derive(Default)]
pub struct InMemoryReactions {
    rows: Mutex<Vec<Reaction>>,
    next_id: AtomicI64,
    posts: Mutex<Vec<Publication>>,
}

impl InMemoryReactions {
    pub fn rows(&self) -> Vec<Reaction> {
        self.rows.lock().clone()
    }

    pub fn add_post(&self, id: i64, post_type: &str, status: &str) {
        self.posts.lock().push(Publication {
            id,
            post_type: ObjectType::parse(post_type).unwrap(),
            title: format!("Post {id}"),
            status: status.to_string(),
            published_at: Some(Utc::now()),
        });
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactions {
    async fn find_by_reactor(&self, object: &ObjectRef, reactor: &str) -> RepoResult<Option<Reaction>> {
        Ok(self
            .rows
            .lock()
            .iter()
            .find(|r| &r.object == object && r.reactor.to_stored() == reactor)
            .cloned())
    }

    async fn find_by_object(&self, object: &ObjectRef) -> RepoResult<Vec<Reaction>> {
        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|r| &r.object == object)
            .cloned()
            .collect())
    }

    async fn count_by_reaction(&self, object: &ObjectRef) -> RepoResult<Vec<(String, i64)>> {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for row in self.rows.lock().iter().filter(|r| &r.object == object) {
            *counts.entry(row.reaction.clone()).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn create(&self, reaction: &NewReaction) -> RepoResult<bool> {
        let mut rows = self.rows.lock();
        let taken = reaction.reactor.is_identified()
            && rows
                .iter()
                .any(|r| r.object == reaction.object && r.reactor == reaction.reactor);
        if taken {
            return Ok(false);
        }
        rows.push(Reaction {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            object: reaction.object.clone(),
            reactor: reaction.reactor.clone(),
            reaction: reaction.reaction.clone(),
            created_at: Utc::now(),
        });
        Ok(true)
    }

    async fn update_reaction(&self, id: i64, reaction: &str) -> RepoResult<()> {
        let mut rows = self.rows.lock();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::ReactionNotFound(id))?;
        row.reaction = reaction.to_string();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.rows.lock().retain(|r| r.id != id);
        Ok(())
    }

    async fn most_reacted(&self, query: &MostReactedQuery) -> RepoResult<Vec<ReactedPublication>> {
        let rows = self.rows.lock();
        let mut ranked: Vec<ReactedPublication> = self
            .posts
            .lock()
            .iter()
            .filter(|p| p.post_type == query.post_type && p.status == "publish")
            .filter_map(|p| {
                let object = ObjectRef::new(p.post_type.clone(), p.id);
                let count = rows
                    .iter()
                    .filter(|r| r.object == object)
                    .filter(|r| match &query.filter {
                        ReactionFilter::Any => true,
                        ReactionFilter::Only(list) => list.contains(&r.reaction),
                    })
                    .count() as i64;
                (count > 0).then(|| ReactedPublication {
                    publication: p.clone(),
                    reaction_type: query.filter.label(),
                    reaction_count: count,
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.reaction_count
                .cmp(&a.reaction_count)
                .then(a.publication.id.cmp(&b.publication.id))
        });
        if let Some(limit) = query.limit {
            ranked.truncate(usize::try_from(limit).unwrap_or(0));
        }
        Ok(ranked)
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<i64, String>>,
}

impl InMemoryUsers {
    pub fn with(users: &[(i64, &str)]) -> Self {
        let repo = Self::default();
        for (id, name) in users {
            repo.users.lock().insert(*id, (*name).to_string());
        }
        repo
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        let users = self.users.lock();
        Ok(ids
            .iter()
            .filter_map(|id| {
                users.get(&id.into_inner()).map(|name| User {
                    id: *id,
                    display_name: name.clone(),
                })
            })
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryOptions {
    values: Mutex<HashMap<String, Value>>,
}

impl InMemoryOptions {
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.lock().get(name).cloned()
    }

    pub fn set(&self, name: &str, value: Value) {
        self.values.lock().insert(name.to_string(), value);
    }
}

#[async_trait]
impl OptionRepository for InMemoryOptions {
    async fn get_many(&self, names: &[&str]) -> RepoResult<HashMap<String, Value>> {
        let values = self.values.lock();
        Ok(names
            .iter()
            .filter_map(|n| values.get(*n).map(|v| ((*n).to_string(), v.clone())))
            .collect())
    }

    async fn add_missing(&self, values: &[(&str, Value)]) -> RepoResult<()> {
        let mut stored = self.values.lock();
        for (name, value) in values {
            stored
                .entry((*name).to_string())
                .or_insert_with(|| value.clone());
        }
        Ok(())
    }

    async fn replace_all(&self, values: &[(&str, Value)]) -> RepoResult<()> {
        let mut stored = self.values.lock();
        for (name, value) in values {
            stored.insert((*name).to_string(), value.clone());
        }
        Ok(())
    }
}

/// Everything a service test needs, with handles on the fakes
pub struct Harness {
    pub ctx: ServiceContext,
    pub reactions: Arc<InMemoryReactions>,
    pub options: Arc<InMemoryOptions>,
    // Keeps the icon directory alive for the duration of the test
    _assets: tempfile::TempDir,
}

impl Harness {
    /// Context over an asset dir with a default `like/love/wow` set and a `flat` set
    pub fn new() -> Self {
        Self::with_users(&[])
    }

    pub fn with_users(users: &[(i64, &str)]) -> Self {
        let assets = tempfile::tempdir().unwrap();
        let img = assets.path().join("img");
        std::fs::create_dir_all(img.join("flat")).unwrap();
        for icon in ["like", "love", "wow"] {
            std::fs::write(img.join(format!("{icon}.svg")), "<svg/>").unwrap();
        }
        for icon in ["like", "sad"] {
            std::fs::write(img.join("flat").join(format!("{icon}.png")), "png").unwrap();
        }

        let reactions = Arc::new(InMemoryReactions::default());
        let options = Arc::new(InMemoryOptions::default());

        let ctx = ServiceContext::builder()
            .reaction_repo(reactions.clone())
            .user_repo(Arc::new(InMemoryUsers::with(users)))
            .option_repo(options.clone())
            .jwt_service(Arc::new(JwtService::new(SECRET, 3600)))
            .host(HostConfig {
                post_types: vec!["post".into(), "page".into(), "attachment".into()],
                cookie_hash: "abc123".into(),
                session_cookie: "host_session".into(),
                public_url: "https://blog.example.com".into(),
            })
            .assets(AssetsConfig {
                dir: assets.path().to_string_lossy().into_owned(),
                url: "/assets".into(),
            })
            .build()
            .unwrap();

        Self {
            ctx,
            reactions,
            options,
            _assets: assets,
        }
    }

    /// Store settings and load them into the snapshot
    pub async fn configure(&self, settings: ReactionSettings) {
        self.ctx
            .option_repo()
            .replace_all(&settings.to_options())
            .await
            .unwrap();
        SettingsService::new(&self.ctx).load().await.unwrap();
    }

    /// Posts and comments enabled, `like, love, wow` active, default icons
    pub async fn configured() -> Self {
        let harness = Self::new();
        harness
            .configure(ReactionSettings {
                types: vec![ObjectType::Post, ObjectType::Comment],
                active: vec!["like".into(), "love".into(), "wow".into()],
                ..ReactionSettings::default()
            })
            .await;
        harness
    }
}
