//! Service context - dependency container for services
//!
//! Holds the repositories, the icon catalog, the session token service and
//! the current settings snapshot shared by every request.

use std::sync::Arc;

use parking_lot::RwLock;
use reaction_common::auth::JwtService;
use reaction_common::config::{AssetsConfig, HostConfig};
use reaction_core::entities::IconSet;
use reaction_core::traits::{OptionRepository, ReactionRepository, UserRepository};
use reaction_core::value_objects::ReactionSettings;
use reaction_db::PgPool;

use super::error::{ServiceError, ServiceResult};
use super::icons::IconCatalog;

/// Settings together with the icon set they select
#[derive(Debug, Default)]
pub struct Snapshot {
    pub settings: Arc<ReactionSettings>,
    pub icon_set: Arc<IconSet>,
}

/// Service context containing all dependencies
///
/// Cloning is cheap; clones share the same settings snapshot.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when running against in-memory repositories
    pool: Option<PgPool>,

    // Repositories
    reaction_repo: Arc<dyn ReactionRepository>,
    user_repo: Arc<dyn UserRepository>,
    option_repo: Arc<dyn OptionRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    icons: Arc<IconCatalog>,

    // Host facts
    host: Arc<HostConfig>,
    assets: Arc<AssetsConfig>,

    // Replaced as a whole on every settings load
    snapshot: Arc<RwLock<Arc<Snapshot>>>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if one is configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn option_repo(&self) -> &dyn OptionRepository {
        self.option_repo.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn icons(&self) -> &IconCatalog {
        self.icons.as_ref()
    }

    // === Host ===

    pub fn host(&self) -> &HostConfig {
        self.host.as_ref()
    }

    pub fn assets(&self) -> &AssetsConfig {
        self.assets.as_ref()
    }

    // === Snapshots ===

    /// Settings and icon set from the same load
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read())
    }

    /// Current settings
    pub fn settings(&self) -> Arc<ReactionSettings> {
        Arc::clone(&self.snapshot.read().settings)
    }

    /// Icon set the current settings point at
    pub fn icon_set(&self) -> Arc<IconSet> {
        Arc::clone(&self.snapshot.read().icon_set)
    }

    pub(crate) fn replace_snapshot(&self, settings: ReactionSettings, icon_set: IconSet) {
        *self.snapshot.write() = Arc::new(Snapshot {
            settings: Arc::new(settings),
            icon_set: Arc::new(icon_set),
        });
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("snapshot", &self.snapshot.read())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    option_repo: Option<Arc<dyn OptionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    host: Option<HostConfig>,
    assets: Option<AssetsConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn option_repo(mut self, repo: Arc<dyn OptionRepository>) -> Self {
        self.option_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn host(mut self, host: HostConfig) -> Self {
        self.host = Some(host);
        self
    }

    pub fn assets(mut self, assets: AssetsConfig) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Build the ServiceContext
    ///
    /// Settings start at their defaults; call `SettingsService::load` to read
    /// the stored values.
    ///
    /// # Errors
    /// Returns `ServiceError::Incomplete` naming the first missing dependency
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let assets = self
            .assets
            .ok_or(ServiceError::Incomplete("assets"))?;
        let icons = IconCatalog::new(assets.image_dir(), assets.image_url());

        Ok(ServiceContext {
            pool: self.pool,
            reaction_repo: self
                .reaction_repo
                .ok_or(ServiceError::Incomplete("reaction_repo"))?,
            user_repo: self
                .user_repo
                .ok_or(ServiceError::Incomplete("user_repo"))?,
            option_repo: self
                .option_repo
                .ok_or(ServiceError::Incomplete("option_repo"))?,
            jwt_service: self
                .jwt_service
                .ok_or(ServiceError::Incomplete("jwt_service"))?,
            icons: Arc::new(icons),
            host: Arc::new(
                self.host
                    .ok_or(ServiceError::Incomplete("host"))?,
            ),
            assets: Arc::new(assets),
            snapshot: Arc::new(RwLock::new(Arc::new(Snapshot::default()))),
        })
    }
}
