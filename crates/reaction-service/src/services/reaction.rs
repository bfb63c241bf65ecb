//! Reaction service
//!
//! Toggles reactions and reads per-item tallies, reactor names and rankings.

use std::collections::HashMap;

use reaction_core::entities::{
    MostReactedQuery, NewReaction, ReactedPublication, ReactionCount, ReactionFilter,
    ReactorNames, Tally, ToggleOutcome,
};
use reaction_core::value_objects::{ObjectRef, ObjectType, ReactionSettings, Reactor, UserId};
use reaction_core::{DomainError, MAX_REACTION_LEN};
use tracing::{debug, info, instrument};

use crate::dto::AjaxReactionRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle a click posted by the client script
    ///
    /// Only reactions in the active set are accepted here. A non-empty posted
    /// name wins over the session user.
    #[instrument(skip(self, request), fields(object_type = %request.object_type, id = request.id))]
    pub async fn react(
        &self,
        request: &AjaxReactionRequest,
        session_user: Option<UserId>,
    ) -> ServiceResult<(ObjectRef, ToggleOutcome)> {
        let object_type = ObjectType::parse(&request.object_type).map_err(DomainError::from)?;
        let object = ObjectRef::new(object_type, request.id);

        if !self.ctx.settings().is_active(&request.reaction) {
            return Err(DomainError::ReactionNotEnabled(request.reaction.clone()).into());
        }

        let reactor = resolve_reactor(&request.user, session_user);
        let outcome = self.toggle(&object, &reactor, &request.reaction).await?;

        Ok((object, outcome))
    }

    /// Add, switch or remove a reactor's reaction on a content item
    ///
    /// Anonymous reactors cannot be matched, so they always add a record.
    /// An empty reactor is never matched against whatever record the object
    /// already has, so an anonymous click cannot switch or remove someone
    /// else's reaction.
    #[instrument(skip(self, object, reactor), fields(object = %object, reactor = %reactor))]
    pub async fn toggle(
        &self,
        object: &ObjectRef,
        reactor: &Reactor,
        reaction: &str,
    ) -> ServiceResult<ToggleOutcome> {
        if reaction.is_empty() || reaction.len() > MAX_REACTION_LEN {
            return Err(DomainError::ValidationError(format!(
                "reaction must be 1-{MAX_REACTION_LEN} characters"
            ))
            .into());
        }

        let repo = self.ctx.reaction_repo();

        let existing = if reactor.is_identified() {
            repo.find_by_reactor(object, &reactor.to_stored()).await?
        } else {
            None
        };

        let outcome = match existing {
            Some(current) if current.is_reaction(reaction) => {
                repo.delete(current.id).await?;
                ToggleOutcome::Removed
            }
            Some(current) => {
                repo.update_reaction(current.id, reaction).await?;
                ToggleOutcome::Switched {
                    from: current.reaction,
                }
            }
            None => {
                let inserted = repo
                    .create(&NewReaction::new(object.clone(), reactor.clone(), reaction))
                    .await?;
                if !inserted {
                    debug!("Concurrent insert for the same reactor, keeping the existing record");
                }
                ToggleOutcome::Added
            }
        };

        info!(reaction = %reaction, outcome = ?outcome, "Reaction toggled");

        Ok(outcome)
    }

    /// Count per active icon, in configured order
    #[instrument(skip(self, object), fields(object = %object))]
    pub async fn tally(&self, object: &ObjectRef) -> ServiceResult<Tally> {
        self.tally_in(&self.ctx.settings(), object).await
    }

    pub(crate) async fn tally_in(
        &self,
        settings: &ReactionSettings,
        object: &ObjectRef,
    ) -> ServiceResult<Tally> {
        let counts: HashMap<String, i64> = self
            .ctx
            .reaction_repo()
            .count_by_reaction(object)
            .await?
            .into_iter()
            .collect();

        Ok(Tally(
            settings
                .active
                .iter()
                .map(|icon| ReactionCount::new(icon, counts.get(icon).copied().unwrap_or(0)))
                .collect(),
        ))
    }

    /// Display names of reactors per active icon, in insertion order
    ///
    /// Member ids resolve to the host display name, falling back to the raw
    /// id when the user no longer exists.
    #[instrument(skip(self, object), fields(object = %object))]
    pub async fn reactor_names(&self, object: &ObjectRef) -> ServiceResult<Vec<ReactorNames>> {
        self.reactor_names_in(&self.ctx.settings(), object).await
    }

    pub(crate) async fn reactor_names_in(
        &self,
        settings: &ReactionSettings,
        object: &ObjectRef,
    ) -> ServiceResult<Vec<ReactorNames>> {
        let records = self.ctx.reaction_repo().find_by_object(object).await?;

        let mut member_ids: Vec<UserId> = records
            .iter()
            .filter_map(|r| match r.reactor {
                Reactor::Member(id) => Some(id),
                _ => None,
            })
            .collect();
        member_ids.sort_unstable();
        member_ids.dedup();

        let display: HashMap<UserId, String> = self
            .ctx
            .user_repo()
            .find_by_ids(&member_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.display_name))
            .collect();

        Ok(settings
            .active
            .iter()
            .map(|icon| ReactorNames {
                reaction: icon.clone(),
                names: records
                    .iter()
                    .filter(|r| r.is_reaction(icon))
                    .map(|r| match &r.reactor {
                        Reactor::Member(id) => display
                            .get(id)
                            .cloned()
                            .unwrap_or_else(|| id.to_string()),
                        other => other.to_stored(),
                    })
                    .collect(),
            })
            .collect())
    }

    /// Published items of one type ranked by reaction count
    ///
    /// A list containing `any` (or an empty list) counts every reaction; a
    /// non-positive limit returns everything.
    #[instrument(skip(self))]
    pub async fn most_reacted(
        &self,
        post_type: &str,
        reactions: Vec<String>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<ReactedPublication>> {
        let query = MostReactedQuery {
            post_type: ObjectType::parse(post_type).map_err(DomainError::from)?,
            filter: ReactionFilter::from_list(reactions),
            limit: limit.filter(|l| *l > 0),
        };

        Ok(self.ctx.reaction_repo().most_reacted(&query).await?)
    }
}

/// Who a click is attributed to
fn resolve_reactor(posted_name: &str, session_user: Option<UserId>) -> Reactor {
    let posted_name = posted_name.trim();
    if !posted_name.is_empty() {
        return Reactor::from_stored(posted_name);
    }
    session_user.map_or(Reactor::Anonymous, Reactor::Member)
}
