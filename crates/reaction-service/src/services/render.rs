//! Render service
//!
//! Builds the reaction bar markup the host page embeds, and the script
//! bootstrap that wires it up on the client.

use reaction_core::value_objects::{ObjectRef, ObjectType};
use reaction_core::DomainError;
use serde_json::json;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::html::escape_html;
use super::reaction::ReactionService;

/// Tooltip of an icon nobody picked yet
pub const NO_CLICKS_YET: &str = "No clicks yet";
/// Prompt shown to a guest with no stored name
pub const ASK_NAME: &str = "Please inform your name";
/// Alert shown when a guest declines to give a name
pub const REJECT_NO_NAME: &str = "To react you must inform your name";

/// Render service
pub struct RenderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RenderService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reaction bar for one content item
    ///
    /// With `wrap` the links are enclosed in the container the client script
    /// looks for; without it only the links are returned, ready to replace
    /// the container's contents.
    #[instrument(skip(self, object), fields(object = %object))]
    pub async fn render_fragment(&self, object: &ObjectRef, wrap: bool) -> ServiceResult<String> {
        let snapshot = self.ctx.snapshot();
        let reactions = ReactionService::new(self.ctx);
        let (tally, names) = tokio::try_join!(
            reactions.tally_in(&snapshot.settings, object),
            reactions.reactor_names_in(&snapshot.settings, object)
        )?;

        let icon_set = &snapshot.icon_set;
        let icons = self.ctx.icons();

        let mut html = String::new();
        for count in tally.iter() {
            let reactors = names
                .iter()
                .find(|n| n.reaction == count.reaction)
                .map(|n| n.names.as_slice())
                .unwrap_or_default();

            let title = if reactors.is_empty() {
                NO_CLICKS_YET.to_string()
            } else {
                reactors.join("\n")
            };

            let badge = if count.count > 0 {
                format!("<span class='badge'>{}</span>", count.count)
            } else {
                String::new()
            };

            html.push_str(&format!(
                "<a data-reaction='{}' title='{}'>{}<img src='{}'></a> ",
                escape_html(&count.reaction),
                escape_html(&title),
                badge,
                escape_html(&icons.icon_url(icon_set, &count.reaction)),
            ));
        }

        if wrap {
            html = format!(
                "<div data-id='{}' data-type='{}' class='reaction'>\n{}</div> ",
                object.id,
                escape_html(object.object_type.as_str()),
                html
            );
        }

        Ok(html)
    }

    /// Inject the reaction bar into a publication's content
    ///
    /// Content of types without reactions is returned untouched.
    #[instrument(skip(self, content))]
    pub async fn filter_publication(
        &self,
        post_type: &str,
        post_id: i64,
        content: &str,
    ) -> ServiceResult<String> {
        let object_type = ObjectType::parse(post_type).map_err(DomainError::from)?;
        let settings = self.ctx.settings();

        if !object_type.is_publication() || !settings.is_enabled(&object_type) {
            return Ok(content.to_string());
        }

        let position = settings.position_for(&object_type);
        let html = self
            .render_fragment(&ObjectRef::new(object_type, post_id), true)
            .await?;
        Ok(position.wrap(&html, content))
    }

    /// Inject the reaction bar into a comment's text
    #[instrument(skip(self, text))]
    pub async fn filter_comment(&self, comment_id: i64, text: &str) -> ServiceResult<String> {
        let settings = self.ctx.settings();

        if !settings.comments_enabled() {
            return Ok(text.to_string());
        }

        let object = ObjectRef::comment(comment_id);
        let position = settings.position_for(&object.object_type);
        let html = self.render_fragment(&object, true).await?;
        Ok(position.wrap(&html, text))
    }

    /// Stylesheet, client strings and script tag for a page with reaction bars
    pub fn bootstrap_script(&self, logged_in: bool) -> ServiceResult<String> {
        let host = self.ctx.host();
        let strings = json!({
            "hash": host.cookie_hash,
            "ajaxurl": host.ajax_url(),
            "loggedIn": if logged_in { "yes" } else { "no" },
            "askName": ASK_NAME,
            "rejectNoName": REJECT_NO_NAME,
        });

        // `</` would end the inline script early
        let strings = serde_json::to_string(&strings)
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .replace("</", "<\\/");

        let base = escape_html(self.ctx.assets().url.trim_end_matches('/'));

        Ok(format!(
            "<link rel='stylesheet' href='{base}/css/reaction.css'>\n\
             <script>var reactionStr = {strings};</script>\n\
             <script src='{base}/js/reaction.js'></script>\n"
        ))
    }
}
