//! Admin settings page markup

use reaction_core::entities::IconSet;
use reaction_core::value_objects::{Position, ReactionSettings};

use super::html::escape_html;
use super::icons::IconCatalog;

/// Everything the settings page shows
pub struct AdminPage<'a> {
    pub settings: &'a ReactionSettings,
    /// Content types the site offers, `comment` last
    pub public_types: &'a [String],
    /// Named icon sets found on disk
    pub icon_sets: &'a [String],
    /// Icons of the selected set
    pub icon_set: &'a IconSet,
    pub icons: &'a IconCatalog,
    pub nonce: &'a str,
    pub message: Option<&'a str>,
    pub form_action: &'a str,
    pub assets_url: &'a str,
}

/// Render the full settings page
pub fn render(page: &AdminPage<'_>) -> String {
    let settings = page.settings;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset='utf-8'>\n");
    html.push_str("<title>Reaction options</title>\n");
    html.push_str(&format!(
        "<link rel='stylesheet' href='{}/css/reaction.css'>\n",
        escape_html(page.assets_url)
    ));
    html.push_str("</head>\n<body>\n<div class='wrap'>\n<h2>Reaction options</h2>\n");

    if let Some(message) = page.message {
        html.push_str(&format!(
            "<div class='updated'><p>{}</p></div>\n",
            escape_html(message)
        ));
    }

    html.push_str(&format!(
        "<form method='post' action='{}' id='reaction-settings'>\n",
        escape_html(page.form_action)
    ));

    // Content types
    html.push_str("<h3>Show reactions on</h3>\n<ul class='pub-types'>\n");
    for tag in page.public_types {
        let checked = settings.types.iter().any(|t| t.as_str() == tag);
        html.push_str(&format!(
            "<li><label><input type='checkbox' name='types' value='{tag}'{}> {tag}</label></li>\n",
            checked_attr(checked),
            tag = escape_html(tag),
        ));
    }
    html.push_str("</ul>\n");

    // Positions, hidden while no matching type is enabled
    html.push_str(&position_select(
        "post_pos",
        "post_position",
        "Position on publications",
        settings.post_position,
        settings.has_publication_types(),
    ));
    html.push_str(&position_select(
        "comment_pos",
        "comment_position",
        "Position on comments",
        settings.comment_position,
        settings.comments_enabled(),
    ));

    // Icon set
    if !page.icon_sets.is_empty() {
        html.push_str("<p><label for='image_set'>Image set</label>\n");
        html.push_str("<select name='image_set' id='image_set'>\n");
        html.push_str(&format!(
            "<option value=''{}>Default</option>\n",
            selected_attr(settings.icon_set.is_none())
        ));
        for set in page.icon_sets {
            let selected = settings.icon_set.as_deref() == Some(set.as_str());
            html.push_str(&format!(
                "<option value='{set}'{}>{set}</option>\n",
                selected_attr(selected),
                set = escape_html(set),
            ));
        }
        html.push_str("</select></p>\n");
    }

    // Available icons
    html.push_str("<h3>Reactions</h3>\n<ul class='reaction-list'>\n");
    for icon in &page.icon_set.icons {
        html.push_str(&format!(
            "<li><label><input type='checkbox' name='reactions' value='{id}'{}> <img src='{src}' alt='{id}'></label></li>\n",
            checked_attr(settings.is_active(icon)),
            id = escape_html(icon),
            src = escape_html(&page.icons.icon_url(page.icon_set, icon)),
        ));
    }
    html.push_str("</ul>\n");

    // Enabled icons in display order
    html.push_str("<h3>Order</h3>\n<ul class='reactions-order'>\n");
    for icon in &settings.active {
        html.push_str(&format!(
            "<li draggable='true' data-reaction='{id}'><img src='{src}' alt='{id}'></li>\n",
            id = escape_html(icon),
            src = escape_html(&page.icons.icon_url(page.icon_set, icon)),
        ));
    }
    html.push_str("</ul>\n<div class='reactions-order-inputs'>\n");
    for icon in &settings.active {
        html.push_str(&format!(
            "<input type='hidden' name='active_order' value='{}'>\n",
            escape_html(icon)
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<input type='hidden' name='reaction_nonce_field' value='{}'>\n",
        escape_html(page.nonce)
    ));
    html.push_str("<p><input type='submit' class='button-primary' value='Save'></p>\n");
    html.push_str("</form>\n</div>\n");
    html.push_str(&format!(
        "<script src='{}/js/reaction-admin.js'></script>\n",
        escape_html(page.assets_url)
    ));
    html.push_str("</body>\n</html>\n");

    html
}

fn position_select(id: &str, name: &str, label: &str, current: Position, visible: bool) -> String {
    let style = if visible { "" } else { " style='display:none'" };
    let mut html = format!(
        "<p id='{id}'{style}><label for='{name}'>{label}</label>\n<select name='{name}'>\n"
    );
    for (position, text) in [(Position::Before, "Before"), (Position::After, "After")] {
        html.push_str(&format!(
            "<option value='{}'{}>{text}</option>\n",
            position.as_str(),
            selected_attr(position == current)
        ));
    }
    html.push_str("</select></p>\n");
    html
}

fn checked_attr(checked: bool) -> &'static str {
    if checked {
        " checked"
    } else {
        ""
    }
}

fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}
