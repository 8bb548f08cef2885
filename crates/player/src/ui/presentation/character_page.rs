//! Character page HTML
//!
//! Element ids and class names match the page stylesheet:
//! `character-portrait`, `character-name`, `stats-container`,
//! `skills-container` and `loading`.

use url::form_urlencoded;

use alice_domain::common::escape_html;
use alice_domain::{CharacterView, SkillCard, StatLine};

use super::markup::render_markup_html;
use crate::application::CharacterPageError;

/// Render a loaded character as an HTML fragment.
pub fn render_character_page(view: &CharacterView) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"character-detail\">\n");
    html.push_str(&format!(
        "<img id=\"character-portrait\" src=\"{}\" data-fallback=\"{}\" alt=\"{}\" \
         onerror=\"this.onerror=null;this.src=this.dataset.fallback\">\n",
        escape_html(view.portrait().primary()),
        escape_html(view.portrait().fallback()),
        escape_html(view.display_name()),
    ));
    html.push_str(&format!(
        "<h1 id=\"character-name\">{}</h1>\n",
        escape_html(view.display_name())
    ));

    html.push_str("<div id=\"stats-container\">\n");
    if !view.stats().is_empty() {
        html.push_str("<div class=\"stats-grid\">\n");
        for stat in view.stats() {
            render_stat(&mut html, stat);
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<div id=\"skills-container\">\n");
    for skill in view.skills() {
        render_skill(&mut html, skill);
    }
    html.push_str("</div>\n");

    html.push_str("</div>\n");
    html
}

fn render_stat(html: &mut String, stat: &StatLine) {
    html.push_str("<div class=\"stat-item\">\n");
    html.push_str(&format!(
        "<span class=\"stat-icon\">{}</span>\n",
        stat.icon()
    ));
    html.push_str(&format!(
        "<span class=\"stat-label\">{}</span>\n",
        escape_html(stat.name())
    ));
    html.push_str(&format!(
        "<span class=\"stat-value\" style=\"color: {}\">{}</span>\n",
        stat.color(),
        escape_html(stat.value())
    ));
    html.push_str("</div>\n");
}

fn render_skill(html: &mut String, skill: &SkillCard) {
    let href = skill
        .navigation_path()
        .map(|path| skill_navigation_href(path, skill.name()));

    match &href {
        Some(href) => html.push_str(&format!(
            "<div class=\"skill-card skill-card-clickable\" data-href=\"{}\" \
             onclick=\"window.location.href=this.dataset.href\">\n",
            escape_html(href)
        )),
        None => html.push_str("<div class=\"skill-card\">\n"),
    }

    html.push_str("<div class=\"skill-header\">\n");
    html.push_str(&format!(
        "<span class=\"skill-type\">{}</span>\n",
        escape_html(skill.type_label())
    ));
    html.push_str(&format!(
        "<span class=\"skill-name\">{}</span>\n",
        escape_html(skill.name())
    ));
    if href.is_some() {
        html.push_str("<span class=\"skill-link-icon\">▶</span>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"skill-description\">");
    html.push_str(&render_markup_html(skill.description()));
    html.push_str("</div>\n");

    html.push_str("</div>\n");
}

/// Navigation target of a linked skill: `<path>?name=<url-encoded name>`
pub fn skill_navigation_href(path: &str, skill_name: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", skill_name)
        .finish();
    format!("{}?{}", path, query)
}

/// Render the status element shown instead of a character.
pub fn render_status(error: &CharacterPageError) -> String {
    format!(
        "<div id=\"loading\" class=\"status status-{}\">{}</div>\n",
        error.kind().replace('_', "-"),
        escape_html(error.user_message())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alice_domain::{
        parse_color_markup, stat_style, CharacterId, PortraitPaths, PortraitTemplate,
    };

    fn view(skills: Vec<SkillCard>) -> CharacterView {
        let id = CharacterId::new(12);
        CharacterView::new(
            id,
            "Alice",
            PortraitPaths::for_character(&PortraitTemplate::default(), id),
            vec![StatLine::new("체력", stat_style("체력"), "1200")],
            skills,
        )
    }

    #[test]
    fn test_renders_portrait_and_name() {
        let html = render_character_page(&view(Vec::new()));
        assert!(html.contains("src=\"/Resource/character/12.png\""));
        assert!(html.contains("data-fallback=\"/Resource/character/0.png\""));
        assert!(html.contains("<h1 id=\"character-name\">Alice</h1>"));
    }

    #[test]
    fn test_renders_stats_grid() {
        let html = render_character_page(&view(Vec::new()));
        assert!(html.contains("<div class=\"stats-grid\">"));
        assert!(html.contains("<span class=\"stat-icon\">❤️</span>"));
        assert!(html.contains("<span class=\"stat-label\">체력</span>"));
        assert!(html.contains("<span class=\"stat-value\" style=\"color: #ff6b6b\">1200</span>"));
    }

    #[test]
    fn test_plain_skill_card() {
        let card = SkillCard::new("Passive", "Focus", parse_color_markup("&eCalm"), None);
        let html = render_character_page(&view(vec![card]));

        assert!(html.contains("<div class=\"skill-card\">"));
        assert!(!html.contains("skill-card-clickable"));
        assert!(!html.contains("▶"));
        assert!(html.contains("<span class=\"skill-type\">Passive</span>"));
        assert!(html.contains("<span class=\"skill-name\">Focus</span>"));
        assert!(html.contains(
            "<div class=\"skill-description\"><span style=\"color: #FFFF55\">Calm</span></div>"
        ));
    }

    #[test]
    fn test_clickable_skill_card() {
        let card = SkillCard::new(
            "Skill 1",
            "Slash & Dash",
            parse_color_markup(""),
            Some("/skills/slash".to_string()),
        );
        let html = render_character_page(&view(vec![card]));

        assert!(html.contains("skill-card skill-card-clickable"));
        assert!(html.contains("data-href=\"/skills/slash?name=Slash+%26+Dash\""));
        assert!(html.contains("<span class=\"skill-link-icon\">▶</span>"));
        assert!(html.contains("<span class=\"skill-name\">Slash &amp; Dash</span>"));
    }

    #[test]
    fn test_untrusted_text_is_escaped() {
        let id = CharacterId::new(1);
        let view = CharacterView::new(
            id,
            "<img src=x onerror=alert(1)>",
            PortraitPaths::for_character(&PortraitTemplate::default(), id),
            Vec::new(),
            vec![SkillCard::new(
                "Passive",
                "\"quoted\"",
                parse_color_markup("<b>bold</b>"),
                None,
            )],
        );

        let html = render_character_page(&view);
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_no_stats_renders_empty_container() {
        let id = CharacterId::new(1);
        let view = CharacterView::new(
            id,
            "Alice",
            PortraitPaths::for_character(&PortraitTemplate::default(), id),
            Vec::new(),
            Vec::new(),
        );
        let html = render_character_page(&view);
        assert!(html.contains("<div id=\"stats-container\">\n</div>"));
        assert!(!html.contains("stats-grid"));
    }

    #[test]
    fn test_navigation_href_encoding() {
        assert_eq!(
            skill_navigation_href("/skills/focus", "Focus"),
            "/skills/focus?name=Focus"
        );
        assert_eq!(
            skill_navigation_href("/s", "집중 공격"),
            "/s?name=%EC%A7%91%EC%A4%91+%EA%B3%B5%EA%B2%A9"
        );
    }

    #[test]
    fn test_status_page() {
        let html = render_status(&CharacterPageError::not_found(CharacterId::new(3)));
        assert_eq!(
            html,
            "<div id=\"loading\" class=\"status status-not-found\">Character information could not be found.</div>\n"
        );

        let html = render_status(&CharacterPageError::InvalidIdentifier("abc".to_string()));
        assert!(html.contains("Invalid character ID."));
        assert!(html.contains("status-invalid-identifier"));
    }
}
