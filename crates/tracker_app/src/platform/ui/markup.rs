use std::fmt::Write as _;

use tracker_core::JobCardView;

use super::constants::*;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// CSS class for a match-score badge.
pub fn score_band(score: u8) -> &'static str {
    match score {
        80.. => "score-high",
        60..=79 => "score-medium",
        40..=59 => "score-low",
        _ => "score-muted",
    }
}

pub fn action_button(action: &str, job_id: &str, label: &str, class: &str) -> String {
    format!(
        r#"<button class="{class}" data-action="{action}" data-job-id="{id}">{label}</button>"#,
        id = escape(job_id),
        label = escape(label),
    )
}

pub fn route_link(route: &str, path: &str, label: &str, class: &str) -> String {
    format!(
        r#"<a class="{class}" href="{path}" data-route="{route}">{label}</a>"#,
        label = escape(label),
    )
}

pub fn job_card(card: &JobCardView) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<article class="job-card" data-job-id="{}">"#,
        escape(&card.job_id)
    );
    let _ = write!(html, r#"<h3 class="job-title">{}</h3>"#, escape(&card.title));
    let _ = write!(html, r#"<p class="job-company">{}</p>"#, escape(&card.company));
    let _ = write!(
        html,
        r#"<p class="job-meta">{} · {} · {}</p>"#,
        escape(&card.location),
        card.mode,
        card.experience
    );
    let _ = write!(
        html,
        r#"<p class="job-salary">{}</p><p class="job-posted">{}</p><span class="job-source">{}</span>"#,
        escape(&card.salary_range),
        card.posted_label,
        card.source
    );
    if let Some(score) = card.score {
        let _ = write!(
            html,
            r#"<span class="score-badge {}">{score}% match</span>"#,
            score_band(score)
        );
    }
    html.push_str(r#"<div class="job-actions">"#);
    html.push_str(&action_button(ACTION_VIEW, &card.job_id, "View", "btn btn-secondary"));
    if card.saved {
        html.push_str(&action_button(ACTION_SAVE, &card.job_id, "Saved", "btn btn-saved"));
    } else {
        html.push_str(&action_button(ACTION_SAVE, &card.job_id, "Save", "btn btn-secondary"));
    }
    html.push_str(&action_button(ACTION_APPLY, &card.job_id, "Apply", "btn btn-primary"));
    html.push_str("</div></article>");
    html
}

pub fn job_list(cards: &[JobCardView]) -> String {
    let mut html = String::from(r#"<div class="job-list">"#);
    for card in cards {
        html.push_str(&job_card(card));
    }
    html.push_str("</div>");
    html
}

pub fn empty_state(message: &str) -> String {
    format!(r#"<div class="empty-state"><p>{}</p></div>"#, escape(message))
}

/// `options` are `(value, label)` pairs.
pub fn select(control: &str, label: &str, options: &[(String, String)], selected: &str) -> String {
    let mut html = format!(
        r#"<label class="field"><span>{}</span><select data-control="{control}">"#,
        escape(label)
    );
    for (value, text) in options {
        let marker = if value == selected { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{marker}>{}</option>"#,
            escape(value),
            escape(text)
        );
    }
    html.push_str("</select></label>");
    html
}

pub fn text_input(control: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<label class="field"><span>{}</span><input type="text" data-control="{control}" value="{}" placeholder="{}"></label>"#,
        escape(label),
        escape(value),
        escape(placeholder)
    )
}

pub fn checkbox(control: &str, value: &str, label: &str, checked: bool) -> String {
    let marker = if checked { " checked" } else { "" };
    format!(
        r#"<label class="check"><input type="checkbox" data-control="{control}" value="{}"{marker}> {}</label>"#,
        escape(value),
        escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::{Experience, JobSource, WorkMode};

    fn card(score: Option<u8>, saved: bool) -> JobCardView {
        JobCardView {
            job_id: "jn-1".to_string(),
            title: "Dev <Ops>".to_string(),
            company: "Acme & Co".to_string(),
            location: "Pune".to_string(),
            mode: WorkMode::Hybrid,
            experience: Experience::OneToThree,
            source: JobSource::Naukri,
            salary_range: "8-12 LPA".to_string(),
            posted_label: "Today".to_string(),
            score,
            saved,
        }
    }

    #[test]
    fn score_bands_follow_thresholds() {
        assert_eq!(score_band(100), "score-high");
        assert_eq!(score_band(80), "score-high");
        assert_eq!(score_band(79), "score-medium");
        assert_eq!(score_band(60), "score-medium");
        assert_eq!(score_band(40), "score-low");
        assert_eq!(score_band(39), "score-muted");
        assert_eq!(score_band(0), "score-muted");
    }

    #[test]
    fn card_escapes_text_and_marks_actions() {
        let html = job_card(&card(None, false));
        assert!(html.contains("Dev &lt;Ops&gt;"));
        assert!(html.contains("Acme &amp; Co"));
        assert!(html.contains(r#"data-action="save" data-job-id="jn-1">Save<"#));
        assert!(html.contains(r#"data-action="apply""#));
        assert!(!html.contains("score-badge"));
    }

    #[test]
    fn card_shows_badge_and_saved_state() {
        let html = job_card(&card(Some(65), true));
        assert!(html.contains(r#"score-badge score-medium">65% match"#));
        assert!(html.contains(">Saved<"));
    }

    #[test]
    fn select_marks_the_current_value() {
        let options = vec![
            ("all".to_string(), "All".to_string()),
            ("Remote".to_string(), "Remote".to_string()),
        ];
        let html = select("filter-mode", "Mode", &options, "Remote");
        assert!(html.contains(r#"<option value="Remote" selected>"#));
        assert!(html.contains(r#"<option value="all">"#));
    }
}
