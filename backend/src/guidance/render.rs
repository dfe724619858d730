//! Result Rendering
//!
//! Explanation text, the HTML result card, and the input form page.

use super::types::{AcademicScore, Interest, Recommendation, Skill};

/// Templated explanation shown under a recommendation
pub fn explanation(
    interest: Interest,
    skill: Skill,
    score: AcademicScore,
    career: &str,
    match_score: u32,
) -> String {
    format!(
        "Based on your interest in {} and your strength in {}, the career path of {} aligns strongly with your profile. \
         Your academic score of {}% contributes to a {}% compatibility score, indicating strong career suitability.",
        interest, skill, career, score, match_score
    )
}

/// Render a recommendation as an HTML card
pub fn result_card(rec: &Recommendation) -> String {
    format!(
        r#"<div class="result-card" style="background-color:#111827;padding:22px;border-radius:16px;color:white;">
    <h2 style="color:#34d399">🎯 Personalized Career Recommendation</h2>
    <p><b>👤 Student:</b> {}</p>
    <p><b>💼 Recommended Career:</b> {}</p>
    <p><b>📈 Match Score:</b> {}%</p>
    <p><b>🏫 Colleges:</b> {}</p>
    <p><b>📋 Admission:</b> {}</p>
    <p><b>🚀 Job Prospects:</b> {}</p>
    <hr>
    <p><b>🧠 Explanation:</b><br>{}</p>
</div>"#,
        html_escape(&rec.student),
        html_escape(&rec.career.career),
        rec.match_score,
        html_escape(&rec.career.colleges),
        html_escape(&rec.career.admission),
        html_escape(&rec.career.jobs),
        html_escape(&rec.explanation),
    )
}

/// Banner shown above the form
#[derive(Debug, Clone, Copy)]
pub enum Notice<'a> {
    Warning(&'a str),
    Error(&'a str),
}

/// The input form, optionally with a notice and a result card below it
pub fn form_page(notice: Option<Notice<'_>>, card: Option<&str>) -> String {
    let banner = match notice {
        Some(Notice::Warning(msg)) => format!(r#"<p class="warning">⚠️ {}</p>"#, html_escape(msg)),
        Some(Notice::Error(msg)) => format!(r#"<p class="error">❌ {}</p>"#, html_escape(msg)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Career Guidance Tool</title></head>
<body>
<h1 style="text-align:center;color:#34d399">🎓 Career Guidance &amp; College Selection Tool</h1>
<h3>Enter Student Details</h3>
{}
<form method="post" action="/recommend">
    <label>👤 Student Name <input type="text" name="name"></label><br>
    <label>🎯 Area of Interest <select name="interest">{}</select></label><br>
    <label>🛠 Primary Skill <select name="skill">{}</select></label><br>
    <label>📊 Academic Score (%) <input type="number" name="score" min="0" max="100" step="1" value="0"></label><br>
    <button type="submit">🚀 Get Recommendation</button>
</form>
<hr>
{}
</body>
</html>"#,
        banner,
        options(Interest::ALL.iter().map(|i| i.as_str())),
        options(Skill::ALL.iter().map(|s| s.as_str())),
        card.unwrap_or_default(),
    )
}

fn options<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| format!(r#"<option value="{0}">{0}</option>"#, v))
        .collect::<Vec<String>>()
        .join("")
}

/// Escape HTML special characters to prevent XSS
fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::catalog::reference_catalog;
    use chrono::Utc;

    fn recommendation(student: &str) -> Recommendation {
        let career = reference_catalog().remove(3);
        let score = AcademicScore::new(50).unwrap();
        Recommendation {
            history_id: 1,
            student: student.to_string(),
            interest: Interest::Arts,
            skill: Skill::Design,
            score,
            explanation: explanation(Interest::Arts, Skill::Design, score, &career.career, 96),
            career,
            match_score: 96,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_explanation_interpolates_inputs() {
        let text = explanation(
            Interest::Technology,
            Skill::Programming,
            AcademicScore::new(70).unwrap(),
            "Software Engineer",
            100,
        );
        assert!(text.contains("interest in Technology"));
        assert!(text.contains("strength in Programming"));
        assert!(text.contains("career path of Software Engineer"));
        assert!(text.contains("academic score of 70%"));
        assert!(text.contains("100% compatibility score"));
    }

    #[test]
    fn test_result_card_fields() {
        let card = result_card(&recommendation("Asha"));
        assert!(card.contains("Asha"));
        assert!(card.contains("Designer / Animator"));
        assert!(card.contains("96%"));
        assert!(card.contains("NIFT, NID, Fine Arts Colleges"));
        assert!(card.contains("Portfolio + Entrance Test"));
        assert!(card.contains("UI/UX Designer"));
    }

    #[test]
    fn test_result_card_escapes_name() {
        let card = result_card(&recommendation("<script>alert('x')</script>"));
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
    }

    #[test]
    fn test_form_page_lists_choices() {
        let page = form_page(Some(Notice::Warning("Please enter student name.")), None);
        assert!(page.contains(r#"<option value="Healthcare">Healthcare</option>"#));
        assert!(page.contains(r#"<option value="Management">Management</option>"#));
        assert!(page.contains("class=\"warning\""));
        assert!(page.contains("Please enter student name."));
    }

    #[test]
    fn test_html_escape_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }
}
