use crate::form::{FormView, Outcome};
use crate::languages::TargetLanguage;

pub const PAGE_TITLE: &str = "English → Indian Languages Translator";

const STYLE: &str = "body{font-family:sans-serif;max-width:720px;margin:2rem auto;padding:0 1rem}\
textarea,select{width:100%;box-sizing:border-box}\
.banner{padding:.6rem .8rem;border-radius:4px;margin:1rem 0}\
.warning{background:#fff4d6}.info{background:#e4f0fb}.error{background:#fde2e1}";

/// Escape text for HTML body and attribute positions
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn caption() -> String {
    let names: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.canonical_name()).collect();
    let last = names.len() - 1;
    format!(
        "Translate English text into {}, or {}.",
        names[..last].join(", "),
        names[last]
    )
}

fn language_select(selected: TargetLanguage) -> String {
    let mut html = String::from(r#"<select id="language" name="language">"#);
    for lang in TargetLanguage::ALL {
        let marker = if lang == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            lang.canonical_name(),
            marker,
            escape_html(lang.display_label())
        ));
    }
    html.push_str("</select>");
    html
}

fn banner(kind: &str, message: &str) -> String {
    format!(
        r#"<div class="banner {}" role="status">{}</div>"#,
        kind,
        escape_html(message)
    )
}

fn outcome_section(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Warning(message) => banner("warning", message),
        Outcome::Info(message) => banner("info", message),
        Outcome::Error(message) => banner("error", message),
        Outcome::Translated(text) => format!(
            "<h2>Translated Text</h2>\n<textarea id=\"translated_text_display\" rows=\"8\" readonly>{}</textarea>",
            escape_html(text)
        ),
    }
}

/// Render the whole page for `view`
pub fn render_page(view: &FormView) -> String {
    let mut body = String::new();

    if let Some(hint) = &view.hint {
        body.push_str(&banner("info", hint));
        body.push('\n');
    }
    if let Some(outcome) = &view.outcome {
        body.push_str(&outcome_section(outcome));
        body.push('\n');
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
<p>{caption}</p>
<details>
<summary>How to use</summary>
<ul>
<li>Select a target language.</li>
<li>Enter English text to translate.</li>
<li>Click Translate to get the result below.</li>
</ul>
</details>
<form method="post" action="/">
<label for="language">Target language</label>
{select}
<label for="text">Enter English text</label>
<textarea id="text" name="text" rows="8" placeholder="Type or paste your English text here...">{text}</textarea>
<button type="submit" name="action" value="translate">Translate</button>
<button type="submit" name="action" value="clear">Clear</button>
</form>
{body}</body>
</html>
"#,
        title = escape_html(PAGE_TITLE),
        style = STYLE,
        caption = escape_html(&caption()),
        select = language_select(view.language),
        text = escape_html(&view.text),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn caption_lists_all_languages() {
        assert_eq!(
            caption(),
            "Translate English text into Hindi, Tamil, Telugu, Kannada, Malayalam, Bengali, Marathi, Gujarati, or Punjabi."
        );
    }

    #[test]
    fn blank_page_has_controls() {
        let html = render_page(&FormView::default());
        assert!(html.contains("<h1>English → Indian Languages Translator</h1>"));
        assert!(html.contains(r#"<option value="Hindi" selected>Hindi (हिंदी)</option>"#));
        assert!(html.contains(r#"<option value="Punjabi">Punjabi (ਪੰਜਾਬੀ)</option>"#));
        assert!(html.contains(r#"value="translate">Translate</button>"#));
        assert!(html.contains(r#"value="clear">Clear</button>"#));
        assert!(!html.contains(r#"<div class="banner"#));
        assert!(!html.contains("Translated Text"));
    }

    #[test]
    fn renders_selection_and_result() {
        let view = FormView {
            language: TargetLanguage::Bengali,
            text: "Hello <friend>".to_string(),
            hint: None,
            outcome: Some(Outcome::Translated("হ্যালো বন্ধু".to_string())),
        };
        let html = render_page(&view);
        assert!(html.contains(r#"<option value="Bengali" selected>"#));
        assert!(!html.contains(r#"<option value="Hindi" selected>"#));
        assert!(html.contains(">Hello &lt;friend&gt;</textarea>"));
        assert!(html.contains("<h2>Translated Text</h2>"));
        assert!(html.contains("readonly>হ্যালো বন্ধু</textarea>"));
    }

    #[test]
    fn renders_hint_and_error_banner() {
        let view = FormView {
            hint: Some("Set your key".to_string()),
            outcome: Some(Outcome::Error("Translation failed: rate limit exceeded".to_string())),
            ..FormView::default()
        };
        let html = render_page(&view);
        assert!(html.contains(r#"<div class="banner info" role="status">Set your key</div>"#));
        assert!(html.contains(
            r#"<div class="banner error" role="status">Translation failed: rate limit exceeded</div>"#
        ));
    }
}
