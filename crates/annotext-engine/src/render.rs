use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::types::{AnnotatedText, SpanKind};

/// How mentions and links map onto markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepended to a handle to form the profile URL.
    pub profile_prefix: String,
    /// Adds `target="_blank"` and `rel="noopener noreferrer"` to links.
    pub open_links_in_new_tab: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            profile_prefix: "/@".to_string(),
            open_links_in_new_tab: true,
        }
    }
}

/// Renders annotated text as an HTML fragment.
///
/// Text is escaped and line breaks become `<br>`. Mentions link to the
/// profile page, links to their normalized href with the display text as the
/// label.
pub fn render_html(source: &str, annotated: &AnnotatedText, options: &RenderOptions) -> String {
    let mut html = String::with_capacity(source.len() * 2);

    for span in annotated {
        match &span.kind {
            SpanKind::Text => {
                html.push_str(&encode_text(span.text(source)).replace('\n', "<br>"));
            }
            SpanKind::Mention { handle } => {
                let href = format!("{}{handle}", options.profile_prefix);
                html.push_str(&format!(
                    r#"<a class="mention" href="{}">@{}</a>"#,
                    encode_double_quoted_attribute(&href),
                    encode_text(handle)
                ));
            }
            SpanKind::Link { href, display_text } => {
                let target = if options.open_links_in_new_tab {
                    r#" target="_blank" rel="noopener noreferrer""#
                } else {
                    ""
                };
                html.push_str(&format!(
                    r#"<a class="external-link" href="{}"{target}>{}</a>"#,
                    encode_double_quoted_attribute(href),
                    encode_text(display_text)
                ));
            }
        }
    }

    html
}
