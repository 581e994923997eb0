//! HTML text helpers shared by the renderer and the app.

/// Attribute naming the code element an inline copy button copies from.
pub const COPY_TARGET_ATTR: &str = "data-copy-target";

/// Escape HTML special characters.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Unhighlighted `<pre><code>` block, tagged with `lang` when known.
pub fn plain_code_block(code: &str, lang: Option<&str>) -> String {
    let lang_class = lang
        .map(|l| format!(" class=\"language-{}\"", escape(l)))
        .unwrap_or_default();
    format!("<pre><code{lang_class}>{}</code></pre>", escape(code))
}

/// Code block embedded in surrounding prose HTML, with a copy button slot.
///
/// Used where the block cannot be split out of its container (a list item or
/// a blockquote); the page wires the button through [`COPY_TARGET_ATTR`].
pub fn inline_code_block(id: &str, lang: Option<&str>, highlighted: &str) -> String {
    let id = escape(id);
    let label = lang
        .map(|l| format!("<span class=\"code-lang\">{}</span>", escape(l)))
        .unwrap_or_default();
    format!(
        "<div class=\"code-block inline-code-block\">{label}\
         <div id=\"{id}\" class=\"code-content\">{highlighted}</div>\
         <button type=\"button\" class=\"copy-button\" aria-label=\"Copy code\" {COPY_TARGET_ATTR}=\"{id}\">Copy</button>\
         </div>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_inline_code_block_links_button_to_code() {
        let html = inline_code_block("code-2", Some("bash"), "<pre>ls</pre>");
        assert!(html.contains("<div id=\"code-2\" class=\"code-content\"><pre>ls</pre></div>"));
        assert!(html.contains("data-copy-target=\"code-2\""));
        assert!(html.contains("<span class=\"code-lang\">bash</span>"));
        assert!(html.starts_with("<div") && html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_plain_code_block() {
        assert_eq!(plain_code_block("a < b", None), "<pre><code>a &lt; b</code></pre>");
        assert_eq!(
            plain_code_block("x", Some("rust")),
            "<pre><code class=\"language-rust\">x</code></pre>"
        );
    }
}
