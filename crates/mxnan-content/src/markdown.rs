//! Markdown rendering using pulldown-cmark.
//!
//! Produces [`ContentBlock`]s rather than a single HTML string: prose is
//! accumulated into HTML blocks and every top-level fenced code block is
//! emitted on its own with a stable DOM id, so the page can attach a copy
//! control to it. Code nested in a list or blockquote stays inline in the
//! prose HTML, keeping the container's markup balanced.

use std::collections::HashSet;

use mxnan_core::{
    html::{escape, inline_code_block},
    post::{ContentBlock, TocEntry},
};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::syntax::SyntaxHighlighter;

/// Rendered post body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    /// Content blocks in document order.
    pub blocks: Vec<ContentBlock>,
    /// Headings in document order.
    pub toc: Vec<TocEntry>,
}

/// Markdown renderer with syntax highlighting support.
#[derive(Debug)]
pub struct MarkdownRenderer {
    highlighter: SyntaxHighlighter,
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a new renderer with default options.
    pub fn new() -> Self {
        Self::with_highlighter(SyntaxHighlighter::default())
    }

    /// Create a renderer with a custom syntax theme.
    pub fn with_theme(theme: &str) -> Self {
        Self::with_highlighter(SyntaxHighlighter::new(theme))
    }

    fn with_highlighter(highlighter: SyntaxHighlighter) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self {
            highlighter,
            options,
        }
    }

    /// Render a Markdown body (frontmatter already removed).
    pub fn render(&self, body: &str) -> Rendered {
        let mut writer = Writer::new(&self.highlighter);
        for event in Parser::new_ext(body, self.options) {
            writer.event(event);
        }
        writer.finish()
    }
}

/// Remove MDX `import`/`export` statements that sit outside code fences.
pub fn strip_mdx_esm(body: &str) -> String {
    let mut in_fence = false;
    let mut out = String::with_capacity(body.len());

    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
        }
        if !in_fence && (trimmed.starts_with("import ") || trimmed.starts_with("export ")) {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

struct HeadingBuf {
    level: u8,
    explicit_id: Option<String>,
    text: String,
    inner: String,
}

struct CodeBuf {
    lang: Option<String>,
    text: String,
}

struct ImageBuf {
    src: String,
    title: String,
    alt: String,
}

struct Writer<'h> {
    highlighter: &'h SyntaxHighlighter,
    blocks: Vec<ContentBlock>,
    toc: Vec<TocEntry>,
    html: String,
    heading: Option<HeadingBuf>,
    code: Option<CodeBuf>,
    image: Option<ImageBuf>,
    in_table_head: bool,
    /// Open lists, blockquotes and similar containers.
    depth: usize,
    ids: HashSet<String>,
    code_blocks: usize,
}

impl<'h> Writer<'h> {
    fn new(highlighter: &'h SyntaxHighlighter) -> Self {
        Self {
            highlighter,
            blocks: Vec::new(),
            toc: Vec::new(),
            html: String::new(),
            heading: None,
            code: None,
            image: None,
            in_table_head: false,
            depth: 0,
            ids: HashSet::new(),
            code_blocks: 0,
        }
    }

    /// Where inline output currently goes.
    fn sink(&mut self) -> &mut String {
        match self.heading {
            Some(ref mut heading) => &mut heading.inner,
            None => &mut self.html,
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(ref mut heading) = self.heading {
            heading.text.push_str(text);
        }
        let escaped = escape(text);
        self.sink().push_str(&escaped);
    }

    fn event(&mut self, event: Event<'_>) {
        if let Some(ref mut code) = self.code {
            match event {
                Event::Text(text) => code.text.push_str(&text),
                Event::End(TagEnd::CodeBlock) => self.end_code_block(),
                _ => {}
            }
            return;
        }

        if let Some(ref mut image) = self.image {
            match event {
                Event::Text(text) | Event::Code(text) => image.alt.push_str(&text),
                Event::End(TagEnd::Image) => self.end_image(),
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                self.heading = Some(HeadingBuf {
                    level: level as u8,
                    explicit_id: id.map(|i| i.to_string()),
                    text: String::new(),
                    inner: String::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => self.end_heading(),

            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string)
                        .filter(|l| !l.is_empty()),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(CodeBuf {
                    lang,
                    text: String::new(),
                });
            }

            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                self.image = Some(ImageBuf {
                    src: dest_url.to_string(),
                    title: title.to_string(),
                    alt: String::new(),
                });
            }

            Event::Start(Tag::TableHead) => {
                self.in_table_head = true;
                self.html.push_str("<thead><tr>");
            }
            Event::End(TagEnd::TableHead) => {
                self.in_table_head = false;
                self.html.push_str("</tr></thead>\n<tbody>\n");
            }
            Event::Start(Tag::TableCell) => {
                let cell = if self.in_table_head { "<th>" } else { "<td>" };
                self.html.push_str(cell);
            }
            Event::End(TagEnd::TableCell) => {
                let cell = if self.in_table_head { "</th>" } else { "</td>" };
                self.html.push_str(cell);
            }
            Event::End(TagEnd::Table) => self.html.push_str("</tbody>\n</table>\n"),

            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                if let Some(ref mut heading) = self.heading {
                    heading.text.push_str(&code);
                }
                let html = format!("<code>{}</code>", escape(&code));
                self.sink().push_str(&html);
            }
            Event::SoftBreak => self.sink().push('\n'),
            Event::HardBreak => self.sink().push_str("<br />\n"),
            Event::Html(raw) | Event::InlineHtml(raw) => self.sink().push_str(&raw),
            Event::FootnoteReference(name) => {
                let html = format!(
                    "<sup class=\"footnote-ref\"><a href=\"#fn-{name}\">[{name}]</a></sup>"
                );
                self.sink().push_str(&html);
            }
            Event::Rule => self.html.push_str("<hr />\n"),
            Event::TaskListMarker(checked) => {
                let checkbox = if checked {
                    "<input type=\"checkbox\" checked disabled />"
                } else {
                    "<input type=\"checkbox\" disabled />"
                };
                self.sink().push_str(checkbox);
            }
            Event::InlineMath(math) => {
                let html = format!("<span class=\"math inline\">\\({}\\)</span>", escape(&math));
                self.sink().push_str(&html);
            }
            Event::DisplayMath(math) => {
                let html = format!("<div class=\"math display\">\\[{}\\]</div>", escape(&math));
                self.sink().push_str(&html);
            }
            Event::Start(tag) => {
                if is_container(&tag) {
                    self.depth += 1;
                }
                let html = open_tag(&tag);
                self.sink().push_str(&html);
            }
            Event::End(tag) => {
                if is_container_end(&tag) {
                    self.depth = self.depth.saturating_sub(1);
                }
                let html = close_tag(&tag);
                self.sink().push_str(html);
            }
        }
    }

    fn end_heading(&mut self) {
        let Some(heading) = self.heading.take() else {
            return;
        };

        let base = heading
            .explicit_id
            .unwrap_or_else(|| slugify(&heading.text));
        let id = self.unique_id(base);

        let level = heading.level;
        self.html.push_str(&format!(
            "<h{level} id=\"{}\">{}</h{level}>\n",
            escape(&id),
            heading.inner
        ));
        self.toc.push(TocEntry::new(level, heading.text.trim(), id));
    }

    /// First of `base`, `base-1`, `base-2`, ... not yet used on the page.
    fn unique_id(&mut self, base: String) -> String {
        let base = if base.is_empty() {
            "section".to_string()
        } else {
            base
        };
        let mut id = base.clone();
        let mut suffix = 0;
        while self.ids.contains(&id) {
            suffix += 1;
            id = format!("{base}-{suffix}");
        }
        self.ids.insert(id.clone());
        id
    }

    fn end_code_block(&mut self) {
        let Some(code) = self.code.take() else {
            return;
        };

        let id = format!("code-{}", self.code_blocks);
        self.code_blocks += 1;
        let html = self.highlighter.highlight(&code.text, code.lang.as_deref());

        if self.depth > 0 {
            let inline = inline_code_block(&id, code.lang.as_deref(), &html);
            self.html.push_str(&inline);
            return;
        }

        self.flush_html();
        self.blocks.push(ContentBlock::Code {
            id,
            lang: code.lang,
            html,
        });
    }

    fn end_image(&mut self) {
        let Some(image) = self.image.take() else {
            return;
        };
        let title_attr = if image.title.is_empty() {
            String::new()
        } else {
            format!(" title=\"{}\"", escape(&image.title))
        };
        let html = format!(
            "<img src=\"{}\" alt=\"{}\"{title_attr} />",
            escape(&image.src),
            escape(&image.alt)
        );
        self.sink().push_str(&html);
    }

    fn flush_html(&mut self) {
        if self.html.trim().is_empty() {
            self.html.clear();
            return;
        }
        self.blocks.push(ContentBlock::Html {
            html: std::mem::take(&mut self.html),
        });
    }

    fn finish(mut self) -> Rendered {
        self.flush_html();
        Rendered {
            blocks: self.blocks,
            toc: self.toc,
        }
    }
}

/// Block tags that can hold a fenced code block.
fn is_container(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::List(_) | Tag::BlockQuote(_) | Tag::FootnoteDefinition(_) | Tag::DefinitionList
    )
}

fn is_container_end(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::List(_) | TagEnd::BlockQuote(_) | TagEnd::FootnoteDefinition | TagEnd::DefinitionList
    )
}

/// Opening HTML for tags without dedicated handling.
fn open_tag(tag: &Tag<'_>) -> String {
    match tag {
        Tag::Paragraph => "<p>".to_string(),
        Tag::BlockQuote(_) => "<blockquote>\n".to_string(),
        Tag::List(Some(1)) => "<ol>\n".to_string(),
        Tag::List(Some(start)) => format!("<ol start=\"{start}\">\n"),
        Tag::List(None) => "<ul>\n".to_string(),
        Tag::Item => "<li>".to_string(),
        Tag::FootnoteDefinition(name) => {
            format!("<div class=\"footnote\" id=\"fn-{}\">", escape(name))
        }
        Tag::Table(_) => "<table>\n".to_string(),
        Tag::TableRow => "<tr>".to_string(),
        Tag::Emphasis => "<em>".to_string(),
        Tag::Strong => "<strong>".to_string(),
        Tag::Strikethrough => "<del>".to_string(),
        Tag::Superscript => "<sup>".to_string(),
        Tag::Subscript => "<sub>".to_string(),
        Tag::Link {
            dest_url, title, ..
        } => {
            let title_attr = if title.is_empty() {
                String::new()
            } else {
                format!(" title=\"{}\"", escape(title))
            };
            format!("<a href=\"{}\"{title_attr}>", escape(dest_url))
        }
        Tag::DefinitionList => "<dl>\n".to_string(),
        Tag::DefinitionListTitle => "<dt>".to_string(),
        Tag::DefinitionListDefinition => "<dd>".to_string(),
        // Dispatched before reaching here, or contributes no markup.
        Tag::Heading { .. }
        | Tag::CodeBlock(_)
        | Tag::Image { .. }
        | Tag::TableHead
        | Tag::TableCell
        | Tag::HtmlBlock
        | Tag::MetadataBlock(_) => String::new(),
    }
}

/// Closing HTML for tags without dedicated handling.
fn close_tag(tag: &TagEnd) -> &'static str {
    match tag {
        TagEnd::Paragraph => "</p>\n",
        TagEnd::BlockQuote(_) => "</blockquote>\n",
        TagEnd::List(true) => "</ol>\n",
        TagEnd::List(false) => "</ul>\n",
        TagEnd::Item => "</li>\n",
        TagEnd::FootnoteDefinition => "</div>\n",
        TagEnd::TableRow => "</tr>\n",
        TagEnd::Emphasis => "</em>",
        TagEnd::Strong => "</strong>",
        TagEnd::Strikethrough => "</del>",
        TagEnd::Superscript => "</sup>",
        TagEnd::Subscript => "</sub>",
        TagEnd::Link => "</a>",
        TagEnd::DefinitionList => "</dl>\n",
        TagEnd::DefinitionListTitle => "</dt>\n",
        TagEnd::DefinitionListDefinition => "</dd>\n",
        TagEnd::Heading(_)
        | TagEnd::CodeBlock
        | TagEnd::Image
        | TagEnd::Table
        | TagEnd::TableHead
        | TagEnd::TableCell
        | TagEnd::HtmlBlock
        | TagEnd::MetadataBlock(_) => "",
    }
}

/// Convert heading text to an anchor id.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html_of(rendered: &Rendered) -> String {
        rendered
            .blocks
            .iter()
            .map(|block| match block {
                ContentBlock::Html { html } => html.clone(),
                ContentBlock::Code { html, .. } => html.clone(),
            })
            .collect()
    }

    #[test]
    fn test_headings_get_anchor_ids() {
        let rendered = MarkdownRenderer::new().render("# Hello World\n\n## Setup `npm`\n");

        let html = html_of(&rendered);
        assert!(html.contains("<h1 id=\"hello-world\">Hello World</h1>"));
        assert!(html.contains("<h2 id=\"setup-npm\">Setup <code>npm</code></h2>"));

        assert_eq!(rendered.toc.len(), 2);
        assert_eq!(rendered.toc[0], TocEntry::new(1, "Hello World", "hello-world"));
        assert_eq!(rendered.toc[1].level, 2);
        assert_eq!(rendered.toc[1].id, "setup-npm");
    }

    #[test]
    fn test_duplicate_headings_are_suffixed() {
        let rendered = MarkdownRenderer::new().render("## Usage\n\n## Usage\n\n## Usage\n");
        let ids: Vec<_> = rendered.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["usage", "usage-1", "usage-2"]);
    }

    #[test]
    fn test_suffix_skips_ids_taken_by_real_headings() {
        let rendered = MarkdownRenderer::new().render("## Usage\n\n## Usage 1\n\n## Usage\n");
        let ids: Vec<_> = rendered.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["usage", "usage-1", "usage-2"]);

        let rendered = MarkdownRenderer::new().render("## Usage\n\n## Usage\n\n## Usage 1\n");
        let ids: Vec<_> = rendered.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["usage", "usage-1", "usage-1-1"]);
    }

    #[test]
    fn test_explicit_id_never_repeats_an_earlier_anchor() {
        let rendered = MarkdownRenderer::new().render("## Setup\n\n## Other {#setup}\n\n## Setup\n");
        let ids: Vec<_> = rendered.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "setup-1", "setup-2"]);
    }

    #[test]
    fn test_explicit_heading_id_wins() {
        let rendered = MarkdownRenderer::new().render("## Install {#get-started}\n");
        assert_eq!(rendered.toc[0].id, "get-started");
        assert_eq!(rendered.toc[0].text, "Install");
    }

    #[test]
    fn test_code_blocks_split_content() {
        let rendered = MarkdownRenderer::new().render(
            "Intro\n\n```rust\nfn main() {}\n```\n\nMiddle\n\n```\nplain\n```\n\nEnd\n",
        );

        assert_eq!(rendered.blocks.len(), 5);
        match &rendered.blocks[1] {
            ContentBlock::Code { id, lang, html } => {
                assert_eq!(id, "code-0");
                assert_eq!(lang.as_deref(), Some("rust"));
                assert!(html.contains("main"));
            }
            other => panic!("expected code block, got {other:?}"),
        }
        match &rendered.blocks[3] {
            ContentBlock::Code { id, lang, .. } => {
                assert_eq!(id, "code-1");
                assert!(lang.is_none());
            }
            other => panic!("expected code block, got {other:?}"),
        }
        assert!(matches!(&rendered.blocks[4], ContentBlock::Html { html } if html.contains("End")));
    }

    #[test]
    fn test_code_inside_list_stays_inline() {
        let rendered = MarkdownRenderer::new()
            .render("1. Install\n\n   ```bash\n   cargo install mxnan\n   ```\n\n2. Use it\n\n```rust\nfn main() {}\n```\n");

        assert_eq!(rendered.blocks.len(), 2);
        match &rendered.blocks[0] {
            ContentBlock::Html { html } => {
                assert!(html.starts_with("<ol>"));
                assert!(html.trim_end().ends_with("</ol>"));
                assert_eq!(html.matches("<li>").count(), 2);
                assert_eq!(html.matches("</li>").count(), 2);
                assert!(html.contains("<div id=\"code-0\""));
                assert!(html.contains("data-copy-target=\"code-0\""));
                assert!(html.find("code-0") < html.find("Use it"));
            }
            other => panic!("expected html block, got {other:?}"),
        }
        assert!(matches!(&rendered.blocks[1], ContentBlock::Code { id, .. } if id == "code-1"));
    }

    #[test]
    fn test_code_inside_blockquote_stays_inline() {
        let rendered = MarkdownRenderer::new().render("> Note\n>\n> ```\n> x\n> ```\n");
        assert_eq!(rendered.blocks.len(), 1);
        let html = html_of(&rendered);
        assert!(html.starts_with("<blockquote>"));
        assert!(html.trim_end().ends_with("</blockquote>"));
        assert!(html.contains("id=\"code-0\""));
    }

    #[test]
    fn test_fence_info_keeps_language_only() {
        let rendered = MarkdownRenderer::new().render("```tsx title=\"app.tsx\"\nconst a = 1\n```\n");
        match &rendered.blocks[0] {
            ContentBlock::Code { lang, .. } => assert_eq!(lang.as_deref(), Some("tsx")),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn test_table_rendering() {
        let rendered =
            MarkdownRenderer::new().render("| A | B |\n|---|---|\n| 1 | 2 |\n");
        let html = html_of(&rendered);

        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("</tbody>"));
    }

    #[test]
    fn test_image_alt_text() {
        let rendered = MarkdownRenderer::new().render("![the *og* image](/og.jpg \"og\")\n");
        let html = html_of(&rendered);
        assert!(html.contains("<img src=\"/og.jpg\" alt=\"the og image\" title=\"og\" />"));
    }

    #[test]
    fn test_links_and_task_lists() {
        let rendered =
            MarkdownRenderer::new().render("- [x] [done](/blogs/test)\n- [ ] todo\n");
        let html = html_of(&rendered);
        assert!(html.contains("<a href=\"/blogs/test\">done</a>"));
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_strip_mdx_esm() {
        let body = "import Button from \"./button\"\n\n# Title\n\n```js\nimport x from \"y\"\n```\nexport const meta = {}\n";
        let stripped = strip_mdx_esm(body);

        assert!(!stripped.contains("import Button"));
        assert!(!stripped.contains("export const"));
        assert!(stripped.contains("import x from"));
        assert!(stripped.contains("# Title"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("Special!@#Chars"), "specialchars");
    }
}
