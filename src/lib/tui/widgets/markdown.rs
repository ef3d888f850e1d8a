//! Markdown renderer for chat messages
//!
//! Turns answer text into styled ratatui lines. Raw HTML is never
//! interpreted, it shows up as plain text. Links render as `text (url)` and
//! their targets are collected so the chat screen can hand them to the
//! system browser.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, LinkType, Options, Parser, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use tracing::trace;

use crate::tui::theme;

/// Rendered markdown plus the link targets it contains, in the order their
/// tags close
#[derive(Debug, Default, Clone)]
pub struct MarkdownText {
    pub lines: Vec<Line<'static>>,
    pub links: Vec<String>,
}

pub fn from_str(input: &str) -> MarkdownText {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(input, options);
    let mut writer = TextWriter::new(parser);
    writer.run();
    writer.text
}

/// Link targets of `input` without rendering it
pub fn extract_links(input: &str) -> Vec<String> {
    from_str(input).links
}

struct PendingLink {
    dest: String,
    show_dest: bool,
}

struct TextWriter<I> {
    /// Iterator supplying events.
    iter: I,

    text: MarkdownText,

    /// Stack of inline styles, the top one is current.
    inline_styles: Vec<Style>,

    /// Prefix added to the start of each line (block quotes, code blocks).
    line_prefixes: Vec<Span<'static>>,

    line_styles: Vec<Style>,

    /// Current list index as a stack of indices.
    list_indices: Vec<Option<u64>>,

    /// Open links, innermost last; each is closed when its tag ends.
    links: Vec<PendingLink>,

    needs_newline: bool,

    /// Set between an item start and its first content so task markers land
    /// after the bullet.
    in_list_item_start: bool,

    in_code_block: bool,

    /// Rows of cells, each cell a list of spans.
    table_rows: Vec<Vec<Vec<Span<'static>>>>,
    in_table: bool,
    table_has_header: bool,
}

impl<'a, I> TextWriter<I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn new(iter: I) -> Self {
        Self {
            iter,
            text: MarkdownText::default(),
            inline_styles: vec![],
            line_prefixes: vec![],
            line_styles: vec![],
            list_indices: vec![],
            links: vec![],
            needs_newline: false,
            in_list_item_start: false,
            in_code_block: false,
            table_rows: vec![],
            in_table: false,
            table_has_header: false,
        }
    }

    fn run(&mut self) {
        while let Some(event) = self.iter.next() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: Event<'a>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(text),
            Event::Code(code) => self.code(code),
            Event::Html(html) => self.text(html),
            Event::FootnoteReference(reference) => self.text(reference),
            Event::SoftBreak => self.push_line(Line::default()),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => self.rule(),
            Event::TaskListMarker(checked) => self.task_list_marker(checked),
        }
    }

    fn start_tag(&mut self, tag: Tag<'a>) {
        match tag {
            Tag::Paragraph => self.start_paragraph(),
            Tag::Heading(level, _, _) => self.start_heading(level),
            Tag::BlockQuote => self.start_blockquote(),
            Tag::CodeBlock(kind) => self.start_codeblock(kind),
            Tag::List(start_index) => self.start_list(start_index),
            Tag::Item => self.start_item(),
            Tag::FootnoteDefinition(_) => {}
            Tag::Table(_) => self.start_table(),
            Tag::TableHead => {
                self.table_has_header = true;
                self.table_rows.push(Vec::new());
            }
            Tag::TableRow => self.table_rows.push(Vec::new()),
            Tag::TableCell => {
                if let Some(row) = self.table_rows.last_mut() {
                    row.push(Vec::new());
                }
            }
            Tag::Emphasis => {
                self.flush_list_marker();
                self.push_inline_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::Strong => {
                self.flush_list_marker();
                self.push_inline_style(Style::default().add_modifier(Modifier::BOLD));
            }
            Tag::Strikethrough => {
                self.flush_list_marker();
                self.push_inline_style(Style::default().add_modifier(Modifier::CROSSED_OUT));
            }
            Tag::Link(link_type, dest_url, _title) => {
                self.flush_list_marker();
                self.push_link(link_type, dest_url);
            }
            Tag::Image(link_type, dest_url, _title) => {
                self.flush_list_marker();
                self.push_span(Span::styled("[image] ", theme::subtitle()));
                self.push_link(link_type, dest_url);
            }
        }
    }

    fn end_tag(&mut self, tag: Tag<'a>) {
        match tag {
            Tag::Paragraph => self.needs_newline = true,
            Tag::Heading(..) => {
                self.pop_inline_style();
                self.needs_newline = true;
            }
            Tag::BlockQuote => {
                self.line_prefixes.pop();
                self.line_styles.pop();
                self.needs_newline = true;
            }
            Tag::CodeBlock(_) => {
                self.in_code_block = false;
                self.line_prefixes.pop();
                self.line_styles.pop();
                self.needs_newline = true;
            }
            Tag::List(_) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            Tag::Item => self.flush_list_marker(),
            Tag::FootnoteDefinition(_) => {}
            Tag::Table(_) => self.end_table(),
            Tag::TableHead | Tag::TableRow | Tag::TableCell => {}
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough => self.pop_inline_style(),
            Tag::Link(..) | Tag::Image(..) => self.pop_link(),
        }
    }

    fn start_paragraph(&mut self) {
        // A tight list item already opened its line
        if self.in_list_item_start {
            return;
        }
        if self.needs_newline {
            self.push_line(Line::default());
        }
        self.push_line(Line::default());
        self.needs_newline = false;
    }

    fn start_heading(&mut self, level: HeadingLevel) {
        if self.needs_newline {
            self.push_line(Line::default());
        }
        let style = theme::md_heading();
        self.push_inline_style(style);
        let content = format!("{} ", "#".repeat(level as usize));
        self.push_line(Line::from(Span::styled(content, style)));
        self.needs_newline = false;
    }

    fn start_blockquote(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
        self.line_prefixes
            .push(Span::styled("│ ", theme::md_blockquote()));
        self.line_styles.push(theme::md_blockquote());
    }

    fn start_codeblock(&mut self, _kind: CodeBlockKind<'a>) {
        if !self.text.lines.is_empty() {
            self.push_line(Line::default());
        }
        self.in_code_block = true;
        self.line_prefixes.push(Span::raw("    "));
        self.line_styles.push(theme::md_code_block());
        self.needs_newline = false;
    }

    fn start_list(&mut self, index: Option<u64>) {
        if self.list_indices.is_empty() && self.needs_newline {
            self.push_line(Line::default());
        }
        self.list_indices.push(index);
    }

    fn start_item(&mut self) {
        self.push_line(Line::default());
        self.in_list_item_start = true;
        self.needs_newline = false;
    }

    fn flush_list_marker(&mut self) {
        if self.in_list_item_start {
            self.in_list_item_start = false;
            self.push_list_marker();
        }
    }

    fn push_list_marker(&mut self) {
        let depth = self.list_indices.len().saturating_sub(1);
        let indent = "  ".repeat(depth);
        let marker = match self.list_indices.last_mut() {
            Some(Some(index)) => {
                let marker = format!("{indent}{index}. ");
                *index += 1;
                marker
            }
            _ => format!("{indent}• "),
        };
        self.push_span(Span::styled(marker, theme::md_list_marker()));
    }

    fn task_list_marker(&mut self, checked: bool) {
        self.flush_list_marker();
        let marker = if checked { "[x] " } else { "[ ] " };
        self.push_span(Span::styled(marker, theme::md_list_marker()));
    }

    fn text(&mut self, text: CowStr<'a>) {
        self.flush_list_marker();

        if self.in_table {
            let style = self.current_style();
            self.push_span(Span::styled(text.to_string(), style));
            return;
        }

        if self.in_code_block {
            for line in text.lines() {
                self.push_line(Line::from(Span::raw(line.to_string())));
            }
            return;
        }

        for (position, line) in text.lines().enumerate() {
            if self.needs_newline {
                self.push_line(Line::default());
                self.needs_newline = false;
            }
            if position > 0 {
                self.push_line(Line::default());
            }
            let style = self.current_style();
            self.push_span(Span::styled(line.to_string(), style));
        }
    }

    fn code(&mut self, code: CowStr<'a>) {
        self.flush_list_marker();
        self.push_span(Span::styled(code.to_string(), theme::md_code()));
    }

    fn rule(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
        }
        self.push_line(Line::from(Span::styled("─".repeat(24), theme::border())));
        self.needs_newline = true;
    }

    fn push_link(&mut self, link_type: LinkType, dest_url: CowStr<'a>) {
        let show_dest = !matches!(link_type, LinkType::Autolink | LinkType::Email);
        self.push_inline_style(theme::md_link());
        self.links.push(PendingLink {
            dest: dest_url.to_string(),
            show_dest,
        });
    }

    fn pop_link(&mut self) {
        self.pop_inline_style();
        if let Some(link) = self.links.pop() {
            if link.show_dest && !link.dest.is_empty() {
                self.push_span(Span::raw(" ("));
                self.push_span(Span::styled(link.dest.clone(), theme::md_link()));
                self.push_span(Span::raw(")"));
            }
            if !link.dest.is_empty() && !self.text.links.contains(&link.dest) {
                trace!(dest = link.dest.as_str(), "Collected link");
                self.text.links.push(link.dest);
            }
        }
    }

    fn start_table(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
        }
        self.in_table = true;
        self.table_has_header = false;
        self.table_rows.clear();
        self.needs_newline = false;
    }

    fn end_table(&mut self) {
        self.in_table = false;
        let rows = std::mem::take(&mut self.table_rows);
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &rows {
            for (col, cell) in row.iter().enumerate() {
                let width = cell.iter().map(Span::width).sum::<usize>();
                widths[col] = widths[col].max(width);
            }
        }

        let border = theme::border();
        for (row_idx, row) in rows.into_iter().enumerate() {
            let is_header = row_idx == 0 && self.table_has_header;
            let mut spans = vec![Span::styled("│", border)];
            for (col, width) in widths.iter().enumerate() {
                let cell = row.get(col).cloned().unwrap_or_default();
                let cell_width = cell.iter().map(Span::width).sum::<usize>();
                spans.push(Span::raw(" "));
                for span in cell {
                    if is_header {
                        spans.push(span.patch_style(Style::default().add_modifier(Modifier::BOLD)));
                    } else {
                        spans.push(span);
                    }
                }
                spans.push(Span::raw(" ".repeat(width - cell_width + 1)));
                spans.push(Span::styled("│", border));
            }
            self.push_line(Line::from(spans));

            if is_header {
                let separator = widths
                    .iter()
                    .map(|width| "─".repeat(width + 2))
                    .collect::<Vec<_>>()
                    .join("┼");
                self.push_line(Line::from(Span::styled(format!("├{separator}┤"), border)));
            }
        }
        self.needs_newline = true;
    }

    fn current_style(&self) -> Style {
        self.inline_styles.last().copied().unwrap_or_default()
    }

    fn push_inline_style(&mut self, style: Style) {
        let style = self.current_style().patch(style);
        self.inline_styles.push(style);
    }

    fn pop_inline_style(&mut self) {
        self.inline_styles.pop();
    }

    fn push_line(&mut self, line: Line<'static>) {
        let style = self.line_styles.last().copied().unwrap_or_default();
        let mut line = line.patch_style(style);
        for prefix in self.line_prefixes.iter().rev() {
            line.spans.insert(0, prefix.clone());
        }
        self.text.lines.push(line);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if self.in_table {
            if let Some(cell) = self.table_rows.last_mut().and_then(|row| row.last_mut()) {
                cell.push(span);
            }
            return;
        }
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }
}
