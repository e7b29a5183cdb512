//! Rendering for the text field.

use super::model::Model;
use super::props::Props;
use super::types::{Size, Variant};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

const ERROR_COLOR: &str = "9";
const FOCUS_COLOR: &str = "12";
const IDLE_COLOR: &str = "245";
const FAINT_COLOR: &str = "240";
const FILLED_BACKGROUND: &str = "236";

impl Model {
    /// Renders the field: label, decorated input box and helper text.
    pub fn view(&self, props: &Props) -> String {
        let accent = self.accent(props);
        let mut out: Vec<String> = Vec::new();

        if !props.label.is_empty() {
            let mut label = props.label.clone();
            if props.required {
                label.push_str(" *");
            }
            let mut style = Style::new().foreground(Color::from(accent));
            if self.focus && !props.disabled {
                style = style.bold(true);
            }
            out.push(style.render(&label));
        }

        let body = self.body_lines(props).join("\n");
        let boxed = self.box_style(props, accent).render(&body);
        out.push(match &props.style {
            Some(sx) => sx.render(&boxed),
            None => boxed,
        });

        if let Some(helper) = props.helper_text.as_deref().filter(|h| !h.is_empty()) {
            let color = if props.error { ERROR_COLOR } else { FAINT_COLOR };
            out.push(Style::new().foreground(Color::from(color)).render(helper));
        }

        out.join("\n")
    }

    /// Width of the text area, excluding decorations.
    pub fn text_width(&self, props: &Props) -> usize {
        let decorations: usize = [&props.start_adornment, &props.end_adornment]
            .iter()
            .filter_map(|a| a.as_ref())
            .map(|a| a.width() + 1)
            .sum();
        self.content_width(props).saturating_sub(decorations).max(1)
    }

    /// Number of text lines drawn.
    pub fn visible_rows(&self, props: &Props) -> usize {
        if !props.multiline {
            return 1;
        }
        if let Some(rows) = props.rows {
            return rows.max(1);
        }
        let lines = props.value.split('\n').count();
        lines.clamp(1, props.max_rows.unwrap_or(usize::MAX).max(1))
    }

    fn content_width(&self, props: &Props) -> usize {
        if !props.full_width {
            return props.width;
        }
        let horizontal_padding = 2;
        let border = if props.variant == Variant::Outlined { 2 } else { 0 };
        self.container_width
            .saturating_sub(horizontal_padding + border)
            .max(1)
    }

    fn accent(&self, props: &Props) -> &'static str {
        if props.disabled {
            FAINT_COLOR
        } else if props.error {
            ERROR_COLOR
        } else if self.focus {
            FOCUS_COLOR
        } else {
            IDLE_COLOR
        }
    }

    fn box_style(&self, props: &Props, accent: &str) -> Style {
        let style = match props.variant {
            Variant::Outlined => Style::new()
                .border_style(lipgloss::rounded_border())
                .border_top(true)
                .border_right(true)
                .border_bottom(true)
                .border_left(true)
                .border_foreground(Color::from(accent)),
            Variant::Filled => Style::new().background(Color::from(FILLED_BACKGROUND)),
            Variant::Standard => Style::new()
                .border_style(lipgloss::normal_border())
                .border_bottom(true)
                .border_foreground(Color::from(accent)),
        };
        let vertical = match props.size {
            Size::Small => 0,
            Size::Medium => 1,
        };
        let style = style.padding(vertical, 1, vertical, 1);
        if props.disabled {
            style.faint(true)
        } else {
            style
        }
    }

    /// Text lines with decorations, each padded to the content width.
    fn body_lines(&self, props: &Props) -> Vec<String> {
        let text_width = self.text_width(props);
        let rows = self.visible_rows(props);

        let chars: Vec<char> = props.value.chars().collect();
        let pos = self.position(&props.value);
        let caret_row = chars[..pos].iter().filter(|&&c| c == '\n').count();
        let top = (caret_row + 1).saturating_sub(rows);

        let mut line_start = 0;
        let logical: Vec<(usize, &[char])> = chars
            .split(|&c| c == '\n')
            .map(|line| {
                let start = line_start;
                line_start += line.len() + 1;
                (start, line)
            })
            .collect();

        let start = props.start_adornment.as_ref().map(|a| (a.render(), a.width()));
        let end = props.end_adornment.as_ref().map(|a| a.render());

        (top..top + rows)
            .map(|row| {
                let text = match logical.get(row) {
                    Some((offset, line)) => {
                        let caret = (row == caret_row).then(|| pos - offset);
                        self.render_line(line, caret, text_width, props)
                    }
                    None => " ".repeat(text_width),
                };

                let mut line = String::new();
                if let Some((glyph, width)) = &start {
                    if row == top {
                        line.push_str(glyph);
                    } else {
                        line.push_str(&" ".repeat(*width));
                    }
                    line.push(' ');
                }
                line.push_str(&text);
                if let Some(glyph) = &end {
                    line.push(' ');
                    if row == top {
                        line.push_str(glyph);
                    }
                }
                line
            })
            .collect()
    }

    /// Renders one logical line, scrolled so the caret stays visible.
    fn render_line(
        &self,
        line: &[char],
        caret: Option<usize>,
        width: usize,
        props: &Props,
    ) -> String {
        let shown: Vec<char> = if props.input_type.is_masked() {
            vec![self.echo_character; line.len()]
        } else {
            line.to_vec()
        };

        let caret = caret.filter(|_| self.focus && !props.disabled);
        let completion: Vec<char> = match caret {
            Some(c) if c == line.len() && !props.multiline => self
                .current_suggestion(props)
                .map(|s| s.chars().skip(line.len()).collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        let first = match caret {
            Some(c) => {
                let under = shown.get(c).or(completion.first()).copied().unwrap_or(' ');
                scroll_start(&shown, c, under, width)
            }
            None => 0,
        };

        let faint = Style::new().foreground(Color::from(FAINT_COLOR));
        let mut out = String::new();
        let mut used = 0;
        let mut i = first;
        loop {
            let (ch, ghost) = if i < shown.len() {
                (shown[i], false)
            } else if let Some(&c) = completion.get(i - shown.len()) {
                (c, true)
            } else if caret == Some(i) {
                (' ', false)
            } else {
                break;
            };

            let w = ch.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;

            if caret == Some(i) {
                out.push_str(&self.cursor.render(ch));
            } else if ghost {
                out.push_str(&faint.render(&ch.to_string()));
            } else {
                out.push(ch);
            }
            i += 1;
        }

        out.push_str(&" ".repeat(width.saturating_sub(used)));
        out
    }
}

/// First character to draw so that the caret cell, holding `under`, fits in
/// `width` cells.
fn scroll_start(shown: &[char], caret: usize, under: char, width: usize) -> usize {
    let cell = |c: char| c.width().unwrap_or(0);
    let mut used = cell(under).max(1);
    let mut first = caret;
    while first > 0 {
        let w = cell(shown[first - 1]);
        if used + w > width {
            break;
        }
        used += w;
        first -= 1;
    }
    first
}
