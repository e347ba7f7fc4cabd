use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

use crate::outline::engine::{Row, RowKind};
use crate::outline::state::{CollapsePolicy, DisplayMode};
use crate::tui::theme::{Theme, style_for};

const FOCUS_MARKER: &str = "› ";
const GUTTER: &str = "  ";

#[derive(Debug)]
pub struct ViewRenderData<'a> {
    pub title: &'a str,
    pub rows: &'a [Row],
    pub focused: Option<usize>,
    pub scroll: usize,
    pub mode: DisplayMode,
    pub policy: CollapsePolicy,
    pub message: Option<&'a str>,
    pub show_help: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub frame: Rect,
    pub outer: Rect,
    pub list: Rect,
    pub status: Rect,
}

pub fn layout(area: Rect) -> ViewLayout {
    let outer = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let inner = outline_block(Theme::for_mode(DisplayMode::Light), "", DisplayMode::Light)
        .inner(outer);
    let [list, _gap, status] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);
    ViewLayout {
        frame: area,
        outer,
        list,
        status,
    }
}

pub fn draw(frame: &mut Frame, layout: &ViewLayout, data: &ViewRenderData<'_>) {
    let theme = Theme::for_mode(data.mode);
    frame.render_widget(Block::default().style(theme.base()), layout.frame);
    frame.render_widget(
        outline_block(theme, data.title, data.mode),
        layout.outer,
    );

    let height = layout.list.height as usize;
    let lines = data
        .rows
        .iter()
        .enumerate()
        .skip(data.scroll)
        .take(height)
        .map(|(idx, row)| row_line(row, data.focused == Some(idx), theme))
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines), layout.list);

    frame.render_widget(
        Paragraph::new(status_lines(data, theme)),
        layout.status,
    );

    if data.show_help {
        render_help_overlay(frame, theme);
    }
}

/// One outline row: focus gutter, indent, then glyph and label.
pub fn row_line(row: &Row, focused: bool, theme: Theme) -> Line<'static> {
    let style = style_for(row.style);
    let mut spans = vec![
        Span::styled(
            if focused { FOCUS_MARKER } else { GUTTER },
            Style::default().fg(theme.accent),
        ),
        Span::raw(" ".repeat(row.indent)),
    ];
    if let Some(glyph) = row.indicator() {
        spans.push(Span::styled(format!("{glyph} "), style));
    }
    spans.push(Span::styled(row.label.clone(), style));

    let line = Line::from(spans);
    if focused {
        line.style(Style::default().bg(theme.focus))
    } else {
        line
    }
}

/// Scroll offset that keeps `focused` inside a window of `height` rows.
pub fn scroll_for_focus(scroll: usize, focused: Option<usize>, height: usize, total: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let mut scroll = scroll.min(total - height);
    if let Some(focused) = focused {
        if focused < scroll {
            scroll = focused;
        } else if focused >= scroll + height {
            scroll = focused + 1 - height;
        }
    }
    scroll
}

fn outline_block(theme: Theme, title: &str, mode: DisplayMode) -> Block<'static> {
    let title = Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", mode.label()), Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("[?] help", theme.muted()),
        Span::raw("  "),
        Span::styled("[q] quit", theme.muted()),
    ]);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::new(1, 1, 1, 0))
        .title(title)
}

fn status_lines(data: &ViewRenderData<'_>, theme: Theme) -> Vec<Line<'static>> {
    let focused = data.focused.and_then(|idx| data.rows.get(idx));
    let detail = match focused {
        Some(Row {
            kind: RowKind::Link { url },
            ..
        }) => Line::from(vec![
            Span::styled("link  ", theme.muted()),
            Span::styled(url.clone(), Style::default().fg(theme.link)),
        ]),
        Some(Row {
            kind: RowKind::Header { expanded },
            level,
            ..
        }) => {
            let state = if *expanded { "expanded" } else { "collapsed" };
            Line::from(Span::styled(
                format!(
                    "group  level {level}  {state}  (on collapse: {})",
                    data.policy.label()
                ),
                theme.muted(),
            ))
        }
        None => Line::from(Span::styled("catalog is empty", theme.muted())),
    };
    let hint = data.message.map(str::to_string).unwrap_or_else(|| {
        "↑↓ move  ←→ fold  Enter open/toggle  d dark mode".to_string()
    });
    vec![detail, Line::from(Span::styled(hint, theme.muted()))]
}

fn render_help_overlay(frame: &mut Frame, theme: Theme) {
    let area = centered_rect(frame.area(), 60, 60);
    frame.render_widget(Clear, area);
    let help = Paragraph::new(vec![
        Line::from("MOVE"),
        Line::from("  ↑/k ↓/j      focus previous / next row"),
        Line::from("  g/Home G/End first / last row"),
        Line::from("  PgUp PgDn    jump a page"),
        Line::from(""),
        Line::from("FOLD"),
        Line::from("  →/l          expand group, or step into it"),
        Line::from("  ←/h          collapse group, or step out"),
        Line::from("  Enter/Space  toggle group, or open link in browser"),
        Line::from("  mouse click  same as Enter on the clicked row"),
        Line::from(""),
        Line::from("  d            toggle dark mode"),
        Line::from("  q/Esc        quit"),
    ])
    .style(theme.base())
    .block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(help, area);
}

fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .flex(Flex::Center)
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .flex(Flex::Center)
    .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::NodePath;
    use crate::outline::engine::{Role, StyleClass};

    fn header(label: &str, level: usize, expanded: bool) -> Row {
        Row {
            path: NodePath::root(label),
            label: label.to_string(),
            level,
            indent: level * 2,
            kind: RowKind::Header { expanded },
            style: StyleClass {
                mode: DisplayMode::Light,
                role: if level == 0 { Role::Category } else { Role::Group },
            },
        }
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn row_line_shows_indent_glyph_and_label() {
        let theme = Theme::for_mode(DisplayMode::Light);
        assert_eq!(text(&row_line(&header("Email", 0, true), false, theme)), "  ▼ Email");
        assert_eq!(
            text(&row_line(&header("Facebook", 1, false), true, theme)),
            "›   ▶ Facebook"
        );
    }

    #[test]
    fn link_rows_have_no_glyph() {
        let row = Row {
            path: NodePath::from_labels(["Email", "Hunter.io"]),
            label: "Hunter.io".to_string(),
            level: 1,
            indent: 2,
            kind: RowKind::Link {
                url: "https://hunter.io/".to_string(),
            },
            style: StyleClass {
                mode: DisplayMode::Dark,
                role: Role::Link,
            },
        };
        let theme = Theme::for_mode(DisplayMode::Dark);
        assert_eq!(text(&row_line(&row, false, theme)), "    Hunter.io");
    }

    #[test]
    fn scroll_follows_focus() {
        assert_eq!(scroll_for_focus(0, Some(3), 10, 5), 0);
        assert_eq!(scroll_for_focus(0, Some(12), 10, 40), 3);
        assert_eq!(scroll_for_focus(8, Some(2), 10, 40), 2);
        assert_eq!(scroll_for_focus(35, Some(39), 10, 40), 30);
        assert_eq!(scroll_for_focus(5, None, 0, 40), 0);
    }
}
