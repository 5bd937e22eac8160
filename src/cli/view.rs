//! Drawing for the play command.

// Screen coordinates are small; world-to-cell conversion truncates on purpose
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use super::play::{App, Screen};
use folioquest::constants::TITLE_HEIGHT;
use folioquest::content::{self, Language, UiStrings};
use folioquest::menu::{MenuMode, StartMenu};
use folioquest::scene::{Card, Character, Entity, Facing, Modal};
use folioquest::{Scene, Size};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use std::time::Duration;

const COLOR_ACTIVE: Color = Color::Rgb(0xf7, 0xd5, 0x1d);
const COLOR_HEART: Color = Color::Red;
const PULSE: Duration = Duration::from_millis(400);

fn chunks(frame: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(5),    // World
        Constraint::Length(3), // Footer
    ])
    .areas(frame)
}

/// Cells available to the world view inside its border.
pub(super) fn world_area(frame: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(chunks(frame)[1])
}

/// Where dialogs and toasts are drawn.
pub(super) fn dialog_area(frame: Rect) -> Rect {
    centered(chunks(frame)[1], 72, 14)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Draw the whole screen.
pub(super) fn draw(f: &mut Frame, app: &App) {
    let [header, main, footer] = chunks(f.area());
    match &app.screen {
        Screen::Menu(menu) => {
            render_menu(f, main, menu);
            render_footer(f, footer, " [↑↓] select  [Z/Enter] confirm  [Esc] back  [M] mute  [Q] quit ");
        }
        Screen::Explore(scene) => {
            let ui = content::ui(scene.language());
            render_header(f, header, scene, ui, app.audio.is_enabled());
            let block = Block::default().borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);
            f.render_widget(
                WorldView {
                    scene,
                    cell: app.cell,
                },
                inner,
            );
            render_overlay(f, dialog_area(f.area()), scene, ui);
            let controls = format!(
                " [←↑↓→] move  [Z] interact  {}  {}  [M] mute  [Q] quit ",
                ui.character, ui.save
            );
            render_footer(f, footer, &controls);
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, scene: &Scene, ui: &UiStrings, sound: bool) {
    let title = format!(
        " {} | {} | {}/{} | {} | {} ",
        ui.banner,
        scene.character(),
        scene.visited().len(),
        scene.cards().len(),
        if sound { "♪ on" } else { "♪ off" },
        scene.language().name(),
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, area: Rect, controls: &str) {
    let footer = Paragraph::new(controls.to_string())
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn render_menu(f: &mut Frame, area: Rect, menu: &StartMenu) {
    let ui = content::ui(menu.language());
    let heart = |selected: bool| {
        if selected {
            Span::styled("❤ ", Style::default().fg(COLOR_HEART))
        } else {
            Span::raw("  ")
        }
    };
    let entry = |label: &str, selected: bool| {
        let style = if selected {
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![heart(selected), Span::styled(label.to_string(), style)])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            ui.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    match menu.mode() {
        MenuMode::Language => {
            lines.push(Line::from(ui.language));
            lines.push(Line::from(""));
            for language in Language::ALL {
                lines.push(entry(language.name(), language == menu.language()));
            }
        }
        MenuMode::Main => {
            lines.push(entry(ui.explore, menu.main_selection() == 0));
            lines.push(entry(ui.quit, menu.main_selection() == 1));
        }
    }

    let height = lines.len() as u16 + 2;
    let widget = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Double));
    f.render_widget(widget, centered(area, 40, height));
}

fn render_overlay(f: &mut Frame, area: Rect, scene: &Scene, ui: &UiStrings) {
    let (title, mut lines, hint) = match scene.modal() {
        Modal::Exploring => return,
        Modal::CardOpen { card, reveal } => {
            let section = card.section(scene.language());
            let lines: Vec<Line> = reveal.visible().into_iter().map(Line::from).collect();
            let hint = if reveal.is_complete() { ui.close } else { ui.skip };
            (format!(" {} {} ", section.icon, section.title), lines, hint.to_string())
        }
        Modal::NpcChoice { dialog } => {
            let mut lines: Vec<Line> = dialog
                .reveal()
                .visible()
                .into_iter()
                .map(|l| Line::from(format!("* {l}")))
                .collect();
            let hint = if dialog.reveal().is_complete() {
                lines.push(Line::from(""));
                for (i, option) in dialog.options().iter().enumerate() {
                    let selected = i == dialog.selected();
                    lines.push(Line::from(vec![
                        if selected {
                            Span::styled("  ❤ ", Style::default().fg(COLOR_HEART))
                        } else {
                            Span::raw("    ")
                        },
                        Span::styled(
                            option.clone(),
                            if selected {
                                Style::default().fg(COLOR_ACTIVE)
                            } else {
                                Style::default()
                            },
                        ),
                    ]));
                }
                format!("{}  {}", ui.select, ui.confirm)
            } else {
                ui.skip.to_string()
            };
            (format!(" {} ", scene.character().other()), lines, hint)
        }
        Modal::SaveToast { .. } => (String::new(), toast_lines(ui.saved), String::new()),
        Modal::LoadToast { .. } => {
            (String::new(), toast_lines(ui.journey_continues), String::new())
        }
    };

    let toast = title.is_empty();
    let area = if toast {
        centered(area, 36, 3)
    } else {
        area
    };
    if !hint.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::Gray))));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().bg(Color::Black).fg(Color::White));
    if !toast {
        block = block.title(Span::styled(
            title,
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn toast_lines(lines: &'static [&'static str]) -> Vec<Line<'static>> {
    lines.iter().map(|l| Line::from(*l)).collect()
}

/// The scrolled world: banner, cards, NPC and player.
struct WorldView<'a> {
    scene: &'a Scene,
    cell: Size,
}

impl WorldView<'_> {
    fn to_cell(&self, x: f64, y: f64) -> (i32, i32) {
        let scroll = self.scene.camera().scroll;
        (
            ((x - scroll.x) / self.cell.width).floor() as i32,
            ((y - scroll.y) / self.cell.height).floor() as i32,
        )
    }

    fn pulse_on(&self) -> bool {
        (self.scene.clock().as_millis() / PULSE.as_millis()) % 2 == 0
    }
}

impl Widget for WorldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = Canvas { area, buf };
        let ui = content::ui(self.scene.language());

        let canvas_width = self.scene.canvas().width;
        let (banner_col, banner_row) = self.to_cell(
            canvas_width / 2.0 - ui.banner.chars().count() as f64 * self.cell.width / 2.0,
            TITLE_HEIGHT / 2.0,
        );
        canvas.put(
            banner_col,
            banner_row,
            ui.banner,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        );

        let active = self.scene.interaction().active_card;
        for card in self.scene.cards() {
            self.draw_card(&mut canvas, card, active == Some(card.id), ui);
        }

        if self.scene.npc_visible() {
            let npc = self.scene.npc();
            self.draw_entity(&mut canvas, npc, self.scene.character().other());
            if self.scene.interaction().npc_interactable && self.scene.modal().is_exploring() {
                let (col, row) = self.to_cell(npc.x, npc.y);
                canvas.put(col - 2, row - 1, ui.talk, self.hint_style());
            }
        }
        if self.scene.player_shown() {
            self.draw_entity(&mut canvas, self.scene.player(), self.scene.character());
        }
    }
}

impl WorldView<'_> {
    fn hint_style(&self) -> Style {
        let style = Style::default().fg(COLOR_ACTIVE);
        if self.pulse_on() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }

    fn draw_card(&self, canvas: &mut Canvas<'_>, card: &Card, active: bool, ui: &UiStrings) {
        let (c0, r0) = self.to_cell(card.rect.x, card.rect.y);
        let (c1, r1) = self.to_cell(card.rect.right(), card.rect.bottom());
        let (w, h) = (c1 - c0, r1 - r0);
        if w < 4 || h < 3 {
            return;
        }
        let color = if active { COLOR_ACTIVE } else { Color::White };
        let style = Style::default().fg(color);
        let inner = (w - 2) as usize;

        canvas.put(c0, r0, &format!("┌{}┐", "─".repeat(inner)), style);
        for row in r0 + 1..r1 - 1 {
            canvas.put(c0, row, &format!("│{}│", " ".repeat(inner)), style);
        }
        canvas.put(c0, r1 - 1, &format!("└{}┘", "─".repeat(inner)), style);

        let text_width = inner.saturating_sub(2);
        canvas.put(
            c0 + 2,
            r0 + 1,
            &clip(card.title, text_width),
            style.add_modifier(Modifier::BOLD),
        );
        if self.scene.visited().contains(&card.id) {
            canvas.put(c1 - 3, r0 + 1, "✓", Style::default().fg(Color::Green));
        }
        for (i, line) in card.lines.iter().enumerate() {
            let row = r0 + 3 + i as i32;
            if row >= r1 - 2 {
                break;
            }
            canvas.put(c0 + 2, row, &clip(line, text_width), Style::default().fg(Color::Gray));
        }
        if active && self.scene.modal().is_exploring() {
            canvas.put(c0 + 2, r1 - 2, &clip(ui.read_details, text_width), self.hint_style());
        }
    }

    fn draw_entity(&self, canvas: &mut Canvas<'_>, entity: &Entity, character: Character) {
        let (col, row) = self.to_cell(entity.x, entity.y);
        let color = match character {
            Character::Frisk => Color::LightBlue,
            Character::Sans => Color::White,
        };
        for (i, line) in sprite(character, entity.facing, entity.frame).iter().enumerate() {
            canvas.put(col, row + i as i32, line, Style::default().fg(color));
        }
    }
}

fn sprite(character: Character, facing: Facing, frame: u32) -> [&'static str; 3] {
    match character {
        Character::Frisk => {
            let head = match facing {
                Facing::Up => " ^^ ",
                Facing::Down => " oo ",
                Facing::Left => "<o  ",
                Facing::Right => "  o>",
            };
            [head, "/##\\", " || "]
        }
        Character::Sans => {
            let head = match facing {
                Facing::Up => " ## ",
                Facing::Down => " OO ",
                Facing::Left => "<O  ",
                Facing::Right => "  O>",
            };
            let arms = if frame % 2 == 1 {
                "-@@-"
            } else {
                match facing {
                    Facing::Left => "<@@/",
                    Facing::Right => "\\@@>",
                    Facing::Up | Facing::Down => "\\@@/",
                }
            };
            let legs = if frame < 2 { " /\\ " } else { " || " };
            [head, arms, legs]
        }
    }
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Clipped writer over a buffer region, addressed in area-relative cells.
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn put(&mut self, col: i32, row: i32, text: &str, style: Style) {
        if row < 0 || row >= i32::from(self.area.height) {
            return;
        }
        let width = i32::from(self.area.width);
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i32;
            if c < 0 || c >= width {
                continue;
            }
            let x = self.area.x + c as u16;
            let y = self.area.y + row as u16;
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}
