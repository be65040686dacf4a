//! TUI table for the virtual poker client.
//!
//! Draws the oval table with six seats, the board, a moderator summary of
//! every hand and a history log, and reads table commands from an input
//! line. Everything runs on one thread: each key press is handled to
//! completion before the next one is read.

use anyhow::Result;
use chrono::{DateTime, Utc};
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect},
    style::{Color, Style, Stylize},
    symbols::{Marker, scrollbar},
    text::{Line, Span, Text},
    widgets::{
        Block, Clear, List, ListDirection, ListItem, Padding, Paragraph, Scrollbar,
        ScrollbarOrientation, block,
        canvas::{Canvas, Circle},
    },
};
use virtual_poker::{
    CardFace, Color as CardColor, QrContent, QrRenderer, Role, SeatPosition, SeatView,
    TableSession,
};

use crate::{
    commands::{TableCommand, parse_command},
    logging,
};

mod widgets;

use widgets::{ScrollableList, UserInput};

const HELP: &str = "\
deal
        Deal a new hand from a freshly shuffled deck.
humans <count>
        Set how many of the six seats are human (1-6) and deal again.
        Anything out of range is clamped; anything unreadable means 1.
qr
        Show or hide the share link for this table with its QR code.
help
        Show this menu. Tab does the same.
quit
        Leave the table. Esc does the same.
";
const MAX_LOG_RECORDS: usize = 1024;
const SEAT_WIDTH: u16 = 20;
const SEAT_HEIGHT: u16 = 4;
const CARD_BACK: &str = "▒▒▒";

fn make_card_span(face: &CardFace) -> Span<'static> {
    match face {
        CardFace::Up(card) => {
            let repr = format!("{:>3}", card.to_string());
            match card.color() {
                CardColor::Red => Span::styled(repr, Style::default().light_red().bold()),
                CardColor::Black => Span::styled(repr, Style::default().white().bold()),
            }
        }
        CardFace::Down { dimmed: false } => Span::styled(CARD_BACK, Style::default().light_blue()),
        CardFace::Down { dimmed: true } => {
            Span::styled(CARD_BACK, Style::default().light_blue().dim())
        }
    }
}

fn make_cards_line(faces: &[CardFace]) -> Line<'static> {
    let mut spans = Vec::with_capacity(faces.len() * 2);
    for (idx, face) in faces.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(make_card_span(face));
    }
    Line::from(spans)
}

/// Place a seat block inside `area` from its percentage anchor, shifted by
/// its translate offsets and kept within the area.
fn seat_area(area: Rect, position: &SeatPosition) -> Rect {
    let width = SEAT_WIDTH.min(area.width);
    let height = SEAT_HEIGHT.min(area.height);

    let anchor_x = i32::from(area.x) + i32::from(area.width) * i32::from(position.left) / 100;
    let anchor_y = i32::from(area.y) + i32::from(area.height) * i32::from(position.top) / 100;
    let x = anchor_x + i32::from(width) * i32::from(position.translate_x) / 100;
    let y = anchor_y + i32::from(height) * i32::from(position.translate_y) / 100;

    let x = x.clamp(i32::from(area.x), i32::from(area.right() - width));
    let y = y.clamp(i32::from(area.y), i32::from(area.bottom() - height));
    Rect::new(x as u16, y as u16, width, height)
}

#[derive(Clone)]
enum RecordKind {
    Alert,
    Error,
    Table,
    You,
}

/// A timestamped terminal message with an importance label to help
/// direct user attention.
#[derive(Clone)]
struct Record {
    datetime: DateTime<Utc>,
    kind: RecordKind,
    content: String,
}

impl Record {
    fn new(kind: RecordKind, content: String) -> Self {
        Self {
            datetime: Utc::now(),
            kind,
            content,
        }
    }
}

impl From<Record> for ListItem<'_> {
    fn from(val: Record) -> Self {
        let repr = match val.kind {
            RecordKind::Alert => "ALERT".light_magenta(),
            RecordKind::Error => "ERROR".light_red(),
            RecordKind::Table => "TABLE".light_yellow(),
            RecordKind::You => "YOU".light_green(),
        };

        let msg = vec![
            format!("[{} ", val.datetime.format("%H:%M:%S")).into(),
            Span::styled(format!("{repr:5}"), repr.style),
            format!("]: {}", val.content).into(),
        ];

        ListItem::new(Line::from(msg))
    }
}

/// TUI App state
pub struct TuiApp {
    table: TableSession,
    /// Draws the QR code, when one was compiled in
    qr: Option<Box<dyn QrRenderer>>,
    /// Whether to display the help menu window
    show_help_menu: bool,
    /// Helps scroll through the help menu window if the terminal is small
    help_handle: ScrollableList,
    /// History of recorded messages
    log_handle: ScrollableList,
    /// Current value of the input box
    user_input: UserInput,
}

impl TuiApp {
    pub fn new(table: TableSession, qr: Option<Box<dyn QrRenderer>>) -> Self {
        // Fill help menu with help text lines
        let mut help_handle = ScrollableList::new(MAX_LOG_RECORDS);
        help_handle.push("".into());
        for line in HELP.lines() {
            help_handle.push(line.to_string().into());
        }
        help_handle.push("".into());
        help_handle.jump_to_first();

        let mut app = Self {
            table,
            qr,
            show_help_menu: false,
            help_handle,
            log_handle: ScrollableList::new(MAX_LOG_RECORDS),
            user_input: UserInput::new(),
        };
        let opened = format!(
            "Table {} open with {} human seat(s)",
            app.table.table_id(),
            app.table.human_input()
        );
        app.add_log(RecordKind::Table, opened);
        app
    }

    pub fn table(&self) -> &TableSession {
        &self.table
    }

    /// Add log message
    fn add_log(&mut self, kind: RecordKind, content: String) {
        let record = Record::new(kind, content);
        self.log_handle.push(record.into());
    }

    /// Handle a submitted input line. Returns `false` once the user asks to
    /// leave.
    pub fn handle_command(&mut self, user_input: &str) -> Result<bool> {
        let command = match parse_command(user_input) {
            Ok(command) => command,
            Err(e) => {
                logging::log_command(user_input, false);
                self.add_log(RecordKind::Error, e.to_string());
                return Ok(true);
            }
        };
        logging::log_command(user_input, true);
        self.add_log(RecordKind::You, user_input.trim().to_string());

        match command {
            TableCommand::Help => self.show_help_menu = !self.show_help_menu,
            TableCommand::Quit => return Ok(false),
            TableCommand::Deal | TableCommand::Humans(_) | TableCommand::Qr => {
                if let Some(event) = command.to_event() {
                    self.table.handle(event, self.qr.as_deref())?;
                }
                self.record_outcome(&command);
            }
        }
        Ok(true)
    }

    fn record_outcome(&mut self, command: &TableCommand) {
        match command {
            TableCommand::Deal | TableCommand::Humans(_) => {
                let dealt = format!(
                    "Dealt a new hand with {} human seat(s)",
                    self.table.human_input()
                );
                self.add_log(RecordKind::Table, dealt);
            }
            TableCommand::Qr if self.table.qr_visible() => {
                let share = format!("Share link: {}", self.table.share_url());
                self.add_log(RecordKind::Table, share);
                if let Some(QrContent::Unavailable(notice)) =
                    self.table.qr_panel().map(|panel| panel.content.clone())
                {
                    self.add_log(RecordKind::Alert, notice);
                }
            }
            _ => {}
        }
    }

    /// Handle a key press. Returns `false` once the user asks to leave.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<bool> {
        match modifiers {
            KeyModifiers::CONTROL => match code {
                KeyCode::Home => self.log_handle.jump_to_first(),
                KeyCode::End => self.log_handle.jump_to_last(),
                _ => {}
            },
            KeyModifiers::NONE | KeyModifiers::SHIFT => match code {
                KeyCode::Enter => {
                    let user_input = self.user_input.submit();
                    return self.handle_command(&user_input);
                }
                KeyCode::Char(to_insert) => self.user_input.input(to_insert),
                KeyCode::Backspace => self.user_input.backspace(),
                KeyCode::Delete => self.user_input.delete(),
                KeyCode::Left => self.user_input.move_left(),
                KeyCode::Right => self.user_input.move_right(),
                KeyCode::Up => {
                    if self.show_help_menu {
                        self.help_handle.move_up();
                    } else {
                        self.log_handle.move_up();
                    }
                }
                KeyCode::Down => {
                    if self.show_help_menu {
                        self.help_handle.move_down();
                    } else {
                        self.log_handle.move_down();
                    }
                }
                KeyCode::Home => self.user_input.jump_to_first(),
                KeyCode::End => self.user_input.jump_to_last(),
                KeyCode::Tab => self.show_help_menu = !self.show_help_menu,
                KeyCode::Esc => return Ok(false),
                _ => {}
            },
            _ => {}
        }
        Ok(true)
    }

    /// Render a single seat block
    fn draw_seat(&self, frame: &mut Frame, area: Rect, seat: &SeatView) {
        let border_style = match seat.role {
            Role::Human => Style::default().light_green(),
            Role::Bot => Style::default().dark_gray(),
        };
        let seat_block = Block::bordered()
            .border_style(border_style)
            .title(format!(" {} ", seat.name).bold())
            .title_bottom(Line::from(format!(" {} ", seat.caption)).right_aligned());
        let cards = Paragraph::new(make_cards_line(&seat.cards))
            .alignment(Alignment::Center)
            .block(seat_block);
        frame.render_widget(Clear, area);
        frame.render_widget(cards, area);
    }

    /// Render the oval table, its seats and the board
    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::bordered().title(format!(" table {}  ", self.table.table_id()));
        let felt_area = outer.inner(area);
        frame.render_widget(outer, area);

        let felt = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-100.0, 100.0])
            .y_bounds([-100.0, 100.0])
            .paint(|ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 72.0,
                    color: Color::Green,
                });
            });
        frame.render_widget(felt, felt_area);

        let regions = self.table.regions();
        let [board_area] = Layout::horizontal([Constraint::Length(25)])
            .flex(Flex::Center)
            .areas(felt_area);
        let [board_area] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(board_area);
        let board = Paragraph::new(make_cards_line(&regions.community))
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" board "));
        frame.render_widget(Clear, board_area);
        frame.render_widget(board, board_area);

        for seat in &regions.seats {
            self.draw_seat(frame, seat_area(felt_area, &seat.position), seat);
        }
    }

    /// Render the moderator summary of every hand, bots included
    fn draw_summary(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<ListItem> = self
            .table
            .regions()
            .summary
            .iter()
            .map(|line| ListItem::new(line.clone()))
            .collect();
        let summary = List::new(lines).block(
            Block::bordered()
                .padding(Padding::horizontal(1))
                .title(" hand summary  "),
        );
        frame.render_widget(summary, area);
    }

    /// Render the log/history window with scrollbar
    fn draw_log(&mut self, frame: &mut Frame, area: Rect) {
        let log_records = self.log_handle.list_items.clone();
        let log_records = List::new(log_records)
            .direction(ListDirection::BottomToTop)
            .block(block::Block::bordered().title(" history  "));
        frame.render_stateful_widget(log_records, area, &mut self.log_handle.list_state);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .begin_symbol(None)
                .end_symbol(None),
            area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.log_handle.scroll_state,
        );
    }

    /// Render the user input area
    fn draw_user_input(&self, frame: &mut Frame, area: Rect) {
        let user_input = Paragraph::new(self.user_input.value.as_str())
            .style(Style::default())
            .block(
                block::Block::bordered().title(
                    format!(" humans: {}  ", self.table.human_input()).light_green(),
                ),
            );
        frame.render_widget(user_input, area);
        frame.set_cursor_position(Position::new(
            area.x + self.user_input.char_idx as u16 + 1,
            area.y + 1,
        ));
    }

    /// Render the help/status bar at the bottom
    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let help_message = vec![
            "type ".into(),
            "deal".bold().white(),
            ", ".into(),
            "humans <n>".bold().white(),
            " or ".into(),
            "qr".bold().white(),
            " | press ".into(),
            "Tab".bold().white(),
            " for help, ".into(),
            "Esc".bold().white(),
            " to exit".into(),
        ];
        frame.render_widget(Paragraph::new(Line::from(help_message)), area);
    }

    /// Render the share link overlay
    fn draw_qr_panel(&self, frame: &mut Frame) {
        let Some(panel) = self.table.qr_panel() else {
            return;
        };

        let mut text = match &panel.content {
            QrContent::Code(code) => Text::from(code.as_str()),
            QrContent::Unavailable(notice) => Text::from(notice.as_str().light_red()),
        };
        text.push_line(Line::default());
        text.push_line(Line::from(panel.url.as_str().underlined()));

        let width = (text.width() as u16).saturating_add(4);
        let height = (text.height() as u16).saturating_add(2);
        let vertical = Layout::vertical([Constraint::Max(height)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Max(width)]).flex(Flex::Center);
        let [qr_area] = vertical.areas(frame.area());
        let [qr_area] = horizontal.areas(qr_area);

        frame.render_widget(Clear, qr_area);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::bordered()
                    .padding(Padding::horizontal(1))
                    .title(" share table  "),
            ),
            qr_area,
        );
    }

    /// Render the help menu overlay
    fn draw_help_menu(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Max(17)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Max(80)]).flex(Flex::Center);
        let [help_menu_area] = vertical.areas(frame.area());
        let [help_menu_area] = horizontal.areas(help_menu_area);
        frame.render_widget(Clear, help_menu_area);

        let help_items = self.help_handle.list_items.clone();
        let help_items = List::new(help_items)
            .direction(ListDirection::BottomToTop)
            .block(block::Block::bordered().title(" commands  "));
        frame.render_stateful_widget(
            help_items,
            help_menu_area,
            &mut self.help_handle.list_state,
        );

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .begin_symbol(None)
                .end_symbol(None),
            help_menu_area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.help_handle.scroll_state,
        );
    }

    /// Main draw function - orchestrates rendering of all UI components
    pub fn draw(&mut self, frame: &mut Frame) {
        let window = Layout::vertical([
            Constraint::Min(12),   // Table + side panels
            Constraint::Length(3), // User input area
            Constraint::Length(1), // Help bar
        ]);
        let [top_area, user_input_area, help_area] = window.areas(frame.area());

        let [table_area, side_area] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(top_area);
        let [summary_area, log_area] =
            Layout::vertical([Constraint::Length(9), Constraint::Min(3)]).areas(side_area);

        self.draw_table(frame, table_area);
        self.draw_summary(frame, summary_area);
        self.draw_log(frame, log_area);
        self.draw_user_input(frame, user_input_area);
        self.draw_help_bar(frame, help_area);

        if self.table.qr_visible() {
            self.draw_qr_panel(frame);
        }
        if self.show_help_menu {
            self.draw_help_menu(frame);
        }
    }

    /// Run the TUI application until the user leaves
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event::read()?
                && kind == KeyEventKind::Press
                && !self.handle_key(code, modifiers)?
            {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};
    use virtual_poker::{PageLocation, SEAT_POSITIONS};

    fn app(humans: &str) -> TuiApp {
        let table =
            TableSession::with_rng(PageLocation::default(), humans, StdRng::seed_from_u64(3))
                .expect("full deck");
        TuiApp::new(table, None)
    }

    fn screen(app: &mut TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).expect("test backend");
        terminal.draw(|frame| app.draw(frame)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn type_line(app: &mut TuiApp, line: &str) -> bool {
        for c in line.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE)
                .expect("typing never fails");
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE)
            .expect("command handled")
    }

    #[test]
    fn test_seat_area_stays_inside() {
        let area = Rect::new(2, 3, 90, 30);
        for position in &SEAT_POSITIONS {
            let seat = seat_area(area, position);
            assert!(seat.x >= area.x && seat.right() <= area.right());
            assert!(seat.y >= area.y && seat.bottom() <= area.bottom());
            assert_eq!(seat.width, SEAT_WIDTH);
        }

        let tiny = Rect::new(0, 0, 10, 2);
        let seat = seat_area(tiny, &SEAT_POSITIONS[0]);
        assert_eq!((seat.width, seat.height), (10, 2));
    }

    #[test]
    fn test_draws_every_seat_and_summary() {
        let mut app = app("3");
        let text = screen(&mut app);
        for name in ["You 1", "You 2", "You 3", "Nova", "Maverick", "Jinx"] {
            assert!(text.contains(name), "missing seat {name}");
        }
        assert!(text.contains("Board: "));
        assert!(text.contains("Stack: $1200"));
        assert!(text.contains("Bot ready"));
    }

    #[test]
    fn test_humans_command_redeals_and_echoes() {
        let mut app = app("1");
        assert!(type_line(&mut app, "humans 9"));
        assert_eq!(app.table().human_input(), "6");
        assert!(app.table().hand().players.iter().all(|p| p.role == Role::Human));
    }

    #[test]
    fn test_qr_without_renderer_shows_notice() {
        let mut app = app("1");
        assert!(type_line(&mut app, "qr"));
        assert!(app.table().qr_visible());
        let text = screen(&mut app);
        assert!(text.contains("QR generator not available."));
        assert!(text.contains("?table="));
    }

    #[test]
    fn test_bad_command_keeps_running() {
        let mut app = app("2");
        let before = app.table().hand().community.clone();
        assert!(type_line(&mut app, "raise 100"));
        assert_eq!(app.table().hand().community, before);
    }

    #[test]
    fn test_quit_and_escape() {
        let mut app = app("1");
        assert!(!type_line(&mut app, "quit"));
        assert!(
            !app.handle_key(KeyCode::Esc, KeyModifiers::NONE)
                .expect("escape handled")
        );
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app("1");
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE).expect("tab");
        assert!(screen(&mut app).contains("commands"));
        assert!(type_line(&mut app, "help"));
        assert!(!app.show_help_menu);
    }
}
