use super::layout::{centered, CheckinLayout};
use crate::application::{App, CheckinView, FlowController, RevealStage, ScreenView};
use crate::domain::PROMOTIONS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const BRAND: &str = "PERDIGI CHECKIN";
pub const BRAND_PHONE: &str = "(800) 652-8234";
pub const PHONE_PLACEHOLDER: &str = "Enter your number";

const ACCENT: Color = Color::Rgb(240, 81, 34);
const GOLD: Color = Color::Rgb(255, 218, 68);

pub fn render_ui(f: &mut Frame, app: &App) {
    let area = f.area();
    match &app.view {
        ScreenView::Welcome => render_welcome(f, area),
        ScreenView::Checkin(view) => render_checkin(f, &app.controller, view, area),
        ScreenView::Success(view) => render_success(f, &app.controller, view.stage(), area),
    }
}

/// Label of the check-in button for the controller's current input.
pub fn checkin_button_label(controller: &FlowController) -> String {
    if controller.is_submitting() {
        "CHECKING IN...".to_string()
    } else if controller.phone().is_complete() {
        "CHECK-IN".to_string()
    } else {
        format!("{} more digits needed", controller.phone().digits_remaining())
    }
}

fn render_welcome(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled("Welcome to", Style::default().fg(Color::White))),
        Line::from(Span::styled(
            BRAND,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Tap anywhere to check in",
            Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
        )),
    ];

    f.render_widget(Block::default().style(Style::default().bg(ACCENT)), area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);
}

fn render_checkin(f: &mut Frame, controller: &FlowController, view: &CheckinView, area: Rect) {
    let layout = CheckinLayout::new(area);
    render_promotions(f, view, &layout);
    render_phone_entry(f, controller, &layout);
}

fn render_promotions(f: &mut Frame, view: &CheckinView, layout: &CheckinLayout) {
    let panel = Block::default().style(Style::default().bg(ACCENT).fg(Color::White));
    f.render_widget(panel, layout.promotions);

    let header = vec![
        Line::from("Welcome to"),
        Line::from(Span::styled(BRAND, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(BRAND_PHONE),
    ];
    f.render_widget(Paragraph::new(header), layout.header);

    let promotion = view.promotion();
    let slide = vec![
        Line::from(Span::styled(
            promotion.title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(promotion.subtitle, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            promotion.highlight,
            Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
        )),
    ];
    let card = Paragraph::new(slide).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::White)),
    );
    f.render_widget(card, layout.card);

    for (arrow, rect) in [("«", layout.prev_slide), ("»", layout.next_slide)] {
        let button = Paragraph::new(arrow)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, rect);
    }

    let dots: String = (0..PROMOTIONS.len())
        .map(|i| if i == view.slide { "━━ " } else { "• " })
        .collect();
    f.render_widget(Paragraph::new(dots).alignment(Alignment::Center), layout.dots);

    let checkbox = if view.agreed { "[x]" } else { "[ ]" };
    let consent = format!(
        "{checkbox} By entering my phone number, I agree to receive {BRAND} notifications via auto text! \
         Unsubscribe anytime and still participate in {BRAND}."
    );
    f.render_widget(Paragraph::new(consent).wrap(Wrap { trim: true }), layout.consent);
}

fn render_phone_entry(f: &mut Frame, controller: &FlowController, layout: &CheckinLayout) {
    let panel = Block::default().style(Style::default().bg(Color::White).fg(Color::Black));
    f.render_widget(panel, layout.phone_entry);

    let heading = vec![
        Line::from(Span::styled(
            "PLEASE ENTER PHONE NUMBER",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your info will not be shared with any third party",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(heading).alignment(Alignment::Center), layout.heading);

    let formatted = controller.phone().format();
    let display = if formatted.is_empty() {
        Span::styled(PHONE_PLACEHOLDER, Style::default().fg(Color::Gray))
    } else {
        Span::styled(formatted, Style::default().add_modifier(Modifier::BOLD))
    };
    let number = Paragraph::new(Line::from(display))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(number, layout.number);

    let key_style = Style::default().fg(ACCENT);
    for key in &layout.keys {
        let label = Paragraph::new(Span::styled(format!("( {:^3} )", key.label), key_style));
        f.render_widget(label, key.area);
    }

    let ready = controller.phone().is_complete() && !controller.is_submitting();
    let button_style = if ready {
        Style::default().bg(ACCENT).fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::LightRed).fg(Color::White)
    };
    let button = Paragraph::new(checkin_button_label(controller))
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, layout.button);
}

fn render_success(f: &mut Frame, controller: &FlowController, stage: RevealStage, area: Rect) {
    f.render_widget(Block::default().style(Style::default().bg(Color::White).fg(Color::Black)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    if stage >= RevealStage::Headline {
        let result = controller.result();
        let greeting = if result.customer_name.is_empty() {
            "Your current points:".to_string()
        } else {
            format!("{}, your current points:", result.customer_name)
        };
        let headline = vec![
            Line::from(Span::styled(
                "You have checked in successfully!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(greeting, Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(Paragraph::new(headline).alignment(Alignment::Center), chunks[1]);
    }

    if stage >= RevealStage::Points {
        let badge = Paragraph::new(Line::from(Span::styled(
            controller.result().reward_points.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().bg(GOLD)));
        f.render_widget(badge, centered(chunks[2], 20, 3));
    }

    if stage >= RevealStage::Finale {
        let stars = Paragraph::new("✦   ★   ✦   ★   ✦")
            .alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT));
        f.render_widget(stars, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CheckinBackend, CheckinOutcome, CheckinResult};
    use async_trait::async_trait;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    struct NamedBackend;

    #[async_trait]
    impl CheckinBackend for NamedBackend {
        async fn checkin(&self, phone: &str) -> CheckinOutcome<CheckinResult> {
            Ok(CheckinResult {
                reward_points: 42,
                customer_name: "Ada".to_string(),
                customer_phone: phone.to_string(),
            })
        }

        async fn create_booking(&self, _phone: &str) -> CheckinOutcome<()> {
            Ok(())
        }
    }

    fn draw_with(render: impl FnOnce(&mut Frame)) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(render).unwrap();
        terminal
    }

    fn text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &App) -> String {
        text(&draw_with(|f| render_ui(f, app)))
    }

    fn app() -> App {
        App::new(Arc::new(NamedBackend), Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_welcome_screen() {
        let screen = draw(&app());
        assert!(screen.contains(BRAND));
        assert!(screen.contains("Tap anywhere to check in"));
    }

    #[tokio::test]
    async fn test_checkin_screen_placeholder_and_label() {
        let mut app = app();
        app.tap();
        let screen = draw(&app);
        assert!(screen.contains(PHONE_PLACEHOLDER));
        assert!(screen.contains("10 more digits needed"));
        assert!(screen.contains("10% OFF"));
        assert!(screen.contains("[x]"));
    }

    #[tokio::test]
    async fn test_checkin_screen_formats_number() {
        let mut app = app();
        app.tap();
        for digit in "5551234567".chars() {
            app.controller.press_digit(digit);
        }
        let screen = draw(&app);
        assert!(screen.contains("555-123-4567"));
        assert!(screen.contains("CHECK-IN"));
        assert!(!screen.contains("more digits needed"));
    }

    #[tokio::test]
    async fn test_button_label_while_submitting() {
        let mut app = app();
        app.tap();
        for digit in "5551234567".chars() {
            app.controller.press_digit(digit);
        }
        app.submit();
        assert_eq!(checkin_button_label(&app.controller), "CHECKING IN...");
    }

    #[tokio::test]
    async fn test_success_screen_reveals_points() {
        let mut app = app();
        app.tap();
        for digit in "5551234567".chars() {
            app.controller.press_digit(digit);
        }
        app.submit();
        timeout(Duration::from_secs(2), app.advance()).await.unwrap();

        let screen = text(&draw_with(|f| {
            let area = f.area();
            render_success(f, &app.controller, RevealStage::Finale, area)
        }));
        assert!(screen.contains("You have checked in successfully!"));
        assert!(screen.contains("Ada, your current points:"));
        assert!(screen.contains("42"));
    }

    #[tokio::test]
    async fn test_success_screen_starts_blank() {
        let mut app = app();
        app.tap();
        for digit in "5551234567".chars() {
            app.controller.press_digit(digit);
        }
        app.submit();
        timeout(Duration::from_secs(2), app.advance()).await.unwrap();

        let screen = draw(&app);
        assert!(!screen.contains("checked in successfully"));
    }

    #[tokio::test]
    async fn test_success_screen_headline_before_points() {
        let mut app = app();
        app.tap();
        for digit in "5551234567".chars() {
            app.controller.press_digit(digit);
        }
        app.submit();
        timeout(Duration::from_secs(2), app.advance()).await.unwrap();

        let screen = text(&draw_with(|f| {
            let area = f.area();
            render_success(f, &app.controller, RevealStage::Headline, area)
        }));
        assert!(screen.contains("Ada, your current points:"));
        assert!(!screen.contains("42"));
    }

    #[tokio::test]
    async fn test_keys_drawn_where_clicks_land() {
        let mut app = app();
        app.tap();
        let terminal = draw_with(|f| render_ui(f, &app));
        let buffer = terminal.backend().buffer();
        let layout = CheckinLayout::new(buffer.area);

        for key in &layout.keys {
            let row: String = (key.area.x..key.area.right())
                .map(|x| buffer[(x, key.area.y)].symbol())
                .collect();
            assert_eq!(row, format!("( {:^3} )", key.label));
        }
        assert_eq!(buffer[(layout.prev_slide.x + 2, layout.prev_slide.y + 1)].symbol(), "«");
        assert_eq!(buffer[(layout.next_slide.x + 2, layout.next_slide.y + 1)].symbol(), "»");
    }
}
