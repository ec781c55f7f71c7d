//! Screen geometry shared by the renderer and mouse hit-testing.
//!
//! Every clickable element on the check-in screen gets its rect from
//! [`CheckinLayout::new`], so what is drawn and what reacts to a click
//! cannot drift apart.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

const KEY_WIDTH: u16 = 7;
const KEY_GAP: u16 = 2;
/// A keypad row followed by one blank row.
const ROW_STRIDE: u16 = 2;
const ARROW_WIDTH: u16 = 5;
const ARROW_HEIGHT: u16 = 3;

/// Something on the check-in screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinTarget {
    Digit(char),
    Clear,
    Backspace,
    Submit,
    PrevSlide,
    NextSlide,
    Consent,
}

use CheckinTarget::{Backspace, Clear, Digit};

const KEYPAD: [[(&str, CheckinTarget); 3]; 4] = [
    [("1", Digit('1')), ("2", Digit('2')), ("3", Digit('3'))],
    [("4", Digit('4')), ("5", Digit('5')), ("6", Digit('6'))],
    [("7", Digit('7')), ("8", Digit('8')), ("9", Digit('9'))],
    [("CLR", Clear), ("0", Digit('0')), ("⌫", Backspace)],
];

/// One keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub target: CheckinTarget,
    pub area: Rect,
}

/// Rects of the check-in screen for a given terminal area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinLayout {
    /// Left half: branding, promotion carousel and consent.
    pub promotions: Rect,
    pub header: Rect,
    pub card: Rect,
    pub prev_slide: Rect,
    pub next_slide: Rect,
    pub dots: Rect,
    pub consent: Rect,
    /// Right half: number display, keypad and button.
    pub phone_entry: Rect,
    pub heading: Rect,
    pub number: Rect,
    pub keys: Vec<Key>,
    pub button: Rect,
}

impl CheckinLayout {
    pub fn new(area: Rect) -> Self {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let (promotions, phone_entry) = (halves[0], halves[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(1),
                Constraint::Length(5),
            ])
            .split(promotions);

        let carousel = left[1];
        let card = centered(carousel, 60, 5);
        let arrow_y = card.y + card.height.saturating_sub(ARROW_HEIGHT) / 2;
        let prev_slide = Rect::new(
            card.x.saturating_sub(ARROW_WIDTH + 1),
            arrow_y,
            ARROW_WIDTH,
            ARROW_HEIGHT,
        )
        .intersection(carousel);
        let next_slide = Rect::new(card.right() + 1, arrow_y, ARROW_WIDTH, ARROW_HEIGHT).intersection(carousel);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(phone_entry);

        Self {
            promotions,
            header: left[0],
            card,
            prev_slide,
            next_slide,
            dots: left[2],
            consent: left[3],
            phone_entry,
            heading: right[0],
            number: right[1],
            keys: keypad(right[2]),
            button: right[3],
        }
    }

    /// What a click at (`column`, `row`) lands on, if anything.
    pub fn target_at(&self, column: u16, row: u16) -> Option<CheckinTarget> {
        let position = Position::new(column, row);
        if let Some(key) = self.keys.iter().find(|key| key.area.contains(position)) {
            return Some(key.target);
        }
        [
            (self.button, CheckinTarget::Submit),
            (self.prev_slide, CheckinTarget::PrevSlide),
            (self.next_slide, CheckinTarget::NextSlide),
            (self.consent, CheckinTarget::Consent),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, target)| target)
    }
}

/// Lays the keypad out as a centered grid inside `area`, clipped to it.
fn keypad(area: Rect) -> Vec<Key> {
    let grid_width = 3 * KEY_WIDTH + 2 * KEY_GAP;
    let left = area.x + area.width.saturating_sub(grid_width) / 2;

    KEYPAD
        .iter()
        .zip(0u16..)
        .flat_map(|(row, r)| {
            row.iter().zip(0u16..).map(move |(&(label, target), c)| Key {
                label,
                target,
                area: Rect::new(
                    left + c * (KEY_WIDTH + KEY_GAP),
                    area.y + r * ROW_STRIDE,
                    KEY_WIDTH,
                    1,
                )
                .intersection(area),
            })
        })
        .collect()
}

/// A `width`% wide, `height` rows tall rect centered in `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = (u32::from(area.width) * u32::from(width) / 100) as u16;
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CheckinLayout {
        CheckinLayout::new(Rect::new(0, 0, 120, 40))
    }

    fn key(layout: &CheckinLayout, target: CheckinTarget) -> Key {
        *layout.keys.iter().find(|key| key.target == target).unwrap()
    }

    #[test]
    fn test_keypad_has_twelve_distinct_keys() {
        let layout = layout();
        assert_eq!(layout.keys.len(), 12);
        for (i, a) in layout.keys.iter().enumerate() {
            assert_eq!(a.area.width, KEY_WIDTH);
            for b in &layout.keys[i + 1..] {
                assert!(!a.area.intersects(b.area), "{} overlaps {}", a.label, b.label);
            }
        }
    }

    #[test]
    fn test_keypad_inside_phone_entry() {
        let layout = layout();
        for key in &layout.keys {
            assert_eq!(layout.phone_entry.intersection(key.area), key.area);
        }
    }

    #[test]
    fn test_target_at_key_cells() {
        let layout = layout();
        let five = key(&layout, Digit('5'));
        assert_eq!(layout.target_at(five.area.x, five.area.y), Some(Digit('5')));
        assert_eq!(
            layout.target_at(five.area.right() - 1, five.area.y),
            Some(Digit('5'))
        );
        // The gap between keys and the blank row below them are inert.
        assert_eq!(layout.target_at(five.area.right(), five.area.y), None);
        assert_eq!(layout.target_at(five.area.x, five.area.y + 1), None);
    }

    #[test]
    fn test_target_at_controls() {
        let layout = layout();
        assert_eq!(
            layout.target_at(layout.button.x + 1, layout.button.y + 1),
            Some(CheckinTarget::Submit)
        );
        assert_eq!(
            layout.target_at(layout.prev_slide.x, layout.prev_slide.y),
            Some(CheckinTarget::PrevSlide)
        );
        assert_eq!(
            layout.target_at(layout.next_slide.x, layout.next_slide.y),
            Some(CheckinTarget::NextSlide)
        );
        assert_eq!(
            layout.target_at(layout.consent.x, layout.consent.y),
            Some(CheckinTarget::Consent)
        );
        assert_eq!(layout.target_at(layout.header.x, layout.header.y), None);
        assert_eq!(layout.target_at(layout.card.x + 1, layout.card.y + 1), None);
    }

    #[test]
    fn test_arrows_flank_card() {
        let layout = layout();
        assert!(layout.prev_slide.right() <= layout.card.x);
        assert!(layout.next_slide.x >= layout.card.right());
        assert_eq!(layout.prev_slide.width, ARROW_WIDTH);
        assert_eq!(layout.next_slide.width, ARROW_WIDTH);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let layout = CheckinLayout::new(Rect::new(0, 0, 10, 4));
        assert_eq!(layout.keys.len(), 12);
        assert_eq!(layout.target_at(200, 200), None);
    }
}
