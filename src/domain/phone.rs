//! Phone number entry buffer.
//!
//! The keypad feeds this buffer one digit at a time. The buffer never holds
//! more than [`PHONE_DIGITS`] digits and never holds anything but ASCII digits.

/// Number of digits in a complete phone number.
pub const PHONE_DIGITS: usize = 10;

/// Digits typed so far on the check-in keypad.
///
/// # Examples
///
/// ```
/// use kiosk_checkin::domain::PhoneNumber;
///
/// let mut phone = PhoneNumber::default();
/// for digit in "5551234567".chars() {
///     phone.append(digit);
/// }
/// assert!(phone.is_complete());
/// assert_eq!(phone.format(), "555-123-4567");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// Appends a digit. Returns `false` when the buffer is full or `digit`
    /// is not an ASCII decimal digit, in which case nothing changes.
    pub fn append(&mut self, digit: char) -> bool {
        if self.digits.len() >= PHONE_DIGITS || !digit.is_ascii_digit() {
            return false;
        }
        self.digits.push(digit);
        true
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Removes the last digit, if any.
    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    /// Groups the digits as `XXX-XXX-XXXX`, showing only the groups typed so far.
    pub fn format(&self) -> String {
        let phone = self.digits.as_str();
        match phone.len() {
            0..=3 => phone.to_string(),
            4..=6 => format!("{}-{}", &phone[..3], &phone[3..]),
            _ => format!("{}-{}-{}", &phone[..3], &phone[3..6], &phone[6..]),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.digits.len() == PHONE_DIGITS
    }

    pub fn digits_remaining(&self) -> usize {
        PHONE_DIGITS - self.digits.len()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}
