//! Conversion between wall-clock time and Berlin Clock lamp patterns.
//!
//! Every function here is pure apart from [`now`], which reads the system
//! clock. Hours and minutes survive a round trip; seconds do not, because the
//! seconds lamp only shows parity. Decoding therefore yields `second` 0 or 1.

use chrono::Local;

use crate::error::{ClockError, ClockResult};
use crate::models::{Lamp, LampRow, LampState, WallTime, MAX_HOUR, MAX_MINUTE};

/// Encode a time as the lamp pattern of the clock face.
pub fn encode(time: WallTime) -> LampState {
    let hour = usize::from(time.hour());
    let minute = usize::from(time.minute());
    let seconds_lamp = if time.second() % 2 == 1 {
        Lamp::Yellow
    } else {
        Lamp::Off
    };

    LampState::from_rows(
        seconds_lamp.as_char().to_string(),
        fill_row(LampRow::FiveHours, hour / 5, |_| Lamp::Red),
        fill_row(LampRow::SingleHours, hour % 5, |_| Lamp::Red),
        fill_row(LampRow::FiveMinutes, minute / 5, quarter_marker),
        fill_row(LampRow::SingleMinutes, minute % 5, |_| Lamp::Yellow),
    )
    .with_label(time.to_string())
}

/// Every third lamp of the five-minutes row marks a quarter hour and is red.
fn quarter_marker(position: usize) -> Lamp {
    if position % 3 == 0 {
        Lamp::Red
    } else {
        Lamp::Yellow
    }
}

/// Light the leftmost `lit` lamps of `row`, coloured by their 1-based position.
fn fill_row(row: LampRow, lit: usize, colour: impl Fn(usize) -> Lamp) -> String {
    (1..=row.lamp_count())
        .map(|position| {
            let lamp = if position <= lit {
                colour(position)
            } else {
                Lamp::Off
            };
            lamp.as_char()
        })
        .collect()
}

/// Decode a lamp pattern back to a time.
///
/// # Errors
/// - [`ClockError::InvalidFormat`] if a row has the wrong length or a lamp
///   outside the row's alphabet.
/// - [`ClockError::OutOfRange`] if the rows add up to more than 23 hours or
///   59 minutes. Such patterns are rejected, never wrapped.
pub fn decode(state: &LampState) -> ClockResult<WallTime> {
    state.validate()?;

    let hours = 5 * count_lit(state.five_hours_row()) + count_lit(state.single_hours_row());
    let minutes =
        5 * count_lit(state.five_minutes_row()) + count_lit(state.single_minutes_row());
    let seconds = u8::from(count_lit(state.seconds_lamp()) == 1);

    if hours > usize::from(MAX_HOUR) {
        log::debug!("rejecting lamp pattern decoding to {} hours", hours);
        return Err(out_of_range("hour", hours, MAX_HOUR));
    }
    if minutes > usize::from(MAX_MINUTE) {
        log::debug!("rejecting lamp pattern decoding to {} minutes", minutes);
        return Err(out_of_range("minute", minutes, MAX_MINUTE));
    }

    // Both bounds were checked above, so the narrowing casts are lossless.
    WallTime::new(hours as u8, minutes as u8, seconds)
}

fn out_of_range(field: &'static str, value: usize, max: u8) -> ClockError {
    ClockError::OutOfRange {
        field,
        value: u32::try_from(value).unwrap_or(u32::MAX),
        max: max.into(),
    }
}

/// Decode five raw row strings, as sent by clients that do not carry a label.
pub fn decode_rows(
    seconds_lamp: &str,
    five_hours_row: &str,
    single_hours_row: &str,
    five_minutes_row: &str,
    single_minutes_row: &str,
) -> ClockResult<WallTime> {
    decode(&LampState::from_rows(
        seconds_lamp,
        five_hours_row,
        single_hours_row,
        five_minutes_row,
        single_minutes_row,
    ))
}

/// Number of lamps in `row` that are not off, whatever their colour.
///
/// Unknown codes count as lit; [`decode`] rejects them before counting.
pub fn count_lit(row: &str) -> usize {
    row.chars()
        .filter(|&c| Lamp::try_from(c).map_or(true, Lamp::is_lit))
        .count()
}

/// Parse strict `HH:MM:SS` text (24-hour, zero-padded, two digits per field).
///
/// # Errors
/// Returns [`ClockError::InvalidFormat`] for anything else, including
/// out-of-range fields such as `25:00:00`, surrounding whitespace and
/// trailing characters.
pub fn parse_time_string(text: &str) -> ClockResult<WallTime> {
    let invalid = || {
        ClockError::invalid_format(format!("expected HH:MM:SS, got '{}'", text))
    };

    let bytes = text.as_bytes();
    if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
        return Err(invalid());
    }

    let field = |start: usize| -> ClockResult<u8> {
        let (tens, ones) = (bytes[start], bytes[start + 1]);
        if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
            return Err(invalid());
        }
        Ok((tens - b'0') * 10 + (ones - b'0'))
    };

    let (hour, minute, second) = (field(0)?, field(3)?, field(6)?);
    WallTime::new(hour, minute, second).map_err(|_| invalid())
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> WallTime {
    WallTime::from(Local::now().time())
}
