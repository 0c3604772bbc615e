//! Lamp and lamp-row types of the Berlin Clock (Mengenlehreuhr).
//!
//! The clock face is one seconds lamp on top of four rows:
//!
//! ```text
//!            ( Y )              seconds: on for odd seconds
//!   [R] [R] [R] [R]             five hours
//!   [R] [R] [R] [O]             single hours
//!   [Y][Y][R][Y][Y][R]...[O]    five minutes (every third lamp red)
//!   [Y] [Y] [O] [O]             single minutes
//! ```
//!
//! Rows travel as plain strings over the wire (`"RRRO"`), one character per lamp.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ClockError, ClockResult};

/// A single lamp position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Lamp {
    Red,
    Yellow,
    Off,
}

impl Lamp {
    pub fn as_char(self) -> char {
        match self {
            Lamp::Red => 'R',
            Lamp::Yellow => 'Y',
            Lamp::Off => 'O',
        }
    }

    /// Any colour counts as lit.
    pub fn is_lit(self) -> bool {
        self != Lamp::Off
    }
}

impl TryFrom<char> for Lamp {
    type Error = ClockError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'R' => Ok(Lamp::Red),
            'Y' => Ok(Lamp::Yellow),
            'O' => Ok(Lamp::Off),
            other => Err(ClockError::invalid_format(format!(
                "unknown lamp code '{}'",
                other
            ))),
        }
    }
}

/// The five rows of the clock face, each with a fixed length and alphabet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LampRow {
    Seconds,
    FiveHours,
    SingleHours,
    FiveMinutes,
    SingleMinutes,
}

impl LampRow {
    pub const ALL: [LampRow; 5] = [
        LampRow::Seconds,
        LampRow::FiveHours,
        LampRow::SingleHours,
        LampRow::FiveMinutes,
        LampRow::SingleMinutes,
    ];

    /// Number of lamp positions in the row.
    pub fn lamp_count(self) -> usize {
        match self {
            LampRow::Seconds => 1,
            LampRow::FiveHours | LampRow::SingleHours | LampRow::SingleMinutes => 4,
            LampRow::FiveMinutes => 11,
        }
    }

    /// Whether `lamp` may appear in this row.
    pub fn allows(self, lamp: Lamp) -> bool {
        matches!(
            (self, lamp),
            (_, Lamp::Off)
                | (LampRow::FiveHours | LampRow::SingleHours, Lamp::Red)
                | (LampRow::Seconds | LampRow::SingleMinutes, Lamp::Yellow)
                | (LampRow::FiveMinutes, _)
        )
    }

    /// JSON field name of the row, as used in error messages.
    pub fn field_name(self) -> &'static str {
        match self {
            LampRow::Seconds => "secondsLamp",
            LampRow::FiveHours => "fiveHoursRow",
            LampRow::SingleHours => "singleHoursRow",
            LampRow::FiveMinutes => "fiveMinutesRow",
            LampRow::SingleMinutes => "singleMinutesRow",
        }
    }

    /// Parse `text` as this row, checking length and alphabet.
    pub fn parse(self, text: &str) -> ClockResult<Vec<Lamp>> {
        let count = text.chars().count();
        if count != self.lamp_count() {
            return Err(ClockError::invalid_format(format!(
                "{} must have {} lamps, got {}",
                self.field_name(),
                self.lamp_count(),
                count
            )));
        }

        text.chars()
            .map(|c| {
                let lamp = Lamp::try_from(c).map_err(|_| {
                    ClockError::invalid_format(format!(
                        "{} contains illegal lamp code '{}'",
                        self.field_name(),
                        c
                    ))
                })?;
                if !self.allows(lamp) {
                    return Err(ClockError::invalid_format(format!(
                        "{} does not allow lamp code '{}'",
                        self.field_name(),
                        c
                    )));
                }
                Ok(lamp)
            })
            .collect()
    }
}

/// Full lamp pattern of the clock face.
///
/// Rows are kept as received so that a decode request can carry malformed
/// rows up to the point where they are validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LampState {
    seconds_lamp: String,
    five_hours_row: String,
    single_hours_row: String,
    five_minutes_row: String,
    single_minutes_row: String,
    /// `HH:MM:SS` label of the encoded time, empty when unknown.
    #[serde(rename = "currentTime", default, deserialize_with = "null_as_empty")]
    source_time_label: String,
}

/// Accept `"currentTime": null` the same way as a missing label.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl LampState {
    /// Build a state from five raw row strings, without a time label.
    pub fn from_rows(
        seconds_lamp: impl Into<String>,
        five_hours_row: impl Into<String>,
        single_hours_row: impl Into<String>,
        five_minutes_row: impl Into<String>,
        single_minutes_row: impl Into<String>,
    ) -> Self {
        Self {
            seconds_lamp: seconds_lamp.into(),
            five_hours_row: five_hours_row.into(),
            single_hours_row: single_hours_row.into(),
            five_minutes_row: five_minutes_row.into(),
            single_minutes_row: single_minutes_row.into(),
            source_time_label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.source_time_label = label.into();
        self
    }

    pub fn seconds_lamp(&self) -> &str {
        &self.seconds_lamp
    }

    pub fn five_hours_row(&self) -> &str {
        &self.five_hours_row
    }

    pub fn single_hours_row(&self) -> &str {
        &self.single_hours_row
    }

    pub fn five_minutes_row(&self) -> &str {
        &self.five_minutes_row
    }

    pub fn single_minutes_row(&self) -> &str {
        &self.single_minutes_row
    }

    pub fn source_time_label(&self) -> &str {
        &self.source_time_label
    }

    /// Raw text of the given row.
    pub fn row(&self, row: LampRow) -> &str {
        match row {
            LampRow::Seconds => &self.seconds_lamp,
            LampRow::FiveHours => &self.five_hours_row,
            LampRow::SingleHours => &self.single_hours_row,
            LampRow::FiveMinutes => &self.five_minutes_row,
            LampRow::SingleMinutes => &self.single_minutes_row,
        }
    }

    /// Check every row against its length and alphabet.
    pub fn validate(&self) -> ClockResult<()> {
        for row in LampRow::ALL {
            row.parse(self.row(row))?;
        }
        Ok(())
    }
}
