use crate::record::ParseFailure;
use chrono::{DateTime, Utc};

/// `10/Oct/2023:13:55:36 +0000`
const CLF_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Text between the first `[` and the first `]` of the line.
fn bracketed(line: &str) -> Option<&str> {
    let open = line.find('[')?;
    let close = line.find(']')?;
    line.get(open + 1..close)
}

pub(crate) fn parse_timestamp(line: &str) -> Result<DateTime<Utc>, ParseFailure> {
    let raw = bracketed(line).ok_or(ParseFailure::MissingTimestamp)?;

    DateTime::parse_from_str(raw, CLF_TIME_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ParseFailure::InvalidTimestamp {
            value: raw.to_string(),
        })
}
