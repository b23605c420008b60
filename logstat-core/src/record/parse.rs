use crate::enrichment::user_agent::classify;
use crate::record::segments::Segments;
use crate::record::timestamp::parse_timestamp;
use crate::record::{HttpMethod, LogRecord, MISSING_FIELD, MISSING_STATUS, ParseFailure};

/// Parse one combined-format line into a [`LogRecord`].
///
/// A bad timestamp, status or size fails the whole line. Missing request,
/// referer and user-agent segments fall back to sentinels instead.
pub fn parse_record(line: &str) -> Result<LogRecord, ParseFailure> {
    let segments = Segments::split(line);

    let client_address = segments
        .prefix
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let timestamp = parse_timestamp(line)?;
    let (method, path) = parse_request(segments.request.unwrap_or_default());
    let (status_code, response_size) = match segments.status_size {
        Some(raw) => parse_status_and_size(raw)?,
        None => (MISSING_STATUS, 0),
    };

    let referer = segments.referer.unwrap_or(MISSING_FIELD).to_string();
    let user_agent_raw = segments.user_agent.unwrap_or(MISSING_FIELD).to_string();
    let (os, browser) = classify(&user_agent_raw);

    Ok(LogRecord {
        client_address,
        timestamp,
        method,
        path,
        status_code,
        response_size,
        referer,
        user_agent_raw,
        os,
        browser,
    })
}

fn parse_request(request: &str) -> (HttpMethod, String) {
    let mut tokens = request.split_whitespace();
    let method = HttpMethod::from_token(tokens.next().unwrap_or_default());
    let path = tokens.next().unwrap_or(MISSING_FIELD).to_string();
    (method, path)
}

fn parse_status_and_size(raw: &str) -> Result<(i32, u64), ParseFailure> {
    let mut tokens = raw.split_whitespace();

    // A present but blank segment is as malformed as a non-numeric one.
    let status_token = tokens.next().unwrap_or_default();
    let status = status_token
        .parse::<i32>()
        .map_err(|_| ParseFailure::InvalidStatus {
            token: status_token.to_string(),
        })?;

    let size = match tokens.next() {
        None | Some(MISSING_FIELD) => 0,
        Some(token) => token
            .parse::<u64>()
            .map_err(|_| ParseFailure::InvalidSize {
                token: token.to_string(),
            })?,
    };

    Ok((status, size))
}
