//! Legacy line-oriented format.
//!
//! ```text
//! 3
//! Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
//! Stop Marushkino: 55.595884, 37.209755
//! Bus 750: Tolstopaltsevo - Marushkino
//! 2
//! Bus 750
//! Stop Marushkino
//! ```
//!
//! A count line, that many definitions, a count line, that many queries.
//! `A > B > A` is a round trip; `A - B` is there-and-back.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use tc_core::{Coordinates, TcError};

use crate::requests::{BaseRequest, StatRequest};
use crate::response::StatResponse;
use crate::system::TransitSystem;
use crate::{IoError, IoResult};

/// A `Bus NAME` or `Stop NAME` query line.
#[derive(Debug, Clone, PartialEq)]
pub enum TextQuery {
    Bus(String),
    Stop(String),
}

impl TextQuery {
    fn to_request(&self, id: i64) -> StatRequest {
        match self {
            TextQuery::Bus(name) => StatRequest::Bus { id, name: name.clone() },
            TextQuery::Stop(name) => StatRequest::Stop { id, name: name.clone() },
        }
    }

    /// Render the answer as one output line.
    pub fn render(&self, response: &StatResponse) -> String {
        match (self, response) {
            (
                TextQuery::Bus(name),
                StatResponse::Bus { stop_count, unique_stop_count, route_length, curvature, .. },
            ) => format!(
                "Bus {name}: {stop_count} stops on route, {unique_stop_count} unique stops, \
                 {} route length, {} curvature",
                significant(*route_length),
                significant(*curvature),
            ),
            (TextQuery::Bus(name), _) => format!("Bus {name}: not found"),
            (TextQuery::Stop(name), StatResponse::Stop { buses, .. }) if buses.is_empty() => {
                format!("Stop {name}: no buses")
            }
            (TextQuery::Stop(name), StatResponse::Stop { buses, .. }) => {
                format!("Stop {name}: buses {}", buses.join(" "))
            }
            (TextQuery::Stop(name), _) => format!("Stop {name}: not found"),
        }
    }
}

/// Read definitions and queries from `reader`, writing one answer line per
/// query.  Returns the number of queries answered.
pub fn process_text<R: BufRead, W: Write>(reader: R, mut writer: W) -> IoResult<usize> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

    let base_count = read_count(&mut lines)?;
    let mut base = Vec::with_capacity(base_count);
    for _ in 0..base_count {
        let (line_no, line) = next_line(&mut lines)?;
        base.push(parse_base_line(line_no, &line)?);
    }

    let mut system = TransitSystem::build(&base, None)?;

    let query_count = read_count(&mut lines)?;
    for i in 0..query_count {
        let (line_no, line) = next_line(&mut lines)?;
        let query = parse_query(line_no, &line)?;
        let response = system.answer(&query.to_request(i as i64));
        writeln!(writer, "{}", query.render(&response))?;
    }
    Ok(query_count)
}

/// Parse one `Stop ...:` or `Bus ...:` definition line.
pub fn parse_base_line(line_no: usize, line: &str) -> IoResult<BaseRequest> {
    let (head, description) = line
        .split_once(':')
        .ok_or_else(|| parse_error(line_no, format!("missing ':' in {line:?}")))?;
    let (command, name) = head
        .trim()
        .split_once(' ')
        .ok_or_else(|| parse_error(line_no, format!("missing name in {head:?}")))?;
    let name = name.trim().to_owned();

    match command {
        "Stop" => parse_stop(line_no, name, description),
        "Bus" => Ok(parse_bus(name, description)),
        other => Err(parse_error(line_no, format!("unknown command {other:?}"))),
    }
}

/// Parse a `Bus NAME` / `Stop NAME` query line.
pub fn parse_query(line_no: usize, line: &str) -> IoResult<TextQuery> {
    match line.trim().split_once(' ') {
        Some(("Bus", name)) => Ok(TextQuery::Bus(name.trim().to_owned())),
        Some(("Stop", name)) => Ok(TextQuery::Stop(name.trim().to_owned())),
        _ => Err(parse_error(line_no, format!("unrecognized query {line:?}"))),
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_stop(line_no: usize, name: String, description: &str) -> IoResult<BaseRequest> {
    // Coordinates end at the second comma; road distances follow.
    let (coords, rest) = match description.match_indices(',').nth(1) {
        Some((i, _)) => (&description[..i], &description[i + 1..]),
        None => (description, ""),
    };
    let coordinates: Coordinates = coords
        .parse()
        .map_err(|e: TcError| parse_error(line_no, e.to_string()))?;

    let mut road_distances = BTreeMap::new();
    for item in rest.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (meters, to) = item
            .split_once("m to ")
            .ok_or_else(|| parse_error(line_no, format!("expected \"Dm to STOP\", got {item:?}")))?;
        let meters = meters
            .trim()
            .parse::<u32>()
            .map_err(|e| parse_error(line_no, format!("invalid distance {meters:?}: {e}")))?;
        road_distances.insert(to.trim().to_owned(), meters);
    }

    Ok(BaseRequest::Stop {
        name,
        latitude: coordinates.lat,
        longitude: coordinates.lng,
        road_distances,
    })
}

fn parse_bus(name: String, description: &str) -> BaseRequest {
    let is_roundtrip = description.contains('>');
    let delim = if is_roundtrip { '>' } else { '-' };
    let stops = description
        .split(delim)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    BaseRequest::Bus { name, stops, is_roundtrip }
}

fn read_count<I>(lines: &mut I) -> IoResult<usize>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    let (line_no, line) = next_line(lines)?;
    line.trim()
        .parse()
        .map_err(|e| parse_error(line_no, format!("invalid count {line:?}: {e}")))
}

fn next_line<I>(lines: &mut I) -> IoResult<(usize, String)>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    match lines.next() {
        Some((line_no, line)) => Ok((line_no, line?)),
        None => Err(parse_error(0, "unexpected end of input".to_owned())),
    }
}

fn parse_error(line: usize, message: String) -> IoError {
    IoError::Parse { line, message }
}

/// Format `x` like C's `%g`: six significant digits, trailing zeros dropped,
/// scientific notation for very large or small magnitudes.
pub(crate) fn significant(x: f64) -> String {
    const DIGITS: i32 = 6;

    if x == 0.0 || !x.is_finite() {
        return x.to_string();
    }
    let sci = format!("{:.*e}", (DIGITS - 1) as usize, x);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (DIGITS - 1 - exp) as usize;
        trim_zeros(&format!("{x:.decimals$}")).to_owned()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
