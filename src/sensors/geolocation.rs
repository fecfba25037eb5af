// SPDX-License-Identifier: GPL-3.0-or-later
// src/sensors/geolocation.rs
//
// One-shot geolocation fix from a local gpsd instance.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::domain::Location;

/// Enables gpsd's JSON report stream on the control socket.
const WATCH_COMMAND: &str = "?WATCH={\"enable\":true,\"json\":true};\r\n";

/// Minimum gpsd fix mode that carries a usable position (2 = 2D fix).
const MIN_FIX_MODE: u8 = 2;

/// Subset of a gpsd report line. Everything except class is optional:
/// VERSION/WATCH/SKY reports share the stream with TPV.
#[derive(Debug, Deserialize)]
struct Report {
    class: String,
    #[serde(default)]
    mode: Option<u8>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Extract a position from one gpsd report line, if it is a TPV report
/// with at least a 2D fix and both coordinates present.
fn parse_report(line: &str) -> Option<Location> {
    let report: Report = serde_json::from_str(line).ok()?;
    if report.class != "TPV" || report.mode? < MIN_FIX_MODE {
        return None;
    }
    Some(Location::new(report.lat?, report.lon?))
}

/// Query gpsd once and resolve to the first usable position.
///
/// Connects to `endpoint`, enables watch mode and reads reports until
/// a TPV with a fix arrives or `wait` elapses. The caller treats any
/// error as "no location": the readout simply stays hidden.
pub async fn current_position(endpoint: &str, wait: Duration) -> Result<Location> {
    timeout(wait, fetch_fix(endpoint))
        .await
        .context("timed out waiting for a gpsd fix")?
}

async fn fetch_fix(endpoint: &str) -> Result<Location> {
    let stream = TcpStream::connect(endpoint)
        .await
        .with_context(|| format!("connecting to gpsd at {endpoint}"))?;

    let (reader, mut writer) = stream.into_split();
    writer
        .write_all(WATCH_COMMAND.as_bytes())
        .await
        .context("enabling gpsd watch mode")?;

    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await.context("reading gpsd report")? {
        log::trace!("gpsd: {line}");
        if let Some(location) = parse_report(&line) {
            return Ok(location);
        }
    }

    anyhow::bail!("gpsd closed the connection before a fix arrived")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tpv_with_3d_fix_yields_a_location() {
        let line = r#"{"class":"TPV","device":"/dev/ttyACM0","mode":3,"time":"2025-03-17T10:12:44.000Z","lat":48.208174,"lon":16.373819,"alt":171.2,"speed":0.03}"#;
        assert_eq!(
            parse_report(line),
            Some(Location::new(48.208174, 16.373819))
        );
    }

    #[test]
    fn tpv_without_fix_is_skipped() {
        let line = r#"{"class":"TPV","device":"/dev/ttyACM0","mode":1}"#;
        assert_eq!(parse_report(line), None);
    }

    #[test]
    fn tpv_missing_coordinates_is_skipped() {
        // mode 2 but the receiver has not reported lon yet.
        let line = r#"{"class":"TPV","mode":2,"lat":48.2}"#;
        assert_eq!(parse_report(line), None);
    }

    #[test]
    fn non_tpv_reports_are_skipped() {
        let version = r#"{"class":"VERSION","release":"3.25","proto_major":3,"proto_minor":14}"#;
        let sky = r#"{"class":"SKY","nSat":11,"uSat":8}"#;
        assert_eq!(parse_report(version), None);
        assert_eq!(parse_report(sky), None);
    }

    #[test]
    fn garbage_lines_are_skipped() {
        assert_eq!(parse_report("not json"), None);
        assert_eq!(parse_report(""), None);
    }
}
