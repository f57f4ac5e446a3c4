//! Plain-text rendering of enrichment results

use std::fmt::Write;

use domain::EnrichedResult;
use infrastructure::CredentialsConfig;

/// Render an enriched result as a multi-line report
pub fn enrichment_report(result: &EnrichedResult, unit_symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Place: {}", result.place);
    let _ = writeln!(out, "Nearest stop: {}", result.stop.name);
    let _ = writeln!(
        out,
        "Wheelchair accessible: {}",
        if result.stop.wheelchair_accessible { "Yes" } else { "No" }
    );

    if result.events.is_empty() {
        let _ = writeln!(out, "Events: none found");
    } else {
        let _ = writeln!(out, "Events:");
        for event in &result.events {
            if event.has_url() {
                let _ = writeln!(out, "  - {} ({})", event.format_line(), event.url);
            } else {
                let _ = writeln!(out, "  - {}", event.format_line());
            }
        }
    }

    let weather = &result.weather;
    match weather.temperature {
        Some(temp) => {
            let mut line = format!("{temp:.1}{unit_symbol}");
            if let Some(feels) = weather.feels_like {
                let _ = write!(line, ", feels like {feels:.1}{unit_symbol}");
            }
            if !weather.description.is_empty() {
                let _ = write!(line, ", {}", weather.description);
            }
            let _ = writeln!(out, "Weather: {line}");
        },
        None => {
            let _ = writeln!(out, "Weather: unavailable");
        },
    }

    out
}

/// Render which credentials are present, never their values
pub fn credentials_report(credentials: &CredentialsConfig) -> String {
    let mut out = String::new();
    for (name, present) in credentials.presence() {
        let _ = writeln!(out, "  {name}: {}", if present { "set" } else { "missing" });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Event, Stop, Weather};
    use secrecy::SecretString;

    fn wellesley(events: Vec<Event>, weather: Weather) -> EnrichedResult {
        EnrichedResult::new("Wellesley", Stop::new("Wellesley Square", true), events, weather)
    }

    #[test]
    fn full_report() {
        let result = wellesley(
            vec![
                Event::from_parts(
                    Some("Jazz Night".to_string()),
                    Some("2026-11-01".to_string()),
                    Some("Town Hall".to_string()),
                    Some("https://tm.example/e/1".to_string()),
                ),
                Event::from_parts(None, None, None, None),
            ],
            Weather {
                temperature: Some(51.84),
                feels_like: Some(49.1),
                description: "light rain".to_string(),
            },
        );

        let report = enrichment_report(&result, "°F");
        assert_eq!(
            report,
            "Place: Wellesley\n\
             Nearest stop: Wellesley Square\n\
             Wheelchair accessible: Yes\n\
             Events:\n  \
             - Jazz Night on 2026-11-01 at Town Hall (https://tm.example/e/1)\n  \
             - Unknown event on Unknown date at Unknown venue\n\
             Weather: 51.8°F, feels like 49.1°F, light rain\n"
        );
    }

    #[test]
    fn degraded_report() {
        let report = enrichment_report(&wellesley(vec![], Weather::empty()), "°F");
        assert!(report.contains("Events: none found"));
        assert!(report.contains("Weather: unavailable"));
    }

    #[test]
    fn credentials_report_hides_values() {
        let credentials = CredentialsConfig {
            mapbox_token: Some(SecretString::from("pk.very-secret".to_string())),
            ..CredentialsConfig::default()
        };

        let report = credentials_report(&credentials);
        assert!(report.contains("mapbox_token: set"));
        assert!(report.contains("mbta_api_key: missing"));
        assert!(!report.contains("very-secret"));
    }
}
