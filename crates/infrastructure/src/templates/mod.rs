//! Template engine for the server-rendered pages
//!
//! Uses Tera with embedded HTML templates:
//! - `index.html` home page
//! - `mbta_form.html` place form
//! - `mbta_result.html` enriched result
//! - `error.html` error message
//!
//! All pages extend `base.html`. HTML autoescaping is always on.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let page = engine.render_error("No place provided")?;
//! ```

use domain::EnrichedResult;
use std::collections::HashMap;
use std::sync::Arc;
use tera::{Context, Tera, Value};
use thiserror::Error;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template names
pub mod names {
    /// Home page
    pub const INDEX: &str = "index.html";
    /// Place form
    pub const FORM: &str = "mbta_form.html";
    /// Enriched result
    pub const RESULT: &str = "mbta_result.html";
    /// Error page
    pub const ERROR: &str = "error.html";
}

mod embedded {
    pub const BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}StopScout{% endblock title %}</title>
    <style>
        body { font-family: system-ui, sans-serif; line-height: 1.5; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
        .muted { color: #666; }
        ul.events li { margin-bottom: 0.5rem; }
    </style>
</head>
<body>
    <header><a href="/">StopScout</a></header>
    <main>{% block content %}{% endblock content %}</main>
</body>
</html>
"#;

    pub const INDEX: &str = r#"{% extends "base.html" %}
{% block content %}
<h1>Find the nearest MBTA stop</h1>
<p>Enter a place name to see the closest stop, whether it is wheelchair accessible, nearby events and the current weather.</p>
<p><a href="/mbta">Look up a place</a></p>
{% endblock content %}
"#;

    pub const FORM: &str = r#"{% extends "base.html" %}
{% block title %}Look up a place - StopScout{% endblock title %}
{% block content %}
<h1>Look up a place</h1>
<form action="/mbta" method="post">
    <label for="place_name">Place name</label>
    <input type="text" id="place_name" name="place_name" placeholder="Boston Common" required>
    <button type="submit">Search</button>
</form>
{% endblock content %}
"#;

    pub const RESULT: &str = r#"{% extends "base.html" %}
{% block title %}{{ result.place }} - StopScout{% endblock title %}
{% block content %}
<h1>{{ result.place }}</h1>
<h2>Nearest stop</h2>
<p>{{ result.stop.name }}</p>
<p>Wheelchair accessible: {% if result.stop.wheelchair_accessible %}Yes{% else %}No{% endif %}</p>

<h2>Nearby events</h2>
{% if result.events %}
<ul class="events">
{% for event in result.events %}
    <li>
        {% if event.url %}<a href="{{ event.url }}">{{ event.name }}</a>{% else %}{{ event.name }}{% endif %}
        <span class="muted">{{ event.date }} at {{ event.venue }}</span>
    </li>
{% endfor %}
</ul>
{% else %}
<p class="muted">No events found nearby.</p>
{% endif %}

<h2>Weather</h2>
{% if result.weather.temperature is number %}
<p>{{ result.weather.temperature | degrees }}{{ unit_symbol }}{% if result.weather.feels_like is number %} (feels like {{ result.weather.feels_like | degrees }}{{ unit_symbol }}){% endif %}</p>
{% if result.weather.description %}<p>{{ result.weather.description }}</p>{% endif %}
{% else %}
<p class="muted">Weather unavailable.</p>
{% endif %}

<p><a href="/mbta">Search again</a></p>
{% endblock content %}
"#;

    pub const ERROR: &str = r#"{% extends "base.html" %}
{% block title %}Error - StopScout{% endblock title %}
{% block content %}
<h1>Something went wrong</h1>
<p>{{ message }}</p>
<p><a href="/mbta">Try again</a></p>
{% endblock content %}
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded page templates
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Compile` if an embedded template fails to parse.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("base.html", embedded::BASE),
            (names::INDEX, embedded::INDEX),
            (names::FORM, embedded::FORM),
            (names::RESULT, embedded::RESULT),
            (names::ERROR, embedded::ERROR),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        tera.register_filter("degrees", degrees_filter);

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, context)
            .map_err(TemplateError::from)
    }

    /// Render the home page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_home(&self) -> Result<String, TemplateError> {
        self.render(names::INDEX, &Context::new())
    }

    /// Render the place form
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_form(&self) -> Result<String, TemplateError> {
        self.render(names::FORM, &Context::new())
    }

    /// Render an enriched result
    ///
    /// `unit_symbol` is appended to temperatures, e.g. `°F`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_result(
        &self,
        result: &EnrichedResult,
        unit_symbol: &str,
    ) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("result", result);
        ctx.insert("unit_symbol", unit_symbol);
        self.render(names::RESULT, &ctx)
    }

    /// Render the error page with a user-facing message
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_error(&self, message: &str) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("message", message);
        self.render(names::ERROR, &ctx)
    }
}

/// Custom filter: format a number with one decimal place
fn degrees_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let n = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("degrees requires a number"))?;
    Ok(Value::String(format!("{n:.1}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Event, Stop, Weather};

    fn sample_result() -> EnrichedResult {
        EnrichedResult::new(
            "Wellesley",
            Stop::new("Wellesley Square", true),
            vec![Event::from_parts(
                Some("Jazz Night".to_string()),
                Some("2026-11-01".to_string()),
                Some("Town Hall".to_string()),
                Some("https://tm.example/e/1".to_string()),
            )],
            Weather {
                temperature: Some(52.34),
                feels_like: Some(49.0),
                description: "light rain".to_string(),
            },
        )
    }

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new().unwrap();
        for name in [names::INDEX, names::FORM, names::RESULT, names::ERROR] {
            assert!(engine.tera.get_template(name).is_ok(), "{name} missing");
        }
        assert!(matches!(
            engine.render("nonexistent.html", &Context::new()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_home_links_to_form() {
        let page = TemplateEngine::new().unwrap().render_home().unwrap();
        assert!(page.contains("href=\"/mbta\""));
        assert!(page.contains("<title>StopScout</title>"));
    }

    #[test]
    fn test_form_posts_place_name() {
        let page = TemplateEngine::new().unwrap().render_form().unwrap();
        assert!(page.contains("method=\"post\""));
        assert!(page.contains("name=\"place_name\""));
    }

    #[test]
    fn test_result_rendering() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_result(&sample_result(), "°F").unwrap();

        assert!(page.contains("Wellesley Square"));
        assert!(page.contains("Wheelchair accessible: Yes"));
        // attribute values are HTML-escaped, including '/'
        assert!(page.contains("<a href=\"https:&#x2F;&#x2F;tm.example&#x2F;e&#x2F;1\">Jazz Night</a>"));
        assert!(page.contains("2026-11-01 at Town Hall"));
        assert!(page.contains("52.3°F"));
        assert!(page.contains("feels like 49.0°F"));
        assert!(page.contains("light rain"));
    }

    #[test]
    fn test_result_without_enrichment() {
        let engine = TemplateEngine::new().unwrap();
        let result = EnrichedResult::new(
            "Nowhere",
            Stop::new("Lonely Stop", false),
            vec![],
            Weather::empty(),
        );
        let page = engine.render_result(&result, "°F").unwrap();

        assert!(page.contains("Wheelchair accessible: No"));
        assert!(page.contains("No events found nearby."));
        assert!(page.contains("Weather unavailable."));
    }

    #[test]
    fn test_event_without_url_is_plain_text() {
        let engine = TemplateEngine::new().unwrap();
        let mut result = sample_result();
        result.events = vec![Event::from_parts(None, None, None, None)];
        let page = engine.render_result(&result, "°C").unwrap();

        assert!(page.contains("Unknown event"));
        assert!(page.contains("Unknown date at Unknown venue"));
        assert!(!page.contains("<a href=\"\">"));
    }

    #[test]
    fn test_error_rendering_escapes_html() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_error("<script>alert(1)</script>").unwrap();
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn test_place_is_escaped() {
        let engine = TemplateEngine::new().unwrap();
        let mut result = sample_result();
        result.place = "<b>Wellesley</b>".to_string();
        let page = engine.render_result(&result, "°F").unwrap();
        assert!(page.contains("&lt;b&gt;Wellesley&lt;&#x2F;b&gt;"));
    }

    #[test]
    fn test_degrees_filter() {
        let value = serde_json::json!(21.06);
        let result = degrees_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), "21.1");

        assert!(degrees_filter(&Value::String("warm".into()), &HashMap::new()).is_err());
    }
}
