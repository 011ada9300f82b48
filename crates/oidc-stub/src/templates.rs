//! HTML template for the scenario picker page.

use oidc_stub_core::scenarios::USER_SCENARIOS;

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate the scenario picker page.
///
/// Renders one submit button per canned scenario, carrying the relying
/// party's `state`, `nonce`, and `redirect_uri` through as hidden fields to
/// the authorize endpoint.
pub fn scenario_page(state: &str, nonce: &str, redirect_uri: &str) -> String {
    let buttons = USER_SCENARIOS
        .iter()
        .map(|scenario| {
            format!(
                r#"        <button type="submit" name="scenario" value="{name}" title="{description}">{name}</button>"#,
                name = html_escape(scenario.name),
                description = html_escape(scenario.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>OIDC Stub - Pick a Scenario (DEV ONLY)</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, sans-serif;
            max-width: 400px;
            margin: 100px auto;
            padding: 20px;
        }}
        .warning {{
            background: #fff3cd;
            border: 1px solid #ffc107;
            padding: 15px;
            border-radius: 8px;
            margin-bottom: 20px;
        }}
        .warning h2 {{
            color: #856404;
            margin-top: 0;
        }}
        form {{
            background: #f8f9fa;
            padding: 20px;
            border-radius: 8px;
        }}
        button {{
            display: block;
            width: 100%;
            padding: 12px;
            margin-bottom: 10px;
            background: #007bff;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            font-size: 16px;
        }}
        button:hover {{
            background: #0056b3;
        }}
    </style>
</head>
<body>
    <div class="warning">
        <h2>Test Stub Only</h2>
        <p>This is a <strong>stand-in identity provider</strong>; no real authentication happens here.</p>
        <p>Pick a scenario to simulate that user signing in.</p>
    </div>

    <form action="/authorize" method="POST">
        <input type="hidden" name="state" value="{state}" />
        <input type="hidden" name="nonce" value="{nonce}" />
        <input type="hidden" name="redirect_uri" value="{redirect_uri}" />

{buttons}
    </form>
</body>
</html>"#,
        state = html_escape(state),
        nonce = html_escape(nonce),
        redirect_uri = html_escape(redirect_uri),
        buttons = buttons,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_lists_every_scenario_as_a_button() {
        let page = scenario_page("s1", "n1", "https://rp.example/cb");
        for scenario in USER_SCENARIOS {
            assert!(page.contains(&format!(r#"value="{}""#, scenario.name)));
        }
    }

    #[test]
    fn page_carries_request_values_through_hidden_fields() {
        let page = scenario_page("s1", "n1", "https://rp.example/cb");
        assert!(page.contains(r#"name="state" value="s1""#));
        assert!(page.contains(r#"name="nonce" value="n1""#));
        assert!(page.contains(r#"name="redirect_uri" value="https://rp.example/cb""#));
    }

    #[test]
    fn page_escapes_injected_markup() {
        let page = scenario_page("<script>", "n1", "https://rp.example/cb");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
