use web_sys::{HtmlElement, UrlSearchParams};

use folio_core::{PageRules, RuleError, RULE_KEYS};

/// Builds the page rules from defaults, then `data-*` attributes on
/// `<body>`, then the query string. Later sources win.
pub(crate) fn load_page_rules() -> PageRules {
    let mut rules = PageRules::default();
    let Some(window) = web_sys::window() else {
        return rules;
    };
    let document = window.document();
    let mut pairs = Vec::new();
    if let Some(body) = document.as_ref().and_then(|document| document.body()) {
        pairs.extend(body_overrides(&body));
    }
    if let Ok(search) = window.location().search() {
        pairs.extend(parse_query_overrides(&search));
    }
    let errors = rules.apply_overrides(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    report_rule_errors(&errors);
    rules
}

fn body_overrides(body: &HtmlElement) -> Vec<(&'static str, String)> {
    RULE_KEYS
        .iter()
        .filter_map(|key| {
            let attr = format!("data-{}", key.replace('_', "-"));
            body.get_attribute(&attr).map(|value| (*key, value))
        })
        .collect()
}

fn parse_query_overrides(search: &str) -> Vec<(&'static str, String)> {
    let search = search.trim();
    if search.is_empty() {
        return Vec::new();
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return Vec::new();
    };
    RULE_KEYS
        .iter()
        .filter_map(|key| {
            params
                .get(key)
                .or_else(|| params.get(&key.replace('_', "-")))
                .map(|value| (*key, value))
        })
        .collect()
}

fn report_rule_errors(errors: &[RuleError]) {
    for err in errors {
        gloo::console::warn!(format!("config: ignored setting ({err})"));
    }
}
