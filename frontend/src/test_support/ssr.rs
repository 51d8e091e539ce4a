use leptos::*;

/// Runs `f` inside a fresh reactive runtime, disposed afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Re-enables resource loading when dropped, also on a failed assertion.
struct SuppressedLoads;

impl SuppressedLoads {
    fn start() -> Self {
        leptos_reactive::suppress_resource_load(true);
        SuppressedLoads
    }
}

impl Drop for SuppressedLoads {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

/// Renders a view to HTML without firing any of its fetches. Tests preset
/// the signals a panel reads instead.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _loads = SuppressedLoads::start();
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// `text` as it appears in rendered markup. Text nodes escape `/` too, so
/// `N/A` renders as `N&#x2F;A`.
pub fn escaped(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_matches_rendered_text_nodes() {
        assert_eq!(escaped("N/A"), "N&#x2F;A");
        let cell = String::from("N/A");
        let html = render_to_string(move || view! { <span>{cell}</span> });
        assert!(html.contains(&escaped("N/A")));
    }
}
