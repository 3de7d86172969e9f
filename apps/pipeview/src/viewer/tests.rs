use super::startup::default_registry_path;
use super::startup::resolver_choice_from;
use super::types::ConnectedView;
use super::types::ResolverChoice;
use super::types::STATUS_EMPTY_INPUT;
use super::types::STATUS_IDLE;
use super::types::ViewerApp;
use pv_core::PipeResolver;
use pv_core::Resolution;

struct FixedResolver {
    resolution: Resolution,
}

impl PipeResolver for FixedResolver {
    fn resolve(&self, _input: &str) -> Resolution {
        self.resolution.clone()
    }

    fn source_hint(&self) -> String {
        "/home/user/.pipeview/registry.json".to_owned()
    }
}

fn app_with(resolution: Resolution) -> ViewerApp {
    ViewerApp::new(Box::new(FixedResolver { resolution }))
}

fn args(values: &[&str]) -> impl Iterator<Item = String> {
    values
        .iter()
        .map(|value| (*value).to_owned())
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn resolver_defaults_to_registry() {
    assert_eq!(resolver_choice_from(args(&[])), Ok(ResolverChoice::Registry));
}

#[test]
fn resolver_flag_selects_each_strategy() {
    assert_eq!(
        resolver_choice_from(args(&["--resolver", "registry"])),
        Ok(ResolverChoice::Registry)
    );
    assert_eq!(
        resolver_choice_from(args(&["--resolver", "pipe-uri"])),
        Ok(ResolverChoice::PipeUri)
    );
}

#[test]
fn resolver_flag_ignores_unrelated_arguments() {
    assert_eq!(
        resolver_choice_from(args(&["--verbose", "--resolver", "pipe-uri"])),
        Ok(ResolverChoice::PipeUri)
    );
}

#[test]
fn unknown_resolver_name_is_a_startup_error() {
    let parsed = resolver_choice_from(args(&["--resolver", "dns"]));
    assert!(parsed.is_err());
}

#[test]
fn dangling_resolver_flag_is_a_startup_error() {
    let parsed = resolver_choice_from(args(&["--resolver"]));
    assert!(parsed.is_err());
}

#[test]
fn registry_path_lives_in_the_user_dotfile_directory() {
    let path = default_registry_path();
    assert!(path.ends_with(".pipeview/registry.json"));
}

#[test]
fn app_starts_idle_and_disconnected() {
    let app = app_with(Resolution::NotFound);
    assert_eq!(app.status_line, STATUS_IDLE);
    assert!(app.connected.is_none());
}

#[test]
fn empty_input_asks_for_a_pipe_string() {
    let mut app = app_with(Resolution::NotFound);
    app.pipe_input = "   ".to_owned();
    app.connect();

    assert_eq!(app.status_line, STATUS_EMPTY_INPUT);
    assert!(app.connected.is_none());
}

#[test]
fn unknown_pipe_points_at_the_registry_source() {
    let mut app = app_with(Resolution::NotFound);
    app.pipe_input = "ghost".to_owned();
    app.connect();

    assert_eq!(
        app.status_line,
        "Unknown pipe string. Update /home/user/.pipeview/registry.json"
    );
    assert!(app.connected.is_none());
}

#[test]
fn resolved_pipe_connects_the_viewport() {
    let mut app = app_with(Resolution::Resolved {
        url: "http://localhost:5001".to_owned(),
    });
    app.pipe_input = "  alpha ".to_owned();
    app.connect();

    assert_eq!(app.status_line, "Loading http://localhost:5001");
    assert_eq!(
        app.connected,
        Some(ConnectedView {
            url: "http://localhost:5001".to_owned(),
            pipe_string: "alpha".to_owned(),
            via_fallback: false,
        })
    );
}

#[test]
fn invalid_pipe_uri_connects_to_the_fallback_with_a_distinct_status() {
    let mut app = app_with(Resolution::Fallback {
        url: "http://localhost:8000/".to_owned(),
    });
    app.pipe_input = "gibberish".to_owned();
    app.connect();

    assert_eq!(
        app.status_line,
        "Invalid pipe URI, showing http://localhost:8000/"
    );
    assert_eq!(
        app.connected,
        Some(ConnectedView {
            url: "http://localhost:8000/".to_owned(),
            pipe_string: "gibberish".to_owned(),
            via_fallback: true,
        })
    );
}

#[test]
fn a_failed_submit_keeps_the_previous_connection() {
    let mut app = app_with(Resolution::Resolved {
        url: "http://localhost:5001".to_owned(),
    });
    app.pipe_input = "alpha".to_owned();
    app.connect();

    app.resolver = Box::new(FixedResolver {
        resolution: Resolution::NotFound,
    });
    app.pipe_input = "ghost".to_owned();
    app.connect();

    assert!(app.status_line.starts_with("Unknown pipe string."));
    let connected = app.connected.as_ref();
    assert!(connected.is_some_and(|view| view.url == "http://localhost:5001"));
}
