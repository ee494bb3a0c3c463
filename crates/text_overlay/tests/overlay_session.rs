//! End-to-end overlay session against a headless window

use std::rc::Rc;

use approx::assert_relative_eq;
use text_overlay::foundation::logging;
use text_overlay::prelude::*;

const SESSION_TOML: &str = r#"
banner = "Registration failed"
corners = ["frame 1", "30 fps", "left camera", "tracking ok"]

[window]
width = 1000
height = 500

[[labels]]
text = "tip"
x = 250
y = 125

[[labels]]
text = "target"
x = 900.0
y = 400.0
"#;

struct Session {
    window: Rc<HeadlessWindow>,
    labels: Vec<SharedText>,
    banner: CentredBanner,
    corners: CornerAnnotation,
}

fn start_session() -> Session {
    logging::init_for_tests();
    let config = OverlayConfig::from_str_with_format(SESSION_TOML, ConfigFormat::Toml).unwrap();

    let window = Rc::new(HeadlessWindow::from_config(&config.window));
    let handle: Rc<dyn RenderWindow> = window.clone();

    let labels = config
        .labels
        .iter()
        .map(|label| {
            let actor = TextProperties::default();
            let text = OverlayText::new(&label.text, label.x, label.y, config.style, actor)
                .unwrap()
                .into_shared();
            OverlayText::attach_to_window(&text, &handle).unwrap();
            text
        })
        .collect();

    let banner = CentredBanner::from_config(&config, &handle, TextProperties::default())
        .unwrap()
        .unwrap();

    let mut corners = CornerAnnotation::default();
    corners.set_text_from_config(&config).unwrap();

    Session {
        window,
        labels,
        banner,
        corners,
    }
}

#[test]
fn test_session_follows_resizes() {
    let session = start_session();
    assert_eq!(session.window.observer_count(), 3);

    session.window.set_size(2000, 250);

    let tip = session.labels[0].borrow().position();
    assert_relative_eq!(tip.x, 500.0);
    assert_relative_eq!(tip.y, 62.5);

    let target = session.labels[1].borrow().position();
    assert_relative_eq!(target.x, 1800.0);
    assert_relative_eq!(target.y, 200.0);

    assert_eq!(session.banner.position(), Vec2::new(666.0, 83.0));
}

#[test]
fn test_fractions_survive_many_resizes() {
    let session = start_session();
    for (w, h) in [(10, 10), (4000, 3000), (999, 1), (1000, 500)] {
        session.window.set_size(w, h);
    }
    session.window.modified();

    let tip = session.labels[0].borrow();
    assert_relative_eq!(tip.position().x, 250.0, epsilon = 1e-9);
    assert_relative_eq!(tip.position().y, 125.0, epsilon = 1e-9);
    let relative = tip.relative_position().unwrap();
    assert_relative_eq!(relative.x_relative, 0.25);
    assert_relative_eq!(relative.y_relative, 0.25);
}

#[test]
fn test_corner_text_applied() {
    let session = start_session();
    assert_eq!(session.corners.actor().text(Corner::LowerLeft), "frame 1");
    assert_eq!(session.corners.actor().text(Corner::UpperRight), "tracking ok");
}

#[test]
fn test_dropping_labels_releases_observers() {
    let Session { window, labels, banner, .. } = start_session();
    drop(labels);
    assert_eq!(window.observer_count(), 1);
    drop(banner);
    assert_eq!(window.observer_count(), 0);
    window.set_size(1, 1);
}

#[test]
fn test_error_latch_polled_after_render_pass() {
    let session = start_session();
    let observer = ErrorObserver::new();
    let mut callback = observer.callback();

    // A render pass that reports two errors before the caller polls
    session.window.set_size(640, 480);
    callback("ErrorEvent", "a");
    callback("ErrorEvent", "b");

    assert!(observer.error_occurred());
    assert_eq!(observer.error_message().as_deref(), Some("b"));
    assert!(!observer.error_occurred());
    assert_eq!(observer.latch().event_count(), 2);
}
