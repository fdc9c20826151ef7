//! End-to-end behaviour on a rendered sign-up page.

use form_enhance::report::IconState;
use form_enhance::toggle::Mode;
use form_enhance::validate::FieldState;
use form_enhance::{enhance, Markers, NodeId, Page, PageReport, SubmitOutcome};

const SIGNUP: &str = r#"<!DOCTYPE html>
<html>
<head><title>Create account</title></head>
<body>
  <form id="signup" method="post" action="/accounts/signup/" data-validate novalidate>
    <input type="hidden" name="csrfmiddlewaretoken" value="abc123">
    <div class="mb-3" id="g-email">
      <label for="email">Email</label>
      <input id="email" type="email" name="email" class="form-control" required>
    </div>
    <div class="mb-3" id="g-pass">
      <label for="password1">Password</label>
      <div class="input-group password-toggle-wrapper">
        <input id="password1" type="password" name="password1" class="form-control" required>
        <button class="btn btn-outline-secondary" type="button" id="toggle1" data-password-toggle>
          <i id="icon1" class="bi bi-eye-slash"></i>
        </button>
      </div>
    </div>
    <div class="mb-3" id="g-confirm">
      <label for="password2">Confirm password</label>
      <div class="input-group password-toggle-wrapper">
        <input id="password2" type="password" name="password2" class="form-control" required>
        <button class="btn btn-outline-secondary" type="button" id="toggle2" data-password-toggle>
          <i id="icon2" class="bi bi-eye-slash"></i>
        </button>
      </div>
    </div>
    <div class="password-toggle-wrapper" id="broken-no-control">
      <input type="password" name="legacy">
    </div>
    <div class="password-toggle-wrapper" id="broken-no-input">
      <button type="button" data-password-toggle>?</button>
    </div>
    <button type="submit" id="go">Sign up</button>
  </form>
</body>
</html>"#;

fn page() -> Page {
    let mut page = Page::loading(SIGNUP);
    enhance(&mut page, Markers::default()).unwrap();
    page.finish_parsing();
    page
}

fn node(page: &Page, id: &str) -> NodeId {
    page.document().by_id(id).unwrap()
}

fn attr(page: &Page, id: &str, name: &str) -> Option<String> {
    page.document()
        .element(node(page, id))
        .unwrap()
        .attr(name)
        .map(String::from)
}

fn invalid(page: &Page, group: &str) -> bool {
    page.document()
        .element(node(page, group))
        .unwrap()
        .has_class("was-validated")
}

fn toggle_snapshot(page: &Page, n: u8) -> (Option<String>, Option<String>, Option<String>) {
    (
        attr(page, &format!("password{n}"), "type"),
        attr(page, &format!("toggle{n}"), "aria-label"),
        attr(page, &format!("icon{n}"), "class"),
    )
}

#[test]
fn test_bindings_after_ready() {
    let page = page();
    let bindings = page.bindings().copied().unwrap();
    assert_eq!(bindings.toggle_pairs, 2);
    assert_eq!(bindings.skipped_wrappers, 2);
    assert_eq!(bindings.forms, 1);
    assert_eq!(bindings.blur_fields, 3);
}

#[test]
fn test_toggle_scenario() {
    let mut page = page();
    assert_eq!(attr(&page, "password1", "type").as_deref(), Some("password"));
    assert_eq!(attr(&page, "toggle1", "aria-label").as_deref(), Some("Show password"));

    let toggle = node(&page, "toggle1");
    page.click(toggle).unwrap();
    assert_eq!(attr(&page, "password1", "type").as_deref(), Some("text"));
    assert_eq!(attr(&page, "toggle1", "aria-label").as_deref(), Some("Hide password"));
    let icon = page.document().element(node(&page, "icon1")).unwrap();
    assert!(icon.has_class("bi-eye"));
    assert!(!icon.has_class("bi-eye-slash"));

    page.click(toggle).unwrap();
    assert_eq!(attr(&page, "password1", "type").as_deref(), Some("password"));
    assert_eq!(attr(&page, "toggle1", "aria-label").as_deref(), Some("Show password"));
    let icon = page.document().element(node(&page, "icon1")).unwrap();
    assert!(!icon.has_class("bi-eye"));
    assert!(icon.has_class("bi-eye-slash"));
}

#[test]
fn test_two_activations_restore_original_state() {
    let mut page = page();
    let before = toggle_snapshot(&page, 2);
    let toggle = node(&page, "toggle2");
    page.click(toggle).unwrap();
    assert_ne!(toggle_snapshot(&page, 2), before);
    page.click(toggle).unwrap();
    assert_eq!(toggle_snapshot(&page, 2), before);
}

#[test]
fn test_pairs_are_independent_and_broken_wrappers_harmless() {
    let mut page = page();
    let untouched = toggle_snapshot(&page, 2);

    page.click(node(&page, "toggle1")).unwrap();
    assert_eq!(toggle_snapshot(&page, 2), untouched);

    // Clicks on incomplete wrappers do nothing and raise nothing.
    let no_control = node(&page, "broken-no-control");
    let no_input = node(&page, "broken-no-input");
    page.click(no_control).unwrap();
    page.click(no_input).unwrap();
    let report = PageReport::capture(&page, &Markers::default());
    let legacy = report
        .toggles
        .iter()
        .find(|t| t.wrapper == "div#broken-no-control")
        .unwrap();
    assert!(!legacy.is_complete());
    assert_eq!(report.toggles[0].mode, Some(Mode::Visible));
    assert_eq!(report.toggles[1].mode, Some(Mode::Hidden));
}

#[test]
fn test_submit_with_all_fields_filled() {
    let mut page = page();
    for (id, value) in [
        ("email", "ada@example.com"),
        ("password1", "correct horse"),
        ("password2", "correct horse"),
    ] {
        page.fill(node(&page, id), value).unwrap();
    }
    let outcome = page.submit(node(&page, "go")).unwrap();
    assert_eq!(outcome, SubmitOutcome::Submitted);

    let report = PageReport::capture(&page, &Markers::default());
    assert_eq!(report.invalid_fields().count(), 0);
}

#[test]
fn test_submit_marks_exactly_the_blank_fields() {
    let mut page = page();
    page.fill(node(&page, "email"), "ada@example.com").unwrap();
    page.fill(node(&page, "password2"), " \t ").unwrap();

    let outcome = page.submit(node(&page, "signup")).unwrap();
    assert_eq!(outcome, SubmitOutcome::Blocked);
    assert!(!invalid(&page, "g-email"));
    assert!(invalid(&page, "g-pass"));
    assert!(invalid(&page, "g-confirm"));
}

#[test]
fn test_blur_feedback_is_per_field() {
    let mut page = page();
    let email = node(&page, "email");
    page.fill(node(&page, "password1"), "secret").unwrap();

    page.blur(email).unwrap();
    assert!(invalid(&page, "g-email"));
    assert!(!invalid(&page, "g-pass"));

    page.fill(email, "ada@example.com").unwrap();
    page.blur(email).unwrap();
    assert!(!invalid(&page, "g-email"));
}

#[test]
fn test_correction_scenario() {
    let mut page = page();
    page.fill(node(&page, "password1"), "secret").unwrap();
    page.fill(node(&page, "password2"), "secret").unwrap();
    let form = node(&page, "signup");

    // Email blank: first attempt is blocked.
    assert_eq!(page.submit(form).unwrap(), SubmitOutcome::Blocked);
    assert!(invalid(&page, "g-email"));

    // Clear both password fields, then fix only one and blur it.
    page.fill(node(&page, "password1"), "").unwrap();
    page.fill(node(&page, "password2"), "").unwrap();
    assert_eq!(page.submit(form).unwrap(), SubmitOutcome::Blocked);
    assert!(invalid(&page, "g-pass"));
    assert!(invalid(&page, "g-confirm"));

    let password1 = node(&page, "password1");
    page.fill(password1, "secret").unwrap();
    page.blur(password1).unwrap();
    assert!(!invalid(&page, "g-pass"));
    assert!(invalid(&page, "g-confirm"));

    assert_eq!(page.submit(form).unwrap(), SubmitOutcome::Blocked);
    assert!(invalid(&page, "g-confirm"));

    let report = PageReport::capture(&page, &Markers::default());
    let states: Vec<(String, Option<FieldState>)> = report
        .fields
        .iter()
        .map(|f| (f.field.clone(), f.state))
        .collect();
    assert_eq!(
        states,
        vec![
            ("input#email".to_string(), Some(FieldState::Invalid)),
            ("input#password1".to_string(), Some(FieldState::Valid)),
            ("input#password2".to_string(), Some(FieldState::Invalid)),
        ]
    );
}

#[test]
fn test_report_tracks_icon_state() {
    let mut page = page();
    page.click(node(&page, "icon2")).unwrap();
    let report = PageReport::capture(&page, &Markers::default());
    let icons: Vec<Option<IconState>> = report.toggles.iter().map(|t| t.icon).collect();
    assert_eq!(
        icons,
        vec![Some(IconState::Slashed), Some(IconState::Open), None, None]
    );
}

#[test]
fn test_deeply_nested_form_is_enhanced() {
    let depth = 20_000;
    let html = format!(
        r#"<form id="deep" data-validate>{}<div class="mb-3" id="g-deep"><input id="name" required></div>{}</form>"#,
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );
    let mut page = Page::parse(&html);
    enhance(&mut page, Markers::default()).unwrap();
    assert_eq!(page.bindings().unwrap().blur_fields, 1);

    let form = node(&page, "deep");
    assert_eq!(page.submit(form).unwrap(), SubmitOutcome::Blocked);
    assert!(invalid(&page, "g-deep"));
}
