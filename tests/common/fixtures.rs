//! Test fixtures - page snapshots and spec files.

/// Login page as rendered on a 1280x800 screen. The burger menu is hidden.
pub const LOGIN_PAGE: &str = r##"{
  "title": "Login",
  "screen": { "left": 0, "top": 0, "width": 1280, "height": 800 },
  "elements": {
    "#header": { "area": { "left": 0, "top": 0, "width": 1280, "height": 80 } },
    "#login-form": { "area": { "left": 440, "top": 200, "width": 400, "height": 300 } },
    "#submit": { "area": { "left": 540, "top": 440, "width": 200, "height": 40 } },
    "#burger": { "area": { "left": 1200, "top": 20, "width": 40, "height": 40 }, "visible": false }
  }
}
"##;

/// Login spec: header for every device, form on desktop, burger on mobile
pub const LOGIN_SPEC: &str = r##"
objects:
  header: "#header"
  form: "#login-form"
  submit: "#submit"
  burger: "#burger"
sections:
  - name: Header
    tags: [desktop, mobile]
    rules:
      - object: header
        check:
          inside: { container: screen }
  - name: Login form
    tags: [desktop]
    rules:
      - object: form
        check:
          below: { other: header }
      - object: submit
        check:
          inside: { container: form, margin: { min: 10 } }
  - name: Mobile menu
    tags: [mobile]
    rules:
      - object: burger
        check: visible
"##;

/// Spec whose only section expects a footer the page does not have
pub const FOOTER_SPEC: &str = r##"
objects:
  footer: "#footer"
sections:
  - name: Footer
    rules:
      - object: footer
        check: visible
"##;

/// Spec with a placeholder in a locator
pub const TEMPLATED_SPEC: &str = r##"
objects:
  form: "#${form_id}"
sections:
  - name: Form
    rules:
      - object: form
        check:
          width: { min: 300, max: 500 }
"##;
