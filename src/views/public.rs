use axum::response::Html;
use std::fmt::Write;

use super::{escape, escape_attr, layout, public_nav};
use crate::constants::{SERVICES, SITE_NAME};

pub fn home() -> Html<String> {
    let mut body = format!(
        "<h1>Welcome to {}</h1>\n<p>We help small businesses get online and grow.</p>\n<ul>\n",
        escape(SITE_NAME)
    );
    for (_, label, _) in SERVICES {
        let _ = writeln!(body, "<li>{}</li>", escape(label));
    }
    body.push_str("</ul>\n<p><a href=\"/contact\">Get in touch</a></p>");

    layout("Home", public_nav(), &body)
}

pub fn services() -> Html<String> {
    let mut body = String::from("<h1>Our services</h1>\n");
    for (slug, label, description) in SERVICES {
        let _ = writeln!(
            body,
            "<section id=\"{}\"><h2>{}</h2><p>{}</p></section>",
            escape_attr(slug),
            escape(label),
            escape(description)
        );
    }
    body.push_str("<p><a href=\"/contact\">Request a quote</a></p>");

    layout("Services", public_nav(), &body)
}

pub fn contact() -> Html<String> {
    let mut options = String::new();
    for (slug, label, _) in SERVICES {
        let _ = write!(
            options,
            "<option value=\"{}\">{}</option>",
            escape_attr(slug),
            escape(label)
        );
    }

    let body = format!(
        r#"<h1>Contact us</h1>
<form id="enquiry-form">
<p><label>Name <input name="name" required></label></p>
<p><label>Email <input name="email" type="email" required></label></p>
<p><label>Phone <input name="phone" required></label></p>
<p><label>Service <select name="service" required>{options}</select></label></p>
<p><label>Message <textarea name="message" rows="5" required></textarea></label></p>
<p><button type="submit">Send enquiry</button></p>
<p class="result" aria-live="polite"></p>
</form>
<h2>Newsletter</h2>
<form id="subscribe-form">
<p><label>Email <input name="email" type="email" required></label>
<button type="submit">Subscribe</button></p>
<p class="result" aria-live="polite"></p>
</form>
<script src="/static/site.js"></script>"#
    );

    layout("Contact", public_nav(), &body)
}

/// Posts the contact and newsletter forms as JSON.
pub const SITE_SCRIPT: &str = r#"(function () {
  function wire(id, url) {
    var form = document.getElementById(id);
    if (!form) { return; }
    var result = form.querySelector('.result');
    form.addEventListener('submit', function (event) {
      event.preventDefault();
      var payload = {};
      new FormData(form).forEach(function (value, key) { payload[key] = value; });
      fetch(url, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload)
      })
        .then(function (res) { return res.json(); })
        .then(function (body) {
          result.className = body.success ? 'result notice' : 'result error';
          result.textContent = body.success ? body.message : body.error;
          if (body.success) { form.reset(); }
        })
        .catch(function () {
          result.className = 'result error';
          result.textContent = 'Something went wrong. Please try again.';
        });
    });
  }
  wire('enquiry-form', '/submit-enquiry');
  wire('subscribe-form', '/subscribe');
})();
"#;
