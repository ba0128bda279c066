use std::future::Future;
use std::pin::Pin;
use std::task::Poll;

use contact_form::form::form_model::{ControlKind, FormControl, HtmlForm};

/// Poll a future exactly once. `Some` if it completed.
pub async fn poll_once<F: Future + Unpin>(fut: &mut F) -> Option<F::Output> {
    std::future::poll_fn(|cx| {
        Poll::Ready(match Pin::new(&mut *fut).poll(cx) {
            Poll::Ready(value) => Some(value),
            Poll::Pending => None,
        })
    })
    .await
}

/// The contact form from the site, already filled in by a visitor.
pub fn filled_contact_form(action: &str) -> HtmlForm {
    HtmlForm::with_controls(
        "contactForm",
        action,
        vec![
            FormControl::text("name").with_input("Jane Doe"),
            FormControl::new("email", ControlKind::Email).with_input("jane@example.com"),
            FormControl::new("phone", ControlKind::Tel),
            FormControl::new("message", ControlKind::Textarea).with_input("Hello there"),
            FormControl::new("send", ControlKind::Submit).with_default("Send"),
        ],
    )
}
