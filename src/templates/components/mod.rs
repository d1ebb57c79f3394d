use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Outcome banner shown above a form.
#[derive(Debug, Clone, PartialEq)]
pub enum Flash {
    Success(String),
    Danger(String),
}

pub fn flash_message(flash: &Flash) -> Markup {
    let (class, message) = match flash {
        Flash::Success(msg) => ("flash flash-success", msg),
        Flash::Danger(msg) => ("flash flash-danger", msg),
    };
    html! {
        div class=(class) role="alert" { (message) }
    }
}
