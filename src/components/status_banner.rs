// src/components/status_banner.rs
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const AUTO_HIDE_MS: u32 = 6_000;

#[derive(Clone, Debug, PartialEq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub message: StatusMessage,
    pub on_dismiss: Callback<()>,
}

/// Dismissible outcome banner. Hides itself after a few seconds, but the
/// close button is always there for impatient users.
#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |_| {
            let timeout = Timeout::new(AUTO_HIDE_MS, move || on_dismiss.emit(()));
            move || drop(timeout)
        });
    }

    let class = match props.message.severity {
        Severity::Success => "banner banner-success mb-3",
        Severity::Error => "banner banner-error mb-3",
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div {class}>
            <span>{ &props.message.text }</span>
            <button class="banner-dismiss" {onclick}>{ "✕" }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_the_right_severity() {
        let ok = StatusMessage::success("Landing page created");
        assert_eq!(ok.severity, Severity::Success);
        assert_eq!(ok.text, "Landing page created");

        let bad = StatusMessage::error("Something went wrong");
        assert_eq!(bad.severity, Severity::Error);
    }
}
