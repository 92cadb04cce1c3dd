use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "button button--primary",
            Self::Secondary => "button button--secondary",
            Self::Danger => "button button--danger",
        }
    }
}

/// Plain button for use inside forms.
///
/// Renders `type="button"` unless `submit` is set, so it never submits the
/// surrounding form by accident.
#[component]
pub fn ActionButton(
    #[prop(optional)]
    variant: ButtonVariant,
    /// Render as the form's submit button
    #[prop(optional)]
    submit: bool,
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=variant.class()
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
