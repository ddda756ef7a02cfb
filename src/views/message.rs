use yew::prelude::*;

/// Línea de estado inline bajo un formulario.
#[derive(Clone, PartialEq)]
pub struct FormMessage {
    pub text: String,
    pub is_error: bool,
}

impl FormMessage {
    pub fn error(text: impl Into<String>) -> FormMessage {
        FormMessage {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn success(text: impl Into<String>) -> FormMessage {
        FormMessage {
            text: text.into(),
            is_error: false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageLineProps {
    pub message: Option<FormMessage>,
}

#[function_component(MessageLine)]
pub fn message_line(props: &MessageLineProps) -> Html {
    match &props.message {
        Some(message) => {
            let class = if message.is_error { "error" } else { "success" };
            html! { <p class={class}>{&message.text}</p> }
        }
        None => html! {},
    }
}
