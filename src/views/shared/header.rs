use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
    pub user_label: String,
    pub on_logout: Callback<()>,
}

#[function_component(AppHeader)]
pub fn app_header(props: &AppHeaderProps) -> Html {
    let onclick = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <header class="app-header">
            <h1>{"Shipment Tracker"}</h1>
            <div class="user-info">
                <span>{&props.user_label}</span>
                <button class="btn-logout" {onclick}>{"Log out"}</button>
            </div>
        </header>
    }
}
