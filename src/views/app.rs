// ============================================================================
// APP VIEW - COMPONENTE PRINCIPAL
// ============================================================================
// Sin router: la pantalla activa sale del triple de sesión (rol) y, para
// usuarios sin sesión, de un estado local login/registro/contacto.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::Role;
use crate::views::auth::{LoginView, RegisterView};
use crate::views::client::ClientDashboard;
use crate::views::contact::ContactView;
use crate::views::employee::EmployeeDashboard;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    Register,
    Contact,
}

#[function_component(App)]
pub fn app() -> Html {
    let session_handle = use_session();
    let screen = use_state(|| Screen::Login);

    let on_logout = {
        let logout = session_handle.logout.clone();
        let screen = screen.clone();
        Callback::from(move |_| {
            screen.set(Screen::Login);
            logout.emit(());
        })
    };

    let show_screen = |wanted: Screen| {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(wanted))
    };

    match &*session_handle.session {
        Some(session) => {
            let session = session.clone();
            match session.role {
                Role::Employee => html! {
                    <EmployeeDashboard {session} {on_logout} />
                },
                Role::Client => html! {
                    <ClientDashboard {session} {on_logout} />
                },
            }
        }
        None => match *screen {
            Screen::Login => html! {
                <LoginView
                    on_logged_in={session_handle.set_session.clone()}
                    on_show_register={show_screen(Screen::Register)}
                    on_show_contact={show_screen(Screen::Contact)}
                />
            },
            Screen::Register => html! {
                <RegisterView on_back_to_login={show_screen(Screen::Login)} />
            },
            Screen::Contact => html! {
                <ContactView on_back={show_screen(Screen::Login)} />
            },
        },
    }
}
