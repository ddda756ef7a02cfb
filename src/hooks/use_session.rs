use yew::prelude::*;

use crate::models::Session;

/// Handle compartido sobre el triple de sesión persistido.
pub struct UseSessionHandle {
    pub session: UseStateHandle<Option<Session>>,
    /// El flujo de login ya persistió el triple; esto solo publica el estado.
    pub set_session: Callback<Session>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let session = use_state(|| None::<Session>);

    // Restaurar la sesión persistida al montar
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if let Some(stored) = Session::load() {
                log::info!(
                    "📋 Session restored: user {} ({})",
                    stored.user_id,
                    stored.role.as_str()
                );
                session.set(Some(stored));
            }
            || ()
        });
    }

    let set_session = {
        let session = session.clone();
        Callback::from(move |new_session: Session| {
            session.set(Some(new_session));
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            Session::clear();
            session.set(None);
        })
    };

    UseSessionHandle {
        session,
        set_session,
        logout,
    }
}
