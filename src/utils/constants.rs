/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: rutas relativas al mismo origen (por defecto)
/// - Producción: https://api.<dominio> via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Claves de localStorage del triple de sesión.
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";
pub const STORAGE_KEY_USER_ID: &str = "user_id";
pub const STORAGE_KEY_ROLE: &str = "role";

/// Delay antes de cambiar de pantalla tras un login correcto (ms).
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1_500;

/// Delay antes de volver al login tras registro correcto o sesión expirada (ms).
pub const AUTH_REDIRECT_DELAY_MS: u32 = 2_000;

/// Tiempo que un mensaje de éxito de formulario permanece visible (ms).
pub const FORM_MESSAGE_CLEAR_MS: u32 = 3_000;
