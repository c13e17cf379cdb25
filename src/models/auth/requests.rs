use serde::Deserialize;
use ts_rs::TS;

// Login da administração (usuário e senha)
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Manter sessão por mais tempo
    #[serde(default)]
    pub remember_me: bool,
}

// Login do avaliador pelo PIN de 4 dígitos
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/auth.ts")]
pub struct PinLoginRequest {
    #[serde(rename = "PIN", alias = "pin")]
    pub pin: String,
}
