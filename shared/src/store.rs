//! Store Info Model

use serde::{Deserialize, Serialize};

/// Store information (singleton)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub tagline: String,
    /// WhatsApp number in international format, digits only
    pub whatsapp_number: String,
    /// First line of the order message
    pub greeting: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "Mãos de Fada Cake".to_string(),
            tagline: "Delícias artesanais para adoçar seu dia".to_string(),
            whatsapp_number: "5567996184308".to_string(),
            greeting: "Olá, gostaria de fazer o seguinte pedido:".to_string(),
        }
    }
}
