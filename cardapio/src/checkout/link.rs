//! WhatsApp deep link
//!
//! `https://api.whatsapp.com/send?phone=<number>&text=<encoded message>`,
//! opened by the client in a new browsing context.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Same escape set as JavaScript's `encodeURIComponent`: everything but
/// alphanumerics and `- _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the send link for a pre-filled message to `phone`
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://api.whatsapp.com/send?phone={phone}&text={}",
        utf8_percent_encode(message, URI_COMPONENT)
    )
}
