//! Locale cookie configuration

use std::time::Duration;

use platform::cookie::CookieConfig;

use crate::hub::CLIENT_COOKIE;
use crate::locale::LOCALE_COOKIE;

#[derive(Debug, Clone)]
pub struct I18nConfig {
    /// `locale` cookie (script-readable)
    pub locale_cookie: CookieConfig,
    /// `locale_client` cookie (HttpOnly)
    pub client_cookie: CookieConfig,
    /// Keep-alive interval of the event stream
    pub keep_alive: Duration,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale_cookie: CookieConfig::preference(LOCALE_COOKIE),
            client_cookie: CookieConfig {
                http_only: true,
                ..CookieConfig::preference(CLIENT_COOKIE)
            },
            keep_alive: Duration::from_secs(15),
        }
    }
}

impl I18nConfig {
    /// Plain-HTTP cookies for local development
    pub fn development() -> Self {
        Self::default().with_cookie_secure(false)
    }

    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.locale_cookie.secure = secure;
        self.client_cookie.secure = secure;
        self
    }
}
