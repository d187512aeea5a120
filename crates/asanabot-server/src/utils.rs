//! Server utilities.

use actix_web::HttpRequest;
use asanabot_config::Config;

/// Base URL used to build callback and webhook URLs.
///
/// Uses the configured public URL when set, else the request scheme and host.
pub(crate) fn base_url(config: &Config, req: &HttpRequest) -> String {
    let public_url = config.server.public_url.trim_end_matches('/');
    if public_url.is_empty() {
        let info = req.connection_info();
        format!("{}://{}", info.scheme(), info.host())
    } else {
        public_url.to_string()
    }
}
