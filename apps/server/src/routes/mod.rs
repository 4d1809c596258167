use actix_web::web;

use crate::error::AppError;

mod checks;
mod health;

pub fn routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|error, _request| {
        tracing::debug!("Rejected request body: {error}");
        AppError::Payload(error.to_string()).into()
    });

    cfg.app_data(json_config);
    health::routes(cfg);
    checks::routes(cfg);
}
