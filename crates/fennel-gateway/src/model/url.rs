use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CreateUrlRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct CreateUrlResponse {
    pub shortened_url: String,
}
