use serde::Serialize;

#[derive(Serialize)]
pub struct RequestBody {
    pub model: String,
    pub messages: Vec<crate::models::Message>,
    pub stream: bool,
}
