use serde::Serialize;

#[derive(Serialize, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Clone)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: IndexEndpoints,
}

#[derive(Serialize, Clone)]
pub struct IndexEndpoints {
    pub health: String,
    pub user: String,
}
