//! Outbound calls to the pet service.
//!
//! [`PetApi`] is the seam the controller talks through; [`ApiClient`] is the
//! HTTP implementation. Responses and errors are passed through as-is, with
//! no retries or caching.

use async_trait::async_trait;
use common::{AnimalType, DeletePetResponse, NewAnimalType, NewPet, Pet, PetPatch, UpdatePetResponse};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Api { status: u16, message: Option<String> },
}

impl GatewayError {
    /// The server's own error text when it sent one, otherwise the transport or status error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[async_trait]
pub trait PetApi: Send + Sync {
    async fn list_pets(&self) -> Result<Vec<Pet>, GatewayError>;

    async fn create_pet(&self, pet: &NewPet) -> Result<Pet, GatewayError>;

    async fn update_pet(&self, id: i32, patch: &PetPatch)
    -> Result<UpdatePetResponse, GatewayError>;

    async fn delete_pet(&self, id: i32) -> Result<DeletePetResponse, GatewayError>;

    async fn list_animal_types(&self) -> Result<Vec<AnimalType>, GatewayError>;

    async fn create_animal_type(&self, name: &str) -> Result<AnimalType, GatewayError>;
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

/// `reqwest` client bound to the service base URL, e.g. `http://localhost:8000`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<ErrorPayload>()
            .await
            .ok()
            .map(|payload| payload.error);
        Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PetApi for ApiClient {
    async fn list_pets(&self) -> Result<Vec<Pet>, GatewayError> {
        self.send(self.client.get(self.url("/pets"))).await
    }

    async fn create_pet(&self, pet: &NewPet) -> Result<Pet, GatewayError> {
        self.send(self.client.post(self.url("/pets")).json(pet)).await
    }

    async fn update_pet(
        &self,
        id: i32,
        patch: &PetPatch,
    ) -> Result<UpdatePetResponse, GatewayError> {
        self.send(self.client.put(self.url(&format!("/pets/{id}"))).json(patch))
            .await
    }

    async fn delete_pet(&self, id: i32) -> Result<DeletePetResponse, GatewayError> {
        self.send(self.client.delete(self.url(&format!("/pets/{id}"))))
            .await
    }

    async fn list_animal_types(&self) -> Result<Vec<AnimalType>, GatewayError> {
        self.send(self.client.get(self.url("/animal-types"))).await
    }

    async fn create_animal_type(&self, name: &str) -> Result<AnimalType, GatewayError> {
        let body = NewAnimalType {
            name: name.to_string(),
        };
        self.send(self.client.post(self.url("/animal-types")).json(&body))
            .await
    }
}
