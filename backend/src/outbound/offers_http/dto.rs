//! DTOs for decoding the remote job board payload.

use serde::Deserialize;

use crate::domain::RemoteOffer;

/// One element of the `GET /offers` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct JobOfferDto {
    #[serde(default)]
    pub(super) position: String,
    #[serde(default)]
    pub(super) company_name: String,
    #[serde(default)]
    pub(super) salary: String,
    pub(super) offer_url: String,
}

impl From<JobOfferDto> for RemoteOffer {
    fn from(dto: JobOfferDto) -> Self {
        Self {
            position: dto.position,
            company_name: dto.company_name,
            salary: dto.salary,
            offer_url: dto.offer_url,
        }
    }
}
