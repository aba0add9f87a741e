use crate::domain::model::{Price, ScheduleSlot, Service, StaffMember};
use crate::domain::ports::BookingApi;
use crate::utils::error::{BookingError, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct UserRecord {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

impl UserRecord {
    fn display_name(self) -> String {
        [self.first_name, self.username]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct StaffRecord {
    id: u64,
    user: UserRecord,
    #[serde(default)]
    specialization: String,
}

impl From<StaffRecord> for StaffMember {
    fn from(record: StaffRecord) -> Self {
        StaffMember {
            id: record.id,
            name: record.user.display_name(),
            specialization: record.specialization,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScheduleRecord {
    id: u64,
    date: NaiveDate,
    time_slot: String,
}

impl From<ScheduleRecord> for ScheduleSlot {
    fn from(record: ScheduleRecord) -> Self {
        ScheduleSlot {
            id: record.id,
            date: record.date,
            time_slot: record.time_slot,
        }
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct ServiceRecord {
    id: u64,
    name: String,
    #[serde(default)]
    description: String,
    price: Price,
    duration: u32,
    #[serde(default = "default_active")]
    is_active: bool,
}

/// [`BookingApi`] over the backend's JSON endpoints.
pub struct HttpBookingApi {
    client: Client,
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(BookingError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl BookingApi for HttpBookingApi {
    async fn list_services(&self) -> Result<Vec<Service>> {
        let records: Vec<ServiceRecord> = self.get_list("/api/services/", &[]).await?;
        Ok(records
            .into_iter()
            .filter(|record| record.is_active)
            .map(|record| Service {
                id: record.id,
                name: record.name,
                price: record.price,
                duration: record.duration,
                description: Some(record.description).filter(|d| !d.trim().is_empty()),
            })
            .collect())
    }

    async fn list_staff(&self, service_id: u64) -> Result<Vec<StaffMember>> {
        let records: Vec<StaffRecord> = self
            .get_list("/api/staff/", &[("service_id", service_id.to_string())])
            .await?;
        Ok(records.into_iter().map(StaffMember::from).collect())
    }

    async fn list_schedules(&self, staff_id: u64) -> Result<Vec<ScheduleSlot>> {
        let records: Vec<ScheduleRecord> = self
            .get_list("/api/schedules/", &[("staff_id", staff_id.to_string())])
            .await?;
        Ok(records.into_iter().map(ScheduleSlot::from).collect())
    }
}
