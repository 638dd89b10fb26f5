//! New-naver form submission

use super::capabilities::{Navigator, Notifier};
use super::pipeline::{SubmissionPhase, SubmitAction};
use crate::api::{CreateNaverRequest, Naver, NaverService};
use crate::validation::{Field, Schema, ValidRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub const CREATE_FAILED: &str = "Falha ao tentar cadastrar um naver";
pub const CREATED_TITLE: &str = "Naver criado";
pub const CREATED_MESSAGE: &str = "Naver criado com sucesso";

/// Date layout expected by `POST /navers`
const PAYLOAD_DATE_FORMAT: &str = "%d-%m-%Y";

/// Rules for the new-naver form
pub fn naver_schema() -> Schema {
    Schema::new()
        .field(Field::text("name").required("Nome obrigatório"))
        .field(Field::text("job_role").required("Cargo obrigatório"))
        .field(Field::date("birthdate").required("Data de nascimento. Ex: 00/00/0000"))
        .field(
            Field::date("admission_date").required("Data que entrou na empresa. Ex: 00/00/0000"),
        )
        .field(Field::text("project").required("Campo obrigatório"))
        .field(
            Field::text("url")
                .url("Coloque um link válido")
                .required("Coloque um link válido"),
        )
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("field {0} is not a date")]
    NotADate(&'static str),
}

impl CreateNaverRequest {
    /// Build the request body from an accepted record, reformatting dates
    pub fn from_record(record: &ValidRecord) -> Result<Self, PayloadError> {
        let date = |name: &'static str| {
            record
                .date(name)
                .map(|d| d.format(PAYLOAD_DATE_FORMAT).to_string())
                .ok_or(PayloadError::NotADate(name))
        };

        Ok(Self {
            job_role: record.text("job_role").to_string(),
            birthdate: date("birthdate")?,
            admission_date: date("admission_date")?,
            project: record.text("project").to_string(),
            name: record.text("name").to_string(),
            url: record.text("url").to_string(),
        })
    }
}

/// Creates a naver from the submitted form and announces it
pub struct CreateNaverAction {
    navers: Arc<dyn NaverService>,
    schema: Schema,
}

impl CreateNaverAction {
    pub fn new(navers: Arc<dyn NaverService>) -> Self {
        Self {
            navers,
            schema: naver_schema(),
        }
    }
}

#[async_trait]
impl SubmitAction for CreateNaverAction {
    type Output = Naver;

    fn name(&self) -> &'static str {
        "create_naver"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn remote_phase(&self) -> SubmissionPhase {
        SubmissionPhase::CreatingRecord
    }

    async fn perform(&self, record: &ValidRecord) -> anyhow::Result<Naver> {
        let request = CreateNaverRequest::from_record(record)?;
        self.navers.create_naver(&request).await
    }

    fn on_success<U>(&self, _naver: &Naver, ui: &mut U)
    where
        U: Navigator + Notifier + ?Sized,
    {
        ui.notify(CREATED_TITLE, CREATED_MESSAGE);
    }

    fn failure_message(&self) -> &'static str {
        CREATE_FAILED
    }
}
