use thiserror::Error;

use super::form::{FormValues, CONFIRMATION_FIELD, FORM_NAME_FIELD, HONEYPOT_FIELD};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("confirmation checkbox is not checked")]
    NotConfirmed,
    #[error("network error: {0}")]
    Network(String),
    #[error("submission rejected with status {0}")]
    Rejected(u16),
    #[error("submission timed out after {0} ms")]
    TimedOut(u32),
}

impl SubmitError {
    /// Fixed text shown to the visitor.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::NotConfirmed => {
                "Por favor confirme que la información proporcionada es correcta antes de enviar."
            }
            SubmitError::Network(_) | SubmitError::Rejected(_) | SubmitError::TimedOut(_) => {
                "Hubo un error al enviar el formulario. Por favor intente nuevamente."
            }
        }
    }
}

/// Answers to send, without the bookkeeping fields. Those travel only in
/// the envelope written by [`SubmissionPayload::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    form_name: String,
    honeypot: String,
    answers: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn from_values(values: &FormValues) -> Self {
        let answers = values
            .pairs()
            .filter(|(name, _)| *name != FORM_NAME_FIELD && *name != HONEYPOT_FIELD)
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self {
            form_name: values.get(FORM_NAME_FIELD).unwrap_or_default().to_string(),
            honeypot: values.get(HONEYPOT_FIELD).unwrap_or_default().to_string(),
            answers,
        }
    }

    pub fn answers(&self) -> &[(String, String)] {
        &self.answers
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.answers.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` body: envelope first, then answers.
    pub fn encode(&self) -> String {
        let envelope = [
            (FORM_NAME_FIELD, self.form_name.as_str()),
            (HONEYPOT_FIELD, self.honeypot.as_str()),
        ];
        envelope
            .into_iter()
            .chain(self.answers.iter().map(|(n, v)| (n.as_str(), v.as_str())))
            .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// Form encoding writes spaces as '+'.
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

/// Sends an encoded form body to the page's origin.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_form(&self, body: String) -> Result<(), SubmitError>;
}

/// Rejects unconfirmed forms before any request; otherwise posts every answer once.
pub async fn submit<T: FormTransport>(values: &FormValues, transport: &T) -> Result<(), SubmitError> {
    if !values.has_selection(CONFIRMATION_FIELD) {
        return Err(SubmitError::NotConfirmed);
    }
    let payload = SubmissionPayload::from_values(values);
    log::debug!("Posting {} answers", payload.answers().len());
    transport.post_form(payload.encode()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::FormDefinition;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct RecordingTransport {
        bodies: RefCell<Vec<String>>,
        outcome: Result<(), SubmitError>,
    }

    impl RecordingTransport {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self { bodies: RefCell::new(Vec::new()), outcome }
        }
    }

    impl FormTransport for RecordingTransport {
        async fn post_form(&self, body: String) -> Result<(), SubmitError> {
            self.bodies.borrow_mut().push(body);
            self.outcome.clone()
        }
    }

    fn filled_values() -> FormValues {
        let mut values = FormValues::default();
        values.set(FORM_NAME_FIELD, "diagnostico");
        values.set(HONEYPOT_FIELD, "");
        values.set("nombre", "Ana");
        values.set("organizacion", "Acme");
        values.set("email", "a@b.com");
        values
    }

    #[test]
    fn unconfirmed_submission_never_reaches_the_network() {
        let transport = RecordingTransport::new(Ok(()));
        let result = block_on(submit(&filled_values(), &transport));
        assert_eq!(result, Err(SubmitError::NotConfirmed));
        assert!(transport.bodies.borrow().is_empty());
    }

    #[test]
    fn confirmed_submission_posts_once() {
        let mut values = filled_values();
        values.set_checked(CONFIRMATION_FIELD, "on", true);
        let transport = RecordingTransport::new(Ok(()));

        assert_eq!(block_on(submit(&values, &transport)), Ok(()));
        assert_eq!(
            transport.bodies.borrow().as_slice(),
            ["form-name=diagnostico&bot-field=&nombre=Ana&organizacion=Acme&email=a%40b.com&confirmacion=on"]
        );
    }

    #[test]
    fn transport_failure_is_returned_unchanged() {
        let mut values = filled_values();
        values.set_checked(CONFIRMATION_FIELD, "on", true);
        let transport = RecordingTransport::new(Err(SubmitError::Rejected(500)));

        assert_eq!(block_on(submit(&values, &transport)), Err(SubmitError::Rejected(500)));
        assert_eq!(transport.bodies.borrow().len(), 1);
    }

    #[test]
    fn payload_excludes_bookkeeping_and_encodes_text() {
        let form = FormDefinition::diagnostic();
        let mut values = FormValues::for_form(&form, "diagnostico");
        values.set("desafio", "Decidir rápido & bien");
        values.set("sector", "Tercer sector");

        let payload = SubmissionPayload::from_values(&values);
        assert!(payload.get(FORM_NAME_FIELD).is_none());
        assert!(payload.get(HONEYPOT_FIELD).is_none());
        assert_eq!(payload.get("sector"), Some("Tercer sector"));

        let body = payload.encode();
        assert!(body.starts_with("form-name=diagnostico&bot-field=&nombre=&"));
        assert!(body.contains("sector=Tercer+sector"));
        assert!(body.contains("desafio=Decidir+r%C3%A1pido+%26+bien"));
    }

    #[test]
    fn every_failure_has_a_visitor_message() {
        for err in [
            SubmitError::Network("offline".into()),
            SubmitError::Rejected(404),
            SubmitError::TimedOut(15_000),
        ] {
            assert!(err.user_message().starts_with("Hubo un error"));
        }
    }
}
