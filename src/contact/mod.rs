//! Contact form model, validation and submission.

#[cfg(feature = "ssr")]
pub mod delivery;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use leptos::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::estimator::group_thousands;

/// Service pre-selected when arriving from the catalogue estimator.
pub const CATALOGUE_SERVICE: &str = "Plan Architectural (Catalogue)";

pub static SERVICE_CHOICES: &[&str] = &[
    "Génie Civil",
    "Génie Électrique",
    "Architecture",
    "Permis de Bâtir",
    "Topographie",
    "Rénovation & Réhabilitation",
    "Froid & Climatisation",
    "Immobilier",
    CATALOGUE_SERVICE,
    "Autre",
];

/// `(value, label)` pairs for the budget select.
pub static BUDGET_CHOICES: &[(&str, &str)] = &[
    ("< 5M", "Moins de 5 Millions"),
    ("5-15M", "5 à 15 Millions"),
    ("15-30M", "15 à 30 Millions"),
    ("30-50M", "30 à 50 Millions"),
    ("50-100M", "50 à 100 Millions"),
    ("> 100M", "Plus de 100 Millions"),
];

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Subject,
    Budget,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub subject: String,
    pub budget: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::Subject => &self.subject,
            ContactField::Budget => &self.budget,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Service => &mut self.service,
            ContactField::Subject => &mut self.subject,
            ContactField::Budget => &mut self.budget,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Form state for a visitor coming from the plan estimator.
    ///
    /// Without a plan in the query the form starts empty.
    #[must_use]
    pub fn prefilled(query: &PlanQuery) -> Self {
        let Some(plan) = query.plan.as_deref().filter(|p| !p.is_empty()) else {
            return Self::default();
        };
        let surface = query.surface.as_deref().unwrap_or_default();
        let total = query.total.as_deref().unwrap_or_default();
        let total = total
            .parse::<u64>()
            .map_or_else(|_| total.to_string(), group_thousands);

        Self {
            service: CATALOGUE_SERVICE.to_string(),
            subject: format!("Plan: {plan} - {surface}m²"),
            message: format!(
                "Je suis intéressé(e) par le plan \"{plan}\" ({surface}m²). Estimation: {total} FCFA.\n\nVeuillez me contacter pour finaliser les détails."
            ),
            ..Self::default()
        }
    }
}

/// Query parameters the estimator appends to the contact link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanQuery {
    pub plan: Option<String>,
    pub surface: Option<String>,
    pub total: Option<String>,
}

/// Validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: ContactField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.values().copied().collect();
        f.write_str(&messages.join(", "))
    }
}

/// Checks the required fields.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate(form: &ContactForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.insert(ContactField::Name, "Le nom est requis");
    }
    if form.email.trim().is_empty() || !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(ContactField::Email, "Email invalide");
    }
    if form.phone.trim().is_empty() {
        errors.insert(ContactField::Phone, "Le téléphone est requis");
    }
    if form.message.trim().is_empty() {
        errors.insert(ContactField::Message, "Le message est requis");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returned to the browser once a message has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
    pub name: String,
}

#[server]
pub async fn submit_contact(form: ContactForm) -> Result<SubmissionReceipt, ServerFnError> {
    use crate::contact::delivery::{ContactError, SharedSink, Submission};

    let sink = use_context::<SharedSink>()
        .ok_or_else(|| ServerFnError::new("contact delivery is not configured"))?;

    let submission = Submission::accept(form).map_err(|e| {
        tracing::info!(error = %e, "rejected contact submission");
        match e {
            ContactError::Invalid(errors) => ServerFnError::new(errors),
            other => ServerFnError::new(other),
        }
    })?;
    let receipt = submission.receipt();

    sink.deliver(&submission).await.map_err(|e: ContactError| {
        tracing::error!(error = %e, reference = %submission.reference, "contact delivery failed");
        ServerFnError::new("Impossible d'envoyer le message pour le moment")
    })?;

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jean Dupont".to_string(),
            email: "jean@exemple.com".to_string(),
            phone: "+237 690 00 00 00".to_string(),
            message: "Construction d'une villa à Odza".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate(&valid_form()).is_ok());
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let errors = validate(&ContactForm::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(ContactField::Name), Some("Le nom est requis"));
        assert_eq!(errors.get(ContactField::Email), Some("Email invalide"));
        assert_eq!(errors.get(ContactField::Phone), Some("Le téléphone est requis"));
        assert_eq!(errors.get(ContactField::Message), Some("Le message est requis"));
        assert_eq!(errors.get(ContactField::Subject), None);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let form = ContactForm {
            name: "   ".to_string(),
            message: "\n\t".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get(ContactField::Name).is_some());
        assert!(errors.get(ContactField::Message).is_some());
    }

    #[test]
    fn malformed_emails_rejected() {
        for email in ["jean", "jean@exemple", "@.", "jean exemple.com"] {
            let form = ContactForm {
                email: email.to_string(),
                ..valid_form()
            };
            let errors = validate(&form).unwrap_err();
            assert_eq!(errors.get(ContactField::Email), Some("Email invalide"), "{email}");
        }
    }

    #[test]
    fn clearing_a_field_error() {
        let mut errors = validate(&ContactForm::default()).unwrap_err();
        errors.clear(ContactField::Name);
        assert_eq!(errors.get(ContactField::Name), None);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn prefilled_from_estimator_query() {
        let query = PlanQuery {
            plan: Some("Villa Émeraude".to_string()),
            surface: Some("170".to_string()),
            total: Some("28000000".to_string()),
        };
        let form = ContactForm::prefilled(&query);

        assert_eq!(form.service, CATALOGUE_SERVICE);
        assert_eq!(form.subject, "Plan: Villa Émeraude - 170m²");
        assert!(form
            .message
            .starts_with("Je suis intéressé(e) par le plan \"Villa Émeraude\" (170m²)."));
        assert!(form.message.contains("28\u{202f}000\u{202f}000 FCFA"));
        assert!(form.name.is_empty());
    }

    #[test]
    fn prefilled_without_plan_is_empty() {
        assert_eq!(ContactForm::prefilled(&PlanQuery::default()), ContactForm::default());
    }

    #[test]
    fn set_and_get_round_through_fields() {
        let mut form = ContactForm::default();
        form.set(ContactField::Budget, "5-15M".to_string());
        assert_eq!(form.get(ContactField::Budget), "5-15M");
        assert_eq!(form.budget, "5-15M");
    }

    #[test]
    fn catalogue_service_is_a_choice() {
        assert!(SERVICE_CHOICES.contains(&CATALOGUE_SERVICE));
        assert_eq!(SERVICE_CHOICES.last(), Some(&"Autre"));
    }
}

#[cfg(all(test, feature = "ssr"))]
mod server_tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::contact::delivery::{ContactError, ContactSink, SharedSink, Submission};

    /// Keeps the reference of every delivered submission.
    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<Uuid>>);

    #[async_trait]
    impl ContactSink for RecordingSink {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn deliver(&self, submission: &Submission) -> Result<(), ContactError> {
            self.0.lock().unwrap().push(submission.reference);
            Ok(())
        }
    }

    fn with_sink(sink: Option<SharedSink>) -> Owner {
        let owner = Owner::new();
        owner.set();
        if let Some(sink) = sink {
            provide_context(sink);
        }
        owner
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: " Paul Essomba ".to_string(),
            email: "paul@exemple.cm".to_string(),
            phone: "+237 699 11 22 33".to_string(),
            message: "Étude de sol pour un R+2".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn invalid_form_returns_field_messages() {
        let sink = Arc::new(RecordingSink::default());
        let _owner = with_sink(Some(sink.clone()));

        let err = tokio_test::block_on(submit_contact(ContactForm::default())).unwrap_err();

        assert!(matches!(
            err,
            ServerFnError::ServerError(ref message)
                if message == "Le nom est requis, Email invalide, Le téléphone est requis, Le message est requis"
        ));
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[test]
    fn valid_form_is_delivered_with_reference() {
        let sink = Arc::new(RecordingSink::default());
        let _owner = with_sink(Some(sink.clone()));

        let receipt = tokio_test::block_on(submit_contact(valid_form())).unwrap();

        assert_eq!(receipt.name, "Paul Essomba");
        let reference: Uuid = receipt.reference.parse().unwrap();
        assert_eq!(*sink.0.lock().unwrap(), vec![reference]);
    }

    #[test]
    fn missing_sink_fails_cleanly() {
        let _owner = with_sink(None);

        let err = tokio_test::block_on(submit_contact(valid_form())).unwrap_err();

        assert!(matches!(
            err,
            ServerFnError::ServerError(ref message) if message == "contact delivery is not configured"
        ));
    }
}
